//! Small helpers with no reactive state.
//!
//! `storage` wraps browser local storage and degrades to a no-op natively;
//! `clock` formats timestamps for display.

pub mod clock;
pub mod storage;
