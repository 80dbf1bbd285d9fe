//! Data records and the (mocked) backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no server. `mock` holds the seeded records, `feed` simulates
//! delayed fetches, and `auth` puts login/logout behind swappable traits.

pub mod auth;
pub mod feed;
pub mod mock;
pub mod types;
