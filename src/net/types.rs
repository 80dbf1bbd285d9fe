//! Shared data records for the client/mock-backend boundary.
//!
//! DESIGN
//! ======
//! These types are what a real backend would serialize, so they derive serde
//! even though the current data source is the in-memory mock in `net::mock`.
//! Timestamps serialize as RFC 3339 (ISO-8601) strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Avatar shown for messages sent by the current user.
pub const SELF_AVATAR: &str = "/assets/avatars/avatar1.svg";
/// Avatar used when a sender cannot be matched to a conversation.
pub const PLACEHOLDER_AVATAR: &str = "/assets/avatars/avatar2.svg";
/// Sender label used for outbound messages.
pub const SELF_SENDER: &str = "You";

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Login form payload handed to the auth backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Result of a successful login: the user plus the opaque token to persist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Summary row for a chat thread with one other participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier (e.g. `"conv_001"`).
    pub id: String,
    /// Participant display name.
    pub name: String,
    /// Participant handle, unique, used in `/chats/:username`.
    pub username: String,
    /// Preview of the last message.
    pub text: String,
    /// Day of the last activity.
    pub date: Date,
    /// Whether the thread has activity the user has not seen.
    pub unread: bool,
    /// Avatar asset path.
    pub avatar: String,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position-derived identifier, unique within its conversation.
    pub id: u32,
    /// Sender label; [`SELF_SENDER`] for outbound messages.
    pub sender: String,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Whether the current user sent this message.
    pub is_sent: bool,
    pub avatar: String,
}

/// Extended funding figures carried by connection-request listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundingDetails {
    pub funding_goal: u64,
    pub min_investment: u64,
    /// Equity offered, in percent.
    pub equity_percent: f64,
    /// Projected return on investment, in percent.
    pub projected_roi: f64,
    pub company_size: u32,
    pub years_in_operation: u32,
    pub founders: String,
    #[serde(default)]
    pub traction: Vec<String>,
}

/// An investment listing shown on search, matches and portfolio pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    /// Free-form `"Region, Country"` string.
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Total capital sought; the field investment-range filters compare against.
    pub total_required: u64,
    pub min_per_investor: u64,
    /// Funding stage badge (e.g. `"Executive"`, `"Seed"`).
    pub badge_text: String,
    pub industry: String,
    pub funding_type: String,
    #[serde(default)]
    pub details: Option<FundingDetails>,
}

/// Review status of an incoming connection request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A startup asking the investor to connect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub opportunity: Opportunity,
    #[serde(with = "time::serde::rfc3339")]
    pub request_date: OffsetDateTime,
    pub status: RequestStatus,
}

/// Category of a notification, used for its icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Status,
    Message,
    Alert,
}

/// A notification entry on the notifications page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub read: bool,
}

/// A post in the investor news feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: String,
    pub user_name: String,
    pub user_initial: String,
    #[serde(with = "time::serde::rfc3339")]
    pub posted_at: OffsetDateTime,
    pub main_text: String,
    #[serde(default)]
    pub side_text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
