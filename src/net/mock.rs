//! Hardcoded records standing in for a backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page that shows "fetched" data reads it from here, either directly
//! (chat, search, matches, portfolio) or through the simulated fetches in
//! `net::feed` (notifications, news feed).

use std::collections::HashMap;

use time::macros::{date, datetime};

use super::types::{
    ConnectionRequest, Conversation, FundingDetails, Message, NewsPost, Notification, NotificationKind, Opportunity,
    PLACEHOLDER_AVATAR, RequestStatus, SELF_AVATAR, SELF_SENDER,
};

const AVATAR_3: &str = "/assets/avatars/avatar3.svg";

fn conversation(id: &str, name: &str, username: &str, text: &str, date: time::Date, unread: bool, avatar: &str) -> Conversation {
    Conversation {
        id: id.to_owned(),
        name: name.to_owned(),
        username: username.to_owned(),
        text: text.to_owned(),
        date,
        unread,
        avatar: avatar.to_owned(),
    }
}

fn inbound(id: u32, sender: &str, text: &str, timestamp: time::OffsetDateTime, avatar: &str) -> Message {
    Message { id, sender: sender.to_owned(), text: text.to_owned(), timestamp, is_sent: false, avatar: avatar.to_owned() }
}

fn outbound(id: u32, text: &str, timestamp: time::OffsetDateTime) -> Message {
    Message {
        id,
        sender: SELF_SENDER.to_owned(),
        text: text.to_owned(),
        timestamp,
        is_sent: true,
        avatar: SELF_AVATAR.to_owned(),
    }
}

/// Conversation list shown on `/chats`.
pub fn conversations() -> Vec<Conversation> {
    vec![
        conversation(
            "conv_001",
            "Mohamed G.",
            "mohamedg",
            "Let's discuss the project timeline.",
            date!(2025-06-05),
            false,
            PLACEHOLDER_AVATAR,
        ),
        conversation(
            "conv_002",
            "Jane Smith",
            "janesmith",
            "Can we review the funding details?",
            date!(2025-06-04),
            true,
            AVATAR_3,
        ),
        conversation(
            "conv_003",
            "Alex Johnson",
            "alexjohnson",
            "I have some ideas for the pitch deck.",
            date!(2025-06-03),
            false,
            AVATAR_3,
        ),
        conversation(
            "conv_004",
            "Sarah Lee",
            "sarahlee",
            "Looking forward to our meeting!",
            date!(2025-06-02),
            true,
            PLACEHOLDER_AVATAR,
        ),
    ]
}

/// Message history keyed by conversation id.
pub fn conversation_messages() -> HashMap<String, Vec<Message>> {
    let mut out = HashMap::new();
    out.insert(
        "conv_001".to_owned(),
        vec![
            inbound(1, "Mohamed G.", "Hey! How's it going?", datetime!(2025-06-05 14:50 UTC), PLACEHOLDER_AVATAR),
            outbound(2, "Good, thanks! How about you?", datetime!(2025-06-05 14:51 UTC)),
            inbound(
                3,
                "Mohamed G.",
                "Let's discuss the project timeline.",
                datetime!(2025-06-05 14:52 UTC),
                PLACEHOLDER_AVATAR,
            ),
        ],
    );
    out.insert(
        "conv_002".to_owned(),
        vec![
            inbound(1, "Jane Smith", "Hi! Can we review the funding details?", datetime!(2025-06-04 10:30 UTC), AVATAR_3),
            outbound(2, "Sure, let's set up a time.", datetime!(2025-06-04 10:31 UTC)),
        ],
    );
    out.insert(
        "conv_003".to_owned(),
        vec![
            inbound(1, "Alex Johnson", "I have some ideas for the pitch deck.", datetime!(2025-06-03 14:30 UTC), AVATAR_3),
            outbound(2, "Great! Send them over.", datetime!(2025-06-03 14:31 UTC)),
        ],
    );
    out.insert(
        "conv_004".to_owned(),
        vec![inbound(
            1,
            "Sarah Lee",
            "Looking forward to our meeting!",
            datetime!(2025-06-02 16:30 UTC),
            PLACEHOLDER_AVATAR,
        )],
    );
    out
}

#[allow(clippy::too_many_arguments)]
fn opportunity(
    id: &str,
    title: &str,
    location: &str,
    description: &str,
    highlights: &[&str],
    total_required: u64,
    min_per_investor: u64,
    industry: &str,
    funding_type: &str,
) -> Opportunity {
    Opportunity {
        id: id.to_owned(),
        title: title.to_owned(),
        location: location.to_owned(),
        description: description.to_owned(),
        highlights: highlights.iter().map(|h| (*h).to_owned()).collect(),
        total_required,
        min_per_investor,
        badge_text: "Executive".to_owned(),
        industry: industry.to_owned(),
        funding_type: funding_type.to_owned(),
        details: None,
    }
}

/// Listings backing search, matches and the portfolio investments tab.
pub fn opportunities() -> Vec<Opportunity> {
    vec![
        opportunity(
            "1",
            "Exclusive Real Estate Fund",
            "Bayern, Germany",
            "A premium real estate investment opportunity in Bavaria.",
            &["High-yield commercial properties.", "Stable rental income.", "Experienced management team."],
            2_100_000,
            150_000,
            "real estate",
            "series a",
        ),
        opportunity(
            "2",
            "Organic Craft Cocktails",
            "Toronto, Canada",
            "A startup producing organic, artisanal cocktails.",
            &["Sustainable ingredients.", "Award-winning recipes.", "Scalable distribution."],
            1_400_000,
            35_000,
            "food",
            "seed",
        ),
        opportunity(
            "3",
            "Property Investment Trust",
            "Bayern, Germany",
            "A diversified real estate investment trust.",
            &["Mixed-use properties.", "High occupancy rates.", "Tax-efficient structure."],
            2_100_000,
            150_000,
            "real estate",
            "series a",
        ),
        opportunity(
            "4",
            "Food SME Accelerator SEA",
            "Singapore",
            "Supporting food SMEs in Southeast Asia.",
            &["High-growth food sector.", "Regional expansion support.", "Impact-driven model."],
            375_000,
            55_000,
            "food",
            "seed",
        ),
        opportunity(
            "5",
            "IO-Bean Tech",
            "Vienna, Austria",
            "A tech startup focused on IoT solutions.",
            &["Innovative IoT platform.", "Enterprise-grade solutions.", "Global market potential."],
            1_100_000,
            200_000,
            "tech",
            "seed",
        ),
    ]
}

/// Incoming connection requests for the portfolio page.
pub fn connection_requests() -> Vec<ConnectionRequest> {
    vec![
        ConnectionRequest {
            opportunity: Opportunity {
                id: "req-1".to_owned(),
                title: "Tech Startup A".to_owned(),
                location: "Berlin, Germany".to_owned(),
                description: "A tech startup specializing in AI solutions.".to_owned(),
                highlights: vec![
                    "AI-driven healthcare solutions.".to_owned(),
                    "Experienced tech team.".to_owned(),
                    "Secured $200K pre-seed.".to_owned(),
                ],
                total_required: 500_000,
                min_per_investor: 50_000,
                badge_text: "Seed".to_owned(),
                industry: "Technology".to_owned(),
                funding_type: "seed".to_owned(),
                details: Some(FundingDetails {
                    funding_goal: 500_000,
                    min_investment: 50_000,
                    equity_percent: 10.0,
                    projected_roi: 15.0,
                    company_size: 12,
                    years_in_operation: 2,
                    founders: "Dr. Anna Schmidt, Mark Weber".to_owned(),
                    traction: vec![
                        "Annual revenue: $100K".to_owned(),
                        "5,000 active users".to_owned(),
                        "Partnerships with 3 tech firms".to_owned(),
                    ],
                }),
            },
            request_date: datetime!(2025-05-28 00:00 UTC),
            status: RequestStatus::Pending,
        },
        ConnectionRequest {
            opportunity: Opportunity {
                id: "req-2".to_owned(),
                title: "Green Energy B".to_owned(),
                location: "London, UK".to_owned(),
                description: "A solar panel innovation project.".to_owned(),
                highlights: vec![
                    "20% more efficient solar tech.".to_owned(),
                    "Government-backed pilots.".to_owned(),
                    "12% ROI projected.".to_owned(),
                ],
                total_required: 750_000,
                min_per_investor: 100_000,
                badge_text: "Series A".to_owned(),
                industry: "Renewable Energy".to_owned(),
                funding_type: "series a".to_owned(),
                details: Some(FundingDetails {
                    funding_goal: 750_000,
                    min_investment: 100_000,
                    equity_percent: 8.0,
                    projected_roi: 12.0,
                    company_size: 25,
                    years_in_operation: 4,
                    founders: "Sarah Johnson, Liam Brown".to_owned(),
                    traction: vec![
                        "Annual revenue: $350K".to_owned(),
                        "500+ solar installations".to_owned(),
                        "Government grants: $150K".to_owned(),
                    ],
                }),
            },
            request_date: datetime!(2025-05-25 00:00 UTC),
            status: RequestStatus::Rejected,
        },
    ]
}

fn notification(id: &str, kind: NotificationKind, title: &str, message: &str, timestamp: time::OffsetDateTime, read: bool) -> Notification {
    Notification { id: id.to_owned(), kind, title: title.to_owned(), message: message.to_owned(), timestamp, read }
}

/// Notification inbox returned by the simulated fetch.
pub fn notifications() -> Vec<Notification> {
    use NotificationKind::{Alert, Message, Status};
    vec![
        notification("1", Status, "Portfolio Updated", "Your investment portfolio has been updated.", datetime!(2025-06-03 12:00 UTC), false),
        notification("2", Message, "New Message from StartupX", "StartupX sent you a proposal.", datetime!(2025-06-03 11:45 UTC), true),
        notification("3", Alert, "Investment Deadline", "Investment opportunity closes in 24 hours.", datetime!(2025-06-03 11:30 UTC), false),
        notification("4", Status, "Profile Updated", "Your profile details have been saved.", datetime!(2025-06-03 11:15 UTC), true),
        notification("5", Message, "New Message from InvestorY", "InvestorY wants to discuss a deal.", datetime!(2025-06-03 11:00 UTC), false),
        notification("6", Alert, "New Match", "A new startup matches your criteria.", datetime!(2025-06-03 10:45 UTC), true),
        notification("7", Status, "Account Verified", "Your account has been verified.", datetime!(2025-06-03 10:30 UTC), true),
        notification("8", Message, "New Message from TeamZ", "TeamZ shared project updates.", datetime!(2025-06-03 10:15 UTC), false),
        notification("9", Alert, "New Opportunity", "A new investment opportunity is available.", datetime!(2025-06-03 10:00 UTC), false),
    ]
}

fn post(id: &str, user_name: &str, user_initial: &str, posted_at: time::OffsetDateTime, main_text: &str, side_text: &str) -> NewsPost {
    NewsPost {
        id: id.to_owned(),
        user_name: user_name.to_owned(),
        user_initial: user_initial.to_owned(),
        posted_at,
        main_text: main_text.to_owned(),
        side_text: Some(side_text.to_owned()),
        image_url: Some("/assets/placeholder-cover.png".to_owned()),
    }
}

/// News feed posts returned by the simulated fetch.
pub fn news_posts() -> Vec<NewsPost> {
    vec![
        post(
            "1",
            "Mohamed G",
            "MG",
            datetime!(2025-06-01 13:09 UTC),
            "Excited to share our latest startup milestone!",
            "Our AI platform just hit 10,000 active users.",
        ),
        post(
            "2",
            "Ahmed",
            "A",
            datetime!(2025-06-01 14:04 UTC),
            "New investment opportunity in green tech.",
            "Looking for partners to scale our solar solutions.",
        ),
        post(
            "3",
            "Abdo",
            "A",
            datetime!(2025-06-01 13:39 UTC),
            "Just closed a seed round!",
            "Thanks to CoreUp for connecting us with investors.",
        ),
    ]
}
