//! Session seed data
//!
//! Records are created once at startup and live only as long as the
//! process; there is no persistence layer. The fixtures cover every facet
//! value at least once so the filter bars have something to bite on.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::asset::{AssetKind, MediaAsset};
use crate::model::campaign::{Campaign, CampaignMetrics, CampaignStatus, Channel};
use crate::model::live_event::{
    Attendee, EventFormat, EventMetrics, EventMode, EventStatus, LiveEvent,
};
use crate::model::member::{Member, Role, SubStatus, Subscription, Tier};
use crate::model::offer::{City, CodeType, Offer, OfferStatus};
use crate::model::ticket::{Priority, Requester, Ticket, TicketStatus};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap_or_default()
}

fn dt(y: i32, m: u32, day: u32, h: u32, min: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_opt(h, min, 0).unwrap_or_default()
}

pub fn members() -> Vec<Member> {
    let member = |id: &str,
                  name: &str,
                  email: &str,
                  role: Role,
                  tier: Tier,
                  status: SubStatus,
                  plan: &str,
                  next_invoice: Option<NaiveDate>,
                  amount: f64,
                  last_active: NaiveDate,
                  joined: NaiveDate,
                  broker: Option<&str>| Member {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        tier,
        subscription: Subscription {
            status,
            plan: plan.into(),
            next_invoice_at: next_invoice,
            amount,
        },
        last_active,
        joined_at: joined,
        broker_id: broker.map(Into::into),
    };

    vec![
        member(
            "mb_4101",
            "Alex Benjamin",
            "alex@example.com",
            Role::User,
            Tier::Vip,
            SubStatus::Active,
            "VIP Annual",
            Some(d(2025, 9, 1)),
            49.0,
            d(2025, 8, 21),
            d(2024, 11, 3),
            Some("br_2001"),
        ),
        member(
            "mb_4102",
            "Jane Smith",
            "jane@example.com",
            Role::User,
            Tier::Paid,
            SubStatus::Active,
            "Monthly",
            Some(d(2025, 9, 1)),
            19.95,
            d(2025, 8, 22),
            d(2025, 1, 18),
            None,
        ),
        member(
            "mb_4103",
            "Natali Craig",
            "natali@example.com",
            Role::User,
            Tier::Vip,
            SubStatus::Active,
            "VIP Annual",
            Some(d(2025, 9, 12)),
            49.0,
            d(2025, 8, 19),
            d(2024, 6, 30),
            None,
        ),
        member(
            "mb_4104",
            "Jerry Maguire",
            "jerry@example.com",
            Role::User,
            Tier::Paid,
            SubStatus::Cancelled,
            "Monthly",
            None,
            0.0,
            d(2025, 8, 18),
            d(2025, 2, 7),
            None,
        ),
        member(
            "mb_4105",
            "Amara Khan",
            "amara@example.com",
            Role::User,
            Tier::Free,
            SubStatus::Active,
            "Free",
            None,
            0.0,
            d(2025, 8, 10),
            d(2025, 5, 22),
            None,
        ),
        member(
            "mb_4106",
            "Bilal Sheikh",
            "bilal@example.com",
            Role::User,
            Tier::Trial,
            SubStatus::Trial,
            "Trial",
            Some(d(2025, 8, 29)),
            0.0,
            d(2025, 8, 20),
            d(2025, 8, 15),
            None,
        ),
        member(
            "mb_4107",
            "Russell Davis",
            "russell@clubdeck.example",
            Role::Admin,
            Tier::Vip,
            SubStatus::Active,
            "Staff",
            None,
            0.0,
            d(2025, 8, 22),
            d(2023, 4, 2),
            None,
        ),
        member(
            "mb_4108",
            "Calvin Richardson",
            "calvin@clubdeck.example",
            Role::Admin,
            Tier::Vip,
            SubStatus::Active,
            "Staff",
            None,
            0.0,
            d(2025, 8, 17),
            d(2023, 4, 2),
            None,
        ),
        member(
            "mb_4109",
            "Sofia Ortega",
            "sofia@brokerage.example",
            Role::Broker,
            Tier::Paid,
            SubStatus::Active,
            "Broker",
            Some(d(2025, 9, 5)),
            19.95,
            d(2025, 8, 16),
            d(2024, 9, 12),
            Some("br_2001"),
        ),
        member(
            "mb_4110",
            "Omar Haddad",
            "omar@brokerage.example",
            Role::Broker,
            Tier::Paid,
            SubStatus::Trial,
            "Broker",
            Some(d(2025, 8, 28)),
            0.0,
            d(2025, 8, 12),
            d(2025, 8, 1),
            Some("br_2002"),
        ),
        member(
            "mb_4111",
            "Grace Lee",
            "grace@example.com",
            Role::User,
            Tier::Free,
            SubStatus::Cancelled,
            "Free",
            None,
            0.0,
            d(2025, 7, 2),
            d(2024, 12, 25),
            None,
        ),
        member(
            "mb_4112",
            "Tunde Adeyemi",
            "tunde@example.com",
            Role::User,
            Tier::Paid,
            SubStatus::Active,
            "Monthly",
            Some(d(2025, 9, 3)),
            19.95,
            d(2025, 8, 21),
            d(2025, 3, 14),
            None,
        ),
    ]
}

pub fn offers() -> Vec<Offer> {
    vec![
        Offer {
            id: "of_1001".into(),
            title: "20% off All-Day Breakfast".into(),
            brand: "McDonald's".into(),
            category: "Dining".into(),
            tiers: vec![Tier::Paid, Tier::Vip],
            status: OfferStatus::Active,
            code_type: CodeType::Code,
            code_value: "MC-CLB-20".into(),
            per_user_limit: 2,
            total_limit: 5000,
            valid_from: d(2025, 8, 1),
            valid_to: d(2025, 9, 30),
            cities: vec![
                City {
                    name: "New York, US".into(),
                    radius_km: 50,
                },
                City {
                    name: "Miami, US".into(),
                    radius_km: 40,
                },
            ],
            redemptions_total: 1168,
            created_at: d(2025, 7, 15),
            updated_at: d(2025, 8, 18),
        },
        Offer {
            id: "of_1002".into(),
            title: "Up to 18% off Rooms".into(),
            brand: "Marriott".into(),
            category: "Travel".into(),
            tiers: vec![Tier::Paid, Tier::Vip],
            status: OfferStatus::Active,
            code_type: CodeType::Qr,
            code_value: "MARRIOTT-CLB-QR-8823".into(),
            per_user_limit: 1,
            total_limit: 2000,
            valid_from: d(2025, 8, 5),
            valid_to: d(2025, 12, 31),
            cities: vec![
                City {
                    name: "Dubai, AE".into(),
                    radius_km: 60,
                },
                City {
                    name: "London, UK".into(),
                    radius_km: 50,
                },
            ],
            redemptions_total: 327,
            created_at: d(2025, 7, 20),
            updated_at: d(2025, 8, 10),
        },
        Offer {
            id: "of_1003".into(),
            title: "2-for-1 Large Pizzas (Weekdays)".into(),
            brand: "Papa John's".into(),
            category: "Dining".into(),
            tiers: vec![Tier::Free, Tier::Paid, Tier::Vip],
            status: OfferStatus::Paused,
            code_type: CodeType::Code,
            code_value: "PJ-241-CLB".into(),
            per_user_limit: 4,
            total_limit: 8000,
            valid_from: d(2025, 6, 1),
            valid_to: d(2025, 8, 31),
            cities: vec![City {
                name: "Los Angeles, US".into(),
                radius_km: 70,
            }],
            redemptions_total: 590,
            created_at: d(2025, 5, 22),
            updated_at: d(2025, 8, 1),
        },
    ]
}

pub fn events() -> Vec<LiveEvent> {
    vec![
        LiveEvent {
            id: "ev_1001".into(),
            title: "Live: Real Estate AMA".into(),
            format: EventFormat::Live,
            category: "Real Estate".into(),
            mode: EventMode::Virtual,
            host: "Russell Davis".into(),
            tiers: vec![Tier::Paid, Tier::Vip],
            capacity: 500,
            start: dt(2025, 8, 24, 15, 0),
            end: dt(2025, 8, 24, 16, 0),
            status: EventStatus::Scheduled,
            rtmp_url: "rtmp://stream.clubdeck.example/room-1001".into(),
            join_url: "https://meet.clubdeck.example/j/123456789".into(),
            location: String::new(),
            description: "Bring your questions on your first rental, cap rates & financing."
                .into(),
            replay_url: String::new(),
            attendees: vec![
                Attendee {
                    id: "mb_4101".into(),
                    name: "Alex Benjamin".into(),
                    email: "alex@example.com".into(),
                    checked_in: false,
                },
                Attendee {
                    id: "mb_4102".into(),
                    name: "Jane Smith".into(),
                    email: "jane@example.com".into(),
                    checked_in: true,
                },
            ],
            metrics: EventMetrics {
                registrants: 220,
                attendees: 146,
                avg_watch_mins: 28,
                chat_messages: 312,
            },
        },
        LiveEvent {
            id: "ev_1002".into(),
            title: "VIP Mixer - Dubai".into(),
            format: EventFormat::Event,
            category: "Networking".into(),
            mode: EventMode::InPerson,
            host: "Calvin Richardson".into(),
            tiers: vec![Tier::Vip],
            capacity: 120,
            start: dt(2025, 8, 28, 19, 0),
            end: dt(2025, 8, 28, 22, 0),
            status: EventStatus::Scheduled,
            rtmp_url: String::new(),
            join_url: String::new(),
            location: "Four Seasons DIFC, Dubai".into(),
            description: "Invite-only mixer, bring your business cards.".into(),
            replay_url: String::new(),
            attendees: vec![Attendee {
                id: "mb_4104".into(),
                name: "Jerry Maguire".into(),
                email: "jerry@example.com".into(),
                checked_in: false,
            }],
            metrics: EventMetrics {
                registrants: 98,
                attendees: 0,
                avg_watch_mins: 0,
                chat_messages: 0,
            },
        },
        LiveEvent {
            id: "ev_1003".into(),
            title: "Finance Power Hour (Replay Ready)".into(),
            format: EventFormat::Live,
            category: "Finance".into(),
            mode: EventMode::Virtual,
            host: "Sunil G.".into(),
            tiers: vec![Tier::Paid, Tier::Vip],
            capacity: 1000,
            start: dt(2025, 8, 15, 17, 0),
            end: dt(2025, 8, 15, 18, 0),
            status: EventStatus::Ended,
            rtmp_url: "rtmp://stream.clubdeck.example/room-1003".into(),
            join_url: "https://meet.clubdeck.example/j/987654321".into(),
            location: String::new(),
            description: "High-yield strategies and capital allocation Q&A.".into(),
            replay_url: "https://cdn.clubdeck.example/replays/ev_1003.mp4".into(),
            attendees: vec![],
            metrics: EventMetrics {
                registrants: 540,
                attendees: 410,
                avg_watch_mins: 34,
                chat_messages: 820,
            },
        },
    ]
}

pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "tk_1001".into(),
            subject: "Cannot access VIP replay".into(),
            status: TicketStatus::Open,
            priority: Priority::High,
            assignee: Some("Ayesha".into()),
            sla_due: Some(dt(2025, 8, 19, 13, 4)),
            requester: Requester {
                name: "Natali Craig".into(),
                email: "natali@example.com".into(),
                tier: Tier::Vip,
            },
            created_at: dt(2025, 8, 19, 9, 4),
            updated_at: dt(2025, 8, 19, 10, 22),
        },
        Ticket {
            id: "tk_1002".into(),
            subject: "Billing double charge".into(),
            status: TicketStatus::Pending,
            priority: Priority::Medium,
            assignee: Some("Bilal".into()),
            sla_due: Some(dt(2025, 8, 19, 16, 11)),
            requester: Requester {
                name: "Jerry Maguire".into(),
                email: "jerry@example.com".into(),
                tier: Tier::Paid,
            },
            created_at: dt(2025, 8, 18, 16, 11),
            updated_at: dt(2025, 8, 18, 17, 2),
        },
        Ticket {
            id: "tk_1003".into(),
            subject: "Broker portal invite expired".into(),
            status: TicketStatus::New,
            priority: Priority::Low,
            assignee: None,
            sla_due: None,
            requester: Requester {
                name: "Omar Haddad".into(),
                email: "omar@brokerage.example".into(),
                tier: Tier::Paid,
            },
            created_at: dt(2025, 8, 21, 8, 40),
            updated_at: dt(2025, 8, 21, 8, 40),
        },
    ]
}

pub fn assets() -> Vec<MediaAsset> {
    vec![
        MediaAsset {
            id: "as_1001".into(),
            name: "VIP Mixer Cover".into(),
            kind: AssetKind::Image,
            size: "320KB".into(),
            version: 3,
            tags: vec!["vip".into(), "events".into(), "cover".into()],
            usage: vec![
                "Event: VIP Mixer Dubai".into(),
                "Broadcast: August VIP Teaser".into(),
            ],
            cdn_url: "https://cdn.clubdeck.example/assets/vip-mixer-cover.jpg".into(),
            created_at: dt(2025, 8, 10, 13, 22),
        },
        MediaAsset {
            id: "as_1002".into(),
            name: "Onboarding Intro.mp4".into(),
            kind: AssetKind::Video,
            size: "18.2MB".into(),
            version: 1,
            tags: vec!["onboarding".into(), "promo".into()],
            usage: vec!["App Intro".into()],
            cdn_url: "https://cdn.clubdeck.example/assets/onboarding-intro.mp4".into(),
            created_at: dt(2025, 8, 2, 11, 10),
        },
        MediaAsset {
            id: "as_1003".into(),
            name: "Partner Deck Q3.pdf".into(),
            kind: AssetKind::Document,
            size: "2.4MB".into(),
            version: 2,
            tags: vec!["partners".into(), "sales".into()],
            usage: vec![],
            cdn_url: "https://cdn.clubdeck.example/assets/partner-deck-q3.pdf".into(),
            created_at: dt(2025, 7, 28, 9, 5),
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "bc_1001".into(),
            name: "VIP Networking Tonight".into(),
            channel: Channel::Push,
            segments: vec![Tier::Vip],
            status: CampaignStatus::Scheduled,
            subject: String::new(),
            title: "VIP Mixer: 7 PM".into(),
            body: "Join the founders live in the lounge. Tap to RSVP.".into(),
            schedule_at: Some(dt(2025, 8, 22, 18, 30)),
            metrics: CampaignMetrics {
                sent: 4800,
                delivered: 4700,
                opens: 1900,
                clicks: 840,
                unsub: 6,
            },
            created_at: dt(2025, 8, 21, 10, 15),
        },
        Campaign {
            id: "bc_1002".into(),
            name: "Monthly Member Note".into(),
            channel: Channel::Email,
            segments: vec![Tier::Paid, Tier::Vip],
            status: CampaignStatus::Sent,
            subject: "Your August Member Note".into(),
            title: String::new(),
            body: "This month, focus on consistency...".into(),
            schedule_at: Some(dt(2025, 8, 10, 10, 0)),
            metrics: CampaignMetrics {
                sent: 9200,
                delivered: 9000,
                opens: 4800,
                clicks: 1650,
                unsub: 24,
            },
            created_at: dt(2025, 8, 8, 9, 20),
        },
        Campaign {
            id: "bc_1003".into(),
            name: "Trial Expiry Reminder".into(),
            channel: Channel::InApp,
            segments: vec![Tier::Trial],
            status: CampaignStatus::Draft,
            subject: String::new(),
            title: "3 days left on your trial".into(),
            body: "Keep your streak going - upgrade before Friday.".into(),
            schedule_at: None,
            metrics: CampaignMetrics::default(),
            created_at: dt(2025, 8, 20, 14, 2),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_per_store() {
        fn assert_unique(ids: Vec<&str>) {
            let mut seen = std::collections::HashSet::new();
            for id in ids {
                assert!(seen.insert(id.to_string()), "duplicate id {id}");
            }
        }

        assert_unique(members().iter().map(|m| m.id.as_str()).collect());
        assert_unique(offers().iter().map(|o| o.id.as_str()).collect());
        assert_unique(events().iter().map(|e| e.id.as_str()).collect());
        assert_unique(tickets().iter().map(|t| t.id.as_str()).collect());
        assert_unique(assets().iter().map(|a| a.id.as_str()).collect());
        assert_unique(campaigns().iter().map(|c| c.id.as_str()).collect());
    }

    #[test]
    fn members_cover_every_segment() {
        use crate::model::member::SegmentFilter;
        use clubdeck_core::filter::{self, Facet};

        let members = members();
        for facet in SegmentFilter::VALUES.iter().filter(|f| !f.is_all()) {
            assert!(
                !filter::apply(&members, "", &[facet]).is_empty(),
                "no member matches segment {:?}",
                facet
            );
        }
    }
}
