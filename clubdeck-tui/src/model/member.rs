//! Members: the platform's user base
//!
//! The members screen filters along three facets (segment, role and
//! subscription status) plus free text over name, email, member id and
//! broker id. The `Cancelled` segment is derived: it matches on the nested
//! subscription status, not the tier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clubdeck_core::csv::Column;
use clubdeck_core::filter::{contains_ignore_case, Facet, Searchable};
use clubdeck_core::store::Record;

/// Membership tier. Also used by offers (eligibility) and campaigns
/// (audience segments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Free,
    Paid,
    Vip,
    Trial,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Paid => "Paid",
            Tier::Vip => "VIP",
            Tier::Trial => "Trial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Broker,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Broker => "Broker",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubStatus {
    Active,
    Trial,
    Cancelled,
}

impl SubStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubStatus::Active => "Active",
            SubStatus::Trial => "Trial",
            SubStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub status: SubStatus,
    pub plan: String,
    pub next_invoice_at: Option<NaiveDate>,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub tier: Tier,
    pub subscription: Subscription,
    pub last_active: NaiveDate,
    pub joined_at: NaiveDate,
    pub broker_id: Option<String>,
}

impl Record for Member {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for Member {
    fn matches_query(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.email, needle)
            || contains_ignore_case(&self.id, needle)
            || self
                .broker_id
                .as_deref()
                .is_some_and(|b| contains_ignore_case(b, needle))
    }
}

/// Segment facet over the member list. `Cancelled` is derived from the
/// subscription status; the rest match the tier directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentFilter {
    #[default]
    All,
    Free,
    Paid,
    Vip,
    Trial,
    Cancelled,
}

impl SegmentFilter {
    pub const VALUES: [Self; 6] = [
        Self::All,
        Self::Free,
        Self::Paid,
        Self::Vip,
        Self::Trial,
        Self::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Free => "Free",
            Self::Paid => "Paid",
            Self::Vip => "VIP",
            Self::Trial => "Trial",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Member> for SegmentFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, member: &Member) -> bool {
        match self {
            Self::All => true,
            Self::Cancelled => member.subscription.status == SubStatus::Cancelled,
            Self::Free => member.tier == Tier::Free,
            Self::Paid => member.tier == Tier::Paid,
            Self::Vip => member.tier == Tier::Vip,
            Self::Trial => member.tier == Tier::Trial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    User,
    Broker,
    Admin,
}

impl RoleFilter {
    pub const VALUES: [Self; 4] = [Self::All, Self::User, Self::Broker, Self::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::User => "User",
            Self::Broker => "Broker",
            Self::Admin => "Admin",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Member> for RoleFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, member: &Member) -> bool {
        match self {
            Self::All => true,
            Self::User => member.role == Role::User,
            Self::Broker => member.role == Role::Broker,
            Self::Admin => member.role == Role::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberStatusFilter {
    #[default]
    All,
    Active,
    Trial,
    Cancelled,
}

impl MemberStatusFilter {
    pub const VALUES: [Self; 4] = [Self::All, Self::Active, Self::Trial, Self::Cancelled];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Trial => "Trial",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Member> for MemberStatusFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, member: &Member) -> bool {
        match self {
            Self::All => true,
            Self::Active => member.subscription.status == SubStatus::Active,
            Self::Trial => member.subscription.status == SubStatus::Trial,
            Self::Cancelled => member.subscription.status == SubStatus::Cancelled,
        }
    }
}

/// Advance to the next value in a facet's value list, wrapping at the end.
pub(crate) fn cycle<T: Copy + PartialEq>(values: &[T], current: T) -> T {
    let idx = values.iter().position(|v| *v == current).unwrap_or(0);
    values[(idx + 1) % values.len()]
}

pub fn export_columns() -> Vec<Column<Member>> {
    vec![
        Column {
            header: "Member ID",
            value: |m| m.id.clone(),
        },
        Column {
            header: "Name",
            value: |m| m.name.clone(),
        },
        Column {
            header: "Email",
            value: |m| m.email.clone(),
        },
        Column {
            header: "Role",
            value: |m| m.role.label().to_string(),
        },
        Column {
            header: "Tier",
            value: |m| m.tier.label().to_string(),
        },
        Column {
            header: "Sub Status",
            value: |m| m.subscription.status.label().to_string(),
        },
        Column {
            header: "Plan",
            value: |m| m.subscription.plan.clone(),
        },
        Column {
            header: "Next Invoice",
            value: |m| {
                m.subscription
                    .next_invoice_at
                    .map(|d| d.to_string())
                    .unwrap_or_default()
            },
        },
        Column {
            header: "Amount",
            value: |m| format!("{:.2}", m.subscription.amount),
        },
        Column {
            header: "Last Active",
            value: |m| m.last_active.to_string(),
        },
        Column {
            header: "Joined",
            value: |m| m.joined_at.to_string(),
        },
        Column {
            header: "BrokerID",
            value: |m| m.broker_id.clone().unwrap_or_default(),
        },
    ]
}
