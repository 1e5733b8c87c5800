//! Support tickets

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use clubdeck_core::csv::Column;
use clubdeck_core::filter::{contains_ignore_case, Facet, Searchable};
use clubdeck_core::store::Record;

use crate::model::member::{cycle, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    New,
    Open,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::New => "New",
            TicketStatus::Open => "Open",
            TicketStatus::Pending => "Pending",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requester {
    pub name: String,
    pub email: String,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub assignee: Option<String>,
    pub sla_due: Option<NaiveDateTime>,
    pub requester: Requester,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for Ticket {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for Ticket {
    fn matches_query(&self, needle: &str) -> bool {
        contains_ignore_case(&self.subject, needle)
            || contains_ignore_case(&self.requester.email, needle)
            || self
                .assignee
                .as_deref()
                .is_some_and(|a| contains_ignore_case(a, needle))
            || contains_ignore_case(&self.id, needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketStatusFilter {
    #[default]
    All,
    New,
    Open,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatusFilter {
    pub const VALUES: [Self; 6] = [
        Self::All,
        Self::New,
        Self::Open,
        Self::Pending,
        Self::Resolved,
        Self::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::New => "New",
            Self::Open => "Open",
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Ticket> for TicketStatusFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::New => ticket.status == TicketStatus::New,
            Self::Open => ticket.status == TicketStatus::Open,
            Self::Pending => ticket.status == TicketStatus::Pending,
            Self::Resolved => ticket.status == TicketStatus::Resolved,
            Self::Closed => ticket.status == TicketStatus::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub const VALUES: [Self; 4] = [Self::All, Self::Low, Self::Medium, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Ticket> for PriorityFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::Low => ticket.priority == Priority::Low,
            Self::Medium => ticket.priority == Priority::Medium,
            Self::High => ticket.priority == Priority::High,
        }
    }
}

pub fn export_columns() -> Vec<Column<Ticket>> {
    vec![
        Column {
            header: "ID",
            value: |t| t.id.clone(),
        },
        Column {
            header: "Subject",
            value: |t| t.subject.clone(),
        },
        Column {
            header: "Status",
            value: |t| t.status.label().to_string(),
        },
        Column {
            header: "Priority",
            value: |t| t.priority.label().to_string(),
        },
        Column {
            header: "Assignee",
            value: |t| t.assignee.clone().unwrap_or_default(),
        },
        Column {
            header: "SLA_Due",
            value: |t| {
                t.sla_due
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default()
            },
        },
        Column {
            header: "User",
            value: |t| t.requester.email.clone(),
        },
        Column {
            header: "UpdatedAt",
            value: |t| t.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        },
        Column {
            header: "CreatedAt",
            value: |t| t.created_at.format("%Y-%m-%d %H:%M").to_string(),
        },
    ]
}
