//! Broadcast campaigns (push, in-app, email)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use clubdeck_core::csv::Column;
use clubdeck_core::filter::{contains_ignore_case, Facet, Searchable};
use clubdeck_core::store::Record;

use crate::model::member::{cycle, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Push,
    InApp,
    Email,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Push => "push",
            Channel::InApp => "inapp",
            Channel::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Sending,
    Sent,
    Cancelled,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Scheduled => "Scheduled",
            CampaignStatus::Sending => "Sending",
            CampaignStatus::Sent => "Sent",
            CampaignStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub sent: u32,
    pub delivered: u32,
    pub opens: u32,
    pub clicks: u32,
    pub unsub: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub channel: Channel,
    pub segments: Vec<Tier>,
    pub status: CampaignStatus,
    /// Email subject line; unused for push/in-app.
    pub subject: String,
    /// Push/in-app headline; unused for email.
    pub title: String,
    pub body: String,
    pub schedule_at: Option<NaiveDateTime>,
    pub metrics: CampaignMetrics,
    pub created_at: NaiveDateTime,
}

impl Campaign {
    /// Required-field check mirrored from the compose form: a name always,
    /// a subject when the channel is email. Returns the alert text that
    /// blocks the save, or `None` when the campaign is savable.
    pub fn validate(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("Campaign name is required.");
        }
        if self.channel == Channel::Email && self.subject.trim().is_empty() {
            return Some("Email campaigns need a subject.");
        }
        None
    }
}

impl Record for Campaign {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for Campaign {
    fn matches_query(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.subject, needle)
            || contains_ignore_case(&self.title, needle)
            || contains_ignore_case(&self.id, needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    Push,
    InApp,
    Email,
}

impl ChannelFilter {
    pub const VALUES: [Self; 4] = [Self::All, Self::Push, Self::InApp, Self::Email];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Push => "Push",
            Self::InApp => "In-app",
            Self::Email => "Email",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Campaign> for ChannelFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, campaign: &Campaign) -> bool {
        match self {
            Self::All => true,
            Self::Push => campaign.channel == Channel::Push,
            Self::InApp => campaign.channel == Channel::InApp,
            Self::Email => campaign.channel == Channel::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CampaignStatusFilter {
    #[default]
    All,
    Draft,
    Scheduled,
    Sending,
    Sent,
    Cancelled,
}

impl CampaignStatusFilter {
    pub const VALUES: [Self; 6] = [
        Self::All,
        Self::Draft,
        Self::Scheduled,
        Self::Sending,
        Self::Sent,
        Self::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Draft => "Draft",
            Self::Scheduled => "Scheduled",
            Self::Sending => "Sending",
            Self::Sent => "Sent",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<Campaign> for CampaignStatusFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, campaign: &Campaign) -> bool {
        match self {
            Self::All => true,
            Self::Draft => campaign.status == CampaignStatus::Draft,
            Self::Scheduled => campaign.status == CampaignStatus::Scheduled,
            Self::Sending => campaign.status == CampaignStatus::Sending,
            Self::Sent => campaign.status == CampaignStatus::Sent,
            Self::Cancelled => campaign.status == CampaignStatus::Cancelled,
        }
    }
}

pub fn export_columns() -> Vec<Column<Campaign>> {
    vec![
        Column {
            header: "ID",
            value: |c| c.id.clone(),
        },
        Column {
            header: "Name",
            value: |c| c.name.clone(),
        },
        Column {
            header: "Channel",
            value: |c| c.channel.label().to_string(),
        },
        Column {
            header: "Segments",
            value: |c| {
                c.segments
                    .iter()
                    .map(|t| t.label())
                    .collect::<Vec<_>>()
                    .join("|")
            },
        },
        Column {
            header: "Status",
            value: |c| c.status.label().to_string(),
        },
        Column {
            header: "Subject",
            value: |c| c.subject.clone(),
        },
        Column {
            header: "Title",
            value: |c| c.title.clone(),
        },
        Column {
            header: "ScheduledAt",
            value: |c| {
                c.schedule_at
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default()
            },
        },
        Column {
            header: "Sent",
            value: |c| c.metrics.sent.to_string(),
        },
        Column {
            header: "Delivered",
            value: |c| c.metrics.delivered.to_string(),
        },
        Column {
            header: "Opens",
            value: |c| c.metrics.opens.to_string(),
        },
        Column {
            header: "Clicks",
            value: |c| c.metrics.clicks.to_string(),
        },
        Column {
            header: "Unsub",
            value: |c| c.metrics.unsub.to_string(),
        },
    ]
}
