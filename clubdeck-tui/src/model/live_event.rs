//! Live sessions and in-person events shown on the calendar

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use clubdeck_core::calendar::Scheduled;
use clubdeck_core::csv::Column;
use clubdeck_core::filter::{contains_ignore_case, Searchable};
use clubdeck_core::store::Record;

use crate::model::member::Tier;

/// Whether the entry is a streamed session or a plain calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventFormat {
    Live,
    Event,
}

impl EventFormat {
    pub fn label(&self) -> &'static str {
        match self {
            EventFormat::Live => "live",
            EventFormat::Event => "event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventMode {
    Virtual,
    InPerson,
}

impl EventMode {
    pub fn label(&self) -> &'static str {
        match self {
            EventMode::Virtual => "Virtual",
            EventMode::InPerson => "In-person",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Scheduled,
    Live,
    Ended,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "Scheduled",
            EventStatus::Live => "Live",
            EventStatus::Ended => "Ended",
        }
    }

    /// The next stage of the session lifecycle; `Ended` is terminal.
    pub fn advanced(self) -> Self {
        match self {
            EventStatus::Scheduled => EventStatus::Live,
            EventStatus::Live => EventStatus::Ended,
            EventStatus::Ended => EventStatus::Ended,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub checked_in: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventMetrics {
    pub registrants: u32,
    pub attendees: u32,
    pub avg_watch_mins: u32,
    pub chat_messages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
    pub id: String,
    pub title: String,
    pub format: EventFormat,
    pub category: String,
    pub mode: EventMode,
    pub host: String,
    pub tiers: Vec<Tier>,
    pub capacity: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: EventStatus,
    pub rtmp_url: String,
    pub join_url: String,
    pub location: String,
    pub description: String,
    pub replay_url: String,
    pub attendees: Vec<Attendee>,
    pub metrics: EventMetrics,
}

impl LiveEvent {
    /// Blank event used to prefill the create drawer, optionally pinned to
    /// a day picked on the calendar.
    pub fn draft(start_day: Option<NaiveDate>) -> Self {
        let start = start_day
            .and_then(|d| d.and_hms_opt(18, 0, 0))
            .unwrap_or_default();
        Self {
            id: String::new(),
            title: String::new(),
            format: EventFormat::Live,
            category: String::new(),
            mode: EventMode::Virtual,
            host: String::new(),
            tiers: vec![Tier::Paid, Tier::Vip],
            capacity: 0,
            start,
            end: start,
            status: EventStatus::Scheduled,
            rtmp_url: String::new(),
            join_url: String::new(),
            location: String::new(),
            description: String::new(),
            replay_url: String::new(),
            attendees: Vec::new(),
            metrics: EventMetrics::default(),
        }
    }
}

impl Record for LiveEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Scheduled for LiveEvent {
    fn starts_at(&self) -> NaiveDateTime {
        self.start
    }
}

impl Searchable for LiveEvent {
    fn matches_query(&self, needle: &str) -> bool {
        contains_ignore_case(&self.title, needle)
            || contains_ignore_case(&self.host, needle)
            || contains_ignore_case(&self.category, needle)
            || contains_ignore_case(&self.id, needle)
    }
}

pub fn export_columns() -> Vec<Column<LiveEvent>> {
    vec![
        Column {
            header: "ID",
            value: |e| e.id.clone(),
        },
        Column {
            header: "Title",
            value: |e| e.title.clone(),
        },
        Column {
            header: "Type",
            value: |e| e.format.label().to_string(),
        },
        Column {
            header: "Category",
            value: |e| e.category.clone(),
        },
        Column {
            header: "Mode",
            value: |e| e.mode.label().to_string(),
        },
        Column {
            header: "Host",
            value: |e| e.host.clone(),
        },
        Column {
            header: "Tiers",
            value: |e| {
                e.tiers
                    .iter()
                    .map(|t| t.label())
                    .collect::<Vec<_>>()
                    .join("|")
            },
        },
        Column {
            header: "Capacity",
            value: |e| e.capacity.to_string(),
        },
        Column {
            header: "Start",
            value: |e| e.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
        },
        Column {
            header: "End",
            value: |e| e.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
        },
        Column {
            header: "Status",
            value: |e| e.status.label().to_string(),
        },
        Column {
            header: "RTMP",
            value: |e| e.rtmp_url.clone(),
        },
        Column {
            header: "Join",
            value: |e| e.join_url.clone(),
        },
        Column {
            header: "Location",
            value: |e| e.location.clone(),
        },
        Column {
            header: "Registrants",
            value: |e| e.metrics.registrants.to_string(),
        },
        Column {
            header: "Attendees",
            value: |e| e.metrics.attendees.to_string(),
        },
        Column {
            header: "AvgWatchMins",
            value: |e| e.metrics.avg_watch_mins.to_string(),
        },
        Column {
            header: "ChatMsgs",
            value: |e| e.metrics.chat_messages.to_string(),
        },
    ]
}
