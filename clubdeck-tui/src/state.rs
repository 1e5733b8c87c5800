//! Application state: the single source of truth
//!
//! One sub-state per screen, each owning its record store and its list
//! controls (query, facets, page window, selection, focused row). Only the
//! reducer mutates anything here; components receive read-only borrows.

use chrono::{NaiveDate, NaiveDateTime};

use clubdeck_core::calendar::CalendarCursor;
use clubdeck_core::filter;
use clubdeck_core::page::PageWindow;
use clubdeck_core::select::SelectionSet;
use clubdeck_core::store::RecordStore;

use crate::model::{
    seed, AssetKindFilter, Campaign, CampaignStatusFilter, ChannelFilter, LiveEvent, MediaAsset,
    Member, MemberStatusFilter, OfferStatusFilter, OfferTierFilter, PriorityFilter, RoleFilter,
    SegmentFilter, Ticket, TicketStatusFilter,
};
use crate::model::Offer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Members,
    Deals,
    Live,
    Messaging,
    Support,
    Studio,
}

impl Screen {
    pub const ALL: [Self; 6] = [
        Self::Members,
        Self::Deals,
        Self::Live,
        Self::Messaging,
        Self::Support,
        Self::Studio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Members => "Members",
            Self::Deals => "Deals",
            Self::Live => "Live & Events",
            Self::Messaging => "Messaging",
            Self::Support => "Support",
            Self::Studio => "Studio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportTab {
    #[default]
    Tickets,
    Media,
}

impl SupportTab {
    pub fn toggled(self) -> Self {
        match self {
            Self::Tickets => Self::Media,
            Self::Media => Self::Tickets,
        }
    }
}

/// The list controls every table screen shares: query, page window,
/// selection and the focused row (relative to the visible page).
#[derive(Debug, Clone)]
pub struct ListControls {
    pub query: String,
    pub search_focused: bool,
    pub page: PageWindow,
    pub selection: SelectionSet,
    pub cursor: usize,
}

impl ListControls {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            search_focused: false,
            page: PageWindow::new(page_size),
            selection: SelectionSet::new(),
            cursor: 0,
        }
    }
}

/// One editable field in the drawer form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Which store a drawer save lands in, carrying the edited record's id
/// (`None` = create, which prepends with a fresh id).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerTarget {
    Member(Option<String>),
    Event(Option<String>),
    Campaign(Option<String>),
    Asset(Option<String>),
}

/// A slide-in edit form bound to a single record.
#[derive(Debug, Clone)]
pub struct DrawerState {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub error: Option<String>,
    pub target: DrawerTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncLog {
    pub ts: NaiveDateTime,
    pub message: String,
}

/// Partner-network sync panel state. The sync itself is a cancellable
/// timed task; this is only what the header renders.
#[derive(Debug, Clone)]
pub struct SyncState {
    pub status: SyncStatus,
    pub last_sync: Option<NaiveDateTime>,
    pub logs: Vec<SyncLog>,
}

impl SyncState {
    /// Keep the newest entries only; the panel shows a short ring.
    pub const LOG_CAP: usize = 10;

    fn seeded() -> Self {
        let ts = |d: u32, h: u32, m: u32| {
            NaiveDate::from_ymd_opt(2025, 8, d)
                .and_then(|date| date.and_hms_opt(h, m, 0))
                .unwrap_or_default()
        };
        Self {
            status: SyncStatus::Idle,
            last_sync: Some(ts(18, 14, 35)),
            logs: vec![
                SyncLog {
                    ts: ts(18, 14, 35),
                    message: "Fetched 2 new offers, updated 4, 0 errors.".into(),
                },
                SyncLog {
                    ts: ts(15, 9, 12),
                    message: "Partner endpoint latency high (2.1s). Retried once.".into(),
                },
            ],
        }
    }

    pub fn push_log(&mut self, ts: NaiveDateTime, message: String) {
        self.logs.insert(0, SyncLog { ts, message });
        self.logs.truncate(Self::LOG_CAP);
    }
}

pub struct MembersState {
    pub store: RecordStore<Member>,
    pub controls: ListControls,
    pub segment: SegmentFilter,
    pub role: RoleFilter,
    pub status: MemberStatusFilter,
}

impl MembersState {
    pub fn filtered(&self) -> Vec<&Member> {
        filter::apply(
            self.store.records(),
            &self.controls.query,
            &[&self.segment, &self.role, &self.status],
        )
    }
}

pub struct DealsState {
    pub store: RecordStore<Offer>,
    pub controls: ListControls,
    pub status: OfferStatusFilter,
    pub tier: OfferTierFilter,
    pub sync: SyncState,
}

impl DealsState {
    pub fn filtered(&self) -> Vec<&Offer> {
        filter::apply(
            self.store.records(),
            &self.controls.query,
            &[&self.status, &self.tier],
        )
    }
}

pub struct LiveState {
    pub store: RecordStore<LiveEvent>,
    pub calendar: CalendarCursor,
    /// Focused row in the month-window list (list view ordering).
    pub cursor: usize,
}

pub struct MessagingState {
    pub store: RecordStore<Campaign>,
    pub controls: ListControls,
    pub channel: ChannelFilter,
    pub status: CampaignStatusFilter,
}

impl MessagingState {
    pub fn filtered(&self) -> Vec<&Campaign> {
        filter::apply(
            self.store.records(),
            &self.controls.query,
            &[&self.channel, &self.status],
        )
    }
}

pub struct TicketsState {
    pub store: RecordStore<Ticket>,
    pub controls: ListControls,
    pub status: TicketStatusFilter,
    pub priority: PriorityFilter,
}

impl TicketsState {
    pub fn filtered(&self) -> Vec<&Ticket> {
        filter::apply(
            self.store.records(),
            &self.controls.query,
            &[&self.status, &self.priority],
        )
    }
}

pub struct MediaState {
    pub store: RecordStore<MediaAsset>,
    pub controls: ListControls,
    pub kind: AssetKindFilter,
}

impl MediaState {
    pub fn filtered(&self) -> Vec<&MediaAsset> {
        filter::apply(self.store.records(), &self.controls.query, &[&self.kind])
    }
}

pub struct SupportState {
    pub tab: SupportTab,
    pub tickets: TicketsState,
    pub media: MediaState,
}

/// Live-session state machine: `Preview -> Live -> Ended`, no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudioStatus {
    #[default]
    Preview,
    Live,
    Ended,
}

impl StudioStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Preview => "PREVIEW",
            Self::Live => "LIVE",
            Self::Ended => "ENDED",
        }
    }
}

pub struct StudioState {
    pub status: StudioStatus,
    pub mic: bool,
    pub cam: bool,
    pub screen_share: bool,
    pub recording: bool,
    /// Seconds on air, driven by the runtime tick while live.
    pub elapsed_secs: u64,
    pub title: String,
    pub rtmp_url: String,
    pub stream_key: String,
}

impl StudioState {
    fn seeded() -> Self {
        Self {
            status: StudioStatus::Preview,
            mic: true,
            cam: true,
            screen_share: false,
            recording: false,
            elapsed_secs: 0,
            title: "Founder AMA: Luxury Real Estate Q&A".into(),
            rtmp_url: "rtmp://live.clubdeck.example/app".into(),
            stream_key: "clb_live_XXXX-XXXX-XXXX".into(),
        }
    }
}

pub struct AppState {
    pub screen: Screen,
    /// Local date at startup; feeds the calendar's "today" marker and
    /// default stamps. Pure inputs only: the reducer never reads clocks.
    pub today: NaiveDate,
    pub members: MembersState,
    pub deals: DealsState,
    pub live: LiveState,
    pub messaging: MessagingState,
    pub support: SupportState,
    pub studio: StudioState,
    pub drawer: Option<DrawerState>,
    /// Transient status line: export paths, validation alerts.
    pub toast: Option<String>,
}

impl AppState {
    pub fn new(page_size: usize, today: NaiveDate) -> Self {
        Self {
            screen: Screen::default(),
            today,
            members: MembersState {
                store: RecordStore::new("mb", seed::members()),
                controls: ListControls::new(page_size),
                segment: SegmentFilter::default(),
                role: RoleFilter::default(),
                status: MemberStatusFilter::default(),
            },
            deals: DealsState {
                store: RecordStore::new("of", seed::offers()),
                controls: ListControls::new(page_size),
                status: OfferStatusFilter::default(),
                tier: OfferTierFilter::default(),
                sync: SyncState::seeded(),
            },
            live: LiveState {
                store: RecordStore::new("ev", seed::events()),
                calendar: CalendarCursor::new(today),
                cursor: 0,
            },
            messaging: MessagingState {
                store: RecordStore::new("bc", seed::campaigns()),
                controls: ListControls::new(page_size),
                channel: ChannelFilter::default(),
                status: CampaignStatusFilter::default(),
            },
            support: SupportState {
                tab: SupportTab::default(),
                tickets: TicketsState {
                    store: RecordStore::new("tk", seed::tickets()),
                    controls: ListControls::new(page_size),
                    status: TicketStatusFilter::default(),
                    priority: PriorityFilter::default(),
                },
                media: MediaState {
                    store: RecordStore::new("as", seed::assets()),
                    controls: ListControls::new(page_size),
                    kind: AssetKindFilter::default(),
                },
            },
            studio: StudioState::seeded(),
            drawer: None,
            toast: None,
        }
    }
}
