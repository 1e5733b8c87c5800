//! Drawer reducer: edit forms over a single record
//!
//! A form is a flat list of labelled text fields built from a record and
//! parsed back into one on save. Parsing never fails: a cell that does not
//! parse falls back to the base record's value, and missing optionals stay
//! empty. The only save that can be blocked is the campaign compose form,
//! which re-checks its required fields and surfaces the alert inline.

use chrono::{NaiveDate, NaiveDateTime};

use crate::action::DrawerAction;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::model::campaign::CampaignMetrics;
use crate::model::{
    AssetKind, Campaign, CampaignStatus, Channel, EventMode, LiveEvent, MediaAsset, Member, Role,
    SubStatus, Subscription, Tier,
};
use crate::state::{AppState, DrawerState, DrawerTarget, FormField};

// Field labels double as lookup keys, so each appears exactly once per form.
const NAME: &str = "Name";
const EMAIL: &str = "Email";
const ROLE: &str = "Role (User/Broker/Admin)";
const TIER: &str = "Tier (Free/Paid/VIP/Trial)";
const PLAN: &str = "Plan";
const BROKER: &str = "Broker ID";

const TITLE: &str = "Title";
const CATEGORY: &str = "Category";
const HOST: &str = "Host";
const MODE: &str = "Mode (Virtual/In-person)";
const CAPACITY: &str = "Capacity";
const START: &str = "Start (YYYY-MM-DD HH:MM)";
const END: &str = "End (YYYY-MM-DD HH:MM)";
const LOCATION: &str = "Location";
const JOIN_URL: &str = "Join URL";
const REPLAY_URL: &str = "Replay URL";

const CHANNEL: &str = "Channel (push/inapp/email)";
const SUBJECT: &str = "Subject";
const HEADLINE: &str = "Headline";
const BODY: &str = "Body";
const SCHEDULE: &str = "Schedule (YYYY-MM-DD HH:MM)";

const KIND: &str = "Type (image/video/document)";
const SIZE: &str = "Size";
const TAGS: &str = "Tags (comma separated)";
const CDN_URL: &str = "CDN URL";

pub fn member_form(member: Option<&Member>) -> DrawerState {
    let title = match member {
        Some(m) => format!("Edit Member {}", m.id),
        None => "New Member".into(),
    };
    let get = |f: fn(&Member) -> String| member.map(f).unwrap_or_default();
    DrawerState {
        title,
        fields: vec![
            FormField::new(NAME, get(|m| m.name.clone())),
            FormField::new(EMAIL, get(|m| m.email.clone())),
            FormField::new(ROLE, get(|m| m.role.label().to_string())),
            FormField::new(TIER, get(|m| m.tier.label().to_string())),
            FormField::new(PLAN, get(|m| m.subscription.plan.clone())),
            FormField::new(BROKER, get(|m| m.broker_id.clone().unwrap_or_default())),
        ],
        focus: 0,
        error: None,
        target: DrawerTarget::Member(member.map(|m| m.id.clone())),
    }
}

pub fn event_form(event: &LiveEvent) -> DrawerState {
    let id = (!event.id.is_empty()).then(|| event.id.clone());
    DrawerState {
        title: match &id {
            Some(id) => format!("Edit Event {id}"),
            None => "New Event".into(),
        },
        fields: vec![
            FormField::new(TITLE, event.title.clone()),
            FormField::new(CATEGORY, event.category.clone()),
            FormField::new(HOST, event.host.clone()),
            FormField::new(MODE, event.mode.label()),
            FormField::new(CAPACITY, event.capacity.to_string()),
            FormField::new(START, fmt_datetime(event.start)),
            FormField::new(END, fmt_datetime(event.end)),
            FormField::new(LOCATION, event.location.clone()),
            FormField::new(JOIN_URL, event.join_url.clone()),
            FormField::new(REPLAY_URL, event.replay_url.clone()),
        ],
        focus: 0,
        error: None,
        target: DrawerTarget::Event(id),
    }
}

pub fn campaign_form(campaign: Option<&Campaign>) -> DrawerState {
    let title = match campaign {
        Some(c) => format!("Edit Broadcast {}", c.id),
        None => "Compose Broadcast".into(),
    };
    let get = |f: fn(&Campaign) -> String| campaign.map(f).unwrap_or_default();
    DrawerState {
        title,
        fields: vec![
            FormField::new(NAME, get(|c| c.name.clone())),
            FormField::new(CHANNEL, get(|c| c.channel.label().to_string())),
            FormField::new(SUBJECT, get(|c| c.subject.clone())),
            FormField::new(HEADLINE, get(|c| c.title.clone())),
            FormField::new(BODY, get(|c| c.body.clone())),
            FormField::new(
                SCHEDULE,
                get(|c| c.schedule_at.map(fmt_datetime).unwrap_or_default()),
            ),
        ],
        focus: 0,
        error: None,
        target: DrawerTarget::Campaign(campaign.map(|c| c.id.clone())),
    }
}

pub fn asset_form(asset: Option<&MediaAsset>) -> DrawerState {
    let title = match asset {
        Some(a) => format!("Edit Asset {}", a.id),
        None => "Upload Asset".into(),
    };
    let get = |f: fn(&MediaAsset) -> String| asset.map(f).unwrap_or_default();
    DrawerState {
        title,
        fields: vec![
            FormField::new(NAME, get(|a| a.name.clone())),
            FormField::new(KIND, get(|a| a.kind.label().to_string())),
            FormField::new(SIZE, get(|a| a.size.clone())),
            FormField::new(TAGS, get(|a| a.tags.join(", "))),
            FormField::new(CDN_URL, get(|a| a.cdn_url.clone())),
        ],
        focus: 0,
        error: None,
        target: DrawerTarget::Asset(asset.map(|a| a.id.clone())),
    }
}

pub fn reduce(state: &mut AppState, action: DrawerAction) -> DispatchResult<Effect> {
    let Some(drawer) = state.drawer.as_mut() else {
        return DispatchResult::unchanged();
    };

    match action {
        DrawerAction::FieldInput(value) => {
            let focus = drawer.focus;
            match drawer.fields.get_mut(focus) {
                Some(field) => {
                    field.value = value;
                    drawer.error = None;
                    DispatchResult::changed()
                }
                None => DispatchResult::unchanged(),
            }
        }

        DrawerAction::FocusNext => {
            drawer.focus = (drawer.focus + 1) % drawer.fields.len().max(1);
            DispatchResult::changed()
        }

        DrawerAction::FocusPrev => {
            let len = drawer.fields.len().max(1);
            drawer.focus = (drawer.focus + len - 1) % len;
            DispatchResult::changed()
        }

        DrawerAction::Cancel => {
            state.drawer = None;
            DispatchResult::changed()
        }

        DrawerAction::Save => {
            let Some(drawer) = state.drawer.take() else {
                return DispatchResult::unchanged();
            };
            save(state, drawer)
        }
    }
}

fn save(state: &mut AppState, mut drawer: DrawerState) -> DispatchResult<Effect> {
    let saved_id = match drawer.target.clone() {
        DrawerTarget::Member(id) => {
            let base = id
                .as_deref()
                .and_then(|i| state.members.store.get(i))
                .cloned()
                .unwrap_or_else(|| blank_member(state.today));
            let record = member_from_fields(base, &drawer.fields);
            state.members.store.upsert(record)
        }

        DrawerTarget::Event(id) => {
            let base = id
                .as_deref()
                .and_then(|i| state.live.store.get(i))
                .cloned()
                .unwrap_or_else(|| LiveEvent::draft(Some(state.today)));
            let record = event_from_fields(base, &drawer.fields);
            state.live.store.upsert(record)
        }

        DrawerTarget::Campaign(id) => {
            let base = id
                .as_deref()
                .and_then(|i| state.messaging.store.get(i))
                .cloned()
                .unwrap_or_else(|| blank_campaign(state.today));
            let record = campaign_from_fields(base, &drawer.fields);
            // Required fields block the save; the form stays open with the
            // alert inline.
            if let Some(alert) = record.validate() {
                drawer.error = Some(alert.into());
                state.drawer = Some(drawer);
                return DispatchResult::changed();
            }
            state.messaging.store.upsert(record)
        }

        DrawerTarget::Asset(id) => {
            let base = id
                .as_deref()
                .and_then(|i| state.support.media.store.get(i))
                .cloned()
                .unwrap_or_else(|| blank_asset(state.today));
            let record = asset_from_fields(base, &drawer.fields);
            state.support.media.store.upsert(record)
        }
    };

    tracing::info!(id = %saved_id, "drawer save");
    state.toast = Some(format!("Saved {saved_id}"));
    DispatchResult::changed()
}

fn field<'a>(fields: &'a [FormField], label: &str) -> &'a str {
    fields
        .iter()
        .find(|f| f.label == label)
        .map(|f| f.value.as_str())
        .unwrap_or("")
}

fn fmt_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

fn parse_datetime(s: &str, fallback: NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M").unwrap_or(fallback)
}

fn parse_u32(s: &str, fallback: u32) -> u32 {
    s.trim().parse().unwrap_or(fallback)
}

fn opt(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn parse_role(s: &str, fallback: Role) -> Role {
    match s.trim().to_lowercase().as_str() {
        "user" => Role::User,
        "broker" => Role::Broker,
        "admin" => Role::Admin,
        _ => fallback,
    }
}

fn parse_tier(s: &str, fallback: Tier) -> Tier {
    match s.trim().to_lowercase().as_str() {
        "free" => Tier::Free,
        "paid" => Tier::Paid,
        "vip" => Tier::Vip,
        "trial" => Tier::Trial,
        _ => fallback,
    }
}

fn parse_mode(s: &str, fallback: EventMode) -> EventMode {
    match s.trim().to_lowercase().as_str() {
        "virtual" => EventMode::Virtual,
        "in-person" | "inperson" => EventMode::InPerson,
        _ => fallback,
    }
}

fn parse_channel(s: &str, fallback: Channel) -> Channel {
    match s.trim().to_lowercase().as_str() {
        "push" => Channel::Push,
        "inapp" | "in-app" => Channel::InApp,
        "email" => Channel::Email,
        _ => fallback,
    }
}

fn parse_kind(s: &str, fallback: AssetKind) -> AssetKind {
    match s.trim().to_lowercase().as_str() {
        "image" => AssetKind::Image,
        "video" => AssetKind::Video,
        "document" => AssetKind::Document,
        _ => fallback,
    }
}

fn blank_member(today: NaiveDate) -> Member {
    Member {
        id: String::new(),
        name: String::new(),
        email: String::new(),
        role: Role::User,
        tier: Tier::Free,
        subscription: Subscription {
            status: SubStatus::Active,
            plan: "Free".into(),
            next_invoice_at: None,
            amount: 0.0,
        },
        last_active: today,
        joined_at: today,
        broker_id: None,
    }
}

fn blank_campaign(today: NaiveDate) -> Campaign {
    Campaign {
        id: String::new(),
        name: String::new(),
        channel: Channel::Push,
        segments: vec![Tier::Paid, Tier::Vip],
        status: CampaignStatus::Draft,
        subject: String::new(),
        title: String::new(),
        body: String::new(),
        schedule_at: None,
        metrics: CampaignMetrics::default(),
        created_at: today.and_hms_opt(0, 0, 0).unwrap_or_default(),
    }
}

fn blank_asset(today: NaiveDate) -> MediaAsset {
    MediaAsset {
        id: String::new(),
        name: String::new(),
        kind: AssetKind::Image,
        size: String::new(),
        version: 1,
        tags: Vec::new(),
        usage: Vec::new(),
        cdn_url: String::new(),
        created_at: today.and_hms_opt(0, 0, 0).unwrap_or_default(),
    }
}

fn member_from_fields(mut base: Member, fields: &[FormField]) -> Member {
    base.name = field(fields, NAME).trim().to_string();
    base.email = field(fields, EMAIL).trim().to_string();
    base.role = parse_role(field(fields, ROLE), base.role);
    base.tier = parse_tier(field(fields, TIER), base.tier);
    base.subscription.plan = field(fields, PLAN).trim().to_string();
    base.broker_id = opt(field(fields, BROKER));
    base
}

fn event_from_fields(mut base: LiveEvent, fields: &[FormField]) -> LiveEvent {
    base.title = field(fields, TITLE).trim().to_string();
    base.category = field(fields, CATEGORY).trim().to_string();
    base.host = field(fields, HOST).trim().to_string();
    base.mode = parse_mode(field(fields, MODE), base.mode);
    base.capacity = parse_u32(field(fields, CAPACITY), base.capacity);
    base.start = parse_datetime(field(fields, START), base.start);
    base.end = parse_datetime(field(fields, END), base.end);
    base.location = field(fields, LOCATION).trim().to_string();
    base.join_url = field(fields, JOIN_URL).trim().to_string();
    base.replay_url = field(fields, REPLAY_URL).trim().to_string();
    base
}

fn campaign_from_fields(mut base: Campaign, fields: &[FormField]) -> Campaign {
    base.name = field(fields, NAME).trim().to_string();
    base.channel = parse_channel(field(fields, CHANNEL), base.channel);
    base.subject = field(fields, SUBJECT).trim().to_string();
    base.title = field(fields, HEADLINE).trim().to_string();
    base.body = field(fields, BODY).to_string();
    base.schedule_at = match opt(field(fields, SCHEDULE)) {
        Some(s) => Some(parse_datetime(&s, base.schedule_at.unwrap_or_default())),
        None => None,
    };
    base
}

fn asset_from_fields(mut base: MediaAsset, fields: &[FormField]) -> MediaAsset {
    base.name = field(fields, NAME).trim().to_string();
    base.kind = parse_kind(field(fields, KIND), base.kind);
    base.size = field(fields, SIZE).trim().to_string();
    base.tags = field(fields, TAGS)
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    base.cdn_url = field(fields, CDN_URL).trim().to_string();
    base
}
