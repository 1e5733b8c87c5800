//! Domain records
//!
//! One struct per entity kind (members, offers, live events, tickets,
//! media assets, broadcast campaigns), each with its own field set; there
//! is deliberately no shared structural record type. Every kind implements
//! the core pipeline traits it participates in: `Record` for its store,
//! `Searchable` for free text, `Facet` impls on its filter enums, and
//! `Scheduled` for calendar placement where it applies.

pub mod asset;
pub mod campaign;
pub mod live_event;
pub mod member;
pub mod offer;
pub mod seed;
pub mod ticket;

pub use asset::{AssetKind, AssetKindFilter, MediaAsset};
pub use campaign::{Campaign, CampaignStatus, CampaignStatusFilter, Channel, ChannelFilter};
pub use live_event::{EventFormat, EventMode, EventStatus, LiveEvent};
pub use member::{
    Member, MemberStatusFilter, Role, RoleFilter, SegmentFilter, SubStatus, Subscription, Tier,
};
pub use offer::{CodeType, Offer, OfferStatus, OfferStatusFilter, OfferTierFilter};
pub use ticket::{Priority, PriorityFilter, Ticket, TicketStatus, TicketStatusFilter};
