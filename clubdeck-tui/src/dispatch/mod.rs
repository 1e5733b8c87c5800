//! Dispatch layer: centralized state with a Redux-style reducer
//!
//! All state mutations flow through dispatched actions. The reducer is a
//! pure function that mutates [`AppState`](crate::state::AppState) and
//! returns declarative effects; the runtime executes effects (file writes,
//! timed tasks) outside the reducer and feeds resulting actions back into
//! the queue. Components are pure functions of props that translate
//! terminal events into actions.

pub mod action;
pub mod component;
pub mod event;
pub mod runtime;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use runtime::{EffectContext, EventOutcome, Runtime};
pub use store::{DispatchResult, EffectReducer, EffectStore};
pub use tasks::{TaskKey, TaskManager};
