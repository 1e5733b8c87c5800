//! clubdeck: a terminal admin console for a membership/media platform
//!
//! The app follows a Redux-style architecture: [`state::AppState`] is the
//! single source of truth, [`action::Action`] values are the only mutation
//! path, [`reducer::reducer`] is a pure function emitting declarative
//! [`effect::Effect`]s, and the [`dispatch`] runtime drives the event loop,
//! effect handlers and cancellable background tasks. Screens are composed
//! in [`ui`] from the pure components in [`components`]; the list-pipeline
//! primitives (filter, paging, selection, CSV, calendar) live in the
//! `clubdeck-core` crate.

pub mod action;
pub mod components;
pub mod config;
pub mod dispatch;
pub mod effect;
pub mod error;
pub mod export;
pub mod model;
pub mod reducer;
pub mod state;
pub mod ui;

pub use config::DeckConfig;
pub use error::{DeckError, Result};
