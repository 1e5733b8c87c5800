//! The reducer: pure function `(state, action) -> DispatchResult<Effect>`
//!
//! All state mutations happen here. The top-level function routes by
//! screen; the table screens share the generic list handling in [`list`]
//! and only add their domain operations (status flips, export columns,
//! drawer forms) on top.

mod deals;
mod drawer;
mod list;
mod live;
mod members;
mod messaging;
mod studio;
mod support;

use crate::action::Action;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::state::{AppState, StudioStatus};

pub use drawer::{asset_form, campaign_form, event_form, member_form};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::ScreenSet(screen) => {
            if state.screen == screen {
                DispatchResult::unchanged()
            } else {
                state.screen = screen;
                DispatchResult::changed()
            }
        }

        Action::SupportTabSet(tab) => {
            state.support.tab = tab;
            DispatchResult::changed()
        }

        Action::Members(action) => members::reduce(state, action),
        Action::Deals(action) => deals::reduce(state, action),
        Action::Tickets(action) => support::reduce_tickets(state, action),
        Action::Media(action) => support::reduce_media(state, action),
        Action::Campaigns(action) => messaging::reduce(state, action),
        Action::Live(action) => live::reduce(state, action),
        Action::Drawer(action) => drawer::reduce(state, action),
        Action::Studio(action) => studio::reduce(state, action),

        Action::SyncStart => deals::start_sync(state),
        Action::SyncCancel => deals::cancel_sync(state),
        Action::SyncDidFinish {
            finished_at,
            message,
        } => deals::finish_sync(state, finished_at, message),

        Action::ExportDidWrite(path) => {
            state.toast = Some(format!("Exported {}", path.display()));
            DispatchResult::changed()
        }
        Action::ExportDidError(message) => {
            state.toast = Some(format!("Export failed: {message}"));
            DispatchResult::changed()
        }

        Action::ToastClear => {
            if state.toast.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Tick => {
            if state.studio.status == StudioStatus::Live {
                state.studio.elapsed_secs += 1;
                // only worth a redraw when the clock is on screen
                DispatchResult {
                    changed: state.screen == crate::state::Screen::Studio,
                    effects: vec![],
                }
            } else {
                DispatchResult::unchanged()
            }
        }

        // handled by the runtime's quit predicate before dispatch
        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid"))
    }

    #[test]
    fn screen_set_is_a_noop_when_already_there() {
        let mut s = state();
        assert!(!reducer(&mut s, Action::ScreenSet(Screen::Members)).changed);
        assert!(reducer(&mut s, Action::ScreenSet(Screen::Deals)).changed);
        assert_eq!(s.screen, Screen::Deals);
    }

    #[test]
    fn tick_only_advances_the_clock_while_live() {
        let mut s = state();
        reducer(&mut s, Action::Tick);
        assert_eq!(s.studio.elapsed_secs, 0);

        s.studio.status = StudioStatus::Live;
        s.screen = Screen::Studio;
        let result = reducer(&mut s, Action::Tick);
        assert!(result.changed);
        assert_eq!(s.studio.elapsed_secs, 1);

        // off-screen ticks still count but skip the redraw
        s.screen = Screen::Members;
        let result = reducer(&mut s, Action::Tick);
        assert!(!result.changed);
        assert_eq!(s.studio.elapsed_secs, 2);
    }

    #[test]
    fn export_result_actions_surface_in_the_toast() {
        let mut s = state();
        reducer(
            &mut s,
            Action::ExportDidWrite(std::path::PathBuf::from("exports/members_2025-08-22.csv")),
        );
        assert!(s.toast.as_deref().unwrap_or("").contains("members_2025-08-22.csv"));

        reducer(&mut s, Action::ExportDidError("disk full".into()));
        assert!(s.toast.as_deref().unwrap_or("").contains("disk full"));
    }
}
