//! Studio screen reducer: the live-session state machine
//!
//! `Preview -> Live -> Ended`, one way. Going live is only legal from
//! Preview and ending only from Live; everything else is ignored rather
//! than erroring.

use crate::action::StudioAction;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::state::{AppState, StudioStatus};

pub fn reduce(state: &mut AppState, action: StudioAction) -> DispatchResult<Effect> {
    let studio = &mut state.studio;
    match action {
        StudioAction::GoLive => {
            if studio.status != StudioStatus::Preview {
                return DispatchResult::unchanged();
            }
            studio.status = StudioStatus::Live;
            studio.elapsed_secs = 0;
            tracing::info!(title = %studio.title, "session live");
            DispatchResult::changed()
        }

        StudioAction::EndSession => {
            if studio.status != StudioStatus::Live {
                return DispatchResult::unchanged();
            }
            studio.status = StudioStatus::Ended;
            studio.recording = false;
            tracing::info!(elapsed_secs = studio.elapsed_secs, "session ended");
            DispatchResult::changed()
        }

        StudioAction::ToggleMic => {
            studio.mic = !studio.mic;
            DispatchResult::changed()
        }
        StudioAction::ToggleCam => {
            studio.cam = !studio.cam;
            DispatchResult::changed()
        }
        StudioAction::ToggleScreen => {
            studio.screen_share = !studio.screen_share;
            DispatchResult::changed()
        }
        StudioAction::ToggleRecording => {
            studio.recording = !studio.recording;
            DispatchResult::changed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::reducer::reducer;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid"))
    }

    #[test]
    fn go_live_is_only_legal_from_preview() {
        let mut s = state();
        assert!(reducer(&mut s, Action::Studio(StudioAction::GoLive)).changed);
        assert_eq!(s.studio.status, StudioStatus::Live);

        // already live: ignored
        assert!(!reducer(&mut s, Action::Studio(StudioAction::GoLive)).changed);

        reducer(&mut s, Action::Studio(StudioAction::EndSession));
        assert_eq!(s.studio.status, StudioStatus::Ended);

        // ended is terminal
        assert!(!reducer(&mut s, Action::Studio(StudioAction::GoLive)).changed);
    }

    #[test]
    fn end_session_is_only_legal_from_live() {
        let mut s = state();
        assert!(!reducer(&mut s, Action::Studio(StudioAction::EndSession)).changed);
        assert_eq!(s.studio.status, StudioStatus::Preview);
    }

    #[test]
    fn ending_stops_the_recording_and_keeps_the_clock() {
        let mut s = state();
        reducer(&mut s, Action::Studio(StudioAction::GoLive));
        reducer(&mut s, Action::Studio(StudioAction::ToggleRecording));
        assert!(s.studio.recording);
        s.studio.elapsed_secs = 95;

        reducer(&mut s, Action::Studio(StudioAction::EndSession));
        assert!(!s.studio.recording);
        assert_eq!(s.studio.elapsed_secs, 95);
    }

    #[test]
    fn toggles_flip_their_flags() {
        let mut s = state();
        assert!(s.studio.mic);
        reducer(&mut s, Action::Studio(StudioAction::ToggleMic));
        assert!(!s.studio.mic);
        reducer(&mut s, Action::Studio(StudioAction::ToggleScreen));
        assert!(s.studio.screen_share);
    }
}
