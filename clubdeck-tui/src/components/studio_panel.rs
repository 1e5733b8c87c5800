//! Live studio controls

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::StudioAction;
use crate::dispatch::{Component, EventKind};
use crate::state::{StudioState, StudioStatus};

pub struct StudioPanelProps<'a, A> {
    pub studio: &'a StudioState,
    pub on_action: fn(StudioAction) -> A,
}

pub struct StudioPanel;

fn clock(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

fn switch(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

impl<A> Component<A> for StudioPanel {
    type Props<'a> = StudioPanelProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let EventKind::Key(key) = event else {
            return None;
        };
        let emit = props.on_action;
        match key.code {
            KeyCode::Char('g') => Some(emit(StudioAction::GoLive)),
            KeyCode::Char('x') => Some(emit(StudioAction::EndSession)),
            KeyCode::Char('m') => Some(emit(StudioAction::ToggleMic)),
            KeyCode::Char('v') => Some(emit(StudioAction::ToggleCam)),
            KeyCode::Char('s') => Some(emit(StudioAction::ToggleScreen)),
            KeyCode::Char('r') => Some(emit(StudioAction::ToggleRecording)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let studio = props.studio;
        let block = Block::default().borders(Borders::ALL).title(" Studio ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let badge_style = match studio.status {
            StudioStatus::Preview => Style::default().fg(Color::Yellow),
            StudioStatus::Live => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            StudioStatus::Ended => Style::default().fg(Color::DarkGray),
        };

        let mut status_line = vec![Span::styled(studio.status.label(), badge_style)];
        if studio.status != StudioStatus::Preview {
            status_line.push(Span::raw(format!("  on air {}", clock(studio.elapsed_secs))));
        }
        if studio.recording {
            status_line.push(Span::styled(
                "  ● REC",
                Style::default().fg(Color::Red),
            ));
        }

        let lines = vec![
            Line::from(status_line),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Session   ", Style::default().fg(Color::DarkGray)),
                Span::raw(studio.title.as_str()),
            ]),
            Line::from(vec![
                Span::styled("RTMP      ", Style::default().fg(Color::DarkGray)),
                Span::raw(studio.rtmp_url.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Stream key", Style::default().fg(Color::DarkGray)),
                Span::raw(format!(" {}", studio.stream_key)),
            ]),
            Line::raw(""),
            Line::raw(format!(
                "Mic [{}] · Cam [{}] · Screen [{}] · Recording [{}]",
                switch(studio.mic),
                switch(studio.cam),
                switch(studio.screen_share),
                switch(studio.recording),
            )),
            Line::raw(""),
            Line::styled(
                "g go live · x end · m mic · v cam · s screen · r record",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{key, RenderHarness};
    use chrono::NaiveDate;

    use crate::state::AppState;

    fn pass(action: StudioAction) -> StudioAction {
        action
    }

    fn studio() -> StudioState {
        AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid")).studio
    }

    fn press(state: &StudioState, k: &str) -> Vec<StudioAction> {
        StudioPanel
            .handle_event(
                &EventKind::Key(key(k)),
                StudioPanelProps {
                    studio: state,
                    on_action: pass,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn keys_map_to_studio_actions() {
        let s = studio();
        assert_eq!(press(&s, "g"), vec![StudioAction::GoLive]);
        assert_eq!(press(&s, "x"), vec![StudioAction::EndSession]);
        assert_eq!(press(&s, "m"), vec![StudioAction::ToggleMic]);
        assert_eq!(press(&s, "r"), vec![StudioAction::ToggleRecording]);
        assert!(press(&s, "z").is_empty());
    }

    #[test]
    fn preview_renders_without_the_clock() {
        let s = studio();
        let mut harness = RenderHarness::new(80, 12);
        let out = harness.render_to_string(|frame| {
            StudioPanel.render(
                frame,
                frame.area(),
                StudioPanelProps {
                    studio: &s,
                    on_action: pass,
                },
            );
        });
        assert!(out.contains("PREVIEW"));
        assert!(!out.contains("on air"));
        assert!(out.contains("Mic [on]"));
    }

    #[test]
    fn live_session_shows_the_elapsed_clock() {
        let mut s = studio();
        s.status = StudioStatus::Live;
        s.elapsed_secs = 3725;
        s.recording = true;

        let mut harness = RenderHarness::new(80, 12);
        let out = harness.render_to_string(|frame| {
            StudioPanel.render(
                frame,
                frame.area(),
                StudioPanelProps {
                    studio: &s,
                    on_action: pass,
                },
            );
        });
        assert!(out.contains("LIVE"));
        assert!(out.contains("on air 01:02:05"));
        assert!(out.contains("REC"));
    }
}
