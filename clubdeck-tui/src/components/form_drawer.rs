//! Slide-in drawer hosting the create/edit forms
//!
//! The drawer owns no form data; fields, focus and the validation alert
//! all live in [`DrawerState`] and every edit goes through actions.
//! Editing appends to and deletes from the end of the focused field.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::action::DrawerAction;
use crate::dispatch::{Component, EventKind};
use crate::state::DrawerState;

const DRAWER_WIDTH: u16 = 46;

pub struct FormDrawerProps<'a, A> {
    pub drawer: &'a DrawerState,
    pub on_action: fn(DrawerAction) -> A,
}

pub struct FormDrawer;

impl<A> Component<A> for FormDrawer {
    type Props<'a> = FormDrawerProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let EventKind::Key(key) = event else {
            return None;
        };
        let emit = props.on_action;
        let value = props
            .drawer
            .fields
            .get(props.drawer.focus)
            .map(|f| f.value.as_str())
            .unwrap_or("");

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => Some(emit(DrawerAction::FieldInput(String::new()))),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(emit(DrawerAction::Cancel)),
            KeyCode::Enter => Some(emit(DrawerAction::Save)),
            KeyCode::Tab | KeyCode::Down => Some(emit(DrawerAction::FocusNext)),
            KeyCode::BackTab | KeyCode::Up => Some(emit(DrawerAction::FocusPrev)),
            KeyCode::Char(c) => {
                let mut next = value.to_string();
                next.push(c);
                Some(emit(DrawerAction::FieldInput(next)))
            }
            KeyCode::Backspace => {
                let mut next = value.to_string();
                next.pop()
                    .map(|_| emit(DrawerAction::FieldInput(next)))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let width = DRAWER_WIDTH.min(area.width);
        let panel = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: area.height,
        };
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", props.drawer.title));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let [fields_area, alert_area, hints_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
                .areas(inner);

        let mut lines: Vec<Line> = Vec::with_capacity(props.drawer.fields.len() * 3);
        for (i, field) in props.drawer.fields.iter().enumerate() {
            let focused = i == props.drawer.focus;
            lines.push(Line::styled(
                field.label,
                Style::default().fg(Color::DarkGray),
            ));
            let value_style = if focused {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if focused { "▸ " } else { "  " };
            lines.push(Line::styled(
                format!("{marker}{}", field.value),
                value_style,
            ));
            lines.push(Line::raw(""));
        }

        // keep the focused field inside the viewport
        let focus_line = (props.drawer.focus * 3 + 1) as u16;
        let scroll = focus_line.saturating_sub(fields_area.height.saturating_sub(2));
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), fields_area);

        if let Some(alert) = &props.drawer.error {
            frame.render_widget(
                Paragraph::new(alert.as_str()).style(Style::default().fg(Color::Red)),
                alert_area,
            );
        }
        frame.render_widget(
            Paragraph::new("tab next · enter save · esc cancel")
                .style(Style::default().fg(Color::DarkGray)),
            hints_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{key, RenderHarness};
    use crate::state::{DrawerTarget, FormField};

    fn pass(action: DrawerAction) -> DrawerAction {
        action
    }

    fn drawer() -> DrawerState {
        DrawerState {
            title: "Edit Member mb_4101".into(),
            fields: vec![
                FormField::new("Name", "Alex Benjamin"),
                FormField::new("Email", "alex@example.com"),
            ],
            focus: 0,
            error: None,
            target: DrawerTarget::Member(Some("mb_4101".into())),
        }
    }

    fn press(state: &DrawerState, k: &str) -> Vec<DrawerAction> {
        FormDrawer
            .handle_event(
                &EventKind::Key(key(k)),
                FormDrawerProps {
                    drawer: state,
                    on_action: pass,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn typing_appends_to_the_focused_field() {
        let state = drawer();
        assert_eq!(
            press(&state, "!"),
            vec![DrawerAction::FieldInput("Alex Benjamin!".into())]
        );
    }

    #[test]
    fn backspace_trims_and_is_silent_when_empty() {
        let mut state = drawer();
        assert_eq!(
            press(&state, "backspace"),
            vec![DrawerAction::FieldInput("Alex Benjami".into())]
        );

        state.fields[0].value.clear();
        assert!(press(&state, "backspace").is_empty());
    }

    #[test]
    fn ctrl_u_clears_the_focused_field() {
        let state = drawer();
        assert_eq!(
            press(&state, "ctrl+u"),
            vec![DrawerAction::FieldInput(String::new())]
        );
    }

    #[test]
    fn structural_keys_map_to_drawer_actions() {
        let state = drawer();
        assert_eq!(press(&state, "tab"), vec![DrawerAction::FocusNext]);
        assert_eq!(press(&state, "backtab"), vec![DrawerAction::FocusPrev]);
        assert_eq!(press(&state, "enter"), vec![DrawerAction::Save]);
        assert_eq!(press(&state, "esc"), vec![DrawerAction::Cancel]);
    }

    #[test]
    fn renders_fields_and_alert() {
        let mut state = drawer();
        state.error = Some("Campaign name is required.".into());

        let mut harness = RenderHarness::new(80, 20);
        let out = harness.render_to_string(|frame| {
            FormDrawer.render(
                frame,
                frame.area(),
                FormDrawerProps {
                    drawer: &state,
                    on_action: pass,
                },
            );
        });
        assert!(out.contains("Edit Member mb_4101"));
        assert!(out.contains("Alex Benjamin"));
        assert!(out.contains("Campaign name is required."));
        assert!(out.contains("esc cancel"));
    }
}
