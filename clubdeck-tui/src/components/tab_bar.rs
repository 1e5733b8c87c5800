//! Screen tabs along the top of the console

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Tabs,
    Frame,
};

use crate::dispatch::{Component, EventKind};
use crate::state::Screen;

pub struct TabBarProps<A> {
    pub active: Screen,
    pub on_select: fn(Screen) -> A,
}

pub struct TabBar;

impl TabBar {
    fn position(active: Screen) -> usize {
        Screen::ALL.iter().position(|s| *s == active).unwrap_or(0)
    }
}

impl<A> Component<A> for TabBar {
    type Props<'a> = TabBarProps<A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let EventKind::Key(key) = event else {
            return None;
        };
        let idx = Self::position(props.active);
        let count = Screen::ALL.len();
        match key.code {
            KeyCode::Tab => Some((props.on_select)(Screen::ALL[(idx + 1) % count])),
            KeyCode::BackTab => Some((props.on_select)(Screen::ALL[(idx + count - 1) % count])),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let tabs = Tabs::new(Screen::ALL.iter().map(|s| s.label()))
            .select(Self::position(props.active))
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        frame.render_widget(tabs, area);
    }
}
