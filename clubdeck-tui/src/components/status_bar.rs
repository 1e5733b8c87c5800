//! Bottom status line: key hints, overridden by a transient toast

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::dispatch::Component;

pub struct StatusBarProps<'a> {
    pub hints: &'a str,
    pub toast: Option<&'a str>,
}

pub struct StatusBar;

impl<A> Component<A> for StatusBar {
    type Props<'a> = StatusBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let (text, style) = match props.toast {
            Some(toast) => (
                toast,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (props.hints, Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}
