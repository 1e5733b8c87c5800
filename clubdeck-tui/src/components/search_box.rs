//! Single-line search input with cursor

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dispatch::{Component, EventKind};

pub struct SearchBoxProps<'a, A> {
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Emitted on every keystroke with the full new value.
    pub on_change: fn(String) -> A,
    /// Emitted on Enter with the current value.
    pub on_submit: fn(String) -> A,
}

/// The free-text query box above each table. The cursor (a byte index into
/// the value) is the only internal state; the value itself lives in the
/// screen's list controls.
#[derive(Default)]
pub struct SearchBox {
    cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_left(&mut self, value: &str) {
        while self.cursor > 0 {
            self.cursor -= 1;
            if value.is_char_boundary(self.cursor) {
                break;
            }
        }
    }

    fn move_right(&mut self, value: &str) {
        while self.cursor < value.len() {
            self.cursor += 1;
            if value.is_char_boundary(self.cursor) {
                break;
            }
        }
    }

    fn insert(&mut self, value: &str, c: char) -> String {
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push(c);
        next.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        next
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start]);
        next.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(next)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        let rest = &value[self.cursor..];
        let (_, c) = rest.char_indices().next()?;
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..self.cursor]);
        next.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(next)
    }
}

impl<A> Component<A> for SearchBox {
    type Props<'a> = SearchBoxProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }
        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some((props.on_change)(self.insert(props.value, c))),
            KeyCode::Backspace => self.delete_before(props.value).map(props.on_change),
            KeyCode::Delete => self.delete_at(props.value).map(props.on_change),
            KeyCode::Left => {
                self.move_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search");

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if props.is_focused {
            let x = inner.x + props.value[..self.cursor].chars().count() as u16;
            if x < inner.x + inner.width {
                frame.set_cursor_position((x, inner.y));
            }
        }
    }
}
