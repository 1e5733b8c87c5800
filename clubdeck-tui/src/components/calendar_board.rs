//! Calendar for the Live & Events screen
//!
//! Renders the month grid, week columns or the list window for the cursor
//! month, all derived on the fly from the calendar view-model. Row focus
//! always walks the month window (list ordering), whatever the view.

use chrono::{Datelike, NaiveDate};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use clubdeck_core::calendar::{
    self, CalendarCursor, CalendarView, Scheduled,
};

use crate::action::CalendarAction;
use crate::dispatch::{Component, EventKind};
use crate::model::LiveEvent;

/// Month cells list at most this many events before collapsing to "+n more".
const CELL_EVENT_CAP: usize = 3;

pub struct CalendarBoardProps<'a, A> {
    pub cursor: CalendarCursor,
    pub today: NaiveDate,
    pub events: &'a [LiveEvent],
    /// Focused index into the cursor month's window.
    pub focused: usize,
    pub on_action: fn(CalendarAction) -> A,
}

pub struct CalendarBoard;

impl<A> Component<A> for CalendarBoard {
    type Props<'a> = CalendarBoardProps<'a, A>;

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
            KeyCode::Char('p') | KeyCode::Left => Some(emit(CalendarAction::Prev)),
            KeyCode::Char('n') | KeyCode::Right => Some(emit(CalendarAction::Next)),
            KeyCode::Char('t') => Some(emit(CalendarAction::Today)),
            KeyCode::Char('m') => Some(emit(CalendarAction::View(CalendarView::Month))),
            KeyCode::Char('w') => Some(emit(CalendarAction::View(CalendarView::Week))),
            KeyCode::Char('l') => Some(emit(CalendarAction::View(CalendarView::List))),
            KeyCode::Char('j') | KeyCode::Down => Some(emit(CalendarAction::CursorDown)),
            KeyCode::Char('k') | KeyCode::Up => Some(emit(CalendarAction::CursorUp)),
            KeyCode::Enter => Some(emit(CalendarAction::Open)),
            KeyCode::Char('c') => Some(emit(CalendarAction::Create)),
            KeyCode::Char('e') => Some(emit(CalendarAction::Export)),
            KeyCode::Char('x') => Some(emit(CalendarAction::StatusAdvance)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let views = [CalendarView::Month, CalendarView::Week, CalendarView::List]
            .iter()
            .map(|v| {
                if *v == props.cursor.view {
                    format!("[{}]", v.label())
                } else {
                    v.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let title = format!(
            " {}  ·  {} ",
            props.cursor.date.format("%B %Y"),
            views
        );
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let window = calendar::month_window(props.events, props.cursor.date);
        let focused_id = window.get(props.focused).map(|e| e.id.as_str());

        match props.cursor.view {
            CalendarView::Month => self.render_month(frame, inner, &props, focused_id),
            CalendarView::Week => self.render_week(frame, inner, &props),
            CalendarView::List => self.render_list(frame, inner, &window, props.focused),
        }
    }
}

impl CalendarBoard {
    fn render_month<A>(
        &self,
        frame: &mut Frame,
        area: Rect,
        props: &CalendarBoardProps<'_, A>,
        focused_id: Option<&str>,
    ) {
        let [head_area, grid_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);

        let head_cells = Layout::horizontal([Constraint::Fill(1); 7]).split(head_area);
        for (i, name) in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].iter().enumerate() {
            frame.render_widget(
                Paragraph::new(*name).style(Style::default().fg(Color::DarkGray)),
                head_cells[i],
            );
        }

        let matrix = calendar::month_matrix(props.cursor.date);
        let week_rows = Layout::vertical([Constraint::Fill(1); 6]).split(grid_area);
        for (w, week) in matrix.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Fill(1); 7]).split(week_rows[w]);
            for (d, day) in week.iter().enumerate() {
                self.render_day_cell(frame, cells[d], *day, props, focused_id);
            }
        }
    }

    fn render_day_cell<A>(
        &self,
        frame: &mut Frame,
        area: Rect,
        day: NaiveDate,
        props: &CalendarBoardProps<'_, A>,
        focused_id: Option<&str>,
    ) {
        let in_month = day.month() == props.cursor.date.month();
        let day_style = if day == props.today {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if in_month {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut lines = vec![Line::styled(day.day().to_string(), day_style)];

        let bucket = calendar::events_on(props.events, day);
        let room = area.height.saturating_sub(1) as usize;
        let visible = bucket.len().min(CELL_EVENT_CAP).min(room);
        for event in &bucket[..visible] {
            let style = if Some(event.id.as_str()) == focused_id {
                Style::default().add_modifier(Modifier::REVERSED)
            } else if in_month {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::styled(event.title.clone(), style));
        }
        if bucket.len() > visible {
            lines.push(Line::styled(
                format!("+{} more", bucket.len() - visible),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_week<A>(&self, frame: &mut Frame, area: Rect, props: &CalendarBoardProps<'_, A>) {
        let days = calendar::week_days(props.cursor.date);
        let columns = Layout::horizontal([Constraint::Fill(1); 7]).split(area);
        for (i, day) in days.iter().enumerate() {
            let head_style = if *day == props.today {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let mut lines = vec![Line::styled(day.format("%a %e").to_string(), head_style)];
            for event in calendar::events_on(props.events, *day) {
                lines.push(Line::styled(
                    format!("{} {}", event.starts_at().format("%H:%M"), event.title),
                    Style::default().fg(Color::Green),
                ));
            }
            frame.render_widget(Paragraph::new(lines), columns[i]);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, window: &[&LiveEvent], focused: usize) {
        if window.is_empty() {
            frame.render_widget(
                Paragraph::new("No events this month.")
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }
        let lines: Vec<Line> = window
            .iter()
            .enumerate()
            .map(|(i, event)| {
                let text = format!(
                    "{}  {}  [{}]  {}",
                    event.start.format("%d %b %H:%M"),
                    event.title,
                    event.status.label(),
                    event.host,
                );
                if i == focused {
                    Line::styled(text, Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    Line::raw(text)
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{key, RenderHarness};
    use crate::model::seed;

    fn pass(action: CalendarAction) -> CalendarAction {
        action
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid")
    }

    fn props(
        events: &[LiveEvent],
        view: CalendarView,
    ) -> CalendarBoardProps<'_, CalendarAction> {
        let mut cursor = CalendarCursor::new(date(2025, 8, 22));
        cursor.set_view(view);
        CalendarBoardProps {
            cursor,
            today: date(2025, 8, 22),
            events,
            focused: 0,
            on_action: pass,
        }
    }

    fn press(k: &str) -> Vec<CalendarAction> {
        CalendarBoard
            .handle_event(&EventKind::Key(key(k)), props(&[], CalendarView::Month))
            .into_iter()
            .collect()
    }

    #[test]
    fn navigation_keys_map_to_calendar_actions() {
        assert_eq!(press("p"), vec![CalendarAction::Prev]);
        assert_eq!(press("n"), vec![CalendarAction::Next]);
        assert_eq!(press("t"), vec![CalendarAction::Today]);
        assert_eq!(press("x"), vec![CalendarAction::StatusAdvance]);
    }

    #[test]
    fn view_keys_switch_the_mode() {
        assert_eq!(press("w"), vec![CalendarAction::View(CalendarView::Week)]);
        assert_eq!(press("l"), vec![CalendarAction::View(CalendarView::List)]);
        assert_eq!(press("m"), vec![CalendarAction::View(CalendarView::Month)]);
    }

    #[test]
    fn month_view_places_events_in_their_day_cells() {
        let events = seed::events();
        let mut harness = RenderHarness::new(175, 32);
        let out = harness.render_to_string(|frame| {
            CalendarBoard.render(frame, frame.area(), props(&events, CalendarView::Month));
        });
        assert!(out.contains("August 2025"));
        assert!(out.contains("Live: Real Estate AMA"));
        assert!(out.contains("VIP Mixer - Dubai"));
    }

    #[test]
    fn list_view_orders_the_month_ascending() {
        let events = seed::events();
        let mut harness = RenderHarness::new(100, 12);
        let out = harness.render_to_string(|frame| {
            CalendarBoard.render(frame, frame.area(), props(&events, CalendarView::List));
        });
        let finance = out.find("Finance Power Hour").expect("15th listed");
        let ama = out.find("Live: Real Estate AMA").expect("24th listed");
        let mixer = out.find("VIP Mixer - Dubai").expect("28th listed");
        assert!(finance < ama && ama < mixer);
    }

    #[test]
    fn week_view_shows_day_headers() {
        let events = seed::events();
        let mut harness = RenderHarness::new(140, 16);
        let out = harness.render_to_string(|frame| {
            CalendarBoard.render(frame, frame.area(), props(&events, CalendarView::Week));
        });
        assert!(out.contains("Mon"));
        assert!(out.contains("Sun"));
    }
}
