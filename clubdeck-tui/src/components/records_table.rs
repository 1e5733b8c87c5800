//! Generic table renderer for the list screens
//!
//! The table knows nothing about domains: the screen projects its visible
//! page into cell rows and hands them over together with facet labels and
//! paging data. Key handling emits the shared [`ListAction`] set through
//! the screen's action constructor; actions a screen has no use for are
//! ignored by its reducer.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::action::ListAction;
use crate::dispatch::{Component, EventKind};

/// One visible row: projected cells plus its selection mark.
pub struct TableRow {
    pub cells: Vec<String>,
    pub selected: bool,
}

pub struct RecordsTableProps<'a, A> {
    pub title: &'a str,
    pub headers: &'static [&'static str],
    /// Rows of the current page only.
    pub rows: Vec<TableRow>,
    /// Focused row, relative to the page.
    pub cursor: usize,
    /// Facet dimensions as `(key hint, active value)` pairs.
    pub facets: &'a [(&'static str, &'static str)],
    pub page: usize,
    pub total_pages: usize,
    /// `(first, last, total)` of the visible range, 1-based.
    pub summary: (usize, usize, usize),
    pub selected_count: usize,
    pub on_action: fn(ListAction) -> A,
}

pub struct RecordsTable;

impl<A> Component<A> for RecordsTable {
    type Props<'a> = RecordsTableProps<'a, A>;

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
            KeyCode::Char('j') | KeyCode::Down => Some(emit(ListAction::CursorDown)),
            KeyCode::Char('k') | KeyCode::Up => Some(emit(ListAction::CursorUp)),
            KeyCode::Char('n') | KeyCode::Right => Some(emit(ListAction::PageNext)),
            KeyCode::Char('p') | KeyCode::Left => Some(emit(ListAction::PagePrev)),
            KeyCode::Char(' ') => Some(emit(ListAction::ToggleRow)),
            KeyCode::Char('a') => Some(emit(ListAction::ToggleVisible)),
            KeyCode::Enter => Some(emit(ListAction::Open)),
            KeyCode::Char('c') => Some(emit(ListAction::Create)),
            KeyCode::Char('e') => Some(emit(ListAction::Export)),
            KeyCode::Char('m') => Some(emit(ListAction::Message)),
            KeyCode::Char('x') => Some(emit(ListAction::StatusFlip)),
            KeyCode::Char('/') => Some(emit(ListAction::SearchFocus(true))),
            KeyCode::Char('f') => Some(emit(ListAction::FacetCycle(0))),
            KeyCode::Char('g') => Some(emit(ListAction::FacetCycle(1))),
            KeyCode::Char('h') => Some(emit(ListAction::FacetCycle(2))),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default().borders(Borders::ALL).title(props.title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [facet_area, table_area, summary_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
                .areas(inner);

        let facet_line = props
            .facets
            .iter()
            .map(|(hint, value)| format!("{hint}: {value}"))
            .collect::<Vec<_>>()
            .join("  ·  ");
        frame.render_widget(
            Paragraph::new(Line::raw(facet_line)).style(Style::default().fg(Color::DarkGray)),
            facet_area,
        );

        let header = Row::new(
            std::iter::once(Cell::from(" "))
                .chain(props.headers.iter().map(|h| Cell::from(*h)))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = props.rows.iter().enumerate().map(|(i, row)| {
            let mark = if row.selected { "●" } else { " " };
            let mut r = Row::new(
                std::iter::once(Cell::from(mark))
                    .chain(row.cells.iter().map(|c| Cell::from(c.as_str())))
                    .collect::<Vec<_>>(),
            );
            if i == props.cursor {
                r = r.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            r
        });

        let mut widths = vec![Constraint::Length(1)];
        widths.extend(props.headers.iter().map(|_| Constraint::Fill(1)));
        frame.render_widget(Table::new(rows, widths).header(header), table_area);

        let (first, last, total) = props.summary;
        let summary = format!(
            "Page {}/{}  ·  Showing {}–{} of {}  ·  {} selected",
            props.page, props.total_pages, first, last, total, props.selected_count
        );
        frame.render_widget(
            Paragraph::new(summary).style(Style::default().fg(Color::DarkGray)),
            summary_area,
        );
    }
}
