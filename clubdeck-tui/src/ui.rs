//! Screen composition and event routing
//!
//! One [`DeckUi`] owns every component and translates between the terminal
//! and the action queue. The table screens all flow through the same
//! search-box/records-table pair; only their projections, facets and action
//! constructors differ.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use clubdeck_core::store::Record;

use crate::action::{Action, ListAction};
use crate::components::{
    CalendarBoard, CalendarBoardProps, FormDrawer, FormDrawerProps, RecordsTable,
    RecordsTableProps, SearchBox, SearchBoxProps, StatusBar, StatusBarProps, StudioPanel,
    StudioPanelProps, TabBar, TabBarProps, TableRow,
};
use crate::dispatch::{Component, EventKind, EventOutcome};
use crate::model::{Campaign, MediaAsset, Member, Offer, Ticket};
use crate::state::{AppState, ListControls, Screen, SupportTab, SyncState, SyncStatus};

/// Everything one table screen needs, both for rendering and for key
/// routing.
struct TableView<'a, R> {
    title: &'static str,
    headers: &'static [&'static str],
    placeholder: &'static str,
    filtered: Vec<&'a R>,
    controls: &'a ListControls,
    facets: Vec<(&'static str, &'static str)>,
    cells: fn(&R) -> Vec<String>,
    on_action: fn(ListAction) -> Action,
    on_query: fn(String) -> Action,
    on_blur: fn(String) -> Action,
}

pub struct DeckUi {
    tabs: TabBar,
    search: SearchBox,
    table: RecordsTable,
    calendar: CalendarBoard,
    drawer: FormDrawer,
    status: StatusBar,
    studio: StudioPanel,
}

impl Default for DeckUi {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckUi {
    pub fn new() -> Self {
        Self {
            tabs: TabBar,
            search: SearchBox::new(),
            table: RecordsTable,
            calendar: CalendarBoard,
            drawer: FormDrawer,
            status: StatusBar,
            studio: StudioPanel,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [tab_area, body, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        self.tabs.render(
            frame,
            tab_area,
            TabBarProps {
                active: state.screen,
                on_select: Action::ScreenSet,
            },
        );

        match state.screen {
            Screen::Members => self.render_table_screen(frame, body, members_view(state)),
            Screen::Deals => {
                let [sync_area, list_area] =
                    Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).areas(body);
                render_sync_panel(frame, sync_area, &state.deals.sync);
                self.render_table_screen(frame, list_area, deals_view(state));
            }
            Screen::Live => self.calendar.render(frame, body, calendar_props(state)),
            Screen::Messaging => self.render_table_screen(frame, body, campaigns_view(state)),
            Screen::Support => {
                let [inner_tabs, list_area] =
                    Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(body);
                render_support_tabs(frame, inner_tabs, state.support.tab);
                match state.support.tab {
                    SupportTab::Tickets => {
                        self.render_table_screen(frame, list_area, tickets_view(state))
                    }
                    SupportTab::Media => {
                        self.render_table_screen(frame, list_area, media_view(state))
                    }
                }
            }
            Screen::Studio => self.studio.render(
                frame,
                body,
                StudioPanelProps {
                    studio: &state.studio,
                    on_action: Action::Studio,
                },
            ),
        }

        Component::<Action>::render(
            &mut self.status,
            frame,
            status_area,
            StatusBarProps {
                hints: hints(state.screen),
                toast: state.toast.as_deref(),
            },
        );

        // the drawer sits on top of whatever screen opened it
        if let Some(drawer) = &state.drawer {
            self.drawer.render(
                frame,
                area,
                FormDrawerProps {
                    drawer,
                    on_action: Action::Drawer,
                },
            );
        }
    }

    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if matches!(event, EventKind::Resize(..)) {
            return EventOutcome::ignored().with_render();
        }

        // an open drawer captures every key
        if let Some(drawer) = &state.drawer {
            let props = FormDrawerProps {
                drawer,
                on_action: Action::Drawer,
            };
            return EventOutcome::from_actions(self.drawer.handle_event(event, props));
        }

        let EventKind::Key(key) = event else {
            return EventOutcome::ignored();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return EventOutcome::action(Action::Quit);
        }

        let searching = search_focused(state);
        if !searching {
            if key.code == KeyCode::Char('q') {
                return EventOutcome::action(Action::Quit);
            }
            let tab_actions: Vec<Action> = self
                .tabs
                .handle_event(
                    event,
                    TabBarProps {
                        active: state.screen,
                        on_select: Action::ScreenSet,
                    },
                )
                .into_iter()
                .collect();
            if !tab_actions.is_empty() {
                return EventOutcome::from_actions(tab_actions);
            }
        }

        match state.screen {
            Screen::Members => self.map_table_event(event, members_view(state)),
            Screen::Deals => {
                if !searching {
                    match key.code {
                        KeyCode::Char('s') => return EventOutcome::action(Action::SyncStart),
                        KeyCode::Char('z') => return EventOutcome::action(Action::SyncCancel),
                        _ => {}
                    }
                }
                self.map_table_event(event, deals_view(state))
            }
            Screen::Live => {
                EventOutcome::from_actions(self.calendar.handle_event(event, calendar_props(state)))
            }
            Screen::Messaging => self.map_table_event(event, campaigns_view(state)),
            Screen::Support => {
                if !searching && key.code == KeyCode::Char('t') {
                    return EventOutcome::action(Action::SupportTabSet(state.support.tab.toggled()));
                }
                match state.support.tab {
                    SupportTab::Tickets => self.map_table_event(event, tickets_view(state)),
                    SupportTab::Media => self.map_table_event(event, media_view(state)),
                }
            }
            Screen::Studio => EventOutcome::from_actions(self.studio.handle_event(
                event,
                StudioPanelProps {
                    studio: &state.studio,
                    on_action: Action::Studio,
                },
            )),
        }
    }

    fn render_table_screen<R: Record>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        view: TableView<'_, R>,
    ) {
        let [search_area, table_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

        self.search.render(
            frame,
            search_area,
            SearchBoxProps {
                value: &view.controls.query,
                placeholder: view.placeholder,
                is_focused: view.controls.search_focused,
                on_change: view.on_query,
                on_submit: view.on_blur,
            },
        );
        self.table
            .render(frame, table_area, table_props(&view));
    }

    fn map_table_event<R: Record>(
        &mut self,
        event: &EventKind,
        view: TableView<'_, R>,
    ) -> EventOutcome<Action> {
        if view.controls.search_focused {
            if let EventKind::Key(key) = event {
                if key.code == KeyCode::Esc {
                    return EventOutcome::action((view.on_blur)(String::new()));
                }
            }
            let props = SearchBoxProps {
                value: &view.controls.query,
                placeholder: view.placeholder,
                is_focused: true,
                on_change: view.on_query,
                on_submit: view.on_blur,
            };
            return EventOutcome::from_actions(self.search.handle_event(event, props));
        }
        let props = table_props(&view);
        EventOutcome::from_actions(self.table.handle_event(event, props))
    }
}

fn table_props<'a, R: Record>(view: &'a TableView<'_, R>) -> RecordsTableProps<'a, Action> {
    let len = view.filtered.len();
    let rows = view
        .controls
        .page
        .slice(&view.filtered)
        .iter()
        .map(|r| TableRow {
            cells: (view.cells)(r),
            selected: view.controls.selection.contains(r.id()),
        })
        .collect();
    RecordsTableProps {
        title: view.title,
        headers: view.headers,
        rows,
        cursor: view.controls.cursor,
        facets: &view.facets,
        page: view.controls.page.clamped(len),
        total_pages: view.controls.page.total_pages(len),
        summary: view.controls.page.summary(len),
        selected_count: view.controls.selection.len(),
        on_action: view.on_action,
    }
}

fn search_focused(state: &AppState) -> bool {
    match state.screen {
        Screen::Members => state.members.controls.search_focused,
        Screen::Deals => state.deals.controls.search_focused,
        Screen::Messaging => state.messaging.controls.search_focused,
        Screen::Support => match state.support.tab {
            SupportTab::Tickets => state.support.tickets.controls.search_focused,
            SupportTab::Media => state.support.media.controls.search_focused,
        },
        Screen::Live | Screen::Studio => false,
    }
}

fn calendar_props(state: &AppState) -> CalendarBoardProps<'_, Action> {
    CalendarBoardProps {
        cursor: state.live.calendar,
        today: state.today,
        events: state.live.store.records(),
        focused: state.live.cursor,
        on_action: Action::Live,
    }
}

fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Members => {
            "/ search · f/g/h filter · j/k rows · n/p page · space/a select · enter edit · c create · e export · m message · tab screens · q quit"
        }
        Screen::Deals => {
            "/ search · f/g filter · x pause/resume · s sync · z cancel sync · e export · tab screens · q quit"
        }
        Screen::Live => {
            "p/n month · t today · m/w/l view · j/k rows · enter edit · c create · x advance · e export · q quit"
        }
        Screen::Messaging => {
            "/ search · f/g filter · enter edit · c compose · e export · tab screens · q quit"
        }
        Screen::Support => {
            "t tickets/media · / search · f filter · x resolve · enter open · c upload · e export · q quit"
        }
        Screen::Studio => "g go live · x end · m/v/s/r toggles · tab screens · q quit",
    }
}

fn render_sync_panel(frame: &mut Frame, area: Rect, sync: &SyncState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Partner Network Sync ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = match sync.status {
        SyncStatus::Syncing => Line::styled(
            "Status: Syncing…",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        SyncStatus::Idle => {
            let last = sync
                .last_sync
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "never".into());
            Line::raw(format!("Status: Idle · Last sync {last}"))
        }
    };

    let mut lines = vec![status];
    for log in sync.logs.iter().take(3) {
        lines.push(Line::styled(
            format!("[{}] {}", log.ts.format("%m-%d %H:%M"), log.message),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_support_tabs(frame: &mut Frame, area: Rect, active: SupportTab) {
    let selected = match active {
        SupportTab::Tickets => 0,
        SupportTab::Media => 1,
    };
    let tabs = Tabs::new(["Tickets", "Media"])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .divider("/");
    frame.render_widget(tabs, area);
}

// Query/blur constructors, one pair per table screen. Enum variants compose
// with plain functions only, so these exist as named fns for the fn-pointer
// props.

fn members_query(q: String) -> Action {
    Action::Members(ListAction::QueryChange(q))
}
fn members_blur(_: String) -> Action {
    Action::Members(ListAction::SearchFocus(false))
}
fn deals_query(q: String) -> Action {
    Action::Deals(ListAction::QueryChange(q))
}
fn deals_blur(_: String) -> Action {
    Action::Deals(ListAction::SearchFocus(false))
}
fn tickets_query(q: String) -> Action {
    Action::Tickets(ListAction::QueryChange(q))
}
fn tickets_blur(_: String) -> Action {
    Action::Tickets(ListAction::SearchFocus(false))
}
fn media_query(q: String) -> Action {
    Action::Media(ListAction::QueryChange(q))
}
fn media_blur(_: String) -> Action {
    Action::Media(ListAction::SearchFocus(false))
}
fn campaigns_query(q: String) -> Action {
    Action::Campaigns(ListAction::QueryChange(q))
}
fn campaigns_blur(_: String) -> Action {
    Action::Campaigns(ListAction::SearchFocus(false))
}

fn members_view(state: &AppState) -> TableView<'_, Member> {
    TableView {
        title: " Members ",
        headers: &["Member", "Email", "Role", "Tier", "Status", "Last Active"],
        placeholder: "Search name, email, id, broker…",
        filtered: state.members.filtered(),
        controls: &state.members.controls,
        facets: vec![
            ("Segment[f]", state.members.segment.label()),
            ("Role[g]", state.members.role.label()),
            ("Status[h]", state.members.status.label()),
        ],
        cells: member_cells,
        on_action: Action::Members,
        on_query: members_query,
        on_blur: members_blur,
    }
}

fn member_cells(m: &Member) -> Vec<String> {
    vec![
        m.name.clone(),
        m.email.clone(),
        m.role.label().into(),
        m.tier.label().into(),
        m.subscription.status.label().into(),
        m.last_active.to_string(),
    ]
}

fn deals_view(state: &AppState) -> TableView<'_, Offer> {
    TableView {
        title: " Deals & Partner Offers ",
        headers: &["Offer", "Brand", "Category", "Status", "Code", "Redeemed", "Valid To"],
        placeholder: "Search title, brand, code…",
        filtered: state.deals.filtered(),
        controls: &state.deals.controls,
        facets: vec![
            ("Status[f]", state.deals.status.label()),
            ("Tier[g]", state.deals.tier.label()),
        ],
        cells: offer_cells,
        on_action: Action::Deals,
        on_query: deals_query,
        on_blur: deals_blur,
    }
}

fn offer_cells(o: &Offer) -> Vec<String> {
    vec![
        o.title.clone(),
        o.brand.clone(),
        o.category.clone(),
        o.status.label().into(),
        o.code_value.clone(),
        o.redemptions_total.to_string(),
        o.valid_to.to_string(),
    ]
}

fn tickets_view(state: &AppState) -> TableView<'_, Ticket> {
    TableView {
        title: " Support Tickets ",
        headers: &["Subject", "Status", "Priority", "Assignee", "Requester", "SLA Due"],
        placeholder: "Search subject, assignee…",
        filtered: state.support.tickets.filtered(),
        controls: &state.support.tickets.controls,
        facets: vec![
            ("Status[f]", state.support.tickets.status.label()),
            ("Priority[g]", state.support.tickets.priority.label()),
        ],
        cells: ticket_cells,
        on_action: Action::Tickets,
        on_query: tickets_query,
        on_blur: tickets_blur,
    }
}

fn ticket_cells(t: &Ticket) -> Vec<String> {
    vec![
        t.subject.clone(),
        t.status.label().into(),
        t.priority.label().into(),
        t.assignee.clone().unwrap_or_default(),
        t.requester.name.clone(),
        t.sla_due
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default(),
    ]
}

fn media_view(state: &AppState) -> TableView<'_, MediaAsset> {
    TableView {
        title: " Media Library ",
        headers: &["Asset", "Type", "Size", "Version", "Tags", "Created"],
        placeholder: "Search name, tags…",
        filtered: state.support.media.filtered(),
        controls: &state.support.media.controls,
        facets: vec![("Type[f]", state.support.media.kind.label())],
        cells: asset_cells,
        on_action: Action::Media,
        on_query: media_query,
        on_blur: media_blur,
    }
}

fn asset_cells(a: &MediaAsset) -> Vec<String> {
    vec![
        a.name.clone(),
        a.kind.label().into(),
        a.size.clone(),
        format!("v{}", a.version),
        a.tags.join(", "),
        a.created_at.format("%Y-%m-%d").to_string(),
    ]
}

fn campaigns_view(state: &AppState) -> TableView<'_, Campaign> {
    TableView {
        title: " Broadcast Campaigns ",
        headers: &["Campaign", "Channel", "Status", "Segments", "Scheduled", "Opens"],
        placeholder: "Search name, subject…",
        filtered: state.messaging.filtered(),
        controls: &state.messaging.controls,
        facets: vec![
            ("Channel[f]", state.messaging.channel.label()),
            ("Status[g]", state.messaging.status.label()),
        ],
        cells: campaign_cells,
        on_action: Action::Campaigns,
        on_query: campaigns_query,
        on_blur: campaigns_blur,
    }
}

fn campaign_cells(c: &Campaign) -> Vec<String> {
    vec![
        c.name.clone(),
        c.channel.label().into(),
        c.status.label().into(),
        c.segments
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", "),
        c.schedule_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default(),
        c.metrics.opens.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{CalendarAction, DrawerAction, StudioAction};
    use crate::dispatch::testing::{key, RenderHarness};
    use crate::reducer::reducer;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid"))
    }

    fn map(ui: &mut DeckUi, s: &AppState, k: &str) -> Vec<Action> {
        ui.map_event(&EventKind::Key(key(k)), s).actions
    }

    #[test]
    fn tab_switches_screens() {
        let mut ui = DeckUi::new();
        let s = state();
        assert_eq!(map(&mut ui, &s, "tab"), vec![Action::ScreenSet(Screen::Deals)]);
    }

    #[test]
    fn slash_focuses_search_and_typing_edits_the_query() {
        let mut ui = DeckUi::new();
        let mut s = state();
        assert_eq!(
            map(&mut ui, &s, "/"),
            vec![Action::Members(ListAction::SearchFocus(true))]
        );

        reducer(&mut s, Action::Members(ListAction::SearchFocus(true)));
        assert_eq!(
            map(&mut ui, &s, "n"),
            vec![Action::Members(ListAction::QueryChange("n".into()))]
        );

        // esc blurs without touching the query
        assert_eq!(
            map(&mut ui, &s, "esc"),
            vec![Action::Members(ListAction::SearchFocus(false))]
        );
    }

    #[test]
    fn q_quits_only_when_search_is_not_focused() {
        let mut ui = DeckUi::new();
        let mut s = state();
        assert_eq!(map(&mut ui, &s, "q"), vec![Action::Quit]);

        reducer(&mut s, Action::Members(ListAction::SearchFocus(true)));
        assert_eq!(
            map(&mut ui, &s, "q"),
            vec![Action::Members(ListAction::QueryChange("q".into()))]
        );
    }

    #[test]
    fn deals_screen_maps_the_sync_keys() {
        let mut ui = DeckUi::new();
        let mut s = state();
        reducer(&mut s, Action::ScreenSet(Screen::Deals));
        assert_eq!(map(&mut ui, &s, "s"), vec![Action::SyncStart]);
        assert_eq!(map(&mut ui, &s, "z"), vec![Action::SyncCancel]);
    }

    #[test]
    fn support_t_toggles_the_inner_tab() {
        let mut ui = DeckUi::new();
        let mut s = state();
        reducer(&mut s, Action::ScreenSet(Screen::Support));
        assert_eq!(
            map(&mut ui, &s, "t"),
            vec![Action::SupportTabSet(SupportTab::Media)]
        );
    }

    #[test]
    fn live_and_studio_route_to_their_components() {
        let mut ui = DeckUi::new();
        let mut s = state();
        reducer(&mut s, Action::ScreenSet(Screen::Live));
        assert_eq!(
            map(&mut ui, &s, "n"),
            vec![Action::Live(CalendarAction::Next)]
        );

        reducer(&mut s, Action::ScreenSet(Screen::Studio));
        assert_eq!(
            map(&mut ui, &s, "g"),
            vec![Action::Studio(StudioAction::GoLive)]
        );
    }

    #[test]
    fn an_open_drawer_captures_the_keys() {
        let mut ui = DeckUi::new();
        let mut s = state();
        reducer(&mut s, Action::Members(ListAction::Open));
        assert_eq!(map(&mut ui, &s, "esc"), vec![Action::Drawer(DrawerAction::Cancel)]);
        // even globals like quit go to the form while it is open
        assert!(matches!(
            map(&mut ui, &s, "q")[0],
            Action::Drawer(DrawerAction::FieldInput(_))
        ));
    }

    #[test]
    fn resize_requests_a_render() {
        let mut ui = DeckUi::new();
        let s = state();
        let outcome = ui.map_event(&EventKind::Resize(120, 40), &s);
        assert!(outcome.needs_render);
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn members_screen_renders_rows_and_hints() {
        let mut ui = DeckUi::new();
        let s = state();
        let mut harness = RenderHarness::new(150, 30);
        let out = harness.render_to_string(|frame| ui.render(frame, frame.area(), &s));

        assert!(out.contains("Members"));
        assert!(out.contains("Alex Benjamin"));
        assert!(out.contains("Segment[f]: All"));
        assert!(out.contains("q quit"));
    }

    #[test]
    fn deals_screen_shows_the_sync_panel() {
        let mut ui = DeckUi::new();
        let mut s = state();
        reducer(&mut s, Action::ScreenSet(Screen::Deals));

        let mut harness = RenderHarness::new(120, 34);
        let out = harness.render_to_string(|frame| ui.render(frame, frame.area(), &s));
        assert!(out.contains("Partner Network Sync"));
        assert!(out.contains("Fetched 2 new offers"));
        assert!(out.contains("McDonald's"));
    }

    #[test]
    fn drawer_renders_over_the_screen() {
        let mut ui = DeckUi::new();
        let mut s = state();
        reducer(&mut s, Action::Members(ListAction::Open));

        let mut harness = RenderHarness::new(120, 30);
        let out = harness.render_to_string(|frame| ui.render(frame, frame.area(), &s));
        assert!(out.contains("Edit Member mb_4101"));
    }
}
