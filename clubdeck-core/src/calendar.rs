//! Calendar view-model for event-typed records
//!
//! Month, week and list groupings are pure functions of a cursor date and a
//! view mode; nothing here is cached or persisted. Weeks start on Monday.
//! The month grid is always 6 weeks x 7 days (42 cells), so leading and
//! trailing cells can belong to adjacent months; renderers de-emphasize
//! those. An event lands in a day cell iff its start timestamp's calendar
//! date equals the cell's date; the time of day never matters for
//! bucketing.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Records that can be placed on the calendar.
pub trait Scheduled {
    fn starts_at(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    List,
}

impl CalendarView {
    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Month => "Month",
            CalendarView::Week => "Week",
            CalendarView::List => "List",
        }
    }
}

/// The reference date plus view mode every grid derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub date: NaiveDate,
    pub view: CalendarView,
}

impl CalendarCursor {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            view: CalendarView::default(),
        }
    }

    /// One month back in Month/List views, seven days back in Week view.
    pub fn prev(&mut self) {
        self.date = match self.view {
            CalendarView::Week => self.date - Days::new(7),
            _ => shift_months(self.date, -1),
        };
    }

    /// One month forward in Month/List views, seven days forward in Week view.
    pub fn next(&mut self) {
        self.date = match self.view {
            CalendarView::Week => self.date + Days::new(7),
            _ => shift_months(self.date, 1),
        };
    }

    pub fn today(&mut self, today: NaiveDate) {
        self.date = today;
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }
}

/// The Monday of the week containing `d`. Idempotent.
pub fn start_of_week(d: NaiveDate) -> NaiveDate {
    d - Days::new(u64::from(d.weekday().num_days_from_monday()))
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(28)
}

/// Move `d` by whole months, clamping the day into the target month
/// (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(d: NaiveDate, delta: i32) -> NaiveDate {
    let months = d.year() * 12 + d.month0() as i32 + delta;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    let day = d.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(d)
}

/// 6 weeks x 7 days starting at the Monday on or before the first of the
/// cursor's month. Always exactly 42 cells.
pub fn month_matrix(cursor: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let start = start_of_week(first_of_month(cursor));
    (0..6)
        .map(|week| {
            let mut days = [start; 7];
            for (i, slot) in days.iter_mut().enumerate() {
                *slot = start + Days::new((week * 7 + i) as u64);
            }
            days
        })
        .collect()
}

/// Seven consecutive days starting at `start_of_week(cursor)`.
pub fn week_days(cursor: NaiveDate) -> [NaiveDate; 7] {
    let start = start_of_week(cursor);
    let mut days = [start; 7];
    for (i, slot) in days.iter_mut().enumerate() {
        *slot = start + Days::new(i as u64);
    }
    days
}

/// Events whose start falls on `day`, in input order.
pub fn events_on<'a, R: Scheduled>(events: &'a [R], day: NaiveDate) -> Vec<&'a R> {
    events
        .iter()
        .filter(|e| e.starts_at().date() == day)
        .collect()
}

/// Events starting inside the cursor's calendar month, ascending by start.
pub fn month_window<'a, R: Scheduled>(events: &'a [R], cursor: NaiveDate) -> Vec<&'a R> {
    let mut rows: Vec<&R> = events
        .iter()
        .filter(|e| {
            let d = e.starts_at().date();
            d.year() == cursor.year() && d.month() == cursor.month()
        })
        .collect();
    rows.sort_by_key(|e| e.starts_at());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    struct Ev {
        start: NaiveDateTime,
    }

    impl Scheduled for Ev {
        fn starts_at(&self) -> NaiveDateTime {
            self.start
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn ev(y: i32, m: u32, d: u32, h: u32) -> Ev {
        Ev {
            start: date(y, m, d).and_hms_opt(h, 0, 0).expect("valid time"),
        }
    }

    #[test]
    fn start_of_week_lands_on_monday_and_is_idempotent() {
        let sunday = date(2025, 8, 24);
        let monday = start_of_week(sunday);
        assert_eq!(monday, date(2025, 8, 18));
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert_eq!(start_of_week(monday), monday);
    }

    #[test]
    fn month_matrix_is_always_42_cells_starting_monday() {
        for cursor in [date(2025, 8, 1), date(2025, 2, 14), date(2024, 2, 29)] {
            let matrix = month_matrix(cursor);
            assert_eq!(matrix.len(), 6);
            assert_eq!(matrix[0][0].weekday(), Weekday::Mon);
            let mut prev = None;
            for week in &matrix {
                for day in week {
                    if let Some(p) = prev {
                        assert_eq!(*day, p + Days::new(1));
                    }
                    prev = Some(*day);
                }
            }
        }
    }

    #[test]
    fn august_matrix_contains_the_ama_session_day() {
        // Event e1 at 2025-08-24T15:00 with cursor 2025-08-01.
        let events = [ev(2025, 8, 24, 15)];
        let matrix = month_matrix(date(2025, 8, 1));

        let mut hits = 0;
        for week in &matrix {
            for day in week {
                let bucket = events_on(&events, *day);
                if *day == date(2025, 8, 24) {
                    assert_eq!(bucket.len(), 1);
                    hits += 1;
                } else {
                    assert!(bucket.is_empty());
                }
            }
        }
        assert_eq!(hits, 1);
    }

    #[test]
    fn week_buckets_put_an_event_on_its_own_day_only() {
        let events = [ev(2025, 8, 24, 15)];
        let days = week_days(date(2025, 8, 24));
        assert_eq!(days[0], date(2025, 8, 18));
        assert_eq!(days[6], date(2025, 8, 24));

        for day in &days[..6] {
            assert!(events_on(&events, *day).is_empty());
        }
        assert_eq!(events_on(&events, days[6]).len(), 1);
    }

    #[test]
    fn bucketing_compares_dates_not_timestamps() {
        let events = [ev(2025, 8, 24, 0), ev(2025, 8, 24, 23)];
        assert_eq!(events_on(&events, date(2025, 8, 24)).len(), 2);
    }

    #[test]
    fn month_window_filters_and_sorts_ascending() {
        let events = [
            ev(2025, 8, 28, 19),
            ev(2025, 9, 2, 10),
            ev(2025, 8, 15, 17),
            ev(2025, 7, 31, 9),
        ];
        let rows = month_window(&events, date(2025, 8, 1));
        let starts: Vec<_> = rows.iter().map(|e| e.starts_at().date().day()).collect();
        assert_eq!(starts, vec![15, 28]);
    }

    #[test]
    fn cursor_steps_by_month_or_week_depending_on_view() {
        let mut cursor = CalendarCursor::new(date(2025, 8, 24));
        cursor.next();
        assert_eq!(cursor.date, date(2025, 9, 24));
        cursor.prev();
        assert_eq!(cursor.date, date(2025, 8, 24));

        cursor.set_view(CalendarView::Week);
        cursor.next();
        assert_eq!(cursor.date, date(2025, 8, 31));
        cursor.prev();
        assert_eq!(cursor.date, date(2025, 8, 24));

        cursor.set_view(CalendarView::List);
        cursor.prev();
        assert_eq!(cursor.date, date(2025, 7, 24));
    }

    #[test]
    fn month_shift_clamps_short_months() {
        assert_eq!(shift_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_months(date(2025, 1, 15), -1), date(2024, 12, 15));
        assert_eq!(shift_months(date(2025, 12, 31), 1), date(2026, 1, 31));
    }

    #[test]
    fn today_resets_the_cursor() {
        let mut cursor = CalendarCursor::new(date(2025, 8, 1));
        cursor.next();
        cursor.today(date(2025, 8, 22));
        assert_eq!(cursor.date, date(2025, 8, 22));
    }
}
