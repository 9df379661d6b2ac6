//! DatePicker: a month calendar with single-date or range selection.
//!
//! The picker shows one month at a time as a grid of [`CalendarDay`] cells:
//! the trailing days of the previous month needed to put the 1st under its
//! weekday column, followed by every day of the month. Weeks start on Sunday.
//!
//! In range mode the first click picks the start, the second the end (the
//! two are swapped if needed so the start never follows the end), and a
//! third click starts over.
//!
//! A quick picker lets the user jump to another month by choosing a year and
//! then a month.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horizon_forms::widget::widgets::DatePicker;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
//! let mut picker = DatePicker::starting_at(true, today);
//!
//! picker.date_selected.connect(|range| {
//!     println!("{:?} - {:?}", range.start, range.end);
//! });
//!
//! picker.select_date(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
//! picker.select_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
//!
//! let range = picker.range();
//! assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 3, 10));
//! assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 20));
//! ```

use chrono::{Datelike, Days, Local, NaiveDate};
use horizon_forms_core::logging::targets;
use horizon_forms_core::Signal;

use crate::config::DatePickerConfig;

/// Weekday column headers, starting on Sunday.
pub const WEEKDAY_HEADERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    /// The date shown in the cell.
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month.
    pub is_current_month: bool,
}

/// A possibly incomplete date range.
///
/// When both ends are set, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    /// First selected day.
    pub start: Option<NaiveDate>,
    /// Last selected day.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether both ends are selected.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Build the grid for `month` (1-12) of `year`.
///
/// The grid holds `weekday(1st) + days_in_month` cells, at most 37. A month
/// outside the supported calendar yields an empty grid, and leading days
/// before the first supported date are left out.
pub fn calendar_grid(year: i32, month: u32) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = u64::from(first.weekday().num_days_from_sunday());

    let previous = (1..=leading).rev().filter_map(|back| {
        first.checked_sub_days(Days::new(back)).map(|date| CalendarDay {
            date,
            is_current_month: false,
        })
    });
    let current = first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| CalendarDay {
            date,
            is_current_month: true,
        });

    previous.chain(current).collect()
}

/// A month calendar with single-date or range selection.
pub struct DatePicker {
    range_mode: bool,
    range: DateRange,

    // Displayed page
    year: i32,
    month: u32,
    days: Vec<CalendarDay>,

    // Month/year quick picker
    selecting_month_year: bool,
    years: Vec<i32>,
    pending_year: Option<i32>,

    /// Emitted in range mode with the range after each click that sets or
    /// changes the end, or restarts the selection.
    pub date_selected: Signal<DateRange>,
    /// Emitted in single mode with the selected day.
    pub selection_changed: Signal<Option<NaiveDate>>,
    /// Emitted when the displayed (year, month) changes.
    pub page_changed: Signal<(i32, u32)>,
}

impl DatePicker {
    /// Create a picker showing the current month.
    pub fn new(range_mode: bool) -> Self {
        Self::starting_at(range_mode, Local::now().date_naive())
    }

    /// Create a picker treating `today` as the current day.
    pub fn starting_at(range_mode: bool, today: NaiveDate) -> Self {
        Self::from_config(range_mode, today, &DatePickerConfig::default())
    }

    /// Create a picker treating `today` as the current day, with settings.
    pub fn from_config(range_mode: bool, today: NaiveDate, config: &DatePickerConfig) -> Self {
        let window = config.year_window.min(1000) as i32;
        let years = (today.year() - window..=today.year() + window)
            .filter(|year| NaiveDate::from_ymd_opt(*year, 1, 1).is_some())
            .collect();

        Self {
            range_mode,
            range: DateRange::default(),
            year: today.year(),
            month: today.month(),
            days: calendar_grid(today.year(), today.month()),
            selecting_month_year: false,
            years,
            pending_year: None,
            date_selected: Signal::new(),
            selection_changed: Signal::new(),
            page_changed: Signal::new(),
        }
    }

    /// Whether the picker selects ranges.
    pub fn is_range_mode(&self) -> bool {
        self.range_mode
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The current selection.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The selected start day.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.range.start
    }

    /// The selected end day.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.range.end
    }

    /// Handle a click on `date`.
    pub fn select_date(&mut self, date: NaiveDate) {
        if !self.range_mode {
            self.range = DateRange {
                start: Some(date),
                end: None,
            };
            tracing::debug!(target: targets::DATE_PICKER, %date, "date selected");
            self.selection_changed.emit(Some(date));
            return;
        }

        match (self.range.start, self.range.end) {
            (Some(start), None) if date >= start => {
                self.range.end = Some(date);
            }
            (Some(start), None) => {
                self.range = DateRange {
                    start: Some(date),
                    end: Some(start),
                };
            }
            (Some(_), Some(_)) => {
                self.range = DateRange {
                    start: Some(date),
                    end: None,
                };
            }
            (None, _) => {
                self.range = DateRange {
                    start: Some(date),
                    end: None,
                };
                tracing::debug!(target: targets::DATE_PICKER, %date, "range start selected");
                return;
            }
        }

        tracing::debug!(target: targets::DATE_PICKER, range = ?self.range, "range selected");
        self.date_selected.emit(self.range);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        if self.range.is_empty() {
            return;
        }
        self.range = DateRange::default();
        if self.range_mode {
            self.date_selected.emit(self.range);
        } else {
            self.selection_changed.emit(None);
        }
    }

    /// Whether `date` is drawn as selected: the lone start day, or any day
    /// of a complete range, ends included.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match (self.range.start, self.range.end) {
            (Some(start), None) => Self::is_same_day(date, start),
            (Some(start), Some(end)) => start <= date && date <= end,
            (None, _) => false,
        }
    }

    /// Whether `date` lies strictly between the ends of a complete range.
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match (self.range.start, self.range.end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        }
    }

    /// Whether two dates are the same calendar day.
    pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
        a == b
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// The displayed (year, month), month 1-12.
    pub fn displayed_year_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// The grid for the displayed month.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Name of the displayed month.
    pub fn current_month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize - 1) % 12]
    }

    /// Weekday column headers.
    pub fn weekday_headers(&self) -> &'static [&'static str; 7] {
        &WEEKDAY_HEADERS
    }

    /// Show the previous month. Does nothing on the first supported month.
    pub fn prev_month(&mut self) {
        let page = if self.month == 1 {
            self.year.checked_sub(1).map(|year| (year, 12))
        } else {
            Some((self.year, self.month - 1))
        };
        if let Some((year, month)) = page {
            self.show_page(year, month);
        }
    }

    /// Show the next month. Does nothing on the last supported month.
    pub fn next_month(&mut self) {
        let page = if self.month == 12 {
            self.year.checked_add(1).map(|year| (year, 1))
        } else {
            Some((self.year, self.month + 1))
        };
        if let Some((year, month)) = page {
            self.show_page(year, month);
        }
    }

    /// Navigate to the month containing `date`.
    pub fn show_date(&mut self, date: NaiveDate) {
        if (date.year(), date.month()) != (self.year, self.month) {
            self.show_page(date.year(), date.month());
        }
    }

    fn show_page(&mut self, year: i32, month: u32) -> bool {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            tracing::debug!(target: targets::DATE_PICKER, year, month, "page outside supported calendar");
            return false;
        }
        self.year = year;
        self.month = month;
        self.days = calendar_grid(year, month);
        tracing::debug!(target: targets::DATE_PICKER, year, month, "page changed");
        self.page_changed.emit((year, month));
        true
    }

    // =========================================================================
    // Month/Year Quick Picker
    // =========================================================================

    /// Whether the month/year quick picker is open.
    pub fn is_selecting_month_year(&self) -> bool {
        self.selecting_month_year
    }

    /// Open or close the month/year quick picker.
    pub fn toggle_month_year_selection(&mut self) {
        self.selecting_month_year = !self.selecting_month_year;
    }

    /// Years offered by the quick picker.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Month names offered by the quick picker.
    pub fn months(&self) -> &'static [&'static str; 12] {
        &MONTH_NAMES
    }

    /// The year chosen in the quick picker, waiting for a month.
    pub fn pending_year(&self) -> Option<i32> {
        self.pending_year
    }

    /// Choose a year in the quick picker. Years not offered are ignored.
    pub fn select_year(&mut self, year: i32) {
        if !self.years.contains(&year) {
            tracing::debug!(target: targets::DATE_PICKER, year, "year outside quick picker window");
            return;
        }
        self.pending_year = Some(year);
    }

    /// Choose a month (1-12) in the quick picker.
    ///
    /// Only takes effect once a year was chosen. Jumps to that page, closes
    /// the quick picker and returns `true`.
    pub fn select_month(&mut self, month: u32) -> bool {
        if !(1..=12).contains(&month) {
            tracing::debug!(target: targets::DATE_PICKER, month, "month out of range");
            return false;
        }
        let Some(year) = self.pending_year.take() else {
            tracing::debug!(target: targets::DATE_PICKER, month, "month ignored, no year chosen");
            return false;
        };

        self.selecting_month_year = false;
        self.show_page(year, month)
    }
}

impl std::fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("range_mode", &self.range_mode)
            .field("range", &self.range)
            .field("page", &(self.year, self.month))
            .field("selecting_month_year", &self.selecting_month_year)
            .finish_non_exhaustive()
    }
}

// Ensure DatePicker is Send + Sync
static_assertions::assert_impl_all!(DatePicker: Send, Sync);
