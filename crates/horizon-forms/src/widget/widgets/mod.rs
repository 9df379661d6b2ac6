//! The form widgets.
//!
//! - [`InputWidget`]: single-line input with inline validation
//! - [`DatePicker`]: month calendar with single-date or range selection
//! - [`HourPicker`]: start/end time picker built from two scroll wheels

mod date_picker;
mod hour_picker;
mod input;

pub use date_picker::{
    calendar_grid, CalendarDay, DatePicker, DateRange, MONTH_NAMES, WEEKDAY_HEADERS,
};
pub use hour_picker::{format_time, parse_time, HourPicker, TimeMode, TimeRange};
pub use input::{EchoMode, InputWidget};
