//! Widget layer: validation, pointer events, scroll wheels and the widgets
//! built on them.

pub mod events;
pub mod validator;
pub mod wheel;
pub mod widgets;

pub use events::{PointerEvent, WheelKind};
pub use validator::{InputKind, RuleChain, RuleFailure, RuleSet, ValidationRule};
pub use wheel::WheelColumn;
pub use widgets::{
    CalendarDay, DatePicker, DateRange, EchoMode, HourPicker, InputWidget, TimeMode, TimeRange,
};
