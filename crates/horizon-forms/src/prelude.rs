//! Prelude module for Horizon Forms.
//!
//! ```
//! use horizon_forms::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use horizon_forms_core::{ConnectionId, Signal};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    CalendarDay, DatePicker, DateRange, EchoMode, HourPicker, InputWidget, TimeMode, TimeRange,
};

// ============================================================================
// Validation and Events
// ============================================================================

pub use crate::widget::events::{PointerEvent, WheelKind};
pub use crate::widget::validator::{InputKind, RuleSet, ValidationRule};

// ============================================================================
// Collaborators
// ============================================================================

pub use crate::config::FormsConfig;
pub use crate::data::{InitialData, InitialDataSource, MockDataService};
pub use crate::i18n::{Catalog, KeyTranslator, TranslationService, Translator};
pub use crate::Error;
