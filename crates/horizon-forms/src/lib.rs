//! Horizon Forms - headless form widgets.
//!
//! Each widget is a plain state struct: the host forwards user and lifecycle
//! events into it, renders its state, and listens to its signals.
//!
//! - [`InputWidget`](widget::widgets::InputWidget): single-line input with
//!   ordered, translated validation messages
//! - [`DatePicker`](widget::widgets::DatePicker): month calendar with
//!   single-date or range selection
//! - [`HourPicker`](widget::widgets::HourPicker): start/end time picker with
//!   drag-to-scroll wheels that loop at their ends
//!
//! Around them sit the collaborators a form needs: a translation
//! [`Catalog`](i18n::Catalog), an [`InitialDataSource`](data::InitialDataSource)
//! and a TOML-backed [`FormsConfig`].
//!
//! # Example
//!
//! ```
//! use horizon_forms::prelude::*;
//!
//! let config = FormsConfig::default();
//! let mut email = InputWidget::new(KeyTranslator)
//!     .with_config(&config.validation)
//!     .with_kind(InputKind::Email);
//!
//! email.value_changed.connect(|value| println!("email: {value}"));
//! email.handle_input("jan@example.com");
//! assert!(email.is_valid());
//! ```

pub mod config;
pub mod data;
mod error;
pub mod i18n;
pub mod prelude;
pub mod widget;

pub use config::FormsConfig;
pub use error::{Error, Result};
pub use horizon_forms_core::{ConnectionId, Signal};
