//! InputWidget: a single-line input with inline validation.
//!
//! The widget holds the current text, the input kind and the configured
//! validation rules, and keeps a translated validation message in sync with
//! them. An empty message means the value is valid.
//!
//! - Text, password, email, number and color kinds
//! - Password masking with a visibility toggle
//! - Ordered validation rules (see [`crate::widget::validator`])
//! - Disabled state that ignores user input
//!
//! # Signals
//!
//! - `value_changed(String)`: the user edited the value
//! - `validation_status(String)`: the message after a user edit
//!
//! Host-side setters re-derive the message without emitting.
//!
//! # Example
//!
//! ```
//! use horizon_forms::i18n::KeyTranslator;
//! use horizon_forms::widget::validator::{InputKind, RuleSet, ValidationRule};
//! use horizon_forms::widget::widgets::InputWidget;
//!
//! let mut input = InputWidget::new(KeyTranslator)
//!     .with_label("Password")
//!     .with_kind(InputKind::Password)
//!     .with_rules(RuleSet::from_iter([ValidationRule::MinLength]));
//!
//! input.validation_status.connect(|message| {
//!     if !message.is_empty() {
//!         println!("invalid: {message}");
//!     }
//! });
//!
//! input.handle_input("short");
//! assert!(!input.is_valid());
//! assert_eq!(input.display_text(), "•••••");
//! ```

use std::sync::Arc;

use horizon_forms_core::logging::targets;
use horizon_forms_core::Signal;

use crate::config::ValidationConfig;
use crate::data::InitialData;
use crate::i18n::Translator;
use crate::widget::validator::{InputKind, RuleChain, RuleSet};

/// How the input displays its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Display characters as entered.
    #[default]
    Normal,
    /// Display a mask character instead of the actual text.
    Password,
}

/// A single-line input with inline validation.
pub struct InputWidget {
    label: String,
    placeholder: String,
    value: String,
    /// Kind used for validation. Never changed by the visibility toggle.
    kind: InputKind,
    echo_mode: EchoMode,
    password_char: char,
    rules: RuleSet,
    validation_enabled: bool,
    disabled: bool,
    /// Last derived message, empty when valid.
    message: String,
    chain: RuleChain,
    translator: Arc<dyn Translator>,

    /// Emitted with the new value after every user edit.
    pub value_changed: Signal<String>,
    /// Emitted with the validation message after every user edit.
    pub validation_status: Signal<String>,
}

impl InputWidget {
    /// Create a text input resolving messages through `translator`.
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self::with_translator(Arc::new(translator))
    }

    /// Create a text input sharing `translator` with other widgets.
    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self {
            label: String::new(),
            placeholder: String::new(),
            value: String::new(),
            kind: InputKind::Text,
            echo_mode: EchoMode::Normal,
            password_char: '•',
            rules: RuleSet::new(),
            validation_enabled: true,
            disabled: false,
            message: String::new(),
            chain: RuleChain::default(),
            translator,
            value_changed: Signal::new(),
            validation_status: Signal::new(),
        }
    }

    /// Apply validation settings using builder pattern.
    pub fn with_config(mut self, config: &ValidationConfig) -> Self {
        self.chain = RuleChain::new(config.min_length);
        self.refresh();
        self
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// The label shown next to the input.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Set the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Set the label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// The placeholder shown while the input is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.set_placeholder(placeholder);
        self
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value from the host. Does not emit.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.refresh();
    }

    /// Set the value using builder pattern.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// The input kind used for validation.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Set the input kind. Password inputs start masked.
    pub fn set_kind(&mut self, kind: InputKind) {
        self.kind = kind;
        self.echo_mode = if kind == InputKind::Password {
            EchoMode::Password
        } else {
            EchoMode::Normal
        };
        self.refresh();
    }

    /// Set the input kind using builder pattern.
    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.set_kind(kind);
        self
    }

    /// The configured rules.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Replace the configured rules.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
        self.refresh();
    }

    /// Set the rules using builder pattern.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.set_rules(rules);
        self
    }

    /// Whether validation runs at all.
    pub fn is_validation_enabled(&self) -> bool {
        self.validation_enabled
    }

    /// Enable or disable validation.
    pub fn set_validation_enabled(&mut self, enabled: bool) {
        self.validation_enabled = enabled;
        self.refresh();
    }

    /// Enable or disable validation using builder pattern.
    pub fn with_validation_enabled(mut self, enabled: bool) -> Self {
        self.set_validation_enabled(enabled);
        self
    }

    /// Whether the input ignores user edits.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable or enable the input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Disable or enable the input using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// The mask character for password display.
    pub fn password_char(&self) -> char {
        self.password_char
    }

    /// Set the mask character using builder pattern.
    pub fn with_password_char(mut self, ch: char) -> Self {
        self.password_char = ch;
        self
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// The current echo mode.
    pub fn echo_mode(&self) -> EchoMode {
        self.echo_mode
    }

    /// Switch a password input between masked and plain display.
    ///
    /// Neither the value nor the kind used for validation changes. Other
    /// kinds ignore the toggle.
    pub fn toggle_visibility(&mut self) {
        if self.kind != InputKind::Password {
            tracing::debug!(target: targets::INPUT, kind = ?self.kind, "visibility toggle ignored");
            return;
        }
        self.echo_mode = match self.echo_mode {
            EchoMode::Normal => EchoMode::Password,
            EchoMode::Password => EchoMode::Normal,
        };
        tracing::debug!(target: targets::INPUT, echo_mode = ?self.echo_mode, "visibility toggled");
    }

    /// The text to render.
    pub fn display_text(&self) -> String {
        match self.echo_mode {
            EchoMode::Normal => self.value.clone(),
            EchoMode::Password => self
                .password_char
                .to_string()
                .repeat(self.value.chars().count()),
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// The current validation message, empty when valid.
    pub fn validation_message(&self) -> &str {
        &self.message
    }

    /// Whether the current value passes validation.
    pub fn is_valid(&self) -> bool {
        self.message.is_empty()
    }

    fn derive_message(&self) -> String {
        if !self.validation_enabled {
            return String::new();
        }
        self.chain
            .evaluate(&self.value, self.kind, &self.rules)
            .map(|failure| failure.message(&*self.translator))
            .unwrap_or_default()
    }

    fn refresh(&mut self) {
        self.message = self.derive_message();
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Handle a user edit: store the value, re-validate and emit both signals.
    #[tracing::instrument(skip_all, target = "horizon_forms::input", level = "trace")]
    pub fn handle_input(&mut self, text: impl Into<String>) {
        if self.disabled {
            tracing::debug!(target: targets::INPUT, "input ignored, widget disabled");
            return;
        }

        self.value = text.into();
        self.refresh();
        tracing::debug!(target: targets::INPUT, valid = self.is_valid(), "value edited");

        self.value_changed.emit(self.value.clone());
        self.validation_status.emit(self.message.clone());
    }

    /// Handle a pick from the color chooser: store and emit the value only.
    pub fn set_color(&mut self, color: impl Into<String>) {
        if self.disabled {
            tracing::debug!(target: targets::INPUT, "color ignored, widget disabled");
            return;
        }

        self.value = color.into();
        self.refresh();
        self.value_changed.emit(self.value.clone());
    }

    /// Fill the input with values fetched from a data source. Does not emit.
    pub fn apply_initial(&mut self, data: &InitialData) {
        self.placeholder.clone_from(&data.placeholder);
        self.set_value(data.input_value.clone());
        tracing::debug!(target: targets::INPUT, "initial data applied");
    }
}

impl std::fmt::Debug for InputWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputWidget")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("echo_mode", &self.echo_mode)
            .field("rules", &self.rules)
            .field("validation_enabled", &self.validation_enabled)
            .field("disabled", &self.disabled)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// Ensure InputWidget is Send + Sync
static_assertions::assert_impl_all!(InputWidget: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{keys, Catalog, KeyTranslator};
    use crate::widget::validator::ValidationRule;
    use parking_lot::Mutex;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_entry(keys::MIN_LENGTH, "Minimal required length is")
            .with_entry(keys::UPPERCASE, "Add an uppercase letter")
            .with_entry(keys::INVALID_EMAIL, "Please enter a valid email")
    }

    fn recorder(signal: &Signal<String>) -> Arc<Mutex<Vec<String>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        signal.connect(move |value| received_clone.lock().push(value.clone()));
        received
    }

    #[test]
    fn test_input_creation() {
        let input = InputWidget::new(KeyTranslator);
        assert_eq!(input.kind(), InputKind::Text);
        assert_eq!(input.value(), "");
        assert!(input.is_valid());
        assert!(input.is_validation_enabled());
        assert!(!input.is_disabled());
        assert_eq!(input.echo_mode(), EchoMode::Normal);
    }

    #[test]
    fn test_handle_input_emits_value_and_message() {
        let mut input = InputWidget::new(catalog()).with_kind(InputKind::Password);
        let values = recorder(&input.value_changed);
        let messages = recorder(&input.validation_status);

        input.handle_input("abc");
        input.handle_input("abcdefghij");

        assert_eq!(*values.lock(), vec!["abc", "abcdefghij"]);
        assert_eq!(
            *messages.lock(),
            vec!["Minimal required length is 8", "Add an uppercase letter"]
        );
    }

    #[test]
    fn test_empty_value_clears_message() {
        let mut input = InputWidget::new(catalog());
        input.handle_input("abc");
        assert!(!input.is_valid());
        input.handle_input("");
        assert!(input.is_valid());
    }

    #[test]
    fn test_setters_rederive_without_emitting() {
        let mut input = InputWidget::new(catalog()).with_value("abc");
        let messages = recorder(&input.validation_status);
        assert_eq!(input.validation_message(), "Minimal required length is 8");

        input.set_validation_enabled(false);
        assert!(input.is_valid());

        input.set_validation_enabled(true);
        input.set_rules(RuleSet::from_iter([ValidationRule::LowerCase]));
        assert!(input.is_valid());

        input.set_kind(InputKind::Email);
        assert_eq!(input.validation_message(), "Please enter a valid email");

        assert!(messages.lock().is_empty());
    }

    #[test]
    fn test_disabled_input_ignores_edits() {
        let mut input = InputWidget::new(KeyTranslator).with_disabled(true);
        let values = recorder(&input.value_changed);

        input.handle_input("typed");
        input.set_color("#ffffff");

        assert_eq!(input.value(), "");
        assert!(values.lock().is_empty());
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut input = InputWidget::new(KeyTranslator)
            .with_kind(InputKind::Password)
            .with_value("sekret");
        assert_eq!(input.echo_mode(), EchoMode::Password);
        assert_eq!(input.display_text(), "••••••");
        let before = input.validation_message().to_string();

        input.toggle_visibility();
        assert_eq!(input.echo_mode(), EchoMode::Normal);
        assert_eq!(input.display_text(), "sekret");
        assert_eq!(input.kind(), InputKind::Password);
        assert_eq!(input.value(), "sekret");
        assert_eq!(input.validation_message(), before);

        input.toggle_visibility();
        assert_eq!(input.echo_mode(), EchoMode::Password);
    }

    #[test]
    fn test_toggle_ignored_for_text() {
        let mut input = InputWidget::new(KeyTranslator).with_value("plain");
        input.toggle_visibility();
        assert_eq!(input.echo_mode(), EchoMode::Normal);
        assert_eq!(input.display_text(), "plain");
    }

    #[test]
    fn test_color_emits_value_only() {
        let mut input = InputWidget::new(KeyTranslator).with_kind(InputKind::Color);
        let values = recorder(&input.value_changed);
        let messages = recorder(&input.validation_status);

        input.set_color("#4fc3f7");

        assert_eq!(input.value(), "#4fc3f7");
        assert_eq!(*values.lock(), vec!["#4fc3f7"]);
        assert!(messages.lock().is_empty());
        assert!(input.is_valid());
    }

    #[test]
    fn test_min_length_from_config() {
        let config = ValidationConfig { min_length: 4 };
        let input = InputWidget::new(catalog())
            .with_config(&config)
            .with_rules(RuleSet::from_iter([ValidationRule::MinLength]))
            .with_value("abc");
        assert_eq!(input.validation_message(), "Minimal required length is 3");
    }

    #[test]
    fn test_apply_initial() {
        let mut input = InputWidget::new(KeyTranslator);
        let values = recorder(&input.value_changed);

        input.apply_initial(&InitialData {
            input_value: "Zaktualizowana wartość z backendu".into(),
            placeholder: "Wprowadź dane".into(),
        });

        assert_eq!(input.value(), "Zaktualizowana wartość z backendu");
        assert_eq!(input.placeholder(), "Wprowadź dane");
        assert!(values.lock().is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let input = InputWidget::new(KeyTranslator)
            .with_label("Email")
            .with_placeholder("you@example.com")
            .with_kind(InputKind::Email)
            .with_password_char('*');

        assert_eq!(input.label(), "Email");
        assert_eq!(input.placeholder(), "you@example.com");
        assert_eq!(input.password_char(), '*');
    }
}
