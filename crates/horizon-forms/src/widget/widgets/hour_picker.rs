//! HourPicker: a start/end time picker built from two scroll wheels.
//!
//! The picker edits one of two times at a time, the *active* one. Two
//! [`WheelColumn`]s (hours 0-23, minutes 0-59) show the active time; clicking
//! a cell or dragging a wheel and letting go changes it. After every change
//! `time_range_selected` fires with both times formatted as `HH:MM`.
//!
//! # Host integration
//!
//! The host forwards:
//!
//! - the laid out wheels through [`HourPicker::hour_column_mut`] and
//!   [`HourPicker::minute_column_mut`]
//! - pointer presses on a wheel to [`HourPicker::start_drag`]
//! - window-level pointer moves to [`HourPicker::drag_move`], which reports
//!   whether the default scroll/selection behaviour must be suppressed
//! - window-level pointer releases to [`HourPicker::end_drag`]
//! - the view lifecycle to [`HourPicker::mount`] and [`HourPicker::teardown`]
//!
//! After mounting, the host pumps [`HourPicker::process_deferred`] so the
//! wheels settle on their initial values once layout is stable.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use horizon_forms::widget::events::PointerEvent;
//! use horizon_forms::widget::widgets::{HourPicker, TimeMode};
//!
//! let mut picker = HourPicker::new();
//! picker.hour_column_mut().set_uniform_layout(0.0, 40.0);
//! picker.minute_column_mut().set_uniform_layout(0.0, 40.0);
//!
//! picker.time_range_selected.connect(|range| {
//!     println!("{} - {}", range.start, range.end);
//! });
//!
//! let now = Instant::now();
//! picker.mount(now);
//! picker.process_deferred(now + Duration::from_millis(150));
//!
//! picker.select_hour(9);
//! picker.set_mode(TimeMode::End);
//! picker.select_minute(30);
//! assert_eq!(picker.start_time(), "09:00");
//! assert_eq!(picker.end_time(), "00:30");
//! ```

use std::time::{Duration, Instant};

use chrono::{NaiveTime, Timelike};
use horizon_forms_core::logging::targets;
use horizon_forms_core::{ScheduledTaskId, Scheduler, Signal};

use crate::config::HourPickerConfig;
use crate::error::{Error, Result};
use crate::widget::events::{PointerEvent, WheelKind};
use crate::widget::wheel::WheelColumn;

/// Which of the two times the wheels edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeMode {
    /// The start time.
    #[default]
    Start,
    /// The end time.
    End,
}

/// The pair of times reported by the picker, as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Start time.
    pub start: String,
    /// End time.
    pub end: String,
}

/// Parse an `HH:MM` time.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| Error::invalid_time(value))
}

/// Format a time as `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Deferred layout passes run after mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettlePass {
    First,
    Correction,
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    wheel: WheelKind,
    start_y: f32,
    scroll_start: f32,
}

/// A start/end time picker built from two scroll wheels.
pub struct HourPicker {
    mode: TimeMode,
    start_time: NaiveTime,
    end_time: NaiveTime,
    selected_hour: u32,
    selected_minute: u32,

    hours: WheelColumn,
    minutes: WheelColumn,
    dragging_hour: bool,
    dragging_minute: bool,
    drag: Option<DragState>,

    scheduler: Scheduler<SettlePass>,
    pending_pass: Option<ScheduledTaskId>,
    settle_delay: Duration,
    correction_delay: Duration,

    /// Emitted with both times after every change to the active time.
    pub time_range_selected: Signal<TimeRange>,
}

impl HourPicker {
    /// Create a picker with both times at `00:00`.
    pub fn new() -> Self {
        Self::from_config(&HourPickerConfig::default())
    }

    /// Create a picker with settings.
    pub fn from_config(config: &HourPickerConfig) -> Self {
        Self {
            mode: TimeMode::Start,
            start_time: NaiveTime::MIN,
            end_time: NaiveTime::MIN,
            selected_hour: 0,
            selected_minute: 0,
            hours: WheelColumn::new(WheelKind::Hour, config.wheel_cycles),
            minutes: WheelColumn::new(WheelKind::Minute, config.wheel_cycles),
            dragging_hour: false,
            dragging_minute: false,
            drag: None,
            scheduler: Scheduler::new(),
            pending_pass: None,
            settle_delay: config.settle_delay(),
            correction_delay: config.correction_delay(),
            time_range_selected: Signal::new(),
        }
    }

    // =========================================================================
    // Times
    // =========================================================================

    /// The active mode.
    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    /// The start time as `HH:MM`.
    pub fn start_time(&self) -> String {
        format_time(self.start_time)
    }

    /// The end time as `HH:MM`.
    pub fn end_time(&self) -> String {
        format_time(self.end_time)
    }

    /// Both times.
    pub fn time_range(&self) -> TimeRange {
        TimeRange {
            start: self.start_time(),
            end: self.end_time(),
        }
    }

    /// The hour shown for the active time.
    pub fn selected_hour(&self) -> u32 {
        self.selected_hour
    }

    /// The minute shown for the active time.
    pub fn selected_minute(&self) -> u32 {
        self.selected_minute
    }

    /// Set the start time from the host. Does not emit.
    pub fn set_start_time(&mut self, value: &str) -> Result<()> {
        self.start_time = parse_time(value)?;
        if self.mode == TimeMode::Start {
            self.load_active_time();
        }
        Ok(())
    }

    /// Set the end time from the host. Does not emit.
    pub fn set_end_time(&mut self, value: &str) -> Result<()> {
        self.end_time = parse_time(value)?;
        if self.mode == TimeMode::End {
            self.load_active_time();
        }
        Ok(())
    }

    /// Make `mode` the active time and move the wheels to it. Does not emit.
    pub fn set_mode(&mut self, mode: TimeMode) {
        self.mode = mode;
        self.load_active_time();
        tracing::debug!(
            target: targets::HOUR_PICKER,
            ?mode,
            hour = self.selected_hour,
            minute = self.selected_minute,
            "mode switched"
        );
    }

    fn active_time(&self) -> NaiveTime {
        match self.mode {
            TimeMode::Start => self.start_time,
            TimeMode::End => self.end_time,
        }
    }

    fn load_active_time(&mut self) {
        let time = self.active_time();
        self.selected_hour = time.hour();
        self.selected_minute = time.minute();
        self.reposition();
    }

    /// Store the selected hour and minute as the active time and emit.
    fn commit(&mut self) {
        let Some(time) = NaiveTime::from_hms_opt(self.selected_hour, self.selected_minute, 0)
        else {
            return;
        };
        match self.mode {
            TimeMode::Start => self.start_time = time,
            TimeMode::End => self.end_time = time,
        }

        let range = self.time_range();
        tracing::debug!(target: targets::HOUR_PICKER, start = %range.start, end = %range.end, "time changed");
        self.time_range_selected.emit(range);
    }

    // =========================================================================
    // Direct Selection
    // =========================================================================

    /// Handle a click on an hour cell.
    pub fn select_hour(&mut self, hour: u32) {
        if hour >= WheelKind::Hour.value_count() {
            tracing::debug!(target: targets::HOUR_PICKER, hour, "hour out of range");
            return;
        }
        self.selected_hour = hour;
        self.commit();
        self.hours.scroll_to_value(hour);
    }

    /// Handle a click on a minute cell.
    pub fn select_minute(&mut self, minute: u32) {
        if minute >= WheelKind::Minute.value_count() {
            tracing::debug!(target: targets::HOUR_PICKER, minute, "minute out of range");
            return;
        }
        self.selected_minute = minute;
        self.commit();
        self.minutes.scroll_to_value(minute);
    }

    // =========================================================================
    // Wheels
    // =========================================================================

    /// The hour wheel.
    pub fn hour_column(&self) -> &WheelColumn {
        &self.hours
    }

    /// The hour wheel, for reporting its layout.
    pub fn hour_column_mut(&mut self) -> &mut WheelColumn {
        &mut self.hours
    }

    /// The minute wheel.
    pub fn minute_column(&self) -> &WheelColumn {
        &self.minutes
    }

    /// The minute wheel, for reporting its layout.
    pub fn minute_column_mut(&mut self) -> &mut WheelColumn {
        &mut self.minutes
    }

    fn column_mut(&mut self, wheel: WheelKind) -> &mut WheelColumn {
        match wheel {
            WheelKind::Hour => &mut self.hours,
            WheelKind::Minute => &mut self.minutes,
        }
    }

    /// Scroll both wheels to the selected hour and minute.
    fn reposition(&mut self) {
        self.hours.scroll_to_value(self.selected_hour);
        self.minutes.scroll_to_value(self.selected_minute);
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    /// Whether a wheel is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.dragging_hour || self.dragging_minute
    }

    /// Handle a pointer press on `wheel`.
    pub fn start_drag(&mut self, wheel: WheelKind, event: &PointerEvent) {
        let Some(start_y) = event.client_y() else {
            return;
        };
        let column = self.column_mut(wheel);
        if !column.is_attached() {
            tracing::debug!(target: targets::HOUR_PICKER, ?wheel, "drag ignored, column detached");
            return;
        }
        let scroll_start = column.scroll_top();

        match wheel {
            WheelKind::Hour => self.dragging_hour = true,
            WheelKind::Minute => self.dragging_minute = true,
        }
        self.drag = Some(DragState {
            wheel,
            start_y,
            scroll_start,
        });
        tracing::debug!(target: targets::HOUR_PICKER, ?wheel, start_y, scroll_start, "drag started");
    }

    /// Handle a window-level pointer move.
    ///
    /// Returns `true` while a drag is active, telling the host to suppress
    /// default scrolling and text selection.
    pub fn drag_move(&mut self, event: &PointerEvent) -> bool {
        if !self.is_dragging() {
            return false;
        }
        let (Some(drag), Some(current_y)) = (self.drag, event.client_y()) else {
            return true;
        };

        let offset = drag.scroll_start + (drag.start_y - current_y);
        self.column_mut(drag.wheel).set_scroll_top(offset);
        true
    }

    /// Handle a window-level pointer release.
    ///
    /// Every wheel that was being dragged settles on the value closest to
    /// its scroll offset, wrapping at the ends of the list.
    pub fn end_drag(&mut self) {
        if self.dragging_hour {
            self.settle(WheelKind::Hour);
        }
        if self.dragging_minute {
            self.settle(WheelKind::Minute);
        }
        self.dragging_hour = false;
        self.dragging_minute = false;
        self.drag = None;
    }

    fn settle(&mut self, wheel: WheelKind) {
        let column = self.column_mut(wheel);
        let Some(value) = column.resolve_release() else {
            return;
        };
        column.scroll_to_value(value);

        match wheel {
            WheelKind::Hour => self.selected_hour = value,
            WheelKind::Minute => self.selected_minute = value,
        }
        self.commit();
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// The view was mounted at `now`. Schedules the settle passes.
    ///
    /// Mounting again while a pass is pending restarts the sequence from the
    /// first pass.
    pub fn mount(&mut self, now: Instant) {
        if let Some(id) = self.pending_pass.take().filter(|id| self.scheduler.is_active(*id))
            && self.scheduler.cancel(id).is_ok()
        {
            tracing::debug!(target: targets::HOUR_PICKER, "pending settle pass restarted");
        }

        match self
            .scheduler
            .schedule_after(now, self.settle_delay, SettlePass::First)
        {
            Ok(id) => {
                self.pending_pass = Some(id);
                tracing::debug!(target: targets::HOUR_PICKER, "settle pass scheduled");
            }
            Err(error) => tracing::debug!(target: targets::HOUR_PICKER, %error, "mount ignored"),
        }
    }

    /// How long until the next settle pass is due.
    pub fn time_until_next_pass(&mut self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next(now)
    }

    /// Run every settle pass due at `now`. Returns how many ran.
    #[tracing::instrument(skip(self), target = "horizon_forms::hour_picker", level = "trace")]
    pub fn process_deferred(&mut self, now: Instant) -> usize {
        let passes = self.scheduler.take_ready(now);
        for pass in &passes {
            self.reposition();
            if *pass == SettlePass::First {
                match self
                    .scheduler
                    .schedule_after(now, self.correction_delay, SettlePass::Correction)
                {
                    Ok(id) => self.pending_pass = Some(id),
                    Err(error) => {
                        tracing::debug!(target: targets::HOUR_PICKER, %error, "correction pass dropped");
                    }
                }
            }
            tracing::trace!(target: targets::HOUR_PICKER, ?pass, "settle pass ran");
        }
        passes.len()
    }

    /// The view was removed. Pending passes are cancelled, the wheels
    /// detached and the host's slots released; later scroll requests are
    /// no-ops.
    pub fn teardown(&mut self) {
        self.scheduler.shutdown();
        self.pending_pass = None;
        self.time_range_selected.disconnect_all();
        self.hours.detach();
        self.minutes.detach();
        self.dragging_hour = false;
        self.dragging_minute = false;
        self.drag = None;
        tracing::debug!(target: targets::HOUR_PICKER, "torn down");
    }

    /// Whether [`teardown`](Self::teardown) was called.
    pub fn is_torn_down(&self) -> bool {
        self.scheduler.is_shut_down()
    }
}

impl Default for HourPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HourPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HourPicker")
            .field("mode", &self.mode)
            .field("start_time", &self.start_time())
            .field("end_time", &self.end_time())
            .field("dragging", &self.is_dragging())
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

// Ensure HourPicker is Send + Sync
static_assertions::assert_impl_all!(HourPicker: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    const CELL: f32 = 40.0;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn laid_out(cycles: usize) -> HourPicker {
        let config = HourPickerConfig {
            wheel_cycles: cycles,
            ..HourPickerConfig::default()
        };
        let mut picker = HourPicker::from_config(&config);
        picker.hour_column_mut().set_uniform_layout(100.0, CELL);
        picker.minute_column_mut().set_uniform_layout(100.0, CELL);
        picker
    }

    fn recorder(picker: &HourPicker) -> Arc<Mutex<Vec<TimeRange>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        picker
            .time_range_selected
            .connect(move |range| received_clone.lock().push(range.clone()));
        received
    }

    #[test]
    fn test_picker_creation() {
        let picker = HourPicker::new();
        assert_eq!(picker.mode(), TimeMode::Start);
        assert_eq!(picker.start_time(), "00:00");
        assert_eq!(picker.end_time(), "00:00");
        assert_eq!(picker.selected_hour(), 0);
        assert_eq!(picker.selected_minute(), 0);
        assert!(!picker.is_dragging());
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(format_time(parse_time("09:05").unwrap()), "09:05");
        assert_eq!(format_time(parse_time("23:59").unwrap()), "23:59");
        assert!(matches!(parse_time("24:00"), Err(Error::InvalidTime { .. })));
        assert!(parse_time("nine").is_err());
        assert!(parse_time("").is_err());
    }

    #[test]
    fn test_select_hour_and_minute() {
        let mut picker = laid_out(1);
        let received = recorder(&picker);

        picker.select_hour(9);
        picker.select_minute(45);

        assert_eq!(picker.start_time(), "09:45");
        assert_eq!(picker.hour_column().scroll_top(), 9.0 * CELL);
        assert_eq!(picker.minute_column().scroll_top(), 45.0 * CELL);
        assert_eq!(
            *received.lock(),
            vec![
                TimeRange { start: "09:00".into(), end: "00:00".into() },
                TimeRange { start: "09:45".into(), end: "00:00".into() },
            ]
        );
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut picker = laid_out(1);
        let received = recorder(&picker);

        picker.select_hour(24);
        picker.select_minute(60);

        assert!(received.lock().is_empty());
        assert_eq!(picker.start_time(), "00:00");
    }

    #[test]
    fn test_end_mode_edits_end_time() {
        let mut picker = laid_out(1);
        picker.set_mode(TimeMode::End);
        picker.select_hour(17);
        picker.select_minute(30);

        assert_eq!(picker.time_range(), TimeRange { start: "00:00".into(), end: "17:30".into() });
    }

    #[test]
    fn test_mode_switch_round_trip() {
        let mut picker = laid_out(1);
        let received = recorder(&picker);

        picker.set_start_time("09:15").unwrap();
        picker.set_mode(TimeMode::End);
        assert_eq!((picker.selected_hour(), picker.selected_minute()), (0, 0));
        assert_eq!(picker.hour_column().scroll_top(), 0.0);

        picker.set_mode(TimeMode::Start);
        assert_eq!(picker.selected_hour(), 9);
        assert_eq!(picker.selected_minute(), 15);
        assert_eq!(picker.hour_column().scroll_top(), 9.0 * CELL);
        assert_eq!(picker.minute_column().scroll_top(), 15.0 * CELL);

        assert!(received.lock().is_empty());
    }

    #[test]
    fn test_set_inactive_time_keeps_selection() {
        let mut picker = laid_out(1);
        picker.set_end_time("18:20").unwrap();
        assert_eq!(picker.selected_hour(), 0);
        assert_eq!(picker.end_time(), "18:20");

        assert!(picker.set_start_time("7pm").is_err());
        assert_eq!(picker.start_time(), "00:00");
    }

    #[test]
    fn test_drag_follows_pointer() {
        let mut picker = laid_out(1);
        picker.select_hour(5);

        picker.start_drag(WheelKind::Hour, &PointerEvent::mouse(300.0));
        assert!(picker.is_dragging());

        // Moving the pointer up scrolls further down the list.
        assert!(picker.drag_move(&PointerEvent::mouse(220.0)));
        assert_eq!(picker.hour_column().scroll_top(), 5.0 * CELL + 80.0);

        assert!(picker.drag_move(&PointerEvent::mouse(340.0)));
        assert_eq!(picker.hour_column().scroll_top(), 5.0 * CELL - 40.0);
        assert_eq!(picker.minute_column().scroll_top(), 0.0);
    }

    #[test]
    fn test_drag_move_without_drag_is_not_consumed() {
        let mut picker = laid_out(1);
        assert!(!picker.drag_move(&PointerEvent::mouse(10.0)));
    }

    #[test]
    fn test_touch_drag_and_release() {
        let mut picker = laid_out(1);
        let received = recorder(&picker);

        picker.start_drag(WheelKind::Minute, &PointerEvent::touch(500.0));
        assert!(picker.drag_move(&PointerEvent::touch(500.0 - 12.0 * CELL - 10.0)));
        // A touch move without touch points keeps the drag alive.
        assert!(picker.drag_move(&PointerEvent::Touch { touches: vec![] }));
        picker.end_drag();

        assert!(!picker.is_dragging());
        assert_eq!(picker.selected_minute(), 12);
        assert_eq!(picker.minute_column().scroll_top(), 12.0 * CELL);
        assert_eq!(
            received.lock().last(),
            Some(&TimeRange { start: "00:12".into(), end: "00:00".into() })
        );
    }

    #[test]
    fn test_release_wraps_zero_to_23() {
        let mut picker = laid_out(3);
        let received = recorder(&picker);

        picker.start_drag(WheelKind::Hour, &PointerEvent::mouse(1000.0));
        picker.drag_move(&PointerEvent::mouse(1000.0 - 48.0 * CELL));
        picker.end_drag();

        assert_eq!(picker.selected_hour(), 23);
        assert_eq!(picker.start_time(), "23:00");
        let index = picker.hour_column().index_of_value(23).unwrap();
        assert_eq!(picker.hour_column().scroll_top(), index as f32 * CELL);
        assert_eq!(received.lock().len(), 1);
    }

    #[test]
    fn test_release_wraps_59_to_zero() {
        let mut picker = laid_out(3);
        picker.set_start_time("00:30").unwrap();

        let start = picker.minute_column().scroll_top();
        picker.start_drag(WheelKind::Minute, &PointerEvent::mouse(0.0));
        picker.drag_move(&PointerEvent::mouse(start - 59.0 * CELL));
        picker.end_drag();

        assert_eq!(picker.selected_minute(), 0);
        assert_eq!(picker.start_time(), "00:00");
    }

    #[test]
    fn test_release_without_drag_does_nothing() {
        let mut picker = laid_out(1);
        let received = recorder(&picker);
        picker.end_drag();
        assert!(received.lock().is_empty());
    }

    #[test]
    fn test_drag_on_detached_column_ignored() {
        let mut picker = HourPicker::new();
        let received = recorder(&picker);

        picker.start_drag(WheelKind::Hour, &PointerEvent::mouse(10.0));
        assert!(!picker.is_dragging());
        assert!(!picker.drag_move(&PointerEvent::mouse(50.0)));
        picker.end_drag();
        assert!(received.lock().is_empty());
    }

    #[test]
    fn test_mount_runs_both_settle_passes() {
        let mut picker = laid_out(1);
        picker.set_start_time("06:40").unwrap();
        // Simulate the host scrolling the wheels away before layout settled.
        picker.hour_column_mut().set_scroll_top(0.0);
        picker.minute_column_mut().set_scroll_top(0.0);

        let t0 = Instant::now();
        picker.mount(t0);
        assert_eq!(picker.time_until_next_pass(t0), Some(ms(100)));
        assert_eq!(picker.process_deferred(t0 + ms(99)), 0);

        assert_eq!(picker.process_deferred(t0 + ms(100)), 1);
        assert_eq!(picker.hour_column().scroll_top(), 6.0 * CELL);
        assert_eq!(picker.minute_column().scroll_top(), 40.0 * CELL);

        picker.minute_column_mut().set_scroll_top(0.0);
        assert_eq!(picker.time_until_next_pass(t0 + ms(100)), Some(ms(50)));
        assert_eq!(picker.process_deferred(t0 + ms(150)), 1);
        assert_eq!(picker.minute_column().scroll_top(), 40.0 * CELL);
        assert_eq!(picker.time_until_next_pass(t0 + ms(150)), None);
    }

    #[test]
    fn test_remount_restarts_settle_passes() {
        let mut picker = laid_out(1);
        let t0 = Instant::now();

        picker.mount(t0);
        assert_eq!(picker.process_deferred(t0 + ms(100)), 1);
        // Mounting again drops the pending correction and starts over.
        picker.mount(t0 + ms(120));
        assert_eq!(picker.time_until_next_pass(t0 + ms(120)), Some(ms(100)));
        assert_eq!(picker.process_deferred(t0 + ms(150)), 0);

        picker.mount(t0 + ms(130));
        assert_eq!(picker.process_deferred(t0 + ms(220)), 0);
        assert_eq!(picker.process_deferred(t0 + ms(230)), 1);
        assert_eq!(picker.process_deferred(t0 + ms(280)), 1);
        assert_eq!(picker.time_until_next_pass(t0 + ms(280)), None);
    }

    #[test]
    fn test_teardown_cancels_pending_passes() {
        let mut picker = laid_out(1);
        let t0 = Instant::now();
        picker.mount(t0);
        picker.process_deferred(t0 + ms(100));

        let received = recorder(&picker);
        picker.teardown();
        assert!(picker.is_torn_down());
        assert_eq!(picker.time_range_selected.connection_count(), 0);
        assert_eq!(picker.process_deferred(t0 + ms(1000)), 0);
        assert!(!picker.hour_column().is_attached());

        // Selection still updates the model but never touches the view.
        picker.select_hour(4);
        assert_eq!(picker.start_time(), "04:00");
        assert!(received.lock().is_empty());
        assert!(!picker.hour_column_mut().scroll_to_index(4));

        picker.mount(t0 + ms(2000));
        assert_eq!(picker.time_until_next_pass(t0 + ms(2000)), None);
    }
}
