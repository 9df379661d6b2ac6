//! Scroll-wheel columns for the hour picker.
//!
//! A [`WheelColumn`] models one vertically scrolling list of numbers as the
//! host lays it out: the value of every cell, where each cell sits inside the
//! scroll container, and the container's current scroll offset. The host
//! reports the layout with [`WheelColumn::set_layout`] once the view exists
//! and reads [`WheelColumn::scroll_top`] back after every transition.
//!
//! A column may repeat its values over several cycles (`0..24, 0..24, ...`).
//! Landing on a repeated `0` past the middle of the list, or on the last
//! value before it, wraps around on release, which makes the list appear to
//! loop.

use horizon_forms_core::logging::targets;

use super::events::WheelKind;

/// One scrolling list of hour or minute cells.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelColumn {
    kind: WheelKind,
    cycles: usize,
    /// Value shown by each cell, in display order.
    values: Vec<u32>,
    /// Top of each cell, in the same coordinates as `container_offset`.
    cell_offsets: Vec<f32>,
    /// Top of the scroll container. Cells aligned with it are "selected".
    container_offset: f32,
    /// Current scroll offset of the container.
    scroll_top: f32,
    /// Whether the host has laid the column out and it is still in the view.
    attached: bool,
}

impl WheelColumn {
    /// Create a detached column holding `cycles` copies of the wheel's values.
    pub fn new(kind: WheelKind, cycles: usize) -> Self {
        let cycles = cycles.max(1);
        let count = kind.value_count();
        let values = (0..count).cycle().take(count as usize * cycles).collect();

        Self {
            kind,
            cycles,
            values,
            cell_offsets: Vec::new(),
            container_offset: 0.0,
            scroll_top: 0.0,
            attached: false,
        }
    }

    /// Which wheel this column is.
    pub fn kind(&self) -> WheelKind {
        self.kind
    }

    /// Number of distinct values (24 or 60).
    pub fn value_count(&self) -> u32 {
        self.kind.value_count()
    }

    /// Number of cells, counting every cycle.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values of every cell, in display order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// The value shown by the cell at `index`.
    pub fn value_at(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// Index of the cell showing `value` in the middle cycle.
    pub fn index_of_value(&self, value: u32) -> Option<usize> {
        let count = self.value_count();
        (value < count).then(|| (self.cycles / 2) * count as usize + value as usize)
    }

    /// Index of the middle cell, used to decide wrap direction.
    pub fn midpoint(&self) -> usize {
        self.values.len() / 2
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Report the laid out column: the container's top and each cell's top.
    ///
    /// Offsets beyond the number of cells are ignored; missing offsets leave
    /// those cells unreachable.
    pub fn set_layout(&mut self, container_offset: f32, cell_offsets: Vec<f32>) {
        self.container_offset = container_offset;
        self.cell_offsets = cell_offsets;
        self.cell_offsets.truncate(self.values.len());
        self.attached = true;
        tracing::debug!(
            target: targets::HOUR_PICKER,
            kind = ?self.kind,
            cells = self.cell_offsets.len(),
            "wheel column laid out"
        );
    }

    /// Lay out cells of equal height stacked from the top of the container.
    pub fn set_uniform_layout(&mut self, container_offset: f32, cell_height: f32) {
        let offsets = (0..self.values.len())
            .map(|i| container_offset + i as f32 * cell_height)
            .collect();
        self.set_layout(container_offset, offsets);
    }

    /// Lay out using builder pattern.
    pub fn with_uniform_layout(mut self, container_offset: f32, cell_height: f32) -> Self {
        self.set_uniform_layout(container_offset, cell_height);
        self
    }

    /// Forget the layout. Scroll requests become no-ops until laid out again.
    pub fn detach(&mut self) {
        self.attached = false;
        self.cell_offsets.clear();
    }

    /// Whether the column is laid out.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Position of a cell relative to the container.
    pub fn cell_position(&self, index: usize) -> Option<f32> {
        self.cell_offsets
            .get(index)
            .map(|offset| offset - self.container_offset)
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Current scroll offset.
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        self.cell_offsets
            .len()
            .checked_sub(1)
            .and_then(|last| self.cell_position(last))
            .unwrap_or(0.0)
            .max(0.0)
    }

    /// Set the scroll offset, clamped to the scrollable range.
    pub fn set_scroll_top(&mut self, offset: f32) {
        if !self.attached {
            return;
        }
        self.scroll_top = offset.clamp(0.0, self.max_scroll());
        tracing::trace!(target: targets::HOUR_PICKER, kind = ?self.kind, scroll_top = self.scroll_top, "wheel scrolled");
    }

    /// Scroll so the cell at `index` aligns with the top of the container.
    ///
    /// Returns `false` without scrolling when the column is detached or the
    /// index is out of range.
    pub fn scroll_to_index(&mut self, index: usize) -> bool {
        if !self.attached {
            tracing::debug!(target: targets::HOUR_PICKER, kind = ?self.kind, "scroll ignored, column detached");
            return false;
        }
        let Some(position) = self.cell_position(index) else {
            tracing::debug!(target: targets::HOUR_PICKER, kind = ?self.kind, index, "scroll ignored, index out of range");
            return false;
        };
        self.set_scroll_top(position);
        true
    }

    /// Scroll to the middle-cycle cell showing `value`.
    pub fn scroll_to_value(&mut self, value: u32) -> bool {
        match self.index_of_value(value) {
            Some(index) => self.scroll_to_index(index),
            None => false,
        }
    }

    /// Index of the cell closest to the current scroll offset.
    ///
    /// The first cell wins ties.
    pub fn closest_index(&self) -> Option<usize> {
        let mut closest: Option<(usize, f32)> = None;
        for index in 0..self.cell_offsets.len() {
            let Some(position) = self.cell_position(index) else {
                continue;
            };
            let distance = (position - self.scroll_top).abs();
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((index, distance));
            }
        }
        closest.map(|(index, _)| index)
    }

    /// The value the column settles on when a drag ends.
    ///
    /// The closest cell's value, except that a `0` past the midpoint wraps to
    /// the last value and the last value before the midpoint wraps to `0`.
    pub fn resolve_release(&self) -> Option<u32> {
        let index = self.closest_index()?;
        let value = self.value_at(index)?;
        let last = self.value_count() - 1;
        let middle = self.midpoint();

        let resolved = if value == 0 && index > middle {
            last
        } else if value == last && index < middle {
            0
        } else {
            value
        };

        if resolved != value {
            tracing::debug!(target: targets::HOUR_PICKER, kind = ?self.kind, index, value, resolved, "wheel wrapped");
        }
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: f32 = 40.0;

    #[test]
    fn test_values_repeat_per_cycle() {
        let column = WheelColumn::new(WheelKind::Hour, 3);
        assert_eq!(column.len(), 72);
        assert_eq!(column.value_at(0), Some(0));
        assert_eq!(column.value_at(23), Some(23));
        assert_eq!(column.value_at(48), Some(0));
        assert_eq!(column.midpoint(), 36);
        assert_eq!(column.index_of_value(9), Some(33));
        assert_eq!(column.index_of_value(24), None);

        let single = WheelColumn::new(WheelKind::Minute, 0);
        assert_eq!(single.len(), 60);
        assert_eq!(single.index_of_value(15), Some(15));
    }

    #[test]
    fn test_detached_column_ignores_scrolling() {
        let mut column = WheelColumn::new(WheelKind::Hour, 1);
        assert!(!column.scroll_to_index(3));
        column.set_scroll_top(100.0);
        assert_eq!(column.scroll_top(), 0.0);
        assert_eq!(column.closest_index(), None);
        assert_eq!(column.resolve_release(), None);
    }

    #[test]
    fn test_scroll_to_index_is_relative_to_container() {
        let mut column = WheelColumn::new(WheelKind::Hour, 1).with_uniform_layout(200.0, CELL);
        assert!(column.scroll_to_index(5));
        assert_eq!(column.scroll_top(), 5.0 * CELL);

        assert!(!column.scroll_to_index(24));
        assert_eq!(column.scroll_top(), 5.0 * CELL);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut column = WheelColumn::new(WheelKind::Hour, 1).with_uniform_layout(0.0, CELL);
        column.set_scroll_top(-50.0);
        assert_eq!(column.scroll_top(), 0.0);
        column.set_scroll_top(10_000.0);
        assert_eq!(column.scroll_top(), 23.0 * CELL);
    }

    #[test]
    fn test_closest_index_prefers_first_on_tie() {
        let mut column = WheelColumn::new(WheelKind::Minute, 1).with_uniform_layout(0.0, CELL);
        column.set_scroll_top(2.5 * CELL);
        assert_eq!(column.closest_index(), Some(2));
        column.set_scroll_top(2.6 * CELL);
        assert_eq!(column.closest_index(), Some(3));
    }

    #[test]
    fn test_release_wraps_zero_past_midpoint() {
        let mut column = WheelColumn::new(WheelKind::Hour, 3).with_uniform_layout(0.0, CELL);
        column.set_scroll_top(48.0 * CELL + 5.0);
        assert_eq!(column.closest_index(), Some(48));
        assert_eq!(column.resolve_release(), Some(23));
    }

    #[test]
    fn test_release_wraps_last_before_midpoint() {
        let mut column = WheelColumn::new(WheelKind::Minute, 3).with_uniform_layout(0.0, CELL);
        column.set_scroll_top(59.0 * CELL);
        assert_eq!(column.resolve_release(), Some(0));
    }

    #[test]
    fn test_release_keeps_ordinary_values() {
        let mut column = WheelColumn::new(WheelKind::Hour, 3).with_uniform_layout(0.0, CELL);
        column.set_scroll_top(24.0 * CELL);
        assert_eq!(column.resolve_release(), Some(0));
        column.set_scroll_top(47.0 * CELL);
        assert_eq!(column.resolve_release(), Some(23));
        column.set_scroll_top(30.0 * CELL);
        assert_eq!(column.resolve_release(), Some(6));
    }

    #[test]
    fn test_detach_forgets_layout() {
        let mut column = WheelColumn::new(WheelKind::Hour, 1).with_uniform_layout(0.0, CELL);
        column.detach();
        assert!(!column.is_attached());
        assert!(!column.scroll_to_value(3));
    }
}
