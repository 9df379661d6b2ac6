//! Pointer events forwarded by the host into the widgets.
//!
//! Hosts translate their native mouse and touch events into [`PointerEvent`]
//! values. Only the vertical position matters to the widgets, so that is all
//! the events carry.

/// A pointer press, move or release.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// A mouse event at vertical client position `y`.
    Mouse {
        /// Vertical position in client coordinates.
        y: f32,
    },
    /// A touch event with the vertical client positions of every active touch.
    Touch {
        /// Vertical positions of the active touch points, in order.
        touches: Vec<f32>,
    },
}

impl PointerEvent {
    /// Create a mouse event.
    pub fn mouse(y: f32) -> Self {
        Self::Mouse { y }
    }

    /// Create a single-finger touch event.
    pub fn touch(y: f32) -> Self {
        Self::Touch { touches: vec![y] }
    }

    /// The vertical client position of the event.
    ///
    /// Touch events use their first touch point. A touch event without any
    /// touch point has no position.
    pub fn client_y(&self) -> Option<f32> {
        match self {
            PointerEvent::Mouse { y } => Some(*y),
            PointerEvent::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Which wheel of the hour picker an event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelKind {
    /// The 0-23 hour wheel.
    Hour,
    /// The 0-59 minute wheel.
    Minute,
}

impl WheelKind {
    /// Number of distinct values on the wheel.
    pub fn value_count(&self) -> u32 {
        match self {
            WheelKind::Hour => 24,
            WheelKind::Minute => 60,
        }
    }
}
