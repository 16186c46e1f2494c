#![forbid(unsafe_code)]

//! Transient per-gesture capture state and step arithmetic.
//!
//! A [`ResizeSession`] is created at gesture start, consulted on every
//! move/step, and destroyed on release. Sizes are canonically percentages of
//! the container; deltas always derive from the gesture-start baseline, so
//! the affected pair's total is conserved and no error accumulates across
//! moves.

use serde::{Deserialize, Serialize};

/// How the active gesture is being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    Pointer,
    Keyboard,
}

/// Reference state captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeSession {
    /// Index of the dragged gutter; the affected panels are `gutter` and
    /// `gutter + 1`.
    pub gutter: usize,
    pub kind: GestureKind,
    /// Container extent in pixels along the active axis at capture time.
    pub container_px: f64,
    /// Starting size of the panel before the gutter, percent of container.
    pub prev_pct: f64,
    /// Starting size of the panel after the gutter, percent of container.
    pub next_pct: f64,
    /// Pointer coordinate along the active axis at capture time; `None` for
    /// keyboard gestures.
    pub origin: Option<f64>,
}

impl ResizeSession {
    /// Proposed neighbor sizes for a pointer now at `coord`.
    ///
    /// Returns `None` when the session has no pointer origin.
    #[must_use]
    pub fn drag_step(&self, coord: f64) -> Option<(f64, f64)> {
        let origin = self.origin?;
        let delta = coord * 100.0 / self.container_px - origin * 100.0 / self.container_px;
        Some((self.prev_pct + delta, self.next_pct - delta))
    }

    /// Proposed neighbor sizes for one signed keyboard step in pixels.
    #[must_use]
    pub fn keyboard_step(&self, step_px: f64) -> (f64, f64) {
        let step_pct = step_px * 100.0 / self.container_px;
        (self.prev_pct + step_pct, self.next_pct - step_pct)
    }
}
