#![forbid(unsafe_code)]

//! Panel size vectors and flex-basis expressions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered panel sizes as percentages of the container.
///
/// One entry per panel; the vector conceptually sums to 100 but this is not
/// enforced. Serializes transparently as a JSON number array, which is also
/// the persisted layout format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelSizes(Vec<f64>);

impl PanelSizes {
    /// Initial sizes for `panel_count` panels.
    ///
    /// An explicit positive entry wins; missing or non-positive entries fall
    /// back to an equal `100 / panel_count` share.
    #[must_use]
    pub fn initial(panel_count: usize, explicit: &[f64]) -> Self {
        if panel_count == 0 {
            return Self(Vec::new());
        }
        let share = 100.0 / panel_count as f64;
        let values = (0..panel_count)
            .map(|index| match explicit.get(index) {
                Some(&value) if value > 0.0 => value,
                _ => share,
            })
            .collect();
        Self(values)
    }

    /// Wrap an already-computed vector (restored layouts).
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size of panel `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Overwrite the two entries adjacent to `gutter`.
    ///
    /// The vector grows as needed so a short restored layout cannot put the
    /// pair out of reach.
    pub fn set_pair(&mut self, gutter: usize, prev: f64, next: f64) {
        if self.0.len() < gutter + 2 {
            self.0.resize(gutter + 2, 0.0);
        }
        self.0[gutter] = prev;
        self.0[gutter + 1] = next;
    }

    /// Persisted layout payload: a bare JSON number array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Parse a persisted layout payload.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<f64>>(payload).map(Self)
    }
}

/// Side of the active gutter whose minimum was violated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "side", rename_all = "snake_case")]
pub enum RejectReason {
    /// The panel before the gutter would drop below its minimum.
    BelowPrevMin { min: f64 },
    /// The panel after the gutter would drop below its minimum.
    BelowNextMin { min: f64 },
}

/// Check a proposed neighbor pair against the sparse minimums.
///
/// Entry 0 constrains the panel before the gutter, entry 1 the panel after;
/// non-positive entries are no constraint. Hitting a minimum exactly passes.
#[must_use]
pub fn check_min_sizes(min_sizes: &[f64], new_prev: f64, new_next: f64) -> Option<RejectReason> {
    if let Some(&min) = min_sizes.first() {
        if min > 0.0 && new_prev < min {
            return Some(RejectReason::BelowPrevMin { min });
        }
    }
    if let Some(&min) = min_sizes.get(1) {
        if min > 0.0 && new_next < min {
            return Some(RejectReason::BelowNextMin { min });
        }
    }
    None
}

/// Inline size expression for one panel along the layout axis.
///
/// Renders as `calc(<percent>% - <offset>px)`; the offset is each panel's
/// share of the total gutter pixels, so gutters never overflow the
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexBasis {
    pub percent: f64,
    pub gutter_offset_px: f64,
}

impl FlexBasis {
    #[must_use]
    pub const fn new(percent: f64, gutter_offset_px: f64) -> Self {
        Self {
            percent,
            gutter_offset_px,
        }
    }

    /// Basis for one of `panel_count` panels separated by `gutter_size`
    /// pixel gutters: offset is `(panel_count - 1) * gutter_size`.
    #[must_use]
    pub fn for_panel(percent: f64, panel_count: usize, gutter_size: f64) -> Self {
        let offset = panel_count.saturating_sub(1) as f64 * gutter_size;
        Self::new(percent, offset)
    }
}

impl fmt::Display for FlexBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calc({}% - {}px)", self.percent, self.gutter_offset_px)
    }
}
