#![forbid(unsafe_code)]

//! Splitter configuration surface.
//!
//! [`SplitterOptions`] collects everything a host decides up front: layout
//! axis, gutter thickness, keyboard step, minimum-size constraints, initial
//! sizes, and the persistence scope/key. Unrecognized layout or storage
//! strings are configuration errors, rejected at parse time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default gutter thickness in pixels.
pub const DEFAULT_GUTTER_SIZE: f64 = 4.0;

/// Default keyboard step in pixels per repeat tick.
pub const DEFAULT_STEP: f64 = 5.0;

/// Fixed keyboard repeat interval in milliseconds.
///
/// Holding an arrow key resizes at this cadence regardless of the OS
/// key-repeat rate.
pub const KEY_REPEAT_INTERVAL_MS: u64 = 40;

/// Orientation of the panel sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Panels side by side; the resize axis is the x axis.
    #[default]
    Horizontal,
    /// Panels stacked; the resize axis is the y axis.
    Vertical,
}

impl Layout {
    /// Whether the resize axis is horizontal.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(ConfigError::UnknownLayout {
                value: other.to_string(),
            }),
        }
    }
}

/// Which scoped store a stateful splitter persists into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateScope {
    /// Store that survives only the current session.
    #[default]
    Session,
    /// Store that survives across sessions.
    Local,
}

impl fmt::Display for StateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session => f.write_str("session"),
            Self::Local => f.write_str("local"),
        }
    }
}

impl FromStr for StateScope {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "session" => Ok(Self::Session),
            "local" => Ok(Self::Local),
            other => Err(ConfigError::UnknownStateScope {
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownLayout { value: String },
    UnknownStateScope { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLayout { value } => {
                write!(
                    f,
                    "{value:?} is not a valid layout, supported values are \"horizontal\" and \"vertical\""
                )
            }
            Self::UnknownStateScope { value } => {
                write!(
                    f,
                    "{value:?} is not a valid value for the state storage, supported values are \"local\" and \"session\""
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Splitter configuration.
///
/// `min_sizes` is sparse and gutter-relative: entry 0 constrains the panel
/// before the active gutter, entry 1 the panel after it; absent or
/// non-positive entries mean "no constraint". `panel_sizes` entries are
/// initial percentages; missing or non-positive entries fall back to an
/// equal share. Persistence is enabled by setting `state_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterOptions {
    pub layout: Layout,
    /// Gutter thickness in pixels.
    pub gutter_size: f64,
    /// Keyboard step in pixels per repeat tick.
    pub step: f64,
    pub min_sizes: Vec<f64>,
    pub panel_sizes: Vec<f64>,
    pub state_storage: StateScope,
    pub state_key: Option<String>,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Horizontal,
            gutter_size: DEFAULT_GUTTER_SIZE,
            step: DEFAULT_STEP,
            min_sizes: Vec::new(),
            panel_sizes: Vec::new(),
            state_storage: StateScope::Session,
            state_key: None,
        }
    }
}

impl SplitterOptions {
    /// Options for a horizontal splitter with all defaults.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Options for a vertical splitter with all defaults.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            layout: Layout::Vertical,
            ..Self::default()
        }
    }

    /// Set the gutter thickness in pixels.
    #[must_use]
    pub fn gutter_size(mut self, pixels: f64) -> Self {
        self.gutter_size = pixels;
        self
    }

    /// Set the keyboard step in pixels per repeat tick.
    #[must_use]
    pub fn step(mut self, pixels: f64) -> Self {
        self.step = pixels;
        self
    }

    /// Set the gutter-relative minimum sizes (percent).
    #[must_use]
    pub fn min_sizes(mut self, minimums: impl IntoIterator<Item = f64>) -> Self {
        self.min_sizes = minimums.into_iter().collect();
        self
    }

    /// Set explicit initial panel sizes (percent).
    #[must_use]
    pub fn panel_sizes(mut self, sizes: impl IntoIterator<Item = f64>) -> Self {
        self.panel_sizes = sizes.into_iter().collect();
        self
    }

    /// Select the store scope used when persistence is enabled.
    #[must_use]
    pub fn state_storage(mut self, scope: StateScope) -> Self {
        self.state_storage = scope;
        self
    }

    /// Enable persistence under the given key.
    #[must_use]
    pub fn state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = Some(key.into());
        self
    }
}
