#![forbid(unsafe_code)]

//! Deterministic resizable panel splitter engine.
//!
//! Given an ordered row or column of panels, a [`Splitter`] lets a user drag
//! the gutter between two adjacent panels — or hold an arrow key on its
//! grip — to redistribute size between exactly those two neighbors, with
//! per-gutter minimum-size constraints and optional persistence of the
//! layout across sessions.
//!
//! The engine is host-agnostic and clock-free:
//!
//! - Rendering goes through the [`PanelHost`] trait (report extents, accept
//!   [`FlexBasis`] size expressions).
//! - Input arrives as semantic [`GutterEvent`]s; keyboard repeat is driven
//!   by the host's own timestamps via [`Splitter::poll_repeat`].
//! - Persistence goes through an injected [`StorageProvider`].
//!
//! Every call returns [`SplitterTransition`] records with explicit effects,
//! including no-op reasons for input that is safely ignored, so whole
//! gestures are replayable in tests without a UI.
//!
//! # Example
//!
//! ```
//! use splitrail::{
//!     FlexBasis, GutterEvent, Layout, PanelHost, PointerPosition, Splitter, SplitterOptions,
//! };
//!
//! /// Minimal host: extents mirror the applied percentages directly.
//! struct Strip {
//!     container: f64,
//!     extents: Vec<f64>,
//! }
//!
//! impl PanelHost for Strip {
//!     fn panel_count(&self) -> usize {
//!         self.extents.len()
//!     }
//!     fn container_extent(&self, _layout: Layout) -> f64 {
//!         self.container
//!     }
//!     fn panel_extent(&self, index: usize, _layout: Layout) -> f64 {
//!         self.extents[index]
//!     }
//!     fn apply_basis(&mut self, index: usize, basis: &FlexBasis) {
//!         self.extents[index] = basis.percent / 100.0 * self.container - basis.gutter_offset_px;
//!     }
//! }
//!
//! # fn main() -> Result<(), splitrail::SplitterError> {
//! let mut host = Strip {
//!     container: 800.0,
//!     extents: vec![400.0, 400.0],
//! };
//! let mut splitter = Splitter::new(SplitterOptions::horizontal().gutter_size(0.0));
//! splitter.attach(&mut host)?;
//!
//! splitter.handle(
//!     &mut host,
//!     GutterEvent::PointerDown {
//!         gutter: 0,
//!         position: PointerPosition::new(400.0, 0.0),
//!     },
//! )?;
//! splitter.handle(
//!     &mut host,
//!     GutterEvent::PointerMove {
//!         position: PointerPosition::new(600.0, 0.0),
//!     },
//! )?;
//! splitter.handle(&mut host, GutterEvent::PointerUp)?;
//!
//! assert_eq!(splitter.panel_sizes().as_slice(), &[75.0, 25.0]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod host;
pub mod session;
pub mod sizes;
pub mod splitter;
pub mod state;

pub use config::{
    ConfigError, DEFAULT_GUTTER_SIZE, DEFAULT_STEP, KEY_REPEAT_INTERVAL_MS, Layout, SplitterOptions,
    StateScope,
};
pub use host::PanelHost;
pub use session::{GestureKind, ResizeSession};
pub use sizes::{FlexBasis, PanelSizes, RejectReason};
pub use splitter::{
    GutterEvent, NoopReason, PointerPosition, ResizeKey, Splitter, SplitterEffect, SplitterError,
    SplitterState, SplitterTransition,
};
pub use state::{MemoryStorage, MemoryStore, NoStorage, StateStore, StorageError, StorageProvider};
