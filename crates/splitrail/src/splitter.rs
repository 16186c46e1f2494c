#![forbid(unsafe_code)]

//! Splitter lifecycle state machine.
//!
//! ```text
//! Idle -> Resizing -> Idle
//! ```
//!
//! A splitter is driven entirely by semantic input events forwarded from the
//! host event loop; it never reads a clock or touches the environment except
//! through [`PanelHost`] and the injected storage provider. Every call
//! returns a transition record with an explicit effect — including no-op
//! reasons for input that is safely ignored — so gestures are deterministic
//! and replayable in tests.
//!
//! Resize math is percent-canonical: baselines are captured as percentages
//! of the container at gesture start and keyboard pixel steps are converted
//! per tick. Only the two panels adjacent to the active gutter are ever
//! modified.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{KEY_REPEAT_INTERVAL_MS, Layout, SplitterOptions};
use crate::host::PanelHost;
use crate::session::{GestureKind, ResizeSession};
use crate::sizes::{FlexBasis, PanelSizes, RejectReason, check_min_sizes};
use crate::state::{NoStorage, StorageError, StorageProvider};

/// Pointer position in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the resize axis.
    pub(crate) fn along(self, layout: Layout) -> f64 {
        if layout.is_horizontal() { self.x } else { self.y }
    }
}

/// Arrow keys recognized on a gutter grip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl ResizeKey {
    /// Signed pixel step under `layout`: the gutter follows the arrow, so
    /// right/down grow the previous panel. `None` on axis mismatch.
    fn signed_step(self, layout: Layout, step: f64) -> Option<f64> {
        match (layout, self) {
            (Layout::Horizontal, Self::ArrowRight) => Some(step),
            (Layout::Horizontal, Self::ArrowLeft) => Some(-step),
            (Layout::Vertical, Self::ArrowDown) => Some(step),
            (Layout::Vertical, Self::ArrowUp) => Some(-step),
            _ => None,
        }
    }
}

/// Semantic input events a host forwards to its splitter.
///
/// `now_ms` is the host's monotonic clock in milliseconds; it only has to be
/// consistent with the values later passed to [`Splitter::poll_repeat`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GutterEvent {
    /// Press on the gutter between panels `gutter` and `gutter + 1`.
    PointerDown {
        gutter: usize,
        position: PointerPosition,
    },
    PointerMove {
        position: PointerPosition,
    },
    PointerUp,
    /// Arrow key pressed on the grip of gutter `gutter`.
    KeyDown {
        gutter: usize,
        key: ResizeKey,
        now_ms: u64,
    },
    KeyUp,
}

/// Lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SplitterState {
    Idle,
    Resizing { session: ResizeSession },
}

impl SplitterState {
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Reasons input is safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoopReason {
    IdleWithoutActiveSession,
    SessionAlreadyActive,
    AxisMismatch,
    SessionDisallowsPointerMove,
}

/// Effect emitted by one transition.
///
/// `sizes` snapshots are the full panel-size vector at emission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SplitterEffect {
    ResizeStarted {
        gutter: usize,
        sizes: PanelSizes,
    },
    StepApplied {
        gutter: usize,
        prev: f64,
        next: f64,
    },
    /// A step outside the minimum-size bounds; nothing changed except the
    /// live grip position. The gesture continues.
    StepRejected {
        gutter: usize,
        prev: f64,
        next: f64,
        reason: RejectReason,
    },
    ResizeEnded {
        sizes: PanelSizes,
    },
    Noop {
        reason: NoopReason,
    },
}

/// One observed state-machine transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterTransition {
    pub from: SplitterState,
    pub to: SplitterState,
    pub effect: SplitterEffect,
}

/// Splitter operation errors.
///
/// Any error aborts only the current step; the last valid size vector and
/// the active session survive untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitterError {
    /// Gutter index does not sit between two panels.
    GutterOutOfRange { gutter: usize, panel_count: usize },
    /// Container reported a non-positive or non-finite extent at capture.
    DegenerateContainer { extent: f64 },
    /// Persistence requested where no store exists.
    Storage(StorageError),
    /// Stored payload under `key` could not be parsed.
    PersistedStateCorrupt { key: String, detail: String },
    /// Panel sizes could not be serialized for persistence.
    StateSerialize { detail: String },
}

impl fmt::Display for SplitterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GutterOutOfRange {
                gutter,
                panel_count,
            } => {
                write!(
                    f,
                    "gutter {gutter} does not separate two panels (panel count {panel_count})"
                )
            }
            Self::DegenerateContainer { extent } => {
                write!(f, "container extent {extent} cannot be resized")
            }
            Self::Storage(source) => write!(f, "persistence store access failed: {source}"),
            Self::PersistedStateCorrupt { key, detail } => {
                write!(f, "persisted layout under {key:?} is not a number array: {detail}")
            }
            Self::StateSerialize { detail } => {
                write!(f, "panel sizes are not serializable: {detail}")
            }
        }
    }
}

impl std::error::Error for SplitterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(source) => Some(source),
            _ => None,
        }
    }
}

impl From<StorageError> for SplitterError {
    fn from(source: StorageError) -> Self {
        Self::Storage(source)
    }
}

/// Armed keyboard repeat: one per splitter, fixed 40ms cadence.
#[derive(Debug, Clone, Copy, PartialEq)]
struct KeyRepeat {
    gutter: usize,
    step_px: f64,
    deadline_ms: u64,
}

/// Resizable panel splitter engine.
///
/// Construct with [`Splitter::new`] (no persistence environment) or
/// [`Splitter::with_storage`], call [`Splitter::attach`] once the host can
/// report its panels, then forward [`GutterEvent`]s and drive
/// [`Splitter::poll_repeat`] while a key is held.
pub struct Splitter {
    options: SplitterOptions,
    storage: Box<dyn StorageProvider>,
    sizes: PanelSizes,
    state: SplitterState,
    repeat: Option<KeyRepeat>,
    grip_position: Option<f64>,
    panel_count: usize,
    restored: bool,
    nested: bool,
}

impl fmt::Debug for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Splitter")
            .field("options", &self.options)
            .field("sizes", &self.sizes)
            .field("state", &self.state)
            .field("repeat", &self.repeat)
            .field("panel_count", &self.panel_count)
            .field("restored", &self.restored)
            .field("nested", &self.nested)
            .finish_non_exhaustive()
    }
}

impl Splitter {
    /// Engine with the default (absent) storage environment.
    ///
    /// A stateful configuration will fail at attach; inject a provider with
    /// [`Splitter::with_storage`] to persist layouts.
    #[must_use]
    pub fn new(options: SplitterOptions) -> Self {
        Self::with_storage(options, Box::new(NoStorage))
    }

    /// Engine with an injected persistence provider.
    #[must_use]
    pub fn with_storage(options: SplitterOptions, storage: Box<dyn StorageProvider>) -> Self {
        Self {
            options,
            storage,
            sizes: PanelSizes::default(),
            state: SplitterState::Idle,
            repeat: None,
            grip_position: None,
            panel_count: 0,
            restored: false,
            nested: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &SplitterOptions {
        &self.options
    }

    #[must_use]
    pub const fn state(&self) -> SplitterState {
        self.state
    }

    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        !self.state.is_idle()
    }

    /// Current panel-size vector (percent per panel).
    #[must_use]
    pub fn panel_sizes(&self) -> &PanelSizes {
        &self.sizes
    }

    /// Live grip position for ARIA-style readouts: the previous panel's
    /// proposed percentage, updated on every step even when rejected.
    #[must_use]
    pub const fn grip_position(&self) -> Option<f64> {
        self.grip_position
    }

    /// Whether attach restored a persisted layout instead of computing one.
    #[must_use]
    pub const fn restored_from_state(&self) -> bool {
        self.restored
    }

    /// Whether this splitter is rendered inside another splitter.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.nested
    }

    /// Next keyboard-repeat deadline on the host clock, if a key is held.
    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.repeat.map(|repeat| repeat.deadline_ms)
    }

    /// Initialize panel sizes and push them to the host.
    ///
    /// Explicit positive entries in the configured sizes win, the rest split
    /// evenly; a persisted layout under the configured key overrides both.
    /// Also performs the one-time nested classification. Idempotent:
    /// re-attaching recomputes from configuration and store.
    pub fn attach(&mut self, host: &mut dyn PanelHost) -> Result<(), SplitterError> {
        self.panel_count = host.panel_count();
        self.nested = host.nested_in_splitter();
        let saved = self.load_saved()?;
        self.restored = saved.is_some();
        self.sizes = match saved {
            Some(sizes) => sizes,
            None => PanelSizes::initial(self.panel_count, &self.options.panel_sizes),
        };
        self.grip_position = if self.restored {
            None
        } else {
            self.sizes.get(0).map(quantize_grip)
        };
        self.state = SplitterState::Idle;
        self.repeat = None;
        self.apply_all(host);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            panels = self.panel_count,
            restored = self.restored,
            nested = self.nested,
            "splitter attached"
        );
        Ok(())
    }

    /// Apply one semantic input event.
    pub fn handle(
        &mut self,
        host: &mut dyn PanelHost,
        event: GutterEvent,
    ) -> Result<SplitterTransition, SplitterError> {
        let from = self.state;
        match event {
            GutterEvent::PointerDown { gutter, position } => {
                if !from.is_idle() {
                    return Ok(self.noop(NoopReason::SessionAlreadyActive));
                }
                let (_, effect) =
                    self.capture(host, gutter, GestureKind::Pointer, Some(position))?;
                Ok(self.transition(from, effect))
            }
            GutterEvent::PointerMove { position } => {
                let SplitterState::Resizing { session } = from else {
                    return Ok(self.noop(NoopReason::IdleWithoutActiveSession));
                };
                let coord = position.along(self.options.layout);
                let Some((new_prev, new_next)) = session.drag_step(coord) else {
                    return Ok(self.noop(NoopReason::SessionDisallowsPointerMove));
                };
                let effect = self.apply_step(host, session, new_prev, new_next);
                Ok(self.transition(from, effect))
            }
            GutterEvent::PointerUp | GutterEvent::KeyUp => {
                if from.is_idle() {
                    return Ok(self.noop(NoopReason::IdleWithoutActiveSession));
                }
                let effect = self.resize_end(host)?;
                Ok(self.transition(from, effect))
            }
            GutterEvent::KeyDown {
                gutter,
                key,
                now_ms,
            } => {
                if let SplitterState::Resizing { session } = from {
                    if session.kind == GestureKind::Pointer {
                        return Ok(self.noop(NoopReason::SessionAlreadyActive));
                    }
                }
                let Some(step_px) = key.signed_step(self.options.layout, self.options.step) else {
                    return Ok(self.noop(NoopReason::AxisMismatch));
                };
                let (_, effect) = self.capture(host, gutter, GestureKind::Keyboard, None)?;
                // Arming after capture keeps a failed capture timer-free.
                // A key-down during a keyboard session retargets the repeat.
                self.repeat = Some(KeyRepeat {
                    gutter,
                    step_px,
                    deadline_ms: now_ms.saturating_add(KEY_REPEAT_INTERVAL_MS),
                });
                Ok(self.transition(from, effect))
            }
        }
    }

    /// Drain due keyboard-repeat ticks.
    ///
    /// Each due tick re-captures fresh baselines (emitting `ResizeStarted`)
    /// and applies exactly one step; overdue ticks are drained in order.
    /// Returns an empty vector when no repeat is armed or none is due.
    pub fn poll_repeat(
        &mut self,
        host: &mut dyn PanelHost,
        now_ms: u64,
    ) -> Result<Vec<SplitterTransition>, SplitterError> {
        let mut transitions = Vec::new();
        while let Some(repeat) = self.repeat {
            if now_ms < repeat.deadline_ms {
                break;
            }
            // Advance the deadline before the tick so a failing capture
            // cannot spin the drain loop.
            self.repeat = Some(KeyRepeat {
                deadline_ms: repeat.deadline_ms.saturating_add(KEY_REPEAT_INTERVAL_MS),
                ..repeat
            });
            let from = self.state;
            let (session, started) =
                self.capture(host, repeat.gutter, GestureKind::Keyboard, None)?;
            transitions.push(self.transition(from, started));
            let (new_prev, new_next) = session.keyboard_step(repeat.step_px);
            let from = self.state;
            let effect = self.apply_step(host, session, new_prev, new_next);
            transitions.push(self.transition(from, effect));
        }
        Ok(transitions)
    }

    /// Capture reference sizes and enter `Resizing`. Pure capture: no panel
    /// changes.
    fn capture(
        &mut self,
        host: &mut dyn PanelHost,
        gutter: usize,
        kind: GestureKind,
        position: Option<PointerPosition>,
    ) -> Result<(ResizeSession, SplitterEffect), SplitterError> {
        let panel_count = self.panel_count;
        if gutter.saturating_add(1) >= panel_count {
            return Err(SplitterError::GutterOutOfRange {
                gutter,
                panel_count,
            });
        }
        let layout = self.options.layout;
        let container_px = host.container_extent(layout);
        if !container_px.is_finite() || container_px <= 0.0 {
            return Err(SplitterError::DegenerateContainer {
                extent: container_px,
            });
        }
        let prev_pct = host.panel_extent(gutter, layout) * 100.0 / container_px;
        let next_pct = host.panel_extent(gutter + 1, layout) * 100.0 / container_px;
        let session = ResizeSession {
            gutter,
            kind,
            container_px,
            prev_pct,
            next_pct,
            origin: position.map(|p| p.along(layout)),
        };
        self.state = SplitterState::Resizing { session };
        host.set_resizing(true);
        #[cfg(feature = "tracing")]
        tracing::debug!(gutter, ?kind, container_px, prev_pct, next_pct, "resize capture");
        Ok((
            session,
            SplitterEffect::ResizeStarted {
                gutter,
                sizes: self.sizes.clone(),
            },
        ))
    }

    /// Validate and apply one proposed neighbor pair. All-or-nothing except
    /// the live grip position, which tracks the proposal unconditionally.
    fn apply_step(
        &mut self,
        host: &mut dyn PanelHost,
        session: ResizeSession,
        new_prev: f64,
        new_next: f64,
    ) -> SplitterEffect {
        self.grip_position = Some(quantize_grip(new_prev));
        if let Some(reason) = check_min_sizes(&self.options.min_sizes, new_prev, new_next) {
            #[cfg(feature = "tracing")]
            tracing::debug!(gutter = session.gutter, new_prev, new_next, "step rejected");
            return SplitterEffect::StepRejected {
                gutter: session.gutter,
                prev: new_prev,
                next: new_next,
                reason,
            };
        }
        let panel_count = self.panel_count;
        let gutter_size = self.options.gutter_size;
        host.apply_basis(
            session.gutter,
            &FlexBasis::for_panel(new_prev, panel_count, gutter_size),
        );
        host.apply_basis(
            session.gutter + 1,
            &FlexBasis::for_panel(new_next, panel_count, gutter_size),
        );
        self.sizes.set_pair(session.gutter, new_prev, new_next);
        #[cfg(feature = "tracing")]
        tracing::trace!(gutter = session.gutter, new_prev, new_next, "step applied");
        SplitterEffect::StepApplied {
            gutter: session.gutter,
            prev: new_prev,
            next: new_next,
        }
    }

    /// Persist (when stateful), notify, and return to `Idle`.
    fn resize_end(&mut self, host: &mut dyn PanelHost) -> Result<SplitterEffect, SplitterError> {
        self.repeat = None;
        if let Some(key) = self.options.state_key.clone() {
            let payload = self
                .sizes
                .to_json()
                .map_err(|err| SplitterError::StateSerialize {
                    detail: err.to_string(),
                })?;
            let store = self.storage.storage(self.options.state_storage)?;
            store.store(&key, &payload);
        }
        host.set_resizing(false);
        self.state = SplitterState::Idle;
        #[cfg(feature = "tracing")]
        tracing::debug!(sizes = ?self.sizes, "resize ended");
        Ok(SplitterEffect::ResizeEnded {
            sizes: self.sizes.clone(),
        })
    }

    fn load_saved(&mut self) -> Result<Option<PanelSizes>, SplitterError> {
        let Some(key) = self.options.state_key.clone() else {
            return Ok(None);
        };
        let store = self.storage.storage(self.options.state_storage)?;
        let Some(payload) = store.load(&key) else {
            return Ok(None);
        };
        let sizes = PanelSizes::from_json(&payload).map_err(|err| {
            SplitterError::PersistedStateCorrupt {
                key,
                detail: err.to_string(),
            }
        })?;
        Ok(Some(sizes))
    }

    fn apply_all(&self, host: &mut dyn PanelHost) {
        for index in 0..self.panel_count {
            let Some(percent) = self.sizes.get(index) else {
                continue;
            };
            host.apply_basis(
                index,
                &FlexBasis::for_panel(percent, self.panel_count, self.options.gutter_size),
            );
        }
    }

    fn transition(&self, from: SplitterState, effect: SplitterEffect) -> SplitterTransition {
        SplitterTransition {
            from,
            to: self.state,
            effect,
        }
    }

    fn noop(&self, reason: NoopReason) -> SplitterTransition {
        SplitterTransition {
            from: self.state,
            to: self.state,
            effect: SplitterEffect::Noop { reason },
        }
    }
}

/// Grip positions quantize to 4 decimal places for stable live readouts.
fn quantize_grip(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateScope;
    use crate::state::MemoryStorage;

    /// Pixel-exact host: zero gutter thickness, extents mirror the applied
    /// percentages directly.
    struct MiniHost {
        container: f64,
        extents: Vec<f64>,
        resizing: bool,
        nested: bool,
    }

    impl MiniHost {
        fn new(container: f64, panel_count: usize) -> Self {
            Self {
                container,
                extents: vec![container / panel_count as f64; panel_count],
                resizing: false,
                nested: false,
            }
        }
    }

    impl PanelHost for MiniHost {
        fn panel_count(&self) -> usize {
            self.extents.len()
        }

        fn container_extent(&self, _layout: Layout) -> f64 {
            self.container
        }

        fn panel_extent(&self, index: usize, _layout: Layout) -> f64 {
            self.extents[index]
        }

        fn apply_basis(&mut self, index: usize, basis: &FlexBasis) {
            self.extents[index] =
                basis.percent / 100.0 * self.container - basis.gutter_offset_px;
        }

        fn set_resizing(&mut self, resizing: bool) {
            self.resizing = resizing;
        }

        fn nested_in_splitter(&self) -> bool {
            self.nested
        }
    }

    fn zero_gutter_options() -> SplitterOptions {
        SplitterOptions::horizontal().gutter_size(0.0)
    }

    fn attached(container: f64, panel_count: usize) -> (Splitter, MiniHost) {
        let mut splitter = Splitter::new(zero_gutter_options());
        let mut host = MiniHost::new(container, panel_count);
        splitter.attach(&mut host).expect("attach succeeds");
        (splitter, host)
    }

    fn down(gutter: usize, coord: f64) -> GutterEvent {
        GutterEvent::PointerDown {
            gutter,
            position: PointerPosition::new(coord, 0.0),
        }
    }

    fn mv(coord: f64) -> GutterEvent {
        GutterEvent::PointerMove {
            position: PointerPosition::new(coord, 0.0),
        }
    }

    #[test]
    fn attach_splits_evenly_without_explicit_sizes() {
        let (splitter, host) = attached(1000.0, 4);
        for index in 0..4 {
            let pct = splitter.panel_sizes().get(index).expect("entry");
            assert!((pct - 25.0).abs() < 1e-9);
            assert!((host.extents[index] - 250.0).abs() < 1e-9);
        }
        assert!(!splitter.restored_from_state());
        assert_eq!(splitter.grip_position(), Some(25.0));
    }

    #[test]
    fn pointer_gesture_full_lifecycle() {
        let (mut splitter, mut host) = attached(1000.0, 2);

        let start = splitter.handle(&mut host, down(0, 500.0)).expect("down");
        assert!(matches!(
            start.effect,
            SplitterEffect::ResizeStarted { gutter: 0, .. }
        ));
        assert!(start.from.is_idle());
        assert!(!start.to.is_idle());
        assert!(host.resizing);

        let moved = splitter.handle(&mut host, mv(600.0)).expect("move");
        match moved.effect {
            SplitterEffect::StepApplied { gutter, prev, next } => {
                assert_eq!(gutter, 0);
                assert!((prev - 60.0).abs() < 1e-9);
                assert!((next - 40.0).abs() < 1e-9);
            }
            other => panic!("expected applied step, got {other:?}"),
        }
        assert!((host.extents[0] - 600.0).abs() < 1e-9);

        let end = splitter.handle(&mut host, GutterEvent::PointerUp).expect("up");
        match end.effect {
            SplitterEffect::ResizeEnded { sizes } => {
                assert!((sizes.get(0).expect("entry") - 60.0).abs() < 1e-9);
            }
            other => panic!("expected resize end, got {other:?}"),
        }
        assert!(end.to.is_idle());
        assert!(!host.resizing);
    }

    #[test]
    fn moves_derive_from_gesture_start_not_last_move() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        splitter.handle(&mut host, down(0, 500.0)).expect("down");
        splitter.handle(&mut host, mv(700.0)).expect("move out");
        // Returning to the origin restores the starting split exactly.
        splitter.handle(&mut host, mv(500.0)).expect("move back");
        assert!((splitter.panel_sizes().get(0).expect("entry") - 50.0).abs() < 1e-9);
    }

    #[test]
    fn rejected_step_keeps_vector_but_moves_grip() {
        let mut splitter = Splitter::new(zero_gutter_options().min_sizes([20.0]));
        let mut host = MiniHost::new(1000.0, 2);
        splitter.attach(&mut host).expect("attach");
        splitter.handle(&mut host, down(0, 500.0)).expect("down");
        let moved = splitter.handle(&mut host, mv(100.0)).expect("move");
        assert!(matches!(
            moved.effect,
            SplitterEffect::StepRejected {
                reason: RejectReason::BelowPrevMin { .. },
                ..
            }
        ));
        assert!((splitter.panel_sizes().get(0).expect("entry") - 50.0).abs() < 1e-9);
        assert!((host.extents[0] - 500.0).abs() < 1e-9);
        assert_eq!(splitter.grip_position(), Some(10.0));
    }

    #[test]
    fn gesture_recovers_after_rejection() {
        let mut splitter = Splitter::new(zero_gutter_options().min_sizes([20.0]));
        let mut host = MiniHost::new(1000.0, 2);
        splitter.attach(&mut host).expect("attach");
        splitter.handle(&mut host, down(0, 500.0)).expect("down");
        splitter.handle(&mut host, mv(100.0)).expect("rejected");
        let moved = splitter.handle(&mut host, mv(450.0)).expect("back in bounds");
        assert!(matches!(moved.effect, SplitterEffect::StepApplied { .. }));
        assert!((splitter.panel_sizes().get(0).expect("entry") - 45.0).abs() < 1e-9);
    }

    #[test]
    fn pointer_down_during_session_is_noop() {
        let (mut splitter, mut host) = attached(1000.0, 3);
        splitter.handle(&mut host, down(0, 300.0)).expect("down");
        let second = splitter.handle(&mut host, down(1, 600.0)).expect("down");
        assert_eq!(
            second.effect,
            SplitterEffect::Noop {
                reason: NoopReason::SessionAlreadyActive
            }
        );
    }

    #[test]
    fn release_while_idle_is_noop() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        for event in [GutterEvent::PointerUp, GutterEvent::KeyUp] {
            let transition = splitter.handle(&mut host, event).expect("release");
            assert_eq!(
                transition.effect,
                SplitterEffect::Noop {
                    reason: NoopReason::IdleWithoutActiveSession
                }
            );
        }
    }

    #[test]
    fn move_while_idle_is_noop() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        let transition = splitter.handle(&mut host, mv(400.0)).expect("move");
        assert_eq!(
            transition.effect,
            SplitterEffect::Noop {
                reason: NoopReason::IdleWithoutActiveSession
            }
        );
    }

    #[test]
    fn wrong_axis_key_is_noop() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        let transition = splitter
            .handle(
                &mut host,
                GutterEvent::KeyDown {
                    gutter: 0,
                    key: ResizeKey::ArrowUp,
                    now_ms: 0,
                },
            )
            .expect("keydown");
        assert_eq!(
            transition.effect,
            SplitterEffect::Noop {
                reason: NoopReason::AxisMismatch
            }
        );
        assert!(splitter.next_deadline_ms().is_none());
        assert!(splitter.state().is_idle());
    }

    #[test]
    fn keyboard_repeat_ticks_step_and_recapture() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        splitter
            .handle(
                &mut host,
                GutterEvent::KeyDown {
                    gutter: 0,
                    key: ResizeKey::ArrowRight,
                    now_ms: 100,
                },
            )
            .expect("keydown");
        assert_eq!(splitter.next_deadline_ms(), Some(140));
        assert!(splitter.is_resizing());

        // Not yet due.
        assert!(splitter.poll_repeat(&mut host, 120).expect("poll").is_empty());

        let ticks = splitter.poll_repeat(&mut host, 140).expect("poll");
        assert_eq!(ticks.len(), 2);
        assert!(matches!(ticks[0].effect, SplitterEffect::ResizeStarted { .. }));
        match ticks[1].effect {
            SplitterEffect::StepApplied { prev, next, .. } => {
                assert!((prev - 50.5).abs() < 1e-9);
                assert!((next - 49.5).abs() < 1e-9);
            }
            ref other => panic!("expected applied step, got {other:?}"),
        }
        assert_eq!(splitter.next_deadline_ms(), Some(180));

        let end = splitter.handle(&mut host, GutterEvent::KeyUp).expect("keyup");
        assert!(matches!(end.effect, SplitterEffect::ResizeEnded { .. }));
        assert!(splitter.next_deadline_ms().is_none());
    }

    #[test]
    fn overdue_ticks_drain_in_one_poll() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        splitter
            .handle(
                &mut host,
                GutterEvent::KeyDown {
                    gutter: 0,
                    key: ResizeKey::ArrowRight,
                    now_ms: 0,
                },
            )
            .expect("keydown");
        let ticks = splitter.poll_repeat(&mut host, 120).expect("poll");
        // Deadlines at 40, 80, and 120 are all due: three capture+step pairs.
        assert_eq!(ticks.len(), 6);
        assert_eq!(splitter.next_deadline_ms(), Some(160));
    }

    #[test]
    fn keydown_retargets_active_keyboard_session() {
        let (mut splitter, mut host) = attached(1000.0, 3);
        splitter
            .handle(
                &mut host,
                GutterEvent::KeyDown {
                    gutter: 0,
                    key: ResizeKey::ArrowRight,
                    now_ms: 0,
                },
            )
            .expect("keydown");
        splitter
            .handle(
                &mut host,
                GutterEvent::KeyDown {
                    gutter: 1,
                    key: ResizeKey::ArrowLeft,
                    now_ms: 10,
                },
            )
            .expect("retarget");
        assert_eq!(splitter.next_deadline_ms(), Some(50));
        match splitter.state() {
            SplitterState::Resizing { session } => assert_eq!(session.gutter, 1),
            SplitterState::Idle => panic!("expected active session"),
        }
    }

    #[test]
    fn keydown_during_pointer_session_is_noop() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        splitter.handle(&mut host, down(0, 500.0)).expect("down");
        let transition = splitter
            .handle(
                &mut host,
                GutterEvent::KeyDown {
                    gutter: 0,
                    key: ResizeKey::ArrowRight,
                    now_ms: 0,
                },
            )
            .expect("keydown");
        assert_eq!(
            transition.effect,
            SplitterEffect::Noop {
                reason: NoopReason::SessionAlreadyActive
            }
        );
        assert!(splitter.next_deadline_ms().is_none());
    }

    #[test]
    fn gutter_out_of_range_errors() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        let err = splitter
            .handle(&mut host, down(1, 500.0))
            .expect_err("must fail");
        assert_eq!(
            err,
            SplitterError::GutterOutOfRange {
                gutter: 1,
                panel_count: 2
            }
        );
        assert!(splitter.state().is_idle());
    }

    #[test]
    fn collapsed_container_errors_and_preserves_state() {
        let (mut splitter, mut host) = attached(1000.0, 2);
        host.container = 0.0;
        let err = splitter
            .handle(&mut host, down(0, 0.0))
            .expect_err("must fail");
        assert_eq!(err, SplitterError::DegenerateContainer { extent: 0.0 });
        assert!(splitter.state().is_idle());
        assert!((splitter.panel_sizes().get(0).expect("entry") - 50.0).abs() < 1e-9);
    }

    #[test]
    fn stateful_splitter_without_store_fails_attach() {
        let mut splitter = Splitter::new(zero_gutter_options().state_key("layout"));
        let mut host = MiniHost::new(1000.0, 2);
        let err = splitter.attach(&mut host).expect_err("must fail");
        assert_eq!(
            err,
            SplitterError::Storage(StorageError::Unavailable {
                scope: StateScope::Session
            })
        );
    }

    #[test]
    fn corrupt_persisted_payload_fails_attach() {
        let mut provider = MemoryStorage::new();
        provider
            .storage(StateScope::Session)
            .expect("session store")
            .store("layout", "not json");
        let mut splitter = Splitter::with_storage(
            zero_gutter_options().state_key("layout"),
            Box::new(provider),
        );
        let mut host = MiniHost::new(1000.0, 2);
        let err = splitter.attach(&mut host).expect_err("must fail");
        assert!(matches!(
            err,
            SplitterError::PersistedStateCorrupt { ref key, .. } if key == "layout"
        ));
    }

    #[test]
    fn nested_classification_is_read_at_attach() {
        let mut splitter = Splitter::new(zero_gutter_options());
        let mut host = MiniHost::new(1000.0, 2);
        host.nested = true;
        splitter.attach(&mut host).expect("attach");
        assert!(splitter.is_nested());
    }
}
