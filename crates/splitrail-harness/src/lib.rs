#![forbid(unsafe_code)]

//! Deterministic fixtures for exercising splitrail without a UI.
//!
//! [`GridHost`] is a scripted [`splitrail::PanelHost`] that performs real
//! flex arithmetic — applied bases under-allocate by the gutter share and
//! the slack is grown back evenly, the way a flex container lays the panels
//! out — so captured percentages behave like on-screen measurements rather
//! than echoes of the size vector. The [`driver`] module scripts whole
//! gestures (linear drags, held keys on a simulated clock), collects the
//! resulting transitions, and can render them as stable-schema JSONL for
//! golden-style comparison.

pub mod driver;
pub mod host;

pub use host::GridHost;
