#![forbid(unsafe_code)]

//! Gesture scripting over a splitter + host pair.

use splitrail::{
    GutterEvent, KEY_REPEAT_INTERVAL_MS, Layout, PanelHost, PointerPosition, ResizeKey, Splitter,
    SplitterError, SplitterTransition,
};

/// Pointer position at `coord` along the resize axis of `layout`.
#[must_use]
pub fn position(layout: Layout, coord: f64) -> PointerPosition {
    match layout {
        Layout::Horizontal => PointerPosition::new(coord, 0.0),
        Layout::Vertical => PointerPosition::new(0.0, coord),
    }
}

/// Script a full drag: press on `gutter` at `from_px`, `moves` evenly spaced
/// move events toward `to_px`, then release. Returns every transition in
/// order.
pub fn drag(
    splitter: &mut Splitter,
    host: &mut dyn PanelHost,
    gutter: usize,
    from_px: f64,
    to_px: f64,
    moves: usize,
) -> Result<Vec<SplitterTransition>, SplitterError> {
    let layout = splitter.options().layout;
    let mut transitions = vec![splitter.handle(
        host,
        GutterEvent::PointerDown {
            gutter,
            position: position(layout, from_px),
        },
    )?];
    for step in 1..=moves {
        let t = step as f64 / moves as f64;
        let coord = from_px + (to_px - from_px) * t;
        transitions.push(splitter.handle(
            host,
            GutterEvent::PointerMove {
                position: position(layout, coord),
            },
        )?);
    }
    transitions.push(splitter.handle(host, GutterEvent::PointerUp)?);
    Ok(transitions)
}

/// Script a held arrow key: key-down at `start_ms`, `ticks` repeat polls at
/// the fixed cadence, then key-up. Returns every transition in order.
pub fn hold_key(
    splitter: &mut Splitter,
    host: &mut dyn PanelHost,
    gutter: usize,
    key: ResizeKey,
    ticks: u32,
    start_ms: u64,
) -> Result<Vec<SplitterTransition>, SplitterError> {
    let mut transitions = vec![splitter.handle(
        host,
        GutterEvent::KeyDown {
            gutter,
            key,
            now_ms: start_ms,
        },
    )?];
    for tick in 1..=u64::from(ticks) {
        let now_ms = start_ms + tick * KEY_REPEAT_INTERVAL_MS;
        transitions.extend(splitter.poll_repeat(host, now_ms)?);
    }
    transitions.push(splitter.handle(host, GutterEvent::KeyUp)?);
    Ok(transitions)
}

/// Render transitions as JSONL, one transition per line, with a stable
/// schema for golden-style comparison and CI logs.
#[must_use]
pub fn transcript(transitions: &[SplitterTransition]) -> String {
    transitions
        .iter()
        .map(|transition| {
            serde_json::to_string(transition).expect("transitions have a total JSON encoding")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
