#![forbid(unsafe_code)]

//! Scripted panel host backed by flex arithmetic.

use splitrail::{FlexBasis, Layout, PanelHost, PointerPosition};

/// Deterministic one-axis panel host.
///
/// Panels live in a container of fixed pixel extent with `(N - 1)` gutters
/// of fixed thickness between them. A panel with no applied basis takes an
/// equal share of the space left for panels; once bases are applied, each
/// panel gets its basis plus an equal share of the remaining slack
/// (flex-grow). Extents therefore drift slightly from the applied
/// percentages, like real rendered panels.
#[derive(Debug, Clone)]
pub struct GridHost {
    layout: Layout,
    container_px: f64,
    gutter_px: f64,
    bases: Vec<Option<f64>>,
    css: Vec<Option<String>>,
    resizing: bool,
    nested: bool,
}

impl GridHost {
    #[must_use]
    pub fn new(layout: Layout, container_px: f64, panel_count: usize, gutter_px: f64) -> Self {
        Self {
            layout,
            container_px,
            gutter_px,
            bases: vec![None; panel_count],
            css: vec![None; panel_count],
            resizing: false,
            nested: false,
        }
    }

    /// Mark this host as rendered inside another splitter.
    #[must_use]
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Simulate a viewport change (or collapse, with `0.0`).
    pub fn set_container(&mut self, container_px: f64) {
        self.container_px = container_px;
    }

    /// Last applied size expression for panel `index`, as rendered CSS.
    #[must_use]
    pub fn basis_css(&self, index: usize) -> Option<&str> {
        self.css.get(index).and_then(Option::as_deref)
    }

    /// Rendered extents of all panels, in order.
    #[must_use]
    pub fn extents(&self) -> Vec<f64> {
        (0..self.bases.len()).map(|i| self.extent(i)).collect()
    }

    /// Pointer position at `coord` along this host's resize axis.
    #[must_use]
    pub fn pointer(&self, coord: f64) -> PointerPosition {
        match self.layout {
            Layout::Horizontal => PointerPosition::new(coord, 0.0),
            Layout::Vertical => PointerPosition::new(0.0, coord),
        }
    }

    fn panel_space(&self) -> f64 {
        let gutters = self.bases.len().saturating_sub(1) as f64;
        self.container_px - gutters * self.gutter_px
    }

    fn extent(&self, index: usize) -> f64 {
        let count = self.bases.len();
        if count == 0 {
            return 0.0;
        }
        let space = self.panel_space();
        let Some(bases) = self
            .bases
            .iter()
            .copied()
            .collect::<Option<Vec<f64>>>()
        else {
            // No bases applied yet: plain equal flex split.
            return space / count as f64;
        };
        let slack = space - bases.iter().sum::<f64>();
        bases[index] + slack / count as f64
    }
}

impl PanelHost for GridHost {
    fn panel_count(&self) -> usize {
        self.bases.len()
    }

    fn container_extent(&self, _layout: Layout) -> f64 {
        self.container_px
    }

    fn panel_extent(&self, index: usize, _layout: Layout) -> f64 {
        self.extent(index)
    }

    fn apply_basis(&mut self, index: usize, basis: &FlexBasis) {
        self.bases[index] = Some(basis.percent / 100.0 * self.container_px - basis.gutter_offset_px);
        self.css[index] = Some(basis.to_string());
    }

    fn set_resizing(&mut self, resizing: bool) {
        self.resizing = resizing;
    }

    fn nested_in_splitter(&self) -> bool {
        self.nested
    }
}
