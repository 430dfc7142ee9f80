//! Filter and zoom state for the chart panel.
//!
//! The zoom conversion and mode/sigma coupling live here rather than in
//! components, so the rules are testable with plain input/output pairs.

/// Chart presentation mode. Monthly and Annual are mutually exclusive
/// views of the same underlying temperature series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VizMode {
    Monthly,
    #[default]
    Annual,
}

impl VizMode {
    pub fn toggled(self) -> Self {
        match self {
            VizMode::Monthly => VizMode::Annual,
            VizMode::Annual => VizMode::Monthly,
        }
    }
}

/// Inclusive `[from, to]` year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Inline validation message for the year range picker, `None` when
    /// the range is usable.
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.from < 0 || self.to < 0 {
            Some("Years must be non-negative")
        } else if self.from > self.to {
            Some("'From' year must not be after 'To' year")
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error().is_none()
    }

    /// Number of years covered.
    pub fn span(&self) -> i32 {
        self.to - self.from + 1
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.from && year <= self.to
    }

    /// Intersect with `bounds`, pinning to the nearest edge when disjoint.
    pub fn clamp_to(&self, bounds: YearRange) -> YearRange {
        YearRange {
            from: self.from.clamp(bounds.from, bounds.to),
            to: self.to.clamp(bounds.from, bounds.to),
        }
    }
}

/// A `(center year, window size)` zoom selection over the active range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomWindow {
    pub center: i32,
    /// Window width in years, at least 1.
    pub window: u32,
}

impl ZoomWindow {
    pub fn new(center: i32, window: u32) -> Self {
        Self { center, window }
    }

    /// Convert to a `[from, to]` range clamped into `bounds`.
    ///
    /// The window is centered on `center` and shifted (not shrunk) when it
    /// overhangs an edge; a window at least as wide as the bounds degrades
    /// to the full bounds.
    pub fn to_range(&self, bounds: YearRange) -> YearRange {
        let window = self.window.max(1) as i32;
        if window >= bounds.span() {
            return bounds;
        }
        let mut from = self.center - window / 2;
        let mut to = from + window - 1;
        if from < bounds.from {
            to += bounds.from - from;
            from = bounds.from;
        }
        if to > bounds.to {
            from -= to - bounds.to;
            to = bounds.to;
        }
        YearRange { from, to }
    }
}

/// Filter state for the dashboard: mode, year range, sigma overlay, zoom.
///
/// Invariant: the sigma overlay is never on in Monthly mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub mode: VizMode,
    pub range: YearRange,
    pub show_sigma: bool,
    pub zoom: Option<ZoomWindow>,
}

impl FilterState {
    pub fn new(range: YearRange) -> Self {
        Self {
            mode: VizMode::default(),
            range,
            show_sigma: false,
            zoom: None,
        }
    }

    /// Switch presentation mode. Entering Monthly forcibly disables the
    /// sigma overlay.
    pub fn set_mode(&mut self, mode: VizMode) {
        self.mode = mode;
        if mode == VizMode::Monthly {
            self.show_sigma = false;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Set the sigma overlay flag. A no-op in Monthly mode, where the
    /// overlay has no meaning.
    pub fn set_show_sigma(&mut self, show: bool) {
        if self.mode == VizMode::Annual {
            self.show_sigma = show;
        }
    }

    pub fn toggle_sigma(&mut self) {
        self.set_show_sigma(!self.show_sigma);
    }

    /// The range actually used for data requests: the zoom window applied
    /// within the filter range, or the filter range itself.
    pub fn effective_range(&self) -> YearRange {
        match self.zoom {
            Some(zoom) => zoom.to_range(self.range),
            None => self.range,
        }
    }

    /// Reset range and zoom to the dataset bounds.
    pub fn reset(&mut self, bounds: YearRange) {
        self.range = bounds;
        self.zoom = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: YearRange = YearRange { from: 1900, to: 1999 };

    #[test]
    fn year_range_validation() {
        assert!(YearRange::new(1900, 1950).is_valid());
        assert!(YearRange::new(1950, 1950).is_valid());
        assert_eq!(
            YearRange::new(1960, 1950).validation_error(),
            Some("'From' year must not be after 'To' year")
        );
        assert_eq!(
            YearRange::new(-1, 1950).validation_error(),
            Some("Years must be non-negative")
        );
    }

    #[test]
    fn clamp_to_intersects_with_bounds() {
        assert_eq!(
            YearRange::new(1850, 2050).clamp_to(BOUNDS),
            YearRange::new(1900, 1999)
        );
        assert_eq!(
            YearRange::new(1800, 1810).clamp_to(BOUNDS),
            YearRange::new(1900, 1900)
        );
    }

    #[test]
    fn zoom_centers_on_year() {
        let range = ZoomWindow::new(1950, 20).to_range(BOUNDS);
        assert_eq!(range, YearRange::new(1940, 1959));
        assert_eq!(range.span(), 20);
    }

    #[test]
    fn zoom_odd_window_keeps_width() {
        let range = ZoomWindow::new(1950, 11).to_range(BOUNDS);
        assert_eq!(range.span(), 11);
        assert!(range.contains(1950));
    }

    #[test]
    fn zoom_shifts_at_low_edge() {
        let range = ZoomWindow::new(1902, 20).to_range(BOUNDS);
        assert_eq!(range, YearRange::new(1900, 1919));
    }

    #[test]
    fn zoom_shifts_at_high_edge() {
        let range = ZoomWindow::new(1998, 20).to_range(BOUNDS);
        assert_eq!(range, YearRange::new(1980, 1999));
    }

    #[test]
    fn oversized_zoom_degrades_to_bounds() {
        assert_eq!(ZoomWindow::new(1950, 500).to_range(BOUNDS), BOUNDS);
        assert_eq!(ZoomWindow::new(1950, 100).to_range(BOUNDS), BOUNDS);
    }

    #[test]
    fn zero_window_is_treated_as_one_year() {
        let range = ZoomWindow::new(1950, 0).to_range(BOUNDS);
        assert_eq!(range.span(), 1);
        assert_eq!(range.from, 1950);
    }

    #[test]
    fn monthly_mode_disables_sigma() {
        let mut filters = FilterState::new(BOUNDS);
        filters.set_show_sigma(true);
        assert!(filters.show_sigma);
        filters.set_mode(VizMode::Monthly);
        assert!(!filters.show_sigma);
    }

    #[test]
    fn sigma_cannot_be_enabled_in_monthly() {
        let mut filters = FilterState::new(BOUNDS);
        filters.set_mode(VizMode::Monthly);
        filters.set_show_sigma(true);
        assert!(!filters.show_sigma);
        filters.toggle_sigma();
        assert!(!filters.show_sigma);
    }

    #[test]
    fn sigma_survives_switch_back_to_annual_as_off() {
        let mut filters = FilterState::new(BOUNDS);
        filters.set_show_sigma(true);
        filters.toggle_mode(); // -> Monthly, sigma forced off
        filters.toggle_mode(); // -> Annual
        assert_eq!(filters.mode, VizMode::Annual);
        assert!(!filters.show_sigma);
    }

    #[test]
    fn effective_range_applies_zoom_within_filter_range() {
        let mut filters = FilterState::new(BOUNDS);
        filters.range = YearRange::new(1920, 1980);
        filters.zoom = Some(ZoomWindow::new(1925, 30));
        assert_eq!(filters.effective_range(), YearRange::new(1920, 1949));
    }

    #[test]
    fn reset_restores_bounds_and_clears_zoom() {
        let mut filters = FilterState::new(BOUNDS);
        filters.range = YearRange::new(1950, 1960);
        filters.zoom = Some(ZoomWindow::new(1955, 5));
        filters.reset(BOUNDS);
        assert_eq!(filters.range, BOUNDS);
        assert_eq!(filters.zoom, None);
        assert_eq!(filters.effective_range(), BOUNDS);
    }
}
