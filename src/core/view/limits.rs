/// Smallest zoom the view may reach. Keeps the coordinate mapping's divisor non-zero.
pub const MIN_ZOOM: f64 = 1e-12;

/// Step sizes applied by each [`ViewCommand`](crate::core::view::ViewCommand).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    /// Pan distance in complex-plane units at zoom 1; divided by the zoom.
    pub pan_step: f64,
    pub zoom_factor: f64,
    pub shading_step: f64,
    pub min_zoom: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            pan_step: 0.1,
            zoom_factor: 1.1,
            shading_step: 0.1,
            min_zoom: MIN_ZOOM,
        }
    }
}
