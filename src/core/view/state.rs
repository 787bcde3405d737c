use crate::core::view::controls::ViewCommand;
use crate::core::view::limits::{MIN_ZOOM, ViewLimits};

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_OFFSET_X: f64 = -0.5;
pub const DEFAULT_OFFSET_Y: f64 = 0.0;
pub const DEFAULT_SHADING_INTENSITY: f64 = 1.0;

/// Camera and shading parameters for one frame.
///
/// Each render request holds its own copy, so every pixel of a frame sees
/// the same values while input keeps mutating the live state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    shading_intensity: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            shading_intensity: DEFAULT_SHADING_INTENSITY,
        }
    }
}

fn sanitise_zoom(zoom: f64, min_zoom: f64) -> f64 {
    if zoom.is_nan() || zoom < min_zoom {
        min_zoom
    } else if zoom.is_infinite() {
        f64::MAX
    } else {
        zoom
    }
}

impl ViewState {
    /// Builds a view, clamping `zoom` to [`MIN_ZOOM`].
    #[must_use]
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64, shading_intensity: f64) -> Self {
        Self {
            zoom: sanitise_zoom(zoom, MIN_ZOOM),
            offset_x,
            offset_y,
            shading_intensity,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn shading_intensity(&self) -> f64 {
        self.shading_intensity
    }

    /// Applies one command. Returns `true` when the view changed.
    pub fn apply(&mut self, command: ViewCommand, limits: &ViewLimits) -> bool {
        let before = *self;
        let pan = limits.pan_step / self.zoom;

        match command {
            ViewCommand::ShadingDown => self.shading_intensity -= limits.shading_step,
            ViewCommand::ShadingUp => self.shading_intensity += limits.shading_step,
            ViewCommand::PanUp => self.offset_y -= pan,
            ViewCommand::PanDown => self.offset_y += pan,
            ViewCommand::PanLeft => self.offset_x -= pan,
            ViewCommand::PanRight => self.offset_x += pan,
            ViewCommand::ZoomIn => self.zoom *= limits.zoom_factor,
            ViewCommand::ZoomOut => self.zoom /= limits.zoom_factor,
            ViewCommand::Reset => *self = Self::default(),
        }

        self.zoom = sanitise_zoom(self.zoom, limits.min_zoom);

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut ViewState, command: ViewCommand) -> bool {
        state.apply(command, &ViewLimits::default())
    }

    #[test]
    fn default_centres_main_body_of_set() {
        let state = ViewState::default();

        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.offset_x(), -0.5);
        assert_eq!(state.offset_y(), 0.0);
        assert_eq!(state.shading_intensity(), 1.0);
    }

    #[test]
    fn shading_commands_step_by_a_tenth() {
        let mut state = ViewState::default();

        apply(&mut state, ViewCommand::ShadingUp);
        assert!((state.shading_intensity() - 1.1).abs() < 1e-12);

        apply(&mut state, ViewCommand::ShadingDown);
        apply(&mut state, ViewCommand::ShadingDown);
        assert!((state.shading_intensity() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn shading_may_go_non_positive() {
        let mut state = ViewState::default();

        for _ in 0..15 {
            apply(&mut state, ViewCommand::ShadingDown);
        }

        assert!(state.shading_intensity() < 0.0);
    }

    #[test]
    fn pan_commands_scale_with_inverse_zoom() {
        let mut state = ViewState::new(2.0, 0.0, 0.0, 1.0);

        apply(&mut state, ViewCommand::PanRight);
        assert_eq!(state.offset_x(), 0.05);

        apply(&mut state, ViewCommand::PanLeft);
        apply(&mut state, ViewCommand::PanLeft);
        assert_eq!(state.offset_x(), -0.05);

        apply(&mut state, ViewCommand::PanDown);
        assert_eq!(state.offset_y(), 0.05);

        apply(&mut state, ViewCommand::PanUp);
        apply(&mut state, ViewCommand::PanUp);
        assert_eq!(state.offset_y(), -0.05);
    }

    #[test]
    fn pan_does_not_touch_zoom_or_shading() {
        let mut state = ViewState::default();

        apply(&mut state, ViewCommand::PanUp);
        apply(&mut state, ViewCommand::PanLeft);

        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.shading_intensity(), 1.0);
    }

    #[test]
    fn zoom_in_multiplies_by_factor() {
        let mut state = ViewState::default();

        apply(&mut state, ViewCommand::ZoomIn);

        assert_eq!(state.zoom(), 1.1);
    }

    #[test]
    fn zoom_out_then_in_round_trips() {
        let mut state = ViewState::default();

        apply(&mut state, ViewCommand::ZoomOut);
        apply(&mut state, ViewCommand::ZoomIn);

        assert!((state.zoom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_zoom_out_is_clamped_to_floor() {
        let mut state = ViewState::default();

        for _ in 0..10_000 {
            apply(&mut state, ViewCommand::ZoomOut);
        }

        assert_eq!(state.zoom(), MIN_ZOOM);
        assert!(state.zoom() > 0.0);
    }

    #[test]
    fn zoom_out_at_floor_reports_no_change() {
        let mut state = ViewState::new(MIN_ZOOM, 0.0, 0.0, 1.0);

        assert!(!apply(&mut state, ViewCommand::ZoomOut));
        assert_eq!(state.zoom(), MIN_ZOOM);
    }

    #[test]
    fn new_clamps_invalid_zoom() {
        assert_eq!(ViewState::new(0.0, 0.0, 0.0, 1.0).zoom(), MIN_ZOOM);
        assert_eq!(ViewState::new(-3.0, 0.0, 0.0, 1.0).zoom(), MIN_ZOOM);
        assert_eq!(ViewState::new(f64::NAN, 0.0, 0.0, 1.0).zoom(), MIN_ZOOM);
        assert_eq!(ViewState::new(f64::INFINITY, 0.0, 0.0, 1.0).zoom(), f64::MAX);
        assert_eq!(ViewState::new(4.0, 0.0, 0.0, 1.0).zoom(), 4.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = ViewState::new(8.0, 1.0, 1.0, -2.0);

        assert!(apply(&mut state, ViewCommand::Reset));
        assert_eq!(state, ViewState::default());
        assert!(!apply(&mut state, ViewCommand::Reset));
    }

    #[test]
    fn apply_reports_change() {
        let mut state = ViewState::default();

        assert!(apply(&mut state, ViewCommand::ZoomIn));
        assert!(apply(&mut state, ViewCommand::ShadingUp));
    }
}
