use crate::controllers::interactive::data::frame_request::FrameRequest;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::view::{ViewLimits, ViewState};
use crate::input::gui::app::keys::{KeyAction, key_action};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    ViewChanged,
    HudToggled,
    ExitRequested,
}

/// Live view state owned by the event loop thread.
pub struct GuiAppState {
    pub view: ViewState,
    pub limits: ViewLimits,
    pub config: MandelbrotConfig,
    pub hud_visible: bool,
    last_submitted_request: Option<FrameRequest>,
    pub latest_submitted_generation: u64,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self::new(MandelbrotConfig::default(), true)
    }
}

impl GuiAppState {
    #[must_use]
    pub fn new(config: MandelbrotConfig, hud_visible: bool) -> Self {
        Self {
            view: ViewState::default(),
            limits: ViewLimits::default(),
            config,
            hud_visible,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }

    /// Applies a key event. Presses and auto-repeats act; releases do not.
    pub fn handle_key(&mut self, key_code: KeyCode, state: ElementState) -> KeyOutcome {
        if state != ElementState::Pressed {
            return KeyOutcome::Ignored;
        }

        match key_action(key_code) {
            Some(KeyAction::View(command)) => {
                if self.view.apply(command, &self.limits) {
                    KeyOutcome::ViewChanged
                } else {
                    KeyOutcome::Ignored
                }
            }
            Some(KeyAction::ToggleHud) => {
                self.hud_visible = !self.hud_visible;
                KeyOutcome::HudToggled
            }
            Some(KeyAction::Exit) => KeyOutcome::ExitRequested,
            None => KeyOutcome::Ignored,
        }
    }

    #[must_use]
    pub fn build_frame_request(&self, viewport: Viewport) -> FrameRequest {
        FrameRequest::new(viewport, self.view, self.config)
    }

    #[must_use]
    pub fn should_submit(&self, request: &FrameRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last != request)
    }

    pub fn record_submission(&mut self, request: FrameRequest, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    /// Forgets the last submitted request. The framebuffer is cleared on every
    /// resize, so the next redraw must request a frame even for an unchanged
    /// snapshot.
    pub fn invalidate_submission(&mut self) {
        self.last_submitted_request = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut GuiAppState, key_code: KeyCode) -> KeyOutcome {
        state.handle_key(key_code, ElementState::Pressed)
    }

    #[test]
    fn pan_key_moves_view_and_triggers_should_submit() {
        let mut ui_state = GuiAppState::default();
        let viewport = Viewport::new(100, 100);

        let request = ui_state.build_frame_request(viewport);
        ui_state.record_submission(request, 1);
        assert!(!ui_state.should_submit(&ui_state.build_frame_request(viewport)));

        assert_eq!(press(&mut ui_state, KeyCode::KeyD), KeyOutcome::ViewChanged);
        assert!((ui_state.view.offset_x() - -0.4).abs() < 1e-12);
        assert!(ui_state.should_submit(&ui_state.build_frame_request(viewport)));
    }

    #[test]
    fn resize_triggers_should_submit() {
        let mut ui_state = GuiAppState::default();

        ui_state.record_submission(ui_state.build_frame_request(Viewport::new(100, 100)), 1);

        assert!(ui_state.should_submit(&ui_state.build_frame_request(Viewport::new(120, 100))));
    }

    #[test]
    fn restore_after_minimize_resubmits_same_request() {
        let mut ui_state = GuiAppState::default();
        let viewport = Viewport::new(800, 600);

        let before = ui_state.build_frame_request(viewport);
        ui_state.record_submission(before, 1);

        // minimize: the surface goes to 0x0 and nothing is submitted
        ui_state.invalidate_submission();

        // restore
        ui_state.invalidate_submission();
        let after_restore = ui_state.build_frame_request(viewport);

        assert_eq!(after_restore, before);
        assert!(ui_state.should_submit(&after_restore));
    }

    #[test]
    fn resize_to_same_size_resubmits() {
        let mut ui_state = GuiAppState::default();
        let viewport = Viewport::new(640, 480);

        ui_state.record_submission(ui_state.build_frame_request(viewport), 1);
        ui_state.invalidate_submission();

        assert!(ui_state.should_submit(&ui_state.build_frame_request(viewport)));
    }

    #[test]
    fn resize_away_and_back_before_redraw_resubmits() {
        let mut ui_state = GuiAppState::default();
        let a = Viewport::new(800, 600);

        ui_state.record_submission(ui_state.build_frame_request(a), 3);

        // A -> B -> A with no redraw in between
        ui_state.invalidate_submission();
        ui_state.invalidate_submission();

        let request = ui_state.build_frame_request(a);
        assert!(ui_state.should_submit(&request));

        ui_state.record_submission(request, 4);
        assert!(!ui_state.should_submit(&ui_state.build_frame_request(a)));
        assert_eq!(ui_state.latest_submitted_generation, 4);
    }

    #[test]
    fn release_is_ignored() {
        let mut ui_state = GuiAppState::default();

        let outcome = ui_state.handle_key(KeyCode::ArrowUp, ElementState::Released);

        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(ui_state.view, ViewState::default());
    }

    #[test]
    fn repeated_presses_accumulate() {
        let mut ui_state = GuiAppState::default();

        for _ in 0..3 {
            press(&mut ui_state, KeyCode::ArrowUp);
        }

        assert!((ui_state.view.zoom() - 1.331).abs() < 1e-12);
    }

    #[test]
    fn reset_on_initial_view_reports_no_change() {
        let mut ui_state = GuiAppState::default();

        assert_eq!(press(&mut ui_state, KeyCode::KeyR), KeyOutcome::Ignored);

        press(&mut ui_state, KeyCode::KeyW);
        assert_eq!(press(&mut ui_state, KeyCode::KeyR), KeyOutcome::ViewChanged);
        assert_eq!(ui_state.view, ViewState::default());
    }

    #[test]
    fn f1_toggles_hud_without_touching_view() {
        let mut ui_state = GuiAppState::default();

        assert_eq!(press(&mut ui_state, KeyCode::F1), KeyOutcome::HudToggled);
        assert!(!ui_state.hud_visible);
        assert_eq!(press(&mut ui_state, KeyCode::F1), KeyOutcome::HudToggled);
        assert!(ui_state.hud_visible);
        assert_eq!(ui_state.view, ViewState::default());
    }

    #[test]
    fn escape_requests_exit() {
        let mut ui_state = GuiAppState::default();

        assert_eq!(press(&mut ui_state, KeyCode::Escape), KeyOutcome::ExitRequested);
    }

    #[test]
    fn record_submission_updates_generation() {
        let mut ui_state = GuiAppState::default();

        ui_state.record_submission(ui_state.build_frame_request(Viewport::new(2, 2)), 42);

        assert_eq!(ui_state.latest_submitted_generation, 42);
    }
}
