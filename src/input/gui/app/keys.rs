use crate::core::view::ViewCommand;
use winit::keyboard::KeyCode;

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    View(ViewCommand),
    ToggleHud,
    Exit,
}

#[must_use]
pub fn key_action(key_code: KeyCode) -> Option<KeyAction> {
    let action = match key_code {
        KeyCode::ArrowLeft => KeyAction::View(ViewCommand::ShadingDown),
        KeyCode::ArrowRight => KeyAction::View(ViewCommand::ShadingUp),
        KeyCode::KeyW => KeyAction::View(ViewCommand::PanUp),
        KeyCode::KeyS => KeyAction::View(ViewCommand::PanDown),
        KeyCode::KeyA => KeyAction::View(ViewCommand::PanLeft),
        KeyCode::KeyD => KeyAction::View(ViewCommand::PanRight),
        KeyCode::ArrowUp => KeyAction::View(ViewCommand::ZoomIn),
        KeyCode::ArrowDown => KeyAction::View(ViewCommand::ZoomOut),
        KeyCode::KeyR => KeyAction::View(ViewCommand::Reset),
        KeyCode::F1 => KeyAction::ToggleHud,
        KeyCode::Escape => KeyAction::Exit,
        _ => return None,
    };

    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_control_shading_and_zoom() {
        assert_eq!(key_action(KeyCode::ArrowLeft), Some(KeyAction::View(ViewCommand::ShadingDown)));
        assert_eq!(key_action(KeyCode::ArrowRight), Some(KeyAction::View(ViewCommand::ShadingUp)));
        assert_eq!(key_action(KeyCode::ArrowUp), Some(KeyAction::View(ViewCommand::ZoomIn)));
        assert_eq!(key_action(KeyCode::ArrowDown), Some(KeyAction::View(ViewCommand::ZoomOut)));
    }

    #[test]
    fn wasd_pans() {
        assert_eq!(key_action(KeyCode::KeyW), Some(KeyAction::View(ViewCommand::PanUp)));
        assert_eq!(key_action(KeyCode::KeyA), Some(KeyAction::View(ViewCommand::PanLeft)));
        assert_eq!(key_action(KeyCode::KeyS), Some(KeyAction::View(ViewCommand::PanDown)));
        assert_eq!(key_action(KeyCode::KeyD), Some(KeyAction::View(ViewCommand::PanRight)));
    }

    #[test]
    fn escape_exits_and_f1_toggles_hud() {
        assert_eq!(key_action(KeyCode::Escape), Some(KeyAction::Exit));
        assert_eq!(key_action(KeyCode::F1), Some(KeyAction::ToggleHud));
        assert_eq!(key_action(KeyCode::KeyR), Some(KeyAction::View(ViewCommand::Reset)));
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        for key_code in [KeyCode::KeyQ, KeyCode::Space, KeyCode::Enter, KeyCode::Digit1] {
            assert_eq!(key_action(key_code), None);
        }
    }
}
