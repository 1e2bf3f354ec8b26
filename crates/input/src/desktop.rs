use glam::Vec2;

use crate::action::Action;
use crate::camera::{CameraRig, PointerButton};

/// Keys with a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    /// The shop hotkey.
    Shop,
    Other,
}

/// Raw window events, in surface pixels with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { button: PointerButton, position: Vec2 },
    PointerUp { button: PointerButton },
    PointerMoved { position: Vec2 },
    PointerLeft,
    /// A press and release without a drag in between.
    Click { position: Vec2 },
    Wheel { delta_y: f32 },
    Key(Key),
    Resized { width: f32, height: f32 },
}

/// Translates desktop input into camera motion and builder actions.
///
/// Pointer motion both pans the camera (while dragging) and re-picks the
/// ground point under the cursor; the builder decides whether the resulting
/// [`Action::CursorMoved`] matters.
#[derive(Debug, Clone)]
pub struct DesktopInput {
    pub camera: CameraRig,
    viewport: Vec2,
    /// Height of the plane the cursor is picked on.
    pick_height: f32,
}

impl DesktopInput {
    pub fn new(camera: CameraRig, viewport: Vec2, pick_height: f32) -> Self {
        let mut camera = camera;
        camera.set_viewport(viewport.x, viewport.y);
        Self {
            camera,
            viewport,
            pick_height,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Handle one event; returns the action it maps to, if any.
    pub fn handle(&mut self, event: InputEvent) -> Option<Action> {
        match event {
            InputEvent::PointerDown { button, position } => {
                self.camera.pointer_down(button, position);
                None
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeft => {
                self.camera.pointer_up();
                None
            }
            InputEvent::PointerMoved { position } => {
                self.camera.pointer_moved(position);
                self.camera
                    .pick_ground(position, self.viewport, self.pick_height)
                    .map(Action::CursorMoved)
            }
            InputEvent::Click { .. } => Some(Action::Confirm),
            InputEvent::Wheel { delta_y } => {
                self.camera.wheel(delta_y);
                tracing::trace!(zoom = self.camera.zoom, "zoom");
                None
            }
            InputEvent::Key(Key::Escape) => Some(Action::Cancel),
            InputEvent::Key(Key::Shop) => Some(Action::ToggleShop),
            InputEvent::Key(Key::Other) => Some(Action::Noop),
            InputEvent::Resized { width, height } => {
                self.viewport = Vec2::new(width, height);
                self.camera.set_viewport(width, height);
                None
            }
        }
    }
}

impl Default for DesktopInput {
    fn default() -> Self {
        Self::new(CameraRig::default(), Vec2::new(1280.0, 720.0), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn center(input: &DesktopInput) -> Vec2 {
        input.viewport() / 2.0
    }

    #[test]
    fn pointer_move_picks_ground_under_cursor() {
        let mut input = DesktopInput::default();
        let position = center(&input);
        let Some(Action::CursorMoved(p)) = input.handle(InputEvent::PointerMoved { position })
        else {
            panic!("expected a cursor action");
        };
        assert!(p.x.abs() < 1e-3 && p.z.abs() < 1e-3, "{p}");
    }

    #[test]
    fn click_confirms_and_escape_cancels() {
        let mut input = DesktopInput::default();
        assert_eq!(
            input.handle(InputEvent::Click {
                position: Vec2::ZERO
            }),
            Some(Action::Confirm)
        );
        assert_eq!(input.handle(InputEvent::Key(Key::Escape)), Some(Action::Cancel));
        assert_eq!(input.handle(InputEvent::Key(Key::Shop)), Some(Action::ToggleShop));
    }

    #[test]
    fn drag_pans_camera() {
        let mut input = DesktopInput::default();
        input.handle(InputEvent::PointerDown {
            button: PointerButton::Middle,
            position: Vec2::new(10.0, 10.0),
        });
        input.handle(InputEvent::PointerMoved {
            position: Vec2::new(60.0, 10.0),
        });
        assert!((input.camera.offset.x + 1.0).abs() < 1e-5);
        input.handle(InputEvent::PointerLeft);
        assert!(!input.camera.is_dragging());
    }

    #[test]
    fn wheel_zooms_without_action() {
        let mut input = DesktopInput::default();
        assert_eq!(input.handle(InputEvent::Wheel { delta_y: 250.0 }), None);
        assert!((input.camera.zoom - 20.0).abs() < 1e-5);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut input = DesktopInput::default();
        input.handle(InputEvent::Resized {
            width: 1000.0,
            height: 500.0,
        });
        assert_eq!(input.camera.aspect, 2.0);
        assert_eq!(input.viewport(), Vec2::new(1000.0, 500.0));
        assert_eq!(input.camera.target(), Vec3::ZERO);
    }
}
