use glam::{Mat4, Vec2, Vec3};
use isle_common::WorldPosition;
use isle_spatial::Ray;

/// Mouse buttons the camera cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Top-down orbit camera: a fixed elevation angle looking at a panned target,
/// with the distance controlled by a clamped zoom.
///
/// Camera motion is presentation state; it never touches the island.
#[derive(Debug, Clone)]
pub struct CameraRig {
    /// Pan offset of the look-at target from the world center (y stays 0).
    pub offset: Vec3,
    /// Distance from the target along the view direction.
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Angle above the horizon, in radians.
    pub elevation: f32,
    /// World units per pixel of drag.
    pub pan_speed: f32,
    /// Zoom units per wheel delta unit.
    pub zoom_speed: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    drag_anchor: Option<Vec2>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            zoom: 15.0,
            min_zoom: 8.0,
            max_zoom: 50.0,
            elevation: std::f32::consts::PI * 0.3,
            pan_speed: 0.02,
            zoom_speed: 0.02,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            drag_anchor: None,
        }
    }
}

impl CameraRig {
    pub fn target(&self) -> Vec3 {
        self.offset
    }

    pub fn eye(&self) -> Vec3 {
        let t = self.target();
        Vec3::new(
            t.x,
            self.elevation.sin() * self.zoom,
            t.z + self.elevation.cos() * self.zoom,
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Start a pan drag. Only the primary and middle buttons pan.
    pub fn pointer_down(&mut self, button: PointerButton, position: Vec2) -> bool {
        match button {
            PointerButton::Primary | PointerButton::Middle => {
                self.drag_anchor = Some(position);
                true
            }
            PointerButton::Secondary => false,
        }
    }

    /// Pan by the pointer delta while dragging. Dragging right moves the view
    /// right, so the target moves left.
    pub fn pointer_moved(&mut self, position: Vec2) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        let delta = position - anchor;
        self.offset.x -= delta.x * self.pan_speed;
        self.offset.z -= delta.y * self.pan_speed;
        self.drag_anchor = Some(position);
    }

    /// End a drag (button released or pointer left the window).
    pub fn pointer_up(&mut self) {
        self.drag_anchor = None;
    }

    /// Wheel zoom; positive deltas move away.
    pub fn wheel(&mut self, delta_y: f32) {
        self.zoom = (self.zoom + delta_y * self.zoom_speed).clamp(self.min_zoom, self.max_zoom);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn forward(&self) -> Vec3 {
        (self.target() - self.eye()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Ray from the eye through a point in normalized device coordinates
    /// (`-1..1`, y up).
    pub fn screen_ray(&self, ndc: Vec2) -> Ray {
        let half_height = (self.fov / 2.0).tan();
        let half_width = half_height * self.aspect;
        let direction = self.forward()
            + self.right() * (ndc.x * half_width)
            + self.up() * (ndc.y * half_height);
        Ray::new(self.eye(), direction)
    }

    /// Ground position under a pixel of a `viewport`-sized surface, on the
    /// plane `y = height`.
    pub fn pick_ground(&self, pixel: Vec2, viewport: Vec2, height: f32) -> Option<WorldPosition> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let ndc = Vec2::new(
            pixel.x / viewport.x * 2.0 - 1.0,
            -(pixel.y / viewport.y) * 2.0 + 1.0,
        );
        self.screen_ray(ndc).intersect_ground(height)
    }
}
