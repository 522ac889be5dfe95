use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(3.5, 1.5, 16.0),
            target: Vec3::new(0.0, 0.3, 0.0),
            up: Vec3::Y,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Compute a world-space ray from window pixel coordinates.
    ///
    /// - `width`, `height`: surface size in physical pixels
    /// - `sx`, `sy`: cursor position in the same pixel space, origin top-left
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_to_world_ray(&self, width: u32, height: u32, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        let ndc_x = (2.0 * sx / w) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / h);
        let inv = self.view_proj(width, height).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }
}
