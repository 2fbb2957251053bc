use std::f64::consts::PI;

use crate::cohort::Bounds3;

pub const FRAME_COUNT: usize = 360;
pub const FRAME_INTERVAL_MS: u32 = 33;
pub const DEFAULT_ZOOM: f64 = 10.0;
pub const DEFAULT_MARKER_SIZE: f64 = 150.0;

/// View of a 3D scene. Angles are in degrees, `zoom` is the camera distance.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraState {
    pub elevation: f64,
    pub azimuth: f64,
    pub zoom: f64,
    pub z_shift: f64,
    pub pulse_size: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: -60.0,
            zoom: DEFAULT_ZOOM,
            z_shift: 0.0,
            pulse_size: DEFAULT_MARKER_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Larger is closer to the viewer.
    pub depth: f64,
}

/// Camera of frame `i` along the fly-through path.
pub fn frame_params(i: usize) -> CameraState {
    let t = i as f64;
    let wave = (t / 180.0 * PI).sin();
    CameraState {
        elevation: 20.0 + wave * 10.0,
        azimuth: (i % 360) as f64,
        zoom: 10.0 - 2.0 * wave,
        z_shift: -5.0 + 10.0 * (t / FRAME_COUNT as f64),
        pulse_size: DEFAULT_MARKER_SIZE + 50.0 * (t / 90.0 * PI).sin(),
    }
}

impl CameraState {
    /// Limits shown by this camera: `bounds` with the z window shifted by `z_shift`.
    pub fn view_bounds(&self, bounds: Bounds3) -> Bounds3 {
        let mut shifted = bounds;
        shifted.min[2] += self.z_shift;
        shifted.max[2] += self.z_shift;
        shifted
    }

    /// Orthographic projection of `point` after normalising `bounds` to a unit cube
    /// centred at the origin. The result lies roughly in `[-1, 1]` for default zoom.
    pub fn project(&self, point: [f64; 3], bounds: Bounds3) -> ScreenPoint {
        let view = self.view_bounds(bounds);
        let mut n = [0.0; 3];
        for axis in 0..3 {
            let span = view.max[axis] - view.min[axis];
            n[axis] = if span > 0.0 {
                (point[axis] - view.min[axis]) / span - 0.5
            } else {
                0.0
            };
        }

        let az = self.azimuth.to_radians();
        let el = self.elevation.to_radians();
        let (sin_az, cos_az) = az.sin_cos();
        let (sin_el, cos_el) = el.sin_cos();

        let eye = [cos_el * cos_az, cos_el * sin_az, sin_el];
        let right = [-sin_az, cos_az, 0.0];
        let up = [-sin_el * cos_az, -sin_el * sin_az, cos_el];
        let dot = |v: [f64; 3]| n[0] * v[0] + n[1] * v[1] + n[2] * v[2];

        let scale = DEFAULT_ZOOM / self.zoom.max(f64::EPSILON);
        ScreenPoint {
            x: dot(right) * scale,
            y: dot(up) * scale,
            depth: dot(eye),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn path_starts_level() {
        let c = frame_params(0);
        assert!(close(c.elevation, 20.0));
        assert!(close(c.azimuth, 0.0));
        assert!(close(c.zoom, 10.0));
        assert!(close(c.z_shift, -5.0));
        assert!(close(c.pulse_size, 150.0));
    }

    #[test]
    fn path_peaks_at_quarter_turn() {
        let c = frame_params(90);
        assert!(close(c.elevation, 30.0));
        assert!(close(c.zoom, 8.0));
        assert!(close(c.z_shift, -2.5));
        assert!(close(c.pulse_size, 150.0));
        assert!(close(frame_params(45).pulse_size, 200.0));
    }

    #[test]
    fn path_is_deterministic_and_wraps_azimuth() {
        assert_eq!(frame_params(123), frame_params(123));
        assert!(close(frame_params(359).azimuth, 359.0));
        assert!(close(frame_params(360).azimuth, 0.0));
    }

    #[test]
    fn projection_from_front() {
        let bounds = Bounds3 { min: [0.0; 3], max: [1.0; 3] };
        let camera = CameraState {
            elevation: 0.0,
            azimuth: 0.0,
            zoom: DEFAULT_ZOOM,
            z_shift: 0.0,
            pulse_size: DEFAULT_MARKER_SIZE,
        };
        // looking down the x axis, y maps to screen x and z to screen y
        let p = camera.project([1.0, 1.0, 0.5], bounds);
        assert!(close(p.x, 0.5));
        assert!(close(p.y, 0.0));
        assert!(close(p.depth, 0.5));
    }

    #[test]
    fn z_shift_moves_the_window() {
        let bounds = Bounds3 { min: [0.0; 3], max: [1.0; 3] };
        let camera = CameraState { z_shift: 1.0, ..CameraState::default() };
        let shifted = camera.view_bounds(bounds);
        assert_eq!(shifted.min[2], 1.0);
        assert_eq!(shifted.max[2], 2.0);
    }
}
