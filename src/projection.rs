//! Coordinate transforms that fake depth from the baseline/follow-up disparity.

use nalgebra::{Matrix4, Vector4};

/// Stereo baseline of the projective transform.
pub const STEREO_BASELINE: f64 = 0.5;
/// Depth per unit of disparity in the velocity chart.
pub const DEPTH_SCALE: f64 = 40.0;
/// Depth per unit of disparity in the fly-through.
pub const DEFAULT_STEREO_K: f64 = 60.0;

fn projection_matrix(baseline: f64) -> Matrix4<f64> {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, -1.0 / baseline, 1.0,
    )
}

/// Applies the fixed projective transform to `point` and pushes its depth by
/// `disparity * scale`.
///
/// The spatial part of the transformed vector is used as is, without dividing
/// by `w`, so points on the baseline plane stay finite.
pub fn project(point: [f64; 3], disparity: f64, scale: f64) -> [f64; 3] {
    let homogeneous = Vector4::new(point[0], point[1], point[2], 1.0);
    let projected = projection_matrix(STEREO_BASELINE) * homogeneous;
    [projected[0], projected[1], projected[2] + disparity * scale]
}

/// Places a baseline/follow-up ratio pair in the velocity chart: the
/// baseline ratio on x, `height` on y and the disparity as depth.
pub fn velocity_point(ratio0: f64, ratio1: f64, height: f64) -> ([f64; 3], f64) {
    let disparity = ratio0 - ratio1;
    (project([ratio0, height, 0.0], disparity, DEPTH_SCALE), disparity)
}

/// `((r0 + r1) / 2, ln_cac1, k * (r0 - r1))`
pub fn stereo_point(ratio0: f64, ratio1: f64, ln_cac1: f64, k: f64) -> [f64; 3] {
    [(ratio0 + ratio1) / 2.0, ln_cac1, k * (ratio0 - ratio1)]
}

/// Shifts each `z` by its disparity, scaled so the largest disparity spans
/// half the `z` range.
pub fn disparity_scaled_z(zs: &[f64], disparities: &[f64]) -> Vec<f64> {
    assert_eq!(zs.len(), disparities.len());
    let scale = disparity_scale(zs, disparities);
    zs.iter()
        .zip(disparities)
        .map(|(z, d)| z + d * scale * 0.5)
        .collect()
}

pub fn disparity_scale(zs: &[f64], disparities: &[f64]) -> f64 {
    let max_disparity = disparities.iter().fold(0.0f64, |acc, d| acc.max(d.abs()));
    let max_z = zs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max_disparity != 0.0 && max_z.is_finite() {
        max_z / max_disparity
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_points_keep_their_position() {
        let p = project([1.5, 4.0, 0.0], 0.0, DEPTH_SCALE);
        assert_eq!(p, [1.5, 4.0, 0.0]);
    }

    #[test]
    fn points_off_the_plane_stay_finite() {
        assert_eq!(project([1.0, 1.0, STEREO_BASELINE], 0.0, 1.0), [1.0, 1.0, 0.5]);
        assert_eq!(project([1.0, 2.0, 3.0], 0.25, DEPTH_SCALE), [1.0, 2.0, 13.0]);
    }

    #[test]
    fn depth_follows_disparity() {
        let (p, disparity) = velocity_point(1.3941995406270038, 1.495219942942213, 4.0);
        assert!((disparity + 0.1010204023152092).abs() < 1e-12);
        assert!((p[2] - disparity * 40.0).abs() < 1e-12);
        assert_eq!(p[0], 1.3941995406270038);
        assert_eq!(p[1], 4.0);
    }

    #[test]
    fn stereo_point_averages_ratios() {
        let p = stereo_point(1.0, 0.5, 3.0, DEFAULT_STEREO_K);
        assert_eq!(p, [0.75, 3.0, 30.0]);
    }

    #[test]
    fn zero_disparity_leaves_z_alone() {
        assert_eq!(disparity_scaled_z(&[1.0, 2.0], &[0.0, 0.0]), vec![1.0, 2.0]);
        let z = disparity_scaled_z(&[0.0, 10.0], &[0.5, -1.0]);
        assert_eq!(z, vec![2.5, 5.0]);
    }
}
