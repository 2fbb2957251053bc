use itertools::izip;
use nalgebra::{Matrix3, Vector3};

use crate::lin_reg::{linspace, r_squared};

const SINGULAR_TOLERANCE: f64 = 1e-12;

/// `z = a * x + b * y + c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub r_squared: f64,
    pub n: usize,
}

impl PlaneFit {
    pub fn at(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }

    /// Samples the plane on a `steps` x `steps` grid, one row per y value.
    pub fn grid(&self, x_range: (f64, f64), y_range: (f64, f64), steps: usize) -> Vec<Vec<[f64; 3]>> {
        linspace(y_range.0, y_range.1, steps)
            .map(|y| {
                linspace(x_range.0, x_range.1, steps)
                    .map(|x| [x, y, self.at(x, y)])
                    .collect()
            })
            .collect()
    }
}

/// Least squares solution of `[x y 1] . [a b c]^T ~ z` through the normal equations.
///
/// `None` if the normal matrix is singular, which is the case for fewer than
/// three points or points on a single line in the x-y plane.
pub fn plane_fit(xs: &[f64], ys: &[f64], zs: &[f64]) -> Option<PlaneFit> {
    assert_eq!(xs.len(), ys.len());
    assert_eq!(xs.len(), zs.len());
    if xs.len() < 3 {
        return None;
    }

    let mut normal = Matrix3::<f64>::zeros();
    let mut rhs = Vector3::<f64>::zeros();
    for (&x, &y, &z) in izip!(xs, ys, zs) {
        let row = Vector3::new(x, y, 1.0);
        normal += row * row.transpose();
        rhs += row * z;
    }

    // relative to the matrix scale, an exact zero pivot is rarely hit in floating point
    if normal.determinant().abs() <= SINGULAR_TOLERANCE * normal.norm().powi(3) {
        return None;
    }
    let coeffs = normal.lu().solve(&rhs)?;
    if coeffs.iter().any(|c| !c.is_finite()) {
        return None;
    }
    let (a, b, c) = (coeffs[0], coeffs[1], coeffs[2]);
    let predicted: Vec<f64> = xs.iter().zip(ys).map(|(x, y)| a * x + b * y + c).collect();

    Some(PlaneFit {
        a,
        b,
        c,
        r_squared: r_squared(zs, &predicted),
        n: xs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_plane_is_recovered() {
        let xs = [0.0, 1.0, 0.0, 1.0, 2.0];
        let ys = [0.0, 0.0, 1.0, 1.0, 3.0];
        let zs: Vec<f64> = xs.iter().zip(&ys).map(|(x, y)| 2.0 * x - 3.0 * y + 0.5).collect();
        let fit = plane_fit(&xs, &ys, &zs).unwrap();
        assert!((fit.a - 2.0).abs() < 1e-9);
        assert!((fit.b + 3.0).abs() < 1e-9);
        assert!((fit.c - 0.5).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn too_few_or_collinear_points_have_no_plane() {
        assert!(plane_fit(&[1.0], &[1.0], &[1.0]).is_none());
        assert!(plane_fit(&[1.0, 2.0], &[1.0, 2.0], &[1.0, 3.0]).is_none());
        assert!(plane_fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[0.0, 1.0, 5.0]).is_none());
    }

    #[test]
    fn residuals_are_orthogonal_to_the_design() {
        let xs = [0.2, 1.4, 2.1, 3.3, 0.9, 2.8];
        let ys = [1.0, 0.4, 2.2, 1.7, 3.1, 0.3];
        let zs = [1.1, 2.5, 3.9, 4.2, 2.8, 3.0];
        let fit = plane_fit(&xs, &ys, &zs).unwrap();
        let residuals: Vec<f64> = izip!(&xs, &ys, &zs).map(|(x, y, z)| z - fit.at(*x, *y)).collect();
        let dot = |col: &[f64]| -> f64 { col.iter().zip(&residuals).map(|(a, r)| a * r).sum() };
        assert!(dot(&xs).abs() < 1e-9);
        assert!(dot(&ys).abs() < 1e-9);
        assert!(residuals.iter().sum::<f64>().abs() < 1e-9);
    }

    #[test]
    fn grid_covers_both_ranges() {
        let fit = PlaneFit { a: 1.0, b: 1.0, c: 0.0, r_squared: 1.0, n: 3 };
        let grid = fit.grid((0.0, 1.0), (10.0, 20.0), 4);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0].len(), 4);
        assert_eq!(grid[0][0], [0.0, 10.0, 10.0]);
        assert_eq!(grid[3][3], [1.0, 20.0, 21.0]);
    }
}
