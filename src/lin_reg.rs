use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub n: usize,
}

impl LinearRegression {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evenly spaced points of the fitted line over `[min, max]`.
    pub fn sampled_line(&self, min: f64, max: f64, samples: usize) -> Vec<[f64; 2]> {
        linspace(min, max, samples)
            .map(|x| [x, self.predict(x)])
            .collect()
    }
}

/// Ordinary least squares of `ys` on `xs`.
///
/// Returns `None` when fewer than two points are given or all `xs` are equal,
/// since the slope is undefined in both cases.
pub fn lin_reg(xs: &[f64], ys: &[f64]) -> Option<LinearRegression> {
    assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 {
        return None;
    }
    let n = xs.len();
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let dev_xs = xs.iter().map(|x| x - mean_x);
    let dev_ys = ys.iter().map(|y| y - mean_y);

    let x_squared = dev_xs.clone().fold(0.0, |acc, x| acc + x * x);
    if x_squared == 0.0 {
        return None;
    }

    let slope = dev_ys.zip(dev_xs).fold(0.0, |acc, (y, x)| acc + x * y) / x_squared;
    let intercept = mean_y - slope * mean_x;

    let predicted = xs.iter().map(|x| slope * x + intercept).collect_vec();
    Some(LinearRegression {
        slope,
        intercept,
        r_squared: r_squared(ys, &predicted),
        n,
    })
}

/// Coefficient of determination of `predicted` against `observed`.
pub fn r_squared(observed: &[f64], predicted: &[f64]) -> f64 {
    let mean = observed.iter().sum::<f64>() / observed.len() as f64;
    let ss_tot: f64 = observed.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum();
    if ss_tot == 0.0 {
        // a constant response is reproduced exactly by any fit through it
        return 1.0;
    }
    (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
}

/// `true` where every coordinate is strictly positive.
pub fn positive_mask(columns: &[&[f64]]) -> Vec<bool> {
    let len = columns.first().map_or(0, |c| c.len());
    (0..len)
        .map(|i| columns.iter().all(|column| column[i] > 0.0))
        .collect()
}

pub fn apply_mask(values: &[f64], mask: &[bool]) -> Vec<f64> {
    assert_eq!(values.len(), mask.len());
    values
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(value, _)| *value)
        .collect()
}

pub fn linspace(start: f64, stop: f64, samples: usize) -> impl Iterator<Item = f64> + Clone {
    let step = if samples > 1 {
        (stop - start) / (samples - 1) as f64
    } else {
        0.0
    };
    (0..samples).map(move |i| start + step * i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn exact_line_is_recovered() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        let reg = lin_reg(&xs, &ys).unwrap();
        assert!(close(reg.slope, 2.0, 1e-12));
        assert!(close(reg.intercept, 1.0, 1e-12));
        assert!(close(reg.r_squared, 1.0, 1e-12));
        assert_eq!(reg.n, 4);
    }

    #[test]
    fn degenerate_inputs_have_no_fit() {
        assert!(lin_reg(&[], &[]).is_none());
        assert!(lin_reg(&[1.0], &[2.0]).is_none());
        assert!(lin_reg(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn least_squares_beats_perturbed_coefficients() {
        let xs = [0.3, 1.1, 1.9, 2.4, 3.7, 4.2];
        let ys = [1.0, 1.6, 3.1, 2.9, 5.2, 5.0];
        let reg = lin_reg(&xs, &ys).unwrap();
        let sse = |slope: f64, intercept: f64| -> f64 {
            xs.iter()
                .zip(&ys)
                .map(|(x, y)| (y - slope * x - intercept).powi(2))
                .sum()
        };
        let best = sse(reg.slope, reg.intercept);
        for (ds, di) in [(1e-3, 0.0), (-1e-3, 0.0), (0.0, 1e-3), (0.0, -1e-3)] {
            assert!(best < sse(reg.slope + ds, reg.intercept + di));
        }
        assert!((0.0..=1.0).contains(&reg.r_squared));
    }

    #[test]
    fn uncorrelated_data_keeps_r_squared_in_range() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, -1.0, 3.0, -2.0, 2.0];
        let reg = lin_reg(&xs, &ys).unwrap();
        assert!((0.0..=1.0).contains(&reg.r_squared));
    }

    #[test]
    fn mask_drops_non_positive_rows() {
        let xs = [0.0, 1.0, 2.0, -1.0];
        let ys = [1.0, 0.5, 0.0, 3.0];
        let mask = positive_mask(&[&xs, &ys]);
        assert_eq!(mask, vec![false, true, false, false]);
        assert_eq!(apply_mask(&xs, &mask), vec![1.0]);
    }

    #[test]
    fn sampled_line_spans_range() {
        let reg = lin_reg(&[0.0, 1.0], &[0.0, 2.0]).unwrap();
        let line = reg.sampled_line(-1.0, 1.0, 3);
        assert_eq!(line.len(), 3);
        assert!(close(line[0][0], -1.0, 1e-12) && close(line[0][1], -2.0, 1e-12));
        assert!(close(line[2][0], 1.0, 1e-12) && close(line[2][1], 2.0, 1e-12));
    }
}
