/// Index of the value closest to `target`, the first one on ties.
/// NaN values are never chosen.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    values
        .iter()
        .map(|v| (v - target).abs())
        .enumerate()
        .filter(|(_, distance)| !distance.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, distance)| {
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((i, distance)),
            }
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{beta_group, ratio_groups, HIGHLIGHT_X};

    #[test]
    fn picks_minimum_distance() {
        assert_eq!(nearest_index(&[3.0, 1.1, 0.9, 5.0], 1.0), Some(2));
        assert_eq!(nearest_index(&[], 1.0), None);
    }

    #[test]
    fn ties_resolve_to_first_occurrence() {
        assert_eq!(nearest_index(&[0.0, 2.0, 0.0], 1.0), Some(0));
        assert_eq!(nearest_index(&[5.0, 1.5, 0.5], 1.0), Some(1));
    }

    #[test]
    fn nan_is_skipped() {
        assert_eq!(nearest_index(&[0.77, 5.0, f64::NAN], HIGHLIGHT_X), Some(0));
        assert_eq!(nearest_index(&[f64::NAN, 2.0], 0.0), Some(1));
        assert_eq!(nearest_index(&[f64::NAN], 0.0), None);
    }

    #[test]
    fn highlight_tolerates_rounded_target() {
        let theta = &ratio_groups()[1];
        assert_eq!(nearest_index(&theta.xs, HIGHLIGHT_X), Some(5));
        assert!((theta.xs[5] - 0.7724007307085876).abs() < 1e-12);
        assert_eq!(nearest_index(&beta_group().xs, HIGHLIGHT_X), Some(12));
    }
}
