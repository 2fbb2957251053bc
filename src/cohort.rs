use itertools::{izip, Itertools, MinMaxResult};

use crate::lin_reg::{apply_mask, positive_mask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const LIGHT_GREEN: Rgb = Rgb(144, 238, 144);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const LIGHT_BLUE: Rgb = Rgb(173, 216, 230);
    pub const YELLOW: Rgb = Rgb(255, 215, 0);
    pub const MAGENTA: Rgb = Rgb(255, 0, 255);
    pub const RED: Rgb = Rgb(220, 20, 60);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREY: Rgb = Rgb(150, 150, 150);
}

impl From<Rgb> for egui::Color32 {
    fn from(value: Rgb) -> Self {
        egui::Color32::from_rgb(value.0, value.1, value.2)
    }
}

impl From<Rgb> for image::Rgba<u8> {
    fn from(value: Rgb) -> Self {
        image::Rgba([value.0, value.1, value.2, 255])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Diamond,
    Triangle,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Rgb,
    pub marker: Marker,
}

impl Style {
    pub const fn new(color: Rgb, marker: Marker) -> Self {
        Self { color, marker }
    }
}

/// A named set of paired observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Group2 {
    pub label: String,
    pub style: Style,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Group2 {
    pub fn new(label: impl Into<String>, style: Style, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        assert_eq!(xs.len(), ys.len(), "group columns differ in length");
        Self {
            label: label.into(),
            style,
            xs,
            ys,
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Keeps only the rows where both coordinates are strictly positive.
    pub fn masked(&self) -> Self {
        let mask = positive_mask(&[&self.xs, &self.ys]);
        Self {
            label: self.label.clone(),
            style: self.style,
            xs: apply_mask(&self.xs, &mask),
            ys: apply_mask(&self.ys, &mask),
        }
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs.iter().zip(&self.ys).map(|(x, y)| [*x, *y]).collect()
    }
}

/// A named set of observation triples.
#[derive(Debug, Clone, PartialEq)]
pub struct Group3 {
    pub label: String,
    pub style: Style,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
}

impl Group3 {
    pub fn new(
        label: impl Into<String>,
        style: Style,
        xs: Vec<f64>,
        ys: Vec<f64>,
        zs: Vec<f64>,
    ) -> Self {
        assert_eq!(xs.len(), ys.len(), "group columns differ in length");
        assert_eq!(xs.len(), zs.len(), "group columns differ in length");
        Self {
            label: label.into(),
            style,
            xs,
            ys,
            zs,
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn masked(&self) -> Self {
        let mask = positive_mask(&[&self.xs, &self.ys, &self.zs]);
        Self {
            label: self.label.clone(),
            style: self.style,
            xs: apply_mask(&self.xs, &mask),
            ys: apply_mask(&self.ys, &mask),
            zs: apply_mask(&self.zs, &mask),
        }
    }

    pub fn points(&self) -> Vec<[f64; 3]> {
        izip!(&self.xs, &self.ys, &self.zs)
            .map(|(x, y, z)| [*x, *y, *z])
            .collect()
    }

    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::of_points(self.points())
    }
}

/// Axis aligned box spanning a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds3 {
    pub fn of_points(points: impl IntoIterator<Item = [f64; 3]>) -> Option<Self> {
        let points = points.into_iter().collect_vec();
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for axis in 0..3 {
            match points.iter().map(|p| p[axis]).minmax_by(|a, b| a.total_cmp(b)) {
                MinMaxResult::NoElements => return None,
                MinMaxResult::OneElement(v) => {
                    min[axis] = v;
                    max[axis] = v;
                }
                MinMaxResult::MinMax(lo, hi) => {
                    min[axis] = lo;
                    max[axis] = hi;
                }
            }
        }
        Some(Self { min, max })
    }

    pub fn union(self, other: Self) -> Self {
        let mut out = self;
        for axis in 0..3 {
            out.min[axis] = out.min[axis].min(other.min[axis]);
            out.max[axis] = out.max[axis].max(other.max[axis]);
        }
        out
    }

    pub fn padded(self, pad: [f64; 3]) -> Self {
        let mut out = self;
        for axis in 0..3 {
            out.min[axis] -= pad[axis];
            out.max[axis] += pad[axis];
        }
        out
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.min[0], self.max[0])
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.min[1], self.max[1])
    }
}

/// Baseline and follow-up measurements of one participant, one year apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectRecord {
    pub id: u32,
    pub cac0: f64,
    pub cac1: f64,
    pub ncpv0: f64,
    pub ncpv1: f64,
}

impl SubjectRecord {
    pub const fn new(id: u32, cac0: f64, cac1: f64, ncpv0: f64, ncpv1: f64) -> Self {
        Self {
            id,
            cac0,
            cac1,
            ncpv0,
            ncpv1,
        }
    }
}

/// A published regression slope and its p-value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteratureSlope {
    pub regression: String,
    pub set: String,
    pub slope: f64,
    pub p_value: f64,
}

impl LiteratureSlope {
    pub fn new(regression: &str, set: &str, slope: f64, p_value: f64) -> Self {
        Self {
            regression: regression.to_string(),
            set: set.to_string(),
            slope,
            p_value,
        }
    }
}

/// One participant of the quantitative angiography pair: the two log ratios
/// share the participant's time point score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QAngioRecord {
    pub id: u32,
    pub ln_cac0_ratio: f64,
    pub ln_cac1_ratio: f64,
    pub tps0: f64,
}

impl QAngioRecord {
    /// `ln(CAC1/CAC0)`, the rate of calcium change.
    pub fn disparity(&self) -> f64 {
        self.ln_cac1_ratio - self.ln_cac0_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masking_drops_rows_with_any_zero() {
        let group = Group3::new(
            "g",
            Style::new(Rgb::BLUE, Marker::Circle),
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 2.0],
            vec![1.0, 1.0, 2.0],
        );
        let masked = group.masked();
        assert_eq!(masked.len(), 1);
        assert_eq!(masked.points(), vec![[2.0, 2.0, 2.0]]);
    }

    #[test]
    fn bounds_union() {
        let a = Bounds3::of_points([[0.0, 1.0, 2.0], [1.0, -1.0, 3.0]]).unwrap();
        let b = Bounds3::of_points([[5.0, 0.0, 0.0]]).unwrap();
        let u = a.union(b);
        assert_eq!(u.min, [0.0, -1.0, 0.0]);
        assert_eq!(u.max, [5.0, 1.0, 3.0]);
        assert!(Bounds3::of_points(Vec::new()).is_none());
    }

    #[test]
    #[should_panic]
    fn mismatched_columns_are_rejected() {
        Group2::new(
            "bad",
            Style::new(Rgb::RED, Marker::Square),
            vec![1.0, 2.0],
            vec![1.0],
        );
    }
}
