//! Exponential growth between two visits one year apart.

use std::{f64::consts::LN_2, fmt::Display};

use itertools::Itertools;

use crate::cohort::{LiteratureSlope, SubjectRecord};

/// `ln(follow_up / baseline)` per year. Undefined unless both values are positive.
pub fn growth_rate(baseline: f64, follow_up: f64) -> Option<f64> {
    if baseline > 0.0 && follow_up > 0.0 {
        Some((follow_up / baseline).ln())
    } else {
        None
    }
}

/// `ln 2 / rate` in years, only for growth. No growth and decline have no doubling time.
pub fn doubling_time(rate: f64) -> Option<f64> {
    let dt = LN_2 / rate;
    (dt.is_finite() && dt > 0.0).then_some(dt)
}

/// `ln 2 / |slope|`, the time constant of a per-year log slope.
pub fn time_constant(slope: f64) -> f64 {
    let magnitude = slope.abs();
    if magnitude > 0.0 {
        LN_2 / magnitude
    } else {
        f64::INFINITY
    }
}

pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectGrowth {
    pub id: u32,
    pub cac_rate: Option<f64>,
    pub cac_dt: Option<f64>,
    pub ncpv_rate: Option<f64>,
    pub ncpv_dt: Option<f64>,
}

impl SubjectGrowth {
    pub fn new(subject: &SubjectRecord) -> Self {
        let cac_rate = growth_rate(subject.cac0, subject.cac1);
        let ncpv_rate = growth_rate(subject.ncpv0, subject.ncpv1);
        Self {
            id: subject.id,
            cac_rate,
            cac_dt: cac_rate.and_then(doubling_time),
            ncpv_rate,
            ncpv_dt: ncpv_rate.and_then(doubling_time),
        }
    }
}

/// Doubling times of one cohort and their means over the subjects that grew.
#[derive(Debug, Clone, PartialEq)]
pub struct DoublingSummary {
    pub name: String,
    pub rows: Vec<SubjectGrowth>,
    pub cac_mean: Option<f64>,
    pub ncpv_mean: Option<f64>,
}

impl DoublingSummary {
    pub fn new(name: &str, subjects: &[SubjectRecord]) -> Self {
        let rows = subjects.iter().map(SubjectGrowth::new).collect_vec();
        let cac_mean = mean(rows.iter().filter_map(|row| row.cac_dt));
        let ncpv_mean = mean(rows.iter().filter_map(|row| row.ncpv_dt));
        Self {
            name: name.to_string(),
            rows,
            cac_mean,
            ncpv_mean,
        }
    }

    pub fn cac_count(&self) -> usize {
        self.rows.iter().filter(|row| row.cac_dt.is_some()).count()
    }

    pub fn ncpv_count(&self) -> usize {
        self.rows.iter().filter(|row| row.ncpv_dt.is_some()).count()
    }
}

pub fn fmt_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6}", v),
        None => "NaN".to_string(),
    }
}

impl Display for DoublingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CAC Doubling Time Mean: {}", fmt_optional(self.cac_mean))?;
        writeln!(f, "NCPV Doubling Time Mean: {}", fmt_optional(self.ncpv_mean))?;
        writeln!(f)?;
        writeln!(f, "{:>5} {:>12} {:>12}", "Id", "CAC_dt", "NCPV_dt")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>5} {:>12} {:>12}",
                row.id,
                fmt_optional(row.cac_dt),
                fmt_optional(row.ncpv_dt)
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Regime {
    #[serde(rename = "Half-life (regression)")]
    HalfLife,
    #[serde(rename = "Doubling (growth)")]
    Doubling,
}

impl Regime {
    pub fn of_slope(slope: f64) -> Self {
        if slope < 0.0 {
            Regime::HalfLife
        } else {
            Regime::Doubling
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Regime::HalfLife => "Half-life (regression)",
            Regime::Doubling => "Doubling (growth)",
        }
    }
}

impl Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// A published slope with its regime and time constant in years, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeConstantRow {
    pub slope: LiteratureSlope,
    pub regime: Regime,
    pub time_years: f64,
}

impl TimeConstantRow {
    pub fn new(slope: LiteratureSlope) -> Self {
        let regime = Regime::of_slope(slope.slope);
        let time_years = round2(time_constant(slope.slope));
        Self {
            slope,
            regime,
            time_years,
        }
    }
}

pub fn round2(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}

/// Console rendering of the classified slope table.
pub fn format_time_constants(rows: &[TimeConstantRow]) -> String {
    let mut out = format!(
        "{:<28} {:<14} {:>8} {:>12} {:<24} {:>10}\n",
        "Regression", "Set", "Slope", "p_value", "Type", "Time_years"
    );
    for row in rows {
        out += &format!(
            "{:<28} {:<14} {:>8} {:>12} {:<24} {:>10.2}\n",
            row.slope.regression,
            row.slope.set,
            row.slope.slope,
            row.slope.p_value,
            row.regime,
            row.time_years
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::eta_subjects;

    #[test]
    fn first_eta_subject() {
        let subject = eta_subjects()[0];
        let growth = SubjectGrowth::new(&subject);
        let rate = (41.0f64 / 27.0).ln();
        assert!((growth.cac_rate.unwrap() - rate).abs() < 1e-6);
        assert!((growth.cac_dt.unwrap() - LN_2 / rate).abs() < 1e-6);
        assert!((growth.cac_dt.unwrap() - 1.6593).abs() < 1e-4);
    }

    #[test]
    fn zero_baseline_is_excluded_not_zeroed() {
        let subjects = [
            SubjectRecord::new(1, 0.0, 0.0, 1.0, 2.0),
            SubjectRecord::new(2, 6.0, 0.0, 1.0, 2.0),
            SubjectRecord::new(3, 2.0, 0.0, 1.0, 2.0),
        ];
        let summary = DoublingSummary::new("test", &subjects);
        assert_eq!(summary.cac_mean, None);
        assert_eq!(summary.cac_count(), 0);
        assert!((summary.ncpv_mean.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn decline_and_no_change_have_no_doubling_time() {
        assert_eq!(growth_rate(5.0, 5.0), Some(0.0));
        assert_eq!(doubling_time(0.0), None);
        assert_eq!(growth_rate(5.0, 4.0).and_then(doubling_time), None);
        assert_eq!(growth_rate(0.0, 4.0), None);
        assert!((doubling_time(LN_2).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mean_of_eta_cohort() {
        let summary = DoublingSummary::new("Eta", &eta_subjects());
        assert_eq!(summary.cac_count(), 17);
        assert!((summary.cac_mean.unwrap() - 4.493444711526793).abs() < 1e-9);
        assert!((summary.ncpv_mean.unwrap() - 2.94986485737477).abs() < 1e-9);
    }

    #[test]
    fn summary_prints_headline_lines() {
        let summary = DoublingSummary::new("Eta", &eta_subjects()[..1]);
        let text = summary.to_string();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("CAC Doubling Time Mean: 1.659"));
        assert!(lines.next().unwrap().starts_with("NCPV Doubling Time Mean: "));
        assert!(text.contains("62"));
    }

    #[test]
    fn slopes_are_classified_by_sign() {
        let half = TimeConstantRow::new(LiteratureSlope::new("r", "s", -0.0312, 0.5));
        assert_eq!(half.regime, Regime::HalfLife);
        assert_eq!(half.time_years, 22.22);
        let grow = TimeConstantRow::new(LiteratureSlope::new("r", "s", 0.0209, 0.8));
        assert_eq!(grow.regime, Regime::Doubling);
        assert_eq!(grow.time_years, 33.16);
        let flat = TimeConstantRow::new(LiteratureSlope::new("r", "s", 0.0, 1.0));
        assert_eq!(flat.regime, Regime::Doubling);
        assert!(flat.time_years.is_infinite());
    }
}
