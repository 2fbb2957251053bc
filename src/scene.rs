//! Render-independent description of each regression plot.
//!
//! Builders take the cohorts and a [`PlotOptions`], fit every group and
//! return a scene that the egui view and the rasteriser both draw.

use itertools::{izip, Itertools};
use log::{info, warn};

use crate::{
    cohort::{Bounds3, Group2, Group3, Marker, QAngioRecord, Rgb, Style},
    datasets::qangio_color,
    lin_reg::{lin_reg, linspace, LinearRegression},
    nearest::nearest_index,
    plane_fit::{plane_fit, PlaneFit},
    projection::{
        disparity_scale, disparity_scaled_z, stereo_point, velocity_point, DEFAULT_STEREO_K,
        DEPTH_SCALE,
    },
};

const LINE_SAMPLES: usize = 50;
const PLANE_STEPS: usize = 10;
const ARROW_SCALE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Drop observations with a zero or negative coordinate before fitting and drawing.
    pub mask_positive: bool,
    pub show_fits: bool,
    pub show_planes: bool,
    pub show_zeta: bool,
    /// Limit the axes to the first group.
    pub zoom_to_primary: bool,
    pub show_vectors: bool,
    /// Offset `z` by the scaled baseline/follow-up disparity.
    pub stagger_depth: bool,
    pub highlight: Option<f64>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            mask_positive: true,
            show_fits: true,
            show_planes: true,
            show_zeta: true,
            zoom_to_primary: false,
            show_vectors: true,
            stagger_depth: false,
            highlight: Some(crate::datasets::HIGHLIGHT_X),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series2 {
    pub label: String,
    pub style: Style,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitLine2 {
    pub label: String,
    pub color: Rgb,
    pub fit: LinearRegression,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene2d {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series2>,
    pub fits: Vec<FitLine2>,
}

impl Scene2d {
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let points = self.series.iter().flat_map(|s| s.points.iter().copied()).collect_vec();
        let bounds = Bounds3::of_points(points.iter().map(|p| [p[0], p[1], 0.0]))?;
        Some(([bounds.min[0], bounds.min[1]], [bounds.max[0], bounds.max[1]]))
    }
}

/// Scatter of every group with its least squares line over the observed x range.
pub fn fit_and_plot(
    title: &str,
    axes: (&str, &str),
    groups: &[Group2],
    options: &PlotOptions,
) -> Scene2d {
    let mut series = Vec::new();
    let mut fits = Vec::new();
    for group in groups {
        let group = if options.mask_positive {
            group.masked()
        } else {
            group.clone()
        };
        series.push(Series2 {
            label: format!("{} (N={})", group.label, group.len()),
            style: group.style,
            points: group.points(),
        });
        if !options.show_fits {
            continue;
        }
        match lin_reg(&group.xs, &group.ys) {
            Some(fit) => {
                let (min, max) = x_range(&group.xs);
                fits.push(FitLine2 {
                    label: format!(
                        "{} Slope: {:.3}, R²: {:.3}",
                        group.label, fit.slope, fit.r_squared
                    ),
                    color: group.style.color,
                    fit,
                    points: fit.sampled_line(min, max, LINE_SAMPLES),
                })
            }
            None => warn!("not enough valid points to fit {}", group.label),
        }
    }
    Scene2d {
        title: title.to_string(),
        x_label: axes.0.to_string(),
        y_label: axes.1.to_string(),
        series,
        fits,
    }
}

fn x_range(xs: &[f64]) -> (f64, f64) {
    xs.iter()
        .copied()
        .minmax_by(|a, b| a.total_cmp(b))
        .into_option()
        .unwrap_or((0.0, 0.0))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series3 {
    pub label: String,
    pub style: Style,
    pub points: Vec<[f64; 3]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub label: String,
    pub color: Rgb,
    pub fit: PlaneFit,
    pub grid: Vec<Vec<[f64; 3]>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline3 {
    pub label: String,
    pub color: Rgb,
    pub points: Vec<[f64; 3]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow3 {
    pub from: [f64; 3],
    pub delta: [f64; 3],
    pub color: Rgb,
}

impl Arrow3 {
    pub fn tip(&self) -> [f64; 3] {
        [
            self.from[0] + self.delta[0],
            self.from[1] + self.delta[1],
            self.from[2] + self.delta[2],
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub label: String,
    pub point: [f64; 3],
    /// Follow the camera's pulse size instead of a fixed marker.
    pub pulse: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene3d {
    pub title: String,
    pub axis_labels: [String; 3],
    pub series: Vec<Series3>,
    pub surfaces: Vec<Surface>,
    pub lines: Vec<Polyline3>,
    pub arrows: Vec<Arrow3>,
    pub highlight: Option<Highlight>,
    pub annotation: Vec<String>,
    pub bounds: Bounds3,
}

impl Scene3d {
    fn new(title: impl Into<String>, axis_labels: [&str; 3]) -> Self {
        Self {
            title: title.into(),
            axis_labels: axis_labels.map(String::from),
            series: Vec::new(),
            surfaces: Vec::new(),
            lines: Vec::new(),
            arrows: Vec::new(),
            highlight: None,
            annotation: Vec::new(),
            bounds: Bounds3 {
                min: [0.0; 3],
                max: [1.0; 3],
            },
        }
    }

    /// Tightest box around every point, line and surface.
    fn fit_bounds(&mut self) {
        let points = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .chain(self.lines.iter().flat_map(|l| l.points.iter().copied()))
            .chain(self.surfaces.iter().flat_map(|s| s.grid.iter().flatten().copied()))
            .chain(self.arrows.iter().flat_map(|a| [a.from, a.tip()]));
        if let Some(bounds) = Bounds3::of_points(points) {
            self.bounds = bounds;
        }
    }

    fn add_group(&mut self, group: &Group3) {
        self.series.push(Series3 {
            label: group.label.clone(),
            style: group.style,
            points: group.points(),
        });
    }

    fn highlight_nearest(&mut self, group: &Group3, target: f64, search: &[f64], pulse: bool) {
        if let Some(index) = nearest_index(search, target) {
            self.highlight = Some(Highlight {
                label: "Your Point".to_string(),
                point: [group.xs[index], group.ys[index], group.zs[index]],
                pulse,
            });
        }
    }

    fn add_plane(&mut self, group: &Group3, label: &str, grid: (f64, f64, f64, f64), steps: usize) {
        match plane_fit(&group.xs, &group.ys, &group.zs) {
            Some(fit) => {
                self.annotation.push(format!(
                    "{}: z = {:.3} {:+.3}·x {:+.3}·y, R² {:.3}",
                    label, fit.c, fit.a, fit.b, fit.r_squared
                ));
                self.surfaces.push(Surface {
                    label: label.to_string(),
                    color: group.style.color,
                    fit,
                    grid: fit.grid((grid.0, grid.1), (grid.2, grid.3), steps),
                });
            }
            None => warn!("no plane through the {} points of {}", group.len(), group.label),
        }
    }
}

fn xy_extent<'a>(groups: impl IntoIterator<Item = &'a Group3>) -> Option<(f64, f64, f64, f64)> {
    let bounds = groups
        .into_iter()
        .filter_map(Group3::bounds)
        .reduce(Bounds3::union)?;
    Some((bounds.min[0], bounds.max[0], bounds.min[1], bounds.max[1]))
}

fn prepare(group: &Group3, options: &PlotOptions) -> Group3 {
    if options.mask_positive {
        group.masked()
    } else {
        group.clone()
    }
}

/// Ratio cohorts with one regression plane per group over the shared x-y range.
/// The highlight is searched in `groups[highlight_group]`.
pub fn ratio_planes_scene(groups: &[Group3], highlight_group: usize, options: &PlotOptions) -> Scene3d {
    let mut scene = Scene3d::new(
        "3D Scatter of CAC and NCPV Ratios with Group-Specific Regression Planes",
        [
            "ln(CAC0 + 1) / ln(NCPV0 + 1)",
            "ln(CAC0 + 1) / ln(NCPV1 + 1)",
            "ln(CAC1 + 1)",
        ],
    );
    let groups = groups.iter().map(|g| prepare(g, options)).collect_vec();
    for group in &groups {
        scene.add_group(group);
    }
    if let (Some(target), Some(group)) = (options.highlight, groups.get(highlight_group)) {
        scene.highlight_nearest(group, target, &group.xs, false);
    }
    if options.show_planes {
        if let Some(extent) = xy_extent(&groups) {
            for group in &groups {
                scene.add_plane(group, &format!("{} Plane", short_label(&group.label)), extent, PLANE_STEPS);
            }
        }
    }
    scene.fit_bounds();
    scene
}

fn short_label(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or(label)
}

/// The progressing cohort against the reversing one, each with its own plane.
pub fn beta_union_scene(beta: &Group3, zeta: &Group3, options: &PlotOptions) -> Scene3d {
    let zeta = prepare(zeta, options);
    let title = if options.show_zeta {
        format!("β ∪ ζ (N={})", beta.len() + zeta.len())
    } else {
        format!("β (N={})", beta.len())
    };
    let mut scene = Scene3d::new(
        format!("3D Scatter of CAC and NCPV Ratios: {}", title),
        [
            "ln(CAC0 + 1) / ln(NCPV0 + 1)",
            "ln(CAC0 + 1) / ln(NCPV1 + 1)",
            "ln(CAC1 + 1)",
        ],
    );
    // β keeps its zero rows; they anchor the plane at the origin
    scene.add_group(beta);
    if let Some(target) = options.highlight {
        scene.highlight_nearest(beta, target, &beta.xs, false);
    }

    let mut shown = vec![beta];
    if options.show_zeta {
        let mut labelled = zeta.clone();
        labelled.label = format!("ζ (Reversing, N={})", zeta.len());
        scene.add_group(&labelled);
        shown.push(&zeta);
    }
    if options.show_planes {
        if let Some(extent) = xy_extent(shown.iter().copied()) {
            let mut beta_plane = beta.clone();
            beta_plane.style.color = Rgb::GREEN;
            scene.add_plane(&beta_plane, "β Plane", extent, PLANE_STEPS);
            if options.show_zeta {
                scene.add_plane(&zeta, "ζ Plane", extent, PLANE_STEPS);
            }
        }
    }
    scene.fit_bounds();
    if options.zoom_to_primary {
        if let Some(bounds) = beta.bounds() {
            scene.bounds = bounds;
        }
    }
    scene
}

/// Tps0 regressed on each QAngio log ratio, all participants.
pub fn qangio_fits(records: &[QAngioRecord]) -> Option<(LinearRegression, LinearRegression)> {
    let xs = records.iter().map(|r| r.ln_cac0_ratio).collect_vec();
    let ys = records.iter().map(|r| r.ln_cac1_ratio).collect_vec();
    let zs = records.iter().map(|r| r.tps0).collect_vec();
    Some((lin_reg(&xs, &zs)?, lin_reg(&ys, &zs)?))
}

/// Mean of the two single-ratio fits along the diagonal of the data range.
fn trend_line(
    xs: &[f64],
    ys: &[f64],
    fits: (LinearRegression, LinearRegression),
) -> Polyline3 {
    let (min_x, max_x) = x_range(xs);
    let (min_y, max_y) = x_range(ys);
    let points = linspace(min_x, max_x, LINE_SAMPLES)
        .zip(linspace(min_y, max_y, LINE_SAMPLES))
        .map(|(x, y)| [x, y, (fits.0.predict(x) + fits.1.predict(y)) / 2.0])
        .collect();
    Polyline3 {
        label: "trend line".to_string(),
        color: Rgb::LIGHT_BLUE,
        points,
    }
}

fn fit_summary(name: &str, fit: &LinearRegression) -> String {
    format!(
        "{}: Slope {:.4}, y-int {:.4}, R² {:.4}, N {}",
        name, fit.slope, fit.intercept, fit.r_squared, fit.n
    )
}

/// Tps0 against both QAngio log ratios with the fitted plane and CAC change vectors.
pub fn qangio_scene(records: &[QAngioRecord], options: &PlotOptions) -> Scene3d {
    let mut scene = Scene3d::new(
        "3D Regression with CAC Acceleration Vectors",
        [
            "Ln(CAC0 / ΔQangio)",
            "Ln(CAC1 / ΔQangio)",
            if options.stagger_depth {
                "Tps0 + Scaled Disparity"
            } else {
                "Tps0"
            },
        ],
    );
    let xs = records.iter().map(|r| r.ln_cac0_ratio).collect_vec();
    let ys = records.iter().map(|r| r.ln_cac1_ratio).collect_vec();
    let zs = records.iter().map(|r| r.tps0).collect_vec();
    let disparities = records.iter().map(QAngioRecord::disparity).collect_vec();
    let scale = if options.stagger_depth {
        disparity_scale(&zs, &disparities) * 0.5
    } else {
        0.0
    };
    let shown_z = if options.stagger_depth {
        disparity_scaled_z(&zs, &disparities)
    } else {
        zs.clone()
    };

    let cohorts = [
        ("Zeta", Rgb::YELLOW),
        ("Gamma", Rgb::BLUE),
        ("Theta", Rgb::PURPLE),
        ("Eta", Rgb::LIGHT_GREEN),
    ];
    for (name, color) in cohorts {
        let points = izip!(records, &xs, &ys, &shown_z)
            .filter(|(record, ..)| qangio_color(record.id) == color)
            .map(|(_, x, y, z)| [*x, *y, *z])
            .collect_vec();
        if !points.is_empty() {
            scene.series.push(Series3 {
                label: name.to_string(),
                style: Style::new(color, Marker::Circle),
                points,
            });
        }
    }

    if options.show_vectors {
        for (x, y, z, d) in izip!(&xs, &ys, &shown_z, &disparities) {
            scene.arrows.push(Arrow3 {
                from: [*x, *y, *z],
                delta: [*d, *d, d * scale],
                color: Rgb::RED,
            });
        }
    }

    if options.show_fits {
        match qangio_fits(records) {
            Some(fits) => {
                scene.annotation.push(fit_summary("Tps0 vs Ln(Cac0 / ΔQangio)", &fits.0));
                scene.annotation.push(fit_summary("Tps0 vs Ln(Cac1 / ΔQangio)", &fits.1));
                scene.lines.push(trend_line(&xs, &ys, fits));
            }
            None => warn!("QAngio ratios are degenerate, no trend line"),
        }
    }
    if options.show_planes {
        let group = Group3::new(
            "Trend plane",
            Style::new(Rgb::LIGHT_BLUE, Marker::Circle),
            xs.clone(),
            ys.clone(),
            zs.clone(),
        );
        let (min_x, max_x) = x_range(&xs);
        let (min_y, max_y) = x_range(&ys);
        scene.add_plane(&group, "Trend plane", (min_x, max_x, min_y, max_y), 20);
    }
    scene.fit_bounds();
    scene
}

/// Velocity chart: baseline ratio against time point with the disparity as depth.
pub fn velocity_scene(groups: &[Group3], options: &PlotOptions) -> Scene3d {
    let mut scene = Scene3d::new(
        "Cac Velocity Chart with vectors",
        ["Ln(Cac0 / DQangio)", "Ln(Cac1 / DQangio)", "Tps1"],
    );
    for group in groups {
        let mut projected = Vec::with_capacity(group.len());
        for (r0, r1, tps) in izip!(&group.xs, &group.ys, &group.zs) {
            let (point, disparity) = velocity_point(*r0, *r1, *tps);
            if options.show_vectors && disparity != 0.0 {
                scene.arrows.push(Arrow3 {
                    from: point,
                    delta: [disparity * ARROW_SCALE, 0.0, disparity * ARROW_SCALE],
                    color: group.style.color,
                });
            }
            projected.push(point);
        }
        scene.series.push(Series3 {
            label: group.label.clone(),
            style: group.style,
            points: projected,
        });
    }

    if options.show_fits {
        let xs = groups.iter().flat_map(|g| g.xs.iter().copied()).collect_vec();
        let ys = groups.iter().flat_map(|g| g.ys.iter().copied()).collect_vec();
        let zs = groups.iter().flat_map(|g| g.zs.iter().copied()).collect_vec();
        match (lin_reg(&xs, &zs), lin_reg(&ys, &zs)) {
            (Some(first), Some(second)) => {
                scene.annotation.push(fit_summary("Tps0 vs Ln(Cac0 / DQangio)", &first));
                scene.annotation.push(fit_summary("Tps0 vs Ln(Cac1 / DQangio)", &second));
                scene.lines.push(trend_line(&xs, &ys, (first, second)));
            }
            _ => warn!("velocity groups are degenerate, no trend line"),
        }
    }
    scene.fit_bounds();
    scene
}

/// Stereo placement of the ratio cohorts used by the fly-through animation.
/// `highlight_group` is searched by its baseline ratio.
pub fn fly_through_scene(groups: &[Group3], highlight_group: usize, options: &PlotOptions) -> Scene3d {
    let mut scene = Scene3d::new(
        "3D Fly-Through: Plaque Progression (Time-Shifted)",
        [
            "Average Ratio (CAC/NCPV)",
            "ln(CAC1 + 1)",
            "Time Displacement (Disparity x40)",
        ],
    );
    let stereo = groups
        .iter()
        .map(|g| {
            let points = izip!(&g.xs, &g.ys, &g.zs)
                .map(|(r0, r1, z)| stereo_point(*r0, *r1, *z, DEFAULT_STEREO_K))
                .collect_vec();
            Group3::new(
                g.label.clone(),
                g.style,
                points.iter().map(|p| p[0]).collect(),
                points.iter().map(|p| p[1]).collect(),
                points.iter().map(|p| p[2]).collect(),
            )
        })
        .collect_vec();
    for group in &stereo {
        scene.add_group(group);
    }

    if let (Some(target), Some(raw), Some(placed)) = (
        options.highlight,
        groups.get(highlight_group),
        stereo.get(highlight_group),
    ) {
        scene.highlight_nearest(placed, target, &raw.xs, true);
    }

    if options.show_vectors {
        if let (Some(raw), Some(placed)) = (groups.get(highlight_group), stereo.get(highlight_group)) {
            for i in 0..raw.len() {
                if placed.zs[i] != 0.0 && raw.xs[i] != 0.0 && raw.ys[i] != 0.0 {
                    let change = raw.ys[i] - raw.xs[i];
                    scene.arrows.push(Arrow3 {
                        from: [placed.xs[i], placed.ys[i], placed.zs[i]],
                        delta: [change * ARROW_SCALE, 0.0, change * DEPTH_SCALE * ARROW_SCALE],
                        color: raw.style.color,
                    });
                }
            }
        }
    }

    if options.show_fits {
        let pooled = groups
            .iter()
            .map(|g| g.masked())
            .reduce(|mut acc, g| {
                acc.xs.extend(g.xs);
                acc.ys.extend(g.ys);
                acc.zs.extend(g.zs);
                acc
            });
        if let Some(pooled) = pooled {
            for (name, ratios) in [
                ("Ln(CAC₀/NCPV₀) vs Ln(CAC₁)", &pooled.xs),
                ("Ln(CAC₀/NCPV₁) vs Ln(CAC₁)", &pooled.ys),
            ] {
                match lin_reg(ratios, &pooled.zs) {
                    Some(fit) => {
                        scene.annotation.push(name.to_string());
                        scene
                            .annotation
                            .push(format!("Slope: {:.4} | R²: {:.4}", fit.slope, fit.r_squared));
                    }
                    None => warn!("no fit for {}", name),
                }
            }
        }
    }

    scene.fit_bounds();
    scene.bounds = scene.bounds.padded([0.5, 0.5, 5.0]);
    info!(
        "fly-through scene with {} points",
        scene.series.iter().map(|s| s.points.len()).sum::<usize>()
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{
        beta_group, delta_groups, qangio_pairs, qangio_velocity_groups, ratio_groups,
        stereo_groups, zeta_full_group, QANGIO_CAC0_FIT, QANGIO_CAC1_FIT,
    };

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn delta_regressions_use_valid_points_only() {
        let scene = fit_and_plot("delta", ("x", "y"), &delta_groups(), &PlotOptions::default());
        let sizes = scene.series.iter().map(|s| s.points.len()).collect_vec();
        assert_eq!(sizes, vec![21, 17, 8]);
        assert_eq!(scene.fits.len(), 3);
        let theta = &scene.fits[0].fit;
        assert!(close(theta.slope, -0.246565675601774, 1e-9));
        assert!(close(theta.intercept, 2.2755678889216684, 1e-9));
        assert!(close(theta.r_squared, 0.13898739454775744, 1e-9));
        let zeta = &scene.fits[2].fit;
        assert!(close(zeta.slope, 0.6059229161716142, 1e-9));
        assert!(scene.fits[0].label.starts_with("Theta Slope: -0.247, R²: 0.139"));
    }

    #[test]
    fn degenerate_group_is_drawn_without_fit() {
        let groups = vec![Group2::new(
            "lonely",
            Style::new(Rgb::BLUE, Marker::Circle),
            vec![0.0, 1.0, 0.0],
            vec![1.0, 2.0, 0.0],
        )];
        let scene = fit_and_plot("t", ("x", "y"), &groups, &PlotOptions::default());
        assert_eq!(scene.series[0].points, vec![[1.0, 2.0]]);
        assert!(scene.fits.is_empty());
    }

    #[test]
    fn fit_line_spans_observed_range() {
        let scene = fit_and_plot("delta", ("x", "y"), &delta_groups(), &PlotOptions::default());
        let eta = &scene.fits[1];
        assert_eq!(eta.points.len(), LINE_SAMPLES);
        assert!(close(eta.points[0][0], 1.987874348, 1e-12));
        assert!(close(eta.points[LINE_SAMPLES - 1][0], 5.05560866, 1e-12));
    }

    #[test]
    fn ratio_planes_match_published_coefficients() {
        let scene = ratio_planes_scene(&ratio_groups(), 1, &PlotOptions::default());
        assert_eq!(scene.surfaces.len(), 3);
        let zeta = scene.surfaces[0].fit;
        assert!(close(zeta.c, -2.624, 1e-3) && close(zeta.a, 21.614, 1e-3) && close(zeta.b, -15.236, 1e-3));
        let theta = scene.surfaces[1].fit;
        assert!(close(theta.c, 0.788, 1e-3) && close(theta.a, -3.937, 1e-3) && close(theta.b, 8.262, 1e-3));
        let eta = scene.surfaces[2].fit;
        assert!(close(eta.c, 0.790, 1e-3) && close(eta.a, -1.771, 1e-3) && close(eta.b, 6.652, 1e-3));
        let highlight = scene.highlight.unwrap();
        assert!(close(highlight.point[0], 0.7724007307085876, 1e-12));
    }

    #[test]
    fn planes_are_optional() {
        let options = PlotOptions {
            show_planes: false,
            ..PlotOptions::default()
        };
        let scene = ratio_planes_scene(&ratio_groups(), 1, &options);
        assert!(scene.surfaces.is_empty());
        assert_eq!(scene.series.len(), 3);
    }

    #[test]
    fn beta_plane_and_zoom() {
        let options = PlotOptions {
            zoom_to_primary: true,
            ..PlotOptions::default()
        };
        let scene = beta_union_scene(&beta_group(), &zeta_full_group(), &options);
        let beta = scene.surfaces[0].fit;
        assert!(close(beta.c, 0.7396, 1e-4) && close(beta.a, -3.7836, 1e-4) && close(beta.b, 8.5982, 1e-4));
        assert_eq!(scene.series[1].points.len(), 6);
        assert!(scene.title.ends_with("β ∪ ζ (N=46)"));
        assert_eq!(scene.bounds, beta_group().bounds().unwrap());

        let hidden = beta_union_scene(
            &beta_group(),
            &zeta_full_group(),
            &PlotOptions {
                show_zeta: false,
                ..PlotOptions::default()
            },
        );
        assert_eq!(hidden.series.len(), 1);
        assert_eq!(hidden.surfaces.len(), 1);
    }

    #[test]
    fn qangio_trend_reproduces_published_fits() {
        let (first, second) = qangio_fits(&qangio_pairs()).unwrap();
        assert!(close(first.slope, QANGIO_CAC0_FIT.0, 1e-4));
        assert!(close(first.intercept, QANGIO_CAC0_FIT.1, 1e-4));
        assert!(close(first.r_squared, 0.9107, 1e-4));
        assert!(close(second.slope, QANGIO_CAC1_FIT.0, 1e-4));
        assert!(close(second.intercept, QANGIO_CAC1_FIT.1, 1e-4));

        let scene = qangio_scene(&qangio_pairs(), &PlotOptions::default());
        assert_eq!(scene.lines.len(), 1);
        assert_eq!(scene.arrows.len(), 10);
        assert_eq!(scene.series.iter().map(|s| s.points.len()).sum::<usize>(), 10);
        let start = scene.lines[0].points[0];
        assert!(close(start[2], (first.intercept + second.intercept) / 2.0, 1e-12));

        let plane = scene.surfaces[0].fit;
        assert!(close(plane.a, -8.5296, 1e-4));
        assert!(close(plane.b, 11.0422, 1e-4));
        assert!(close(plane.c, -0.1767, 1e-4));
    }

    #[test]
    fn staggered_qangio_depth_uses_scaled_disparity() {
        let records = qangio_pairs();
        let options = PlotOptions {
            stagger_depth: true,
            ..PlotOptions::default()
        };
        let scene = qangio_scene(&records, &options);
        let zs = records.iter().map(|r| r.tps0).collect_vec();
        let disparities = records.iter().map(QAngioRecord::disparity).collect_vec();
        let expected = disparity_scaled_z(&zs, &disparities);
        let mut shown = scene
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p[2]))
            .collect_vec();
        let mut expected_sorted = expected.clone();
        shown.sort_by(f64::total_cmp);
        expected_sorted.sort_by(f64::total_cmp);
        assert_eq!(shown, expected_sorted);
        assert_ne!(expected, zs);
        assert!(scene.axis_labels[2].contains("Disparity"));
    }

    #[test]
    fn velocity_chart_skips_still_points() {
        let scene = velocity_scene(&qangio_velocity_groups(), &PlotOptions::default());
        // zeta and gamma sit at the origin, every other participant moved
        assert_eq!(scene.arrows.len(), 8);
        assert_eq!(scene.series.len(), 4);
        let (first, _) = qangio_fits(&qangio_pairs()).unwrap();
        assert!(scene.annotation[0].contains(&format!("{:.4}", first.slope)));
    }

    #[test]
    fn fly_through_places_highlight_in_theta() {
        let groups = stereo_groups();
        let scene = fly_through_scene(&groups, 1, &PlotOptions::default());
        let highlight = scene.highlight.unwrap();
        let theta = &groups[1];
        let index = 11;
        assert!(close(theta.xs[index], 0.7724007307085876, 1e-12));
        let expected = stereo_point(theta.xs[index], theta.ys[index], theta.zs[index], DEFAULT_STEREO_K);
        assert_eq!(highlight.point, expected);
        assert!(highlight.pulse);
        assert_eq!(scene.annotation.len(), 4);
    }
}
