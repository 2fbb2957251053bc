use plaqueplot::{
    camera::{frame_params, CameraState},
    datasets,
    growth::{format_time_constants, DoublingSummary, Regime, TimeConstantRow},
    raster::{render_scene3d, save_scene2d, DEFAULT_SIZE},
    scene::{fit_and_plot, fly_through_scene, qangio_fits, PlotOptions},
};

fn temp_file(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("plaqueplot_it_{}_{}", std::process::id(), name))
}

#[test]
fn every_cohort_has_a_summary() {
    for (name, subjects) in datasets::doubling_cohorts() {
        let summary = DoublingSummary::new(name, &subjects);
        assert_eq!(summary.rows.len(), subjects.len());
        assert!(summary.cac_count() <= subjects.len());
        if let Some(mean) = summary.cac_mean {
            assert!(mean.is_finite() && mean > 0.0, "{}", name);
        }
        assert!(summary.to_string().starts_with("CAC Doubling Time Mean: "));
    }
}

#[test]
fn literature_table_has_both_regimes() {
    let rows: Vec<TimeConstantRow> = datasets::literature_slopes()
        .into_iter()
        .map(TimeConstantRow::new)
        .collect();
    assert!(rows.iter().any(|row| row.regime == Regime::HalfLife));
    assert!(rows.iter().any(|row| row.regime == Regime::Doubling));
    let text = format_time_constants(&rows);
    assert_eq!(text.lines().count(), rows.len() + 1);
    assert!(text.contains("Half-life (regression)"));
}

#[test]
fn qangio_fits_are_stable() {
    let (first, second) = qangio_fits(&datasets::qangio_pairs()).unwrap();
    let (slope0, intercept0) = datasets::QANGIO_CAC0_FIT;
    let (slope1, intercept1) = datasets::QANGIO_CAC1_FIT;
    assert!((first.slope - slope0).abs() < 1e-4);
    assert!((first.intercept - intercept0).abs() < 1e-4);
    assert!((second.slope - slope1).abs() < 1e-4);
    assert!((second.intercept - intercept1).abs() < 1e-4);
    assert_eq!((first.n, second.n), (10, 10));
}

#[test]
fn delta_scene_saves_as_png() {
    let scene = fit_and_plot(
        "Combined Delta Regressions: Zeta, Theta, Eta",
        ("ln(ΔNCPV + 1)", "ln(ΔCAC + 1)"),
        &datasets::delta_groups(),
        &PlotOptions::default(),
    );
    let path = temp_file("delta.png");
    save_scene2d(&scene, &path).unwrap();
    let image = image::open(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!((image.width(), image.height()), DEFAULT_SIZE);
}

#[test]
fn fly_through_frames_move() {
    let scene = fly_through_scene(&datasets::stereo_groups(), 1, &PlotOptions::default());
    let first = render_scene3d(&scene, &frame_params(0), (120, 96));
    let later = render_scene3d(&scene, &frame_params(90), (120, 96));
    assert_ne!(first, later);
    let still = render_scene3d(&scene, &CameraState::default(), (120, 96));
    assert_eq!(still, render_scene3d(&scene, &CameraState::default(), (120, 96)));
}
