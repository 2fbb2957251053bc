use egui::{
    plot::{Arrows, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text},
    Color32, Context, Slider, Ui,
};
use itertools::Itertools;
use log::{error, info};

use crate::{
    animation::{render_fly_through, FLY_THROUGH_FILE, FLY_THROUGH_SIZE},
    camera::{frame_params, CameraState, DEFAULT_MARKER_SIZE, FRAME_COUNT},
    cohort::{Bounds3, Marker, Rgb},
    datasets,
    growth::{fmt_optional, DoublingSummary, TimeConstantRow},
    raster::{save_scene2d, save_scene3d},
    scene::{self, PlotOptions, Scene2d, Scene3d},
    table::{write_f64_columns, write_time_constants},
    HALF_LIFE_FILE,
};

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PlaqueApp {
    view: View,
    options: PlotOptions,
    camera: CameraState,
    #[serde(skip)]
    playing: bool,
    #[serde(skip)]
    frame: usize,
    #[serde(skip)]
    built: Option<(View, PlotOptions, Built)>,
}

impl Default for PlaqueApp {
    fn default() -> Self {
        Self {
            view: Default::default(),
            options: Default::default(),
            camera: Default::default(),
            playing: false,
            frame: 0,
            built: None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum View {
    #[default]
    DeltaRegressions,
    RatioPlanes,
    BetaUnion,
    QAngio,
    Velocity,
    FlyThrough,
    DoublingTimes,
    HalfLifeTable,
}

impl View {
    const ALL: [View; 8] = [
        View::DeltaRegressions,
        View::RatioPlanes,
        View::BetaUnion,
        View::QAngio,
        View::Velocity,
        View::FlyThrough,
        View::DoublingTimes,
        View::HalfLifeTable,
    ];

    fn title(&self) -> &'static str {
        match self {
            View::DeltaRegressions => "Δ Regressions",
            View::RatioPlanes => "Ratio planes",
            View::BetaUnion => "β ∪ ζ",
            View::QAngio => "QAngio",
            View::Velocity => "Velocity",
            View::FlyThrough => "Fly-through",
            View::DoublingTimes => "Doubling times",
            View::HalfLifeTable => "Half-life table",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            View::DeltaRegressions => "delta_regressions",
            View::RatioPlanes => "ratio_planes",
            View::BetaUnion => "beta_union",
            View::QAngio => "qangio",
            View::Velocity => "velocity",
            View::FlyThrough => "fly_through",
            View::DoublingTimes => "doubling_times",
            View::HalfLifeTable => "half_life",
        }
    }
}

enum Built {
    Flat(Scene2d),
    Spatial(Scene3d),
    Doubling(Vec<DoublingSummary>),
    TimeConstants(Vec<TimeConstantRow>),
}

/// Builds the content of `view` from the cohorts.
fn build(view: View, options: &PlotOptions) -> Built {
    match view {
        View::DeltaRegressions => Built::Flat(scene::fit_and_plot(
            "Combined Delta Regressions: Zeta, Theta, Eta",
            ("ln(ΔNCPV + 1)", "ln(ΔCAC + 1)"),
            &datasets::delta_groups(),
            options,
        )),
        View::RatioPlanes => Built::Spatial(scene::ratio_planes_scene(
            &datasets::ratio_groups(),
            1,
            options,
        )),
        View::BetaUnion => Built::Spatial(scene::beta_union_scene(
            &datasets::beta_group(),
            &datasets::zeta_full_group(),
            options,
        )),
        View::QAngio => Built::Spatial(scene::qangio_scene(&datasets::qangio_pairs(), options)),
        View::Velocity => Built::Spatial(scene::velocity_scene(
            &datasets::qangio_velocity_groups(),
            options,
        )),
        View::FlyThrough => Built::Spatial(scene::fly_through_scene(
            &datasets::stereo_groups(),
            1,
            options,
        )),
        View::DoublingTimes => Built::Doubling(
            datasets::doubling_cohorts()
                .iter()
                .map(|(name, subjects)| DoublingSummary::new(name, subjects))
                .collect(),
        ),
        View::HalfLifeTable => Built::TimeConstants(
            datasets::literature_slopes()
                .into_iter()
                .map(TimeConstantRow::new)
                .collect(),
        ),
    }
}

impl PlaqueApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        if let Some(storage) = cc.storage {
            app.options = eframe::get_value(storage, "options").unwrap_or_default();
            app.view = eframe::get_value(storage, "view").unwrap_or_default();
            app.camera = eframe::get_value(storage, "camera").unwrap_or_default();
        }
        app
    }

    fn current(&mut self) -> &Built {
        let stale = match &self.built {
            Some((view, options, _)) => *view != self.view || *options != self.options,
            None => true,
        };
        if stale {
            self.built = Some((self.view, self.options.clone(), build(self.view, &self.options)));
        }
        match &self.built {
            Some((_, _, built)) => built,
            None => unreachable!("content was built above"),
        }
    }
}

impl eframe::App for PlaqueApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "options", &self.options);
        eframe::set_value(storage, "view", &self.view);
        eframe::set_value(storage, "camera", &self.camera);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| self.menu(ui));
        egui::SidePanel::right("plot_opts").show(ctx, |ui| self.side_panel(ui));

        if self.playing && self.view == View::FlyThrough {
            self.camera = frame_params(self.frame);
            self.frame = (self.frame + 1) % FRAME_COUNT;
            ctx.request_repaint();
        }

        let camera = self.camera;
        egui::CentralPanel::default().show(ctx, |ui| match self.current() {
            Built::Flat(scene) => show_scene2d(scene, ui),
            Built::Spatial(scene) => show_scene3d(scene, &camera, ui),
            Built::Doubling(summaries) => show_doubling(summaries, ui),
            Built::TimeConstants(rows) => show_time_constants(rows, ui),
        });
    }
}

impl PlaqueApp {
    fn menu(&mut self, ui: &mut Ui) {
        egui::menu::bar(ui, |ui| {
            ui.horizontal_centered(|ui| {
                for view in View::ALL {
                    ui.selectable_value(&mut self.view, view, view.title());
                }
            });
        });
    }

    fn side_panel(&mut self, ui: &mut Ui) {
        ui.heading(self.view.title());
        match self.view {
            View::DoublingTimes => {
                if ui.button("print to console").clicked() {
                    if let Built::Doubling(summaries) = self.current() {
                        for summary in summaries {
                            println!("{}\n{}", summary.name, summary);
                        }
                    }
                }
                return;
            }
            View::HalfLifeTable => {
                if ui.button("write csv").clicked() {
                    if let Built::TimeConstants(rows) = self.current() {
                        match write_time_constants(HALF_LIFE_FILE, rows) {
                            Ok(_) => info!("saved file succesfully to {}", HALF_LIFE_FILE),
                            Err(err) => error!("failed to save file, Error: {}", err),
                        }
                    }
                }
                return;
            }
            _ => (),
        }

        ui.checkbox(&mut self.options.mask_positive, "only positive values");
        ui.checkbox(&mut self.options.show_fits, "regression lines");
        if self.view != View::DeltaRegressions {
            ui.checkbox(&mut self.options.show_planes, "regression planes");
            ui.checkbox(&mut self.options.show_vectors, "vectors");
        }
        if self.view == View::BetaUnion {
            ui.checkbox(&mut self.options.show_zeta, "show ζ");
            ui.checkbox(&mut self.options.zoom_to_primary, "zoom to β");
        }
        if self.view == View::QAngio {
            ui.checkbox(&mut self.options.stagger_depth, "stagger by disparity");
        }
        let mut highlight = self.options.highlight.is_some();
        if ui.checkbox(&mut highlight, "highlight your point").changed() {
            self.options.highlight = highlight.then_some(datasets::HIGHLIGHT_X);
        }

        if self.view != View::DeltaRegressions {
            ui.separator();
            ui.label("camera");
            ui.add(Slider::new(&mut self.camera.elevation, -90.0..=90.0).text("elevation"));
            ui.add(Slider::new(&mut self.camera.azimuth, -180.0..=360.0).text("azimuth"));
            ui.add(Slider::new(&mut self.camera.zoom, 4.0..=20.0).text("distance"));
            ui.add(Slider::new(&mut self.camera.z_shift, -10.0..=10.0).text("z shift"));
            if ui.button("reset camera").clicked() {
                self.camera = CameraState::default();
                self.playing = false;
            }
        }
        if self.view == View::FlyThrough {
            ui.checkbox(&mut self.playing, "play fly-through");
        }

        ui.separator();
        if let Some(lines) = self.annotation() {
            for line in lines {
                ui.label(line);
            }
            ui.separator();
        }

        if ui.button("save png").clicked() {
            self.save_png();
        }
        if self.view == View::DeltaRegressions && ui.button("write fits csv").clicked() {
            self.save_fits();
        }
        if self.view == View::FlyThrough && ui.button("render gif").clicked() {
            if let Built::Spatial(scene) = self.current() {
                match render_fly_through(scene, FLY_THROUGH_FILE, FLY_THROUGH_SIZE) {
                    Ok(_) => info!("Fly-through GIF created: '{}'", FLY_THROUGH_FILE),
                    Err(err) => error!("failed to render gif, Error: {}", err),
                }
            }
        }
    }

    fn annotation(&mut self) -> Option<Vec<String>> {
        match self.current() {
            Built::Flat(scene) => Some(
                scene
                    .fits
                    .iter()
                    .map(|line| {
                        format!(
                            "{}: slope {:.4}, intercept {:.4}, R² {:.4}, N {}",
                            line.label.split_whitespace().next().unwrap_or_default(),
                            line.fit.slope,
                            line.fit.intercept,
                            line.fit.r_squared,
                            line.fit.n
                        )
                    })
                    .collect(),
            ),
            Built::Spatial(scene) => Some(scene.annotation.clone()),
            _ => None,
        }
    }

    fn save_png(&mut self) {
        let path = format!("{}.png", self.view.file_stem());
        let camera = self.camera;
        let result = match self.current() {
            Built::Flat(scene) => save_scene2d(scene, &path),
            Built::Spatial(scene) => save_scene3d(scene, &camera, &path),
            _ => return,
        };
        if let Err(err) = result {
            error!("failed to save {}, Error: {}", path, err)
        }
    }

    fn save_fits(&mut self) {
        let path = format!("{}_fits.csv", self.view.file_stem());
        if let Built::Flat(scene) = self.current() {
            let mut keys = Vec::new();
            let mut columns = Vec::new();
            for line in &scene.fits {
                let name = line.label.split_whitespace().next().unwrap_or_default();
                keys.push(format!("{} x", name));
                keys.push(format!("{} fit", name));
                columns.push(line.points.iter().map(|p| p[0]).collect_vec());
                columns.push(line.points.iter().map(|p| p[1]).collect_vec());
            }
            match write_f64_columns(&path, keys, columns, &scene.title) {
                Ok(_) => info!("saved file succesfully to {}", path),
                Err(err) => error!("failed to save file, Error: {}", err),
            }
        }
    }
}

fn marker_shape(marker: Marker) -> MarkerShape {
    match marker {
        Marker::Circle => MarkerShape::Circle,
        Marker::Square => MarkerShape::Square,
        Marker::Diamond => MarkerShape::Diamond,
        Marker::Triangle => MarkerShape::Up,
        Marker::Star => MarkerShape::Asterisk,
    }
}

fn translucent(color: Rgb, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.0, color.1, color.2, alpha)
}

fn show_scene2d(scene: &Scene2d, ui: &mut Ui) {
    ui.heading(&scene.title);
    Plot::new(scene.title.as_str())
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for series in &scene.series {
                plot_ui.points(
                    Points::new(PlotPoints::from(series.points.clone()))
                        .shape(marker_shape(series.style.marker))
                        .color(series.style.color)
                        .filled(true)
                        .radius(4.0)
                        .name(&series.label),
                );
            }
            for fit in &scene.fits {
                plot_ui.line(
                    Line::new(PlotPoints::from(fit.points.clone()))
                        .color(fit.color)
                        .width(2.0)
                        .name(&fit.label),
                );
            }
        });
    ui.horizontal(|ui| {
        ui.label(format!("x: {}", scene.x_label));
        ui.label(format!("y: {}", scene.y_label));
    });
}

fn show_scene3d(scene: &Scene3d, camera: &CameraState, ui: &mut Ui) {
    ui.heading(&scene.title);
    let to_screen = |p: [f64; 3]| -> [f64; 2] {
        let s = camera.project(p, scene.bounds);
        [s.x, s.y]
    };
    let view = camera.view_bounds(scene.bounds);

    Plot::new(scene.title.as_str())
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes([false, false])
        .show(ui, |plot_ui| {
            let origin = view.min;
            for (axis, label) in scene.axis_labels.iter().enumerate() {
                let mut end = origin;
                end[axis] = view.max[axis];
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![to_screen(origin), to_screen(end)]))
                        .color(Color32::GRAY),
                );
                let [x, y] = to_screen(end);
                plot_ui.text(Text::new(PlotPoint::new(x, y), label.as_str()));
            }

            for surface in &scene.surfaces {
                let color = translucent(surface.color, 77);
                let columns = surface.grid.first().map_or(0, Vec::len);
                for row in &surface.grid {
                    let points = row.iter().map(|p| to_screen(*p)).collect_vec();
                    plot_ui.line(Line::new(PlotPoints::from(points)).color(color).name(&surface.label));
                }
                for column in 0..columns {
                    let points = surface
                        .grid
                        .iter()
                        .filter_map(|row| row.get(column))
                        .map(|p| to_screen(*p))
                        .collect_vec();
                    plot_ui.line(Line::new(PlotPoints::from(points)).color(color).name(&surface.label));
                }
            }

            for line in &scene.lines {
                let points = line.points.iter().map(|p| to_screen(*p)).collect_vec();
                plot_ui.line(
                    Line::new(PlotPoints::from(points))
                        .color(line.color)
                        .width(2.0)
                        .name(&line.label),
                );
            }

            for (color, arrows) in &scene.arrows.iter().group_by(|arrow| arrow.color) {
                let (origins, tips): (Vec<_>, Vec<_>) = arrows
                    .map(|arrow| (to_screen(arrow.from), to_screen(arrow.tip())))
                    .unzip();
                plot_ui.arrows(
                    Arrows::new(PlotPoints::from(origins), PlotPoints::from(tips)).color(color),
                );
            }

            for series in &scene.series {
                let points = series.points.iter().map(|p| to_screen(*p)).collect_vec();
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .shape(marker_shape(series.style.marker))
                        .color(series.style.color)
                        .filled(true)
                        .radius(4.0)
                        .name(&series.label),
                );
            }

            if let Some(highlight) = &scene.highlight {
                let size = if highlight.pulse {
                    camera.pulse_size
                } else {
                    DEFAULT_MARKER_SIZE
                };
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![to_screen(highlight.point)]))
                        .shape(MarkerShape::Asterisk)
                        .color(Rgb::MAGENTA)
                        .radius((size.sqrt() / 2.0) as f32)
                        .name(&highlight.label),
                );
            }
        });
    let bounds: Bounds3 = scene.bounds;
    ui.label(format!(
        "x {:.2}..{:.2}, y {:.2}..{:.2}, z {:.2}..{:.2}",
        bounds.min[0], bounds.max[0], bounds.min[1], bounds.max[1], bounds.min[2], bounds.max[2]
    ));
}

fn show_doubling(summaries: &[DoublingSummary], ui: &mut Ui) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        for summary in summaries {
            ui.heading(&summary.name);
            ui.label(format!(
                "CAC Doubling Time Mean: {} ({} subjects)",
                fmt_optional(summary.cac_mean),
                summary.cac_count()
            ));
            ui.label(format!(
                "NCPV Doubling Time Mean: {} ({} subjects)",
                fmt_optional(summary.ncpv_mean),
                summary.ncpv_count()
            ));
            egui::CollapsingHeader::new(format!("{} subjects", summary.rows.len()))
                .id_source(&summary.name)
                .show(ui, |ui| {
                    egui::Grid::new(&summary.name).striped(true).show(ui, |ui| {
                        ui.strong("Id");
                        ui.strong("CAC_dt");
                        ui.strong("NCPV_dt");
                        ui.end_row();
                        for row in &summary.rows {
                            ui.label(row.id.to_string());
                            ui.label(fmt_optional(row.cac_dt));
                            ui.label(fmt_optional(row.ncpv_dt));
                            ui.end_row();
                        }
                    });
                });
            ui.separator();
        }
    });
}

fn show_time_constants(rows: &[TimeConstantRow], ui: &mut Ui) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("time_constants").striped(true).show(ui, |ui| {
            for title in ["Regression", "Set", "Slope", "p_value", "Type", "Time_years"] {
                ui.strong(title);
            }
            ui.end_row();
            for row in rows {
                ui.label(&row.slope.regression);
                ui.label(&row.slope.set);
                ui.label(row.slope.slope.to_string());
                ui.label(row.slope.p_value.to_string());
                ui.label(row.regime.label());
                ui.label(format!("{:.2}", row.time_years));
                ui.end_row();
            }
        });
    });
}
