use std::path::Path;

use image::{Rgba, RgbaImage};
use itertools::Itertools;
use line_drawing::XiaolinWu;
use log::info;

use crate::{
    camera::{CameraState, ScreenPoint, DEFAULT_MARKER_SIZE},
    cohort::{Bounds3, Marker, Rgb},
    error::PlotError,
    scene::{Scene2d, Scene3d},
};

pub const DEFAULT_SIZE: (u32, u32) = (1000, 800);
const SCATTER_SIZE: f64 = 36.0;
const SURFACE_OPACITY: f32 = 0.3;

/// An RGBA image that knows how to place markers and anti-aliased lines.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        let mix = |old: u8, new: u8| -> u8 {
            (old as f32 * (1.0 - alpha) + new as f32 * alpha).round() as u8
        };
        pixel.0 = [
            mix(pixel.0[0], color.0),
            mix(pixel.0[1], color.1),
            mix(pixel.0[2], color.2),
            255,
        ];
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, opacity: f32) {
        if ![from.0, from.1, to.0, to.1].iter().all(|v| v.is_finite()) {
            return;
        }
        for ((x, y), coverage) in XiaolinWu::<f32, i64>::new(
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
        ) {
            self.blend(x, y, color, coverage * opacity);
        }
    }

    /// Arrow from `from` to `to` with a head a quarter of its length.
    pub fn arrow(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb) {
        self.line(from, to, color, 1.0);
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = (dx * dx + dy * dy).sqrt();
        if length < 1.0 {
            return;
        }
        let head = length * 0.25;
        let angle = dy.atan2(dx);
        for side in [-0.5f64, 0.5] {
            let a = angle + std::f64::consts::PI + side;
            self.line(to, (to.0 + head * a.cos(), to.1 + head * a.sin()), color, 1.0);
        }
    }

    /// Filled marker; `size` is the marker area in square points.
    pub fn marker(&mut self, center: (f64, f64), size: f64, marker: Marker, color: Rgb) {
        let r = size.max(1.0).sqrt() / 2.0;
        let (cx, cy) = center;
        if !cx.is_finite() || !cy.is_finite() {
            return;
        }
        let reach = r.ceil() as i64 + 1;
        for py in (cy as i64 - reach)..=(cy as i64 + reach) {
            for px in (cx as i64 - reach)..=(cx as i64 + reach) {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if inside(marker, dx, dy, r) {
                    self.blend(px, py, color, 1.0);
                }
            }
        }
    }
}

fn inside(marker: Marker, dx: f64, dy: f64, r: f64) -> bool {
    let up_triangle = |dx: f64, dy: f64| {
        let t = (dy + r) / (2.0 * r);
        (0.0..=1.0).contains(&t) && dx.abs() <= t * r
    };
    match marker {
        Marker::Circle => dx * dx + dy * dy <= r * r,
        Marker::Square => dx.abs() <= r * 0.85 && dy.abs() <= r * 0.85,
        Marker::Diamond => dx.abs() + dy.abs() <= r,
        Marker::Triangle => up_triangle(dx, dy),
        Marker::Star => up_triangle(dx, dy) || up_triangle(dx, -dy),
    }
}

/// Maps data coordinates of a 2D scene to pixels, y up.
struct Frame2 {
    min: [f64; 2],
    max: [f64; 2],
    width: f64,
    height: f64,
    margin: f64,
}

impl Frame2 {
    fn to_pixel(&self, p: [f64; 2]) -> (f64, f64) {
        let span = |axis: usize| (self.max[axis] - self.min[axis]).max(f64::EPSILON);
        let x = self.margin + (p[0] - self.min[0]) / span(0) * (self.width - 2.0 * self.margin);
        let y = self.height
            - self.margin
            - (p[1] - self.min[1]) / span(1) * (self.height - 2.0 * self.margin);
        (x, y)
    }
}

pub fn render_scene2d(scene: &Scene2d, size: (u32, u32)) -> RgbaImage {
    let mut canvas = Canvas::new(size.0, size.1);
    let Some((mut min, mut max)) = scene.bounds() else {
        return canvas.into_image();
    };
    for axis in 0..2 {
        let pad = ((max[axis] - min[axis]) * 0.05).max(0.05);
        min[axis] -= pad;
        max[axis] += pad;
    }
    let frame = Frame2 {
        min,
        max,
        width: size.0 as f64,
        height: size.1 as f64,
        margin: 40.0,
    };

    let corners = [[min[0], min[1]], [max[0], min[1]], [max[0], max[1]], [min[0], max[1]]];
    for (a, b) in corners.iter().circular_tuple_windows() {
        canvas.line(frame.to_pixel(*a), frame.to_pixel(*b), Rgb::BLACK, 1.0);
    }

    for series in &scene.series {
        for point in &series.points {
            canvas.marker(frame.to_pixel(*point), SCATTER_SIZE, series.style.marker, series.style.color);
        }
    }
    for fit in &scene.fits {
        for (a, b) in fit.points.iter().tuple_windows() {
            canvas.line(frame.to_pixel(*a), frame.to_pixel(*b), fit.color, 1.0);
        }
    }
    canvas.into_image()
}

/// Screen space of a 3D scene under one camera.
struct Frame3<'a> {
    camera: &'a CameraState,
    bounds: Bounds3,
    center: (f64, f64),
    scale: f64,
}

impl<'a> Frame3<'a> {
    fn screen(&self, p: [f64; 3]) -> ScreenPoint {
        self.camera.project(p, self.bounds)
    }

    fn to_pixel(&self, p: [f64; 3]) -> (f64, f64) {
        let s = self.screen(p);
        (self.center.0 + s.x * self.scale, self.center.1 - s.y * self.scale)
    }
}

fn box_edges(bounds: Bounds3) -> Vec<([f64; 3], [f64; 3])> {
    let corner = |i: usize| -> [f64; 3] {
        let mut c = [0.0; 3];
        for (axis, value) in c.iter_mut().enumerate() {
            *value = if i >> axis & 1 == 1 {
                bounds.max[axis]
            } else {
                bounds.min[axis]
            };
        }
        c
    };
    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for axis in 0..3 {
            let j = i | 1 << axis;
            if j != i {
                edges.push((corner(i), corner(j)));
            }
        }
    }
    edges
}

pub fn render_scene3d(scene: &Scene3d, camera: &CameraState, size: (u32, u32)) -> RgbaImage {
    let mut canvas = Canvas::new(size.0, size.1);
    let frame = Frame3 {
        camera,
        bounds: scene.bounds,
        center: (size.0 as f64 / 2.0, size.1 as f64 / 2.0),
        scale: size.0.min(size.1) as f64 * 0.55,
    };

    for (a, b) in box_edges(camera.view_bounds(scene.bounds)) {
        canvas.line(frame.to_pixel(a), frame.to_pixel(b), Rgb::GREY, 0.6);
    }

    for surface in &scene.surfaces {
        for row in &surface.grid {
            for (a, b) in row.iter().tuple_windows() {
                canvas.line(frame.to_pixel(*a), frame.to_pixel(*b), surface.color, SURFACE_OPACITY);
            }
        }
        let columns = surface.grid.first().map_or(0, Vec::len);
        for column in 0..columns {
            for (a, b) in surface.grid.iter().filter_map(|row| row.get(column)).tuple_windows() {
                canvas.line(frame.to_pixel(*a), frame.to_pixel(*b), surface.color, SURFACE_OPACITY);
            }
        }
    }

    for line in &scene.lines {
        for (a, b) in line.points.iter().tuple_windows() {
            canvas.line(frame.to_pixel(*a), frame.to_pixel(*b), line.color, 1.0);
        }
    }

    for arrow in &scene.arrows {
        canvas.arrow(frame.to_pixel(arrow.from), frame.to_pixel(arrow.tip()), arrow.color);
    }

    // painter's order, far points first
    let markers = scene
        .series
        .iter()
        .flat_map(|series| {
            series
                .points
                .iter()
                .map(move |p| (*p, series.style.marker, series.style.color, SCATTER_SIZE))
        })
        .sorted_by(|a, b| frame.screen(a.0).depth.total_cmp(&frame.screen(b.0).depth));
    for (point, marker, color, size) in markers {
        canvas.marker(frame.to_pixel(point), size, marker, color);
    }

    if let Some(highlight) = &scene.highlight {
        let size = if highlight.pulse {
            camera.pulse_size
        } else {
            DEFAULT_MARKER_SIZE
        };
        canvas.marker(frame.to_pixel(highlight.point), size, Marker::Star, Rgb::MAGENTA);
    }
    canvas.into_image()
}

pub fn save_scene2d(scene: &Scene2d, path: impl AsRef<Path>) -> Result<(), PlotError> {
    render_scene2d(scene, DEFAULT_SIZE).save(path.as_ref())?;
    info!("saved {:?} to {:?}", scene.title, path.as_ref());
    Ok(())
}

pub fn save_scene3d(
    scene: &Scene3d,
    camera: &CameraState,
    path: impl AsRef<Path>,
) -> Result<(), PlotError> {
    render_scene3d(scene, camera, DEFAULT_SIZE).save(path.as_ref())?;
    info!("saved {:?} to {:?}", scene.title, path.as_ref());
    Ok(())
}
