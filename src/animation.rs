use std::{fs::File, io::BufWriter, path::Path};

use image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, Frame,
};
use log::info;

use crate::{
    camera::{frame_params, CameraState, FRAME_COUNT, FRAME_INTERVAL_MS},
    error::PlotError,
    raster::render_scene3d,
    scene::Scene3d,
};

pub const FLY_THROUGH_FILE: &str = "fly_through_nonstereo.gif";
/// 10 x 8 inches at 100 dpi.
pub const FLY_THROUGH_SIZE: (u32, u32) = (1000, 800);

/// Camera of every frame, in order.
pub fn camera_path() -> impl Iterator<Item = CameraState> {
    (0..FRAME_COUNT).map(frame_params)
}

/// Renders the camera path frame by frame and encodes it as a looping GIF.
pub fn render_fly_through(
    scene: &Scene3d,
    path: impl AsRef<Path>,
    size: (u32, u32),
) -> Result<(), PlotError> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    let mut encoder = GifEncoder::new_with_speed(writer, 10);
    encoder.set_repeat(Repeat::Infinite)?;
    for (i, camera) in camera_path().enumerate() {
        let image = render_scene3d(scene, &camera, size);
        let delay = Delay::from_numer_denom_ms(FRAME_INTERVAL_MS, 1);
        encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
        if (i + 1) % 60 == 0 {
            info!("rendered {}/{} frames", i + 1, FRAME_COUNT);
        }
    }
    info!("wrote {:?}", path.as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        datasets::stereo_groups,
        scene::{fly_through_scene, PlotOptions},
    };

    #[test]
    fn path_has_one_camera_per_frame() {
        let cameras: Vec<CameraState> = camera_path().collect();
        assert_eq!(cameras.len(), FRAME_COUNT);
        assert_eq!(cameras[10], frame_params(10));
    }

    #[test]
    fn gif_is_written() {
        let scene = fly_through_scene(&stereo_groups(), 1, &PlotOptions::default());
        let path = std::env::temp_dir().join(format!("plaqueplot_{}_fly.gif", std::process::id()));
        render_fly_through(&scene, &path, (64, 48)).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(&bytes[..6], b"GIF89a");
    }
}
