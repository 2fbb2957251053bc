use std::error::Error;

use plaqueplot::{
    animation::{render_fly_through, FLY_THROUGH_FILE, FLY_THROUGH_SIZE},
    datasets::stereo_groups,
    log::LevelFilter,
    scene::{fly_through_scene, PlotOptions},
};

fn main() -> Result<(), Box<dyn Error>> {
    plaqueplot::log::init_native_log(LevelFilter::INFO);

    let scene = fly_through_scene(&stereo_groups(), 1, &PlotOptions::default());
    render_fly_through(&scene, FLY_THROUGH_FILE, FLY_THROUGH_SIZE)?;
    println!("Fly-through GIF created: '{}'", FLY_THROUGH_FILE);
    Ok(())
}
