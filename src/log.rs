use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

pub use tracing::metadata::LevelFilter;

pub const LOG_DIR: &str = "logs";

/// Installs the global subscriber: `console` and above on stdout, info and above
/// in `logs/<timestamp>.log` when the directory is writable.
///
/// The window uses `LevelFilter::WARN`, the batch tools `LevelFilter::INFO` so
/// render progress shows up in the terminal.
pub fn init_native_log(console: LevelFilter) {
    use tracing_subscriber::{filter, prelude::*};

    let stdout_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_filter(console);

    let opened = create_log_file(Path::new(LOG_DIR));
    let file_path = opened.as_ref().map(|(path, _)| path.clone());
    let file_log = opened.map(|(_, file)| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::INFO)
            .with_filter(filter::filter_fn(|metadata| {
                let target = metadata.target();
                !(target.starts_with("winit") || target.starts_with("eframe"))
            }))
    });

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(file_log)
        .init();

    match file_path {
        Some(path) => tracing::info!("logging to {}", path.display()),
        None => tracing::warn!("could not create {}, file logging disabled", LOG_DIR),
    }
}

fn create_log_file(dir: &Path) -> Option<(PathBuf, File)> {
    std::fs::create_dir_all(dir).ok()?;
    let path = dir.join(format!("{}.log", chrono::Local::now().format("%Y%m%dT%H%M%S")));
    let file = File::create(&path).ok()?;
    Some((path, file))
}
