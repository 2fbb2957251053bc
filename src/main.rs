fn main() {
    plaqueplot::log::init_native_log(plaqueplot::log::LevelFilter::WARN);

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 860.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Plaqueplot",
        native_options,
        Box::new(|cc| Box::new(plaqueplot::PlaqueApp::new(cc))),
    );
}
