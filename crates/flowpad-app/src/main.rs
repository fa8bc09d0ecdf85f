//! Main application entry point.

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting FlowPad");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("FlowPad")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "flowpad",
        options,
        Box::new(|cc| Ok(Box::new(flowpad_app::FlowPadApp::new(cc)))),
    )
}
