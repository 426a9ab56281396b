use eframe::CreationContext;
use telesplit::utils::logger::init_logger;
use telesplit::NumberSplitter;

fn main() -> Result<(), eframe::Error> {
    init_logger();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("TeleSplit Admin")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TeleSplit Admin",
        options,
        Box::new(|cc: &CreationContext| Box::new(NumberSplitter::new(cc))),
    )
}
