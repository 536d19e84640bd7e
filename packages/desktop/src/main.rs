fn main() {
    let level = ui::app_config().logging.level();
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {e}");
    }
    tracing::info!("Starting AgriFuture (desktop)");

    dioxus::launch(ui::App);
}
