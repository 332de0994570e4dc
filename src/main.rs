// =============================================================================
// Toorrii Web - WASM Entry Point
// =============================================================================
// Binary entry point; Trunk compiles this and injects it into index.html.
// =============================================================================

use toorrii_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // Ignore the error if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Toorrii web...");

    leptos::mount::mount_to_body(App);
}
