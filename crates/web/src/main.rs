// =============================================================================
// Mobaus Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

use mobaus_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // May already be set by `mount` when embedded as a library.
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Mobaus site v{}", mobaus_common::SiteConfig::current().version);

    leptos::mount::mount_to_body(App);
}
