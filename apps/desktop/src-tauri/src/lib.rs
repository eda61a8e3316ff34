//! # Storefront Desktop Library
//!
//! Tauri host for the storefront's Featured section. The WebView draws
//! cards; this crate owns the carousel state, the cart the cards feed,
//! and the HTTP client settings the frontend fetches products with.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Desktop                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │   Featured cards • ◄ ► buttons • indicator dots • cart badge     │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                         invoke('command')                               │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  commands/carousel ──► CarouselState ──► storefront-core         │  │
//! │  │  commands/cart ──────► CartState (AddToCart sink)                │  │
//! │  │  commands/navigation ► emits "navigate"                          │  │
//! │  │  commands/config ────► ConfigState ──► storefront-api            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CarouselState, CartState, ConfigState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,storefront=debug, overridden with RUST_LOG          │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • api.toml in the platform config dir (optional)                    │
/// │     • STOREFRONT_* environment overrides                                │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CarouselState: empty carousel, page size 4 until first resize     │
/// │     • CartState: empty cart                                             │
/// │     • ConfigState: store + HTTP client settings                         │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Storefront Desktop Application");

    tauri::Builder::default()
        .setup(|app| {
            let config_state = ConfigState::from_env();
            info!(
                mode = %config_state.api.mode,
                with_credentials = config_state.api.with_credentials,
                "API client configured"
            );

            app.manage(CarouselState::new());
            app.manage(CartState::new());
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Carousel commands
            commands::carousel::load_featured_products,
            commands::carousel::viewport_resized,
            commands::carousel::next_page,
            commands::carousel::previous_page,
            commands::carousel::jump_to_page,
            commands::carousel::get_carousel,
            // Cart commands
            commands::cart::add_featured_to_cart,
            commands::cart::get_cart,
            commands::cart::update_cart_item,
            commands::cart::remove_from_cart,
            commands::cart::clear_cart,
            // Navigation commands
            commands::navigation::navigate,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=trace` - Trace the carousel only
/// - Default: INFO, DEBUG for storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
