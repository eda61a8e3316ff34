//! # Storefront Desktop Entry Point
//!
//! Binary shim for the Tauri host; everything lives in `lib.rs`.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load the HTTP client config (file + env overrides)
//! 3. Create state objects (CarouselState, CartState, ConfigState)
//! 4. Build Tauri application
//! 5. Register commands
//! 6. Launch window

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    storefront_desktop_lib::run();
}
