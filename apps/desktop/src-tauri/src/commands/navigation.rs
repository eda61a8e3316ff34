//! # Navigation Commands
//!
//! The empty state's links. The core only names a target; this command
//! resolves it to a router path and tells the frontend to go there.
//!
//! ```text
//! click "Browse all products"
//!        │
//!        ▼
//! invoke('navigate', { target: 'catalog' })
//!        │
//!        ▼
//! emit("navigate", { target, path: "/products", label }) ──► router.push(path)
//! ```

use storefront_core::{NavLink, NavTarget};
use tauri::{AppHandle, Emitter};
use tracing::{debug, error};

use crate::error::ApiError;

/// Event the frontend router listens on.
pub const NAVIGATE_EVENT: &str = "navigate";

/// Resolves an empty-state link and emits a `navigate` event.
///
/// ## Returns
/// The resolved link, also carried as the event payload.
#[tauri::command]
pub fn navigate(app: AppHandle, target: NavTarget) -> Result<NavLink, ApiError> {
    let link = NavLink::from(target);
    debug!(path = %link.path, "navigate command");

    app.emit(NAVIGATE_EVENT, &link).map_err(|e| {
        error!("Failed to emit navigate event: {}", e);
        ApiError::internal("Navigation failed")
    })?;

    Ok(link)
}
