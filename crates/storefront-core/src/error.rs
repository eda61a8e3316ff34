//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Carousel operation rejected                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-api errors (separate crate)                                │
//! │  └── ApiConfigError   - HTTP client configuration problems             │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. A rejected carousel operation leaves the
//! carousel exactly as it was.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Carousel operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A jump targeted a page that does not exist.
    ///
    /// ## When This Occurs
    /// - Indicator clicked after a resize removed that page
    /// - Host sent a stale index
    #[error("Page {requested} is out of range ({page_count} pages)")]
    PageOutOfRange { requested: usize, page_count: usize },

    /// An action targeted an item that is not on the visible page.
    #[error("Item {0} is not on the visible page")]
    ItemNotVisible(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two items with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PageOutOfRange {
            requested: 5,
            page_count: 3,
        };
        assert_eq!(err.to_string(), "Page 5 is out of range (3 pages)");

        let err = CoreError::ItemNotVisible("p-42".to_string());
        assert_eq!(err.to_string(), "Item p-42 is not on the visible page");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "_id".to_string(),
        };
        assert_eq!(err.to_string(), "_id is required");

        let err = ValidationError::OutOfRange {
            field: "page_size".to_string(),
            min: 1,
            max: 4,
        };
        assert_eq!(err.to_string(), "page_size must be between 1 and 4");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
