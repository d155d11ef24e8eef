//! Domain-level constants.
//!
//! Column sizes here mirror the length rules on [`crate::User`].

// =============================================================================
// Identity
// =============================================================================

/// Identifier carried by an entity the store has not assigned an id to yet
pub const TRANSIENT_ID: i64 = 0;

// =============================================================================
// User columns
// =============================================================================

/// Maximum name length
pub const MAX_NAME_LENGTH: u32 = 80;

/// Maximum email length
pub const MAX_EMAIL_LENGTH: u32 = 180;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u32 = 80;
