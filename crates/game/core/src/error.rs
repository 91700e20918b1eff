//! Common error infrastructure for arena-core.
//!
//! The rules components (attack profiles, conditional effects, mana gain and
//! the summoning lock) never fail: missing or malformed input degrades to a
//! default result. Errors only exist on the supporting data-model API where a
//! caller can ask for something impossible, such as a cell outside the board
//! or a template id the catalog does not know.
//!
//! Domain-specific errors (`BoardError`, `CatalogError`) live next to the
//! types they guard and implement [`GameError`] for uniform classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can retry with different input (e.g. another cell)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that indicates a bug
/// - **Fatal**: the match state cannot be trusted anymore
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    ///
    /// Examples: target cell already occupied
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: coordinates outside the 3x3 grid, unknown template id
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - match state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
