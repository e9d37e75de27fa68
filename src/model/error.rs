//! Error types for virtscroll.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose cleanly via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`VirtualizerError`] - Engine misuse (bad configuration, out-of-range scroll targets)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Engine errors are **local and fail fast**: they are reported at the point of misuse
//! and leave the engine in its previous, valid state. A missing scroll container is
//! not an error at all; it is the `Unbound` state of a virtualizer.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert to `AppError` via `From`
/// implementations, enabling clean error propagation with the `?` operator.
///
/// # Examples
///
/// ```
/// use virtscroll::model::error::{AppError, VirtualizerError};
///
/// fn build() -> Result<(), AppError> {
///     Err(VirtualizerError::OutOfRange { index: 3, count: 3 })?;
///     Ok(())
/// }
/// assert!(matches!(build(), Err(AppError::Virtualizer(_))));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The virtualization engine rejected a request.
    ///
    /// **Recovery**: configuration errors abort startup; scroll errors are shown
    /// in the status bar and the session continues.
    #[error("Virtualizer error: {0}")]
    Virtualizer(#[from] VirtualizerError),

    /// Failed to load the configuration file.
    ///
    /// Missing files are not errors (defaults are used); this only occurs when
    /// a file exists but cannot be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize file logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// This indicates failures in the crossterm/ratatui layer, such as broken
    /// pipes or I/O errors during rendering. This is a **fatal error**.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by the virtualization engine.
///
/// # Propagation
///
/// Both variants are returned synchronously from the offending call. Neither
/// leaves partial state behind: a rejected setter keeps the previous
/// configuration and a rejected scroll request never touches the container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VirtualizerError {
    /// The axis configuration is unusable.
    ///
    /// Raised for a zero item size. Counts and overscan are unsigned, so
    /// negative values cannot be expressed in the first place.
    ///
    /// # Examples
    ///
    /// ```
    /// use virtscroll::model::error::VirtualizerError;
    ///
    /// let err = VirtualizerError::InvalidConfiguration {
    ///     reason: "item size must be > 0".to_string(),
    /// };
    /// assert!(err.to_string().contains("item size must be > 0"));
    /// ```
    #[error("Invalid virtualizer configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the rejected value.
        reason: String,
    },

    /// `scroll_to_index` was called with an index outside `[0, count - 1]`.
    ///
    /// No scroll is attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use virtscroll::model::error::VirtualizerError;
    ///
    /// let err = VirtualizerError::OutOfRange { index: 10_000, count: 10_000 };
    /// assert_eq!(err.to_string(), "Index 10000 out of range (count: 10000)");
    /// ```
    #[error("Index {index} out of range (count: {count})")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Item count of the axis at the time of the request.
        count: usize,
    },
}

impl VirtualizerError {
    /// Shorthand for [`VirtualizerError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod virtualizer_error {
        use super::*;

        #[test]
        fn invalid_shorthand_builds_invalid_configuration() {
            let err = VirtualizerError::invalid("item size must be > 0 (got 0)");
            assert_eq!(
                err,
                VirtualizerError::InvalidConfiguration {
                    reason: "item size must be > 0 (got 0)".to_string()
                }
            );
        }

        #[test]
        fn invalid_configuration_display_includes_reason() {
            let err = VirtualizerError::invalid("item size must be > 0 (got 0)");
            assert_eq!(
                err.to_string(),
                "Invalid virtualizer configuration: item size must be > 0 (got 0)"
            );
        }

        #[test]
        fn out_of_range_display_includes_index_and_count() {
            let err = VirtualizerError::OutOfRange {
                index: 12,
                count: 10,
            };
            let msg = err.to_string();
            assert!(msg.contains("12"));
            assert!(msg.contains("10"));
        }
    }

    mod app_error {
        use super::*;

        #[test]
        fn converts_from_virtualizer_error() {
            let err: AppError = VirtualizerError::OutOfRange { index: 1, count: 0 }.into();
            assert!(matches!(err, AppError::Virtualizer(_)));
            assert!(err.to_string().starts_with("Virtualizer error:"));
        }

        #[test]
        fn converts_from_io_error() {
            let err: AppError = std::io::Error::other("broken pipe").into();
            assert!(matches!(err, AppError::Terminal(_)));
            assert!(err.to_string().contains("broken pipe"));
        }

        #[test]
        fn converts_from_config_error() {
            let err: AppError = crate::config::ConfigError::InvalidPath("bad".to_string()).into();
            assert!(matches!(err, AppError::Config(_)));
        }
    }
}
