//! Domain errors for the restaurant manager.

use thiserror::Error;

/// Domain-level errors raised while interpreting user-facing values.
///
/// These errors are independent of infrastructure concerns. Storage never
/// produces them: missing ids and duplicate names are silent no-ops there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid value for a field.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Text outside a fixed set of options.
    #[error("Invalid {field} '{value}', expected one of: {}", .allowed.join(", "))]
    InvalidEnum {
        /// Field name.
        field: &'static str,
        /// The rejected text.
        value: String,
        /// Accepted options.
        allowed: &'static [&'static str],
    },
}

/// The only failure a storage operation can report.
///
/// Covers unreachable files, disk faults, schema mismatches and a lost
/// worker thread. It carries a rendered message so the domain does not
/// depend on the storage driver's error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageFault {
    /// Opening or closing the database connection failed.
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Statement preparation or execution failed.
    #[error("Query error: {0}")]
    Query(String),

    /// The blocking worker running the statement did not complete.
    #[error("Storage worker error: {0}")]
    Worker(String),
}
