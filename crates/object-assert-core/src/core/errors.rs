// crates/object-assert-core/src/core/errors.rs
// ============================================================================
// Module: Verification Errors
// Description: Check failures, provider failures, and aggregated diagnostics.
// Purpose: Report every failing check with enough context to locate it.
// Dependencies: crate::core::object_type, thiserror
// ============================================================================

//! ## Overview
//! Verification has three failure classes:
//! - configuration errors: the context cannot resolve its object at all,
//! - resolution errors: the provider failed, reported verbatim,
//! - check failures: collected per run and joined into one [`AggregatedError`].
//!
//! Configuration and resolution errors always surface alone; they are never
//! mixed with check failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::core::object_type::ObjectType;

// ============================================================================
// SECTION: Check Errors
// ============================================================================

/// Failure reported by a single check.
///
/// # Invariants
/// - The message describes the failing field or property; it carries no position data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckError {
    /// Human-readable failure message.
    message: String,
}

impl CheckError {
    /// Creates a new check error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for CheckError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CheckError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Provider Errors
// ============================================================================

/// Object provider errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The remote system has no object with the requested identifier.
    #[error("object {0} not found")]
    NotFound(String),
    /// The remote lookup failed.
    #[error("object lookup failed: {0}")]
    Lookup(String),
}

// ============================================================================
// SECTION: Check Failures
// ============================================================================

/// A failed check annotated with the object and its position in the run.
///
/// # Invariants
/// - `position` is 1-based and `position <= total`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "object {object_type}[{identifier}] assertion [{position}/{total}]: failed with error: {source}"
)]
pub struct CheckFailure {
    /// Type tag of the verified object.
    pub object_type: ObjectType,
    /// Fully-qualified name of the verified object.
    pub identifier: String,
    /// 1-based position of the check.
    pub position: usize,
    /// Total number of checks in the run.
    pub total: usize,
    /// Error returned by the check.
    pub source: CheckError,
}

/// Every check failure from a single run, in check order.
///
/// # Invariants
/// - Holds at least one failure.
/// - Failures keep insertion order; none are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedError {
    /// Collected failures.
    failures: Vec<CheckFailure>,
}

impl AggregatedError {
    /// Joins failures into one error, or returns `None` when there are none.
    #[must_use]
    pub fn from_failures(failures: Vec<CheckFailure>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self {
                failures,
            })
        }
    }

    /// Returns the individual failures.
    #[must_use]
    pub fn failures(&self) -> &[CheckFailure] {
        &self.failures
    }

    /// Consumes the error and returns the individual failures.
    #[must_use]
    pub fn into_failures(self) -> Vec<CheckFailure> {
        self.failures
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always false; an aggregated error is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for AggregatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregatedError {}

// ============================================================================
// SECTION: Verification Errors
// ============================================================================

/// Result of a failed verification run.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Neither an object nor a provider was bound to the context.
    #[error(
        "cannot proceed with object {object_type}[{identifier}] assertion: object or provider must be specified"
    )]
    MissingSource {
        /// Type tag of the object.
        object_type: ObjectType,
        /// Fully-qualified name of the object.
        identifier: String,
    },
    /// A client-bound provider was selected but no client handle was supplied.
    #[error("test client must not be empty")]
    MissingClient,
    /// The provider failed to fetch the object.
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// One or more checks failed.
    #[error(transparent)]
    Checks(#[from] AggregatedError),
}

impl VerificationError {
    /// Returns true for context misuse (no source bound, missing client handle).
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingSource { .. } | Self::MissingClient)
    }

    /// Returns the check failures, or an empty slice for non-check errors.
    #[must_use]
    pub fn failures(&self) -> &[CheckFailure] {
        match self {
            Self::Checks(aggregated) => aggregated.failures(),
            Self::MissingSource { .. } | Self::MissingClient | Self::Provider(_) => &[],
        }
    }
}
