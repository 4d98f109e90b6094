// crates/object-assert-core/src/interfaces/mod.rs
// ============================================================================
// Module: Object Assert Interfaces
// Description: Contracts for checks, providers, test hooks, and audit sinks.
// Purpose: Define the surfaces external collaborators implement or consume.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Interfaces describe everything the verification runtime consumes or
//! exposes without knowing the concrete collaborator:
//! - checks and object providers are plain boxed closures,
//! - test-harness entry points are expressed as adapter traits,
//! - fatal reporting goes through [`Reporter`],
//! - run diagnostics flow to a [`VerificationSink`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::CheckError;
use crate::core::ProviderError;
use crate::core::VerificationError;

// ============================================================================
// SECTION: Checks and Providers
// ============================================================================

/// Predicate over a resolved object.
pub type Check<T> = Box<dyn Fn(&T) -> Result<(), CheckError>>;

/// Stateless lookup of an object by identifier.
pub type ObjectProvider<'a, T, I> = Box<dyn Fn(&I) -> Result<T, ProviderError> + 'a>;

/// Lookup that needs a client handle supplied at execution time.
///
/// The outer call is deferred until a run, so the handle need not exist when
/// the context is built. The returned provider may borrow the handle.
pub type ClientObjectProvider<T, I, C> = Box<dyn for<'c> Fn(&'c C) -> ObjectProvider<'c, T, I>>;

// ============================================================================
// SECTION: Test Harness State
// ============================================================================

/// State of a single resource instance as tracked by the test harness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState {
    /// Resource identifier assigned by the harness.
    pub id: String,
    /// Flattened resource attributes.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// Harness state after an apply step, keyed by resource address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Resource instances keyed by address.
    #[serde(default)]
    pub resources: BTreeMap<String, InstanceState>,
}

// ============================================================================
// SECTION: Execution Adapters
// ============================================================================

/// Check hook run against state after an apply step.
pub type TestCheckFunc<'a> = Box<dyn Fn(&ResourceState) -> Result<(), VerificationError> + 'a>;

/// Check hook run against freshly imported instance state.
pub type ImportStateCheckFunc<'a> =
    Box<dyn Fn(&[InstanceState]) -> Result<(), VerificationError> + 'a>;

/// Produces an apply-step check hook.
///
/// The hook runs without a client handle, so a context whose only source is a
/// client-bound provider fails with [`VerificationError::MissingClient`]; use
/// [`InPlaceClientVerifier`] for those.
pub trait TestCheckFuncProvider {
    /// Returns a hook that runs every accumulated check.
    fn to_test_check_func(&self) -> TestCheckFunc<'_>;
}

/// Produces an import-step check hook.
///
/// Like [`TestCheckFuncProvider`], the hook runs without a client handle and
/// cannot resolve a context bound only to a client-bound provider.
pub trait ImportStateCheckFuncProvider {
    /// Returns a hook that runs every accumulated check.
    fn to_import_state_check_func(&self) -> ImportStateCheckFunc<'_>;
}

/// Synchronous verification that reports failures as fatal.
pub trait InPlaceVerifier {
    /// Runs every accumulated check and hands any error to the reporter.
    fn verify_all(&self, reporter: &mut dyn Reporter);
}

/// Synchronous verification that threads a client handle through resolution.
pub trait InPlaceClientVerifier<C> {
    /// Runs every accumulated check using `client` and hands any error to the reporter.
    fn verify_all_with_client(&self, reporter: &mut dyn Reporter, client: Option<&C>);
}

/// Fatal failure sink owned by the test harness.
pub trait Reporter {
    /// Reports a verification error. Implementations are expected to stop the
    /// current test; callers return immediately afterwards.
    fn fail_now(&mut self, error: &VerificationError);
}

// ============================================================================
// SECTION: Audit Events
// ============================================================================

/// Entry point a run was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// Direct `run_all` call.
    Direct,
    /// Apply-step check hook.
    PreApply,
    /// Import-step check hook.
    Import,
    /// Synchronous verification.
    InPlace,
    /// Synchronous verification with a client handle.
    InPlaceWithClient,
}

/// Strategy used to obtain the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    /// Pre-fetched object.
    Object,
    /// Stateless provider.
    Provider,
    /// Client-bound provider.
    ClientProvider,
    /// Nothing bound.
    Unbound,
}

/// Outcome classification for a run.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every check passed.
    Passed,
    /// At least one check failed.
    ChecksFailed,
    /// The provider failed; no check ran.
    ResolutionFailed,
    /// The context could not resolve an object; no check ran.
    ConfigurationError,
}

impl RunOutcome {
    /// Classifies a run result.
    #[must_use]
    pub const fn from_result(result: &Result<(), VerificationError>) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(VerificationError::Checks(_)) => Self::ChecksFailed,
            Err(VerificationError::Provider(_)) => Self::ResolutionFailed,
            Err(VerificationError::MissingSource { .. } | VerificationError::MissingClient) => {
                Self::ConfigurationError
            }
        }
    }
}

/// Audit payload emitted once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Type tag of the verified object.
    pub object_type: String,
    /// Fully-qualified name of the verified object.
    pub identifier: String,
    /// Entry point used for the run.
    pub adapter: AdapterKind,
    /// Resolution strategy selected for the run.
    pub resolution: ResolutionKind,
    /// Run outcome.
    pub outcome: RunOutcome,
    /// Number of accumulated checks.
    pub checks_total: usize,
    /// Number of failed checks.
    pub checks_failed: usize,
    /// Error text for failed runs.
    pub message: Option<String>,
}

/// Audit payload emitted once per executed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Type tag of the verified object.
    pub object_type: String,
    /// Fully-qualified name of the verified object.
    pub identifier: String,
    /// 1-based position of the check.
    pub position: usize,
    /// Number of accumulated checks.
    pub total: usize,
    /// Whether the check passed.
    pub passed: bool,
    /// Check error message when the check failed.
    pub message: Option<String>,
}

/// Audit sink for verification runs.
pub trait VerificationSink: Send + Sync {
    /// Record a run event.
    fn record(&self, event: &VerificationEvent);

    /// Record a per-check event.
    fn record_check(&self, _event: &CheckEvent) {}

    /// Returns false when per-check events are discarded; the runtime then
    /// skips building them.
    fn records_checks(&self) -> bool {
        true
    }
}
