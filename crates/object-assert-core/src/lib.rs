// crates/object-assert-core/src/lib.rs
// ============================================================================
// Module: Object Assert Core Library
// Description: Public API surface for remote object verification.
// Purpose: Expose identifiers, check contracts, and the verification runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Object Assert core verifies properties of objects fetched from a remote
//! resource provider. Callers bind a [`VerificationContext`] to an identifier
//! and one way of obtaining the object, accumulate checks against it, and run
//! them through one of the execution adapters. Every failing check is
//! reported; a failed fetch stops the run before any check executes.
//!
//! The crate performs no I/O of its own. Providers own fetching, checks own
//! predicates, and the test harness owns lifecycle.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::AdapterKind;
pub use interfaces::Check;
pub use interfaces::CheckEvent;
pub use interfaces::ClientObjectProvider;
pub use interfaces::ImportStateCheckFunc;
pub use interfaces::ImportStateCheckFuncProvider;
pub use interfaces::InPlaceClientVerifier;
pub use interfaces::InPlaceVerifier;
pub use interfaces::InstanceState;
pub use interfaces::ObjectProvider;
pub use interfaces::Reporter;
pub use interfaces::ResolutionKind;
pub use interfaces::ResourceState;
pub use interfaces::RunOutcome;
pub use interfaces::TestCheckFunc;
pub use interfaces::TestCheckFuncProvider;
pub use interfaces::VerificationEvent;
pub use interfaces::VerificationSink;
pub use runtime::FileVerificationSink;
pub use runtime::MemoryVerificationSink;
pub use runtime::NoopVerificationSink;
pub use runtime::PanicReporter;
pub use runtime::Resolved;
pub use runtime::StderrVerificationSink;
pub use runtime::VerificationContext;
pub use runtime::checks;
