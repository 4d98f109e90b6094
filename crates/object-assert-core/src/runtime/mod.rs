// crates/object-assert-core/src/runtime/mod.rs
// ============================================================================
// Module: Object Assert Runtime
// Description: Verification context, execution adapters, checks, and audit sinks.
// Purpose: Resolve remote objects and run accumulated checks against them.
// Dependencies: crate::{core, interfaces}, serde_json
// ============================================================================

//! ## Overview
//! Runtime modules implement verification. Every execution adapter calls into
//! the same run routine on [`VerificationContext`] so resolution and
//! aggregation behave identically regardless of the entry point.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod adapters;
pub mod audit;
pub mod checks;
pub mod context;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use adapters::PanicReporter;
pub use audit::FileVerificationSink;
pub use audit::MemoryVerificationSink;
pub use audit::NoopVerificationSink;
pub use audit::StderrVerificationSink;
pub use context::Resolved;
pub use context::VerificationContext;
