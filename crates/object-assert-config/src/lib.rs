// crates/object-assert-config/src/lib.rs
// ============================================================================
// Module: Object Assert Config Library
// Description: Canonical config model, validation, and audit sink wiring.
// Purpose: Single source of truth for object-assert.toml semantics.
// Dependencies: object-assert-core, serde, toml
// ============================================================================

//! ## Overview
//! `object-assert-config` defines the configuration model for Object Assert
//! test suites. Loading is strict and fail-closed; a validated config builds
//! the audit sink that verification contexts report to.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
