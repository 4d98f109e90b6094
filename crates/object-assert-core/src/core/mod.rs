// crates/object-assert-core/src/core/mod.rs
// ============================================================================
// Module: Object Assert Core Types
// Description: Identifiers, type tags, and error values for remote objects.
// Purpose: Provide stable, serializable types shared by checks and runtime.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types describe *which* remote object is being verified and *how* a
//! verification failed. They carry no behavior beyond formatting and parsing.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod errors;
pub mod identifiers;
pub mod object_type;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use errors::AggregatedError;
pub use errors::CheckError;
pub use errors::CheckFailure;
pub use errors::ProviderError;
pub use errors::VerificationError;
pub use identifiers::AccountObjectIdentifier;
pub use identifiers::DatabaseObjectIdentifier;
pub use identifiers::IdentifierParseError;
pub use identifiers::ObjectIdentifier;
pub use identifiers::SchemaObjectIdentifier;
pub use object_type::ObjectType;
