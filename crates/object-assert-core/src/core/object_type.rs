// crates/object-assert-core/src/core/object_type.rs
// ============================================================================
// Module: Object Type Tags
// Description: Logical category names for remote objects.
// Purpose: Label verification diagnostics with the kind of object checked.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An [`ObjectType`] names the category of a remote object (for example
//! `SECRET` or `SESSION POLICY`). It is used only in diagnostics and never
//! influences resolution or check execution.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Object Type
// ============================================================================

/// Logical type tag for a remote object.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectType(Cow<'static, str>);

impl ObjectType {
    /// Account-level object.
    pub const ACCOUNT: Self = Self::from_static("ACCOUNT");
    /// Database object.
    pub const DATABASE: Self = Self::from_static("DATABASE");
    /// Schema object.
    pub const SCHEMA: Self = Self::from_static("SCHEMA");
    /// Secret object.
    pub const SECRET: Self = Self::from_static("SECRET");
    /// Session policy object.
    pub const SESSION_POLICY: Self = Self::from_static("SESSION POLICY");
    /// Table object.
    pub const TABLE: Self = Self::from_static("TABLE");
    /// User object.
    pub const USER: Self = Self::from_static("USER");
    /// Warehouse object.
    pub const WAREHOUSE: Self = Self::from_static("WAREHOUSE");

    /// Creates a type tag from an owned or borrowed name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Creates a type tag from a static name without allocating.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ObjectType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
