// crates/object-assert-core/src/core/identifiers.rs
// ============================================================================
// Module: Object Identifiers
// Description: Stable identifiers for objects held by the remote provider.
// Purpose: Provide lookup keys that render a fully-qualified name for diagnostics.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Identifiers name remote objects at account, database, or schema scope.
//! Every identifier renders a fully-qualified name with each part wrapped in
//! double quotes and joined by `.`, e.g. `"db"."schema"."secret1"`. A double
//! quote inside a part is written twice, so `a"b` renders as `"a""b"`.
//! Identifiers are immutable once constructed and can be parsed back from
//! dotted names with quoted or unquoted parts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Identifier Contract
// ============================================================================

/// Identifier of a remote object.
///
/// # Invariants
/// - [`ObjectIdentifier::fully_qualified_name`] is stable for the lifetime of the value.
pub trait ObjectIdentifier {
    /// Returns the human-readable fully-qualified name.
    fn fully_qualified_name(&self) -> String;
}

/// Errors raised when parsing a fully-qualified name.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierParseError {
    /// The name has the wrong number of dotted parts.
    #[error("identifier {value} has {found} parts, expected {expected}")]
    PartCount {
        /// Raw input.
        value: String,
        /// Number of parts required by the identifier kind.
        expected: usize,
        /// Number of parts found.
        found: usize,
    },
    /// A dotted part is empty.
    #[error("identifier {0} contains an empty part")]
    EmptyPart(String),
    /// A quoted part is never closed.
    #[error("identifier {0} has an unterminated quote")]
    UnterminatedQuote(String),
}

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Identifier for an account-level object (warehouse, database, user, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountObjectIdentifier {
    /// Object name.
    name: String,
}

impl AccountObjectIdentifier {
    /// Creates a new account object identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
        }
    }

    /// Parses an identifier from a one-part name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierParseError`] when the name does not have exactly one part.
    pub fn from_fully_qualified_name(value: &str) -> Result<Self, IdentifierParseError> {
        let [name] = split_parts::<1>(value)?;
        Ok(Self {
            name,
        })
    }

    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ObjectIdentifier for AccountObjectIdentifier {
    fn fully_qualified_name(&self) -> String {
        quote_part(&self.name)
    }
}

/// Identifier for an object scoped to a database (schemas, database roles).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DatabaseObjectIdentifier {
    /// Owning database name.
    database_name: String,
    /// Object name.
    name: String,
}

impl DatabaseObjectIdentifier {
    /// Creates a new database object identifier.
    #[must_use]
    pub fn new(database_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            name: name.into(),
        }
    }

    /// Parses an identifier from a two-part name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierParseError`] when the name does not have exactly two parts.
    pub fn from_fully_qualified_name(value: &str) -> Result<Self, IdentifierParseError> {
        let [database_name, name] = split_parts::<2>(value)?;
        Ok(Self {
            database_name,
            name,
        })
    }

    /// Returns the owning database name.
    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the owning database.
    #[must_use]
    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database_name.clone())
    }
}

impl ObjectIdentifier for DatabaseObjectIdentifier {
    fn fully_qualified_name(&self) -> String {
        format!("{}.{}", quote_part(&self.database_name), quote_part(&self.name))
    }
}

/// Identifier for an object scoped to a schema (tables, secrets, policies).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaObjectIdentifier {
    /// Owning database name.
    database_name: String,
    /// Owning schema name.
    schema_name: String,
    /// Object name.
    name: String,
}

impl SchemaObjectIdentifier {
    /// Creates a new schema object identifier.
    #[must_use]
    pub fn new(
        database_name: impl Into<String>,
        schema_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            schema_name: schema_name.into(),
            name: name.into(),
        }
    }

    /// Parses an identifier from a three-part name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierParseError`] when the name does not have exactly three parts.
    pub fn from_fully_qualified_name(value: &str) -> Result<Self, IdentifierParseError> {
        let [database_name, schema_name, name] = split_parts::<3>(value)?;
        Ok(Self {
            database_name,
            schema_name,
            name,
        })
    }

    /// Returns the owning database name.
    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Returns the owning schema name.
    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the owning schema.
    #[must_use]
    pub fn schema_id(&self) -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new(self.database_name.clone(), self.schema_name.clone())
    }
}

impl ObjectIdentifier for SchemaObjectIdentifier {
    fn fully_qualified_name(&self) -> String {
        format!(
            "{}.{}.{}",
            quote_part(&self.database_name),
            quote_part(&self.schema_name),
            quote_part(&self.name)
        )
    }
}

// ============================================================================
// SECTION: Display / Parse
// ============================================================================

/// Implements `Display` (fully-qualified name) and `FromStr` for identifier types.
macro_rules! identifier_text_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.fully_qualified_name())
                }
            }

            impl FromStr for $ty {
                type Err = IdentifierParseError;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    Self::from_fully_qualified_name(value)
                }
            }
        )*
    };
}

identifier_text_impls!(AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier);

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Splits a dotted name into exactly `N` unquoted parts.
fn split_parts<const N: usize>(value: &str) -> Result<[String; N], IdentifierParseError> {
    let parts = split_dotted(value)?;
    let found = parts.len();
    <[String; N]>::try_from(parts).map_err(|_| IdentifierParseError::PartCount {
        value: value.to_string(),
        expected: N,
        found,
    })
}

/// Wraps one name part in double quotes, doubling embedded quotes.
fn quote_part(part: &str) -> String {
    format!("\"{}\"", part.replace('"', "\"\""))
}

/// Splits on `.` outside double quotes and strips the quotes.
///
/// Inside a quoted part, `""` is a literal quote.
fn split_dotted(value: &str) -> Result<Vec<String>, IdentifierParseError> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = value.trim().chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => quoted = !quoted,
            '.' if !quoted => parts.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    if quoted {
        return Err(IdentifierParseError::UnterminatedQuote(value.to_string()));
    }
    parts.push(current);
    if parts.iter().any(String::is_empty) {
        return Err(IdentifierParseError::EmptyPart(value.to_string()));
    }
    Ok(parts)
}
