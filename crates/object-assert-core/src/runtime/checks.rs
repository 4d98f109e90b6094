// crates/object-assert-core/src/runtime/checks.rs
// ============================================================================
// Module: Reusable Checks
// Description: Generic check constructors over object fields.
// Purpose: Give per-resource assertion types uniform failure messages.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Constructors here build checks from a field name and an accessor. The
//! resulting messages follow one shape so failures read the same across
//! resource types, e.g. `expected comment: foo; got: bar`.
//!
//! ```
//! use object_assert_core::CheckError;
//! use object_assert_core::checks;
//!
//! struct Secret {
//!     comment: String,
//! }
//!
//! let check = checks::equals("comment", "foo", |secret: &Secret| secret.comment.as_str());
//! let result: Result<(), CheckError> = check(&Secret { comment: "bar".to_string() });
//! assert_eq!(result.unwrap_err().message(), "expected comment: foo; got: bar");
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Borrow;
use std::fmt::Display;

use crate::core::CheckError;

// ============================================================================
// SECTION: Comparisons
// ============================================================================

/// Checks that a field equals `expected`.
pub fn equals<T, V, E, F>(
    field: &'static str,
    expected: E,
    get: F,
) -> impl Fn(&T) -> Result<(), CheckError> + 'static
where
    V: PartialEq + Display + ?Sized,
    E: Borrow<V> + 'static,
    F: Fn(&T) -> &V + 'static,
{
    move |object: &T| {
        let actual = get(object);
        if actual == expected.borrow() {
            Ok(())
        } else {
            Err(CheckError::new(format!(
                "expected {field}: {}; got: {actual}",
                expected.borrow()
            )))
        }
    }
}

/// Checks that a field differs from `unexpected`.
pub fn not_equals<T, V, E, F>(
    field: &'static str,
    unexpected: E,
    get: F,
) -> impl Fn(&T) -> Result<(), CheckError> + 'static
where
    V: PartialEq + Display + ?Sized,
    E: Borrow<V> + 'static,
    F: Fn(&T) -> &V + 'static,
{
    move |object: &T| {
        if get(object) == unexpected.borrow() {
            Err(CheckError::new(format!(
                "expected {field} to differ from {}",
                unexpected.borrow()
            )))
        } else {
            Ok(())
        }
    }
}

/// Checks that a string field contains `needle`.
pub fn contains<T, F>(
    field: &'static str,
    needle: impl Into<String>,
    get: F,
) -> impl Fn(&T) -> Result<(), CheckError> + 'static
where
    F: Fn(&T) -> &str + 'static,
{
    let needle = needle.into();
    move |object: &T| {
        let actual = get(object);
        if actual.contains(needle.as_str()) {
            Ok(())
        } else {
            Err(CheckError::new(format!("expected {field} to contain {needle}; got: {actual}")))
        }
    }
}

// ============================================================================
// SECTION: Presence
// ============================================================================

/// Checks that an optional field is set.
pub fn present<T, V, F>(field: &'static str, get: F) -> impl Fn(&T) -> Result<(), CheckError> + 'static
where
    V: ?Sized,
    F: Fn(&T) -> Option<&V> + 'static,
{
    move |object: &T| {
        if get(object).is_some() {
            Ok(())
        } else {
            Err(CheckError::new(format!("expected {field} to be present")))
        }
    }
}

/// Checks that an optional field is unset.
pub fn absent<T, V, F>(field: &'static str, get: F) -> impl Fn(&T) -> Result<(), CheckError> + 'static
where
    V: Display + ?Sized,
    F: Fn(&T) -> Option<&V> + 'static,
{
    move |object: &T| match get(object) {
        None => Ok(()),
        Some(value) => Err(CheckError::new(format!("expected {field} to be empty; got: {value}"))),
    }
}

/// Checks that a string field is not empty.
pub fn not_empty<T, F>(field: &'static str, get: F) -> impl Fn(&T) -> Result<(), CheckError> + 'static
where
    F: Fn(&T) -> &str + 'static,
{
    move |object: &T| {
        if get(object).is_empty() {
            Err(CheckError::new(format!("expected {field} to be not empty")))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Checks an arbitrary predicate; `description` states what was expected.
pub fn satisfies<T, F>(
    description: impl Into<String>,
    predicate: F,
) -> impl Fn(&T) -> Result<(), CheckError> + 'static
where
    F: Fn(&T) -> bool + 'static,
{
    let description = description.into();
    move |object: &T| {
        if predicate(object) {
            Ok(())
        } else {
            Err(CheckError::new(format!("expected {description}")))
        }
    }
}
