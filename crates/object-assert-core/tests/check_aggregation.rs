// crates/object-assert-core/tests/check_aggregation.rs
// ============================================================================
// Module: Check Aggregation Tests
// Description: Ordering, positions, and message format of aggregated failures.
// Purpose: Ensure every failing check is reported with its location.
// ============================================================================
//! ## Overview
//! Integration tests for running accumulated checks and joining failures.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use std::cell::RefCell;
use std::rc::Rc;

use object_assert_core::AggregatedError;
use object_assert_core::CheckError;
use object_assert_core::CheckFailure;
use object_assert_core::DatabaseObjectIdentifier;
use object_assert_core::ObjectType;
use object_assert_core::SchemaObjectIdentifier;
use object_assert_core::VerificationContext;
use object_assert_core::VerificationError;
use support::TestResult;
use support::ensure;

// ========================================================================
// Fixtures
// ========================================================================

/// Remote object with two string fields.
#[derive(Debug, Clone)]
struct Fields {
    /// Field X.
    x: String,
    /// Field Y.
    y: String,
}

/// Builds a context over a pre-fetched `Fields` object.
fn fields_context(x: &str, y: &str) -> VerificationContext<Fields, SchemaObjectIdentifier> {
    VerificationContext::with_object(
        ObjectType::SECRET,
        SchemaObjectIdentifier::new("db", "schema", "secret1"),
        Fields {
            x: x.to_string(),
            y: y.to_string(),
        },
    )
}

/// Check that field X is set.
fn x_is_set(object: &Fields) -> Result<(), CheckError> {
    if object.x.is_empty() { Err(CheckError::new("field X is empty")) } else { Ok(()) }
}

/// Check that field Y is set.
fn y_is_set(object: &Fields) -> Result<(), CheckError> {
    if object.y.is_empty() { Err(CheckError::new("field Y is empty")) } else { Ok(()) }
}

/// Extracts the aggregated failures from a run result.
fn expect_checks_error(result: Result<(), VerificationError>) -> TestResult<AggregatedError> {
    match result {
        Err(VerificationError::Checks(aggregated)) => Ok(aggregated),
        Err(other) => Err(format!("expected check failures, got {other}").into()),
        Ok(()) => Err("expected check failures, run passed".into()),
    }
}

// ========================================================================
// Tests
// ========================================================================

#[test]
fn single_failure_reports_position_and_identifier() -> TestResult {
    let mut context = fields_context("value", "");
    context.add_check(x_is_set);
    context.add_check(y_is_set);

    let aggregated = expect_checks_error(context.run_all(None))?;
    ensure(aggregated.len() == 1, format!("expected one failure, got {}", aggregated.len()))?;
    ensure(
        aggregated.to_string()
            == "object SECRET[\"db\".\"schema\".\"secret1\"] assertion [2/2]: failed with error: \
                field Y is empty",
        format!("unexpected message {aggregated}"),
    )?;
    Ok(())
}

#[test]
fn every_failure_is_reported_in_order() -> TestResult {
    let context = fields_context("", "")
        .with_check(x_is_set)
        .with_check(|_object: &Fields| Ok(()))
        .with_check(y_is_set);

    let Err(err) = context.run_all(None) else {
        return Err("expected failures".into());
    };
    let positions: Vec<usize> = err.failures().iter().map(|failure| failure.position).collect();
    ensure(positions == vec![1, 3], format!("unexpected positions {positions:?}"))?;
    ensure(err.failures().iter().all(|failure| failure.total == 3), "total must be 3")?;

    let lines: Vec<String> = err.to_string().lines().map(str::to_string).collect();
    ensure(lines.len() == 2, "one line per failure")?;
    ensure(lines[0].ends_with("[1/3]: failed with error: field X is empty"), "first line")?;
    ensure(lines[1].ends_with("[3/3]: failed with error: field Y is empty"), "second line")?;
    Ok(())
}

#[test]
fn every_check_runs_after_a_failure() -> TestResult {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut context = fields_context("a", "b");
    for index in 1 ..= 4 {
        let seen = Rc::clone(&seen);
        context.add_check(move |_object: &Fields| {
            seen.borrow_mut().push(index);
            if index % 2 == 0 { Err(CheckError::new(format!("check {index}"))) } else { Ok(()) }
        });
    }

    let aggregated = expect_checks_error(context.run_all(None))?;
    ensure(*seen.borrow() == vec![1, 2, 3, 4], "checks must run in insertion order")?;
    ensure(aggregated.len() == 2, "two checks should fail")?;
    let messages: Vec<&str> =
        aggregated.failures().iter().map(|failure| failure.source.message()).collect();
    ensure(messages == vec!["check 2", "check 4"], format!("unexpected messages {messages:?}"))?;
    Ok(())
}

#[test]
fn zero_checks_pass() -> TestResult {
    let context = fields_context("", "");
    ensure(context.check_count() == 0, "no checks expected")?;
    context.run_all(None)?;
    Ok(())
}

#[test]
fn passing_checks_yield_success() -> TestResult {
    let context = fields_context("a", "b").with_check(x_is_set).with_check(y_is_set);
    ensure(context.check_count() == 2, "two checks expected")?;
    context.run_all(None)?;
    Ok(())
}

#[test]
fn type_tag_with_space_is_rendered_verbatim() -> TestResult {
    let context: VerificationContext<Fields, DatabaseObjectIdentifier> =
        VerificationContext::with_object(
            ObjectType::SESSION_POLICY,
            DatabaseObjectIdentifier::new("db", "policy"),
            Fields {
                x: String::new(),
                y: "set".to_string(),
            },
        )
        .with_check(x_is_set)
        .with_check(y_is_set);

    let aggregated = expect_checks_error(context.run_all(None))?;
    let expected = CheckFailure {
        object_type: ObjectType::SESSION_POLICY,
        identifier: "\"db\".\"policy\"".to_string(),
        position: 1,
        total: 2,
        source: CheckError::new("field X is empty"),
    };
    ensure(aggregated.failures() == [expected], "failure fields mismatch")?;
    ensure(
        aggregated.to_string()
            == "object SESSION POLICY[\"db\".\"policy\"] assertion [1/2]: failed with error: \
                field X is empty",
        format!("unexpected message {aggregated}"),
    )?;
    Ok(())
}

#[test]
fn aggregated_error_requires_failures() -> TestResult {
    ensure(AggregatedError::from_failures(Vec::new()).is_none(), "empty aggregation")?;
    Ok(())
}
