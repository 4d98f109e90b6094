// crates/object-assert-config/tests/audit_config.rs
// =============================================================================
// Module: Audit Config Tests
// Description: Audit sink selection, validation, and construction.
// Purpose: Ensure configured sinks receive verification events.
// =============================================================================
//! ## Overview
//! Integration tests for the `[audit]` section.

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

use std::fs;

use object_assert_config::AssertConfig;
use object_assert_config::AuditConfig;
use object_assert_config::AuditSinkKind;
use object_assert_core::AccountObjectIdentifier;
use object_assert_core::CheckError;
use object_assert_core::ObjectType;
use object_assert_core::VerificationContext;
use support::TestResult;
use support::ensure;

#[test]
fn empty_config_defaults_to_no_audit() -> TestResult {
    let config = AssertConfig::from_toml_str("")?;
    ensure(config == AssertConfig::default(), "empty config equals defaults")?;
    ensure(config.audit.sink == AuditSinkKind::None, "no sink by default")?;
    ensure(!config.audit.include_checks, "check events off by default")?;
    config.build_sink()?;
    Ok(())
}

#[test]
fn file_sink_requires_path() -> TestResult {
    let Err(err) = AssertConfig::from_toml_str("[audit]\nsink = \"file\"\n") else {
        return Err("expected missing path error".into());
    };
    ensure(
        err.to_string() == "invalid config: audit.path is required for the file sink",
        format!("unexpected {err}"),
    )?;
    Ok(())
}

#[test]
fn path_is_rejected_for_other_sinks() -> TestResult {
    let Err(err) = AssertConfig::from_toml_str("[audit]\nsink = \"stderr\"\npath = \"a.log\"\n")
    else {
        return Err("expected path rejection".into());
    };
    ensure(err.to_string().contains("only valid for the file sink"), format!("unexpected {err}"))?;
    Ok(())
}

#[test]
fn blank_path_is_rejected() -> TestResult {
    let config = AssertConfig {
        audit: AuditConfig {
            sink: AuditSinkKind::File,
            path: Some("   ".to_string()),
            include_checks: false,
        },
    };
    let Err(err) = config.validate() else {
        return Err("expected blank path rejection".into());
    };
    ensure(err.to_string().contains("audit.path must be non-empty"), format!("unexpected {err}"))?;
    ensure(config.build_sink().is_err(), "invalid config must not build a sink")?;
    Ok(())
}

#[test]
fn configured_file_sink_receives_events() -> TestResult {
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("audit.jsonl");
    let toml = format!(
        "[audit]\nsink = \"file\"\npath = \"{}\"\ninclude_checks = true\n",
        log_path.display()
    );
    let config = AssertConfig::from_toml_str(&toml)?;

    let context: VerificationContext<String, AccountObjectIdentifier> =
        VerificationContext::with_object(
            ObjectType::USER,
            AccountObjectIdentifier::new("alice"),
            "alice".to_string(),
        )
        .with_sink(config.build_sink()?)
        .with_check(|_object: &String| Err(CheckError::new("login disabled")));
    ensure(context.run_all(None).is_err(), "check should fail")?;

    let content = fs::read_to_string(&log_path)?;
    let lines: Vec<&str> = content.lines().collect();
    ensure(lines.len() == 2, format!("expected check and run lines, got {}", lines.len()))?;
    ensure(lines[0].contains("\"verification_check\""), "check event first")?;
    ensure(lines[1].contains("login disabled"), "run event carries the failure")?;
    Ok(())
}

#[test]
fn file_sink_without_path_builds_nothing() -> TestResult {
    let config = AssertConfig {
        audit: AuditConfig {
            sink: AuditSinkKind::File,
            path: None,
            include_checks: true,
        },
    };
    let Err(err) = config.build_sink() else {
        return Err("file sink without a path must not build".into());
    };
    ensure(
        err.to_string() == "invalid config: audit.path is required for the file sink",
        format!("unexpected {err}"),
    )?;
    Ok(())
}
