// crates/object-assert-core/src/runtime/adapters.rs
// ============================================================================
// Module: Execution Adapters
// Description: Test-harness entry points over the verification context.
// Purpose: Expose one run routine under apply, import, and in-place shapes.
// Dependencies: crate::{core, interfaces, runtime::context}
// ============================================================================

//! ## Overview
//! Each adapter is a thin shape conversion around the context's run routine:
//! the apply and import hooks ignore the harness state they receive and
//! return the run result, while the in-place verifiers hand failures to a
//! [`Reporter`] that stops the test.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ObjectIdentifier;
use crate::core::VerificationError;
use crate::interfaces::AdapterKind;
use crate::interfaces::ImportStateCheckFunc;
use crate::interfaces::ImportStateCheckFuncProvider;
use crate::interfaces::InPlaceClientVerifier;
use crate::interfaces::InPlaceVerifier;
use crate::interfaces::InstanceState;
use crate::interfaces::Reporter;
use crate::interfaces::ResourceState;
use crate::interfaces::TestCheckFunc;
use crate::interfaces::TestCheckFuncProvider;
use crate::runtime::context::VerificationContext;

// ============================================================================
// SECTION: Hook Adapters
// ============================================================================

impl<T, I, C> TestCheckFuncProvider for VerificationContext<T, I, C>
where
    I: ObjectIdentifier,
{
    fn to_test_check_func(&self) -> TestCheckFunc<'_> {
        Box::new(move |_state: &ResourceState| self.run(AdapterKind::PreApply, None))
    }
}

impl<T, I, C> ImportStateCheckFuncProvider for VerificationContext<T, I, C>
where
    I: ObjectIdentifier,
{
    fn to_import_state_check_func(&self) -> ImportStateCheckFunc<'_> {
        Box::new(move |_states: &[InstanceState]| self.run(AdapterKind::Import, None))
    }
}

// ============================================================================
// SECTION: In-Place Adapters
// ============================================================================

impl<T, I, C> InPlaceVerifier for VerificationContext<T, I, C>
where
    I: ObjectIdentifier,
{
    fn verify_all(&self, reporter: &mut dyn Reporter) {
        if let Err(err) = self.run(AdapterKind::InPlace, None) {
            reporter.fail_now(&err);
        }
    }
}

impl<T, I, C> InPlaceClientVerifier<C> for VerificationContext<T, I, C>
where
    I: ObjectIdentifier,
{
    fn verify_all_with_client(&self, reporter: &mut dyn Reporter, client: Option<&C>) {
        if let Err(err) = self.run(AdapterKind::InPlaceWithClient, client) {
            reporter.fail_now(&err);
        }
    }
}

// ============================================================================
// SECTION: Reporters
// ============================================================================

/// Reporter for `#[test]` functions: panics with the full error text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    #[allow(clippy::panic, reason = "Stopping the test is the reporter contract.")]
    fn fail_now(&mut self, error: &VerificationError) {
        panic!("verification failed:\n{error}");
    }
}
