// crates/object-assert-core/src/runtime/context.rs
// ============================================================================
// Module: Verification Context
// Description: Per-object container of identifier, resolution strategy, and checks.
// Purpose: Resolve one remote object lazily and run every accumulated check on it.
// Dependencies: crate::{core, interfaces, runtime::audit}
// ============================================================================

//! ## Overview
//! A [`VerificationContext`] is built once per target object, collects checks
//! during test definition, and is executed by one or more adapters.
//!
//! Resolution order at execution time:
//! 1. a pre-fetched object, never re-fetched,
//! 2. a stateless provider,
//! 3. a client-bound provider, which requires a client handle,
//! 4. otherwise a configuration error naming the type tag and identifier.
//!
//! Each run resolves independently; nothing is cached between runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ops::Deref;
use std::sync::Arc;

use crate::core::AggregatedError;
use crate::core::CheckError;
use crate::core::CheckFailure;
use crate::core::ObjectIdentifier;
use crate::core::ObjectType;
use crate::core::ProviderError;
use crate::core::VerificationError;
use crate::interfaces::AdapterKind;
use crate::interfaces::Check;
use crate::interfaces::CheckEvent;
use crate::interfaces::ClientObjectProvider;
use crate::interfaces::ObjectProvider;
use crate::interfaces::ResolutionKind;
use crate::interfaces::RunOutcome;
use crate::interfaces::VerificationEvent;
use crate::interfaces::VerificationSink;
use crate::runtime::audit::NoopVerificationSink;
use crate::runtime::audit::now_ms;

// ============================================================================
// SECTION: Resolved Object
// ============================================================================

/// Object produced by resolution.
#[derive(Debug)]
pub enum Resolved<'a, T> {
    /// Object bound at construction.
    Prefetched(&'a T),
    /// Object fetched by a provider for this run.
    Fetched(T),
}

impl<T> Resolved<'_, T> {
    /// Returns true when the object was bound at construction.
    #[must_use]
    pub const fn is_prefetched(&self) -> bool {
        matches!(self, Self::Prefetched(_))
    }
}

impl<T: Clone> Resolved<'_, T> {
    /// Returns an owned copy of the object.
    #[must_use]
    pub fn into_owned(self) -> T {
        match self {
            Self::Prefetched(object) => object.clone(),
            Self::Fetched(object) => object,
        }
    }
}

impl<T> Deref for Resolved<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Self::Prefetched(object) => *object,
            Self::Fetched(object) => object,
        }
    }
}

// ============================================================================
// SECTION: Verification Context
// ============================================================================

/// Accumulated checks for one remote object plus the means to obtain it.
///
/// `T` is the object type, `I` its identifier, and `C` the client handle
/// required by client-bound providers (unused otherwise).
///
/// # Invariants
/// - `id` and `object_type` never change after construction.
/// - `checks` is append-only and keeps insertion order.
/// - A pre-fetched object takes precedence over any provider.
pub struct VerificationContext<T, I, C = ()> {
    /// Logical type tag used in diagnostics.
    object_type: ObjectType,
    /// Identifier used for lookup and diagnostics.
    id: I,
    /// Object bound at construction.
    object: Option<T>,
    /// Stateless lookup strategy.
    provider: Option<ObjectProvider<'static, T, I>>,
    /// Lookup strategy resolved against a client handle at run time.
    client_provider: Option<ClientObjectProvider<T, I, C>>,
    /// Accumulated checks in insertion order.
    checks: Vec<Check<T>>,
    /// Audit sink for run and check events.
    sink: Arc<dyn VerificationSink>,
}

impl<T, I, C> VerificationContext<T, I, C>
where
    I: ObjectIdentifier,
{
    /// Creates a context with no object or provider bound.
    ///
    /// Running it fails with [`VerificationError::MissingSource`] until a
    /// source is bound with one of the `bind_*` methods.
    #[must_use]
    pub fn new(object_type: ObjectType, id: I) -> Self {
        Self {
            object_type,
            id,
            object: None,
            provider: None,
            client_provider: None,
            checks: Vec::new(),
            sink: Arc::new(NoopVerificationSink),
        }
    }

    /// Creates a context whose object is fetched lazily by `provider` on each run.
    #[must_use]
    pub fn with_provider<F>(object_type: ObjectType, id: I, provider: F) -> Self
    where
        F: Fn(&I) -> Result<T, ProviderError> + 'static,
    {
        Self::new(object_type, id).bind_provider(provider)
    }

    /// Creates a context whose provider is obtained from a client handle supplied at run time.
    #[must_use]
    pub fn with_client_provider<F>(object_type: ObjectType, id: I, provider: F) -> Self
    where
        F: for<'c> Fn(&'c C) -> ObjectProvider<'c, T, I> + 'static,
    {
        Self::new(object_type, id).bind_client_provider(provider)
    }

    /// Creates a context for an object that was already fetched.
    #[must_use]
    pub fn with_object(object_type: ObjectType, id: I, object: T) -> Self {
        Self::new(object_type, id).bind_object(object)
    }

    /// Binds a pre-fetched object; it wins over any provider.
    #[must_use]
    pub fn bind_object(mut self, object: T) -> Self {
        self.object = Some(object);
        self
    }

    /// Binds a stateless provider.
    #[must_use]
    pub fn bind_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn(&I) -> Result<T, ProviderError> + 'static,
    {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Binds a client-bound provider.
    #[must_use]
    pub fn bind_client_provider<F>(mut self, provider: F) -> Self
    where
        F: for<'c> Fn(&'c C) -> ObjectProvider<'c, T, I> + 'static,
    {
        self.client_provider = Some(Box::new(provider));
        self
    }

    /// Routes run and check events to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn VerificationSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Appends a check.
    pub fn add_check<F>(&mut self, check: F)
    where
        F: Fn(&T) -> Result<(), CheckError> + 'static,
    {
        self.checks.push(Box::new(check));
    }

    /// Appends a check and returns the context for chaining.
    #[must_use]
    pub fn with_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), CheckError> + 'static,
    {
        self.add_check(check);
        self
    }

    /// Returns the bound identifier.
    #[must_use]
    pub const fn identifier(&self) -> &I {
        &self.id
    }

    /// Returns the type tag.
    #[must_use]
    pub const fn object_type(&self) -> &ObjectType {
        &self.object_type
    }

    /// Returns the number of accumulated checks.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Returns the strategy a run would use, by precedence.
    #[must_use]
    pub const fn resolution_kind(&self) -> ResolutionKind {
        if self.object.is_some() {
            ResolutionKind::Object
        } else if self.provider.is_some() {
            ResolutionKind::Provider
        } else if self.client_provider.is_some() {
            ResolutionKind::ClientProvider
        } else {
            ResolutionKind::Unbound
        }
    }

    /// Obtains the object to check.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::MissingClient`] when only a client-bound
    /// provider is bound and `client` is `None`; the provider is not invoked.
    /// Returns [`VerificationError::Provider`] with the provider's error
    /// unchanged when the lookup fails. Returns
    /// [`VerificationError::MissingSource`] when nothing is bound.
    pub fn resolve(&self, client: Option<&C>) -> Result<Resolved<'_, T>, VerificationError> {
        if let Some(object) = &self.object {
            return Ok(Resolved::Prefetched(object));
        }
        if let Some(provider) = &self.provider {
            return Ok(Resolved::Fetched(provider(&self.id)?));
        }
        if let Some(client_provider) = &self.client_provider {
            let Some(client) = client else {
                return Err(VerificationError::MissingClient);
            };
            let provider = client_provider(client);
            return Ok(Resolved::Fetched(provider(&self.id)?));
        }
        Err(VerificationError::MissingSource {
            object_type: self.object_type.clone(),
            identifier: self.id.fully_qualified_name(),
        })
    }

    /// Resolves the object and runs every check against it.
    ///
    /// # Errors
    ///
    /// Returns the resolution error alone when the object cannot be obtained;
    /// no check runs in that case. Otherwise returns
    /// [`VerificationError::Checks`] holding one entry per failing check.
    pub fn run_all(&self, client: Option<&C>) -> Result<(), VerificationError> {
        self.run(AdapterKind::Direct, client)
    }

    /// Shared run routine behind `run_all` and every adapter.
    pub(crate) fn run(
        &self,
        adapter: AdapterKind,
        client: Option<&C>,
    ) -> Result<(), VerificationError> {
        let identifier = self.id.fully_qualified_name();
        let resolved = match self.resolve(client) {
            Ok(resolved) => resolved,
            Err(err) => {
                let result = Err(err);
                self.record_run(adapter, &identifier, &result);
                return result;
            }
        };
        let object: &T = &resolved;

        let total = self.checks.len();
        let records_checks = self.sink.records_checks();
        let mut failures = Vec::new();
        for (index, check) in self.checks.iter().enumerate() {
            let position = index + 1;
            let outcome = check(object);
            if records_checks {
                self.sink.record_check(&CheckEvent {
                    event: "verification_check",
                    timestamp_ms: now_ms(),
                    object_type: self.object_type.to_string(),
                    identifier: identifier.clone(),
                    position,
                    total,
                    passed: outcome.is_ok(),
                    message: outcome.as_ref().err().map(ToString::to_string),
                });
            }
            if let Err(source) = outcome {
                failures.push(CheckFailure {
                    object_type: self.object_type.clone(),
                    identifier: identifier.clone(),
                    position,
                    total,
                    source,
                });
            }
        }

        let result = AggregatedError::from_failures(failures)
            .map_or(Ok(()), |aggregated| Err(VerificationError::Checks(aggregated)));
        self.record_run(adapter, &identifier, &result);
        result
    }

    /// Emits the run summary event.
    fn record_run(
        &self,
        adapter: AdapterKind,
        identifier: &str,
        result: &Result<(), VerificationError>,
    ) {
        self.sink.record(&VerificationEvent {
            event: "verification_run",
            timestamp_ms: now_ms(),
            object_type: self.object_type.to_string(),
            identifier: identifier.to_string(),
            adapter,
            resolution: self.resolution_kind(),
            outcome: RunOutcome::from_result(result),
            checks_total: self.checks.len(),
            checks_failed: result.as_ref().err().map_or(0, |err| err.failures().len()),
            message: result.as_ref().err().map(ToString::to_string),
        });
    }
}
