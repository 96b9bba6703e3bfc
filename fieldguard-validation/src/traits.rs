// Validation traits

use crate::{FailureCollector, FieldValue};
use std::sync::Arc;

/// Local verdict of one rule evaluation
///
/// A `Fail` only drives stop-on-first-failure; the failure itself is
/// already recorded in the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn is_pass(self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_fail(self) -> bool {
        matches!(self, Outcome::Fail)
    }
}

/// A unit of validation logic for one field
///
/// On failure a rule appends exactly one record to `collector` and returns
/// [`Outcome::Fail`]. Rules must not have other side effects.
pub trait Rule: Send + Sync {
    /// Evaluate the rule against a field's captured value
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome;

    /// Get rule name
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Rules are shared so one instance can be attached to many fields
pub type SharedRule = Arc<dyn Rule>;

impl<F> Rule for F
where
    F: Fn(&str, &FieldValue, &mut FailureCollector) -> Outcome + Send + Sync,
{
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        self(field, value, collector)
    }
}

/// Trait for record types that know how to validate themselves
pub trait Validate {
    /// Validate the value and return the collected failures if any
    fn validate(&self) -> Result<(), FailureCollector>;
}
