// Per-field rule lists

use crate::{FailureCollector, FieldValue, Outcome, SharedRule};
use tracing::trace;

/// A captured value and the rules that apply to it, in registration order
#[derive(Clone)]
pub struct FieldValidator {
    value: FieldValue,
    rules: Vec<SharedRule>,
}

impl FieldValidator {
    /// Create a validator for a snapshot of `value`
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, rule: SharedRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules, keeping their order
    pub fn extend(&mut self, rules: impl IntoIterator<Item = SharedRule>) {
        self.rules.extend(rules);
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn rules(&self) -> &[SharedRule] {
        &self.rules
    }

    /// Evaluate every rule against the captured value
    ///
    /// With `stop_on_failure` the loop returns at the first failing rule.
    /// Returns [`Outcome::Fail`] if any evaluated rule failed.
    pub fn validate(
        &self,
        field: &str,
        collector: &mut FailureCollector,
        stop_on_failure: bool,
    ) -> Outcome {
        let mut outcome = Outcome::Pass;

        for rule in &self.rules {
            let result = rule.evaluate(field, &self.value, collector);
            trace!(field = %field, rule = rule.name(), outcome = ?result, "Evaluated rule");

            if result.is_fail() {
                outcome = Outcome::Fail;
                if stop_on_failure {
                    break;
                }
            }
        }

        outcome
    }
}

impl std::fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValidator")
            .field("value", &self.value)
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
