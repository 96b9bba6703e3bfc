// Struct-level validation

use crate::{
    FailureCollector, FieldValidator, FieldValue, SharedRule, StructValidatorBuilder,
    ValidatorConfig,
};
use indexmap::IndexMap;
use tracing::debug;

/// Registry of the fields of one record under validation
///
/// Fields are validated in the order they were first registered.
#[derive(Debug, Clone, Default)]
pub struct StructValidator {
    fields: IndexMap<String, FieldValidator>,
    config: ValidatorConfig,
}

impl StructValidator {
    /// Create a validator that collects every failure
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator from a configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            fields: IndexMap::new(),
            config,
        }
    }

    /// Create a new validator builder
    pub fn builder() -> StructValidatorBuilder {
        StructValidatorBuilder::new()
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Toggle stop-on-first-failure mode
    pub fn set_stop_on_first_failure(&mut self, stop: bool) {
        self.config.stop_on_first_failure = stop;
    }

    /// Register a field with a snapshot of its value and its rules
    ///
    /// Registering an existing name replaces its entry.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        rules: impl IntoIterator<Item = SharedRule>,
    ) -> &mut Self {
        let mut field = FieldValidator::new(value);
        field.extend(rules);
        self.fields.insert(name.into(), field);
        self
    }

    /// Append `rules` to every listed field that is already registered
    ///
    /// Unknown names are skipped, not created.
    pub fn add_field_group<I, S>(&mut self, names: I, rules: &[SharedRule]) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            match self.fields.get_mut(name) {
                Some(field) => field.extend(rules.iter().cloned()),
                None => debug!(field = %name, "Skipping rule group for unregistered field"),
            }
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldValidator> {
        self.fields.get(name)
    }

    /// Registered field names in validation order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Run every rule of every field and collect the failures
    ///
    /// In stop-on-first-failure mode the pass ends at the first failing
    /// rule and the collector holds exactly that one failure.
    pub fn validate(&self) -> FailureCollector {
        let stop = self.config.stop_on_first_failure;
        debug!(
            fields = self.fields.len(),
            stop_on_first_failure = stop,
            "Starting validation pass"
        );

        let mut collector = FailureCollector::new();
        for (name, field) in &self.fields {
            if field.validate(name, &mut collector, stop).is_fail() && stop {
                debug!(field = %name, "Stopping validation at first failure");
                break;
            }
        }

        debug!(failures = collector.len(), "Validation pass complete");
        collector
    }

    /// Run [`validate`](Self::validate) and convert the report to a `Result`
    pub fn validate_into_result(&self) -> Result<(), FailureCollector> {
        self.validate().into_result()
    }
}
