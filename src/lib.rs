// FieldGuard - declarative per-field validation
//
// Re-exports the rule engine and a prelude of the most used items.

// Re-export the rule engine
pub use fieldguard_validation::*;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FailureCollector,
        FieldValue,
        Outcome,
        Rule,
        SharedRule,
        StructValidator,
        Validate,
        ValidationFailure,
        ValidatorConfig,
        codes,
        conditional,
        custom,
        enums,
        is_email,
        match_regex,
        max_length,
        max_value,
        min_length,
        min_value,
        required,
        required_with_message,
    };
}
