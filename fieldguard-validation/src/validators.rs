// Built-in rules

use crate::errors::codes;
use crate::{
    FailureCollector, FieldGuardError, FieldValue, Outcome, Result, Rule, SharedRule,
    ValidationFailure,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

fn fail(
    collector: &mut FailureCollector,
    field: &str,
    message: impl Into<String>,
    code: u32,
    constraint: &str,
) -> Outcome {
    collector.push(
        ValidationFailure::new(field, message)
            .with_code(code)
            .with_constraint(constraint),
    );
    Outcome::Fail
}

// Presence

/// Value must be non-nil and, for strings, non-empty
#[derive(Debug, Clone, Default)]
pub struct Required {
    message: Option<String>,
}

impl Required {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default message; an empty message keeps the default
    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.is_empty()).then_some(message),
        }
    }
}

impl Rule for Required {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        let missing = match value {
            FieldValue::Nil => true,
            FieldValue::String(s) => s.is_empty(),
            _ => false,
        };
        if !missing {
            return Outcome::Pass;
        }

        match &self.message {
            Some(message) => fail(
                collector,
                field,
                message.clone(),
                codes::REQUIRED_CUSTOM,
                "required",
            ),
            None => fail(collector, field, "is required", codes::REQUIRED, "required"),
        }
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

// String length

/// String must have at least N characters
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl Rule for MinLength {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        let Some(s) = value.as_str() else {
            return fail(collector, field, "must be a string", codes::LENGTH_TYPE, "minLength");
        };
        if s.chars().count() < self.0 {
            return fail(
                collector,
                field,
                format!("must be at least {} characters long", self.0),
                codes::TOO_SHORT,
                "minLength",
            );
        }
        Outcome::Pass
    }

    fn name(&self) -> &'static str {
        "minLength"
    }
}

/// String must have at most N characters
#[derive(Debug, Clone, Copy)]
pub struct MaxLength(pub usize);

impl Rule for MaxLength {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        let Some(s) = value.as_str() else {
            return fail(collector, field, "must be a string", codes::LENGTH_TYPE, "maxLength");
        };
        if s.chars().count() > self.0 {
            return fail(
                collector,
                field,
                format!("must be at most {} characters long", self.0),
                codes::TOO_LONG,
                "maxLength",
            );
        }
        Outcome::Pass
    }

    fn name(&self) -> &'static str {
        "maxLength"
    }
}

// Integer magnitude

/// Integer must be at least N
#[derive(Debug, Clone, Copy)]
pub struct MinValue(pub i64);

impl Rule for MinValue {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        let Some(n) = value.as_int() else {
            return fail(collector, field, "must be an integer", codes::INTEGER_TYPE, "minValue");
        };
        if n < self.0 {
            return fail(
                collector,
                field,
                format!("must be at least {}", self.0),
                codes::TOO_SMALL,
                "minValue",
            );
        }
        Outcome::Pass
    }

    fn name(&self) -> &'static str {
        "minValue"
    }
}

/// Integer must be at most N
#[derive(Debug, Clone, Copy)]
pub struct MaxValue(pub i64);

impl Rule for MaxValue {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        let Some(n) = value.as_int() else {
            return fail(collector, field, "must be an integer", codes::INTEGER_TYPE, "maxValue");
        };
        if n > self.0 {
            return fail(
                collector,
                field,
                format!("must be at most {}", self.0),
                codes::TOO_LARGE,
                "maxValue",
            );
        }
        Outcome::Pass
    }

    fn name(&self) -> &'static str {
        "maxValue"
    }
}

// Format

/// String must match a pattern compiled once at construction
#[derive(Debug, Clone)]
pub struct MatchRegex(pub Regex);

impl MatchRegex {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| FieldGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self(regex))
    }
}

impl Rule for MatchRegex {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        let Some(s) = value.as_str() else {
            return fail(collector, field, "must be a string", codes::STRING_TYPE, "matches");
        };
        if !self.0.is_match(s) {
            return fail(collector, field, "format is invalid", codes::FORMAT_INVALID, "matches");
        }
        Outcome::Pass
    }

    fn name(&self) -> &'static str {
        "matches"
    }
}

/// String must be a valid email address
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmail;

impl Rule for IsEmail {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        let Some(s) = value.as_str() else {
            return fail(collector, field, "must be a string", codes::STRING_TYPE, "isEmail");
        };
        if !EMAIL_REGEX.is_match(s) {
            return fail(
                collector,
                field,
                "must be a valid email",
                codes::FORMAT_INVALID,
                "isEmail",
            );
        }
        Outcome::Pass
    }

    fn name(&self) -> &'static str {
        "isEmail"
    }
}

// Membership

/// String must equal one of the allowed literals
#[derive(Debug, Clone, Default)]
pub struct Enums(pub Vec<String>);

impl Rule for Enums {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        let Some(s) = value.as_str() else {
            return fail(collector, field, "must be a string", codes::STRING_TYPE, "enum");
        };
        if self.0.iter().any(|allowed| allowed == s) {
            return Outcome::Pass;
        }
        fail(collector, field, "value is not in enums", codes::NOT_IN_ENUM, "enum")
    }

    fn name(&self) -> &'static str {
        "enum"
    }
}

// Combinators

/// Runs the wrapped rule only while `predicate` returns true
///
/// The predicate is evaluated on every pass, so external state may change
/// which rules apply between runs.
pub struct Conditional<P> {
    predicate: P,
    rule: SharedRule,
}

impl<P> Conditional<P>
where
    P: Fn() -> bool + Send + Sync,
{
    pub fn new(predicate: P, rule: SharedRule) -> Self {
        Self { predicate, rule }
    }
}

impl<P> Rule for Conditional<P>
where
    P: Fn() -> bool + Send + Sync,
{
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        if (self.predicate)() {
            self.rule.evaluate(field, value, collector)
        } else {
            Outcome::Pass
        }
    }

    fn name(&self) -> &'static str {
        self.rule.name()
    }
}

/// Caller-defined rule with a name
pub struct Custom<F> {
    name: &'static str,
    check: F,
}

impl<F> Rule for Custom<F>
where
    F: Fn(&str, &FieldValue, &mut FailureCollector) -> Outcome + Send + Sync,
{
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        collector: &mut FailureCollector,
    ) -> Outcome {
        (self.check)(field, value, collector)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

// Factories

/// Value must be present
pub fn required() -> SharedRule {
    Arc::new(Required::new())
}

/// Value must be present, reported with `message`
pub fn required_with_message(message: impl Into<String>) -> SharedRule {
    Arc::new(Required::with_message(message))
}

pub fn min_length(min: usize) -> SharedRule {
    Arc::new(MinLength(min))
}

pub fn max_length(max: usize) -> SharedRule {
    Arc::new(MaxLength(max))
}

pub fn min_value(min: i64) -> SharedRule {
    Arc::new(MinValue(min))
}

pub fn max_value(max: i64) -> SharedRule {
    Arc::new(MaxValue(max))
}

/// Compile `pattern` once and match every value against it
pub fn match_regex(pattern: &str) -> Result<SharedRule> {
    Ok(Arc::new(MatchRegex::new(pattern)?))
}

pub fn is_email() -> SharedRule {
    Arc::new(IsEmail)
}

/// Value must equal one of `allowed`
pub fn enums<I, S>(allowed: I) -> SharedRule
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(Enums(allowed.into_iter().map(Into::into).collect()))
}

/// Gate `rule` behind a runtime predicate
pub fn conditional<P>(predicate: P, rule: SharedRule) -> SharedRule
where
    P: Fn() -> bool + Send + Sync + 'static,
{
    Arc::new(Conditional::new(predicate, rule))
}

/// Wrap a closure as a named rule
pub fn custom<F>(name: &'static str, check: F) -> SharedRule
where
    F: Fn(&str, &FieldValue, &mut FailureCollector) -> Outcome + Send + Sync + 'static,
{
    Arc::new(Custom { name, check })
}
