//! Rule-based field validation for FieldGuard
//!
//! Register each field of a record with a snapshot of its value and an
//! ordered list of rules, run one pass, and inspect the collected failures.
//!
//! # Examples
//!
//! ## Basic Validation
//!
//! ```
//! use fieldguard_validation::{StructValidator, match_regex, min_length, required};
//!
//! let mut validator = StructValidator::new();
//! validator
//!     .add_field("Name", "", [required(), min_length(3)])
//!     .add_field(
//!         "Email",
//!         "invalid_email",
//!         [required(), match_regex(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap()],
//!     )
//!     .add_field("Age", 25, [required()]);
//!
//! let errors = validator.validate();
//! assert!(errors.has_failures());
//! assert_eq!(errors.len(), 3);
//! println!("{}", errors.render());
//! ```
//!
//! ## Conditional Rules
//!
//! ```
//! use fieldguard_validation::{StructValidator, conditional, min_length};
//!
//! let name = "admin".to_string();
//! let is_regular_user = {
//!     let name = name.clone();
//!     move || name != "admin"
//! };
//!
//! let mut validator = StructValidator::new();
//! validator.add_field("Name", &name, [conditional(is_regular_user, min_length(6))]);
//! assert!(!validator.validate().has_failures());
//! ```
//!
//! ## Stop on First Failure
//!
//! ```
//! use fieldguard_validation::{StructValidator, min_value, required};
//!
//! let mut validator = StructValidator::builder()
//!     .stop_on_first_failure(true)
//!     .build();
//! validator
//!     .add_field("Name", "", [required()])
//!     .add_field("Age", 3, [min_value(18)]);
//!
//! assert_eq!(validator.validate().len(), 1);
//! ```

mod config;
mod errors;
mod rules;
mod session;
mod traits;
mod validators;
mod value;

pub use config::*;
pub use errors::*;
pub use rules::*;
pub use session::*;
pub use traits::*;
pub use validators::*;
pub use value::*;
