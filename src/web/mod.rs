//! Web framework integration surface.
//!
//! This module is the boundary between HTTP frameworks and the rule engine.
//! Frameworks decode form bodies and query strings themselves; this module
//! only defines how the decoded values are handed over.
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: No framework-specific code lives here.
//!    Integrations implement [`ExtractFormValues`] for their own types.
//!
//! 2. **Multi-valued by Default**: Every parameter maps to a list so repeated
//!    names (`?tag=a&tag=b`) reach plural rules intact. Single-valued rules
//!    reject repeated names instead of picking one.
//!
//! 3. **Values Untouched**: Values arrive exactly as decoded. Trimming and
//!    normalization are not performed.
//!
//! # Example Flow
//!
//! ```
//! use form_extract::web::FormValues;
//! use form_extract::{FieldType, Rule, RuleSet, Schema, Value};
//!
//! // 1. Framework code collects decoded pairs
//! let form: FormValues = [("age", "30"), ("tag", "a"), ("tag", "b")].into_iter().collect();
//!
//! // 2. Extract against the rules
//! let rules = RuleSet::new(
//!     Schema::new()
//!         .with_field("age", Rule::new(FieldType::Int).required().min(18))
//!         .with_field("tag", Rule::new(FieldType::Strings).max_amt(5)),
//! );
//! let output = rules.extract_form(&form).expect("form is valid");
//!
//! assert_eq!(output["age"], Value::Int(30));
//! ```

mod adapter;
mod extract;

pub use adapter::FormValues;
pub use extract::ExtractFormValues;
