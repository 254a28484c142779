//! Lead intake schema.
//!
//! A [`LeadSubmission`] is the raw body as it arrives: every field is an
//! untyped JSON value. [`LeadSubmission::validate`] checks it against the
//! intake schema and produces a normalized [`NewLead`]:
//!
//! - `name` and `email` must be non-empty strings;
//! - `company`, `websiteType`, `budget`, `goals`, `timeline` are optional
//!   strings, stored as `None` when absent, null or empty;
//! - `updates` is coerced with [`is_truthy`].
//!
//! Nothing else is checked. In particular `email` is free text.

use auraio_storage::NewLead;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;

/// Raw lead payload. Unknown keys are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub company: Value,
    #[serde(default)]
    pub website_type: Value,
    #[serde(default)]
    pub budget: Value,
    #[serde(default)]
    pub goals: Value,
    #[serde(default)]
    pub timeline: Value,
    #[serde(default)]
    pub updates: Value,
}

impl LeadSubmission {
    /// Parse a request body.
    ///
    /// A body that is valid JSON but not an object (`null`, an array, a
    /// string) yields an empty submission, which then fails validation on
    /// the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedJson`] if the body is not JSON.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body).map_err(ValidationError::MalformedJson)?;
        Ok(Self::from_value(value))
    }

    /// Build a submission from an already-parsed JSON value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if value.is_object() {
            // Every field defaults to `Value::Null`, so an object always fits.
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Validate and normalize into a record ready for the store.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequired`] if `name` or `email` is
    /// not a non-empty string, or [`ValidationError::NotAString`] if an
    /// optional text field holds a number, boolean, array or object.
    pub fn validate(self) -> Result<NewLead, ValidationError> {
        let (Some(name), Some(email)) = (required_text(self.name), required_text(self.email))
        else {
            return Err(ValidationError::MissingRequired);
        };

        Ok(NewLead {
            name,
            email,
            company: optional_text("company", self.company)?,
            website_type: optional_text("websiteType", self.website_type)?,
            budget: optional_text("budget", self.budget)?,
            goals: optional_text("goals", self.goals)?,
            timeline: optional_text("timeline", self.timeline)?,
            updates: is_truthy(&self.updates),
        })
    }
}

/// Truthiness of a JSON value, as used for the `updates` flag.
///
/// | value | result |
/// |---|---|
/// | absent / `null` | `false` |
/// | boolean | itself |
/// | number | `false` only for zero |
/// | string | `false` only when empty (`"false"` is truthy) |
/// | array / object | `true` |
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn optional_text(field: &'static str, value: Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        _ => Err(ValidationError::NotAString { field }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submit(value: Value) -> Result<NewLead, ValidationError> {
        LeadSubmission::from_value(value).validate()
    }

    #[test]
    fn minimal_submission_normalizes_optionals_to_none() {
        let lead = submit(json!({"name": "Jane Doe", "email": "jane@x.com"})).unwrap();

        assert_eq!(lead.name, "Jane Doe");
        assert_eq!(lead.email, "jane@x.com");
        assert_eq!(lead.company, None);
        assert_eq!(lead.website_type, None);
        assert_eq!(lead.budget, None);
        assert_eq!(lead.goals, None);
        assert_eq!(lead.timeline, None);
        assert!(!lead.updates);
    }

    #[test]
    fn full_form_payload_is_kept() {
        let lead = submit(json!({
            "name": "Anurag",
            "email": "a@auraio.dev",
            "company": "AuraIO",
            "websiteType": "SaaS",
            "budget": "3000",
            "goals": "Launch MVP",
            "timeline": "3-4 weeks",
            "updates": true,
        }))
        .unwrap();

        assert_eq!(lead.company.as_deref(), Some("AuraIO"));
        assert_eq!(lead.website_type.as_deref(), Some("SaaS"));
        assert_eq!(lead.budget.as_deref(), Some("3000"));
        assert_eq!(lead.goals.as_deref(), Some("Launch MVP"));
        assert_eq!(lead.timeline.as_deref(), Some("3-4 weeks"));
        assert!(lead.updates);
    }

    #[test]
    fn empty_optional_strings_become_none() {
        let lead = submit(json!({
            "name": "Jane",
            "email": "jane@x.com",
            "company": "",
            "websiteType": "",
            "budget": null,
            "goals": "",
            "timeline": "",
        }))
        .unwrap();

        assert_eq!(lead.company, None);
        assert_eq!(lead.website_type, None);
        assert_eq!(lead.budget, None);
        assert_eq!(lead.goals, None);
        assert_eq!(lead.timeline, None);
    }

    #[test]
    fn missing_or_falsy_required_fields_are_rejected() {
        let cases = [
            json!({"email": "a@b.com"}),
            json!({"name": "Jane"}),
            json!({"name": "", "email": "a@b.com"}),
            json!({"name": "Jane", "email": ""}),
            json!({"name": null, "email": "a@b.com"}),
            json!({"name": "Jane", "email": null}),
            json!({"name": 42, "email": "a@b.com"}),
            json!({}),
        ];

        for case in cases {
            let err = submit(case.clone()).unwrap_err();
            assert!(
                matches!(err, ValidationError::MissingRequired),
                "expected MissingRequired for {case}"
            );
            assert_eq!(err.to_string(), "name and email are required");
        }
    }

    #[test]
    fn non_object_bodies_fail_on_required_fields() {
        for body in [json!(null), json!([]), json!("Jane"), json!(7)] {
            assert!(matches!(submit(body), Err(ValidationError::MissingRequired)));
        }
    }

    #[test]
    fn email_format_is_not_checked() {
        let lead = submit(json!({"name": "Jane", "email": "not an email"})).unwrap();
        assert_eq!(lead.email, "not an email");
    }

    #[test]
    fn non_string_optional_field_is_rejected() {
        let err = submit(json!({"name": "Jane", "email": "j@x.com", "budget": 3000})).unwrap_err();
        assert!(matches!(err, ValidationError::NotAString { field: "budget" }));
        assert_eq!(err.to_string(), "budget must be a string");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let lead = submit(json!({"name": "Jane", "email": "j@x.com", "utm": "x"})).unwrap();
        assert_eq!(lead.name, "Jane");
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = LeadSubmission::from_slice(b"{not json").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedJson(_)));
        assert_eq!(err.to_string(), "invalid JSON body");
    }

    #[test]
    fn updates_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!(true)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-2.5)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn updates_is_always_a_boolean_on_the_record() {
        let absent = submit(json!({"name": "J", "email": "e"})).unwrap();
        let string = submit(json!({"name": "J", "email": "e", "updates": "on"})).unwrap();
        let boolean = submit(json!({"name": "J", "email": "e", "updates": false})).unwrap();

        assert!(!absent.updates);
        assert!(string.updates);
        assert!(!boolean.updates);
    }
}
