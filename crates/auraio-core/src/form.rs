//! Lead capture form state.
//!
//! [`LeadForm`] is the value object a rendering session owns while the
//! visitor fills in the brief. It is only ever changed one field at a time,
//! serialized whole on submit, and reset after a confirmed submission.
//! A failed submission leaves it untouched so the visitor can retry.

use std::fmt;

use serde::Serialize;

/// Message shown after a lead was recorded.
pub const CONFIRMATION_MESSAGE: &str =
    "Thanks! Your brief has been recorded. Our team will reach out to you soon.";

/// Fallback when no error text is available at all.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A text field of the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    WebsiteType,
    Budget,
    Goals,
    Timeline,
}

impl FormField {
    /// Every text field, in form order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Company,
        Self::WebsiteType,
        Self::Budget,
        Self::Goals,
        Self::Timeline,
    ];

    /// The JSON key used for this field in the request body.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::WebsiteType => "websiteType",
            Self::Budget => "budget",
            Self::Goals => "goals",
            Self::Timeline => "timeline",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Form state for one rendering session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    name: String,
    email: String,
    company: String,
    website_type: String,
    budget: String,
    goals: String,
    timeline: String,
    updates: bool,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            website_type: String::new(),
            budget: String::new(),
            goals: String::new(),
            timeline: String::new(),
            updates: true,
        }
    }
}

impl LeadForm {
    /// A fresh form: every text field empty, `updates` checked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a text field.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::WebsiteType => &self.website_type,
            FormField::Budget => &self.budget,
            FormField::Goals => &self.goals,
            FormField::Timeline => &self.timeline,
        }
    }

    /// Replace one text field, leaving every other field as it was.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::WebsiteType => &mut self.website_type,
            FormField::Budget => &mut self.budget,
            FormField::Goals => &mut self.goals,
            FormField::Timeline => &mut self.timeline,
        };
        *slot = value.into();
    }

    /// Whether the visitor asked for product updates.
    #[must_use]
    pub fn updates(&self) -> bool {
        self.updates
    }

    /// Toggle the product-updates checkbox.
    pub fn set_updates(&mut self, updates: bool) {
        self.updates = updates;
    }

    /// Restore every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the form still holds its initial values.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// The full state as the JSON request body.
    #[must_use]
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "company": self.company,
            "websiteType": self.website_type,
            "budget": self.budget,
            "goals": self.goals,
            "timeline": self.timeline,
            "updates": self.updates,
        })
    }

    /// Apply the result of a submission: reset on confirmation, keep the
    /// entered data on failure.
    pub fn apply(&mut self, outcome: &SubmissionOutcome) {
        if outcome.is_confirmed() {
            self.reset();
        }
    }
}

/// What the visitor is told after pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The lead was recorded under `id`.
    Confirmed { id: String },
    /// The submission failed; `reason` is the best available error text.
    Failed { reason: String },
}

impl SubmissionOutcome {
    /// Build a failure from whatever error text is available, most specific
    /// first: the response's `error` field, the HTTP status reason, then the
    /// transport error. Blank candidates are skipped; with none left the
    /// reason is [`UNKNOWN_ERROR`].
    #[must_use]
    pub fn failed(candidates: &[Option<&str>]) -> Self {
        let reason = candidates
            .iter()
            .flatten()
            .map(|text| text.trim())
            .find(|text| !text.is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_owned();
        Self::Failed { reason }
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    /// User-facing message for this outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Confirmed { .. } => CONFIRMATION_MESSAGE.to_owned(),
            Self::Failed { reason } => format!("Failed to submit: {reason}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        let mut form = LeadForm::new();
        form.set(FormField::Name, "Jane Doe");
        form.set(FormField::Email, "jane@x.com");
        form.set(FormField::Goals, "More leads");
        form.set_updates(false);
        form
    }

    #[test]
    fn new_form_has_empty_fields_and_updates_checked() {
        let form = LeadForm::new();
        for field in FormField::ALL {
            assert_eq!(form.get(field), "", "{field} should start empty");
        }
        assert!(form.updates());
        assert!(form.is_pristine());
    }

    #[test]
    fn set_touches_only_one_field() {
        let mut form = filled();
        let before = form.clone();
        form.set(FormField::Company, "AuraIO");

        for field in FormField::ALL {
            if field == FormField::Company {
                assert_eq!(form.get(field), "AuraIO");
            } else {
                assert_eq!(form.get(field), before.get(field));
            }
        }
        assert_eq!(form.updates(), before.updates());
    }

    #[test]
    fn payload_contains_every_field_with_camel_case_keys() {
        let payload = filled().to_payload();
        let object = payload.as_object().unwrap();

        assert_eq!(object.len(), 8);
        assert_eq!(payload["name"], "Jane Doe");
        assert_eq!(payload["websiteType"], "");
        assert_eq!(payload["updates"], false);
        assert_eq!(payload, serde_json::to_value(filled()).unwrap());
    }

    #[test]
    fn confirmed_outcome_resets_the_form() {
        let mut form = filled();
        let outcome = SubmissionOutcome::Confirmed { id: "abc".to_owned() };
        form.apply(&outcome);

        assert!(form.is_pristine());
        assert_eq!(outcome.message(), CONFIRMATION_MESSAGE);
    }

    #[test]
    fn failed_outcome_keeps_the_entered_data() {
        let mut form = filled();
        let outcome = SubmissionOutcome::failed(&[Some("name and email are required")]);
        form.apply(&outcome);

        assert_eq!(form, filled());
        assert_eq!(
            outcome.message(),
            "Failed to submit: name and email are required"
        );
    }

    #[test]
    fn failure_reason_prefers_the_first_non_blank_candidate() {
        let outcome = SubmissionOutcome::failed(&[None, Some("  "), Some("Bad Gateway")]);
        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                reason: "Bad Gateway".to_owned()
            }
        );
    }

    #[test]
    fn failure_without_any_text_is_unknown() {
        let outcome = SubmissionOutcome::failed(&[None, Some("")]);
        assert_eq!(outcome.message(), "Failed to submit: Unknown error");
    }

    #[test]
    fn field_displays_as_its_payload_key() {
        assert_eq!(FormField::WebsiteType.to_string(), "websiteType");
        for field in FormField::ALL {
            assert_eq!(field.to_string(), field.key());
        }
    }
}
