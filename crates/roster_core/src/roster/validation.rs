//! Draft validation.
//!
//! Field rules are evaluated independently and all failures are collected,
//! so a form can flag every bad field in one pass. For a single field, a
//! later rule overwrites an earlier one; the required-message only survives
//! when no other rule fired for that field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{DraftField, PlayerDraft};

pub const MSG_FIRST_NAME_REQUIRED: &str = "First name is required.";
pub const MSG_FIRST_NAME_INVALID: &str = "Please enter a correct first name.";
pub const MSG_LAST_NAME_REQUIRED: &str = "Last name is required.";
pub const MSG_LAST_NAME_INVALID: &str = "Please enter a correct last name.";
pub const MSG_SCORE_REQUIRED: &str = "Score is required.";
pub const MSG_SCORE_INTERVAL: &str = "Score must be in interval 0-100.";

/// Per-field validation outcome for a whole draft.
///
/// An empty map means the draft is valid. Keys are ordered so rendering and
/// serialization are deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<DraftField, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<DraftField, String> {
        &self.errors
    }

    fn flag(&mut self, field: DraftField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Draft validation utility.
pub struct DraftValidator;

impl DraftValidator {
    /// Validate a whole draft, collecting every field failure.
    pub fn validate(draft: &PlayerDraft) -> ValidationReport {
        let mut report = ValidationReport::default();
        Self::check_name(
            &draft.first_name,
            DraftField::FirstName,
            MSG_FIRST_NAME_REQUIRED,
            MSG_FIRST_NAME_INVALID,
            &mut report,
        );
        Self::check_name(
            &draft.last_name,
            DraftField::LastName,
            MSG_LAST_NAME_REQUIRED,
            MSG_LAST_NAME_INVALID,
            &mut report,
        );
        Self::check_score(&draft.score, &mut report);
        report
    }

    /// Required (non-empty after trimming) and letters-only. The letters
    /// rule looks at the raw value, so "John " is flagged as invalid rather
    /// than silently trimmed.
    fn check_name(
        raw: &str,
        field: DraftField,
        required_msg: &str,
        invalid_msg: &str,
        report: &mut ValidationReport,
    ) {
        if raw.trim().is_empty() {
            report.flag(field, required_msg);
        }
        if !raw.is_empty() && !is_letters(raw) {
            report.flag(field, invalid_msg);
        }
    }

    /// Required, then parsed to an integer and range-checked against 0..=100.
    /// Anything non-empty that fails to parse gets the interval message.
    fn check_score(raw: &str, report: &mut ValidationReport) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            report.flag(DraftField::Score, MSG_SCORE_REQUIRED);
            return;
        }
        match trimmed.parse::<i64>() {
            Ok(score) if (0..=100).contains(&score) => {}
            _ => report.flag(DraftField::Score, MSG_SCORE_INTERVAL),
        }
    }
}

/// One or more ASCII letters, nothing else.
fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}
