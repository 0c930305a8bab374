//! Declarative field validation with full error aggregation.
//!
//! A [`Validator`] runs every applicable rule and collects all
//! failures; it never stops at the first one. Input types implement
//! [`Validate`] by listing their per-field rules. The HTTP layer
//! funnels required-presence and type gates through the same
//! accumulator, so those failures aggregate with the value rules.

use chrono::{DateTime, Utc};

use crate::error::{CampusError, CampusResult};

/// Per-request error accumulator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule failure verbatim.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Required string that must not be blank.
    pub fn not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.fail(format!("{field} should not be empty"));
        }
    }

    /// Minimum string length, with an optional message override.
    pub fn min_length(&mut self, field: &str, value: &str, min: usize, message: Option<&str>) {
        if value.chars().count() < min {
            match message {
                Some(message) => self.fail(message),
                None => self.fail(format!(
                    "{field} must be longer than or equal to {min} characters"
                )),
            }
        }
    }

    /// Minimum numeric value, with an optional message override.
    pub fn min_value(&mut self, field: &str, value: i64, min: i64, message: Option<&str>) {
        if value < min {
            match message {
                Some(message) => self.fail(message),
                None => self.fail(format!("{field} must not be less than {min}")),
            }
        }
    }

    /// Datetime bound against validation-time "now". The storage
    /// schema re-checks the same bound against write-time "now"; the
    /// two may disagree across a date boundary.
    pub fn not_later_than_now(&mut self, field: &str, value: DateTime<Utc>, message: Option<&str>) {
        if value > Utc::now() {
            match message {
                Some(message) => self.fail(message),
                None => self.fail(format!("{field} must not be later than current date")),
            }
        }
    }

    /// Recurse into an optional nested object's own rule set. Absent
    /// values are skipped entirely; child failures are prefixed with
    /// the field name.
    pub fn nested_opt<T: Validate>(&mut self, field: &str, value: Option<&T>) {
        let Some(value) = value else { return };
        let mut child = Validator::new();
        value.validate(&mut child);
        self.errors
            .extend(child.errors.into_iter().map(|e| format!("{field}.{e}")));
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Aggregate outcome: `Ok(())` when every rule passed, otherwise
    /// a [`CampusError::Validation`] carrying all messages in rule
    /// order.
    pub fn into_result(self) -> CampusResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CampusError::Validation {
                messages: self.errors,
            })
        }
    }
}

/// Declarative rule set for an input type.
pub trait Validate {
    fn validate(&self, v: &mut Validator);
}

/// Run a type's full rule set and return the aggregated outcome.
pub fn validate<T: Validate>(input: &T) -> CampusResult<()> {
    let mut v = Validator::new();
    input.validate(&mut v);
    v.into_result()
}
