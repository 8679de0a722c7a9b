use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The fixed set of inputs on the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Phone,
        LeadField::Company,
        LeadField::Message,
    ];

    /// The `name` attribute of the matching input, also the template parameter key.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Company => "company",
            LeadField::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, LeadField::Company)
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for LeadField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Current text of every form input. Serializes as the EmailJS template parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl LeadFields {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Company => &self.company,
            LeadField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: LeadField) -> &mut String {
        match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Company => &mut self.company,
            LeadField::Message => &mut self.message,
        }
    }

    /// First required field that is still empty, if any. Whitespace counts as filled,
    /// matching the browser's `required` check.
    pub fn missing_required(&self) -> Option<LeadField> {
        LeadField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.get(*field).is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why `begin_submit` declined to start a send.
#[derive(Debug, PartialEq)]
pub enum SubmitRejected {
    InFlight,
    Missing(LeadField),
}

/// State behind the contact form.
///
/// `status` is `Submitting` only between an accepted `begin_submit` and the
/// matching `finish_submit`; otherwise it is `Idle`. The terminal result of
/// the last send is kept in `last_outcome`.
#[derive(Debug, Default)]
pub struct LeadForm {
    fields: LeadFields,
    status: SubmissionStatus,
    last_outcome: Option<SubmissionStatus>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// `Succeeded` or `Failed` for the most recent completed send.
    pub fn last_outcome(&self) -> Option<SubmissionStatus> {
        self.last_outcome
    }

    /// Edits stay allowed while a send is in flight; they only affect the next submit.
    pub fn update_field(&mut self, field: LeadField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    /// Moves to `Submitting` and returns the snapshot to send.
    pub fn begin_submit(&mut self) -> Result<LeadFields, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        if let Some(field) = self.fields.missing_required() {
            return Err(SubmitRejected::Missing(field));
        }
        self.status = SubmissionStatus::Submitting;
        Ok(self.fields.clone())
    }

    /// Settles the in-flight send. Clears the fields only when it succeeded.
    pub fn finish_submit(&mut self, succeeded: bool) -> SubmissionStatus {
        let outcome = if succeeded {
            self.fields = LeadFields::default();
            SubmissionStatus::Succeeded
        } else {
            SubmissionStatus::Failed
        };
        self.last_outcome = Some(outcome);
        self.status = SubmissionStatus::Idle;
        outcome
    }
}
