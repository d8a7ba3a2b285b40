//! Application form configuration model.
//!
//! An admin declares, per job, which candidate-profile fields the application
//! form carries and whether each one is required. The catalog of profile
//! fields is closed; extending it means adding a variant here and a
//! descriptor in the form engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Enumerated identifier for a candidate-profile attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    FullName,
    PhotoProfile,
    Gender,
    Domicile,
    Email,
    PhoneNumber,
    LinkedinLink,
    DateOfBirth,
}

/// Canonical catalog order. Derived field lists always follow this order,
/// never the iteration order of an input mapping.
pub const FIELD_CATALOG: [FieldKey; 8] = [
    FieldKey::FullName,
    FieldKey::PhotoProfile,
    FieldKey::Gender,
    FieldKey::Domicile,
    FieldKey::Email,
    FieldKey::PhoneNumber,
    FieldKey::LinkedinLink,
    FieldKey::DateOfBirth,
];

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::FullName => "full_name",
            FieldKey::PhotoProfile => "photo_profile",
            FieldKey::Gender => "gender",
            FieldKey::Domicile => "domicile",
            FieldKey::Email => "email",
            FieldKey::PhoneNumber => "phone_number",
            FieldKey::LinkedinLink => "linkedin_link",
            FieldKey::DateOfBirth => "date_of_birth",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "full_name" => Some(FieldKey::FullName),
            "photo_profile" => Some(FieldKey::PhotoProfile),
            "gender" => Some(FieldKey::Gender),
            "domicile" => Some(FieldKey::Domicile),
            "email" => Some(FieldKey::Email),
            "phone_number" => Some(FieldKey::PhoneNumber),
            "linkedin_link" => Some(FieldKey::LinkedinLink),
            "date_of_birth" => Some(FieldKey::DateOfBirth),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field tri-state governing inclusion and requiredness in a form.
///
/// `Off` excludes the field from the rendered form and from validation
/// entirely; `Optional` shows it without enforcing a value; `Mandatory`
/// rejects submissions where the value is absent or empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequirementState {
    Mandatory,
    Optional,
    Off,
}

/// Validation rule attached to a field configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldValidation {
    #[serde(default)]
    pub required: bool,
}

/// A field key paired with its validation rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldConfig {
    pub key: FieldKey,
    #[serde(default)]
    pub validation: FieldValidation,
}

/// One titled section of an application form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSection {
    pub title: String,
    pub fields: Vec<FieldConfig>,
}

/// Ordered sections of field configurations attached to a job.
///
/// Invariant: a [`FieldKey`] appears at most once across all sections.
/// Constructed configurations are checked via
/// [`crate::form::check_unique_keys`]; configurations arriving over the wire
/// are checked at acceptance time before they replace a stored one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationFormConfig {
    pub sections: Vec<FormSection>,
}

/// Per-job configuration envelope. Currently only the application form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobConfig {
    pub application_form: ApplicationFormConfig,
}

/// Mapping an admin submits when configuring a job's form. Keys absent from
/// the mapping are treated as `Off`.
pub type RequirementStates = HashMap<FieldKey, RequirementState>;
