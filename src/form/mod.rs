//! Dynamic form engine: the configuration model plus the renderer/validator.
//!
//! The two entry points the presentation layer needs are
//! [`fields_to_render`], which turns a stored configuration into the ordered
//! list of inputs to show, and [`validate_submission`], which checks raw
//! submitted values against the same configuration and normalizes them into
//! persistable candidate attributes. Everything per-field (labels, input
//! kinds, shape checks) comes from the descriptor table in [`catalog`].

mod catalog;

pub use catalog::{descriptor, FieldDescriptor, InputKind};

use std::collections::HashMap;
use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::models::{
    ApplicationFormConfig, CandidateAttribute, FieldConfig, FieldKey, FieldValidation, FormSection,
    RequirementState, RequirementStates, FIELD_CATALOG,
};

/// Section title used for configurations derived from requirement states.
pub const DEFAULT_SECTION_TITLE: &str = "Minimum Profile Information Required";

/// Validation failures surfaced to the caller. The presentation layer keys
/// user-visible messages off the field; the engine never formats UI text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingRequiredField { field: FieldKey },
    #[error("invalid value for {field}: {reason}")]
    InvalidFormat {
        field: FieldKey,
        reason: &'static str,
    },
    #[error("duplicate field key in form configuration: {field}")]
    DuplicateFieldKey { field: FieldKey },
}

impl ValidationError {
    /// The field the failure is about.
    pub fn field(&self) -> FieldKey {
        match self {
            ValidationError::MissingRequiredField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::DuplicateFieldKey { field } => *field,
        }
    }
}

/// Derive the field list for a form from per-field requirement states.
///
/// Keys in state `off` (or absent from the mapping) are excluded; the rest
/// appear exactly once, in canonical catalog order, with
/// `required = (state == mandatory)`.
pub fn derive_field_config(states: &RequirementStates) -> Vec<FieldConfig> {
    FIELD_CATALOG
        .iter()
        .filter_map(|&key| {
            let required = match states.get(&key) {
                Some(RequirementState::Mandatory) => true,
                Some(RequirementState::Optional) => false,
                Some(RequirementState::Off) | None => return None,
            };
            Some(FieldConfig {
                key,
                validation: FieldValidation { required },
            })
        })
        .collect()
}

/// Build the single-section configuration the admin flow produces.
pub fn config_from_states(states: &RequirementStates) -> ApplicationFormConfig {
    ApplicationFormConfig {
        sections: vec![FormSection {
            title: DEFAULT_SECTION_TITLE.to_string(),
            fields: derive_field_config(states),
        }],
    }
}

/// Concatenate every section's field list, section order first, field order
/// within section. Multi-section configurations are supported even though
/// the current producer emits a single section.
pub fn flatten_fields(config: &ApplicationFormConfig) -> Vec<&FieldConfig> {
    config
        .sections
        .iter()
        .flat_map(|s| s.fields.iter())
        .collect()
}

/// Enforce the at-most-once-per-key invariant across all sections.
///
/// Configurations built by [`derive_field_config`] cannot violate it; this
/// guards configurations accepted over the wire before they replace a
/// stored one.
pub fn check_unique_keys(config: &ApplicationFormConfig) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for field in flatten_fields(config) {
        if !seen.insert(field.key) {
            return Err(ValidationError::DuplicateFieldKey { field: field.key });
        }
    }
    Ok(())
}

/// One input the UI should render, in form order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderField {
    pub key: FieldKey,
    pub label: &'static str,
    pub required: bool,
    pub input: InputKind,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

/// Resolve a configuration into the ordered render contract for the UI.
pub fn fields_to_render(config: &ApplicationFormConfig) -> Vec<RenderField> {
    flatten_fields(config)
        .into_iter()
        .map(|f| {
            let d = descriptor(f.key);
            RenderField {
                key: f.key,
                label: d.label,
                required: f.validation.required,
                input: d.input,
                options: d.options,
            }
        })
        .collect()
}

/// Validate raw submitted values against a configuration and normalize them
/// into candidate attributes.
///
/// Values are trimmed before inspection. Non-empty values are shape-checked
/// first, so an optional field with a malformed value still fails. An empty
/// required field fails immediately; validation is fail-fast, first error
/// wins. Empty optional fields are omitted without advancing the 1-based
/// order counter. On success, the returned sequence is exactly what gets
/// persisted.
pub fn validate_submission(
    config: &ApplicationFormConfig,
    raw_values: &HashMap<FieldKey, String>,
) -> Result<Vec<CandidateAttribute>, ValidationError> {
    let mut attributes = Vec::new();

    for field in flatten_fields(config) {
        let value = raw_values
            .get(&field.key)
            .map(|v| v.trim())
            .unwrap_or_default();

        if !value.is_empty() {
            let d = descriptor(field.key);
            if let Some(check) = d.shape {
                if let Err(reason) = check(value) {
                    return Err(ValidationError::InvalidFormat {
                        field: field.key,
                        reason,
                    });
                }
            }
            attributes.push(CandidateAttribute {
                key: field.key.as_str().to_string(),
                label: d.label.to_string(),
                value: value.to_string(),
                order: attributes.len() as u32 + 1,
            });
        } else if field.validation.required {
            return Err(ValidationError::MissingRequiredField { field: field.key });
        }
    }

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(pairs: &[(FieldKey, RequirementState)]) -> RequirementStates {
        pairs.iter().copied().collect()
    }

    fn config(pairs: &[(FieldKey, bool)]) -> ApplicationFormConfig {
        ApplicationFormConfig {
            sections: vec![FormSection {
                title: "Test".to_string(),
                fields: pairs
                    .iter()
                    .map(|&(key, required)| FieldConfig {
                        key,
                        validation: FieldValidation { required },
                    })
                    .collect(),
            }],
        }
    }

    fn raw(pairs: &[(FieldKey, &str)]) -> HashMap<FieldKey, String> {
        pairs.iter().map(|&(k, v)| (k, v.to_string())).collect()
    }

    #[test]
    fn field_keys_round_trip_their_wire_names() {
        for key in FIELD_CATALOG {
            assert_eq!(FieldKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(FieldKey::from_str("favorite_color"), None);
    }

    #[test]
    fn derive_follows_catalog_order_not_map_order() {
        let derived = derive_field_config(&states(&[
            (FieldKey::DateOfBirth, RequirementState::Optional),
            (FieldKey::Email, RequirementState::Mandatory),
            (FieldKey::FullName, RequirementState::Mandatory),
            (FieldKey::Gender, RequirementState::Off),
        ]));

        let keys: Vec<FieldKey> = derived.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec![FieldKey::FullName, FieldKey::Email, FieldKey::DateOfBirth]
        );
    }

    #[test]
    fn derive_maps_requirement_states() {
        let derived = derive_field_config(&states(&[
            (FieldKey::FullName, RequirementState::Mandatory),
            (FieldKey::Domicile, RequirementState::Optional),
            (FieldKey::Gender, RequirementState::Off),
        ]));

        assert_eq!(derived.len(), 2);
        assert!(derived[0].validation.required);
        assert!(!derived[1].validation.required);
        assert!(!derived.iter().any(|f| f.key == FieldKey::Gender));
    }

    #[test]
    fn absent_keys_are_treated_as_off() {
        let derived = derive_field_config(&states(&[(
            FieldKey::Email,
            RequirementState::Mandatory,
        )]));
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].key, FieldKey::Email);
    }

    #[test]
    fn flatten_preserves_section_then_field_order() {
        let multi = ApplicationFormConfig {
            sections: vec![
                FormSection {
                    title: "Basics".to_string(),
                    fields: vec![
                        FieldConfig {
                            key: FieldKey::FullName,
                            validation: FieldValidation { required: true },
                        },
                        FieldConfig {
                            key: FieldKey::Email,
                            validation: FieldValidation { required: true },
                        },
                    ],
                },
                FormSection {
                    title: "Extras".to_string(),
                    fields: vec![FieldConfig {
                        key: FieldKey::Domicile,
                        validation: FieldValidation { required: false },
                    }],
                },
            ],
        };

        let keys: Vec<FieldKey> = flatten_fields(&multi).iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec![FieldKey::FullName, FieldKey::Email, FieldKey::Domicile]
        );
    }

    #[test]
    fn duplicate_key_across_sections_is_rejected() {
        let dup = ApplicationFormConfig {
            sections: vec![
                FormSection {
                    title: "A".to_string(),
                    fields: vec![FieldConfig {
                        key: FieldKey::Email,
                        validation: FieldValidation { required: true },
                    }],
                },
                FormSection {
                    title: "B".to_string(),
                    fields: vec![FieldConfig {
                        key: FieldKey::Email,
                        validation: FieldValidation { required: false },
                    }],
                },
            ],
        };

        assert_eq!(
            check_unique_keys(&dup),
            Err(ValidationError::DuplicateFieldKey {
                field: FieldKey::Email
            })
        );
    }

    #[test]
    fn render_contract_joins_descriptor_table() {
        let fields = fields_to_render(&config(&[
            (FieldKey::FullName, true),
            (FieldKey::Gender, false),
            (FieldKey::PhotoProfile, true),
        ]));

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].label, "Full Name");
        assert!(fields[0].required);
        assert_eq!(fields[1].input, InputKind::Select);
        assert_eq!(fields[1].options, &["male", "female", "other"]);
        assert_eq!(fields[2].input, InputKind::Camera);
    }

    #[test]
    fn two_required_fields_filled_yields_ordered_attributes() {
        let cfg = config(&[(FieldKey::FullName, true), (FieldKey::Email, true)]);
        let attrs = validate_submission(
            &cfg,
            &raw(&[(FieldKey::FullName, "Ana"), (FieldKey::Email, "ana@x.co")]),
        )
        .unwrap();

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].key, "full_name");
        assert_eq!(attrs[0].label, "Full Name");
        assert_eq!(attrs[0].value, "Ana");
        assert_eq!(attrs[0].order, 1);
        assert_eq!(attrs[1].key, "email");
        assert_eq!(attrs[1].order, 2);
    }

    #[test]
    fn empty_required_field_fails_fast() {
        let cfg = config(&[(FieldKey::Email, true)]);
        let err = validate_submission(&cfg, &raw(&[(FieldKey::Email, "")])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequiredField {
                field: FieldKey::Email
            }
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let cfg = config(&[(FieldKey::FullName, true)]);
        let err = validate_submission(&cfg, &raw(&[(FieldKey::FullName, "   ")])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequiredField {
                field: FieldKey::FullName
            }
        );
    }

    #[test]
    fn malformed_optional_value_still_fails() {
        let cfg = config(&[(FieldKey::LinkedinLink, false)]);
        let err =
            validate_submission(&cfg, &raw(&[(FieldKey::LinkedinLink, "ftp://x")])).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat {
                field: FieldKey::LinkedinLink,
                ..
            }
        ));
    }

    #[test]
    fn empty_optional_form_succeeds_with_no_attributes() {
        let cfg = config(&[(FieldKey::Domicile, false)]);
        let attrs = validate_submission(&cfg, &raw(&[])).unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn missing_photo_capture_fails_when_required() {
        let cfg = config(&[(FieldKey::PhotoProfile, true)]);
        let err = validate_submission(&cfg, &raw(&[])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequiredField {
                field: FieldKey::PhotoProfile
            }
        );
    }

    #[test]
    fn captured_photo_token_is_accepted_verbatim() {
        let cfg = config(&[(FieldKey::PhotoProfile, true)]);
        let attrs = validate_submission(
            &cfg,
            &raw(&[(FieldKey::PhotoProfile, "data:image/png;base64,iVBOR")]),
        )
        .unwrap();
        assert_eq!(attrs[0].value, "data:image/png;base64,iVBOR");
    }

    #[test]
    fn malformed_email_reports_invalid_format() {
        let cfg = config(&[(FieldKey::Email, true)]);
        let err = validate_submission(&cfg, &raw(&[(FieldKey::Email, "ana@x")])).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat {
                field: FieldKey::Email,
                ..
            }
        ));
    }

    #[test]
    fn skipped_optional_fields_leave_no_gaps_in_order() {
        let cfg = config(&[
            (FieldKey::FullName, true),
            (FieldKey::Domicile, false),
            (FieldKey::Email, true),
            (FieldKey::DateOfBirth, false),
        ]);
        let attrs = validate_submission(
            &cfg,
            &raw(&[(FieldKey::FullName, "Ana"), (FieldKey::Email, "ana@x.co")]),
        )
        .unwrap();

        let orders: Vec<u32> = attrs.iter().map(|a| a.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn validation_is_deterministic() {
        let cfg = config(&[(FieldKey::FullName, true), (FieldKey::Email, true)]);
        let values = raw(&[(FieldKey::FullName, "Ana"), (FieldKey::Email, "ana@x.co")]);

        let first = validate_submission(&cfg, &values).unwrap();
        let second = validate_submission(&cfg, &values).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn values_are_trimmed_before_persisting() {
        let cfg = config(&[(FieldKey::FullName, true)]);
        let attrs = validate_submission(&cfg, &raw(&[(FieldKey::FullName, "  Ana  ")])).unwrap();
        assert_eq!(attrs[0].value, "Ana");
    }

    #[test]
    fn values_for_off_fields_are_ignored() {
        // An off field is absent from the configuration, so a stray value
        // for it never reaches the output.
        let cfg = config(&[(FieldKey::FullName, true)]);
        let attrs = validate_submission(
            &cfg,
            &raw(&[
                (FieldKey::FullName, "Ana"),
                (FieldKey::Gender, "other"),
            ]),
        )
        .unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].key, "full_name");
    }
}
