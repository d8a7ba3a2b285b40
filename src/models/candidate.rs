//! Candidate model: validated submissions persisted per job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::form::FieldKey;

/// A single submitted value.
///
/// The label is snapshotted at submission time rather than joined live from
/// the form configuration: the configuration may change after submission,
/// and historical submissions must stay legible with the labels in force
/// when they were made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateAttribute {
    pub key: String,
    pub label: String,
    pub value: String,
    /// 1-based position within the submission, no gaps.
    pub order: u32,
}

/// A submitted application. Append-only: never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub job_id: String,
    pub attributes: Vec<CandidateAttribute>,
    pub applied_at: String,
}

/// Request body for submitting an application.
///
/// Values are raw form inputs keyed by field; the captured photo token from
/// the camera collaborator travels here like any other value.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    #[serde(default)]
    pub values: HashMap<FieldKey, String>,
}
