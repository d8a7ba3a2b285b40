//! First-run demo data.

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{
    CreateJobRequest, FieldKey, JobStatus, RequirementState, RequirementStates, SalaryRange,
};

fn demo_field_states() -> RequirementStates {
    [
        (FieldKey::FullName, RequirementState::Mandatory),
        (FieldKey::PhotoProfile, RequirementState::Mandatory),
        (FieldKey::Gender, RequirementState::Mandatory),
        (FieldKey::Domicile, RequirementState::Optional),
        (FieldKey::Email, RequirementState::Mandatory),
        (FieldKey::PhoneNumber, RequirementState::Mandatory),
        (FieldKey::LinkedinLink, RequirementState::Mandatory),
        (FieldKey::DateOfBirth, RequirementState::Optional),
    ]
    .into_iter()
    .collect()
}

/// Seed two demo jobs once per store.
pub async fn seed(repo: &Repository) -> Result<(), AppError> {
    if repo.is_seeded().await? {
        return Ok(());
    }

    repo.create_job(&CreateJobRequest {
        title: "Frontend Developer".to_string(),
        department: "Engineering".to_string(),
        company: "Techify".to_string(),
        status: JobStatus::Active,
        salary_range: SalaryRange {
            min: 7_000_000,
            max: 8_000_000,
            currency: "IDR".to_string(),
            display_text: Some("Rp7.000.000 - Rp8.000.000".to_string()),
        },
        description: "We are looking for a Frontend Engineer passionate about DX and exceptional UX."
            .to_string(),
        field_states: demo_field_states(),
    })
    .await?;

    repo.create_job(&CreateJobRequest {
        title: "QA Engineer".to_string(),
        department: "Quality".to_string(),
        company: "Techify".to_string(),
        status: JobStatus::Draft,
        salary_range: SalaryRange {
            min: 6_000_000,
            max: 7_500_000,
            currency: "IDR".to_string(),
            display_text: None,
        },
        description: "Own quality from day one: test plans, automation, and exploratory testing."
            .to_string(),
        field_states: demo_field_states(),
    })
    .await?;

    repo.mark_seeded().await?;
    tracing::info!("seeded demo jobs");
    Ok(())
}
