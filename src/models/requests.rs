use crate::models::domain::{LifeStageTag, PriorityTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::{Validate, ValidationError};

/// Maximum number of priorities the questionnaire accepts
pub const MAX_PRIORITIES: usize = 3;

/// Request to preview the matched profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchProfileRequest {
    #[serde(default, alias = "life_stages", rename = "lifeStages")]
    pub life_stages: Vec<LifeStageTag>,
    #[serde(default)]
    pub priorities: Vec<PriorityTag>,
}

impl MatchProfileRequest {
    pub fn tag_sets(&self) -> (BTreeSet<LifeStageTag>, BTreeSet<PriorityTag>) {
        to_sets(&self.life_stages, &self.priorities)
    }
}

/// Completed questionnaire submitted for a spec sheet
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateReportRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "select at least one life stage"))]
    #[serde(default, alias = "life_stages", rename = "lifeStages")]
    pub life_stages: Vec<LifeStageTag>,
    #[validate(custom(function = "validate_priority_cap", message = "choose up to 3 priorities"))]
    #[serde(default)]
    pub priorities: Vec<PriorityTag>,
}

impl GenerateReportRequest {
    pub fn tag_sets(&self) -> (BTreeSet<LifeStageTag>, BTreeSet<PriorityTag>) {
        to_sets(&self.life_stages, &self.priorities)
    }
}

/// Caps distinct priorities; repeated labels count once
fn validate_priority_cap(priorities: &[PriorityTag]) -> Result<(), ValidationError> {
    let distinct: BTreeSet<&PriorityTag> = priorities.iter().collect();
    if distinct.len() > MAX_PRIORITIES {
        return Err(ValidationError::new("max_priorities"));
    }
    Ok(())
}

fn to_sets(
    life_stages: &[LifeStageTag],
    priorities: &[PriorityTag],
) -> (BTreeSet<LifeStageTag>, BTreeSet<PriorityTag>) {
    (
        life_stages.iter().copied().collect(),
        priorities.iter().copied().collect(),
    )
}
