use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Self-reported financial phase. Selected as a set, order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeStageTag {
    #[serde(rename = "Accumulation")]
    Accumulation,
    #[serde(rename = "Pre-Retirement", alias = "PreRetirement")]
    PreRetirement,
    #[serde(rename = "Distribution")]
    Distribution,
    #[serde(rename = "Business Owner", alias = "BusinessOwner")]
    BusinessOwner,
    #[serde(rename = "Windfall")]
    Windfall,
    #[serde(rename = "Special Situation", alias = "SpecialSituation")]
    SpecialSituation,
}

impl LifeStageTag {
    pub const ALL: [LifeStageTag; 6] = [
        LifeStageTag::Accumulation,
        LifeStageTag::PreRetirement,
        LifeStageTag::Distribution,
        LifeStageTag::BusinessOwner,
        LifeStageTag::Windfall,
        LifeStageTag::SpecialSituation,
    ];

    /// Label shown on the questionnaire
    pub fn label(&self) -> &'static str {
        match self {
            LifeStageTag::Accumulation => "Accumulation",
            LifeStageTag::PreRetirement => "Pre-Retirement",
            LifeStageTag::Distribution => "Distribution",
            LifeStageTag::BusinessOwner => "Business Owner",
            LifeStageTag::Windfall => "Windfall",
            LifeStageTag::SpecialSituation => "Special Situation",
        }
    }
}

/// Self-reported top concern. The questionnaire caps the selection at three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityTag {
    #[serde(rename = "Income Stability", alias = "IncomeStability", alias = "Retirement Income")]
    IncomeStability,
    #[serde(rename = "Tax Reduction", alias = "TaxReduction")]
    TaxReduction,
    #[serde(rename = "Business Exit", alias = "BusinessExit")]
    BusinessExit,
    #[serde(rename = "Estate Planning", alias = "EstatePlanning")]
    EstatePlanning,
    #[serde(rename = "Wealth Growth", alias = "WealthGrowth")]
    WealthGrowth,
    #[serde(rename = "Special Needs Planning", alias = "SpecialNeedsPlanning")]
    SpecialNeedsPlanning,
}

impl PriorityTag {
    pub const ALL: [PriorityTag; 6] = [
        PriorityTag::IncomeStability,
        PriorityTag::TaxReduction,
        PriorityTag::BusinessExit,
        PriorityTag::EstatePlanning,
        PriorityTag::WealthGrowth,
        PriorityTag::SpecialNeedsPlanning,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriorityTag::IncomeStability => "Income Stability",
            PriorityTag::TaxReduction => "Tax Reduction",
            PriorityTag::BusinessExit => "Business Exit",
            PriorityTag::EstatePlanning => "Estate Planning",
            PriorityTag::WealthGrowth => "Wealth Growth",
            PriorityTag::SpecialNeedsPlanning => "Special Needs Planning",
        }
    }
}

/// Error returned when a tag string is not part of the fixed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
}

/// Lowercase alphanumerics only, so "Pre-Retirement", "pre retirement" and
/// "PreRetirement" all compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for LifeStageTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        LifeStageTag::ALL
            .into_iter()
            .find(|tag| normalize(tag.label()) == key)
            .ok_or_else(|| UnknownTag {
                kind: "life stage",
                value: s.to_string(),
            })
    }
}

impl FromStr for PriorityTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        if key == "retirementincome" {
            return Ok(PriorityTag::IncomeStability);
        }
        PriorityTag::ALL
            .into_iter()
            .find(|tag| normalize(tag.label()) == key)
            .ok_or_else(|| UnknownTag {
                kind: "priority",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for LifeStageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PriorityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of one of the five fixed specialist profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileId {
    A,
    B,
    C,
    D,
    E,
}

/// Advisor-type recommendation. Instances only live in the static profile table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialistProfile {
    pub id: ProfileId,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "recommendedCredentials")]
    pub recommended_credentials: &'static [&'static str],
}

impl SpecialistProfile {
    /// Credentials joined into the single line printed on the spec sheet
    pub fn credentials_line(&self) -> String {
        self.recommended_credentials.join(", ")
    }
}
