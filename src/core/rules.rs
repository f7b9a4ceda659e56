use crate::models::{LifeStageTag, PriorityTag, ProfileId};
use std::collections::BTreeSet;

/// One row of the decision table.
///
/// A rule is satisfied when any of its life stages or any of its priorities
/// was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub profile: ProfileId,
    pub life_stages: &'static [LifeStageTag],
    pub priorities: &'static [PriorityTag],
}

impl MatchRule {
    #[inline]
    pub fn is_satisfied(
        &self,
        life_stages: &BTreeSet<LifeStageTag>,
        priorities: &BTreeSet<PriorityTag>,
    ) -> bool {
        self.life_stages.iter().any(|tag| life_stages.contains(tag))
            || self.priorities.iter().any(|tag| priorities.contains(tag))
    }
}

/// Evaluated top to bottom, first satisfied rule wins.
pub static DEFAULT_RULES: [MatchRule; 4] = [
    MatchRule {
        profile: ProfileId::A,
        life_stages: &[LifeStageTag::PreRetirement, LifeStageTag::Distribution],
        priorities: &[PriorityTag::IncomeStability],
    },
    MatchRule {
        profile: ProfileId::B,
        life_stages: &[LifeStageTag::BusinessOwner],
        priorities: &[PriorityTag::BusinessExit],
    },
    MatchRule {
        profile: ProfileId::C,
        life_stages: &[LifeStageTag::Windfall],
        priorities: &[PriorityTag::TaxReduction],
    },
    MatchRule {
        profile: ProfileId::D,
        life_stages: &[LifeStageTag::SpecialSituation],
        priorities: &[PriorityTag::SpecialNeedsPlanning],
    },
];

/// Profile used when no rule is satisfied
pub const DEFAULT_PROFILE: ProfileId = ProfileId::E;
