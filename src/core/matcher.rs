use crate::core::profiles::profile;
use crate::core::rules::{MatchRule, DEFAULT_PROFILE, DEFAULT_RULES};
use crate::models::{LifeStageTag, PriorityTag, ProfileId, SpecialistProfile};
use std::collections::BTreeSet;

/// Result of the matching process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub profile: &'static SpecialistProfile,
    /// Index of the rule that fired, `None` when the fallback was used
    pub rule_index: Option<usize>,
}

impl MatchOutcome {
    pub fn is_fallback(&self) -> bool {
        self.rule_index.is_none()
    }
}

/// Maps selected life stages and priorities to exactly one specialist profile.
///
/// # Algorithm
/// Rules are evaluated in order and the first satisfied rule wins. There is
/// no scoring: a later rule is never consulted once an earlier one fires.
/// When nothing matches, including empty input, the fallback profile is
/// returned.
#[derive(Debug, Clone)]
pub struct ProfileMatcher {
    rules: Vec<MatchRule>,
    fallback: ProfileId,
}

impl ProfileMatcher {
    pub fn new(rules: Vec<MatchRule>, fallback: ProfileId) -> Self {
        Self { rules, fallback }
    }

    pub fn with_default_rules() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), DEFAULT_PROFILE)
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// Run the rule table against one submission
    pub fn match_profile(
        &self,
        life_stages: &BTreeSet<LifeStageTag>,
        priorities: &BTreeSet<PriorityTag>,
    ) -> MatchOutcome {
        let outcome = self
            .rules
            .iter()
            .position(|rule| rule.is_satisfied(life_stages, priorities))
            .map(|index| MatchOutcome {
                profile: profile(self.rules[index].profile),
                rule_index: Some(index),
            })
            .unwrap_or(MatchOutcome {
                profile: profile(self.fallback),
                rule_index: None,
            });

        tracing::debug!(
            profile = ?outcome.profile.id,
            rule = ?outcome.rule_index,
            "matched specialist profile"
        );

        outcome
    }

    /// Same as [`match_profile`](Self::match_profile) but returns only the profile
    pub fn find(
        &self,
        life_stages: &BTreeSet<LifeStageTag>,
        priorities: &BTreeSet<PriorityTag>,
    ) -> &'static SpecialistProfile {
        self.match_profile(life_stages, priorities).profile
    }
}

impl Default for ProfileMatcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

/// Match with the default rule table
pub fn match_profile(
    life_stages: &BTreeSet<LifeStageTag>,
    priorities: &BTreeSet<PriorityTag>,
) -> &'static SpecialistProfile {
    ProfileMatcher::default().find(life_stages, priorities)
}
