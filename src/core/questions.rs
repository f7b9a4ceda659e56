//! Vetting questions the investor is advised to ask a prospective advisor.
//!
//! Questions are plain strings grouped into four phases. The built-in
//! questionnaires differ only in how many questions they carry; a deployment
//! can also supply its own list through configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conceptual grouping of the vetting protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    CredentialsStability,
    CompetencyAlignment,
    InvestmentProcess,
    CompensationCosts,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::CredentialsStability => "Credentials & Stability",
            Phase::CompetencyAlignment => "Competency Alignment",
            Phase::InvestmentProcess => "Investment Process",
            Phase::CompensationCosts => "Compensation & Costs",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VettingQuestion {
    pub phase: Phase,
    pub text: &'static str,
}

const fn q(phase: Phase, text: &'static str) -> VettingQuestion {
    VettingQuestion { phase, text }
}

use Phase::*;

/// Complete protocol, ordered by phase
pub static FULL_PROTOCOL: [VettingQuestion; 27] = [
    q(CredentialsStability, "Will you sign a 100% Fiduciary Oath covering every account you manage for me?"),
    q(CredentialsStability, "Are you dually registered as both an advisor and a broker? (Target answer: No)"),
    q(CredentialsStability, "Is your Form ADV Part 2 and BrokerCheck record free of disciplinary disclosures?"),
    q(CredentialsStability, "How many years have you practiced, and how long has your firm existed?"),
    q(CredentialsStability, "Which independent custodian holds my assets?"),
    q(CredentialsStability, "Who takes over my accounts if you retire, leave or become unavailable?"),
    q(CredentialsStability, "Which professional designations do you hold, and are they current?"),
    q(CompetencyAlignment, "What share of your clients are in my life stage?"),
    q(CompetencyAlignment, "Which credentials do you hold that match my primary need?"),
    q(CompetencyAlignment, "Can you describe a client situation like mine and how you handled it?"),
    q(CompetencyAlignment, "Do you coordinate directly with my CPA and estate attorney?"),
    q(CompetencyAlignment, "How do you build and update a written financial plan?"),
    q(CompetencyAlignment, "What is your minimum account size, and am I a typical client for you?"),
    q(CompetencyAlignment, "How often will we meet, and who is my day-to-day contact?"),
    q(InvestmentProcess, "Will you provide a written Investment Policy Statement?"),
    q(InvestmentProcess, "How do you decide on asset allocation and rebalancing?"),
    q(InvestmentProcess, "Do you use proprietary funds or products that pay your firm?"),
    q(InvestmentProcess, "How do you manage taxes inside my portfolio?"),
    q(InvestmentProcess, "How will you measure and report performance against a benchmark?"),
    q(InvestmentProcess, "What happens to my portfolio during a major market decline?"),
    q(CompensationCosts, "How are you paid, and will you put every source of compensation in writing?"),
    q(CompensationCosts, "Will you disclose all third-party payments, commissions and revenue sharing?"),
    q(CompensationCosts, "What is my total all-in annual cost, including fund expenses?"),
    q(CompensationCosts, "Do you receive bonuses or incentives for recommending specific products?"),
    q(CompensationCosts, "Are there surrender charges or exit fees on anything you recommend?"),
    q(CompensationCosts, "How are your fees billed, and can I see them on every statement?"),
    q(CompensationCosts, "Will you refund or waive fees if you fail to meet your written commitments?"),
];

/// Three-point protocol printed on the original one-page spec sheet
pub static QUICK_PROTOCOL: [VettingQuestion; 3] = [
    q(CredentialsStability, "Must sign fiduciary oath."),
    q(CompensationCosts, "Must disclose all 3rd party payments."),
    q(CompetencyAlignment, "Must match life stage complexity."),
];

/// Built-in question sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Questionnaire {
    Quick,
    Essentials,
    #[default]
    Full,
}

impl Questionnaire {
    /// Questions with their phase, in protocol order
    pub fn entries(&self) -> Vec<VettingQuestion> {
        match self {
            Questionnaire::Quick => QUICK_PROTOCOL.to_vec(),
            Questionnaire::Essentials => {
                let mut taken = Vec::with_capacity(8);
                for phase in [CredentialsStability, CompetencyAlignment, InvestmentProcess, CompensationCosts] {
                    taken.extend(FULL_PROTOCOL.iter().filter(|q| q.phase == phase).take(2).copied());
                }
                taken
            }
            Questionnaire::Full => FULL_PROTOCOL.to_vec(),
        }
    }

    /// Question text only, ready to hand to the renderer
    pub fn questions(&self) -> Vec<String> {
        self.entries().into_iter().map(|q| q.text.to_string()).collect()
    }
}
