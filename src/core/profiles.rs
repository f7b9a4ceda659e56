use crate::models::{ProfileId, SpecialistProfile};

/// The five specialist profiles. Order follows `ProfileId`.
pub static PROFILES: [SpecialistProfile; 5] = [
    SpecialistProfile {
        id: ProfileId::A,
        title: "Retirement Income & Distribution Specialist",
        description: "You are approaching or living in retirement. Your advisor must turn \
            savings into dependable income: withdrawal sequencing, Social Security timing, \
            required minimum distributions and protection against outliving your assets.",
        recommended_credentials: &["RICP", "CFP", "RMA"],
    },
    SpecialistProfile {
        id: ProfileId::B,
        title: "Business Owner & Exit Planning Specialist",
        description: "Much of your net worth is tied to a business. Look for an advisor \
            who coordinates business valuation, succession and exit strategy, owner \
            retirement plans and the tax consequences of a sale.",
        recommended_credentials: &["CEPA", "CFP", "ChFC"],
    },
    SpecialistProfile {
        id: ProfileId::C,
        title: "High-Net-Worth & Tax Strategy Specialist",
        description: "A liquidity event or high income makes tax efficiency the main lever. \
            Your advisor should work alongside your CPA on tax-aware asset location, \
            charitable giving strategies and multi-year tax planning.",
        recommended_credentials: &["CPA/PFS", "CFP", "AEP"],
    },
    SpecialistProfile {
        id: ProfileId::D,
        title: "Special Needs & Complex Family Planning Specialist",
        description: "Your situation involves dependents with special needs, blended families \
            or other complex circumstances. Your advisor must understand special needs \
            trusts, government benefit eligibility and long-horizon care funding.",
        recommended_credentials: &["ChSNC", "CFP", "CDFA"],
    },
    SpecialistProfile {
        id: ProfileId::E,
        title: "Investment Management & Accumulation Specialist",
        description: "You are building wealth. Your advisor should provide a disciplined, \
            low-cost investment process, clear savings targets and a written investment \
            policy statement that keeps you on course.",
        recommended_credentials: &["CFP", "CFA"],
    },
];

/// Look up a profile by id
pub fn profile(id: ProfileId) -> &'static SpecialistProfile {
    match id {
        ProfileId::A => &PROFILES[0],
        ProfileId::B => &PROFILES[1],
        ProfileId::C => &PROFILES[2],
        ProfileId::D => &PROFILES[3],
        ProfileId::E => &PROFILES[4],
    }
}
