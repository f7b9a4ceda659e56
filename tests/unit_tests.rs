// Unit tests for the profile matcher and spec sheet renderer

use educated_investor::core::{match_profile, ProfileMatcher, Questionnaire, DEFAULT_RULES};
use educated_investor::models::{LifeStageTag, PriorityTag, ProfileId};
use educated_investor::report::{render, RenderError};
use std::collections::BTreeSet;

fn stages(tags: &[LifeStageTag]) -> BTreeSet<LifeStageTag> {
    tags.iter().copied().collect()
}

fn prios(tags: &[PriorityTag]) -> BTreeSet<PriorityTag> {
    tags.iter().copied().collect()
}

/// Collapse all whitespace runs so wrapped lines compare like the source text
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_text(pdf: &[u8]) -> String {
    let text = pdf_extract::extract_text_from_mem(pdf).expect("rendered PDF should be readable");
    normalize(&text)
}

#[test]
fn test_scenario_pre_retirement() {
    let profile = match_profile(&stages(&[LifeStageTag::PreRetirement]), &BTreeSet::new());
    assert_eq!(profile.id, ProfileId::A);
    assert_eq!(profile.title, "Retirement Income & Distribution Specialist");
}

#[test]
fn test_scenario_business_owner_before_tax() {
    let profile = match_profile(
        &stages(&[LifeStageTag::BusinessOwner]),
        &prios(&[PriorityTag::TaxReduction]),
    );
    assert_eq!(profile.id, ProfileId::B);
}

#[test]
fn test_scenario_accumulation_defaults() {
    let profile = match_profile(
        &stages(&[LifeStageTag::Accumulation]),
        &prios(&[PriorityTag::WealthGrowth]),
    );
    assert_eq!(profile.id, ProfileId::E);
}

#[test]
fn test_scenario_windfall_before_special_situation() {
    let profile = match_profile(
        &stages(&[LifeStageTag::Windfall, LifeStageTag::SpecialSituation]),
        &BTreeSet::new(),
    );
    assert_eq!(profile.id, ProfileId::C);
}

#[test]
fn test_empty_input_yields_default() {
    assert_eq!(match_profile(&BTreeSet::new(), &BTreeSet::new()).id, ProfileId::E);
}

#[test]
fn test_pre_retirement_beats_business_owner() {
    let profile = match_profile(
        &stages(&[LifeStageTag::PreRetirement, LifeStageTag::BusinessOwner]),
        &BTreeSet::new(),
    );
    assert_eq!(profile.id, ProfileId::A);
}

#[test]
fn test_every_pair_follows_rule_order() {
    let matcher = ProfileMatcher::default();

    for first in LifeStageTag::ALL {
        for second in LifeStageTag::ALL {
            let outcome = matcher.match_profile(&stages(&[first, second]), &BTreeSet::new());
            let expected = DEFAULT_RULES
                .iter()
                .position(|r| r.life_stages.contains(&first) || r.life_stages.contains(&second));
            assert_eq!(outcome.rule_index, expected, "{:?} + {:?}", first, second);
        }
    }
}

#[test]
fn test_insertion_order_does_not_matter() {
    let forward: BTreeSet<LifeStageTag> = LifeStageTag::ALL.into_iter().collect();
    let backward: BTreeSet<LifeStageTag> = LifeStageTag::ALL.into_iter().rev().collect();
    let p_forward: BTreeSet<PriorityTag> = PriorityTag::ALL.into_iter().collect();
    let p_backward: BTreeSet<PriorityTag> = PriorityTag::ALL.into_iter().rev().collect();

    let a = match_profile(&forward, &p_forward);
    let b = match_profile(&backward, &p_backward);
    assert_eq!(a, b);
    assert_eq!(a.id, ProfileId::A);
}

#[test]
fn test_matcher_is_deterministic() {
    let matcher = ProfileMatcher::default();
    let life_stages = stages(&[LifeStageTag::SpecialSituation]);
    let priorities = prios(&[PriorityTag::EstatePlanning, PriorityTag::WealthGrowth]);

    let first = matcher.match_profile(&life_stages, &priorities);
    for _ in 0..10 {
        assert_eq!(matcher.match_profile(&life_stages, &priorities), first);
    }
    assert_eq!(first.profile.id, ProfileId::D);
}

#[test]
fn test_render_contains_profile_and_questions_in_order() {
    let profile = match_profile(&stages(&[LifeStageTag::PreRetirement]), &BTreeSet::new());
    let questions = vec![
        "Alpha check: will you sign a fiduciary oath?".to_string(),
        "Bravo check: are you dually registered?".to_string(),
        "Charlie check: how are you paid?".to_string(),
    ];

    let pdf = render("Jane Q. Investor", profile, &questions).unwrap();
    let text = extract_text(&pdf);

    assert!(text.contains("Jane Q. Investor"));
    assert!(text.contains(profile.title));
    assert!(text.contains(&normalize(profile.description)));
    assert!(text.contains(&profile.credentials_line()));

    let mut last = 0;
    for question in &questions {
        assert_eq!(text.matches(question.as_str()).count(), 1, "{}", question);
        let at = text.find(question.as_str()).unwrap();
        assert!(at >= last, "question out of order: {}", question);
        last = at;
    }
}

#[test]
fn test_render_without_questions_is_valid() {
    let profile = match_profile(&BTreeSet::new(), &BTreeSet::new());
    let pdf = render("Jane", profile, &[]).unwrap();
    let text = extract_text(&pdf);

    assert!(text.contains("RECOMMENDED SPECIALIST"));
    assert!(text.contains("VETTING PROTOCOL"));
    assert!(text.contains(profile.title));
}

#[test]
fn test_render_full_protocol() {
    let profile = match_profile(&stages(&[LifeStageTag::BusinessOwner]), &BTreeSet::new());
    let questions = Questionnaire::Full.questions();
    let pdf = render("Jane", profile, &questions).unwrap();
    let text = extract_text(&pdf);

    assert!(text.contains("Which independent custodian holds my assets?"));
}

#[test]
fn test_render_accepts_empty_name() {
    let profile = match_profile(&BTreeSet::new(), &BTreeSet::new());
    assert!(render("", profile, &[]).is_ok());
}

#[test]
fn test_render_rejects_unencodable_text() {
    let profile = match_profile(&BTreeSet::new(), &BTreeSet::new());
    let result = render("Jane", profile, &["Ask in 日本語?".to_string()]);
    assert!(matches!(result, Err(RenderError::UnsupportedCharacter { ch: '日', .. })));
}
