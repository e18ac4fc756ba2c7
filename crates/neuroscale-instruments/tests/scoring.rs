//! Scoring tests for every registered scale: band boundaries, sub-domain
//! breakdowns, derived components and response validation.

use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::RiskLevel;
use neuroscale_core::scale::ScaleKind;
use neuroscale_instruments::error::ScoringError;
use neuroscale_instruments::instruments::cdr::global_score;
use neuroscale_instruments::scoring::ScoringContext;
use neuroscale_instruments::{Instrument, all_instruments, get_instrument, instrument, score};

/// Responses for `scale` whose item scores add up to `total`.
///
/// Every item starts at its minimum; the remainder is handed out in rubric
/// order, filling each item to its maximum before moving on.
fn responses_totaling(scale: ScaleKind, total: f64) -> ResponseSet {
    let inst = instrument(scale);
    let items: Vec<_> = inst.sections().iter().flat_map(|s| &s.items).collect();
    let mut remaining = total - items.iter().map(|i| i.range.min).sum::<f64>();
    assert!(remaining >= 0.0, "{scale}: {total} is below the minimum total");

    let mut responses = ResponseSet::new();
    for item in items {
        let extra = remaining.min(item.range.max - item.range.min);
        remaining -= extra;
        responses.insert(item.id.clone(), item.range.min + extra);
    }
    assert!(remaining == 0.0, "{scale}: {total} is above the maximum total");
    responses
}

fn score_total(scale: ScaleKind, total: f64) -> (String, RiskLevel) {
    let result = instrument(scale)
        .score(&responses_totaling(scale, total), &ScoringContext::default())
        .unwrap();
    assert_eq!(result.total_score, total);
    (result.level, result.risk_level)
}

fn assert_band(scale: ScaleKind, total: f64, level: &str, risk: RiskLevel) {
    let (actual_level, actual_risk) = score_total(scale, total);
    assert_eq!(actual_level, level, "{scale} total {total}");
    assert_eq!(actual_risk, risk, "{scale} total {total}");
}

// ── Registry ─────────────────────────────────────────────────────────────

#[test]
fn every_scale_is_registered_once() {
    let ids: Vec<&str> = all_instruments().iter().map(|i| i.id()).collect();
    assert_eq!(
        ids,
        ["MMSE", "MoCA", "CDR", "HAMD", "HAMA", "UPDRS", "Berg", "Tinetti", "NIHSS", "GCS", "mRS"]
    );
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(get_instrument("mmse").unwrap().kind(), ScaleKind::Mmse);
    assert_eq!(get_instrument("MRS").unwrap().kind(), ScaleKind::Mrs);
    assert!(get_instrument("PHQ9").is_none());
}

#[test]
fn unknown_scale_is_an_error() {
    let err = score("PHQ9", &ResponseSet::new(), &ScoringContext::default()).unwrap_err();
    assert_eq!(err, ScoringError::UnknownScale("PHQ9".to_string()));
}

#[test]
fn item_maxima_add_up_to_the_scale_maximum() {
    for inst in all_instruments() {
        if inst.kind() == ScaleKind::Cdr {
            // Global rating, not a sum.
            continue;
        }
        let sum: f64 = inst
            .sections()
            .iter()
            .flat_map(|s| &s.items)
            .map(|i| i.range.max)
            .sum();
        assert_eq!(sum, inst.max_score(), "{}", inst.id());
    }
}

#[test]
fn totals_and_percentages_stay_in_range() {
    for inst in all_instruments() {
        let items: Vec<_> = inst.sections().iter().flat_map(|s| &s.items).collect();
        for pick_max in [false, true] {
            let responses: ResponseSet = items
                .iter()
                .map(|i| (i.id.clone(), if pick_max { i.range.max } else { i.range.min }))
                .collect();
            let result = inst.score(&responses, &ScoringContext::default()).unwrap();
            assert!(result.total_score >= 0.0, "{}", inst.id());
            assert!(result.total_score <= result.max_score, "{}", inst.id());
            assert!((0.0..=100.0).contains(&result.percentage), "{}", inst.id());
            assert!(!result.level.is_empty());
            assert!(!result.interpretation.is_empty());
        }
    }
}

// ── Band boundaries ──────────────────────────────────────────────────────

#[test]
fn mmse_bands() {
    assert_band(ScaleKind::Mmse, 30.0, "正常", RiskLevel::Low);
    assert_band(ScaleKind::Mmse, 27.0, "正常", RiskLevel::Low);
    assert_band(ScaleKind::Mmse, 26.0, "轻度认知障碍", RiskLevel::Medium);
    assert_band(ScaleKind::Mmse, 24.0, "轻度认知障碍", RiskLevel::Medium);
    assert_band(ScaleKind::Mmse, 23.0, "中度认知障碍", RiskLevel::High);
    assert_band(ScaleKind::Mmse, 18.0, "中度认知障碍", RiskLevel::High);
    assert_band(ScaleKind::Mmse, 17.0, "重度认知障碍", RiskLevel::VeryHigh);
    assert_band(ScaleKind::Mmse, 0.0, "重度认知障碍", RiskLevel::VeryHigh);
}

#[test]
fn mmse_percentage_is_rounded() {
    let result = instrument(ScaleKind::Mmse)
        .score(&responses_totaling(ScaleKind::Mmse, 25.0), &ScoringContext::default())
        .unwrap();
    assert_eq!(result.max_score, 30.0);
    assert_eq!(result.percentage, 83.3);
    assert!(!result.recommendations.is_empty());
}

#[test]
fn hamd_bands() {
    assert_band(ScaleKind::Hamd, 0.0, "无抑郁", RiskLevel::Low);
    assert_band(ScaleKind::Hamd, 7.0, "无抑郁", RiskLevel::Low);
    assert_band(ScaleKind::Hamd, 8.0, "轻度抑郁", RiskLevel::Medium);
    assert_band(ScaleKind::Hamd, 16.0, "轻度抑郁", RiskLevel::Medium);
    assert_band(ScaleKind::Hamd, 17.0, "中度抑郁", RiskLevel::High);
    assert_band(ScaleKind::Hamd, 23.0, "中度抑郁", RiskLevel::High);
    assert_band(ScaleKind::Hamd, 24.0, "重度抑郁", RiskLevel::VeryHigh);
    assert_band(ScaleKind::Hamd, 52.0, "重度抑郁", RiskLevel::VeryHigh);
}

#[test]
fn hama_bands() {
    assert_band(ScaleKind::Hama, 6.0, "无焦虑", RiskLevel::Low);
    assert_band(ScaleKind::Hama, 7.0, "轻度焦虑", RiskLevel::Medium);
    assert_band(ScaleKind::Hama, 14.0, "轻度焦虑", RiskLevel::Medium);
    assert_band(ScaleKind::Hama, 15.0, "中度焦虑", RiskLevel::High);
    assert_band(ScaleKind::Hama, 20.0, "中度焦虑", RiskLevel::High);
    assert_band(ScaleKind::Hama, 21.0, "重度焦虑", RiskLevel::VeryHigh);
}

#[test]
fn updrs_bands() {
    assert_band(ScaleKind::Updrs, 17.0, "轻度", RiskLevel::Low);
    assert_band(ScaleKind::Updrs, 18.0, "中度", RiskLevel::Medium);
    assert_band(ScaleKind::Updrs, 33.0, "中度", RiskLevel::Medium);
    assert_band(ScaleKind::Updrs, 34.0, "中重度", RiskLevel::High);
    assert_band(ScaleKind::Updrs, 50.0, "中重度", RiskLevel::High);
    assert_band(ScaleKind::Updrs, 51.0, "重度", RiskLevel::VeryHigh);
}

#[test]
fn berg_bands() {
    assert_band(ScaleKind::Berg, 56.0, "无跌倒风险", RiskLevel::Low);
    assert_band(ScaleKind::Berg, 55.0, "低跌倒风险", RiskLevel::Low);
    assert_band(ScaleKind::Berg, 54.0, "低跌倒风险", RiskLevel::Low);
    assert_band(ScaleKind::Berg, 53.0, "中等跌倒风险", RiskLevel::Medium);
    assert_band(ScaleKind::Berg, 46.0, "中等跌倒风险", RiskLevel::Medium);
    assert_band(ScaleKind::Berg, 45.0, "高跌倒风险", RiskLevel::High);
}

#[test]
fn tinetti_bands_and_parts() {
    assert_band(ScaleKind::Tinetti, 24.0, "低跌倒风险", RiskLevel::Low);
    assert_band(ScaleKind::Tinetti, 23.0, "中等跌倒风险", RiskLevel::Medium);
    assert_band(ScaleKind::Tinetti, 19.0, "中等跌倒风险", RiskLevel::Medium);
    assert_band(ScaleKind::Tinetti, 18.0, "高跌倒风险", RiskLevel::High);

    // Balance items come first in rubric order, so 20 = 16 balance + 4 gait.
    let result = instrument(ScaleKind::Tinetti)
        .score(&responses_totaling(ScaleKind::Tinetti, 20.0), &ScoringContext::default())
        .unwrap();
    assert_eq!(result.components["balance_score"], 16.0);
    assert_eq!(result.components["gait_score"], 4.0);
}

#[test]
fn nihss_bands() {
    assert_band(ScaleKind::Nihss, 0.0, "无卒中症状", RiskLevel::Low);
    assert_band(ScaleKind::Nihss, 1.0, "轻微卒中", RiskLevel::Low);
    assert_band(ScaleKind::Nihss, 4.0, "轻微卒中", RiskLevel::Low);
    assert_band(ScaleKind::Nihss, 5.0, "轻到中度卒中", RiskLevel::Medium);
    assert_band(ScaleKind::Nihss, 15.0, "轻到中度卒中", RiskLevel::Medium);
    assert_band(ScaleKind::Nihss, 16.0, "中到重度卒中", RiskLevel::High);
    assert_band(ScaleKind::Nihss, 20.0, "中到重度卒中", RiskLevel::High);
    assert_band(ScaleKind::Nihss, 21.0, "重度卒中", RiskLevel::VeryHigh);
    assert_band(ScaleKind::Nihss, 42.0, "重度卒中", RiskLevel::VeryHigh);
}

#[test]
fn gcs_bands_and_components() {
    assert_band(ScaleKind::Gcs, 15.0, "轻度意识障碍", RiskLevel::Low);
    assert_band(ScaleKind::Gcs, 13.0, "轻度意识障碍", RiskLevel::Low);
    assert_band(ScaleKind::Gcs, 12.0, "中度意识障碍", RiskLevel::High);
    assert_band(ScaleKind::Gcs, 9.0, "中度意识障碍", RiskLevel::High);
    assert_band(ScaleKind::Gcs, 8.0, "重度意识障碍", RiskLevel::VeryHigh);
    assert_band(ScaleKind::Gcs, 3.0, "重度意识障碍", RiskLevel::VeryHigh);

    let responses: ResponseSet = [("eye", 3.0), ("verbal", 4.0), ("motor", 6.0)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let result = instrument(ScaleKind::Gcs)
        .score(&responses, &ScoringContext::default())
        .unwrap();
    assert_eq!(result.total_score, 13.0);
    assert_eq!(result.components["eye_score"], 3.0);
    assert_eq!(result.components["verbal_score"], 4.0);
    assert_eq!(result.components["motor_score"], 6.0);
}

#[test]
fn gcs_rejects_zero() {
    let responses: ResponseSet = [("eye", 0.0), ("verbal", 1.0), ("motor", 1.0)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let err = instrument(ScaleKind::Gcs).validate(&responses).unwrap_err();
    assert_eq!(err.item_id(), Some("eye"));
}

#[test]
fn mrs_grades() {
    let expected = [
        ("无症状", RiskLevel::Low),
        ("无明显残疾", RiskLevel::Low),
        ("轻度残疾", RiskLevel::Medium),
        ("中度残疾", RiskLevel::Medium),
        ("中重度残疾", RiskLevel::High),
        ("重度残疾", RiskLevel::VeryHigh),
        ("死亡", RiskLevel::VeryHigh),
    ];
    for (grade, (level, risk)) in expected.into_iter().enumerate() {
        assert_band(ScaleKind::Mrs, grade as f64, level, risk);
    }
}

// ── MoCA education correction ────────────────────────────────────────────

fn moca(raw: f64, education_years: Option<u32>) -> neuroscale_core::models::score::ScoreResult {
    instrument(ScaleKind::Moca)
        .score(
            &responses_totaling(ScaleKind::Moca, raw),
            &ScoringContext { education_years },
        )
        .unwrap()
}

#[test]
fn moca_adds_a_point_for_short_education() {
    let result = moca(25.0, Some(12));
    assert_eq!(result.total_score, 26.0);
    assert_eq!(result.level, "正常");
    assert_eq!(result.components["raw_score"], 25.0);
    assert_eq!(result.components["education_bonus"], 1.0);
}

#[test]
fn moca_no_bonus_above_twelve_years_or_unknown() {
    for years in [Some(13), None] {
        let result = moca(25.0, years);
        assert_eq!(result.total_score, 25.0);
        assert_eq!(result.level, "轻度认知障碍");
        assert_eq!(result.components["education_bonus"], 0.0);
    }
}

#[test]
fn moca_bonus_is_capped() {
    let result = moca(30.0, Some(6));
    assert_eq!(result.total_score, 30.0);
    assert_eq!(result.components["education_bonus"], 0.0);
}

// ── CDR global rating ────────────────────────────────────────────────────

fn cdr_responses(boxes: [f64; 6]) -> ResponseSet {
    neuroscale_instruments::instruments::cdr::DOMAIN_IDS
        .iter()
        .zip(boxes)
        .map(|(id, v)| (id.to_string(), v))
        .collect()
}

#[test]
fn cdr_memory_wins_with_three_matching_boxes() {
    assert_eq!(global_score(&[1.0, 1.0, 1.0, 1.0, 0.5, 0.5]), 1.0);
    assert_eq!(global_score(&[0.5, 0.5, 0.5, 0.5, 2.0, 2.0]), 0.5);
}

#[test]
fn cdr_falls_back_to_most_frequent_box() {
    assert_eq!(global_score(&[2.0, 1.0, 1.0, 1.0, 0.5, 3.0]), 1.0);
    assert_eq!(global_score(&[0.0, 0.5, 0.5, 0.5, 0.5, 0.0]), 0.5);
}

#[test]
fn cdr_reference_ratings() {
    assert_eq!(global_score(&[1.0, 1.0, 1.0, 1.0, 0.5, 2.0]), 1.0);
    assert_eq!(global_score(&[0.0, 1.0, 1.0, 2.0, 2.0, 2.0]), 2.0);
}

#[test]
fn cdr_tie_goes_to_first_in_domain_order() {
    // 1 and 2 each appear twice; memory (3) appears once.
    assert_eq!(global_score(&[3.0, 2.0, 1.0, 2.0, 1.0, 0.0]), 2.0);
}

#[test]
fn cdr_result_carries_sum_of_boxes() {
    let result = instrument(ScaleKind::Cdr)
        .score(
            &cdr_responses([0.5, 0.5, 0.5, 0.5, 0.0, 0.0]),
            &ScoringContext::default(),
        )
        .unwrap();
    assert_eq!(result.total_score, 0.5);
    assert_eq!(result.level, "可疑痴呆");
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.components["sum_of_boxes"], 2.0);
}

#[test]
fn cdr_rejects_values_off_the_box_scale() {
    let err = instrument(ScaleKind::Cdr)
        .validate(&cdr_responses([1.5, 0.0, 0.0, 0.0, 0.0, 0.0]))
        .unwrap_err();
    assert!(matches!(
        err,
        ScoringError::InvalidResponse { ref item_id, .. } if item_id == "memory"
    ));
}

// ── Sub-domain breakdowns ────────────────────────────────────────────────

#[test]
fn mmse_domains_are_labelled_by_percentage() {
    let mut responses = responses_totaling(ScaleKind::Mmse, 30.0);
    // Recall 1 of 3 (33.3%), orientation 7 of 10 (70%).
    responses.insert("20".to_string(), 0.0);
    responses.insert("21".to_string(), 0.0);
    for id in ["8", "9", "10"] {
        responses.insert(id.to_string(), 0.0);
    }
    let result = instrument(ScaleKind::Mmse)
        .score(&responses, &ScoringContext::default())
        .unwrap();
    let domains = result.domain_analysis.unwrap();

    let names: Vec<&str> = domains.keys().map(String::as_str).collect();
    assert_eq!(names, ["定向力", "记忆力", "注意力和计算", "回忆", "语言"]);

    assert_eq!(domains["回忆"].score, 1.0);
    assert_eq!(domains["回忆"].max_score, 3.0);
    assert_eq!(domains["回忆"].percentage, 33.3);
    assert_eq!(domains["回忆"].level.as_deref(), Some("重度受损"));
    assert_eq!(domains["定向力"].level.as_deref(), Some("轻度受损"));
    assert_eq!(domains["语言"].level.as_deref(), Some("正常"));
    assert!(domains["语言"].severity.is_none());
}

#[test]
fn hamd_symptom_clusters_use_four_points_per_item() {
    let mut responses = responses_totaling(ScaleKind::Hamd, 0.0);
    responses.insert("1".to_string(), 4.0);
    responses.insert("2".to_string(), 2.0);
    let result = instrument(ScaleKind::Hamd)
        .score(&responses, &ScoringContext::default())
        .unwrap();
    assert!(result.domain_analysis.is_none());
    let symptoms = result.symptom_analysis.unwrap();

    let mood = &symptoms["情绪症状"];
    assert_eq!(mood.max_score, 12.0);
    assert_eq!(mood.percentage, 50.0);
    assert_eq!(mood.severity.as_deref(), Some("中度"));
    assert!(mood.level.is_none());
    assert!(mood.description.is_some());

    // Sleep items are scored 0–2 but the cluster maximum still counts 4 each.
    assert_eq!(symptoms["躯体症状"].max_score, 24.0);
    assert_eq!(symptoms["躯体症状"].severity.as_deref(), Some("轻微"));
}

#[test]
fn updrs_motor_domains() {
    let result = instrument(ScaleKind::Updrs)
        .score(&responses_totaling(ScaleKind::Updrs, 8.0), &ScoringContext::default())
        .unwrap();
    let motor = result.motor_analysis.unwrap();
    assert_eq!(motor.len(), 6);
    assert_eq!(motor["言语和面部表情"].score, 8.0);
    assert_eq!(motor["言语和面部表情"].severity.as_deref(), Some("重度"));
    assert_eq!(motor["整体运动"].max_score, 4.0);
    assert_eq!(motor["整体运动"].severity.as_deref(), Some("轻微"));
}

#[test]
fn updrs_group_percentage_rounds_half_to_even() {
    let posture = |scores: [f64; 4]| {
        let mut responses = responses_totaling(ScaleKind::Updrs, 0.0);
        for (id, v) in ["10", "11", "12", "13"].into_iter().zip(scores) {
            responses.insert(id.to_string(), v);
        }
        let result = instrument(ScaleKind::Updrs)
            .score(&responses, &ScoringContext::default())
            .unwrap();
        result.motor_analysis.unwrap()["姿势和步态"].percentage
    };
    // Out of 16: 1/16 = 6.25%, 13/16 = 81.25%.
    assert_eq!(posture([1.0, 0.0, 0.0, 0.0]), 6.2);
    assert_eq!(posture([4.0, 4.0, 4.0, 1.0]), 81.2);
    assert_eq!(posture([4.0, 1.0, 0.0, 0.0]), 31.2);
}

// ── Validation ───────────────────────────────────────────────────────────

#[test]
fn missing_item_is_named() {
    let mut responses = responses_totaling(ScaleKind::Berg, 40.0);
    responses.shift_remove("7");
    let err = instrument(ScaleKind::Berg)
        .score(&responses, &ScoringContext::default())
        .unwrap_err();
    assert_eq!(
        err,
        ScoringError::MissingResponse {
            scale: "Berg".to_string(),
            item_id: "7".to_string(),
        }
    );
}

#[test]
fn out_of_range_and_fractional_values_are_invalid() {
    let inst = instrument(ScaleKind::Hamd);
    for bad in [3.0, -1.0, 1.5, f64::NAN] {
        let mut responses = responses_totaling(ScaleKind::Hamd, 0.0);
        // Item 4 is scored 0–2.
        responses.insert("4".to_string(), bad);
        let err = inst.validate(&responses).unwrap_err();
        assert!(
            matches!(err, ScoringError::InvalidResponse { ref item_id, .. } if item_id == "4"),
            "{bad}: {err}"
        );
    }
}

#[test]
fn unknown_item_is_reported_after_rubric_problems() {
    let mut responses = responses_totaling(ScaleKind::Mrs, 2.0);
    responses.insert("bogus".to_string(), 1.0);
    let errors = instrument(ScaleKind::Mrs).validation_errors(&responses);
    assert_eq!(
        errors,
        [ScoringError::UnknownItem {
            scale: "mRS".to_string(),
            item_id: "bogus".to_string(),
        }]
    );

    responses.insert("mrs".to_string(), 9.0);
    let errors = instrument(ScaleKind::Mrs).validation_errors(&responses);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].item_id(), Some("mrs"));
    assert_eq!(errors[1].item_id(), Some("bogus"));
}

#[test]
fn empty_responses_report_every_item() {
    let errors = instrument(ScaleKind::Gcs).validation_errors(&ResponseSet::new());
    let ids: Vec<_> = errors.iter().filter_map(ScoringError::item_id).collect();
    assert_eq!(ids, ["eye", "verbal", "motor"]);
}

// ── Text rendering ───────────────────────────────────────────────────────

#[test]
fn structured_text_lists_answered_items_by_section() {
    let responses: ResponseSet = [("eye", 4.0), ("motor", 6.0)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let text = instrument(ScaleKind::Gcs).to_structured_text(&responses);
    assert!(text.starts_with("## 格拉斯哥昏迷量表 (GCS)\n"));
    assert!(text.contains("### GCS评估项目\n"));
    assert!(text.contains("- 睁眼反应 (E): 4\n"));
    assert!(text.contains("- 运动反应 (M): 6\n"));
    assert!(!text.contains("语言反应"));
}
