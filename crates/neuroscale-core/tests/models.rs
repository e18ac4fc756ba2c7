use neuroscale_core::models::patient::PatientInfo;
use neuroscale_core::models::record::AssessmentRecord;
use neuroscale_core::models::score::{RiskLevel, ScoreResult, percentage};
use neuroscale_core::record_keys;
use neuroscale_core::scale::ScaleKind;

fn at() -> jiff::civil::DateTime {
    jiff::civil::date(2024, 3, 5).at(14, 7, 9, 0)
}

fn sample_result() -> ScoreResult {
    ScoreResult {
        total_score: 27.0,
        max_score: 30.0,
        percentage: 90.0,
        level: "正常".to_string(),
        risk_level: RiskLevel::Low,
        interpretation: "认知功能正常".to_string(),
        domain_analysis: None,
        symptom_analysis: None,
        motor_analysis: None,
        components: Default::default(),
        recommendations: vec!["定期进行认知功能评估".to_string()],
    }
}

#[test]
fn percentage_rounds_to_one_decimal() {
    assert_eq!(percentage(27.0, 30.0), 90.0);
    assert_eq!(percentage(7.0, 52.0), 13.5);
    assert_eq!(percentage(1.0, 3.0), 33.3);
    // Exact halves round to even.
    assert_eq!(percentage(1.0, 16.0), 6.2);
    assert_eq!(percentage(9.0, 16.0), 56.2);
}

#[test]
fn percentage_with_zero_max_divides_by_one() {
    assert_eq!(percentage(12.0, 0.0), 1200.0);
    assert_eq!(percentage(0.0, 0.0), 0.0);
}

#[test]
fn risk_level_serializes_as_stored_labels() {
    let json = serde_json::to_string(&RiskLevel::VeryHigh).unwrap();
    assert_eq!(json, "\"极高\"");
    let parsed: RiskLevel = serde_json::from_str("\"中\"").unwrap();
    assert_eq!(parsed, RiskLevel::Medium);
    assert_eq!(RiskLevel::from_label(" 高 "), Some(RiskLevel::High));
    assert_eq!(RiskLevel::from_label("严重"), None);
}

#[test]
fn scale_kind_parses_case_insensitively() {
    assert_eq!("mmse".parse::<ScaleKind>().unwrap(), ScaleKind::Mmse);
    assert_eq!("MRS".parse::<ScaleKind>().unwrap(), ScaleKind::Mrs);
    assert_eq!("HAMD-17".parse::<ScaleKind>().unwrap(), ScaleKind::Hamd);
    assert_eq!("UPDRS-III".parse::<ScaleKind>().unwrap(), ScaleKind::Updrs);
    assert!("SDS".parse::<ScaleKind>().is_err());
    assert_eq!(ScaleKind::Moca.to_string(), "MoCA");
}

#[test]
fn education_years_reads_leading_digits() {
    let mut info = PatientInfo::default();
    assert_eq!(info.education_years(), None);
    info.education = Some("12年".to_string());
    assert_eq!(info.education_years(), Some(12));
    info.education = Some(" 9".to_string());
    assert_eq!(info.education_years(), Some(9));
    info.education = Some("高中".to_string());
    assert_eq!(info.education_years(), None);
}

#[test]
fn file_name_uses_scale_patient_and_second_stamp() {
    assert_eq!(
        record_keys::record_file_name("MMSE", "张三", &at()),
        "MMSE_张三_20240305_140709.json"
    );
    assert_eq!(
        record_keys::record_file_name("GCS", "  ", &at()),
        "GCS_Unknown_20240305_140709.json"
    );
    assert_eq!(
        record_keys::record_file_name("HAMA", "a/b:c", &at()),
        "HAMA_a_b_c_20240305_140709.json"
    );
}

#[test]
fn scale_prefix_match_requires_separator() {
    assert!(record_keys::file_matches_scale("HAMD_李四_20240101_000000.json", "HAMD"));
    assert!(!record_keys::file_matches_scale("HAMA_李四_20240101_000000.json", "HAMD"));
    assert!(!record_keys::file_matches_scale("MMSEX_李四.json", "MMSE"));
    assert!(record_keys::is_record_file("x.json"));
    assert!(!record_keys::is_record_file("x.json.tmp"));
    assert!(!record_keys::is_record_file(".json"));
}

#[test]
fn assessment_time_accepts_legacy_separators() {
    assert_eq!(record_keys::assessment_time(&at()), "2024-03-05T14:07:09");
    assert_eq!(
        record_keys::parse_assessment_time("2024-03-05 14:07:09"),
        Some(at())
    );
    assert!(record_keys::parse_assessment_time("2024-03-05T14:07:09.123456").is_some());
    assert_eq!(
        record_keys::parse_assessment_time("20240305_140709"),
        Some(at())
    );
    assert!(record_keys::parse_assessment_time("yesterday").is_none());
}

#[test]
fn record_json_round_trips() {
    let record = AssessmentRecord::new(
        "MMSE",
        PatientInfo {
            name: "张三".to_string(),
            age: "72".to_string(),
            gender: "男".to_string(),
            education: Some("9".to_string()),
            assessment_date: "2024-03-05".to_string(),
        },
        [("1".to_string(), 1.0)].into_iter().collect(),
        sample_result(),
        "LIUYING",
        at(),
    );
    assert_eq!(record.file_name(), "MMSE_张三_20240305_140709.json");

    let bytes = record.to_json_pretty().unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains("\"risk_level\": \"低\""));
    assert!(!text.contains("domain_analysis"));
    assert_eq!(AssessmentRecord::from_json(&bytes).unwrap(), record);
}
