//! Record schema normalization.
//!
//! Older builds wrote records in several shapes: `scale_name` instead of
//! `scale_type`, `scores` instead of `responses`, flat score and patient
//! fields instead of the nested objects, and so on. [`RULES`] lists, for each
//! canonical field, the chain of places its value may come from. The rules run
//! once per record, in order, and build a fresh canonical object that is then
//! deserialized as an [`AssessmentRecord`].
//!
//! A record already in canonical form comes out unchanged.

use serde_json::{Map, Value};

use neuroscale_core::models::patient::{ANONYMOUS_PATIENT, PatientInfo, UNKNOWN_VALUE};
use neuroscale_core::models::record::{AssessmentRecord, ResponseSet};
use neuroscale_core::models::score::{
    DomainBreakdown, DomainScore, RiskLevel, ScoreResult, percentage,
};
use neuroscale_core::record_keys;
use neuroscale_core::scale::ScaleKind;

type Object = Map<String, Value>;

/// Assessor recorded for files that never carried one.
pub const UNKNOWN_ASSESSOR: &str = "Unknown";

/// Part-scores older builds stored as loose fields next to the total.
const COMPONENT_KEYS: [&str; 5] = [
    "eye_score",
    "verbal_score",
    "motor_score",
    "balance_score",
    "gait_score",
];

/// How one canonical field is filled from a raw record.
struct Rule {
    field: &'static str,
    fill: fn(&Object) -> Result<Value, String>,
}

static RULES: [Rule; 6] = [
    Rule {
        field: "scale_type",
        fill: scale_type,
    },
    Rule {
        field: "patient_info",
        fill: patient_info,
    },
    Rule {
        field: "responses",
        fill: responses,
    },
    Rule {
        field: "score_result",
        fill: score_result,
    },
    Rule {
        field: "assessment_time",
        fill: assessment_time,
    },
    Rule {
        field: "assessor",
        fill: assessor,
    },
];

/// Normalize one raw record. The error is a human-readable reason.
pub fn normalize(raw: Value) -> Result<AssessmentRecord, String> {
    let Value::Object(source) = raw else {
        return Err("not a JSON object".to_string());
    };

    let mut canonical = Object::new();
    for rule in &RULES {
        let value = (rule.fill)(&source).map_err(|reason| format!("{}: {reason}", rule.field))?;
        canonical.insert(rule.field.to_string(), value);
    }
    serde_json::from_value(Value::Object(canonical)).map_err(|e| e.to_string())
}

// ── Rules ────────────────────────────────────────────────────────────────

fn scale_type(record: &Object) -> Result<Value, String> {
    let id = first_text(record, &["scale_type", "scale_name"]).ok_or("no scale identifier")?;
    // Known scales are stored under their canonical id ("HAMD-17" → "HAMD").
    let id = id
        .parse::<ScaleKind>()
        .map(|kind| kind.id().to_string())
        .unwrap_or(id);
    Ok(Value::String(id))
}

fn patient_info(record: &Object) -> Result<Value, String> {
    let (source, name_key) = match record.get("patient_info").and_then(Value::as_object) {
        Some(info) => (info, "name"),
        None => (record, "patient_name"),
    };
    let info = PatientInfo {
        name: stored_text(source, name_key).unwrap_or_else(|| ANONYMOUS_PATIENT.to_string()),
        age: stored_text(source, "age").unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
        gender: stored_text(source, "gender").unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
        education: stored_text(source, "education"),
        assessment_date: stored_text(source, "assessment_date").unwrap_or_default(),
    };
    serde_json::to_value(info).map_err(|e| e.to_string())
}

fn responses(record: &Object) -> Result<Value, String> {
    let items = ["responses", "scores"]
        .iter()
        .find_map(|key| record.get(*key)?.as_object().filter(|m| !m.is_empty()));
    let set: ResponseSet = items
        .into_iter()
        .flatten()
        .filter_map(|(id, value)| Some((id.clone(), number(value)?)))
        .collect();
    serde_json::to_value(set).map_err(|e| e.to_string())
}

fn score_result(record: &Object) -> Result<Value, String> {
    let nested = record.get("score_result").and_then(Value::as_object);
    let source = nested.unwrap_or(record);
    let level_keys: &[&str] = match nested {
        Some(_) => &["level", "severity"],
        None => &["severity", "level"],
    };

    let total_score = first_number(source, &["total_score", "score"]).unwrap_or(0.0);
    let max_score = first_number(source, &["max_score"]).unwrap_or(0.0);
    // Flat records carried a percentage computed by hand; recompute it.
    let percentage = match (nested, first_number(source, &["percentage"])) {
        (Some(_), Some(stored)) => stored,
        _ => percentage(total_score, max_score),
    };

    let mut components: indexmap::IndexMap<String, f64> = source
        .get("components")
        .and_then(Value::as_object)
        .into_iter()
        .flatten()
        .filter_map(|(key, value)| Some((key.clone(), number(value)?)))
        .collect();
    for key in COMPONENT_KEYS {
        if let Some(value) = first_number(source, &[key]) {
            components.entry(key.to_string()).or_insert(value);
        }
    }

    let result = ScoreResult {
        total_score,
        max_score,
        percentage,
        level: first_text(source, level_keys).unwrap_or_default(),
        risk_level: first_text(source, &["risk_level"])
            .and_then(|label| RiskLevel::from_label(&label))
            .unwrap_or_default(),
        interpretation: first_text(source, &["interpretation"]).unwrap_or_default(),
        domain_analysis: breakdown(source.get("domain_analysis")),
        symptom_analysis: breakdown(source.get("symptom_analysis")),
        motor_analysis: breakdown(source.get("motor_analysis")),
        components,
        recommendations: source
            .get("recommendations")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(text)
            .collect(),
    };
    serde_json::to_value(result).map_err(|e| e.to_string())
}

fn assessment_time(record: &Object) -> Result<Value, String> {
    let raw = first_text(record, &["assessment_time", "assessment_date", "timestamp"])
        .or_else(|| {
            let info = record.get("patient_info")?.as_object()?;
            first_text(info, &["assessment_date"])
        })
        .unwrap_or_default();
    // Rewrite parseable times in the canonical fixed-width form so that
    // string order stays time order across schemas.
    let time = match record_keys::parse_assessment_time(&raw) {
        Some(at) => record_keys::assessment_time(&at),
        None => raw,
    };
    Ok(Value::String(time))
}

fn assessor(record: &Object) -> Result<Value, String> {
    Ok(Value::String(
        stored_text(record, "assessor").unwrap_or_else(|| UNKNOWN_ASSESSOR.to_string()),
    ))
}

// ── Field access ─────────────────────────────────────────────────────────

fn breakdown(value: Option<&Value>) -> Option<DomainBreakdown> {
    let groups = value?.as_object()?;
    Some(
        groups
            .iter()
            .filter_map(|(name, group)| {
                let group = group.as_object()?;
                let score = first_number(group, &["score"]).unwrap_or(0.0);
                let max_score = first_number(group, &["max_score"]).unwrap_or(0.0);
                let domain = DomainScore {
                    score,
                    max_score,
                    percentage: first_number(group, &["percentage"])
                        .unwrap_or_else(|| percentage(score, max_score)),
                    level: stored_text(group, "level"),
                    severity: stored_text(group, "severity"),
                    description: stored_text(group, "description"),
                };
                Some((name.clone(), domain))
            })
            .collect(),
    )
}

/// Non-blank string, or a number rendered as text (ages were sometimes
/// stored as numbers).
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Text stored under `key`, blank included. Defaults apply only to absent
/// or null fields, so a blank form field reads back as it was saved.
fn stored_text(object: &Object, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Value of the first key in the chain that holds usable text.
fn first_text(object: &Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| object.get(*key).and_then(text))
}

fn first_number(object: &Object, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| object.get(*key).and_then(number))
}
