use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse four-band risk classification shared by every scale.
///
/// Serialized with the labels stored in record files.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum RiskLevel {
    #[default]
    #[serde(rename = "低")]
    Low,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "高")]
    High,
    #[serde(rename = "极高")]
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "低",
            RiskLevel::Medium => "中",
            RiskLevel::High => "高",
            RiskLevel::VeryHigh => "极高",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        RiskLevel::ALL.into_iter().find(|r| r.label() == label.trim())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score of one named group of items within a scale.
///
/// MMSE groups carry `level`; HAMD and UPDRS groups carry `severity` and a
/// `description` of the symptoms covered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Sub-domain breakdown keyed by group name, in rubric order.
pub type DomainBreakdown = IndexMap<String, DomainScore>;

/// The outcome of scoring one completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total_score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub level: String,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_analysis: Option<DomainBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptom_analysis: Option<DomainBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_analysis: Option<DomainBreakdown>,
    /// Named part-scores (GCS E/V/M, Tinetti balance/gait, ...).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub components: IndexMap<String, f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// `total / max * 100`, rounded to one decimal.
///
/// A missing or zero `max` divides by 1 instead, so degenerate legacy data
/// still yields a number.
pub fn percentage(total: f64, max: f64) -> f64 {
    let divisor = if max > 0.0 { max } else { 1.0 };
    round1(total / divisor * 100.0)
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
