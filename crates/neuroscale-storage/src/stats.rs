//! Aggregates over loaded records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuroscale_core::models::record::AssessmentRecord;
use neuroscale_core::models::score::{RiskLevel, round1};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Summary {
    pub total_assessments: usize,
    /// Record count per scale, in order of first appearance.
    pub scale_types: IndexMap<String, usize>,
    /// Record count per risk label. Always holds all four labels.
    pub risk_distribution: IndexMap<String, usize>,
    /// Oldest first.
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimelineEntry {
    pub date: String,
    pub scale_type: String,
    pub score: f64,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Statistics {
    pub total_assessments: usize,
    pub scales: IndexMap<String, ScaleStatistics>,
    pub patients: IndexMap<String, PatientStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleStatistics {
    pub count: usize,
    /// Rounded to one decimal.
    pub mean_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub level_distribution: IndexMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientStatistics {
    pub count: usize,
    /// Scales this patient was assessed with, in order of first appearance.
    pub scales: Vec<String>,
    pub latest_assessment: String,
    pub latest_level: String,
}

pub fn summarize(records: &[AssessmentRecord]) -> Summary {
    let mut scale_types = IndexMap::new();
    let mut risk_distribution: IndexMap<String, usize> = RiskLevel::ALL
        .iter()
        .map(|risk| (risk.label().to_string(), 0))
        .collect();
    let mut timeline = Vec::with_capacity(records.len());

    for record in records {
        *scale_types.entry(record.scale_type.clone()).or_insert(0) += 1;
        *risk_distribution
            .entry(record.score_result.risk_level.label().to_string())
            .or_insert(0) += 1;
        timeline.push(TimelineEntry {
            date: record.assessment_time.clone(),
            scale_type: record.scale_type.clone(),
            score: record.score_result.total_score,
            level: record.score_result.level.clone(),
        });
    }
    timeline.sort_by(|a, b| a.date.cmp(&b.date));

    Summary {
        total_assessments: records.len(),
        scale_types,
        risk_distribution,
        timeline,
    }
}

pub fn statistics(records: &[AssessmentRecord]) -> Statistics {
    let mut by_scale: IndexMap<&str, Vec<&AssessmentRecord>> = IndexMap::new();
    let mut by_patient: IndexMap<&str, Vec<&AssessmentRecord>> = IndexMap::new();
    for record in records {
        by_scale.entry(record.scale_type.as_str()).or_default().push(record);
        by_patient
            .entry(record.patient_info.name.as_str())
            .or_default()
            .push(record);
    }

    Statistics {
        total_assessments: records.len(),
        scales: by_scale
            .into_iter()
            .map(|(scale, group)| (scale.to_string(), scale_statistics(&group)))
            .collect(),
        patients: by_patient
            .into_iter()
            .filter_map(|(name, group)| Some((name.to_string(), patient_statistics(&group)?)))
            .collect(),
    }
}

fn scale_statistics(group: &[&AssessmentRecord]) -> ScaleStatistics {
    let scores: Vec<f64> = group.iter().map(|r| r.score_result.total_score).collect();
    let mut level_distribution = IndexMap::new();
    for record in group {
        *level_distribution
            .entry(record.score_result.level.clone())
            .or_insert(0) += 1;
    }

    ScaleStatistics {
        count: group.len(),
        mean_score: round1(scores.iter().sum::<f64>() / scores.len().max(1) as f64),
        min_score: scores.iter().copied().fold(f64::INFINITY, f64::min),
        max_score: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        level_distribution,
    }
}

fn patient_statistics(group: &[&AssessmentRecord]) -> Option<PatientStatistics> {
    // max_by keeps the last maximum; scan in reverse so ties go to the
    // earliest record, which comes first in load order.
    let latest = group
        .iter()
        .rev()
        .max_by(|a, b| a.assessment_time.cmp(&b.assessment_time))?;

    let mut scales: Vec<String> = Vec::new();
    for record in group {
        if !scales.contains(&record.scale_type) {
            scales.push(record.scale_type.clone());
        }
    }

    Some(PatientStatistics {
        count: group.len(),
        scales,
        latest_assessment: latest.assessment_time.clone(),
        latest_level: latest.score_result.level.clone(),
    })
}
