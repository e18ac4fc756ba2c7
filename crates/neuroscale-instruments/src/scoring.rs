use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{
    DomainBreakdown, DomainScore, RiskLevel, ScoreResult, percentage,
};

/// Defines the valid range for an item score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn whole(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One scorable question within a scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub range: ScoreRange,
    /// Explicit option values when the range is not evenly stepped
    /// (CDR boxes: 0, 0.5, 1, 2, 3).
    pub options: Option<Vec<f64>>,
}

impl Item {
    pub fn new(id: &str, name: &str, range: ScoreRange) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            range,
            options: None,
        }
    }

    pub fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match &self.options {
            Some(options) => options.iter().any(|o| (o - value).abs() < 1e-9),
            None => self.range.contains(value),
        }
    }
}

/// A named group of items, shown together on the form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
    pub description: Option<String>,
}

/// Extra facts about the patient some scales need.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringContext {
    pub education_years: Option<u32>,
}

/// Comparison a total (or percentage) must satisfy to fall into a band.
#[derive(Debug, Clone, Copy)]
pub enum Cutoff {
    AtLeast(f64),
    AtMost(f64),
    Below(f64),
    Exactly(f64),
    Otherwise,
}

impl Cutoff {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Cutoff::AtLeast(t) => value >= t,
            Cutoff::AtMost(t) => value <= t,
            Cutoff::Below(t) => value < t,
            Cutoff::Exactly(t) => (value - t).abs() < 1e-9,
            Cutoff::Otherwise => true,
        }
    }
}

/// One row of a scale's classification table.
#[derive(Debug)]
pub struct Band {
    pub cutoff: Cutoff,
    pub level: &'static str,
    pub risk: RiskLevel,
    pub interpretation: &'static str,
    pub recommendations: &'static [&'static str],
}

/// First band whose cutoff admits `total`. Tables end in
/// [`Cutoff::Otherwise`]; if one does not, the last row is used.
pub fn classify<const N: usize>(bands: &'static [Band; N], total: f64) -> &'static Band {
    bands
        .iter()
        .find(|b| b.cutoff.admits(total))
        .unwrap_or(&bands[N - 1])
}

/// Assemble the common part of a result from a total and its band.
pub fn banded_result(total: f64, max: f64, band: &Band) -> ScoreResult {
    ScoreResult {
        total_score: total,
        max_score: max,
        percentage: percentage(total, max),
        level: band.level.to_string(),
        risk_level: band.risk,
        interpretation: band.interpretation.to_string(),
        domain_analysis: None,
        symptom_analysis: None,
        motor_analysis: None,
        components: IndexMap::new(),
        recommendations: band.recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

/// Sum of the responses for the given item ids. Absent ids count as zero;
/// callers validate completeness first.
pub fn sum_of(responses: &ResponseSet, item_ids: &[&str]) -> f64 {
    item_ids
        .iter()
        .map(|id| responses.get(*id).copied().unwrap_or(0.0))
        .sum()
}

/// Sum of the responses for every item in the given sections.
pub fn sections_total(sections: &[Section], responses: &ResponseSet) -> f64 {
    sections
        .iter()
        .flat_map(|s| &s.items)
        .map(|i| responses.get(&i.id).copied().unwrap_or(0.0))
        .sum()
}

/// Which field of [`DomainScore`] a group label is written to.
#[derive(Debug, Clone, Copy)]
pub enum LabelField {
    Level,
    Severity,
}

#[derive(Debug)]
pub struct Group {
    pub name: &'static str,
    pub items: &'static [&'static str],
    pub description: Option<&'static str>,
}

/// Sub-domain grouping for one scale: its groups, the per-item maximum used
/// for group maxima, and its own percentage → label table.
#[derive(Debug)]
pub struct GroupTable {
    pub groups: &'static [Group],
    pub per_item_max: f64,
    pub labels: &'static [(Cutoff, &'static str)],
    pub label_field: LabelField,
}

impl GroupTable {
    pub fn analyze(&self, responses: &ResponseSet) -> DomainBreakdown {
        let mut breakdown = DomainBreakdown::new();
        for group in self.groups {
            let score = sum_of(responses, group.items);
            let max_score = group.items.len() as f64 * self.per_item_max;
            let pct = percentage(score, max_score);
            let label = self
                .labels
                .iter()
                .find(|(cutoff, _)| cutoff.admits(pct))
                .or_else(|| self.labels.last())
                .map(|(_, label)| label.to_string());
            let (level, severity) = match self.label_field {
                LabelField::Level => (label, None),
                LabelField::Severity => (None, label),
            };
            breakdown.insert(
                group.name.to_string(),
                DomainScore {
                    score,
                    max_score,
                    percentage: pct,
                    level,
                    severity,
                    description: group.description.map(str::to_string),
                },
            );
        }
        breakdown
    }
}
