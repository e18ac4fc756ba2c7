//! neuroscale-instruments
//!
//! Clinical scale definitions and scoring rules. Pure data and arithmetic,
//! no I/O. Each supported scale is one [`Instrument`] carrying its rubric
//! (sections and items), its classification table and its scorer.

pub mod error;
pub mod instruments;
pub mod scoring;

use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::ScoreResult;
use neuroscale_core::scale::ScaleKind;

use error::ScoringError;
use scoring::{Item, ScoringContext, Section};

/// Trait implemented by each clinical scale.
pub trait Instrument: Send + Sync {
    fn kind(&self) -> ScaleKind;

    /// Identifier used in record files (e.g. "MMSE", "mRS").
    fn id(&self) -> &str {
        self.kind().id()
    }

    /// Human-readable name (e.g. "简易精神状态检查 (MMSE)").
    fn name(&self) -> &str;

    fn max_score(&self) -> f64;

    /// The sections and items of this scale, in form order.
    fn sections(&self) -> &[Section];

    /// Score a validated response set. Callers go through [`Instrument::score`].
    fn compute(&self, responses: &ResponseSet, context: &ScoringContext) -> ScoreResult;

    /// Validate, then score.
    fn score(
        &self,
        responses: &ResponseSet,
        context: &ScoringContext,
    ) -> Result<ScoreResult, ScoringError> {
        self.validate(responses)?;
        Ok(self.compute(responses, context))
    }

    fn item(&self, item_id: &str) -> Option<&Item> {
        self.sections()
            .iter()
            .flat_map(|s| &s.items)
            .find(|i| i.id == item_id)
    }

    /// Every problem with a response set, in rubric order; unknown ids last.
    fn validation_errors(&self, responses: &ResponseSet) -> Vec<ScoringError> {
        let mut errors = Vec::new();
        for item in self.sections().iter().flat_map(|s| &s.items) {
            match responses.get(&item.id) {
                None => errors.push(ScoringError::MissingResponse {
                    scale: self.id().to_string(),
                    item_id: item.id.clone(),
                }),
                Some(&value) if !item.accepts(value) => {
                    errors.push(ScoringError::InvalidResponse {
                        scale: self.id().to_string(),
                        item_id: item.id.clone(),
                        value,
                        message: format!(
                            "{} must be within [{}, {}]",
                            item.name, item.range.min, item.range.max
                        ),
                    })
                }
                Some(_) => {}
            }
        }
        for item_id in responses.keys() {
            if self.item(item_id).is_none() {
                errors.push(ScoringError::UnknownItem {
                    scale: self.id().to_string(),
                    item_id: item_id.clone(),
                });
            }
        }
        errors
    }

    /// First validation problem, if any.
    fn validate(&self, responses: &ResponseSet) -> Result<(), ScoringError> {
        match self.validation_errors(responses).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Format item scores as plain structured text for reports and exports.
    fn to_structured_text(&self, responses: &ResponseSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for section in self.sections() {
            output.push_str(&format!("### {}\n", section.name));
            for item in &section.items {
                if let Some(value) = responses.get(&item.id) {
                    output.push_str(&format!("- {}: {}\n", item.name, value));
                }
            }
            output.push('\n');
        }
        output
    }
}

/// The instrument for a scale.
pub fn instrument(kind: ScaleKind) -> &'static dyn Instrument {
    use crate::instruments::*;
    match kind {
        ScaleKind::Mmse => &mmse::Mmse,
        ScaleKind::Moca => &moca::Moca,
        ScaleKind::Cdr => &cdr::Cdr,
        ScaleKind::Hamd => &hamd::Hamd,
        ScaleKind::Hama => &hama::Hama,
        ScaleKind::Updrs => &updrs::Updrs,
        ScaleKind::Berg => &berg::Berg,
        ScaleKind::Tinetti => &tinetti::Tinetti,
        ScaleKind::Nihss => &nihss::Nihss,
        ScaleKind::Gcs => &gcs::Gcs,
        ScaleKind::Mrs => &mrs::Mrs,
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    ScaleKind::ALL.into_iter().map(instrument).collect()
}

/// Look up an instrument by ID (case-insensitive).
pub fn get_instrument(id: &str) -> Option<&'static dyn Instrument> {
    id.parse::<ScaleKind>().ok().map(instrument)
}

/// Score a response set for the scale with the given ID.
pub fn score(
    scale_id: &str,
    responses: &ResponseSet,
    context: &ScoringContext,
) -> Result<ScoreResult, ScoringError> {
    get_instrument(scale_id)
        .ok_or_else(|| ScoringError::UnknownScale(scale_id.to_string()))?
        .score(responses, context)
}
