//! Commands invoked by the UI. Errors cross the boundary as strings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuroscale_core::models::patient::PatientInfo;
use neuroscale_core::models::record::{AssessmentRecord, ResponseSet};
use neuroscale_core::models::score::ScoreResult;
use neuroscale_instruments::scoring::{ScoringContext, Section};
use neuroscale_instruments::{Instrument, all_instruments, get_instrument};
use neuroscale_storage::stats::{Statistics, Summary};

use crate::config::{self, NeuroscaleConfig};
use crate::state::DesktopState;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleInfo {
    pub id: String,
    pub name: String,
    pub max_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDetail {
    pub id: String,
    pub name: String,
    pub max_score: f64,
    pub sections: Vec<Section>,
}

/// A record together with the file it is stored in.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordEntry {
    pub path: String,
    pub record: AssessmentRecord,
}

fn lookup(scale: &str) -> Result<&'static dyn Instrument, String> {
    get_instrument(scale).ok_or_else(|| format!("unknown scale: {scale}"))
}

pub fn list_scales() -> Vec<ScaleInfo> {
    all_instruments()
        .into_iter()
        .map(|inst| ScaleInfo {
            id: inst.id().to_string(),
            name: inst.name().to_string(),
            max_score: inst.max_score(),
        })
        .collect()
}

pub fn scale_detail(scale: &str) -> Result<ScaleDetail, String> {
    let inst = lookup(scale)?;
    Ok(ScaleDetail {
        id: inst.id().to_string(),
        name: inst.name().to_string(),
        max_score: inst.max_score(),
        sections: inst.sections().to_vec(),
    })
}

/// Validate and score a completed form without saving it.
pub fn score_assessment(
    scale: &str,
    patient: &PatientInfo,
    responses: &ResponseSet,
) -> Result<ScoreResult, String> {
    let context = ScoringContext {
        education_years: patient.education_years(),
    };
    lookup(scale)?
        .score(responses, &context)
        .map_err(|e| e.to_string())
}

/// Score a completed form and save it as a new record, stamped with the
/// configured assessor and the current local time.
pub fn save_assessment(
    state: &DesktopState,
    scale: &str,
    patient: PatientInfo,
    responses: ResponseSet,
) -> Result<RecordEntry, String> {
    let inst = lookup(scale)?;
    let result = score_assessment(inst.id(), &patient, &responses)?;
    let config = state.config()?;

    let record = AssessmentRecord::new(
        inst.id(),
        patient,
        responses,
        result,
        config.assessor.as_str(),
        jiff::Zoned::now().datetime(),
    );
    let path = config.store().save(&record).map_err(|e| e.to_string())?;

    tracing::info!(
        scale = inst.id(),
        level = %record.score_result.level,
        "assessment saved"
    );
    Ok(RecordEntry {
        path: path.display().to_string(),
        record,
    })
}

pub fn list_records(
    state: &DesktopState,
    scale: Option<&str>,
) -> Result<Vec<RecordEntry>, String> {
    let entries = state.store()?.entries(scale).map_err(|e| e.to_string())?;
    Ok(entries
        .into_iter()
        .map(|entry| RecordEntry {
            path: entry.path.display().to_string(),
            record: entry.record,
        })
        .collect())
}

pub fn search_records(
    state: &DesktopState,
    query: &str,
    scale: Option<&str>,
) -> Result<Vec<AssessmentRecord>, String> {
    state
        .store()?
        .search(query, scale)
        .map_err(|e| e.to_string())
}

pub fn summary(state: &DesktopState, patient_name: Option<&str>) -> Result<Summary, String> {
    state
        .store()?
        .summary(patient_name)
        .map_err(|e| e.to_string())
}

pub fn statistics(state: &DesktopState, scale: Option<&str>) -> Result<Statistics, String> {
    state
        .store()?
        .statistics(scale)
        .map_err(|e| e.to_string())
}

pub fn delete_record(state: &DesktopState, path: &str) -> Result<(), String> {
    state
        .store()?
        .delete(Path::new(path))
        .map_err(|e| e.to_string())
}

pub fn get_config(state: &DesktopState) -> Result<NeuroscaleConfig, String> {
    state.config()
}

/// Persist a new config and make it current.
pub fn update_config(state: &DesktopState, new_config: NeuroscaleConfig) -> Result<(), String> {
    config::save_config_to(&state.config_path, &new_config).map_err(|e| e.to_string())?;
    let mut current = state
        .config
        .lock()
        .map_err(|e| format!("config lock poisoned: {e}"))?;
    *current = new_config;
    Ok(())
}
