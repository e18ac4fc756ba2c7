use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::PatientInfo;
use super::score::ScoreResult;
use crate::error::CoreError;
use crate::record_keys;

/// Selected score per item id, in form order.
pub type ResponseSet = IndexMap<String, f64>;

/// Assessor recorded when none is configured.
pub const DEFAULT_ASSESSOR: &str = "LIUYING";

/// One persisted assessment outcome. Written once, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub scale_type: String,
    pub patient_info: PatientInfo,
    #[serde(default)]
    pub responses: ResponseSet,
    pub score_result: ScoreResult,
    /// Local ISO-8601 time, second resolution (`2024-03-05T14:07:09`).
    pub assessment_time: String,
    pub assessor: String,
}

impl AssessmentRecord {
    pub fn new(
        scale_type: impl Into<String>,
        patient_info: PatientInfo,
        responses: ResponseSet,
        score_result: ScoreResult,
        assessor: impl Into<String>,
        assessed_at: jiff::civil::DateTime,
    ) -> Self {
        Self {
            scale_type: scale_type.into(),
            patient_info,
            responses,
            score_result,
            assessment_time: record_keys::assessment_time(&assessed_at),
            assessor: assessor.into(),
        }
    }

    /// File name this record is stored under.
    ///
    /// Derived from the scale, the patient name and `assessment_time`; a
    /// timestamp that does not parse falls back to the current time.
    pub fn file_name(&self) -> String {
        let at = record_keys::parse_assessment_time(&self.assessment_time)
            .unwrap_or_else(|| jiff::Zoned::now().datetime());
        record_keys::record_file_name(&self.scale_type, &self.patient_info.name, &at)
    }

    pub fn to_json_pretty(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
