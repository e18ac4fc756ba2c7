use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Name recorded when a legacy file carries no patient name.
pub const ANONYMOUS_PATIENT: &str = "匿名患者";

/// Placeholder for an unrecorded gender or age.
pub const UNKNOWN_VALUE: &str = "未知";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInfo {
    pub name: String,
    /// Free text as entered on the form (usually years, sometimes `未知`).
    pub age: String,
    pub gender: String,
    /// Years of formal education, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default)]
    pub assessment_date: String,
}

impl PatientInfo {
    /// Parse the leading integer of the education field, if any.
    ///
    /// `"12"`, `"12年"` and `" 9 years"` all parse; `"高中"` does not.
    pub fn education_years(&self) -> Option<u32> {
        let text = self.education.as_deref()?.trim();
        let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

impl Default for PatientInfo {
    fn default() -> Self {
        Self {
            name: ANONYMOUS_PATIENT.to_string(),
            age: UNKNOWN_VALUE.to_string(),
            gender: UNKNOWN_VALUE.to_string(),
            education: None,
            assessment_date: String::new(),
        }
    }
}
