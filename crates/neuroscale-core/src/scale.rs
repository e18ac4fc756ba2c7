use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The closed set of scales the system knows how to score.
///
/// The serialized form is the scale id as it appears in record files and
/// file names (`"MMSE"`, `"MoCA"`, `"mRS"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScaleKind {
    #[serde(rename = "MMSE")]
    Mmse,
    #[serde(rename = "MoCA")]
    Moca,
    #[serde(rename = "CDR")]
    Cdr,
    #[serde(rename = "HAMD")]
    Hamd,
    #[serde(rename = "HAMA")]
    Hama,
    #[serde(rename = "UPDRS")]
    Updrs,
    #[serde(rename = "Berg")]
    Berg,
    #[serde(rename = "Tinetti")]
    Tinetti,
    #[serde(rename = "NIHSS")]
    Nihss,
    #[serde(rename = "GCS")]
    Gcs,
    #[serde(rename = "mRS")]
    Mrs,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 11] = [
        ScaleKind::Mmse,
        ScaleKind::Moca,
        ScaleKind::Cdr,
        ScaleKind::Hamd,
        ScaleKind::Hama,
        ScaleKind::Updrs,
        ScaleKind::Berg,
        ScaleKind::Tinetti,
        ScaleKind::Nihss,
        ScaleKind::Gcs,
        ScaleKind::Mrs,
    ];

    /// Identifier used in record files and file names.
    pub fn id(self) -> &'static str {
        match self {
            ScaleKind::Mmse => "MMSE",
            ScaleKind::Moca => "MoCA",
            ScaleKind::Cdr => "CDR",
            ScaleKind::Hamd => "HAMD",
            ScaleKind::Hama => "HAMA",
            ScaleKind::Updrs => "UPDRS",
            ScaleKind::Berg => "Berg",
            ScaleKind::Tinetti => "Tinetti",
            ScaleKind::Nihss => "NIHSS",
            ScaleKind::Gcs => "GCS",
            ScaleKind::Mrs => "mRS",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScaleKind {
    type Err = CoreError;

    /// Case-insensitive; also accepts the long forms some record files carry
    /// (`"HAMD-17"`, `"UPDRS-III"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let base = match trimmed.to_ascii_uppercase().as_str() {
            "HAMD-17" => "HAMD".to_string(),
            "UPDRS-III" => "UPDRS".to_string(),
            other => other.to_string(),
        };
        ScaleKind::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(&base))
            .ok_or_else(|| CoreError::UnknownScale(trimmed.to_string()))
    }
}
