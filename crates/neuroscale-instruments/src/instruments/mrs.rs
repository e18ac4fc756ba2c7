use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, Item, ScoreRange, ScoringContext, Section, banded_result, classify,
};

/// mRS: modified Rankin Scale.
/// A single grade 0–6 read directly off the table.
pub struct Mrs;

const MAX_SCORE: f64 = 6.0;

pub const ITEM_ID: &str = "mrs";

static BANDS: [Band; 7] = [
    Band {
        cutoff: Cutoff::Exactly(0.0),
        level: "无症状",
        risk: RiskLevel::Low,
        interpretation: "完全正常，预后极佳",
        recommendations: &["保持健康的生活方式", "继续二级预防"],
    },
    Band {
        cutoff: Cutoff::Exactly(1.0),
        level: "无明显残疾",
        risk: RiskLevel::Low,
        interpretation: "轻微症状但功能完全，预后良好",
        recommendations: &["继续二级预防", "定期随访"],
    },
    Band {
        cutoff: Cutoff::Exactly(2.0),
        level: "轻度残疾",
        risk: RiskLevel::Medium,
        interpretation: "轻度功能受限，预后较好",
        recommendations: &["针对性康复训练", "定期随访评估功能变化"],
    },
    Band {
        cutoff: Cutoff::Exactly(3.0),
        level: "中度残疾",
        risk: RiskLevel::Medium,
        interpretation: "中度功能受限，预后一般",
        recommendations: &["系统康复治疗", "日常生活能力训练", "家属护理指导"],
    },
    Band {
        cutoff: Cutoff::Exactly(4.0),
        level: "中重度残疾",
        risk: RiskLevel::High,
        interpretation: "重度功能受限，预后较差",
        recommendations: &["康复治疗和辅助器具", "日常生活照护支持", "预防并发症"],
    },
    Band {
        cutoff: Cutoff::Exactly(5.0),
        level: "重度残疾",
        risk: RiskLevel::VeryHigh,
        interpretation: "完全依赖他人，预后差",
        recommendations: &["全面护理支持", "预防压疮和感染", "家属心理支持"],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "死亡",
        risk: RiskLevel::VeryHigh,
        interpretation: "患者死亡，最差结局",
        recommendations: &[],
    },
];

impl Instrument for Mrs {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Mrs
    }

    fn name(&self) -> &str {
        "改良Rankin量表 (mRS)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section {
                id: "mrs_grade".to_string(),
                name: "功能残疾程度评估".to_string(),
                items: vec![Item::new(ITEM_ID, "mRS分级", ScoreRange::whole(0.0, MAX_SCORE))],
                description: Some("0-2分通常认为预后良好，3-5分提示不同程度的功能残疾".to_string()),
            }]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let grade = responses.get(ITEM_ID).copied().unwrap_or(0.0);
        banded_result(grade, MAX_SCORE, classify(&BANDS, grade))
    }
}
