use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use super::section;
use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, Group, GroupTable, LabelField, ScoringContext, Section, banded_result, classify,
    sections_total,
};

/// UPDRS-III: Unified Parkinson's Disease Rating Scale, motor examination.
/// 14 items, each rated 0–4. Total 0–56.
pub struct Updrs;

const MAX_SCORE: f64 = 56.0;

static BANDS: [Band; 4] = [
    Band {
        cutoff: Cutoff::AtMost(17.0),
        level: "轻度",
        risk: RiskLevel::Low,
        interpretation: "运动症状轻微，对日常生活影响较小",
        recommendations: &[
            "继续规律服药",
            "适度运动和物理治疗",
            "定期神经科随访",
            "保持积极的生活态度",
        ],
    },
    Band {
        cutoff: Cutoff::AtMost(33.0),
        level: "中度",
        risk: RiskLevel::Medium,
        interpretation: "运动症状明显，对日常生活有一定影响",
        recommendations: &[
            "调整药物治疗方案",
            "加强康复训练",
            "职业治疗评估",
            "家属护理指导",
        ],
    },
    Band {
        cutoff: Cutoff::AtMost(50.0),
        level: "中重度",
        risk: RiskLevel::High,
        interpretation: "运动症状较重，对日常生活影响较大",
        recommendations: &[
            "神经科专科调整治疗",
            "考虑深部脑刺激术评估",
            "全面康复治疗",
            "日常生活辅助设备",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "重度",
        risk: RiskLevel::VeryHigh,
        interpretation: "运动症状严重，严重影响日常生活",
        recommendations: &[
            "立即神经科专科就诊",
            "评估手术治疗适应症",
            "全面护理支持",
            "家属培训和支持",
        ],
    },
];

static MOTOR_DOMAINS: GroupTable = GroupTable {
    groups: &[
        Group {
            name: "言语和面部表情",
            items: &["1", "2"],
            description: Some("言语清晰度和面部表情"),
        },
        Group {
            name: "肌肉僵硬",
            items: &["3", "4", "5"],
            description: Some("颈部、上肢、下肢僵硬"),
        },
        Group {
            name: "手部功能",
            items: &["6", "7", "8"],
            description: Some("手指敲击、手部动作、快速交替动作"),
        },
        Group {
            name: "下肢功能",
            items: &["9"],
            description: Some("腿部敏捷性"),
        },
        Group {
            name: "姿势和步态",
            items: &["10", "11", "12", "13"],
            description: Some("起立、姿势、步态、姿势稳定性"),
        },
        Group {
            name: "整体运动",
            items: &["14"],
            description: Some("整体运动迟缓"),
        },
    ],
    per_item_max: 4.0,
    labels: &[
        (Cutoff::Below(25.0), "轻微"),
        (Cutoff::Below(50.0), "轻度"),
        (Cutoff::Below(75.0), "中度"),
        (Cutoff::Otherwise, "重度"),
    ],
    label_field: LabelField::Severity,
};

impl Instrument for Updrs {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Updrs
    }

    fn name(&self) -> &str {
        "帕金森病统一评分量表 (UPDRS-III)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![section(
                "motor_examination",
                "UPDRS-III 运动检查",
                &[
                    ("1", "3.1 言语", 4.0),
                    ("2", "3.2 面部表情", 4.0),
                    ("3", "3.3 颈部僵硬", 4.0),
                    ("4", "3.4 上肢僵硬", 4.0),
                    ("5", "3.5 下肢僵硬", 4.0),
                    ("6", "3.6 手指敲击", 4.0),
                    ("7", "3.7 手部动作", 4.0),
                    ("8", "3.8 手部快速交替动作", 4.0),
                    ("9", "3.9 腿部敏捷性", 4.0),
                    ("10", "3.10 从椅子上起立", 4.0),
                    ("11", "3.11 姿势", 4.0),
                    ("12", "3.12 步态", 4.0),
                    ("13", "3.13 姿势稳定性", 4.0),
                    ("14", "3.14 整体运动迟缓", 4.0),
                ],
                None,
            )]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let total = sections_total(self.sections(), responses);
        let mut result = banded_result(total, MAX_SCORE, classify(&BANDS, total));
        result.motor_analysis = Some(MOTOR_DOMAINS.analyze(responses));
        result
    }
}
