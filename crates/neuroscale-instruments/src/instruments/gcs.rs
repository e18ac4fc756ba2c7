use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, Item, ScoreRange, ScoringContext, Section, banded_result, classify,
};

/// GCS: Glasgow Coma Scale.
/// Eye opening 1–4, verbal response 1–5, motor response 1–6. Total 3–15.
pub struct Gcs;

const MAX_SCORE: f64 = 15.0;

static BANDS: [Band; 3] = [
    Band {
        cutoff: Cutoff::AtLeast(13.0),
        level: "轻度意识障碍",
        risk: RiskLevel::Low,
        interpretation: "轻度脑损伤",
        recommendations: &["连续监测意识状态", "评分应结合其他临床表现综合判断"],
    },
    Band {
        cutoff: Cutoff::AtLeast(9.0),
        level: "中度意识障碍",
        risk: RiskLevel::High,
        interpretation: "中度脑损伤",
        recommendations: &[
            "密切监测生命体征和意识变化",
            "完善头颅影像学检查",
            "评估神经外科干预指征",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "重度意识障碍",
        risk: RiskLevel::VeryHigh,
        interpretation: "重度脑损伤/昏迷",
        recommendations: &[
            "重症监护治疗",
            "保护气道，必要时气管插管",
            "紧急神经外科会诊",
        ],
    },
];

impl Instrument for Gcs {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Gcs
    }

    fn name(&self) -> &str {
        "格拉斯哥昏迷量表 (GCS)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section {
                id: "gcs_components".to_string(),
                name: "GCS评估项目".to_string(),
                items: vec![
                    Item::new("eye", "睁眼反应 (E)", ScoreRange::whole(1.0, 4.0)),
                    Item::new("verbal", "语言反应 (V)", ScoreRange::whole(1.0, 5.0)),
                    Item::new("motor", "运动反应 (M)", ScoreRange::whole(1.0, 6.0)),
                ],
                description: Some("13-15: 轻度, 9-12: 中度, 3-8: 重度（昏迷）".to_string()),
            }]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let part = |id: &str| responses.get(id).copied().unwrap_or(0.0);
        let (eye, verbal, motor) = (part("eye"), part("verbal"), part("motor"));
        let total = eye + verbal + motor;

        let mut result = banded_result(total, MAX_SCORE, classify(&BANDS, total));
        result.components.insert("eye_score".to_string(), eye);
        result.components.insert("verbal_score".to_string(), verbal);
        result.components.insert("motor_score".to_string(), motor);
        result
    }
}
