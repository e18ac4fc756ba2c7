use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use super::section;
use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, ScoringContext, Section, banded_result, classify, sections_total,
};

/// NIHSS: National Institutes of Health Stroke Scale.
/// 15 items with per-item maxima of 2–4. Total 0–42; higher = worse deficit.
pub struct Nihss;

const MAX_SCORE: f64 = 42.0;

static BANDS: [Band; 5] = [
    Band {
        cutoff: Cutoff::Exactly(0.0),
        level: "无卒中症状",
        risk: RiskLevel::Low,
        interpretation: "无神经功能缺损",
        recommendations: &["继续控制卒中危险因素", "定期随访"],
    },
    Band {
        cutoff: Cutoff::AtMost(4.0),
        level: "轻微卒中",
        risk: RiskLevel::Low,
        interpretation: "轻微神经功能缺损",
        recommendations: &[
            "完善卒中病因学检查",
            "启动二级预防治疗",
            "早期康复评估",
        ],
    },
    Band {
        cutoff: Cutoff::AtMost(15.0),
        level: "轻到中度卒中",
        risk: RiskLevel::Medium,
        interpretation: "轻到中度神经功能缺损",
        recommendations: &[
            "卒中单元规范化治疗",
            "评估再灌注治疗适应症",
            "早期康复介入",
            "建议定期复评以观察治疗效果",
        ],
    },
    Band {
        cutoff: Cutoff::AtMost(20.0),
        level: "中到重度卒中",
        risk: RiskLevel::High,
        interpretation: "中到重度神经功能缺损",
        recommendations: &[
            "密切监测生命体征和神经功能",
            "预防并发症",
            "多学科团队综合治疗",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "重度卒中",
        risk: RiskLevel::VeryHigh,
        interpretation: "重度神经功能缺损",
        recommendations: &[
            "重症监护治疗",
            "评估手术干预指征",
            "家属沟通和预后告知",
        ],
    },
];

impl Instrument for Nihss {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Nihss
    }

    fn name(&self) -> &str {
        "美国国立卫生研究院卒中量表 (NIHSS)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                section(
                    "consciousness",
                    "意识水平",
                    &[
                        ("1a", "1a. 意识水平", 3.0),
                        ("1b", "1b. 意识水平问题", 2.0),
                        ("1c", "1c. 意识水平指令", 2.0),
                    ],
                    None,
                ),
                section(
                    "cranial",
                    "凝视、视野与面瘫",
                    &[
                        ("2", "2. 最佳凝视", 2.0),
                        ("3", "3. 视野", 3.0),
                        ("4", "4. 面瘫", 3.0),
                    ],
                    None,
                ),
                section(
                    "motor",
                    "肢体运动",
                    &[
                        ("5a", "5a. 左上肢运动", 4.0),
                        ("5b", "5b. 右上肢运动", 4.0),
                        ("6a", "6a. 左下肢运动", 4.0),
                        ("6b", "6b. 右下肢运动", 4.0),
                    ],
                    None,
                ),
                section(
                    "other",
                    "共济、感觉、语言与忽视",
                    &[
                        ("7", "7. 肢体共济失调", 2.0),
                        ("8", "8. 感觉", 2.0),
                        ("9", "9. 最佳语言", 3.0),
                        ("10", "10. 构音障碍", 2.0),
                        ("11", "11. 忽视征", 2.0),
                    ],
                    None,
                ),
            ]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let total = sections_total(self.sections(), responses);
        banded_result(total, MAX_SCORE, classify(&BANDS, total))
    }
}
