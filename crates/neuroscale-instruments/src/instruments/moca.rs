use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use super::section;
use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, ScoringContext, Section, banded_result, classify, sections_total,
};

/// MoCA: Montreal Cognitive Assessment.
/// 13 scored tasks, total 0–30. One point is added for patients with at most
/// 12 years of education, before classification, without exceeding 30.
pub struct Moca;

const MAX_SCORE: f64 = 30.0;

/// Education at or below this many years earns the correction point.
pub const EDUCATION_CORRECTION_YEARS: u32 = 12;

static BANDS: [Band; 4] = [
    Band {
        cutoff: Cutoff::AtLeast(26.0),
        level: "正常",
        risk: RiskLevel::Low,
        interpretation: "认知功能正常",
        recommendations: &[
            "继续保持良好的生活习惯",
            "定期进行认知功能筛查",
            "保持社交活动和智力活动",
        ],
    },
    Band {
        cutoff: Cutoff::AtLeast(22.0),
        level: "轻度认知障碍",
        risk: RiskLevel::Medium,
        interpretation: "存在轻度认知功能下降，建议结合临床表现综合判断",
        recommendations: &[
            "建议进行详细的神经心理学评估",
            "加强认知训练",
            "定期随访，监测认知功能变化",
        ],
    },
    Band {
        cutoff: Cutoff::AtLeast(17.0),
        level: "中度认知障碍",
        risk: RiskLevel::High,
        interpretation: "存在明显认知功能障碍，建议神经科就诊",
        recommendations: &[
            "建议神经科专科就诊",
            "进行脑影像学检查",
            "评估日常生活能力",
            "考虑药物治疗",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "重度认知障碍",
        risk: RiskLevel::VeryHigh,
        interpretation: "存在严重认知功能障碍，需要尽快医学干预",
        recommendations: &[
            "立即神经科专科就诊",
            "全面的医学评估和检查",
            "家属护理指导和支持",
        ],
    },
];

impl Instrument for Moca {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Moca
    }

    fn name(&self) -> &str {
        "蒙特利尔认知评估 (MoCA)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                section(
                    "visuospatial",
                    "视空间与执行功能",
                    &[
                        ("trail_making", "连线测试", 1.0),
                        ("cube_copy", "立方体复制", 1.0),
                        ("clock_drawing", "钟表绘制", 3.0),
                    ],
                    None,
                ),
                section(
                    "naming",
                    "命名",
                    &[("animal_naming", "动物命名", 3.0)],
                    Some("说出狮子、犀牛、骆驼的名称"),
                ),
                section(
                    "attention",
                    "注意力",
                    &[
                        ("digit_span", "数字广度", 2.0),
                        ("vigilance", "警觉性", 1.0),
                        ("serial_sevens", "连续减7", 3.0),
                    ],
                    None,
                ),
                section(
                    "language",
                    "语言",
                    &[
                        ("sentence_repetition", "语句重复", 2.0),
                        ("verbal_fluency", "语言流畅性", 1.0),
                    ],
                    None,
                ),
                section(
                    "abstraction",
                    "抽象",
                    &[("similarities", "相似性", 2.0)],
                    None,
                ),
                section(
                    "delayed_recall",
                    "延迟回忆",
                    &[("free_recall", "自由回忆", 5.0)],
                    Some("回忆之前记住的5个词语"),
                ),
                section(
                    "orientation",
                    "定向",
                    &[
                        ("time_orientation", "时间定向", 4.0),
                        ("place_orientation", "地点定向", 2.0),
                    ],
                    None,
                ),
            ]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, context: &ScoringContext) -> ScoreResult {
        let raw = sections_total(self.sections(), responses);
        let bonus = match context.education_years {
            Some(years) if years <= EDUCATION_CORRECTION_YEARS => 1.0,
            _ => 0.0,
        };
        let total = (raw + bonus).min(MAX_SCORE);

        let mut result = banded_result(total, MAX_SCORE, classify(&BANDS, total));
        result.components.insert("raw_score".to_string(), raw);
        result
            .components
            .insert("education_bonus".to_string(), total - raw);
        result
    }
}
