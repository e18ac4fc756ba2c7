use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use super::section;
use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, ScoringContext, Section, banded_result, classify, sections_total,
};

/// Tinetti Performance-Oriented Mobility Assessment.
/// Balance (10 items, 16 points) plus gait (8 items, 12 points). Total 0–28.
pub struct Tinetti;

const MAX_SCORE: f64 = 28.0;

static BANDS: [Band; 3] = [
    Band {
        cutoff: Cutoff::AtLeast(24.0),
        level: "低跌倒风险",
        risk: RiskLevel::Low,
        interpretation: "根据Tinetti评估结果，患者的平衡和步态功能处于低跌倒风险水平。",
        recommendations: &[
            "平衡和步态功能良好",
            "继续保持活动水平",
            "定期进行功能评估",
        ],
    },
    Band {
        cutoff: Cutoff::AtLeast(19.0),
        level: "中等跌倒风险",
        risk: RiskLevel::Medium,
        interpretation: "根据Tinetti评估结果，患者的平衡和步态功能处于中等跌倒风险水平。",
        recommendations: &[
            "需要进行平衡和步态训练",
            "考虑使用辅助器具",
            "改善环境安全",
            "定期随访评估",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "高跌倒风险",
        risk: RiskLevel::High,
        interpretation: "根据Tinetti评估结果，患者的平衡和步态功能处于高跌倒风险水平。",
        recommendations: &[
            "需要密切监护",
            "必须使用辅助器具",
            "进行专业康复治疗",
            "全面跌倒风险评估",
            "考虑物理治疗介入",
        ],
    },
];

impl Instrument for Tinetti {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Tinetti
    }

    fn name(&self) -> &str {
        "Tinetti平衡与步态量表"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                section(
                    "balance",
                    "平衡测试",
                    &[
                        ("balance_1", "坐位平衡", 1.0),
                        ("balance_2", "起立", 2.0),
                        ("balance_3", "试图起立", 2.0),
                        ("balance_4", "立即站立平衡（前5秒）", 2.0),
                        ("balance_5", "站立平衡", 2.0),
                        ("balance_6", "轻推", 2.0),
                        ("balance_7", "闭眼", 1.0),
                        ("balance_8", "转身360度：步伐连续性", 1.0),
                        ("balance_9", "转身360度：稳定性", 1.0),
                        ("balance_10", "坐下", 2.0),
                    ],
                    None,
                ),
                section(
                    "gait",
                    "步态测试",
                    &[
                        ("gait_1", "步态启动", 1.0),
                        ("gait_2", "步长和步高（右脚）", 2.0),
                        ("gait_3", "步长和步高（左脚）", 2.0),
                        ("gait_4", "步态对称性", 1.0),
                        ("gait_5", "步态连续性", 1.0),
                        ("gait_6", "路径", 2.0),
                        ("gait_7", "躯干", 2.0),
                        ("gait_8", "步态宽度", 1.0),
                    ],
                    None,
                ),
            ]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let sections = self.sections();
        let balance = sections_total(&sections[..1], responses);
        let gait = sections_total(&sections[1..], responses);
        let total = balance + gait;

        let mut result = banded_result(total, MAX_SCORE, classify(&BANDS, total));
        result.components.insert("balance_score".to_string(), balance);
        result.components.insert("gait_score".to_string(), gait);
        result
    }
}
