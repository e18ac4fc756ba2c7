use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use super::section;
use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, ScoringContext, Section, banded_result, classify, sections_total,
};

/// Berg Balance Scale.
/// 14 tasks, each rated 0–4. Total 0–56; higher = better balance.
pub struct Berg;

const MAX_SCORE: f64 = 56.0;

static BANDS: [Band; 4] = [
    Band {
        cutoff: Cutoff::AtLeast(56.0),
        level: "无跌倒风险",
        risk: RiskLevel::Low,
        interpretation: "根据Berg平衡量表评分，患者的平衡功能处于无跌倒风险水平。",
        recommendations: &[
            "平衡功能良好，继续保持",
            "可进行常规体育活动",
            "定期进行平衡功能评估",
        ],
    },
    Band {
        cutoff: Cutoff::AtLeast(54.0),
        level: "低跌倒风险",
        risk: RiskLevel::Low,
        interpretation: "根据Berg平衡量表评分，患者的平衡功能处于低跌倒风险水平。",
        recommendations: &[
            "平衡功能较好，需要注意安全",
            "建议进行平衡训练",
            "避免在不平整地面行走",
        ],
    },
    Band {
        cutoff: Cutoff::AtLeast(46.0),
        level: "中等跌倒风险",
        risk: RiskLevel::Medium,
        interpretation: "根据Berg平衡量表评分，患者的平衡功能处于中等跌倒风险水平。",
        recommendations: &[
            "需要进行平衡康复训练",
            "使用辅助器具（如手杖）",
            "改善居家环境安全",
            "定期随访评估",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "高跌倒风险",
        risk: RiskLevel::High,
        interpretation: "根据Berg平衡量表评分，患者的平衡功能处于高跌倒风险水平。",
        recommendations: &[
            "需要密切监护和帮助",
            "必须使用辅助器具",
            "进行专业康复治疗",
            "全面评估跌倒风险因素",
            "考虑物理治疗介入",
        ],
    },
];

impl Instrument for Berg {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Berg
    }

    fn name(&self) -> &str {
        "Berg平衡量表"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![section(
                "berg_items",
                "Berg平衡测试项目",
                &[
                    ("1", "坐到站", 4.0),
                    ("2", "独立站立", 4.0),
                    ("3", "无支撑坐立", 4.0),
                    ("4", "站到坐", 4.0),
                    ("5", "转移", 4.0),
                    ("6", "闭眼独立站立", 4.0),
                    ("7", "双脚并拢站立", 4.0),
                    ("8", "站立时向前伸手", 4.0),
                    ("9", "站立时从地面拾起物体", 4.0),
                    ("10", "站立时转身看后面", 4.0),
                    ("11", "转身360度", 4.0),
                    ("12", "站立时交替踏步", 4.0),
                    ("13", "无支撑单脚站立", 4.0),
                    ("14", "前后脚站立", 4.0),
                ],
                None,
            )]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let total = sections_total(self.sections(), responses);
        banded_result(total, MAX_SCORE, classify(&BANDS, total))
    }
}
