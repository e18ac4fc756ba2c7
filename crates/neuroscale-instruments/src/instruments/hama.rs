use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use super::section;
use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, ScoringContext, Section, banded_result, classify, sections_total,
};

/// HAMA: Hamilton Anxiety Rating Scale.
/// 14 items, each rated 0–4. Total 0–56.
pub struct Hama;

const MAX_SCORE: f64 = 56.0;

static BANDS: [Band; 4] = [
    Band {
        cutoff: Cutoff::AtMost(6.0),
        level: "无焦虑",
        risk: RiskLevel::Low,
        interpretation: "无明显焦虑症状",
        recommendations: &["保持良好的心理状态", "维持规律作息和适度运动"],
    },
    Band {
        cutoff: Cutoff::AtMost(14.0),
        level: "轻度焦虑",
        risk: RiskLevel::Medium,
        interpretation: "可能存在轻度焦虑症状",
        recommendations: &[
            "建议心理咨询或放松训练",
            "减少咖啡因摄入，规律作息",
            "定期随访评估",
        ],
    },
    Band {
        cutoff: Cutoff::AtMost(20.0),
        level: "中度焦虑",
        risk: RiskLevel::High,
        interpretation: "存在中度焦虑症状，建议专业评估",
        recommendations: &[
            "建议专科就诊",
            "考虑心理治疗结合药物治疗",
            "密切监测症状变化",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "重度焦虑",
        risk: RiskLevel::VeryHigh,
        interpretation: "存在重度焦虑症状，需要专业治疗",
        recommendations: &[
            "尽快专科就诊",
            "制定系统的药物和心理治疗方案",
            "家属支持和陪伴",
        ],
    },
];

impl Instrument for Hama {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Hama
    }

    fn name(&self) -> &str {
        "汉密尔顿焦虑量表 (HAMA)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let names = [
                "焦虑心境",
                "紧张",
                "害怕",
                "失眠",
                "认知症状",
                "抑郁心境",
                "肌肉系统症状",
                "感觉系统症状",
                "心血管系统症状",
                "呼吸系统症状",
                "胃肠道症状",
                "泌尿生殖系统症状",
                "植物神经症状",
                "会谈时行为表现",
            ];
            let ids: Vec<String> = (1..=names.len()).map(|n| n.to_string()).collect();
            let items: Vec<(&str, &str, f64)> = ids
                .iter()
                .zip(names)
                .map(|(id, name)| (id.as_str(), name, 4.0))
                .collect();
            vec![section(
                "hama_items",
                "HAMA评估项目",
                &items,
                Some("≤6: 无焦虑, 7-14: 轻度, 15-20: 中度, ≥21: 重度"),
            )]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let total = sections_total(self.sections(), responses);
        banded_result(total, MAX_SCORE, classify(&BANDS, total))
    }
}
