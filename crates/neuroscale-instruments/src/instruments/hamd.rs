use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use super::section;
use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, Group, GroupTable, LabelField, ScoringContext, Section, banded_result, classify,
    sections_total,
};

/// HAMD-17: Hamilton Depression Rating Scale, 17 items.
/// Nine items rated 0–4 and eight rated 0–2. Total 0–52.
pub struct Hamd;

const MAX_SCORE: f64 = 52.0;

static BANDS: [Band; 4] = [
    Band {
        cutoff: Cutoff::Below(8.0),
        level: "无抑郁",
        risk: RiskLevel::Low,
        interpretation: "无明显抑郁症状",
        recommendations: &[
            "保持良好的心理状态",
            "定期进行情绪自我评估",
            "维持健康的生活方式",
        ],
    },
    Band {
        cutoff: Cutoff::Below(17.0),
        level: "轻度抑郁",
        risk: RiskLevel::Medium,
        interpretation: "存在轻度抑郁症状，建议关注情绪变化",
        recommendations: &[
            "建议心理咨询或心理治疗",
            "加强社会支持系统",
            "规律作息，适度运动",
            "定期随访评估",
        ],
    },
    Band {
        cutoff: Cutoff::Below(24.0),
        level: "中度抑郁",
        risk: RiskLevel::High,
        interpretation: "存在中度抑郁症状，建议专业治疗",
        recommendations: &[
            "建议神经科专科就诊",
            "考虑药物治疗结合心理治疗",
            "密切监测症状变化",
            "家属支持和理解",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "重度抑郁",
        risk: RiskLevel::VeryHigh,
        interpretation: "存在重度抑郁症状，需要立即专业干预",
        recommendations: &[
            "立即神经科急诊就诊",
            "评估自杀风险",
            "考虑住院治疗",
            "24小时监护和支持",
        ],
    },
];

/// Symptom clusters. Group maxima count every item at 4 points.
static SYMPTOMS: GroupTable = GroupTable {
    groups: &[
        Group {
            name: "情绪症状",
            items: &["1", "2", "3"],
            description: Some("抑郁情绪、罪恶感、自杀观念"),
        },
        Group {
            name: "认知症状",
            items: &["9", "10", "15"],
            description: Some("激越、精神性焦虑、疑病"),
        },
        Group {
            name: "躯体症状",
            items: &["4", "5", "6", "11", "12", "13"],
            description: Some("睡眠障碍、食欲、体重、躯体症状"),
        },
        Group {
            name: "精神运动症状",
            items: &["8", "14"],
            description: Some("精神运动性迟滞、工作和活动"),
        },
        Group {
            name: "其他症状",
            items: &["7", "16", "17"],
            description: Some("性症状、自知力、日夜变化"),
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

impl Instrument for Hamd {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Hamd
    }

    fn name(&self) -> &str {
        "汉密尔顿抑郁量表 (HAMD-17)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![section(
                "hamd_items",
                "HAMD-17评估项目",
                &[
                    ("1", "抑郁情绪", 4.0),
                    ("2", "有罪感", 4.0),
                    ("3", "自杀", 4.0),
                    ("4", "入睡困难", 2.0),
                    ("5", "睡眠不深", 2.0),
                    ("6", "早醒", 2.0),
                    ("7", "工作和兴趣", 4.0),
                    ("8", "阻滞", 4.0),
                    ("9", "激越", 4.0),
                    ("10", "精神性焦虑", 4.0),
                    ("11", "躯体性焦虑", 4.0),
                    ("12", "胃肠道症状", 2.0),
                    ("13", "一般躯体症状", 2.0),
                    ("14", "性症状", 2.0),
                    ("15", "疑病", 4.0),
                    ("16", "体重减轻", 2.0),
                    ("17", "自知力", 2.0),
                ],
                Some("<8: 无抑郁, 8-16: 轻度, 17-23: 中度, 24+: 重度"),
            )]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let total = sections_total(self.sections(), responses);
        let mut result = banded_result(total, MAX_SCORE, classify(&BANDS, total));
        result.symptom_analysis = Some(SYMPTOMS.analyze(responses));
        result
    }
}
