use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use super::section;
use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, Group, GroupTable, LabelField, ScoringContext, Section, banded_result, classify,
    sections_total,
};

/// MMSE: Mini-Mental State Examination.
/// 30 items scored 0/1. Total 0–30; higher = better cognition.
pub struct Mmse;

const MAX_SCORE: f64 = 30.0;

static BANDS: [Band; 4] = [
    Band {
        cutoff: Cutoff::AtLeast(27.0),
        level: "正常",
        risk: RiskLevel::Low,
        interpretation: "认知功能正常",
        recommendations: &[
            "继续保持良好的生活习惯",
            "定期进行认知功能评估",
            "保持社交活动和智力活动",
        ],
    },
    Band {
        cutoff: Cutoff::AtLeast(24.0),
        level: "轻度认知障碍",
        risk: RiskLevel::Medium,
        interpretation: "可能存在轻度认知功能下降，建议进一步评估",
        recommendations: &[
            "建议进行详细的神经心理学评估",
            "加强认知训练和智力活动",
            "定期随访，监测认知功能变化",
            "保持健康的生活方式",
        ],
    },
    Band {
        cutoff: Cutoff::AtLeast(18.0),
        level: "中度认知障碍",
        risk: RiskLevel::High,
        interpretation: "存在明显认知功能障碍，建议医学干预",
        recommendations: &[
            "建议神经科专科就诊",
            "进行脑影像学检查",
            "考虑药物治疗",
            "加强日常生活能力训练",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "重度认知障碍",
        risk: RiskLevel::VeryHigh,
        interpretation: "存在严重认知功能障碍，需要立即医学干预",
        recommendations: &[
            "立即神经科专科就诊",
            "全面的医学评估和检查",
            "制定个体化治疗方案",
            "家属护理指导和支持",
        ],
    },
];

/// Cognitive domains. Independent of the form sections: orientation to time
/// and place count as one domain here.
static DOMAINS: GroupTable = GroupTable {
    groups: &[
        Group {
            name: "定向力",
            items: &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
            description: None,
        },
        Group {
            name: "记忆力",
            items: &["11", "12", "13"],
            description: None,
        },
        Group {
            name: "注意力和计算",
            items: &["14", "15", "16", "17", "18"],
            description: None,
        },
        Group {
            name: "回忆",
            items: &["19", "20", "21"],
            description: None,
        },
        Group {
            name: "语言",
            items: &["22", "23", "24", "25", "26", "27", "28", "29", "30"],
            description: None,
        },
    ],
    per_item_max: 1.0,
    labels: &[
        (Cutoff::AtLeast(80.0), "正常"),
        (Cutoff::AtLeast(60.0), "轻度受损"),
        (Cutoff::AtLeast(40.0), "中度受损"),
        (Cutoff::Otherwise, "重度受损"),
    ],
    label_field: LabelField::Level,
};

impl Instrument for Mmse {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Mmse
    }

    fn name(&self) -> &str {
        "简易精神状态检查 (MMSE)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                section(
                    "orientation_time",
                    "定向力（时间）",
                    &[
                        ("1", "现在是哪一年？", 1.0),
                        ("2", "现在是哪个季节？", 1.0),
                        ("3", "现在是几月份？", 1.0),
                        ("4", "今天是几号？", 1.0),
                        ("5", "今天是星期几？", 1.0),
                    ],
                    None,
                ),
                section(
                    "orientation_place",
                    "定向力（地点）",
                    &[
                        ("6", "我们现在在哪个省（直辖市）？", 1.0),
                        ("7", "我们现在在哪个市（区）？", 1.0),
                        ("8", "我们现在在什么地方？", 1.0),
                        ("9", "我们现在在哪一层楼？", 1.0),
                        ("10", "我们现在在哪个房间？", 1.0),
                    ],
                    None,
                ),
                section(
                    "registration",
                    "即刻记忆",
                    &[
                        ("11", "复述：苹果", 1.0),
                        ("12", "复述：硬币", 1.0),
                        ("13", "复述：桌子", 1.0),
                    ],
                    Some("请患者重复这三个词，重复直到患者能正确说出为止"),
                ),
                section(
                    "attention",
                    "注意力和计算力",
                    &[
                        ("14", "100-7=93", 1.0),
                        ("15", "93-7=86", 1.0),
                        ("16", "86-7=79", 1.0),
                        ("17", "79-7=72", 1.0),
                        ("18", "72-7=65", 1.0),
                    ],
                    Some("或者让患者倒拼\"WORLD\"：D-L-R-O-W"),
                ),
                section(
                    "recall",
                    "延迟回忆",
                    &[
                        ("19", "回忆：苹果", 1.0),
                        ("20", "回忆：硬币", 1.0),
                        ("21", "回忆：桌子", 1.0),
                    ],
                    None,
                ),
                section(
                    "language",
                    "语言能力",
                    &[
                        ("22", "命名：手表", 1.0),
                        ("23", "命名：铅笔", 1.0),
                        ("24", "复述：\"没有如果、和或但是\"", 1.0),
                        ("25", "三步指令：用右手拿起这张纸", 1.0),
                        ("26", "三步指令：对折", 1.0),
                        ("27", "三步指令：放在地上", 1.0),
                        ("28", "阅读并执行：\"闭上眼睛\"", 1.0),
                        ("29", "写一个句子", 1.0),
                        ("30", "复制图形", 1.0),
                    ],
                    None,
                ),
            ]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let total = sections_total(self.sections(), responses);
        let mut result = banded_result(total, MAX_SCORE, classify(&BANDS, total));
        result.domain_analysis = Some(DOMAINS.analyze(responses));
        result
    }
}
