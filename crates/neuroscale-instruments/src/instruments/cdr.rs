use neuroscale_core::models::record::ResponseSet;
use neuroscale_core::models::score::{RiskLevel, ScoreResult};
use neuroscale_core::scale::ScaleKind;

use crate::Instrument;
use crate::scoring::{
    Band, Cutoff, Item, ScoreRange, ScoringContext, Section, banded_result, classify,
};

/// CDR: Clinical Dementia Rating.
/// Six domains ("boxes"), each rated 0, 0.5, 1, 2 or 3. The global rating is
/// derived from the boxes with memory as the primary domain.
pub struct Cdr;

const MAX_SCORE: f64 = 3.0;

const BOX_VALUES: [f64; 5] = [0.0, 0.5, 1.0, 2.0, 3.0];

/// Domain ids in rating order. Memory comes first.
pub const DOMAIN_IDS: [&str; 6] = [
    "memory",
    "orientation",
    "judgment",
    "community",
    "home",
    "personal_care",
];

static BANDS: [Band; 5] = [
    Band {
        cutoff: Cutoff::Exactly(0.0),
        level: "正常",
        risk: RiskLevel::Low,
        interpretation: "无痴呆症状",
        recommendations: &[
            "继续保持健康的生活方式",
            "定期进行认知功能检查",
            "保持社交活动和智力刺激",
        ],
    },
    Band {
        cutoff: Cutoff::Exactly(0.5),
        level: "可疑痴呆",
        risk: RiskLevel::Medium,
        interpretation: "轻微认知障碍，需要密切观察",
        recommendations: &[
            "建议进一步神经心理学评估",
            "定期随访监测认知变化",
            "加强认知训练和康复",
            "评估和治疗可逆性因素",
        ],
    },
    Band {
        cutoff: Cutoff::Exactly(1.0),
        level: "轻度痴呆",
        risk: RiskLevel::High,
        interpretation: "明显的认知功能障碍，影响日常生活",
        recommendations: &[
            "开始药物治疗（如胆碱酯酶抑制剂）",
            "制定个性化的护理计划",
            "家属教育和支持",
            "安全评估和环境改造",
        ],
    },
    Band {
        cutoff: Cutoff::Exactly(2.0),
        level: "中度痴呆",
        risk: RiskLevel::VeryHigh,
        interpretation: "严重认知功能障碍，需要较多帮助",
        recommendations: &[
            "调整药物治疗方案",
            "加强日常生活护理",
            "行为和心理症状管理",
            "考虑日间照料服务",
        ],
    },
    Band {
        cutoff: Cutoff::Otherwise,
        level: "重度痴呆",
        risk: RiskLevel::VeryHigh,
        interpretation: "严重认知功能障碍，需要全面护理",
        recommendations: &[
            "全面护理和生活支持",
            "症状性治疗",
            "舒适护理和生活质量维护",
            "家属心理支持",
        ],
    },
];

/// Global CDR from the domain boxes, memory first.
///
/// The memory box wins when at least three of the other boxes equal it.
/// Otherwise the most frequent box value wins; among equally frequent values
/// the one that appears first in domain order is taken.
pub fn global_score(boxes: &[f64]) -> f64 {
    let Some((&memory, others)) = boxes.split_first() else {
        return 0.0;
    };
    if others.iter().filter(|&&b| b == memory).count() >= 3 {
        return memory;
    }

    let mut best = memory;
    let mut best_count = 0;
    for (i, &candidate) in boxes.iter().enumerate() {
        if boxes[..i].contains(&candidate) {
            continue;
        }
        let count = boxes.iter().filter(|&&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

impl Instrument for Cdr {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Cdr
    }

    fn name(&self) -> &str {
        "临床痴呆评定量表 (CDR)"
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let names = ["记忆", "定向", "判断和解决问题", "社区事务", "家庭和爱好", "个人护理"];
            let items = DOMAIN_IDS
                .iter()
                .zip(names)
                .map(|(id, name)| Item {
                    options: Some(BOX_VALUES.to_vec()),
                    ..Item::new(
                        id,
                        name,
                        ScoreRange {
                            min: 0.0,
                            max: MAX_SCORE,
                            step: None,
                        },
                    )
                })
                .collect();
            vec![Section {
                id: "cdr_domains".to_string(),
                name: "CDR评估领域".to_string(),
                items,
                description: Some("每个领域独立评分：0、0.5、1、2、3".to_string()),
            }]
        });
        &SECTIONS
    }

    fn compute(&self, responses: &ResponseSet, _context: &ScoringContext) -> ScoreResult {
        let boxes: Vec<f64> = DOMAIN_IDS
            .iter()
            .map(|id| responses.get(*id).copied().unwrap_or(0.0))
            .collect();
        let total = global_score(&boxes);

        let mut result = banded_result(total, MAX_SCORE, classify(&BANDS, total));
        result
            .components
            .insert("sum_of_boxes".to_string(), boxes.iter().sum());
        result
    }
}
