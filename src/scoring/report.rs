//! Maturity report: the scored view of a whole assessment.
//!
//! The report is what output writers consume. It holds the overall score,
//! the per-category and per-focus-area breakdown, every action ranked from
//! least to most mature, and how focus areas spread across the five stages.

use super::{
    action_score, category_score, focus_area_score, overall_score, MaturityScore, MaturityStage,
};
use crate::core::{Assessment, Rating};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub overall: MaturityScore,
    pub overall_stage: MaturityStage,
    pub categories: Vec<CategoryScore>,
    pub actions: Vec<ActionScore>,
    pub stage_distribution: StageDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub name: String,
    pub score: MaturityScore,
    pub stage: MaturityStage,
    pub focus_areas: Vec<FocusAreaScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusAreaScore {
    pub name: String,
    pub score: MaturityScore,
    pub stage: MaturityStage,
    pub action_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionScore {
    pub id: String,
    pub title: String,
    pub category: String,
    pub focus_area: String,
    pub priority: Rating,
    pub severity: Rating,
    pub complexity: Rating,
    pub score: u8,
    pub stage: MaturityStage,
}

/// Number of focus areas in each stage; every stage is always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StageDistribution(BTreeMap<MaturityStage, usize>);

impl StageDistribution {
    fn from_stages(stages: impl IntoIterator<Item = MaturityStage>) -> Self {
        let mut counts: BTreeMap<MaturityStage, usize> =
            MaturityStage::ALL.iter().map(|stage| (*stage, 0)).collect();
        for stage in stages {
            *counts.entry(stage).or_default() += 1;
        }
        Self(counts)
    }

    pub fn count(&self, stage: MaturityStage) -> usize {
        self.0.get(&stage).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Stages in ascending order with their counts
    pub fn iter(&self) -> impl Iterator<Item = (MaturityStage, usize)> + '_ {
        self.0.iter().map(|(stage, count)| (*stage, *count))
    }
}

impl MaturityReport {
    pub fn build(assessment: &Assessment) -> Self {
        let categories: Vec<CategoryScore> = assessment
            .categories
            .iter()
            .map(|category| {
                let score = category_score(category);
                CategoryScore {
                    name: category.category.clone(),
                    score,
                    stage: score.stage(),
                    focus_areas: category
                        .focus_areas
                        .iter()
                        .map(|focus_area| {
                            let score = focus_area_score(focus_area);
                            FocusAreaScore {
                                name: focus_area.title.clone(),
                                score,
                                stage: score.stage(),
                                action_count: focus_area.recommended_actions.len(),
                            }
                        })
                        .collect(),
                }
            })
            .collect();

        let overall = overall_score(&assessment.categories);
        let stage_distribution = StageDistribution::from_stages(
            categories
                .iter()
                .flat_map(|category| category.focus_areas.iter().map(|fa| fa.stage)),
        );

        Self {
            name: assessment.name.clone(),
            overall,
            overall_stage: overall.stage(),
            categories,
            actions: rank_actions(assessment),
            stage_distribution,
        }
    }

    /// First `n` ranked actions, or all of them when `n` is `None`
    pub fn top_actions(&self, n: Option<usize>) -> &[ActionScore] {
        match n {
            Some(n) => &self.actions[..n.min(self.actions.len())],
            None => &self.actions,
        }
    }

    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Overall score as a percentage of the 0-10 scale
    pub fn gauge_position(&self) -> f64 {
        self.overall.value() * 10.0
    }
}

/// Every action, least mature first; ties keep document order
fn rank_actions(assessment: &Assessment) -> Vec<ActionScore> {
    let mut actions: Vec<ActionScore> = assessment
        .actions()
        .map(|(category, focus_area, action)| {
            let score = action_score(action);
            ActionScore {
                id: action.id.clone(),
                title: action.title.clone(),
                category: category.category.clone(),
                focus_area: focus_area.title.clone(),
                priority: action.priority,
                severity: action.severity,
                complexity: action.complexity,
                score,
                stage: MaturityScore::from_points(score).stage(),
            }
        })
        .collect();
    // sort_by_key is stable
    actions.sort_by_key(|action| action.score);
    actions
}
