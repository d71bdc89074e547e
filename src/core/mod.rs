//! Assessment data model.
//!
//! The tree is Category → Focus Area → Recommended Action. It is built once
//! from a document (see [`crate::io`]) and only ever borrowed afterwards; the
//! scoring engine never mutates it. Deserialization goes through the
//! validating loader, so the same rating and null-collection rules apply
//! however a tree is read.

mod rating;

pub use rating::Rating;

use serde::Serialize;

/// A single remediation item with its three ratings
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecommendedAction {
    /// Keying only; uniqueness is the author's responsibility
    pub id: String,
    pub title: String,
    pub priority: Rating,
    pub severity: Rating,
    pub complexity: Rating,
}

impl RecommendedAction {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        priority: Rating,
        severity: Rating,
        complexity: Rating,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority,
            severity,
            complexity,
        }
    }

    /// Sum of the three rating points, always in 3..=9
    pub fn total_points(&self) -> u8 {
        self.priority.points() + self.severity.points() + self.complexity.points()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub title: String,
    pub benchmarks: Vec<String>,
    pub insights: Vec<String>,
    pub recommended_actions: Vec<RecommendedAction>,
}

impl FocusArea {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_actions(mut self, actions: Vec<RecommendedAction>) -> Self {
        self.recommended_actions = actions;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentCategory {
    pub category: String,
    pub focus_areas: Vec<FocusArea>,
}

impl AssessmentCategory {
    pub fn new(category: impl Into<String>, focus_areas: Vec<FocusArea>) -> Self {
        Self {
            category: category.into(),
            focus_areas,
        }
    }
}

/// A complete assessment document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Assessment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub categories: Vec<AssessmentCategory>,
}

impl Assessment {
    pub fn new(categories: Vec<AssessmentCategory>) -> Self {
        Self {
            name: None,
            categories,
        }
    }

    pub fn named(name: impl Into<String>, categories: Vec<AssessmentCategory>) -> Self {
        Self {
            name: Some(name.into()),
            categories,
        }
    }

    pub fn focus_area_count(&self) -> usize {
        self.categories.iter().map(|c| c.focus_areas.len()).sum()
    }

    /// All actions with the category and focus area that own them, in document order
    pub fn actions(
        &self,
    ) -> impl Iterator<Item = (&AssessmentCategory, &FocusArea, &RecommendedAction)> + '_ {
        self.categories.iter().flat_map(|category| {
            category.focus_areas.iter().flat_map(move |focus_area| {
                focus_area
                    .recommended_actions
                    .iter()
                    .map(move |action| (category, focus_area, action))
            })
        })
    }

    pub fn action_count(&self) -> usize {
        self.actions().count()
    }
}
