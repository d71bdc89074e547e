//! Raw assessment documents and their validation into the typed tree.
//!
//! Documents are first deserialized with every rating as plain text and
//! every collection optional, so a single pass can report all problems at
//! once instead of stopping at the first bad rating.

use crate::core::{Assessment, AssessmentCategory, FocusArea, Rating, RecommendedAction};
use crate::errors::{Error, Result, ValidationIssue};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject missing or null child collections instead of treating them as empty
    pub strict: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAssessment {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCategory {
    category: String,
    #[serde(default)]
    focus_areas: Option<Vec<RawFocusArea>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFocusArea {
    title: String,
    #[serde(default)]
    benchmarks: Option<Vec<String>>,
    #[serde(default)]
    insights: Option<Vec<String>>,
    #[serde(default)]
    recommended_actions: Option<Vec<RawAction>>,
}

#[derive(Debug, Deserialize)]
struct RawAction {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    complexity: Option<String>,
}

/// Outcome of validating a raw document.
///
/// `assessment` holds every entry that validated; actions with bad ratings
/// are left out of it. Use [`Inspection::into_result`] to get the tree only
/// when the document is fully valid.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub assessment: Assessment,
    pub issues: Vec<ValidationIssue>,
    malformed: Vec<(String, &'static str)>,
}

impl Inspection {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| !issue.is_error())
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn into_result(self) -> Result<Assessment> {
        if let Some((location, field)) = self.malformed.into_iter().next() {
            return Err(Error::malformed_tree(location, field));
        }
        if self.issues.iter().any(ValidationIssue::is_error) {
            return Err(Error::Validation(self.issues));
        }
        Ok(self.assessment)
    }
}

/// Validate a raw document into the typed assessment tree
pub(crate) fn inspect(raw: RawAssessment, options: LoadOptions) -> Inspection {
    let mut inspector = Inspector {
        options,
        issues: Vec::new(),
        malformed: Vec::new(),
        seen_ids: HashMap::new(),
    };
    let root = raw.name.clone().unwrap_or_else(|| "assessment".to_string());
    let categories = inspector.collection(raw.categories, &root, "categories");
    let assessment = Assessment {
        name: raw.name,
        categories: categories
            .into_iter()
            .map(|category| inspector.category(category))
            .collect(),
    };
    debug!(
        categories = assessment.categories.len(),
        issues = inspector.issues.len(),
        "Validated assessment document"
    );
    Inspection {
        assessment,
        issues: inspector.issues,
        malformed: inspector.malformed,
    }
}

/// Deserializing an [`Assessment`] directly applies the lenient loading
/// policy: missing or null collections become empty with a logged warning,
/// and any invalid entry fails the whole document.
impl<'de> Deserialize<'de> for Assessment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAssessment::deserialize(deserializer)?;
        let inspection = inspect(raw, LoadOptions::default());
        for issue in inspection.warnings() {
            warn!("{issue}");
        }
        inspection.into_result().map_err(D::Error::custom)
    }
}

struct Inspector {
    options: LoadOptions,
    issues: Vec<ValidationIssue>,
    malformed: Vec<(String, &'static str)>,
    seen_ids: HashMap<String, String>,
}

impl Inspector {
    /// Missing collections become empty, with a warning or (strict) an error
    fn collection<T>(&mut self, items: Option<Vec<T>>, location: &str, field: &'static str) -> Vec<T> {
        match items {
            Some(items) => items,
            None if self.options.strict => {
                self.issues.push(ValidationIssue::error(
                    location,
                    format!("'{field}' is missing or null"),
                ));
                self.malformed.push((location.to_string(), field));
                Vec::new()
            }
            None => {
                debug!(location, field, "Treating missing collection as empty");
                self.issues.push(ValidationIssue::warning(
                    location,
                    format!("'{field}' is missing or null; treated as empty"),
                ));
                Vec::new()
            }
        }
    }

    fn category(&mut self, raw: RawCategory) -> AssessmentCategory {
        let location = raw.category.clone();
        let focus_areas = self.collection(raw.focus_areas, &location, "focusAreas");
        AssessmentCategory {
            focus_areas: focus_areas
                .into_iter()
                .map(|focus_area| self.focus_area(focus_area, &location))
                .collect(),
            category: raw.category,
        }
    }

    fn focus_area(&mut self, raw: RawFocusArea, category: &str) -> FocusArea {
        let location = format!("{category} / {}", raw.title);
        let benchmarks = optional_text(raw.benchmarks, &location, "benchmarks");
        let insights = optional_text(raw.insights, &location, "insights");
        let actions = self.collection(raw.recommended_actions, &location, "recommendedActions");

        if actions.is_empty() {
            self.issues.push(ValidationIssue::warning(
                &location,
                "no recommended actions; focus area scores the 10.0 sentinel",
            ));
        }

        let recommended_actions = actions
            .into_iter()
            .enumerate()
            .filter_map(|(index, action)| self.action(action, index, &location))
            .collect();

        FocusArea {
            title: raw.title,
            benchmarks,
            insights,
            recommended_actions,
        }
    }

    fn action(&mut self, raw: RawAction, index: usize, focus_area: &str) -> Option<RecommendedAction> {
        let location = match &raw.id {
            Some(id) => format!("{focus_area} / {id}"),
            None => {
                let location = format!("{focus_area} / action #{}", index + 1);
                self.issues
                    .push(ValidationIssue::error(&location, "action has no 'id'"));
                location
            }
        };

        if let Some(id) = &raw.id {
            if let Some(first) = self.seen_ids.get(id) {
                self.issues.push(ValidationIssue::warning(
                    &location,
                    format!("duplicate action id '{id}' (first seen at {first})"),
                ));
            } else {
                self.seen_ids.insert(id.clone(), focus_area.to_string());
            }
        }

        // Ratings are checked even when the id is missing
        let priority = self.rating(raw.priority.as_deref(), &location, "priority");
        let severity = self.rating(raw.severity.as_deref(), &location, "severity");
        let complexity = self.rating(raw.complexity.as_deref(), &location, "complexity");

        Some(RecommendedAction {
            id: raw.id?,
            priority: priority?,
            severity: severity?,
            complexity: complexity?,
            title: raw.title,
        })
    }

    fn rating(&mut self, value: Option<&str>, location: &str, field: &str) -> Option<Rating> {
        let Some(value) = value else {
            self.issues.push(ValidationIssue::error(
                location,
                format!("{field}: rating is missing"),
            ));
            return None;
        };
        match value.parse::<Rating>() {
            Ok(rating) => Some(rating),
            Err(err) => {
                self.issues
                    .push(ValidationIssue::error(location, format!("{field}: {err}")));
                None
            }
        }
    }
}

/// Display-only lists never fail the load, not even in strict mode
fn optional_text(items: Option<Vec<String>>, location: &str, field: &'static str) -> Vec<String> {
    items.unwrap_or_else(|| {
        debug!(location, field, "Display list missing; using empty list");
        Vec::new()
    })
}
