//! Content preference types
//!
//! What the user asks for: categories, a free-text description of their
//! content, how often to post, and who the audience is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_SEPARATOR, DEFAULT_CATEGORY};
use crate::{ContentPlanError, Result};

/// A selectable content category shown by the preferences form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Categories offered to users. The first entry doubles as the template
/// fallback for unknown tags.
pub const CATEGORY_OPTIONS: [CategoryOption; 8] = [
    CategoryOption { id: "lifestyle", label: "Lifestyle" },
    CategoryOption { id: "fashion", label: "Fashion" },
    CategoryOption { id: "food", label: "Food & Cooking" },
    CategoryOption { id: "travel", label: "Travel" },
    CategoryOption { id: "fitness", label: "Fitness" },
    CategoryOption { id: "tech", label: "Technology" },
    CategoryOption { id: "beauty", label: "Beauty" },
    CategoryOption { id: "business", label: "Business & Entrepreneurship" },
];

/// Look up the display label for a category tag.
pub fn category_label(id: &str) -> Option<&'static str> {
    CATEGORY_OPTIONS.iter().find(|option| option.id == id).map(|option| option.label)
}

/// Posting frequency.
///
/// Parsing is lenient: labels outside the supported set become
/// [`Cadence::Unrecognized`], which the schedule builder maps onto its
/// fallback pattern instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cadence {
    #[default]
    Daily,
    ThreeTimesWeekly,
    Weekly,
    /// Not offered to users; only reachable from free-text frequency input.
    Unrecognized,
}

impl Cadence {
    /// User-facing cadences, in the order the form presents them.
    pub const OFFERED: [Cadence; 3] = [Cadence::Daily, Cadence::ThreeTimesWeekly, Cadence::Weekly];

    /// Parse a frequency label, never failing.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "3x weekly" | "3x_weekly" | "three_times_weekly" | "three times weekly" => {
                Self::ThreeTimesWeekly
            }
            "weekly" => Self::Weekly,
            _ => Self::Unrecognized,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::ThreeTimesWeekly => "3x weekly",
            Self::Weekly => "weekly",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub fn is_offered(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cadence {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for Cadence {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Cadence> for String {
    fn from(value: Cadence) -> Self {
        value.label().to_string()
    }
}

/// A user's content preferences; input to schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPreference {
    /// Ordered, de-duplicated category tags. Order drives round-robin
    /// category assignment across slots.
    pub content_categories: Vec<String>,
    pub description: String,
    pub cadence: Cadence,
    pub audience: String,
}

impl ContentPreference {
    /// Build preferences, normalising category tags (split on the storage
    /// separator, trimmed, lowercased, blanks dropped, first occurrence wins).
    pub fn new<I, S>(
        categories: I,
        description: impl Into<String>,
        cadence: Cadence,
        audience: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            content_categories: normalize_categories(categories),
            description: description.into(),
            cadence,
            audience: audience.into(),
        }
    }

    /// Check required fields before any generation work starts.
    pub fn validate(&self) -> Result<()> {
        if self.content_categories.iter().all(|tag| tag.trim().is_empty()) {
            return Err(ContentPlanError::Validation(
                "Please select at least one content type".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(ContentPlanError::Validation(
                "Please describe your content style".to_string(),
            ));
        }
        if self.audience.trim().is_empty() {
            return Err(ContentPlanError::Validation(
                "Please specify your target audience".to_string(),
            ));
        }
        Ok(())
    }
}

fn normalize_categories<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for raw in categories {
        // Stored rows join tags with the separator, so it can never sit inside one.
        for piece in raw.as_ref().split(CATEGORY_SEPARATOR) {
            let tag = piece.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Single-page calendar form: a shortcut into generation with a named
/// calendar and explicit post type / tone for the prompt service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCalendarForm {
    pub calendar_name: String,
    /// Free-text frequency label; unknown labels use the fallback pattern.
    pub post_frequency: String,
    pub target_audience: String,
    pub content_description: String,
    pub post_type: String,
    pub tone: String,
}

impl QuickCalendarForm {
    pub fn validate(&self) -> Result<()> {
        let required = [
            &self.calendar_name,
            &self.target_audience,
            &self.content_description,
            &self.post_type,
            &self.tone,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ContentPlanError::Validation(
                "Please fill out all fields, including calendar name, post type, and tone."
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Preferences equivalent of the form; the category defaults to
    /// lifestyle since the form does not ask for one.
    pub fn to_preference(&self) -> ContentPreference {
        ContentPreference::new(
            [DEFAULT_CATEGORY],
            self.content_description.clone(),
            Cadence::from_label(&self.post_frequency),
            self.target_audience.clone(),
        )
    }
}
