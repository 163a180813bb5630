//! Catalog record types.
//!
//! The catalog holds three kinds of static content: digital-literacy
//! lessons, support resources, and emergency helplines. Records are
//! immutable once loaded; each collection is bundled into the binary at
//! build time and parsed once per process (see [`crate::catalog::store`]).
//!
//! All three record kinds share the surface the query service filters on
//! ([`CatalogRecord`]): a numeric id, a human-readable label, a
//! description, a category, and a secondary classifier. Variant-specific
//! structure (a lesson's content tree, a resource's tags, a helpline's
//! phone number) lives on the concrete types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record's secondary classification dimension.
///
/// Each record kind carries exactly one classifier; a filter constrains it
/// by strict equality, so a classifier of the wrong kind for a collection
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classifier {
    /// A lesson's difficulty tier (`"beginner"`, `"intermediate"`, ...).
    Difficulty(String),
    /// A resource's type (`"organization"`, `"guide"`, ...).
    ResourceType(String),
    /// Whether a helpline operates around the clock.
    Open24Hours(bool),
}

/// Common surface of the three catalog record kinds.
///
/// The query service is generic over this trait; it never needs to know
/// which concrete collection it is filtering.
pub trait CatalogRecord {
    /// Entity name used in `NotFound` errors ("lesson", "resource", ...).
    const ENTITY: &'static str;

    /// The record's identifier, unique within its collection.
    fn id(&self) -> u32;

    /// The record's primary display text (title or name).
    fn label(&self) -> &str;

    /// The record's free-text description.
    fn description(&self) -> &str;

    /// The record's category, matched case-sensitively by filters.
    fn category(&self) -> &str;

    /// The record's secondary classifier.
    fn classifier(&self) -> Classifier;

    /// Additional free-text terms the search dimension matches against.
    ///
    /// Only resources carry tags; the default is empty.
    fn search_tags(&self) -> &[String] {
        &[]
    }
}

/// One section of a lesson's content tree.
///
/// Sections may carry their prose directly as paragraphs, nest further
/// sections, or both. This is the structurally complete shape; flat
/// single-text sections are represented as one paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Section heading.
    pub title: String,
    /// Prose paragraphs, in reading order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,
    /// Nested subsections, in reading order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<ContentSection>,
}

/// The structured body of a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonContent {
    /// Top-level sections, in reading order.
    #[serde(default)]
    pub sections: Vec<ContentSection>,
}

/// A single multiple-choice quiz question attached to a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    pub explanation: String,
}

/// A digital-literacy lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub duration_minutes: u32,
    pub content: LessonContent,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CatalogRecord for Lesson {
    const ENTITY: &'static str = "lesson";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn classifier(&self) -> Classifier {
        Classifier::Difficulty(self.difficulty.clone())
    }
}

/// A support resource (an organisation, guide, or external service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Long-form body shown on the resource detail view.
    pub content: String,
    pub category: String,
    pub resource_type: String,
    pub external_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogRecord for Resource {
    const ENTITY: &'static str = "resource";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn classifier(&self) -> Classifier {
        Classifier::ResourceType(self.resource_type.clone())
    }

    fn search_tags(&self) -> &[String] {
        &self.tags
    }
}

/// An emergency or support helpline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Helpline {
    pub id: u32,
    pub name: String,
    /// Display string, not necessarily a dialable number
    /// (e.g. "Text HOME to 741741").
    pub phone_number: String,
    pub description: String,
    pub category: String,
    /// Human-readable availability ("24/7", "Mon-Fri 9am-5pm").
    pub availability: String,
    pub is_24_7: bool,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl CatalogRecord for Helpline {
    const ENTITY: &'static str = "helpline";

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn classifier(&self) -> Classifier {
        Classifier::Open24Hours(self.is_24_7)
    }
}
