//! The catalog query service.
//!
//! Read-only access to the platform's static content: lessons, support
//! resources, and helplines. The rendering layer calls [`query`] on every
//! filter change and [`find_by_id`] when routing to a detail view; both
//! operate over the process-lifetime collections exposed by [`store`].

pub mod filter;
pub mod record;
pub mod store;

pub use filter::{find_by_id, query, FilterSpec};
pub use record::{
    CatalogRecord, Classifier, ContentSection, Helpline, Lesson, LessonContent, QuizQuestion,
    Resource,
};
pub use store::{helplines, lessons, resources};
