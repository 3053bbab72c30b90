//! Domain types - project records and duration formatting

pub mod duration;
pub mod project;

pub use duration::DurationParts;
pub use project::{DATE_FORMAT, Project, parse_date};
