//! Portfolio project records

use chrono::NaiveDate;
use uuid::Uuid;

use super::duration;
use crate::{Error, Result};

/// Date format used by forms and display (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` form value, naming the field on failure
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        Error::InvalidInput(format!(
            "{} must be a YYYY-MM-DD date, got '{}'",
            field, value
        ))
    })
}

/// A portfolio entry
///
/// `id` is the record's position in the store at the time it was read and
/// changes when earlier entries are removed. `key` is assigned once at
/// creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Position in the store when this copy was read
    pub id: usize,
    /// Project name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Technology tags, in form order
    pub technologies: Vec<String>,
    /// Relative path of the stored image
    pub image: String,
    key: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    duration: String,
}

impl Project {
    /// Create a new project spanning the given dates
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            technologies: Vec::new(),
            image: String::new(),
            key: Uuid::new_v4(),
            start_date,
            end_date,
            duration: duration::compute(start_date, end_date),
        }
    }

    /// Set the project description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the technology tags
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    /// Set the stored image path
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// The entry shown on a fresh start
    pub fn demo() -> Self {
        let start = NaiveDate::from_ymd_opt(2022, 11, 3).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2022, 11, 18).unwrap_or_default();
        Self::new("Project Title", start, end)
            .with_description(
                "A sample entry to show how projects are listed. \
                 Edit or delete it once your own projects are in.",
            )
            .with_technologies(["nodejs", "vuejs", "reactjs", "nextjs"])
            .with_image("public/img/iconlogo.jpg")
    }

    /// Stable surrogate key
    pub fn key(&self) -> Uuid {
        self.key
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Duration derived from the dates at the last write
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Change both dates and recompute the duration
    pub fn set_dates(&mut self, start_date: NaiveDate, end_date: NaiveDate) {
        self.start_date = start_date;
        self.end_date = end_date;
        self.duration = duration::compute(start_date, end_date);
    }

    /// Take over the surrogate key of the record this one replaces
    pub(crate) fn adopt_key(&mut self, key: Uuid) {
        self.key = key;
    }
}
