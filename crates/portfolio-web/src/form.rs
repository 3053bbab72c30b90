//! Project form submissions
//!
//! Both the create and the update forms post the same multipart fields:
//! `project_name`, `description`, `start_date`, `end_date`, any number of
//! `technologies` (or `technologies[]`), and an `image` file.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use portfolio_core::domain::{Project, parse_date};
use portfolio_core::{Error, Result};

use crate::error::missing_image;

/// A file received in the `image` field
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Decoded project form
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub project_name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub technologies: Vec<String>,
    pub image: Option<UploadedImage>,
}

fn parse_error(e: MultipartError) -> Error {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(e.body_text())
    } else {
        Error::FormParse(e.body_text())
    }
}

impl ProjectForm {
    /// Read every field of a multipart body
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(parse_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "image" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(parse_error)?;
                    // Browsers send an empty part when no file was chosen
                    if !file_name.is_empty() {
                        form.image = Some(UploadedImage {
                            file_name,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                "project_name" => form.project_name = field.text().await.map_err(parse_error)?,
                "description" => form.description = field.text().await.map_err(parse_error)?,
                "start_date" => form.start_date = field.text().await.map_err(parse_error)?,
                "end_date" => form.end_date = field.text().await.map_err(parse_error)?,
                "technologies" | "technologies[]" => {
                    form.technologies.push(field.text().await.map_err(parse_error)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Build the project record, minus its image
    ///
    /// Fails when either date is not `YYYY-MM-DD`.
    pub fn to_project(&self) -> Result<Project> {
        let start = parse_date("start_date", &self.start_date)?;
        let end = parse_date("end_date", &self.end_date)?;
        Ok(Project::new(self.project_name.clone(), start, end)
            .with_description(self.description.clone())
            .with_technologies(self.technologies.iter().cloned()))
    }

    /// The uploaded image, or an upload error when none was sent
    pub fn require_image(&self) -> Result<&UploadedImage> {
        self.image.as_ref().ok_or_else(missing_image)
    }
}
