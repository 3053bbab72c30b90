//! Shared state handed to every request handler

use portfolio_core::Result;
use portfolio_core::config::Config;
use portfolio_core::domain::Project;
use portfolio_core::storage::{ImageStore, ProjectStore};

#[derive(Debug, Clone)]
pub struct AppState {
    pub projects: ProjectStore,
    pub images: ImageStore,
}

impl AppState {
    pub fn new(projects: ProjectStore, images: ImageStore) -> Self {
        Self { projects, images }
    }

    /// Fresh state for a server start, seeded per configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let images = ImageStore::new(&config.storage.public_dir, &config.storage.upload_dir)?;
        let seed = config
            .storage
            .seed_demo_project
            .then(Project::demo);
        Ok(Self::new(ProjectStore::with_projects(seed), images))
    }
}
