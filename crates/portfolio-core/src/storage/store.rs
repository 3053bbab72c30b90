//! In-memory project store
//!
//! Projects are kept in an ordered list and addressed by position. Removing
//! an entry shifts every later entry one position down. Nothing is persisted;
//! the list lives as long as the process.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::Project;
use crate::{Error, Result};

/// Ordered, position-addressed collection of projects
///
/// Cloning is cheap; clones share the same list. Every operation holds the
/// lock for its whole duration.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl ProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given projects in order
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        Self {
            projects: Arc::new(RwLock::new(projects.into_iter().collect())),
        }
    }

    /// Add a project at the end; returns the stored copy
    pub async fn append(&self, mut project: Project) -> Project {
        let mut projects = self.projects.write().await;
        project.id = projects.len();
        info!(position = project.id, key = %project.key(), name = %project.name, "Project added");
        projects.push(project.clone());
        project
    }

    /// Overwrite every field of the project at `index`
    ///
    /// The slot keeps its surrogate key.
    pub async fn replace_at(&self, index: usize, mut project: Project) -> Result<Project> {
        let mut projects = self.projects.write().await;
        let len = projects.len();
        let slot = projects
            .get_mut(index)
            .ok_or(Error::ProjectNotFound { index, len })?;

        project.id = index;
        project.adopt_key(slot.key());
        *slot = project.clone();
        info!(position = index, key = %project.key(), name = %project.name, "Project replaced");
        Ok(project)
    }

    /// Remove the project at `index`, shifting later entries down
    pub async fn remove_at(&self, index: usize) -> Result<Project> {
        let mut projects = self.projects.write().await;
        let len = projects.len();
        if index >= len {
            return Err(Error::ProjectNotFound { index, len });
        }

        let mut removed = projects.remove(index);
        removed.id = index;
        info!(position = index, key = %removed.key(), shifted = len - index - 1, "Project removed");
        Ok(removed)
    }

    /// Copy of the project at `index`, with its id set to `index`
    pub async fn get_at(&self, index: usize) -> Result<Project> {
        let projects = self.projects.read().await;
        let mut project = projects
            .get(index)
            .cloned()
            .ok_or(Error::ProjectNotFound {
                index,
                len: projects.len(),
            })?;
        project.id = index;
        debug!(position = index, key = %project.key(), "Project read");
        Ok(project)
    }

    /// Snapshot of all projects in order, ids set to their positions
    pub async fn list(&self) -> Vec<Project> {
        let projects = self.projects.read().await;
        projects
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let mut project = project.clone();
                project.id = index;
                project
            })
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_date;

    fn project(name: &str) -> Project {
        let start = parse_date("start_date", "2022-01-01").unwrap();
        let end = parse_date("end_date", "2022-01-15").unwrap();
        Project::new(name, start, end)
    }

    async fn store_of(names: &[&str]) -> ProjectStore {
        let store = ProjectStore::new();
        for name in names {
            store.append(project(name)).await;
        }
        store
    }

    #[tokio::test]
    async fn test_append_then_get_last() {
        let store = store_of(&["a", "b"]).await;
        let appended = project("c").with_description("third");

        let stored = store.append(appended.clone()).await;
        assert_eq!(stored.id, 2);

        let len = store.len().await;
        let fetched = store.get_at(len - 1).await.expect("Project should exist");
        assert_eq!(fetched.id, len - 1);
        assert_eq!(fetched.name, "c");
        assert_eq!(fetched.description, "third");
        assert_eq!(fetched.key(), appended.key());
        assert_eq!(fetched.duration(), appended.duration());
    }

    #[tokio::test]
    async fn test_get_at_sets_id_to_position() {
        let store = store_of(&["a", "b", "c"]).await;
        for i in 0..store.len().await {
            assert_eq!(store.get_at(i).await.unwrap().id, i);
        }
    }

    #[tokio::test]
    async fn test_get_at_out_of_range() {
        let store = store_of(&["a"]).await;
        let err = store.get_at(1).await.unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound { index: 1, len: 1 }));
    }

    #[tokio::test]
    async fn test_remove_shifts_later_entries() {
        let store = store_of(&["a", "b", "c"]).await;
        let next_key = store.get_at(2).await.unwrap().key();

        let removed = store.remove_at(1).await.expect("Failed to remove project");
        assert_eq!(removed.name, "b");
        assert_eq!(store.len().await, 2);

        let shifted = store.get_at(1).await.unwrap();
        assert_eq!(shifted.name, "c");
        assert_eq!(shifted.id, 1);
        assert_eq!(shifted.key(), next_key);
    }

    #[tokio::test]
    async fn test_remove_out_of_range() {
        let store = store_of(&["a", "b"]).await;
        assert!(store.remove_at(2).await.is_err());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_replace_overwrites_all_fields_and_keeps_key() {
        let store = store_of(&["a", "b"]).await;
        let original = store.get_at(0).await.unwrap();

        let start = parse_date("start_date", "2022-01-01").unwrap();
        let end = parse_date("end_date", "2022-02-01").unwrap();
        let replacement = Project::new("z", start, end).with_technologies(["rust"]);

        let stored = store.replace_at(0, replacement).await.expect("Failed to replace");
        assert_eq!(stored.id, 0);

        let fetched = store.get_at(0).await.unwrap();
        assert_eq!(fetched.name, "z");
        assert_eq!(fetched.technologies, vec!["rust"]);
        assert_eq!(fetched.description, "");
        assert_eq!(fetched.duration(), "1 month 1 days");
        assert_eq!(fetched.key(), original.key());
    }

    #[tokio::test]
    async fn test_replace_out_of_range_leaves_store_unchanged() {
        let store = store_of(&["a", "b", "c"]).await;
        let before = store.list().await;

        let err = store.replace_at(5, project("x")).await.unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound { index: 5, len: 3 }));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_list_is_ordered_snapshot() {
        let store = store_of(&["a", "b", "c"]).await;
        let snapshot = store.list().await;
        store.remove_at(0).await.unwrap();

        let names: Vec<_> = snapshot.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        let ids: Vec<_> = store.list().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_clones_share_the_list() {
        let store = ProjectStore::new();
        assert!(store.is_empty().await);

        let handle = store.clone();
        handle.append(project("a")).await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_with_projects_seeds_in_order() {
        let store = ProjectStore::with_projects([Project::demo(), project("b")]);
        let names: Vec<_> = store.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Project Title", "b"]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let store = ProjectStore::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(project(&format!("p{}", i))).await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let ids: Vec<_> = store.list().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, (0..32).collect::<Vec<_>>());
    }
}
