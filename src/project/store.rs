// src/project/store.rs
// In-memory storage for the project/task hierarchy

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::types::{Project, Task};

/// Lookup failure raised by store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Project not found")]
    ProjectNotFound,
    #[error("Task not found")]
    TaskNotFound,
}

/// In-memory store for projects and their tasks.
///
/// All state lives behind a single lock; every operation acquires the guard
/// exactly once, so each mutation is atomic over the whole store. Projects
/// and tasks keep insertion order.
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
        }
    }

    // Project operations

    /// List all projects in creation order
    pub async fn list_projects(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> Result<Project, StoreError> {
        debug!("Fetching project: {}", id);

        self.projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::ProjectNotFound)
    }

    /// Create a project with an empty task list
    pub async fn create_project(&self, name: String, description: Option<String>) -> Project {
        let project = Project {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            tasks: Vec::new(),
        };

        self.projects.write().await.push(project.clone());
        info!("Created project: {}", project.id);

        project
    }

    /// Update a project's name and description, leaving its tasks untouched
    pub async fn update_project(
        &self,
        id: &str,
        name: String,
        description: Option<String>,
    ) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound)?;

        project.name = name;
        project.description = description;
        debug!("Updated project: {}", id);

        Ok(project.clone())
    }

    /// Delete a project and all of its tasks
    pub async fn delete_project(&self, id: &str) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        let index = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound)?;

        // Tasks live inside the project value, so removing it is the cascade
        let removed = projects.remove(index);
        info!("Deleted project {} and its {} tasks", removed.id, removed.tasks.len());

        Ok(())
    }

    // Task operations

    /// Create a task under an existing project. New tasks start incomplete.
    pub async fn create_task(
        &self,
        project_id: &str,
        title: String,
        description: Option<String>,
    ) -> Result<Task, StoreError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(StoreError::ProjectNotFound)?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            completed: false,
        };

        project.tasks.push(task.clone());
        info!("Created task {} in project {}", task.id, project_id);

        Ok(task)
    }

    /// Update a task's title, description, and completion flag
    pub async fn update_task(
        &self,
        project_id: &str,
        task_id: &str,
        title: String,
        description: Option<String>,
        completed: bool,
    ) -> Result<Task, StoreError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(StoreError::ProjectNotFound)?;
        let task = project
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(StoreError::TaskNotFound)?;

        task.title = title;
        task.description = description;
        task.completed = completed;
        debug!("Updated task {} in project {}", task_id, project_id);

        Ok(task.clone())
    }

    /// Delete a task, preserving the relative order of the remaining tasks
    pub async fn delete_task(&self, project_id: &str, task_id: &str) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(StoreError::ProjectNotFound)?;
        let index = project
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(StoreError::TaskNotFound)?;

        project.tasks.remove(index);
        info!("Deleted task {} from project {}", task_id, project_id);

        Ok(())
    }

    /// Number of projects currently stored
    pub async fn project_count(&self) -> usize {
        self.projects.read().await.len()
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_project_starts_empty() {
        let store = ProjectStore::new();

        let project = store
            .create_project("Alpha".to_string(), Some("desc".to_string()))
            .await;

        assert!(!project.id.is_empty());
        assert_eq!(project.name, "Alpha");
        assert_eq!(project.description.as_deref(), Some("desc"));
        assert!(project.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_project_ids_are_unique() {
        let store = ProjectStore::new();

        let mut ids = Vec::new();
        for i in 0..50 {
            let project = store.create_project(format!("p{}", i), None).await;
            ids.push(project.id);
        }

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[tokio::test]
    async fn test_task_ids_are_unique_within_project() {
        let store = ProjectStore::new();
        let project = store.create_project("Alpha".to_string(), None).await;

        let mut ids = Vec::new();
        for i in 0..50 {
            let task = store
                .create_task(&project.id, format!("t{}", i), None)
                .await
                .unwrap();
            ids.push(task.id);
        }

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[tokio::test]
    async fn test_created_task_is_contained_once() {
        let store = ProjectStore::new();
        let project = store.create_project("Alpha".to_string(), None).await;

        let task = store
            .create_task(&project.id, "T1".to_string(), None)
            .await
            .unwrap();

        let fetched = store.get_project(&project.id).await.unwrap();
        let occurrences = fetched.tasks.iter().filter(|t| t.id == task.id).count();
        assert_eq!(occurrences, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_project_fails() {
        let store = ProjectStore::new();

        let result = store.get_project("no-such-id").await;
        assert_eq!(result.unwrap_err(), StoreError::ProjectNotFound);
    }

    #[tokio::test]
    async fn test_task_lookup_distinguishes_missing_levels() {
        let store = ProjectStore::new();
        let project = store.create_project("Alpha".to_string(), None).await;

        // Unknown project id is always a project-level miss
        let err = store
            .update_task("no-such-project", "any", "t".to_string(), None, false)
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::ProjectNotFound);

        // Known project, unknown task id is a task-level miss
        let err = store
            .update_task(&project.id, "no-such-task", "t".to_string(), None, false)
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::TaskNotFound);

        let err = store.delete_task(&project.id, "no-such-task").await.unwrap_err();
        assert_eq!(err, StoreError::TaskNotFound);
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let store = ProjectStore::new();
        let keeper = store.create_project("Keeper".to_string(), None).await;
        let doomed = store.create_project("Doomed".to_string(), None).await;
        let task = store
            .create_task(&doomed.id, "T1".to_string(), None)
            .await
            .unwrap();

        store.delete_project(&doomed.id).await.unwrap();

        let err = store.get_project(&doomed.id).await.unwrap_err();
        assert_eq!(err, StoreError::ProjectNotFound);

        // The deleted project's task is not reachable through any other project
        for project in store.list_projects().await {
            assert!(project.tasks.iter().all(|t| t.id != task.id));
        }
        assert!(store.get_project(&keeper.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_task_preserves_order() {
        let store = ProjectStore::new();
        let project = store.create_project("Alpha".to_string(), None).await;

        let t1 = store.create_task(&project.id, "t1".to_string(), None).await.unwrap();
        let t2 = store.create_task(&project.id, "t2".to_string(), None).await.unwrap();
        let t3 = store.create_task(&project.id, "t3".to_string(), None).await.unwrap();

        store.delete_task(&project.id, &t2.id).await.unwrap();

        let remaining: Vec<String> = store
            .get_project(&project.id)
            .await
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(remaining, vec![t1.id, t3.id]);
    }

    #[tokio::test]
    async fn test_update_project_leaves_tasks_untouched() {
        let store = ProjectStore::new();
        let project = store.create_project("Alpha".to_string(), None).await;
        let task = store
            .create_task(&project.id, "T1".to_string(), None)
            .await
            .unwrap();

        let updated = store
            .update_project(&project.id, "Beta".to_string(), Some("new".to_string()))
            .await
            .unwrap();

        assert_eq!(updated.name, "Beta");
        assert_eq!(updated.tasks.len(), 1);
        assert_eq!(updated.tasks[0].id, task.id);
        assert_eq!(updated.tasks[0].title, "T1");
    }

    #[tokio::test]
    async fn test_update_task_isolated_from_siblings_and_parent() {
        let store = ProjectStore::new();
        let project = store.create_project("Alpha".to_string(), Some("d".to_string())).await;
        let t1 = store.create_task(&project.id, "t1".to_string(), None).await.unwrap();
        let t2 = store.create_task(&project.id, "t2".to_string(), None).await.unwrap();

        let updated = store
            .update_task(&project.id, &t1.id, "t1b".to_string(), Some("d2".to_string()), true)
            .await
            .unwrap();
        assert_eq!(updated.title, "t1b");
        assert!(updated.completed);

        let parent = store.get_project(&project.id).await.unwrap();
        assert_eq!(parent.name, "Alpha");
        assert_eq!(parent.description.as_deref(), Some("d"));

        let sibling = parent.tasks.iter().find(|t| t.id == t2.id).unwrap();
        assert_eq!(sibling.title, "t2");
        assert!(!sibling.completed);
    }

    #[tokio::test]
    async fn test_list_is_idempotent() {
        let store = ProjectStore::new();
        store.create_project("Alpha".to_string(), None).await;
        store.create_project("Beta".to_string(), None).await;

        let first: Vec<String> = store.list_projects().await.iter().map(|p| p.id.clone()).collect();
        let second: Vec<String> = store.list_projects().await.iter().map(|p| p.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let store = ProjectStore::new();

        let project = store
            .create_project("Alpha".to_string(), Some("desc".to_string()))
            .await;
        assert!(project.tasks.is_empty());

        let task = store
            .create_task(&project.id, "T1".to_string(), Some("d".to_string()))
            .await
            .unwrap();
        assert!(!task.completed);
        let fetched = store.get_project(&project.id).await.unwrap();
        assert_eq!(fetched.tasks.len(), 1);
        assert_eq!(fetched.tasks[0].id, task.id);

        let updated = store
            .update_task(&project.id, &task.id, "T1b".to_string(), Some("d2".to_string()), true)
            .await
            .unwrap();
        assert!(updated.completed);

        store.delete_task(&project.id, &task.id).await.unwrap();
        assert!(store.get_project(&project.id).await.unwrap().tasks.is_empty());

        store.delete_project(&project.id).await.unwrap();
        assert_eq!(
            store.get_project(&project.id).await.unwrap_err(),
            StoreError::ProjectNotFound
        );
    }
}
