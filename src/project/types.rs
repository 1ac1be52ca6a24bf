// src/project/types.rs
// Type definitions for projects and tasks

use serde::{Deserialize, Serialize};

/// A project owning an ordered list of tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub tasks: Vec<Task>,
}

/// A task owned by exactly one project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Body for POST /projects
///
/// Absent fields are accepted, not rejected: a missing name becomes the
/// empty string, a missing description stays unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Body for PUT /projects/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Body for POST /projects/{id}/tasks
///
/// New tasks always start incomplete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Body for PUT /projects/{id}/tasks/{task_id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}
