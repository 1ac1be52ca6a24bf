// src/project/mod.rs
// Project and task tracking module

pub mod routes;
pub mod store;
pub mod types;

pub use routes::project_router;
pub use store::{ProjectStore, StoreError};
pub use types::{
    CreateProjectRequest, CreateTaskRequest, Project, Task, UpdateProjectRequest,
    UpdateTaskRequest,
};
