/// Task endpoints
///
/// # Endpoints
///
/// - `GET /tasks?status=` - List tasks with resolved assignees, optionally
///   filtered by status (authenticated)
/// - `POST /tasks` - Create a task (authenticated)
/// - `PUT /tasks/:id` - Partially update a task (authenticated)
/// - `DELETE /tasks/:id` - Delete a task (admin only)
///
/// A task must be assigned to an existing employee when it is written;
/// the reference is re-checked on update whenever `assigned_to` changes.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, Json, ValidationErrorDetail},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use taskboard_shared::models::{
    employee::Employee,
    task::{CreateTask, Task, TaskStatus, TaskWithAssignee, UpdateTask},
};
use uuid::Uuid;
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Short title
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title must not be empty")
    )]
    pub title: Option<String>,

    /// Optional longer description
    pub description: Option<String>,

    /// Initial status; "Pending" when omitted
    #[serde(default)]
    pub status: TaskStatus,

    /// ID of the assigned employee
    #[validate(required(message = "assigned_to is required"))]
    pub assigned_to: Option<Uuid>,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

/// Update task request; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<TaskStatus>,

    /// New assignee reference
    pub assigned_to: Option<Uuid>,

    /// New due date
    pub due_date: Option<DateTime<Utc>>,
}

/// Query parameters for task listing
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Return only tasks in this status
    pub status: Option<TaskStatus>,
}

/// Rejects an `assigned_to` reference that points at no live employee
async fn require_employee(state: &AppState, employee_id: Uuid) -> ApiResult<()> {
    if !Employee::exists(&state.db, employee_id).await? {
        return Err(ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "assigned_to".to_string(),
            message: "Assigned employee does not exist".to_string(),
        }]));
    }
    Ok(())
}

/// List tasks with their assignees resolved
///
/// An unknown `status` value in the query string is a 400.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<Vec<TaskWithAssignee>>> {
    let tasks = Task::list(&state.db, query.status).await?;
    Ok(Json(tasks))
}

/// Create a new task
///
/// # Errors
///
/// - `400 Bad Request`: Missing title/assignee, a status outside the
///   enumerated set, or an `assigned_to` that references no employee
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    req.validate()?;

    let title = req
        .title
        .ok_or_else(|| ApiError::BadRequest("Title is required".to_string()))?;
    let assigned_to = req
        .assigned_to
        .ok_or_else(|| ApiError::BadRequest("assigned_to is required".to_string()))?;

    require_employee(&state, assigned_to).await?;

    let task = Task::create(
        &state.db,
        CreateTask {
            title,
            description: req.description,
            status: req.status,
            assigned_to,
            due_date: req.due_date,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially update a task
///
/// Any authenticated user may update; most updates move `status` alone.
///
/// # Errors
///
/// - `400 Bad Request`: A status outside the enumerated set, or an
///   `assigned_to` that references no employee
/// - `404 Not Found`: Unknown task id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    if let Some(assigned_to) = req.assigned_to {
        require_employee(&state, assigned_to).await?;
    }

    let task = Task::update(
        &state.db,
        id,
        UpdateTask {
            title: req.title,
            description: req.description,
            status: req.status,
            assigned_to: req.assigned_to,
            due_date: req.due_date,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Delete a task (admin only; gated by middleware)
///
/// # Errors
///
/// - `404 Not Found`: Unknown task id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = Task::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
