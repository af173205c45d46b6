/// Employee endpoints
///
/// # Endpoints
///
/// - `GET /employees` - List all employees (authenticated)
/// - `POST /employees` - Create an employee (authenticated)
/// - `DELETE /employees/:id` - Delete an employee (admin only)
///
/// Deleting an employee never cascades to tasks: a task referencing the
/// deleted employee keeps its `assigned_to` id and lists with a null
/// assignee from then on.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, Json},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use taskboard_shared::models::employee::{CreateEmployee, Employee};
use uuid::Uuid;
use validator::Validate;

/// Create employee request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// Full name
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,

    /// Email address (must be unique)
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,

    /// Job role, free text
    #[validate(
        required(message = "Role is required"),
        length(min = 1, message = "Role must not be empty")
    )]
    pub role: Option<String>,

    /// Optional department
    pub department: Option<String>,
}

/// List all employees
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = Employee::list(&state.db).await?;
    Ok(Json(employees))
}

/// Create a new employee
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields or duplicate email
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    req.validate()?;

    let name = req
        .name
        .ok_or_else(|| ApiError::BadRequest("Name is required".to_string()))?;
    let email = req
        .email
        .ok_or_else(|| ApiError::BadRequest("Email is required".to_string()))?;
    let role = req
        .role
        .ok_or_else(|| ApiError::BadRequest("Role is required".to_string()))?;

    let employee = Employee::create(
        &state.db,
        CreateEmployee {
            name,
            email,
            role,
            department: req.department,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Delete an employee (admin only; gated by middleware)
///
/// # Errors
///
/// - `404 Not Found`: Unknown employee id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = Employee::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
