/// Employee model and database operations
///
/// Employees are the people tasks get assigned to. They are not login
/// accounts (see [`crate::models::user`]); there is no update operation,
/// only create, list, and admin-gated delete.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE employees (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     email VARCHAR(255) NOT NULL UNIQUE,
///     role VARCHAR(255) NOT NULL,
///     department VARCHAR(255),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Deleting an employee never touches tasks that reference it; those tasks
/// keep a dangling `assigned_to` and list with a null assignee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Employee model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    /// Unique employee ID (UUID v4)
    pub id: Uuid,

    /// Full name
    pub name: String,

    /// Email address, unique across all employees
    pub email: String,

    /// Job role, free text (e.g. "Engineer", "Designer")
    pub role: String,

    /// Optional department
    pub department: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new employee
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    /// Full name (required)
    pub name: String,

    /// Email address (required, must be unique)
    pub email: String,

    /// Job role, free text (required)
    pub role: String,

    /// Optional department
    pub department: Option<String>,
}

impl Employee {
    /// Creates a new employee
    ///
    /// # Errors
    ///
    /// Returns an error if the email already exists (unique constraint
    /// violation) or the database is unreachable.
    pub async fn create(pool: &PgPool, data: CreateEmployee) -> Result<Self, sqlx::Error> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, email, role, department)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role, department, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.role)
        .bind(data.department)
        .fetch_one(pool)
        .await?;

        Ok(employee)
    }

    /// Lists all employees, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, role, department, created_at
            FROM employees
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(employees)
    }

    /// Deletes an employee by ID
    ///
    /// Referencing tasks are left untouched.
    ///
    /// # Returns
    ///
    /// True if an employee was deleted, false if the id was absent
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Checks whether an employee with the given ID exists
    ///
    /// Used to validate `assigned_to` references before a task is written.
    pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Counts all employees
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
