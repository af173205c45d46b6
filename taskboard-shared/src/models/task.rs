/// Task model and database operations
///
/// Tasks are the tracked work items. Each task references exactly one
/// employee by id; the reference is deliberately not a database foreign
/// key, so deleting an employee leaves the reference dangling and listings
/// surface the assignee as null.
///
/// # Status
///
/// A task is always in one of three states:
///
/// ```text
/// Pending → In Progress → Completed
/// ```
///
/// The wire strings are exactly `"Pending"`, `"In Progress"`, and
/// `"Completed"`; anything else is rejected before a row is written.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('Pending', 'In Progress', 'Completed');
///
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(255) NOT NULL,
///     description TEXT,
///     status task_status NOT NULL DEFAULT 'Pending',
///     assigned_to UUID NOT NULL,
///     due_date TIMESTAMPTZ
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Status of a task
///
/// Closed three-variant enum; the serialized form matches the dashboard
/// labels, including the space in "In Progress".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    /// Not started yet (the default for new tasks)
    #[sqlx(rename = "Pending")]
    Pending,

    /// Someone is working on it
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,

    /// Done
    #[sqlx(rename = "Completed")]
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl TaskStatus {
    /// Wire string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// Task model as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (UUID v4)
    pub id: Uuid,

    /// Short title (required)
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Current status
    pub status: TaskStatus,

    /// ID of the assigned employee
    ///
    /// Must reference an existing employee at write time; may dangle later
    /// if that employee is deleted.
    pub assigned_to: Uuid,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

/// Display fields of the employee a task is assigned to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignee {
    /// Employee ID
    pub id: Uuid,

    /// Employee display name
    pub name: String,
}

/// A task joined with its assignee for rendering
///
/// `assignee` is None when `assigned_to` no longer resolves to a live
/// employee; clients render that as "unassigned".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskWithAssignee {
    /// Unique task ID
    pub id: Uuid,

    /// Short title
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Current status
    pub status: TaskStatus,

    /// Raw assignee reference, kept for updates
    pub assigned_to: Uuid,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// Resolved assignee, None when the reference dangles
    pub assignee: Option<Assignee>,
}

/// Row shape produced by the list query's LEFT JOIN
#[derive(Debug, sqlx::FromRow)]
struct TaskAssigneeRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    assigned_to: Uuid,
    due_date: Option<DateTime<Utc>>,
    employee_id: Option<Uuid>,
    employee_name: Option<String>,
}

impl From<TaskAssigneeRow> for TaskWithAssignee {
    fn from(row: TaskAssigneeRow) -> Self {
        let assignee = match (row.employee_id, row.employee_name) {
            (Some(id), Some(name)) => Some(Assignee { id, name }),
            _ => None,
        };

        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status,
            assigned_to: row.assigned_to,
            due_date: row.due_date,
            assignee,
        }
    }
}

/// Input for creating a new task
///
/// The caller is responsible for verifying `assigned_to` references an
/// existing employee before calling [`Task::create`].
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Short title (required)
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Initial status
    pub status: TaskStatus,

    /// ID of the assigned employee (required)
    pub assigned_to: Uuid,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

/// Input for partially updating a task
///
/// Only non-None fields are written; in practice most updates change
/// `status` alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
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

impl UpdateTask {
    /// Whether this update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.assigned_to.is_none()
            && self.due_date.is_none()
    }
}

impl Task {
    /// Creates a new task
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable. Referential
    /// validation of `assigned_to` happens at the API layer before this
    /// call.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, status, assigned_to, due_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, status, assigned_to, due_date
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .bind(data.assigned_to)
        .bind(data.due_date)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists tasks with their assignees resolved
    ///
    /// The assignee is resolved at read time via LEFT JOIN, so a task whose
    /// employee was deleted still lists, with `assignee: None`. When
    /// `status` is given only matching tasks are returned.
    pub async fn list(
        pool: &PgPool,
        status: Option<TaskStatus>,
    ) -> Result<Vec<TaskWithAssignee>, sqlx::Error> {
        let base = r#"
            SELECT t.id, t.title, t.description, t.status, t.assigned_to, t.due_date,
                   e.id AS employee_id, e.name AS employee_name
            FROM tasks t
            LEFT JOIN employees e ON e.id = t.assigned_to
        "#;

        let rows = match status {
            Some(status) => {
                let query = format!("{} WHERE t.status = $1", base);
                sqlx::query_as::<_, TaskAssigneeRow>(&query)
                    .bind(status)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, TaskAssigneeRow>(base)
                    .fetch_all(pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(TaskWithAssignee::from).collect())
    }

    /// Partially updates a task
    ///
    /// Builds the SET clause from the fields present in `data`; absent
    /// fields are left untouched.
    ///
    /// # Returns
    ///
    /// The updated task if found, None if the id is unknown
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        if data.is_empty() {
            // Nothing to write; still report whether the task exists
            return sqlx::query_as::<_, Task>(
                "SELECT id, title, description, status, assigned_to, due_date FROM tasks WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(pool)
            .await;
        }

        let mut sets = Vec::new();
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            sets.push(format!("title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            sets.push(format!("description = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            sets.push(format!("status = ${}", bind_count));
        }
        if data.assigned_to.is_some() {
            bind_count += 1;
            sets.push(format!("assigned_to = ${}", bind_count));
        }
        if data.due_date.is_some() {
            bind_count += 1;
            sets.push(format!("due_date = ${}", bind_count));
        }

        let query = format!(
            "UPDATE tasks SET {} WHERE id = $1 \
             RETURNING id, title, description, status, assigned_to, due_date",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }
        if let Some(assigned_to) = data.assigned_to {
            q = q.bind(assigned_to);
        }
        if let Some(due_date) = data.due_date {
            q = q.bind(due_date);
        }

        let task = q.fetch_optional(pool).await?;

        Ok(task)
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// True if a task was deleted, false if the id was absent
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts all tasks
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Counts tasks in a given status
    pub async fn count_by_status(pool: &PgPool, status: TaskStatus) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
