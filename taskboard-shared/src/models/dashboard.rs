/// Dashboard aggregation
///
/// Computes the count summary shown on the dashboard: total employees,
/// total tasks, and one count per task status.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::{
    employee::Employee,
    task::{Task, TaskStatus},
};

/// Count aggregates for the dashboard view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of employee records
    pub total_employees: i64,

    /// Number of tasks in any status
    pub total_tasks: i64,

    /// Tasks in "Pending"
    pub pending_tasks: i64,

    /// Tasks in "In Progress"
    pub in_progress_tasks: i64,

    /// Tasks in "Completed"
    pub completed_tasks: i64,
}

impl DashboardStats {
    /// Computes all five counts from current repository state
    ///
    /// The five counts run concurrently and each reads committed state at
    /// its own execution time. There is no snapshot across them: a write
    /// landing between sub-counts can make the per-status counts disagree
    /// with `total_tasks`. That is the documented contract of this view.
    pub async fn compute(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let (total_employees, total_tasks, pending_tasks, in_progress_tasks, completed_tasks) =
            tokio::try_join!(
                Employee::count(pool),
                Task::count(pool),
                Task::count_by_status(pool, TaskStatus::Pending),
                Task::count_by_status(pool, TaskStatus::InProgress),
                Task::count_by_status(pool, TaskStatus::Completed),
            )?;

        Ok(Self {
            total_employees,
            total_tasks,
            pending_tasks,
            in_progress_tasks,
            completed_tasks,
        })
    }
}
