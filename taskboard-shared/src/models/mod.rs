/// Database models for Taskboard
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: Login accounts and the [`user::Role`] enum
/// - `employee`: Team members that tasks are assigned to
/// - `task`: Tracked work items with a three-state status
/// - `dashboard`: Count aggregates backing the dashboard view
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskboard_shared::models::employee::{CreateEmployee, Employee};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let employee = Employee::create(
///     &pool,
///     CreateEmployee {
///         name: "Ada Lovelace".to_string(),
///         email: "ada@example.com".to_string(),
///         role: "Engineer".to_string(),
///         department: None,
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod dashboard;
pub mod employee;
pub mod task;
pub mod user;
