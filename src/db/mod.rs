use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::models::department::{Department, EmployeeDepartment};
use crate::models::employee::Employee;
use crate::utils::pagination::ListParams;

pub mod employee;
#[cfg(test)]
pub mod memory;

pub use employee::PgEmployeeStore;

const MAX_CONNECTIONS: u32 = 100;
const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60);
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    log::info!("postgres - setting max connection lifetime to: {:?}", MAX_CONNECTION_LIFETIME);
    log::info!("postgres - setting max open connections to: {}", MAX_CONNECTIONS);

    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .max_lifetime(MAX_CONNECTION_LIFETIME)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.url())
        .await
}

/// Data access for employees, departments and their assignments.
///
/// Lookups return `Ok(None)` when the row does not exist; `Err` is reserved
/// for failures of the store itself.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list_employees(&self, params: &ListParams) -> Result<Vec<Employee>, sqlx::Error>;

    /// Size of the whole employee population, independent of paging.
    async fn count_employees(&self) -> Result<i64, sqlx::Error>;

    async fn find_employee(&self, emp_no: i32) -> Result<Option<Employee>, sqlx::Error>;

    async fn find_department(&self, dept_no: &str) -> Result<Option<Department>, sqlx::Error>;

    async fn find_assignment(&self, emp_no: i32) -> Result<Option<EmployeeDepartment>, sqlx::Error>;

    async fn insert_assignment(&self, assignment: &EmployeeDepartment) -> Result<u64, sqlx::Error>;

    async fn update_assignment(&self, assignment: &EmployeeDepartment) -> Result<u64, sqlx::Error>;
}
