use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::EmployeeStore;
use crate::models::department::{Department, EmployeeDepartment, EmployeeDepartmentRow};
use crate::models::employee::{Employee, EmployeeRow};
use crate::utils::pagination::ListParams;

const EMPLOYEE_SELECT: &str = "SELECT e.emp_no, e.birth_date, e.first_name, e.last_name, e.gender, e.hire_date, d.dept_name \
     FROM employees e \
     LEFT JOIN dept_emp de ON e.emp_no = de.emp_no \
     LEFT JOIN departments d ON de.dept_no = d.dept_no";

// A concurrent first assignment for the same employee turns into an overwrite.
const INSERT_ASSIGNMENT: &str = "INSERT INTO dept_emp (emp_no, dept_no, from_date, to_date) \
     VALUES ($1, $2, $3, $4) \
     ON CONFLICT (emp_no) DO UPDATE \
     SET dept_no = EXCLUDED.dept_no, from_date = EXCLUDED.from_date, to_date = EXCLUDED.to_date";

const UPDATE_ASSIGNMENT: &str =
    "UPDATE dept_emp SET dept_no = $1, from_date = $2, to_date = $3 WHERE emp_no = $4";

/// Builds the paginated listing query. Sort column and direction come from
/// closed enums; limit and offset are bound.
pub fn list_query(params: &ListParams) -> QueryBuilder<'static, Postgres> {
    let mut query_builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(EMPLOYEE_SELECT);

    query_builder.push(" ORDER BY ");
    query_builder.push(params.sort_column.as_sql());
    query_builder.push(" ");
    query_builder.push(params.sort_order.as_sql());
    // stable paging when the sort key has duplicates
    query_builder.push(", e.emp_no");

    query_builder.push(" LIMIT ");
    query_builder.push_bind(params.limit);
    query_builder.push(" OFFSET ");
    query_builder.push_bind(params.offset);

    query_builder
}

#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list_employees(&self, params: &ListParams) -> Result<Vec<Employee>, sqlx::Error> {
        let mut query_builder = list_query(params);
        let rows = query_builder
            .build_query_as::<EmployeeRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                log::error!("error executing employee listing query: {:?}", err);
                err
            })?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn count_employees(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                log::error!("error getting total quantity from employees table: {:?}", err);
                err
            })
    }

    async fn find_employee(&self, emp_no: i32) -> Result<Option<Employee>, sqlx::Error> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!("{} WHERE e.emp_no = $1", EMPLOYEE_SELECT))
            .bind(emp_no)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Employee::from))
    }

    async fn find_department(&self, dept_no: &str) -> Result<Option<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>("SELECT dept_no, dept_name FROM departments WHERE dept_no = $1")
            .bind(dept_no)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_assignment(&self, emp_no: i32) -> Result<Option<EmployeeDepartment>, sqlx::Error> {
        let row = sqlx::query_as::<_, EmployeeDepartmentRow>(
            "SELECT emp_no, dept_no, from_date, to_date FROM dept_emp WHERE emp_no = $1",
        )
        .bind(emp_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EmployeeDepartment::from))
    }

    async fn insert_assignment(&self, assignment: &EmployeeDepartment) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(INSERT_ASSIGNMENT)
            .bind(assignment.emp_no)
            .bind(&assignment.dept_no)
            .bind(assignment.from_date.date_naive())
            .bind(assignment.to_date.date_naive())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn update_assignment(&self, assignment: &EmployeeDepartment) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(UPDATE_ASSIGNMENT)
            .bind(&assignment.dept_no)
            .bind(assignment.from_date.date_naive())
            .bind(assignment.to_date.date_naive())
            .bind(assignment.emp_no)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
