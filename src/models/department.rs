use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub dept_no: String,
    pub dept_name: String,
}

/// Body of `POST /employees_department`. Dates stay raw until validated.
#[derive(Deserialize, Validate, Debug)]
pub struct EmployeeDepartmentRequest {
    pub emp_no: i32,
    #[validate(length(min = 1))]
    pub dept_no: String,
    pub from_date: String,
    pub to_date: String,
}

/// A validated assignment of an employee to a department.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDepartment {
    pub emp_no: i32,
    pub dept_no: String,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct EmployeeDepartmentRow {
    pub emp_no: i32,
    pub dept_no: String,
    pub from_date: chrono::NaiveDate,
    pub to_date: chrono::NaiveDate,
}

impl From<EmployeeDepartmentRow> for EmployeeDepartment {
    fn from(row: EmployeeDepartmentRow) -> Self {
        Self {
            emp_no: row.emp_no,
            dept_no: row.dept_no,
            from_date: super::employee::midnight_utc(row.from_date),
            to_date: super::employee::midnight_utc(row.to_date),
        }
    }
}
