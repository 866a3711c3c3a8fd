use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Row shape of the employee listing query, before dates are widened to
/// timestamps.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct EmployeeRow {
    pub emp_no: i32,
    pub birth_date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub hire_date: NaiveDate,
    pub dept_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub emp_no: i32,
    pub birth_date: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub hire_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeResponse {
    pub total: i64,
    pub page: i64,
    pub employees: Vec<Employee>,
}

pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            emp_no: row.emp_no,
            birth_date: midnight_utc(row.birth_date),
            first_name: row.first_name,
            last_name: row.last_name,
            gender: row.gender,
            hire_date: midnight_utc(row.hire_date),
            department: row.dept_name,
        }
    }
}
