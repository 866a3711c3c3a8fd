use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Mutex;

use super::EmployeeStore;
use crate::models::department::{Department, EmployeeDepartment};
use crate::models::employee::Employee;
use crate::utils::pagination::{ListParams, SortColumn, SortOrder};

/// Operations that can be made to fail on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    List,
    Count,
    FindEmployee,
    FindDepartment,
    FindAssignment,
    Insert,
    Update,
}

/// In-memory stand-in for Postgres with the same join semantics.
#[derive(Default)]
pub struct MemoryStore {
    employees: Mutex<Vec<Employee>>,
    departments: Mutex<Vec<Department>>,
    assignments: Mutex<HashMap<i32, EmployeeDepartment>>,
    failure: Mutex<Option<Failure>>,
    inserts: AtomicUsize,
    updates: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(self, employee: Employee) -> Self {
        self.employees.lock().unwrap().push(employee);
        self
    }

    pub fn with_department(self, dept_no: &str, dept_name: &str) -> Self {
        self.departments.lock().unwrap().push(Department {
            dept_no: dept_no.to_string(),
            dept_name: dept_name.to_string(),
        });
        self
    }

    pub fn with_assignment(self, assignment: EmployeeDepartment) -> Self {
        self.assignments
            .lock()
            .unwrap()
            .insert(assignment.emp_no, assignment);
        self
    }

    pub fn failing_on(self, failure: Failure) -> Self {
        *self.failure.lock().unwrap() = Some(failure);
        self
    }

    pub fn assignment(&self, emp_no: i32) -> Option<EmployeeDepartment> {
        self.assignments.lock().unwrap().get(&emp_no).cloned()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(AtomicOrdering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(AtomicOrdering::SeqCst)
    }

    fn check(&self, op: Failure) -> Result<(), sqlx::Error> {
        if *self.failure.lock().unwrap() == Some(op) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }

    fn joined(&self, employee: &Employee) -> Employee {
        let department = self
            .assignments
            .lock()
            .unwrap()
            .get(&employee.emp_no)
            .and_then(|assignment| {
                self.departments
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|d| d.dept_no == assignment.dept_no)
                    .map(|d| d.dept_name.clone())
            });

        Employee {
            department,
            ..employee.clone()
        }
    }
}

fn compare(column: SortColumn, a: &Employee, b: &Employee) -> Ordering {
    match column {
        SortColumn::EmpNo => a.emp_no.cmp(&b.emp_no),
        SortColumn::BirthDate => a.birth_date.cmp(&b.birth_date),
        SortColumn::FirstName => a.first_name.cmp(&b.first_name),
        SortColumn::LastName => a.last_name.cmp(&b.last_name),
        SortColumn::Gender => a.gender.cmp(&b.gender),
        SortColumn::HireDate => a.hire_date.cmp(&b.hire_date),
        SortColumn::Department => a.department.cmp(&b.department),
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list_employees(&self, params: &ListParams) -> Result<Vec<Employee>, sqlx::Error> {
        self.check(Failure::List)?;

        let employees = self.employees.lock().unwrap().clone();
        let mut joined: Vec<Employee> = employees.iter().map(|e| self.joined(e)).collect();
        joined.sort_by(|a, b| {
            let ordering = compare(params.sort_column, a, b);
            let ordering = match params.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            ordering.then(a.emp_no.cmp(&b.emp_no))
        });

        Ok(joined
            .into_iter()
            .skip(params.offset as usize)
            .take(params.limit as usize)
            .collect())
    }

    async fn count_employees(&self) -> Result<i64, sqlx::Error> {
        self.check(Failure::Count)?;
        Ok(self.employees.lock().unwrap().len() as i64)
    }

    async fn find_employee(&self, emp_no: i32) -> Result<Option<Employee>, sqlx::Error> {
        self.check(Failure::FindEmployee)?;
        let employee = self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.emp_no == emp_no)
            .cloned();
        Ok(employee.map(|e| self.joined(&e)))
    }

    async fn find_department(&self, dept_no: &str) -> Result<Option<Department>, sqlx::Error> {
        self.check(Failure::FindDepartment)?;
        Ok(self
            .departments
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.dept_no == dept_no)
            .cloned())
    }

    async fn find_assignment(&self, emp_no: i32) -> Result<Option<EmployeeDepartment>, sqlx::Error> {
        self.check(Failure::FindAssignment)?;
        Ok(self.assignment(emp_no))
    }

    async fn insert_assignment(&self, assignment: &EmployeeDepartment) -> Result<u64, sqlx::Error> {
        self.check(Failure::Insert)?;
        self.inserts.fetch_add(1, AtomicOrdering::SeqCst);
        self.assignments
            .lock()
            .unwrap()
            .insert(assignment.emp_no, assignment.clone());
        Ok(1)
    }

    async fn update_assignment(&self, assignment: &EmployeeDepartment) -> Result<u64, sqlx::Error> {
        self.check(Failure::Update)?;
        self.updates.fetch_add(1, AtomicOrdering::SeqCst);
        let mut assignments = self.assignments.lock().unwrap();
        match assignments.get_mut(&assignment.emp_no) {
            Some(existing) => {
                *existing = assignment.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
