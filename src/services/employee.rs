use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::department::EmployeeDepartment;
use crate::models::employee::EmployeeResponse;
use crate::utils::pagination::ListParams;

/// Which branch of the assignment workflow persisted the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOutcome {
    Inserted,
    Updated,
}

pub async fn get_employees(
    store: &dyn EmployeeStore,
    params: &ListParams,
) -> Result<EmployeeResponse, AppError> {
    let employees = store.list_employees(params).await.map_err(|err| {
        log::error!("error selecting employees: {:?}", err);
        AppError::InternalServerError("internal server error".to_string())
    })?;

    let total = store.count_employees().await.map_err(|err| {
        log::error!("error counting employees: {:?}", err);
        AppError::InternalServerError("internal server error".to_string())
    })?;

    Ok(EmployeeResponse {
        total,
        page: params.page,
        employees,
    })
}

/// Assigns an employee to a department, inserting the assignment when the
/// employee has none yet and overwriting it otherwise.
pub async fn update_employee_department(
    store: &dyn EmployeeStore,
    assignment: &EmployeeDepartment,
) -> Result<AssignmentOutcome, AppError> {
    let emp_no = assignment.emp_no;
    let dept_no = assignment.dept_no.as_str();

    let employee = store.find_employee(emp_no).await.map_err(|err| {
        log::error!("error selecting employee {}: {:?}", emp_no, err);
        AppError::InternalServerError("error selecting employee".to_string())
    })?;
    if employee.is_none() {
        log::info!("employee not found: {}", emp_no);
        return Err(AppError::NotFound("employee not found".to_string()));
    }

    let department = store.find_department(dept_no).await.map_err(|err| {
        log::error!("error selecting department {}: {:?}", dept_no, err);
        AppError::InternalServerError("error selecting department".to_string())
    })?;
    if department.is_none() {
        log::info!("department not found: {}", dept_no);
        return Err(AppError::NotFound("department not found".to_string()));
    }

    let existing = store.find_assignment(emp_no).await.map_err(|err| {
        log::error!("error selecting employee department for employee {}: {:?}", emp_no, err);
        AppError::InternalServerError("error selecting employee department".to_string())
    })?;

    match existing {
        None => {
            let rows = store.insert_assignment(assignment).await.map_err(|err| {
                log::error!("error inserting employee department for employee {}: {:?}", emp_no, err);
                AppError::InternalServerError("error inserting employee department".to_string())
            })?;
            log::info!("employee department created for employee {}, rows affected: {}", emp_no, rows);
            Ok(AssignmentOutcome::Inserted)
        }
        Some(_) => {
            let rows = store.update_assignment(assignment).await.map_err(|err| {
                log::error!("error updating employee department for employee {}: {:?}", emp_no, err);
                AppError::InternalServerError("error updating employee department".to_string())
            })?;
            log::info!("employee department updated for employee {}, rows affected: {}", emp_no, rows);
            Ok(AssignmentOutcome::Updated)
        }
    }
}
