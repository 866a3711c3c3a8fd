use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::department::{EmployeeDepartment, EmployeeDepartmentRequest};
use crate::services;
use crate::utils::pagination::{EmployeeQueryParams, ListParams};
use crate::utils::validation::{validate_dates, validate_payload};

pub async fn get_employees(
    store: web::Data<dyn EmployeeStore>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let query = EmployeeQueryParams::from_pairs(query.into_inner());
    let params = ListParams::from_query(&query)?;

    let employees = services::employee::get_employees(store.get_ref(), &params).await?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn add_employee_to_department(
    store: web::Data<dyn EmployeeStore>,
    request: web::Json<EmployeeDepartmentRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&request.0)?;

    let (from_date, to_date) = validate_dates(&request.from_date, &request.to_date)?;
    let request = request.into_inner();
    let assignment = EmployeeDepartment {
        emp_no: request.emp_no,
        dept_no: request.dept_no,
        from_date,
        to_date,
    };

    services::employee::update_employee_department(store.get_ref(), &assignment).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "employee's department updated successfully",
    })))
}
