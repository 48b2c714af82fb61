use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::errors::AppError;
use crate::handlers::parse_employee_id;
use crate::models::employee::{Employee, NewEmployee};
use crate::reporting;
use crate::store::EmployeeStore;

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    new_employee
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let employee = store.create_employee(new_employee.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_employee_id(&id.into_inner())?;
    let employee = store.read_employee(id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Full overwrite of the record at the path id. Every stored field is
/// replaced by the request body; the path id is authoritative.
pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
    updates: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    updates
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let id = parse_employee_id(&id.into_inner())?;
    let updates = updates.into_inner();
    let employee = store
        .update_employee(Employee {
            id,
            first_name: updates.first_name,
            last_name: updates.last_name,
            position: updates.position,
            department: updates.department,
            direct_reports: updates.direct_reports,
        })
        .await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_reporting_structure(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_employee_id(&id.into_inner())?;
    let structure = reporting::reporting_structure(store.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(structure))
}
