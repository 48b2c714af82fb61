use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::parse_employee_id;
use crate::models::compensation::Compensation;
use crate::store::EmployeeStore;

pub async fn create_compensation(
    store: web::Data<dyn EmployeeStore>,
    compensation: web::Json<Compensation>,
) -> Result<HttpResponse, AppError> {
    let compensation = store.create_compensation(compensation.into_inner()).await?;
    Ok(HttpResponse::Created().json(compensation))
}

pub async fn get_compensation(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_employee_id(&id.into_inner())?;
    let compensation = store.read_compensation(id).await?;
    Ok(HttpResponse::Ok().json(compensation))
}
