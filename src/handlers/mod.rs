pub mod compensation;
pub mod employee;

use actix_web::web;
use uuid::Uuid;

use crate::errors::AppError;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/employee").route(web::post().to(employee::create_employee)))
        .service(
            web::resource("/employee/compensation")
                .route(web::post().to(compensation::create_compensation)),
        )
        .service(
            web::resource("/employee/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee)),
        )
        .service(
            web::resource("/employee/{id}/reporting-structure")
                .route(web::get().to(employee::get_reporting_structure)),
        )
        .service(
            web::resource("/employee/{id}/compensation")
                .route(web::get().to(compensation::get_compensation)),
        );
}

pub(crate) fn parse_employee_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid employee ID: {}", raw)))
}

/// Service backed by a fresh in-memory store, for endpoint tests.
#[cfg(test)]
macro_rules! test_app {
    () => {{
        let store: std::sync::Arc<dyn crate::store::EmployeeStore> =
            std::sync::Arc::new(crate::store::memory::MemStore::new());
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::from(store))
                .configure(crate::handlers::routes),
        )
        .await
    }};
}

#[cfg(test)]
pub(crate) use test_app;
