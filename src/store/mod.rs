pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::compensation::Compensation;
use crate::models::employee::{Employee, NewEmployee};

/// Persistence port for employee and compensation records.
///
/// Object-safe so handlers can hold it as `web::Data<dyn EmployeeStore>`;
/// backed by Postgres in production and by an in-memory map in tests.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persist a new employee under a freshly generated id and return the
    /// stored record.
    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, AppError>;

    /// Look up an employee by id. `NotFound` when no record matches.
    async fn read_employee(&self, id: Uuid) -> Result<Employee, AppError>;

    /// Overwrite the record keyed by `employee.id` with the given fields.
    /// No partial-patch semantics. `NotFound` when the id is unknown.
    async fn update_employee(&self, employee: Employee) -> Result<Employee, AppError>;

    /// Insert a compensation record for `compensation.employee.id`. Repeat
    /// inserts for the same employee are kept independently.
    async fn create_compensation(&self, compensation: Compensation) -> Result<Compensation, AppError>;

    /// Fetch the most recently created compensation for an employee.
    async fn read_compensation(&self, employee_id: Uuid) -> Result<Compensation, AppError>;
}
