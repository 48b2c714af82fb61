use futures_util::future::BoxFuture;
use log::debug;
use std::collections::HashSet;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::{Employee, ReportingStructure};
use crate::store::EmployeeStore;

/// Load an employee and compute the total number of employees transitively
/// reporting to them.
pub async fn reporting_structure(
    store: &dyn EmployeeStore,
    employee_id: Uuid,
) -> Result<ReportingStructure, AppError> {
    debug!("Getting reporting structure for employee [{}]", employee_id);

    let employee = store.read_employee(employee_id).await?;

    let mut path = HashSet::new();
    path.insert(employee.id);
    let number_of_reports = count_reports(store, &employee, &mut path).await?;

    Ok(ReportingStructure {
        employee,
        number_of_reports,
    })
}

/// Depth-first count over the reports tree. Each `direct_reports` entry
/// carries only an id, so the full child record is re-fetched before
/// descending. `path` holds the ids on the current ancestor chain: hitting
/// one again means the stored hierarchy has a cycle, which is reported as
/// a failure rather than recursing forever. The guard is scoped to the
/// path, not the whole walk, so an employee reachable under two different
/// managers is still counted once per occurrence.
fn count_reports<'a>(
    store: &'a dyn EmployeeStore,
    employee: &'a Employee,
    path: &'a mut HashSet<Uuid>,
) -> BoxFuture<'a, Result<u32, AppError>> {
    Box::pin(async move {
        if employee.direct_reports.is_empty() {
            return Ok(0);
        }

        let mut total = employee.direct_reports.len() as u32;
        for child in &employee.direct_reports {
            if !path.insert(child.id) {
                return Err(AppError::CycleDetected(format!(
                    "Reporting hierarchy contains a cycle through employee: {}",
                    child.id
                )));
            }
            let report = store.read_employee(child.id).await?;
            total += count_reports(store, &report, path).await?;
            path.remove(&child.id);
        }
        Ok(total)
    })
}
