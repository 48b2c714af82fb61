use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::compensation::Compensation;
use crate::models::employee::{Employee, NewEmployee};
use crate::store::EmployeeStore;

/// In-memory store. Backs the test suite and the dev-mode server when no
/// `DATABASE_URL` is configured.
#[derive(Default)]
pub struct MemStore {
    employees: RwLock<HashMap<Uuid, Employee>>,
    compensations: RwLock<HashMap<Uuid, Vec<(i64, NaiveDate)>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an employee under a fixed id. Test fixtures need stable ids to
    /// wire up `direct_reports` ahead of time.
    #[cfg(test)]
    pub fn insert_with_id(&self, employee: Employee) {
        self.employees
            .write()
            .unwrap()
            .insert(employee.id, employee);
    }
}

#[async_trait]
impl EmployeeStore for MemStore {
    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, AppError> {
        let employee = Employee {
            id: Uuid::new_v4(),
            first_name: new.first_name,
            last_name: new.last_name,
            position: new.position,
            department: new.department,
            direct_reports: new.direct_reports,
        };
        debug!("Creating employee [{}]", employee.id);
        self.employees
            .write()
            .unwrap()
            .insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn read_employee(&self, id: Uuid) -> Result<Employee, AppError> {
        self.employees
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Invalid employee id: {}", id)))
    }

    async fn update_employee(&self, employee: Employee) -> Result<Employee, AppError> {
        debug!("Updating employee [{}]", employee.id);
        let mut employees = self.employees.write().unwrap();
        if !employees.contains_key(&employee.id) {
            return Err(AppError::NotFound(format!("Invalid employee id: {}", employee.id)));
        }
        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn create_compensation(&self, compensation: Compensation) -> Result<Compensation, AppError> {
        let employee = self.read_employee(compensation.employee.id).await?;
        debug!("Creating compensation for employee [{}]", employee.id);
        self.compensations
            .write()
            .unwrap()
            .entry(employee.id)
            .or_default()
            .push((compensation.salary, compensation.effective_date));
        Ok(Compensation {
            employee,
            salary: compensation.salary,
            effective_date: compensation.effective_date,
        })
    }

    async fn read_compensation(&self, employee_id: Uuid) -> Result<Compensation, AppError> {
        let employee = self.read_employee(employee_id).await?;
        let (salary, effective_date) = self
            .compensations
            .read()
            .unwrap()
            .get(&employee_id)
            .and_then(|entries| entries.last().copied())
            .ok_or_else(|| AppError::NotFound(format!("No compensation for employee: {}", employee_id)))?;
        Ok(Compensation {
            employee,
            salary,
            effective_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(first: &str, last: &str) -> NewEmployee {
        NewEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            position: "Developer".to_string(),
            department: "Engineering".to_string(),
            direct_reports: Vec::new(),
        }
    }

    #[tokio::test]
    async fn create_then_read_round_trip() {
        let store = MemStore::new();
        let created = store.create_employee(new_employee("John", "Doe")).await.unwrap();
        assert!(!created.id.is_nil());

        let read = store.read_employee(created.id).await.unwrap();
        assert_eq!(read.first_name, "John");
        assert_eq!(read.last_name, "Doe");
        assert_eq!(read.position, "Developer");
        assert_eq!(read.department, "Engineering");
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = MemStore::new();
        let a = store.create_employee(new_employee("A", "A")).await.unwrap();
        let b = store.create_employee(new_employee("B", "B")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn update_overwrites_position_only_where_given() {
        let store = MemStore::new();
        let mut created = store.create_employee(new_employee("John", "Doe")).await.unwrap();

        created.position = "Development Manager".to_string();
        store.update_employee(created.clone()).await.unwrap();

        let read = store.read_employee(created.id).await.unwrap();
        assert_eq!(read.position, "Development Manager");
        assert_eq!(read.first_name, "John");
        assert_eq!(read.last_name, "Doe");
        assert_eq!(read.department, "Engineering");
    }

    #[tokio::test]
    async fn read_unknown_id_is_not_found() {
        let store = MemStore::new();
        let err = store.read_employee(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemStore::new();
        let ghost = Employee {
            id: Uuid::new_v4(),
            first_name: "No".to_string(),
            last_name: "Body".to_string(),
            position: "None".to_string(),
            department: "None".to_string(),
            direct_reports: Vec::new(),
        };
        let err = store.update_employee(ghost).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn compensation_round_trip() {
        let store = MemStore::new();
        let employee = store.create_employee(new_employee("John", "Lennon")).await.unwrap();
        let effective = NaiveDate::from_ymd_opt(2024, 7, 23).unwrap();

        let created = store
            .create_compensation(Compensation {
                employee: employee.clone(),
                salary: 90_000,
                effective_date: effective,
            })
            .await
            .unwrap();
        assert_eq!(created.employee.id, employee.id);

        let fetched = store.read_compensation(employee.id).await.unwrap();
        assert_eq!(fetched.employee.id, employee.id);
        assert_eq!(fetched.salary, 90_000);
        assert_eq!(fetched.effective_date, effective);
    }

    #[tokio::test]
    async fn latest_compensation_wins_on_read() {
        let store = MemStore::new();
        let employee = store.create_employee(new_employee("John", "Lennon")).await.unwrap();

        for (salary, day) in [(90_000, 1), (95_000, 2)] {
            store
                .create_compensation(Compensation {
                    employee: employee.clone(),
                    salary,
                    effective_date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
                })
                .await
                .unwrap();
        }

        let fetched = store.read_compensation(employee.id).await.unwrap();
        assert_eq!(fetched.salary, 95_000);
    }

    #[tokio::test]
    async fn compensation_missing_for_existing_employee_is_not_found() {
        let store = MemStore::new();
        let employee = store.create_employee(new_employee("John", "Doe")).await.unwrap();

        let err = store.read_compensation(employee.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn compensation_for_unknown_employee_is_not_found() {
        let store = MemStore::new();
        let err = store.read_compensation(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
