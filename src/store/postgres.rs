use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::compensation::Compensation;
use crate::models::employee::{Employee, EmployeeRef, NewEmployee};
use crate::store::EmployeeStore;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    position: String,
    department: String,
    direct_reports: Vec<Uuid>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position,
            department: row.department,
            direct_reports: row.direct_reports.into_iter().map(|id| EmployeeRef { id }).collect(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CompensationRow {
    salary: i64,
    effective_date: NaiveDate,
}

fn report_ids(reports: &[EmployeeRef]) -> Vec<Uuid> {
    reports.iter().map(|r| r.id).collect()
}

#[async_trait]
impl EmployeeStore for PgStore {
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

        let now = Utc::now();
        sqlx::query(
            r#"INSERT INTO employees (id, first_name, last_name, "position", department, direct_reports, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(report_ids(&employee.direct_reports))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn read_employee(&self, id: Uuid) -> Result<Employee, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"SELECT id, first_name, last_name, "position", department, direct_reports
               FROM employees WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Invalid employee id: {}", id)))?;

        Ok(row.into())
    }

    async fn update_employee(&self, employee: Employee) -> Result<Employee, AppError> {
        debug!("Updating employee [{}]", employee.id);

        let now = Utc::now();
        let result = sqlx::query(
            r#"UPDATE employees
               SET first_name = $1, last_name = $2, "position" = $3, department = $4,
                   direct_reports = $5, updated_at = $6
               WHERE id = $7"#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(report_ids(&employee.direct_reports))
        .bind(now)
        .bind(employee.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Invalid employee id: {}", employee.id)));
        }
        Ok(employee)
    }

    async fn create_compensation(&self, compensation: Compensation) -> Result<Compensation, AppError> {
        let employee = self.read_employee(compensation.employee.id).await?;
        debug!("Creating compensation for employee [{}]", employee.id);

        sqlx::query(
            "INSERT INTO compensations (id, employee_id, salary, effective_date, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(employee.id)
        .bind(compensation.salary)
        .bind(compensation.effective_date)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(Compensation {
            employee,
            salary: compensation.salary,
            effective_date: compensation.effective_date,
        })
    }

    async fn read_compensation(&self, employee_id: Uuid) -> Result<Compensation, AppError> {
        let employee = self.read_employee(employee_id).await?;

        let row = sqlx::query_as::<_, CompensationRow>(
            "SELECT salary, effective_date FROM compensations
             WHERE employee_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No compensation for employee: {}", employee_id)))?;

        Ok(Compensation {
            employee,
            salary: row.salary,
            effective_date: row.effective_date,
        })
    }
}
