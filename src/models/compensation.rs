use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;

/// A salary record tied to one employee. Repeat creates for the same
/// employee are independent inserts; reads return the most recent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub employee: Employee,
    pub salary: i64,
    pub effective_date: NaiveDate,
}
