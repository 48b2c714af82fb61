use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An id-only reference to another employee. Entries in `direct_reports`
/// never carry the child's own subtree; callers must load the full record
/// by id before descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    #[serde(default)]
    pub direct_reports: Vec<EmployeeRef>,
}

/// Creation payload. The store assigns the id, so none is accepted here.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub position: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[serde(default)]
    pub direct_reports: Vec<EmployeeRef>,
}

/// An employee together with the total count of everyone transitively
/// reporting to them. Computed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    pub employee: Employee,
    pub number_of_reports: u32,
}
