//! Request and response shapes for the directory operations.
//!
//! Full updates (`Update*Input`) only apply non-empty strings. Partial
//! updates (`Patch*Input`) apply every key that is present in the body,
//! empty strings included; `Some(None)` there means the key was sent as
//! `null`.

use serde::{Deserialize, Deserializer, Serialize};

use models::{employee, project};

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Value of a full-update field if it should be applied.
pub(crate) fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateEmployeeInput {
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEmployeeInput {
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchEmployeeInput {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub role: Option<Option<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchProjectInput {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssignInput {
    pub project_id: Option<i32>,
    pub employee_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWithProjects {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub projects: Vec<String>,
}

impl EmployeeWithProjects {
    pub fn new(e: employee::Model, projects: Vec<project::Model>) -> Self {
        Self {
            id: e.id,
            name: e.name,
            role: e.role,
            projects: projects.into_iter().map(|p| p.name).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectWithEmployees {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub employees: Vec<String>,
}

impl ProjectWithEmployees {
    pub fn new(p: project::Model, employees: Vec<employee::Model>) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            employees: employees.into_iter().map(|e| e.name).collect(),
        }
    }
}
