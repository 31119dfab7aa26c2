//! Entity definitions for the staff directory and the store handle helpers.
//!
//! `employee` and `project` are linked many-to-many through
//! `project_employee`; see [`schema::ensure_schema`] for table bootstrap.

pub mod errors;
pub mod db;
pub mod schema;
pub mod employee;
pub mod project;
pub mod project_employee;
