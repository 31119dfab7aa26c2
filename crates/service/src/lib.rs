//! Service layer implementing the directory operations on top of `models`.
//! - Every write runs inside one transaction, committed before returning.
//! - Request bodies arrive as the typed inputs in [`domain`].
//! - Failures are reported as [`errors::ServiceError`].

pub mod errors;
pub mod domain;
pub mod employee_service;
pub mod project_service;
pub mod assignment_service;
#[cfg(test)]
pub mod test_support;
