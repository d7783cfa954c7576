//! User model and roles.

use serde::{Deserialize, Serialize};

/// The role a user acts under within the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Captures leads and issues quotations.
    SalesAgent,
    /// Schedules jobs and manages the fleet.
    OperationsManager,
    /// Carries out assigned jobs.
    Operator,
}

impl UserRole {
    /// The wire name of the role, matching its serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::SalesAgent => "sales_agent",
            UserRole::OperationsManager => "operations_manager",
            UserRole::Operator => "operator",
        }
    }
}

/// An authenticated user of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// The role the user acts under.
    pub role: UserRole,
}
