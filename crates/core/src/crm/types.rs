//! Client and project records with their status enums.
//!
//! Statuses are closed sets. Transitions are user-driven and
//! unrestricted within each enum; there is no transition matrix to
//! enforce, the type system only rules out foreign values.

use serde::{Deserialize, Serialize};

use kontor_shared::types::{ClientId, ProjectId};

/// Where a client stands in the acquisition funnel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    /// A prospective client. Creation default.
    #[default]
    Lead,
    /// A paying client.
    Customer,
    /// No longer active; kept for history.
    Archived,
}

impl ClientStatus {
    /// Parse a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lead" => Some(Self::Lead),
            "customer" => Some(Self::Customer),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Customer => "customer",
            Self::Archived => "archived",
        }
    }
}

/// Project execution status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Not started yet. Creation default.
    #[default]
    Planned,
    /// Work in progress.
    Active,
    /// Finished.
    Done,
}

impl ProjectStatus {
    /// Parse a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "planned" => Some(Self::Planned),
            "active" => Some(Self::Active),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Done => "done",
        }
    }
}

/// A client record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier.
    pub id: ClientId,
    /// Company or person name.
    pub name: String,
    /// Funnel status.
    pub status: ClientStatus,
}

impl Client {
    /// Creates a new client as a lead.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ClientId::new(),
            name: name.into(),
            status: ClientStatus::default(),
        }
    }
}

/// A project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: ProjectId,
    /// The client this project belongs to.
    pub client_id: ClientId,
    /// Project name.
    pub name: String,
    /// Execution status.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new planned project for a client.
    #[must_use]
    pub fn new(client_id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            client_id,
            name: name.into(),
            status: ProjectStatus::default(),
        }
    }
}
