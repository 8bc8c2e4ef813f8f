//! Workflow definitions and the requests that edit them.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// A configured extraction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    /// Workflow ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Free-text description shown in the dashboard.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Kind of documents the workflow extracts from, e.g. `invoice`.
    #[serde(deserialize_with = "null_as_default")]
    pub workflow_type: String,
    /// Header-level fields to extract.
    #[serde(deserialize_with = "null_as_default")]
    pub fields: Vec<Field>,
    /// Column headers for table extraction.
    #[serde(deserialize_with = "null_as_default")]
    pub table_headers: Vec<TableHeader>,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: WorkflowSettings,
    /// Creation timestamp as sent by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    /// Last modification timestamp as sent by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Workflow-level switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowSettings {
    /// Whether tables are captured in addition to fields.
    #[serde(deserialize_with = "null_as_default")]
    pub table_capture: bool,
}

/// A workflow template offered by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowType {
    /// Template identifier, used as `workflow_type` when creating a workflow.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// What the template extracts.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// A named field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// Field name, e.g. `invoice_number`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

impl Field {
    /// Field with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named table column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableHeader {
    /// Column name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

impl TableHeader {
    /// Column with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Body of `POST /workflows`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkflowRequest {
    pub description: String,
    /// ID of a [`WorkflowType`].
    pub workflow_type: String,
}

/// Body of `PUT /workflows/{id}/fields`; replaces all fields and headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFieldsRequest {
    pub fields: Vec<Field>,
    pub table_headers: Vec<TableHeader>,
}

/// Body of `PATCH /workflows/{id}/fields/{field_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFieldRequest {
    /// New field name.
    pub name: String,
}

/// Body of `PATCH /workflows/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMetadataRequest {
    pub description: String,
}

/// Body of `PATCH /workflows/{id}/settings`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub table_capture: bool,
}
