//! Request and response types for the Nanonets API.
//!
//! Response fields the service may omit fall back to their default value, so
//! a sparse but well-formed JSON object always decodes. Malformed JSON or a
//! field of the wrong type is still a decode error.

mod document;
mod moderation;
mod workflow;

pub use document::{
    Document, FieldData, Page, PageData, Table, TableCell, UploadDocumentFromUrlRequest,
    UploadDocumentRequest,
};
pub use moderation::{
    AddFieldRequest, AddTableCellRequest, AddTableRequest, Cell, UpdateFieldValueRequest,
    UpdateTableCellRequest, VerificationRequest,
};
pub use workflow::{
    CreateWorkflowRequest, Field, SetFieldsRequest, TableHeader, UpdateFieldRequest,
    UpdateMetadataRequest, UpdateSettingsRequest, Workflow, WorkflowSettings, WorkflowType,
};
