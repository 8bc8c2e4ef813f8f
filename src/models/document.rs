//! Documents, their pages, and the extracted data on each page.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// A file processed under a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Document ID.
    #[serde(deserialize_with = "null_as_default")]
    pub document_id: String,
    /// Processing status reported by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Upload timestamp as sent by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub uploaded_at: String,
    /// Caller-supplied metadata; the service does not fix its shape.
    pub metadata: serde_json::Value,
    /// File name the document was uploaded with.
    #[serde(deserialize_with = "null_as_default")]
    pub original_document_name: String,
    /// Source URL for documents uploaded by URL.
    #[serde(deserialize_with = "null_as_default")]
    pub raw_document_url: String,
    /// Review outcome, e.g. `success` or `failed`.
    #[serde(deserialize_with = "null_as_default")]
    pub verification_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_stage: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_message: String,
    /// Reviewers the document is assigned to.
    #[serde(deserialize_with = "null_as_default")]
    pub assigned_reviewers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: Vec<Page>,
}

/// One page of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(deserialize_with = "null_as_default")]
    pub page_id: String,
    /// One-based position in the document.
    #[serde(deserialize_with = "null_as_default")]
    pub page_number: u32,
    /// Rendered page image.
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: PageData,
}

/// Values extracted from a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    /// Extracted values keyed by field name. A field may match several times.
    #[serde(deserialize_with = "null_as_default")]
    pub fields: HashMap<String, Vec<FieldData>>,
    #[serde(deserialize_with = "null_as_default")]
    pub tables: Vec<Table>,
}

/// A single extracted field value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldData {
    #[serde(deserialize_with = "null_as_default")]
    pub field_data_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Extraction confidence between 0 and 1.
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
    /// Bounding box as `[x1, y1, x2, y2]`.
    #[serde(deserialize_with = "null_as_default")]
    pub bbox: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_message: String,
    /// Whether a reviewer has changed the value.
    #[serde(deserialize_with = "null_as_default")]
    pub is_moderated: bool,
}

/// An extracted table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    #[serde(deserialize_with = "null_as_default")]
    pub table_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bbox: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub cells: Vec<TableCell>,
}

/// A cell of an extracted table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableCell {
    #[serde(deserialize_with = "null_as_default")]
    pub cell_id: String,
    /// Zero-based row index.
    #[serde(deserialize_with = "null_as_default")]
    pub row: u32,
    /// Zero-based column index.
    #[serde(deserialize_with = "null_as_default")]
    pub col: u32,
    /// Column header the cell falls under.
    #[serde(deserialize_with = "null_as_default")]
    pub header: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bbox: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_moderated: bool,
}

/// A local file to upload into a workflow.
///
/// Sent as `multipart/form-data`: a `file` part named after the file's base
/// name, an `async` field, and one text field per metadata entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDocumentRequest {
    /// Path of the file to upload.
    pub file: PathBuf,
    /// Return immediately instead of waiting for extraction to finish.
    pub is_async: bool,
    /// Extra form fields stored with the document.
    pub metadata: BTreeMap<String, String>,
}

impl UploadDocumentRequest {
    /// Synchronous upload of `file` with no metadata.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    /// Process the document in the background.
    pub fn asynchronous(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Attach a metadata field.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Body for uploading a document the service fetches from a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDocumentFromUrlRequest {
    /// Publicly reachable URL of the file.
    pub document_url: String,
    #[serde(rename = "async")]
    pub is_async: bool,
    /// Free-form metadata string stored with the document.
    pub metadata: String,
}
