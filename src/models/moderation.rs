//! Request bodies for human-review actions.

use serde::{Deserialize, Serialize};

/// Body for adding a field value to a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddFieldRequest {
    /// Workflow field the value belongs to.
    pub field_name: String,
    pub value: String,
    /// Bounding box as `[x1, y1, x2, y2]`.
    pub bbox: Vec<f64>,
    pub confidence: f64,
    pub verification_status: String,
    pub verification_message: String,
}

/// Body for correcting an extracted field value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFieldValueRequest {
    /// Corrected value.
    pub value: String,
}

/// Body for adding a table to a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddTableRequest {
    pub bbox: Vec<f64>,
    /// Column headers, left to right.
    pub headers: Vec<String>,
    pub verification_status: String,
    pub verification_message: String,
    pub cells: Vec<Cell>,
}

/// A cell supplied with [`AddTableRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub header: String,
    pub text: String,
    pub bbox: Vec<f64>,
    pub verification_status: String,
    pub verification_message: String,
}

/// Body for adding a cell to an existing table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddTableCellRequest {
    pub row: u32,
    pub col: u32,
    pub header: String,
    pub text: String,
    pub bbox: Vec<f64>,
    pub verification_status: String,
    pub verification_message: String,
}

impl From<Cell> for AddTableCellRequest {
    fn from(cell: Cell) -> Self {
        Self {
            row: cell.row,
            col: cell.col,
            header: cell.header,
            text: cell.text,
            bbox: cell.bbox,
            verification_status: cell.verification_status,
            verification_message: cell.verification_message,
        }
    }
}

/// Body for correcting a table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTableCellRequest {
    /// Corrected cell text.
    pub value: String,
}

/// Body of every verify action: field, table, table cell, or whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Review outcome, e.g. `success` or `failed`.
    pub verification_status: String,
    pub verification_message: String,
}

impl VerificationRequest {
    /// Verdict with an explanatory message.
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            verification_status: status.into(),
            verification_message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_table_request_shape() {
        let request = AddTableRequest {
            bbox: vec![10.0, 10.0, 100.0, 100.0],
            headers: vec!["col1".into(), "col2".into()],
            verification_status: "unverified".into(),
            verification_message: String::new(),
            cells: vec![Cell {
                row: 0,
                col: 0,
                header: "col1".into(),
                text: "cell".into(),
                bbox: vec![10.0, 10.0, 20.0, 20.0],
                verification_status: "unverified".into(),
                verification_message: String::new(),
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "bbox": [10.0, 10.0, 100.0, 100.0],
                "headers": ["col1", "col2"],
                "verification_status": "unverified",
                "verification_message": "",
                "cells": [{
                    "row": 0,
                    "col": 0,
                    "header": "col1",
                    "text": "cell",
                    "bbox": [10.0, 10.0, 20.0, 20.0],
                    "verification_status": "unverified",
                    "verification_message": ""
                }]
            })
        );
    }

    #[test]
    fn cell_converts_into_add_request() {
        let cell = Cell {
            row: 3,
            col: 1,
            text: "9.99".into(),
            ..Default::default()
        };
        let request = AddTableCellRequest::from(cell);
        assert_eq!((request.row, request.col), (3, 1));
        assert_eq!(request.text, "9.99");
    }
}
