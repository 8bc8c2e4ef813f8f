//! Human-review actions on extracted fields, tables, and table cells.
//!
//! Page-level actions live under
//! `/workflows/{workflow_id}/documents/{document_id}/pages/{page_id}`.

use crate::endpoint::Endpoint;
use crate::models::{
    AddFieldRequest, AddTableCellRequest, AddTableRequest, UpdateFieldValueRequest,
    UpdateTableCellRequest, VerificationRequest,
};
use crate::{Client, Result};

/// Identifies one page of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef<'a> {
    /// Workflow the document belongs to.
    pub workflow_id: &'a str,
    /// Document the page belongs to.
    pub document_id: &'a str,
    /// Page within the document.
    pub page_id: &'a str,
}

impl<'a> PageRef<'a> {
    /// Reference a page by its workflow, document and page IDs.
    pub fn new(workflow_id: &'a str, document_id: &'a str, page_id: &'a str) -> Self {
        Self {
            workflow_id,
            document_id,
            page_id,
        }
    }

    /// Path segments of the page followed by `tail`.
    fn segments<'s>(&self, tail: &[&'s str]) -> Vec<&'s str>
    where
        'a: 's,
    {
        let mut segments = vec![
            "workflows",
            self.workflow_id,
            "documents",
            self.document_id,
            "pages",
            self.page_id,
        ];
        segments.extend_from_slice(tail);
        segments
    }
}

/// Moderation endpoints, obtained from [`Client::moderation`].
#[derive(Debug, Clone, Copy)]
pub struct Moderation<'a> {
    client: &'a Client,
}

impl<'a> Moderation<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Add a field value the extractor missed.
    pub async fn add_field(&self, page: PageRef<'_>, request: &AddFieldRequest) -> Result<()> {
        self.client
            .send_unit(Endpoint::post(page.segments(&["fields"])), request)
            .await
    }

    /// Correct an extracted field value.
    ///
    /// # Examples
    /// ```no_run
    /// # use nanonets::{Client, PageRef, UpdateFieldValueRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), nanonets::Error> {
    /// let client = Client::new("YOUR_API_KEY")?;
    /// let page = PageRef::new("wf_123", "doc_456", "page_1");
    /// client
    ///     .moderation()
    ///     .update_field(page, "fd_789", &UpdateFieldValueRequest { value: "42.00".into() })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_field(
        &self,
        page: PageRef<'_>,
        field_data_id: &str,
        request: &UpdateFieldValueRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::patch(page.segments(&["fields", field_data_id])),
                request,
            )
            .await
    }

    /// Remove an extracted field value.
    pub async fn delete_field(&self, page: PageRef<'_>, field_data_id: &str) -> Result<()> {
        self.client
            .fetch_unit(Endpoint::delete(page.segments(&["fields", field_data_id])))
            .await
    }

    /// Record a review verdict for a field value.
    pub async fn verify_field(
        &self,
        page: PageRef<'_>,
        field_data_id: &str,
        request: &VerificationRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::post(page.segments(&["fields", field_data_id, "verify"])),
                request,
            )
            .await
    }

    /// Add a table the extractor missed.
    pub async fn add_table(&self, page: PageRef<'_>, request: &AddTableRequest) -> Result<()> {
        self.client
            .send_unit(Endpoint::post(page.segments(&["tables"])), request)
            .await
    }

    /// Remove an extracted table.
    pub async fn delete_table(&self, page: PageRef<'_>, table_id: &str) -> Result<()> {
        self.client
            .fetch_unit(Endpoint::delete(page.segments(&["tables", table_id])))
            .await
    }

    /// Record a review verdict for a table.
    pub async fn verify_table(
        &self,
        page: PageRef<'_>,
        table_id: &str,
        request: &VerificationRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::post(page.segments(&["tables", table_id, "verify"])),
                request,
            )
            .await
    }

    /// Add a cell to an extracted table.
    pub async fn add_table_cell(
        &self,
        page: PageRef<'_>,
        table_id: &str,
        request: &AddTableCellRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::post(page.segments(&["tables", table_id, "cells"])),
                request,
            )
            .await
    }

    /// Correct the text of a table cell.
    pub async fn update_table_cell(
        &self,
        page: PageRef<'_>,
        table_id: &str,
        cell_id: &str,
        request: &UpdateTableCellRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::patch(page.segments(&["tables", table_id, "cells", cell_id])),
                request,
            )
            .await
    }

    /// Remove a table cell.
    pub async fn delete_table_cell(
        &self,
        page: PageRef<'_>,
        table_id: &str,
        cell_id: &str,
    ) -> Result<()> {
        self.client
            .fetch_unit(Endpoint::delete(page.segments(&[
                "tables", table_id, "cells", cell_id,
            ])))
            .await
    }

    /// Record a review verdict for a table cell.
    pub async fn verify_table_cell(
        &self,
        page: PageRef<'_>,
        table_id: &str,
        cell_id: &str,
        request: &VerificationRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::post(page.segments(&["tables", table_id, "cells", cell_id, "verify"])),
                request,
            )
            .await
    }

    /// Mark a whole document as reviewed.
    pub async fn verify_document(
        &self,
        workflow_id: &str,
        document_id: &str,
        request: &VerificationRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::post(["workflows", workflow_id, "documents", document_id, "verify"]),
                request,
            )
            .await
    }
}
