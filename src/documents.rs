//! Document management endpoints.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::endpoint::Endpoint;
use crate::models::{
    Document, Field, Page, Table, UploadDocumentFromUrlRequest, UploadDocumentRequest,
};
use crate::{Client, Error, Result};

/// Document endpoints, obtained from [`Client::documents`].
#[derive(Debug, Clone, Copy)]
pub struct Documents<'a> {
    client: &'a Client,
}

impl<'a> Documents<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Upload a local file into a workflow.
    ///
    /// The file is read in full before anything is sent. If it cannot be read
    /// the call fails with [`Error::Io`] and no request is made.
    ///
    /// # Arguments
    /// * `workflow_id` - Workflow that will process the document
    /// * `request` - File path, async flag, and metadata fields
    ///
    /// # Examples
    /// ```no_run
    /// # use nanonets::{Client, UploadDocumentRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), nanonets::Error> {
    /// let client = Client::new("YOUR_API_KEY")?;
    /// let request = UploadDocumentRequest::new("invoice.pdf")
    ///     .asynchronous(true)
    ///     .metadata("customer", "acme");
    /// let document = client.documents().upload("wf_123", &request).await?;
    /// println!("{} {}", document.document_id, document.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload(
        &self,
        workflow_id: &str,
        request: &UploadDocumentRequest,
    ) -> Result<Document> {
        let form = upload_form(request).await?;
        self.client
            .upload(Endpoint::post(["workflows", workflow_id, "documents"]), form)
            .await
    }

    /// Have the service fetch and process a document from a URL.
    pub async fn upload_from_url(
        &self,
        workflow_id: &str,
        request: &UploadDocumentFromUrlRequest,
    ) -> Result<Document> {
        self.client
            .send(Endpoint::post(["workflows", workflow_id, "documents"]), request)
            .await
    }

    /// Fetch a document with its processing status and extracted pages.
    pub async fn get(&self, workflow_id: &str, document_id: &str) -> Result<Document> {
        self.client
            .fetch(Endpoint::get(["workflows", workflow_id, "documents", document_id]))
            .await
    }

    /// List documents using the service's default page size.
    pub async fn list(&self, workflow_id: &str) -> Result<Vec<Document>> {
        self.client
            .fetch_list(Endpoint::get(["workflows", workflow_id, "documents"]))
            .await
    }

    /// List one page of documents.
    ///
    /// # Arguments
    /// * `page` - Page number, as counted by the service
    /// * `limit` - Maximum number of documents on the page
    pub async fn list_page(
        &self,
        workflow_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Document>> {
        let endpoint = Endpoint::get(["workflows", workflow_id, "documents"])
            .query("page", page)
            .query("limit", limit);
        self.client.fetch_list(endpoint).await
    }

    /// Delete a document from a workflow.
    pub async fn delete(&self, workflow_id: &str, document_id: &str) -> Result<()> {
        self.client
            .fetch_unit(Endpoint::delete(["workflows", workflow_id, "documents", document_id]))
            .await
    }

    /// Fields extracted from a document.
    pub async fn fields(&self, workflow_id: &str, document_id: &str) -> Result<Vec<Field>> {
        self.client
            .fetch_list(Endpoint::get([
                "workflows",
                workflow_id,
                "documents",
                document_id,
                "fields",
            ]))
            .await
    }

    /// Tables extracted from a document.
    pub async fn tables(&self, workflow_id: &str, document_id: &str) -> Result<Vec<Table>> {
        self.client
            .fetch_list(Endpoint::get([
                "workflows",
                workflow_id,
                "documents",
                document_id,
                "tables",
            ]))
            .await
    }

    /// Extraction results for a single page.
    pub async fn page(
        &self,
        workflow_id: &str,
        document_id: &str,
        page_id: &str,
    ) -> Result<Page> {
        self.client
            .fetch(Endpoint::get([
                "workflows",
                workflow_id,
                "documents",
                document_id,
                "pages",
                page_id,
            ]))
            .await
    }

    /// Download the file as it was originally uploaded.
    pub async fn original_file(&self, workflow_id: &str, document_id: &str) -> Result<Vec<u8>> {
        self.client
            .fetch_bytes(Endpoint::get([
                "workflows",
                workflow_id,
                "documents",
                document_id,
                "original",
            ]))
            .await
    }
}

/// Build the multipart body for [`Documents::upload`].
async fn upload_form(request: &UploadDocumentRequest) -> Result<Form> {
    let path = request.file.as_path();
    let bytes = tokio::fs::read(path).await.map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut form = Form::new()
        .part("file", Part::bytes(bytes).file_name(file_name(path)))
        .text("async", request.is_async.to_string());
    for (key, value) in &request.metadata {
        form = form.text(key.clone(), value.clone());
    }
    Ok(form)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
