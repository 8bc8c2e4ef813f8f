//! Workflow management endpoints.

use crate::endpoint::Endpoint;
use crate::models::{
    CreateWorkflowRequest, SetFieldsRequest, UpdateFieldRequest, UpdateMetadataRequest,
    UpdateSettingsRequest, Workflow, WorkflowType,
};
use crate::{Client, Result};

/// Workflow endpoints, obtained from [`Client::workflows`].
#[derive(Debug, Clone, Copy)]
pub struct Workflows<'a> {
    client: &'a Client,
}

impl<'a> Workflows<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a workflow.
    ///
    /// # Examples
    /// ```no_run
    /// # use nanonets::{Client, CreateWorkflowRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), nanonets::Error> {
    /// let client = Client::new("YOUR_API_KEY")?;
    /// let workflow = client
    ///     .workflows()
    ///     .create(&CreateWorkflowRequest {
    ///         description: "Supplier invoices".into(),
    ///         workflow_type: "invoice".into(),
    ///     })
    ///     .await?;
    /// println!("{}", workflow.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: &CreateWorkflowRequest) -> Result<Workflow> {
        self.client
            .send(Endpoint::post(["workflows"]), request)
            .await
    }

    /// Fetch a workflow by ID.
    ///
    /// A missing workflow is reported as [`crate::Error::Api`] with status 404.
    pub async fn get(&self, workflow_id: &str) -> Result<Workflow> {
        self.client
            .fetch(Endpoint::get(["workflows", workflow_id]))
            .await
    }

    /// List all workflows on the account.
    ///
    /// A `null` response body is treated as an empty list.
    pub async fn list(&self) -> Result<Vec<Workflow>> {
        self.client.fetch_list(Endpoint::get(["workflows"])).await
    }

    /// Replace the fields and table headers of a workflow.
    pub async fn set_fields(&self, workflow_id: &str, request: &SetFieldsRequest) -> Result<()> {
        self.client
            .send_unit(Endpoint::put(["workflows", workflow_id, "fields"]), request)
            .await
    }

    /// Rename a single field.
    pub async fn update_field(
        &self,
        workflow_id: &str,
        field_id: &str,
        request: &UpdateFieldRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::patch(["workflows", workflow_id, "fields", field_id]),
                request,
            )
            .await
    }

    /// Remove a field from a workflow.
    pub async fn delete_field(&self, workflow_id: &str, field_id: &str) -> Result<()> {
        self.client
            .fetch_unit(Endpoint::delete(["workflows", workflow_id, "fields", field_id]))
            .await
    }

    /// Update the workflow description.
    pub async fn update_metadata(
        &self,
        workflow_id: &str,
        request: &UpdateMetadataRequest,
    ) -> Result<()> {
        self.client
            .send_unit(Endpoint::patch(["workflows", workflow_id]), request)
            .await
    }

    /// Toggle workflow settings such as table capture.
    pub async fn update_settings(
        &self,
        workflow_id: &str,
        request: &UpdateSettingsRequest,
    ) -> Result<()> {
        self.client
            .send_unit(
                Endpoint::patch(["workflows", workflow_id, "settings"]),
                request,
            )
            .await
    }

    /// List the workflow templates the service offers.
    pub async fn types(&self) -> Result<Vec<WorkflowType>> {
        self.client
            .fetch_list(Endpoint::get(["workflows", "types"]))
            .await
    }
}
