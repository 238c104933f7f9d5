//! HTTP client for the remote dashboard backend (REST).

use crate::core::backend::{Backend, BackendError};
use crate::models::{
    Asset, AssetId, AssociateTagRequest, BackendType, CreateDirectoryRequest,
    CreateProjectRequest, CreateTagRequest, CreatedDirectory, DirectoryListing, Label, LabelName,
    ProblemDetails, TagListing, UpdateDirectoryRequest, UpdatedDirectory,
};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let resp = Request::get(&self.url(path)).send().await?;
        Ok(ensure_success(resp).await?.json::<T>().await?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        req: Request,
        body: &B,
    ) -> anyhow::Result<T> {
        let resp = req.json(body)?.send().await?;
        Ok(ensure_success(resp).await?.json::<T>().await?)
    }

    async fn send_json_empty<B: Serialize>(&self, req: Request, body: &B) -> anyhow::Result<()> {
        let resp = req.json(body)?.send().await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

/// Turn non-2xx responses into errors, preferring the problem document's message.
pub(crate) async fn ensure_success(resp: Response) -> anyhow::Result<Response> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let status_text = resp.status_text();
    match resp.json::<ProblemDetails>().await {
        Ok(problem) => Err(anyhow::anyhow!("{}", problem.message())),
        Err(_) => Err(anyhow::anyhow!("{status} {status_text}")),
    }
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    fn backend_type(&self) -> BackendType {
        BackendType::Remote
    }

    async fn list_directory(&self, parent_id: Option<&AssetId>) -> Result<Vec<Asset>, BackendError> {
        let path = parent_id.map_or_else(
            || "/directories".to_string(),
            |id| format!("/directories?parent_id={}", urlencoding::encode(id.as_str())),
        );
        self.get_json::<DirectoryListing>(&path)
            .await
            .map(|listing| listing.assets)
            .map_err(|err| BackendError::request("list directory", err))
    }

    async fn create_directory(
        &self,
        body: CreateDirectoryRequest,
    ) -> Result<CreatedDirectory, BackendError> {
        let title = body.title.clone();
        self.send_json(Request::post(&self.url("/directories")), &body)
            .await
            .map_err(|err| BackendError::request(format!("create directory '{title}'"), err))
    }

    async fn update_directory(
        &self,
        id: &AssetId,
        body: UpdateDirectoryRequest,
        previous_title: &str,
    ) -> Result<UpdatedDirectory, BackendError> {
        self.send_json(Request::put(&self.url(&format!("/directories/{id}"))), &body)
            .await
            .map_err(|err| {
                BackendError::request(format!("rename directory '{previous_title}'"), err)
            })
    }

    async fn associate_tag(
        &self,
        id: &AssetId,
        labels: &[LabelName],
        title: &str,
    ) -> Result<(), BackendError> {
        let body = AssociateTagRequest {
            labels: labels.to_vec(),
        };
        self.send_json_empty(Request::patch(&self.url(&format!("/assets/{id}/labels"))), &body)
            .await
            .map_err(|err| BackendError::request(format!("set labels of '{title}'"), err))
    }

    async fn list_tags(&self) -> Result<Vec<Label>, BackendError> {
        self.get_json::<TagListing>("/tags")
            .await
            .map(|listing| listing.tags)
            .map_err(|err| BackendError::request("list labels", err))
    }

    async fn create_tag(&self, body: CreateTagRequest) -> Result<Label, BackendError> {
        let value = body.value.clone();
        self.send_json(Request::post(&self.url("/tags")), &body)
            .await
            .map_err(|err| BackendError::request(format!("create label '{value}'"), err))
    }

    async fn create_project(&self, body: CreateProjectRequest) -> Result<Asset, BackendError> {
        let name = body.name.clone();
        self.send_json(Request::post(&self.url("/projects")), &body)
            .await
            .map_err(|err| BackendError::request(format!("create project '{name}'"), err))
    }
}
