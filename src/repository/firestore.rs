//! Firestore Store
//!
//! Cloud Firestore REST v1 implementation of the pantry store. Each point
//! operation is a single HTTP call; listing follows page tokens until the
//! collection is exhausted. Requests authenticate with the project's web
//! API key in the `key` query parameter. There are no retries; a fixed
//! request timeout is the only resilience.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use super::document::{
    CommitRequest, Document, ListDocumentsResponse, RunQueryEntry, RunQueryRequest, FIELD_QUANTITY,
};
use super::traits::PantryStore;
use crate::config::FirestoreConfig;
use crate::domain::{PantryError, PantryItem, PantryResult};

/// Collection holding all pantry documents
pub const COLLECTION_ID: &str = "pantry";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const LIST_PAGE_SIZE: usize = 300;

/// Characters escaped when an item name becomes a URL path segment.
/// Everything outside the RFC 3986 unreserved set is encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Cloud Firestore implementation of the pantry store
pub struct FirestoreStore {
    http: reqwest::Client,
    config: FirestoreConfig,
}

impl FirestoreStore {
    /// Create a store from a configuration block
    pub fn new(config: FirestoreConfig) -> PantryResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PantryError::backend)?;
        Ok(Self { http, config })
    }

    /// Resource prefix shared by every path: `projects/{p}/databases/{d}/documents`
    fn documents_prefix(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.config.project_id, self.config.database_id
        )
    }

    /// Full resource name of an item's document, as used inside request bodies
    fn document_name(&self, name: &str) -> String {
        format!("{}/{}/{}", self.documents_prefix(), COLLECTION_ID, name)
    }

    fn document_url(&self, name: &str) -> String {
        format!(
            "{}/v1/{}/{}/{}",
            self.config.endpoint,
            self.documents_prefix(),
            COLLECTION_ID,
            utf8_percent_encode(name, PATH_SEGMENT)
        )
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/v1/{}/{}",
            self.config.endpoint,
            self.documents_prefix(),
            COLLECTION_ID
        )
    }

    /// URL of a documents-level RPC such as `commit` or `runQuery`
    fn rpc_url(&self, rpc: &str) -> String {
        format!("{}/v1/{}:{}", self.config.endpoint, self.documents_prefix(), rpc)
    }

    /// Attach the API key and send; maps transport failures only
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> PantryResult<Response> {
        request
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| PantryError::Backend(format!("{}: {}", context, e)))
    }
}

fn require_success(response: Response, context: &str) -> PantryResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PantryError::Backend(format!(
            "{}: server returned {}",
            context, status
        )))
    }
}

async fn decode<T: DeserializeOwned>(response: Response, context: &str) -> PantryResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| PantryError::Backend(format!("{}: {}", context, e)))
}

#[async_trait]
impl PantryStore for FirestoreStore {
    async fn get(&self, name: &str) -> PantryResult<Option<PantryItem>> {
        let context = "fetching pantry document";
        let response = self
            .send(self.http.get(self.document_url(name)), context)
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let document: Document = decode(require_success(response, context)?, context).await?;
        document.to_item().map(Some)
    }

    async fn put(&self, item: &PantryItem) -> PantryResult<()> {
        let context = "writing pantry document";
        let body = Document::from_item(item);
        // PATCH without an update mask creates or fully replaces the document
        let request = self.http.patch(self.document_url(&item.name)).json(&body);
        require_success(self.send(request, context).await?, context)?;
        Ok(())
    }

    async fn increment_quantity(&self, name: &str, delta: i64) -> PantryResult<()> {
        let context = "incrementing pantry quantity";
        let body = CommitRequest::increment_field(self.document_name(name), FIELD_QUANTITY, delta);
        let request = self.http.post(self.rpc_url("commit")).json(&body);
        require_success(self.send(request, context).await?, context)?;
        Ok(())
    }

    async fn delete(&self, name: &str) -> PantryResult<()> {
        let context = "deleting pantry document";
        // Firestore returns success even when the document does not exist
        let request = self.http.delete(self.document_url(name));
        require_success(self.send(request, context).await?, context)?;
        Ok(())
    }

    async fn list(&self) -> PantryResult<Vec<PantryItem>> {
        let context = "listing pantry documents";
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(self.collection_url())
                .query(&[("pageSize", LIST_PAGE_SIZE)]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = require_success(self.send(request, context).await?, context)?;
            let page: ListDocumentsResponse = decode(response, context).await?;

            for document in &page.documents {
                items.push(document.to_item()?);
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        log::debug!("listed {} pantry documents", items.len());
        Ok(items)
    }

    async fn find_by_name(&self, name: &str) -> PantryResult<Vec<PantryItem>> {
        let context = "querying pantry by name";
        let body = RunQueryRequest::name_equals(COLLECTION_ID, name);
        let request = self.http.post(self.rpc_url("runQuery")).json(&body);
        let response = require_success(self.send(request, context).await?, context)?;
        let entries: Vec<RunQueryEntry> = decode(response, context).await?;

        let mut items = Vec::new();
        for entry in entries {
            if let Some(document) = entry.document {
                items.push(document.to_item()?);
            }
        }
        Ok(items)
    }
}
