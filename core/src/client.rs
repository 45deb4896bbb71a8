//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemsClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.
//!
//! Success is decided by the response status: any 2xx passes, anything else
//! becomes `RequestFailure::Status`. Create and delete ignore the body.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::RequestFailure;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemId, NewItem};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Stateless client for the items collection resource.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    collection_url: String,
}

impl ItemsClient {
    pub fn new(collection_url: &str) -> Self {
        Self {
            collection_url: collection_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of a single item resource.
    pub fn item_url(&self, id: &ItemId) -> String {
        match id {
            ItemId::Number(n) => format!("{}/{n}", self.collection_url),
            // "." and ".." would be collapsed by URL normalization.
            ItemId::Text(s) if !s.is_empty() && s.bytes().all(|b| b == b'.') => {
                format!("{}/{}", self.collection_url, "%2E".repeat(s.len()))
            }
            ItemId::Text(s) => format!(
                "{}/{}",
                self.collection_url,
                utf8_percent_encode(s, PATH_SEGMENT)
            ),
        }
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &NewItem) -> Result<HttpRequest, RequestFailure> {
        let body =
            serde_json::to_string(input).map_err(|e| RequestFailure::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, id: &ItemId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, RequestFailure> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| RequestFailure::Deserialization(e.to_string()))
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<(), RequestFailure> {
        check_status(&response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), RequestFailure> {
        check_status(&response)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), RequestFailure> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestFailure::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
