use crate::models::book::{Book, BooksEnvelope};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BooksApiError {
    /// The exchange broke off: refused connection, timeout (including a body
    /// that stalls mid-read), name resolution failure.
    #[error("{0}")]
    Transport(String),
    #[error("Books service returned status {0}")]
    Status(u16),
    #[error("Books service found no books for genre {0:?}")]
    NotFound(String),
    #[error("Invalid response from books service: {0}")]
    Decode(String),
}

/// Filters forwarded verbatim to the books service. Values are not
/// type-checked here; empty values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl BookFilters {
    pub fn new(min_year: Option<String>, max_year: Option<String>, author: Option<String>) -> Self {
        Self {
            min_year: non_empty(min_year),
            max_year: non_empty(max_year),
            author: non_empty(author),
        }
    }

    /// The filters that will actually be sent, keyed by parameter name.
    pub fn applied(&self) -> BTreeMap<String, String> {
        [
            ("min_year", &self.min_year),
            ("max_year", &self.max_year),
            ("author", &self.author),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
        .collect()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Everything the client service needs from the books service.
#[async_trait]
pub trait BooksApi {
    async fn fetch_books(&self, filters: &BookFilters) -> Result<Vec<Book>, BooksApiError>;
    async fn fetch_books_by_genre(&self, genre: &str) -> Result<Vec<Book>, BooksApiError>;
}

pub struct HttpBooksApi {
    client: Client,
    base_url: Url,
}

impl HttpBooksApi {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn transport_error(e: reqwest::Error) -> BooksApiError {
    BooksApiError::Transport(e.to_string())
}

async fn read_books(response: Response) -> Result<Vec<Book>, BooksApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BooksApiError::Status(status.as_u16()));
    }

    // A stalled body surfaces as a body/timeout error here, not a decode one.
    let envelope: BooksEnvelope = response.json().await.map_err(|e| {
        if e.is_decode() {
            BooksApiError::Decode(e.to_string())
        } else {
            BooksApiError::Transport(e.to_string())
        }
    })?;
    Ok(envelope.books)
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn fetch_books(&self, filters: &BookFilters) -> Result<Vec<Book>, BooksApiError> {
        let url = self.endpoint(&["books"]);
        debug!("GET {} with filters {:?}", url, filters);

        let response = self
            .client
            .get(url)
            .query(filters)
            .send()
            .await
            .map_err(transport_error)?;

        read_books(response).await
    }

    async fn fetch_books_by_genre(&self, genre: &str) -> Result<Vec<Book>, BooksApiError> {
        let url = self.endpoint(&["genre", genre]);
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BooksApiError::NotFound(genre.to_string()));
        }

        read_books(response).await
    }
}
