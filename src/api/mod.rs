//! REST backend access: a thin JSON client and one service per resource.

pub mod models;
mod services;

pub use services::{ContractService, ProfileService, ProjectService, RequestService};

use serde::{de::DeserializeOwned, Serialize};

use crate::utils::CCStr;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },
    #[error("{url} answered {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON client bound to the backend base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: CCStr,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<CCStr>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Joins the base URL and `path` with exactly one slash
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("GET {url} {query:?}");
        let response = self.http.get(&url).query(query).send().await;
        Self::decode(url, response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("POST {url}");
        let response = self.http.post(&url).json(body).send().await;
        Self::decode(url, response).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("PUT {url}");
        let response = self.http.put(&url).json(body).send().await;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        url: String,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> ApiResult<T> {
        let response = match response {
            Ok(r) => r,
            Err(source) => return Err(ApiError::Transport { url, source }),
        };
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { url, status, body });
        }
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_have_a_single_separator() {
        let client = ApiClient::new("https://grants.example.org/api/");
        assert_eq!(
            client.url("/projects/4"),
            "https://grants.example.org/api/projects/4"
        );
        let client = ApiClient::new("https://grants.example.org/api");
        assert_eq!(
            client.url("requests"),
            "https://grants.example.org/api/requests"
        );
    }

    #[test]
    fn status_errors_mention_the_url() {
        let e = ApiError::Status {
            url: "http://localhost/api/projects/9".to_owned(),
            status: reqwest::StatusCode::NOT_FOUND,
            body: "no such project".to_owned(),
        };
        assert_eq!(
            e.to_string(),
            "http://localhost/api/projects/9 answered 404 Not Found: no such project"
        );
    }
}
