use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{Result, SeedError};

const REST_PATH: &str = "rest/v1";

/// PostgREST client authenticated with a service role key.
pub struct RestClient {
    http: Client,
    base_url: Url,
    service_role_key: String,
}

/// Status and body of a response, whatever the status.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RestClient {
    pub fn new(base_url: Url, service_role_key: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            service_role_key,
        })
    }

    /// Client for a local test server, bypassing any configured proxy.
    #[cfg(test)]
    pub fn local(base_url: Url) -> Self {
        let http = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("build test client");
        Self {
            http,
            base_url,
            service_role_key: "service-key".to_string(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resource URL for a table, e.g. `https://<ref>.supabase.co/rest/v1/teams`.
    pub fn endpoint(&self, table: &str) -> Result<Url> {
        table_endpoint(&self.base_url, table)
    }

    pub async fn get(&self, table: &str) -> Result<RawResponse> {
        let url = self.endpoint(table)?;
        debug!(%url, "GET");
        let request = self.http.get(url).header("Content-Type", "application/json");
        self.send(request).await
    }

    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<RawResponse> {
        let url = self.endpoint(table)?;
        debug!(%url, "POST");
        // `json` sets the content type
        self.send(self.http.post(url).json(row)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<RawResponse> {
        let response = request
            .header("apikey", &self.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.service_role_key),
            )
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        Ok(RawResponse { status, body })
    }
}

fn table_endpoint(base_url: &Url, table: &str) -> Result<Url> {
    let raw = format!(
        "{}/{REST_PATH}/{table}",
        base_url.as_str().trim_end_matches('/')
    );
    Url::parse(&raw).map_err(|_| SeedError::InvalidUrl(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{respond, TestServer};

    #[test]
    fn test_table_endpoint() {
        let base = Url::parse("https://abc.supabase.co").unwrap();
        assert_eq!(
            table_endpoint(&base, "teams").unwrap().as_str(),
            "https://abc.supabase.co/rest/v1/teams"
        );
    }

    #[test]
    fn test_table_endpoint_keeps_base_path() {
        let base = Url::parse("http://127.0.0.1:54321/proxy/").unwrap();
        assert_eq!(
            table_endpoint(&base, "teams").unwrap().as_str(),
            "http://127.0.0.1:54321/proxy/rest/v1/teams"
        );
    }

    #[tokio::test]
    async fn test_get_sends_auth_headers() {
        let server = TestServer::start(vec![respond("200 OK", "[]")]);
        let client = RestClient::local(server.url.clone());

        let response = client.get("teams").await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "[]");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/rest/v1/teams");
        assert_eq!(requests[0].header_values("apikey"), vec!["service-key"]);
        assert_eq!(
            requests[0].header_values("authorization"),
            vec!["Bearer service-key"]
        );
        assert_eq!(
            requests[0].header_values("content-type"),
            vec!["application/json"]
        );
    }

    #[tokio::test]
    async fn test_insert_sends_single_content_type() {
        let server = TestServer::start(vec![respond("201 Created", "")]);
        let client = RestClient::local(server.url.clone());

        let response = client
            .insert("teams", &serde_json::json!({ "name": "Thunder Elite" }))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::CREATED);

        let requests = server.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].header_values("content-type"),
            vec!["application/json"]
        );
        assert_eq!(requests[0].body, r#"{"name":"Thunder Elite"}"#);
    }

    #[tokio::test]
    async fn test_truncated_body_is_http_error() {
        let truncated =
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n[]".to_string();
        let server = TestServer::start(vec![truncated]);
        let client = RestClient::local(server.url.clone());

        let err = client.get("teams").await.unwrap_err();
        assert!(matches!(err, SeedError::Http(_)), "got {err:?}");
    }
}
