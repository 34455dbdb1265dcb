//! eurocore HTTP client.
//!
//! Logs in with username/password, caches the bearer token and re-logs in once
//! the token is older than the configured refresh interval. Every resource call
//! checks for exactly one success status; anything else becomes
//! [`Error::Api`] carrying the status and the raw body.

mod session;

use std::{sync::Arc, time::Instant};

use reqwest::{header::CONTENT_TYPE, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::Mutex;

use eurocore_core::{
    config::ClientConfig,
    errors::Error,
    models::{
        dispatches::{DispatchStatus, EditDispatch, NewDispatch},
        telegrams::{DeleteTelegram, NewTelegram, TelegramList},
        templates::{EditTemplate, NewTemplate, Template},
    },
    Result,
};

use session::Session;

const USER_AGENT: &str = concat!("eurocore-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct Client {
    cfg: ClientConfig,
    http: reqwest::Client,
    session: Arc<Mutex<Session>>,
}

impl Client {
    /// Client with the default timeout (5s) and refresh interval (1h).
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url, username, password))
    }

    pub fn with_config(mut cfg: ClientConfig) -> Result<Self> {
        cfg.base_url = normalize_base_url(&cfg.base_url);

        let http = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            cfg,
            http,
            session: Arc::new(Mutex::new(Session::default())),
        })
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.cfg.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.cfg.base_url, path)
    }

    /// Log in again if the cached token is missing or stale, and return it.
    ///
    /// The session lock is held across the login so concurrent callers share
    /// one exchange. On failure the previous token stays in place.
    async fn ensure_fresh_token(&self) -> Result<String> {
        let mut session = self.session.lock().await;
        if session.is_stale(Instant::now(), self.cfg.refresh_interval) {
            let token = self.login().await?;
            session.refresh(token, Instant::now());
        }
        Ok(session.token().to_string())
    }

    async fn login(&self) -> Result<String> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        #[derive(Deserialize)]
        struct LoginResponse {
            token: String,
        }

        let body = encode(&LoginRequest {
            username: &self.cfg.username,
            password: &self.cfg.password,
        })?;

        let resp = self
            .http
            .post(self.url("/login"))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "eurocore login rejected");
            return Err(Error::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let LoginResponse { token } = serde_json::from_str(&text).map_err(Error::Decode)?;
        tracing::info!(username = %self.cfg.username, "refreshed eurocore token");
        Ok(token)
    }

    /// Send an authenticated request to `base_url + path`.
    ///
    /// The status code is not inspected here.
    pub async fn send_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        let token = self.ensure_fresh_token().await?;
        let url = self.url(path);

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token);
        if let Some(body) = body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        tracing::debug!(%method, %url, status = resp.status().as_u16(), "eurocore request");
        Ok(resp)
    }

    pub async fn get_telegrams(&self) -> Result<TelegramList> {
        let resp = self.send_request(Method::GET, "/telegrams", None).await?;
        let resp = expect_status(resp, StatusCode::OK).await?;
        decode(resp).await
    }

    /// Convenience wrapper around [`Client::send_telegrams`] for one telegram.
    pub async fn send_telegram(&self, telegram: &NewTelegram) -> Result<()> {
        self.send_telegrams(std::slice::from_ref(telegram)).await
    }

    pub async fn send_telegrams(&self, telegrams: &[NewTelegram]) -> Result<()> {
        let body = encode(telegrams)?;
        let resp = self
            .send_request(Method::POST, "/telegrams", Some(body))
            .await?;
        expect_status(resp, StatusCode::OK).await?;
        Ok(())
    }

    pub async fn delete_telegram(&self, telegram: &DeleteTelegram) -> Result<()> {
        let body = encode(telegram)?;
        let resp = self
            .send_request(Method::DELETE, "/telegrams", Some(body))
            .await?;
        expect_status(resp, StatusCode::OK).await?;
        Ok(())
    }

    async fn dispatch(&self, method: Method, path: &str, body: Vec<u8>) -> Result<DispatchStatus> {
        let resp = self.send_request(method, path, Some(body)).await?;
        let resp = expect_status(resp, StatusCode::CREATED).await?;
        decode(resp).await
    }

    pub async fn create_dispatch(&self, dispatch: &NewDispatch) -> Result<DispatchStatus> {
        let body = encode(dispatch)?;
        self.dispatch(Method::POST, "/dispatches", body).await
    }

    pub async fn edit_dispatch(&self, dispatch: &EditDispatch) -> Result<DispatchStatus> {
        let body = encode(dispatch)?;
        let path = format!("/dispatches/{}", dispatch.id);
        self.dispatch(Method::PUT, &path, body).await
    }

    /// Queue deletion of a dispatch.
    ///
    /// eurocore expects a PUT with an empty body here, not DELETE.
    pub async fn delete_dispatch(&self, id: i64) -> Result<DispatchStatus> {
        let path = format!("/dispatches/{id}");
        self.dispatch(Method::PUT, &path, Vec::new()).await
    }

    async fn template(
        &self,
        method: Method,
        path: &str,
        expected: StatusCode,
        body: Option<Vec<u8>>,
    ) -> Result<Template> {
        let resp = self.send_request(method, path, body).await?;
        let resp = expect_status(resp, expected).await?;
        decode(resp).await
    }

    pub async fn get_template(&self, id: &str) -> Result<Template> {
        let path = format!("/templates/{id}");
        self.template(Method::GET, &path, StatusCode::OK, None).await
    }

    pub async fn create_template(&self, template: &NewTemplate) -> Result<Template> {
        let body = encode(template)?;
        self.template(Method::POST, "/templates", StatusCode::CREATED, Some(body))
            .await
    }

    pub async fn edit_template(&self, template: &EditTemplate) -> Result<Template> {
        let body = encode(template)?;
        let path = format!("/templates/{}", template.id);
        self.template(Method::PATCH, &path, StatusCode::OK, Some(body))
            .await
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(Error::Encode)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(Error::Decode)
}

/// Pass the response through if it has the expected status, otherwise turn
/// it into [`Error::Api`] with the body text.
async fn expect_status(resp: Response, expected: StatusCode) -> Result<Response> {
    let status = resp.status();
    if status == expected {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(
        %url,
        status = status.as_u16(),
        expected = expected.as_u16(),
        "unexpected eurocore status"
    );
    Err(Error::Api {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(normalize_base_url("http://host/"), "http://host");
        assert_eq!(normalize_base_url("http://host///"), "http://host");
        assert_eq!(normalize_base_url("http://host"), "http://host");
        assert_eq!(normalize_base_url("http://host/api/"), "http://host/api");
    }

    #[test]
    fn urls_match_with_and_without_trailing_slash() {
        let a = Client::new("http://host/", "u", "p").unwrap();
        let b = Client::new("http://host", "u", "p").unwrap();
        assert_eq!(a.url("/dispatches/42"), b.url("/dispatches/42"));
        assert_eq!(a.url("/dispatches/42"), "http://host/dispatches/42");
        assert_eq!(a.base_url(), "http://host");
    }

    #[test]
    fn debug_does_not_leak_password() {
        let c = Client::new("http://host", "u", "hunter2").unwrap();
        assert!(!format!("{c:?}").contains("hunter2"));
    }
}
