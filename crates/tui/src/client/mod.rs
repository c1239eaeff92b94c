//! HTTP client for the budgeting API.
//!
//! The client speaks plain JSON over six endpoints. Failures are split into
//! transport problems, non-success statuses and bodies that are not the JSON
//! we expected, so callers can decide which ones are worth surfacing.

use std::time::Duration;

use api_types::{
    ErrorBody,
    account::{Account, AccountNew},
    transaction::Transaction,
};
use reqwest::{StatusCode, Url, header};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Http { status: StatusCode, message: String },
    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Operations the state container needs from the system of record.
///
/// [`Client`] is the HTTP implementation; tests substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait BudgetApi {
    /// `GET /accounts`
    async fn accounts(&self) -> std::result::Result<Vec<Account>, ClientError>;

    /// `GET /transactions`
    async fn transactions(&self) -> std::result::Result<Vec<Transaction>, ClientError>;

    /// `POST /account`. Returns the created account when the server echoes
    /// one back.
    async fn create_account(
        &self,
        payload: &AccountNew,
    ) -> std::result::Result<Option<Account>, ClientError>;

    /// `POST /transaction`
    async fn create_transaction(
        &self,
        transaction: &Transaction,
    ) -> std::result::Result<(), ClientError>;

    /// `GET /download-data`
    async fn download_data(&self) -> std::result::Result<serde_json::Value, ClientError>;

    /// `POST /upload-data` with `body` forwarded verbatim.
    async fn upload_data(&self, body: String) -> std::result::Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // `Url::join` drops the last path segment unless it ends with '/'.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|err| AppError::InvalidConfig(format!("invalid base_url: {err}")))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> Url {
        // Joining a relative path onto a base ending in '/' cannot fail.
        self.base_url
            .join(path.trim_start_matches('/'))
            .unwrap_or_else(|_| self.base_url.clone())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> std::result::Result<T, ClientError> {
        let res = self.http.get(self.endpoint(path)).send().await?;
        let body = success_body(res).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<TReq: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &TReq,
    ) -> std::result::Result<String, ClientError> {
        let res = self
            .http
            .post(self.endpoint(path))
            .json(payload)
            .send()
            .await?;
        success_body(res).await
    }
}

/// Returns the body of a 2xx response, or the status and server message.
async fn success_body(res: reqwest::Response) -> std::result::Result<String, ClientError> {
    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|err| err.error)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "server error".to_string()
            } else {
                trimmed.to_string()
            }
        });
    Err(ClientError::Http { status, message })
}

impl BudgetApi for Client {
    async fn accounts(&self) -> std::result::Result<Vec<Account>, ClientError> {
        self.get_json("accounts").await
    }

    async fn transactions(&self) -> std::result::Result<Vec<Transaction>, ClientError> {
        self.get_json("transactions").await
    }

    async fn create_account(
        &self,
        payload: &AccountNew,
    ) -> std::result::Result<Option<Account>, ClientError> {
        let body = self.post_json("account", payload).await?;
        Ok(serde_json::from_str::<Account>(&body).ok())
    }

    async fn create_transaction(
        &self,
        transaction: &Transaction,
    ) -> std::result::Result<(), ClientError> {
        self.post_json("transaction", transaction).await?;
        Ok(())
    }

    async fn download_data(&self) -> std::result::Result<serde_json::Value, ClientError> {
        self.get_json("download-data").await
    }

    async fn upload_data(&self, body: String) -> std::result::Result<(), ClientError> {
        let res = self
            .http
            .post(self.endpoint("upload-data"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        success_body(res).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_keep_base_path() {
        let client = Client::new("http://127.0.0.1:3000/api", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint("/accounts").as_str(),
            "http://127.0.0.1:3000/api/accounts"
        );

        let client = Client::new("http://127.0.0.1:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint("download-data").as_str(),
            "http://127.0.0.1:3000/download-data"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            Client::new("not a url", Duration::from_secs(1)),
            Err(AppError::InvalidConfig(_))
        ));
    }
}
