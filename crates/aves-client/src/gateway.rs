//! The HTTP gateway
//!
//! Assembles requests against the configured base URL, attaches the
//! session's bearer credential when one is present, and maps non-2xx
//! statuses into [`ApiError`]: 401/403 become `PermissionDenied`, everything
//! else `RequestFailed` carrying the body text.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{ApiRequest, HttpResponse, Method, Transport};
use aves_domain::SessionHandle;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

pub struct Gateway<T: Transport> {
    pub(crate) transport: T,
    config: ClientConfig,
    session: SessionHandle,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T, config: ClientConfig, session: SessionHandle) -> Self {
        Self {
            transport,
            config,
            session,
        }
    }

    /// The session this gateway reads its credential from.
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn bearer(&self) -> Option<String> {
        self.session.read().ok().and_then(|s| s.token.clone())
    }

    fn endpoint(&self, path: &str) -> Result<String, ApiError> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|_| ApiError::InvalidUrl(self.config.base_url.clone()))?;
        let url = base
            .join(path)
            .map_err(|_| ApiError::InvalidUrl(path.to_string()))?;
        Ok(url.into())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.endpoint(path)?,
            bearer: self.bearer(),
            body,
        };
        let response = self.transport.execute(request).await?;
        check_status(response)
    }

    /// GET the path and decode its JSON body.
    pub async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        let response = self.send(Method::Get, path, None).await?;
        decode(&response.body)
    }

    /// POST a JSON body and decode the JSON answer.
    pub async fn post_json<B: Serialize, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        let response = self.send(Method::Post, path, Some(encode(body)?)).await?;
        decode(&response.body)
    }

    /// POST a JSON body, ignoring the response body.
    pub async fn post_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::Post, path, Some(encode(body)?)).await?;
        Ok(())
    }

    /// PUT a JSON body and decode the JSON answer.
    pub async fn put_json<B: Serialize, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        let response = self.send(Method::Put, path, Some(encode(body)?)).await?;
        decode(&response.body)
    }

    /// PUT a JSON body, ignoring the response body.
    pub async fn put_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::Put, path, Some(encode(body)?)).await?;
        Ok(())
    }

    /// DELETE the path. 200 and 204 both count as success.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await?;
        Ok(())
    }
}

/// Status → error mapping, in one place.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    match response.status {
        401 | 403 => Err(ApiError::PermissionDenied),
        _ if !response.is_success() => Err(ApiError::RequestFailed {
            status: response.status,
            body: response.body,
        }),
        _ => Ok(response),
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Network(format!("could not encode body: {e}")))
}

fn decode<D: DeserializeOwned>(body: &str) -> Result<D, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Network(format!("invalid response body: {e}")))
}
