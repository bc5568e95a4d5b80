//! Request core shared by every resource module: bearer attach, JSON
//! decoding, backend error-body extraction and the 401 interceptor.

use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    Api,
    error::{ApiError, Result},
};

/// Error body shape used by the backend for every non-2xx response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl Api {
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends a prepared request, attaching the session token when present.
    ///
    /// A 401 from any endpoint invalidates the session (clear + hook) before
    /// the error is returned; other failures carry the message from the
    /// backend error body when one can be extracted.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let req = match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.session.invalidate();
            return Err(ApiError::Unauthorized);
        }

        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => "server error".to_string(),
        };
        Err(ApiError::Api { status, message })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        Ok(resp.json::<T>().await?)
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let resp = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(resp.json::<T>().await?)
    }

    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        self.send(self.http.post(self.url(path)).json(body))
            .await
            .map(|_| ())
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let resp = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(resp.json::<T>().await?)
    }

    pub(crate) async fn patch_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        self.send(self.http.patch(self.url(path)).json(body))
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<()> {
        self.send(self.http.delete(self.url(path))).await.map(|_| ())
    }
}
