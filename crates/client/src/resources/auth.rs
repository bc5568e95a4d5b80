//! Login and logout. These are the only operations that write session state.

use api_types::auth as wire;

use crate::{Api, error::Result, model::User, session::Session};

impl Api {
    /// Authenticates and persists the session (token + user profile) through
    /// the configured storage.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let response: wire::LoginResponse = self
            .post(
                "/auth/login",
                &wire::LoginRequest {
                    username: username.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;

        let session = Session {
            token: response.token,
            user: User::from(response.usuario),
        };
        self.session.set(session.clone());
        tracing::debug!(username, "logged in");
        Ok(session)
    }

    /// Logs out. The backend call is best-effort; local session state is
    /// always cleared.
    pub async fn logout(&self) {
        if let Err(err) = self.post_unit("/auth/logout", &()).await {
            tracing::warn!(error = %err, "logout request failed");
        }
        self.session.clear();
    }
}
