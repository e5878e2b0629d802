//! The logged-in user's account.

use serde_json::Value;

use crate::client::ContentstackClient;
use crate::clients::ApiResult;
use crate::resources::encode_segment;

const USER_PATH: &str = "user";

/// Facade for the current user, created by [`ContentstackClient::user`].
#[derive(Clone, Copy, Debug)]
pub struct User<'a> {
    client: &'a ContentstackClient,
}

impl<'a> User<'a> {
    pub(crate) const fn new(client: &'a ContentstackClient) -> Self {
        Self { client }
    }

    /// Fetches the user the auth-token belongs to.
    ///
    /// # Errors
    ///
    /// See [`ContentstackClient::get`].
    pub async fn fetch(&self) -> ApiResult {
        self.client.get(USER_PATH, None, None).await
    }

    /// Updates the current user's profile.
    ///
    /// # Errors
    ///
    /// See [`ContentstackClient::put`].
    pub async fn update(&self, body: Value) -> ApiResult {
        self.client.put(USER_PATH, None, Some(body), None).await
    }

    /// Activates an account with the token from the activation email.
    ///
    /// # Errors
    ///
    /// See [`ContentstackClient::post`].
    pub async fn activate(&self, activation_token: &str, body: Value) -> ApiResult {
        let path = format!("{USER_PATH}/activate/{}", encode_segment(activation_token));
        self.client.post(&path, None, Some(body), None).await
    }

    /// Sends a password reset email.
    ///
    /// # Errors
    ///
    /// See [`ContentstackClient::post`].
    pub async fn request_password(&self, body: Value) -> ApiResult {
        self.client
            .post("user/forgot_password", None, Some(body), None)
            .await
    }

    /// Sets a new password using a reset token.
    ///
    /// # Errors
    ///
    /// See [`ContentstackClient::post`].
    pub async fn reset_password(&self, body: Value) -> ApiResult {
        self.client
            .post("user/reset_password", None, Some(body), None)
            .await
    }
}
