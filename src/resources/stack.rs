//! Stacks and the entry points to everything inside them.

use serde_json::Value;

use crate::client::ContentstackClient;
use crate::clients::{ApiResult, InvalidHttpRequestError};
use crate::resources::{
    encode_segment, params, Alias, Branch, ContentType, DeliveryToken, Environment, GlobalField,
    Label, Metadata, Params, StackContext, Taxonomy, Workflow,
};

const STACKS_PATH: &str = "stacks";

/// Facade for one stack, created by [`ContentstackClient::stack`].
///
/// Requests carry the stack API key as the `api_key` header. A handle
/// without an API key can only [`find`](Self::find) and
/// [`create`](Self::create); everything else fails with `MissingApiKey`
/// before sending.
///
/// # Example
///
/// ```rust,ignore
/// let stack = client.stack(Some("blt_api_key")).with_branch("development");
/// let settings = stack.settings().await?;
/// let branches = stack.branch(None).find(None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Stack<'a> {
    context: StackContext<'a>,
}

impl<'a> Stack<'a> {
    pub(crate) fn new(client: &'a ContentstackClient, api_key: Option<&str>) -> Self {
        Self {
            context: StackContext::new(client, api_key),
        }
    }

    /// Scopes this handle, and every facade created from it, to a branch.
    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.context.set_branch(branch);
        self
    }

    /// Returns the stack context shared with child facades.
    #[must_use]
    pub const fn context(&self) -> &StackContext<'a> {
        &self.context
    }

    /// Lists all stacks the user can access. Sends no `api_key`.
    ///
    /// # Errors
    ///
    /// See [`ContentstackClient::get`].
    pub async fn find(&self, params: Option<Params>) -> ApiResult {
        self.context.client().get(STACKS_PATH, params, None).await
    }

    /// Creates a stack in an organization.
    ///
    /// # Errors
    ///
    /// See [`ContentstackClient::post`].
    pub async fn create(&self, organization_uid: &str, body: Value) -> ApiResult {
        let headers = params([("organization_uid", organization_uid)]);
        self.context
            .client()
            .post(STACKS_PATH, None, Some(body), Some(headers))
            .await
    }

    /// Fetches this stack.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn fetch(&self) -> ApiResult {
        self.context.get(STACKS_PATH, None).await
    }

    /// Updates this stack.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn update(&self, body: Value) -> ApiResult {
        self.context.put(STACKS_PATH, None, Some(body)).await
    }

    /// Deletes this stack.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn delete(&self) -> ApiResult {
        self.context.delete(STACKS_PATH, None).await
    }

    /// Lists the users who can access this stack.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn users(&self) -> ApiResult {
        self.context.get("stacks/users", None).await
    }

    /// Changes the roles of existing stack users.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn update_user_role(&self, body: Value) -> ApiResult {
        self.context
            .put("stacks/users/roles", None, Some(body))
            .await
    }

    /// Starts transferring stack ownership to another user.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn transfer_ownership(&self, body: Value) -> ApiResult {
        self.context
            .post("stacks/transfer_ownership", None, Some(body))
            .await
    }

    /// Accepts a pending ownership transfer.
    ///
    /// The API key and user uid travel as query parameters.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn accept_ownership(&self, user_uid: &str, ownership_token: &str) -> ApiResult {
        let api_key = self
            .context
            .api_key()
            .ok_or(InvalidHttpRequestError::MissingApiKey)?;
        let path = format!("stacks/accept_ownership/{}", encode_segment(ownership_token));
        let query = params([("api_key", api_key), ("uid", user_uid)]);
        self.context.get(&path, Some(query)).await
    }

    /// Fetches the stack settings.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn settings(&self) -> ApiResult {
        self.context.get("stacks/settings", None).await
    }

    /// Creates or updates stack settings.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn create_settings(&self, body: Value) -> ApiResult {
        self.context
            .post("stacks/settings", None, Some(body))
            .await
    }

    /// Resets stack settings to their defaults.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn reset_settings(&self, body: Value) -> ApiResult {
        self.context
            .post("stacks/settings/reset", None, Some(body))
            .await
    }

    /// Shares the stack with users by email.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn share(&self, body: Value) -> ApiResult {
        self.context.post("stacks/share", None, Some(body)).await
    }

    /// Removes a user from the stack.
    ///
    /// # Errors
    ///
    /// Fails without a request if the handle has no API key.
    pub async fn unshare(&self, body: Value) -> ApiResult {
        self.context.post("stacks/unshare", None, Some(body)).await
    }

    /// Branches of this stack.
    #[must_use]
    pub fn branch(&self, uid: Option<&str>) -> Branch<'a> {
        Branch::new(self.context.clone(), uid)
    }

    /// Branch aliases of this stack.
    #[must_use]
    pub fn alias(&self, uid: Option<&str>) -> Alias<'a> {
        Alias::new(self.context.clone(), uid)
    }

    /// Delivery tokens of this stack.
    #[must_use]
    pub fn delivery_token(&self, uid: Option<&str>) -> DeliveryToken<'a> {
        DeliveryToken::new(self.context.clone(), uid)
    }

    /// Workflows of this stack.
    #[must_use]
    pub fn workflow(&self, uid: Option<&str>) -> Workflow<'a> {
        Workflow::new(self.context.clone(), uid)
    }

    /// Entry and asset metadata of this stack.
    #[must_use]
    pub fn metadata(&self, uid: Option<&str>) -> Metadata<'a> {
        Metadata::new(self.context.clone(), uid)
    }

    /// Labels of this stack.
    #[must_use]
    pub fn label(&self, uid: Option<&str>) -> Label<'a> {
        Label::new(self.context.clone(), uid)
    }

    /// Global fields of this stack.
    #[must_use]
    pub fn global_fields(&self, uid: Option<&str>) -> GlobalField<'a> {
        GlobalField::new(self.context.clone(), uid)
    }

    /// Content types of this stack.
    #[must_use]
    pub fn content_types(&self, uid: Option<&str>) -> ContentType<'a> {
        ContentType::new(self.context.clone(), uid)
    }

    /// Publishing environments of this stack, addressed by name.
    #[must_use]
    pub fn environments(&self, name: Option<&str>) -> Environment<'a> {
        Environment::new(self.context.clone(), name)
    }

    /// Taxonomies of this stack.
    #[must_use]
    pub fn taxonomy(&self, uid: Option<&str>) -> Taxonomy<'a> {
        Taxonomy::new(self.context.clone(), uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpError;
    use crate::config::ClientConfig;
    use crate::resources::CrudResource;

    #[tokio::test]
    async fn test_stack_calls_without_api_key_fail_before_sending() {
        let client = ContentstackClient::new(ClientConfig::default()).unwrap();
        let stack = client.stack(None);

        assert!(matches!(
            stack.fetch().await,
            Err(HttpError::InvalidRequest(
                InvalidHttpRequestError::MissingApiKey
            ))
        ));
        assert!(matches!(
            stack.settings().await,
            Err(HttpError::InvalidRequest(
                InvalidHttpRequestError::MissingApiKey
            ))
        ));
    }

    #[test]
    fn test_branch_propagates_to_children() {
        let client = ContentstackClient::new(ClientConfig::default()).unwrap();
        let stack = client.stack(Some("blt1")).with_branch("dev");
        let label = stack.label(None);

        assert_eq!(label.context().branch(), Some("dev"));
        assert_eq!(label.context().api_key(), Some("blt1"));
    }
}
