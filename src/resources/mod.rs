//! Resource facades for the Content Management API.
//!
//! Facades are thin handles that borrow a [`ContentstackClient`] and turn
//! method calls into requests on well-known paths. They hold no state beyond
//! identifiers and never cache responses.
//!
//! Account-level facades ([`User`], [`Organization`]) are created directly
//! from the client. Everything inside a stack is reached through
//! [`Stack`], which attaches the `api_key` header (and `branch`, when set)
//! to every request it makes.
//!
//! # Example
//!
//! ```rust,ignore
//! use contentstack_management::{ClientConfig, ContentstackClient, CrudResource};
//!
//! let client = ContentstackClient::new(ClientConfig::default())?;
//! let stack = client.stack(Some("blt_api_key")).with_branch("development");
//!
//! let content_types = stack.content_types(None).find(None).await?;
//! let blog = stack.content_types(Some("blog_post")).fetch().await?;
//! ```

mod alias;
mod branch;
mod content_type;
mod delivery_token;
mod environment;
mod global_field;
mod label;
mod metadata;
mod organization;
mod stack;
mod taxonomy;
mod user;
mod workflow;

use std::collections::HashMap;

use serde_json::Value;

use crate::client::ContentstackClient;
use crate::clients::{ApiResult, HttpError, InvalidHttpRequestError, API_KEY, BRANCH};
use crate::config::ApiKey;

pub use alias::Alias;
pub use branch::Branch;
pub use content_type::ContentType;
pub use delivery_token::DeliveryToken;
pub use environment::Environment;
pub use global_field::GlobalField;
pub use label::Label;
pub use metadata::Metadata;
pub use organization::Organization;
pub use stack::Stack;
pub use taxonomy::{Taxonomy, Term};
pub use user::User;
pub use workflow::Workflow;

/// Query parameters or extra headers attached to a single call.
pub type Params = HashMap<String, String>;

/// The stack a facade operates in: the client plus the stack headers.
#[derive(Clone, Debug)]
pub struct StackContext<'a> {
    client: &'a ContentstackClient,
    api_key: Option<ApiKey>,
    branch: Option<String>,
}

impl<'a> StackContext<'a> {
    pub(crate) fn new(client: &'a ContentstackClient, api_key: Option<&str>) -> Self {
        Self {
            client,
            api_key: api_key.and_then(|k| ApiKey::new(k).ok()),
            branch: None,
        }
    }

    pub(crate) fn set_branch(&mut self, branch: &str) {
        self.branch = Some(branch.to_string()).filter(|b| !b.trim().is_empty());
    }

    /// Returns the client requests are sent through.
    #[must_use]
    pub const fn client(&self) -> &'a ContentstackClient {
        self.client
    }

    /// Returns the stack API key.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(AsRef::as_ref)
    }

    /// Returns the branch requests are scoped to.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Returns the stack headers for one request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingApiKey`] when the stack has
    /// no API key.
    pub fn headers(&self) -> Result<Params, HttpError> {
        let api_key = self.api_key().ok_or(InvalidHttpRequestError::MissingApiKey)?;

        let mut headers = Params::new();
        headers.insert(API_KEY.to_string(), api_key.to_string());
        if let Some(branch) = &self.branch {
            headers.insert(BRANCH.to_string(), branch.clone());
        }
        Ok(headers)
    }

    /// Sends a GET request with the stack headers.
    ///
    /// # Errors
    ///
    /// Fails without a request if the stack has no API key; otherwise see
    /// [`ContentstackClient::get`].
    pub async fn get(&self, path: &str, params: Option<Params>) -> ApiResult {
        let headers = self.headers()?;
        self.client.get(path, params, Some(headers)).await
    }

    /// Sends a POST request with the stack headers.
    ///
    /// # Errors
    ///
    /// Fails without a request if the stack has no API key; otherwise see
    /// [`ContentstackClient::post`].
    pub async fn post(&self, path: &str, params: Option<Params>, body: Option<Value>) -> ApiResult {
        let headers = self.headers()?;
        self.client.post(path, params, body, Some(headers)).await
    }

    /// Sends a PUT request with the stack headers.
    ///
    /// # Errors
    ///
    /// Fails without a request if the stack has no API key; otherwise see
    /// [`ContentstackClient::put`].
    pub async fn put(&self, path: &str, params: Option<Params>, body: Option<Value>) -> ApiResult {
        let headers = self.headers()?;
        self.client.put(path, params, body, Some(headers)).await
    }

    /// Sends a DELETE request with the stack headers.
    ///
    /// # Errors
    ///
    /// Fails without a request if the stack has no API key; otherwise see
    /// [`ContentstackClient::delete`].
    pub async fn delete(&self, path: &str, params: Option<Params>) -> ApiResult {
        let headers = self.headers()?;
        self.client.delete(path, params, Some(headers)).await
    }
}

/// A stack-scoped collection with the standard create/read/update/delete
/// operations.
///
/// Implementors name their collection path and optional uid; the trait
/// provides the requests. Single-resource operations use
/// `<collection>/<uid>` and fail with
/// [`InvalidHttpRequestError::MissingUid`] when no uid was given.
///
/// The trait must be in scope to call its methods:
///
/// ```rust,ignore
/// use contentstack_management::CrudResource;
///
/// let labels = client.stack(Some("blt_api_key")).label(None).find(None).await?;
/// ```
#[allow(async_fn_in_trait)]
pub trait CrudResource {
    /// Name used in error messages, e.g. "Branch".
    const NAME: &'static str;

    /// The stack this resource belongs to.
    fn context(&self) -> &StackContext<'_>;

    /// The uid of the single resource this handle points at.
    fn uid(&self) -> Option<&str>;

    /// Path of the collection, relative to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when a parent identifier is missing.
    fn collection_path(&self) -> Result<String, HttpError>;

    /// Path of the single resource.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingUid`] without a uid.
    fn member_path(&self) -> Result<String, HttpError> {
        let uid = require_uid(Self::NAME, self.uid())?;
        Ok(format!("{}/{}", self.collection_path()?, encode_segment(uid)))
    }

    /// Lists the collection.
    async fn find(&self, params: Option<Params>) -> ApiResult {
        let path = self.collection_path()?;
        self.context().get(&path, params).await
    }

    /// Fetches the single resource.
    async fn fetch(&self) -> ApiResult {
        let path = self.member_path()?;
        self.context().get(&path, None).await
    }

    /// Creates a resource in the collection.
    async fn create(&self, body: Value) -> ApiResult {
        let path = self.collection_path()?;
        self.context().post(&path, None, Some(body)).await
    }

    /// Updates the single resource.
    async fn update(&self, body: Value) -> ApiResult {
        let path = self.member_path()?;
        self.context().put(&path, None, Some(body)).await
    }

    /// Deletes the single resource.
    async fn delete(&self) -> ApiResult {
        let path = self.member_path()?;
        self.context().delete(&path, None).await
    }
}

/// Returns the uid, or a `MissingUid` error when it is absent or blank.
pub(crate) fn require_uid<'u>(
    resource: &'static str,
    uid: Option<&'u str>,
) -> Result<&'u str, HttpError> {
    uid.filter(|u| !u.trim().is_empty())
        .ok_or_else(|| InvalidHttpRequestError::MissingUid { resource }.into())
}

/// Percent-encodes one path segment.
pub(crate) fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Builds a parameter map from literal pairs.
pub(crate) fn params<const N: usize>(pairs: [(&str, &str); N]) -> Params {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn client() -> ContentstackClient {
        ContentstackClient::new(ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_stack_headers_require_api_key() {
        let client = client();
        let context = StackContext::new(&client, None);
        assert!(matches!(
            context.headers(),
            Err(HttpError::InvalidRequest(
                InvalidHttpRequestError::MissingApiKey
            ))
        ));

        let blank = StackContext::new(&client, Some("  "));
        assert!(blank.api_key().is_none());
    }

    #[test]
    fn test_stack_headers_include_branch_when_set() {
        let client = client();
        let mut context = StackContext::new(&client, Some("blt123"));
        let headers = context.headers().unwrap();
        assert_eq!(headers.get("api_key").map(String::as_str), Some("blt123"));
        assert!(!headers.contains_key("branch"));

        context.set_branch("development");
        let headers = context.headers().unwrap();
        assert_eq!(
            headers.get("branch").map(String::as_str),
            Some("development")
        );
    }

    #[test]
    fn test_require_uid_rejects_blank() {
        assert_eq!(require_uid("Label", Some("blt1")).unwrap(), "blt1");
        assert!(matches!(
            require_uid("Label", Some(" ")),
            Err(HttpError::InvalidRequest(
                InvalidHttpRequestError::MissingUid { resource: "Label" }
            ))
        ));
        assert!(require_uid("Label", None).is_err());
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("blog_post"), "blog_post");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_params_from_pairs() {
        let map = params([("force", "true"), ("include_count", "false")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("force").map(String::as_str), Some("true"));
    }
}
