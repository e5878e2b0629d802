//! Content types.

use crate::clients::{ApiResult, HttpError};
use crate::resources::{CrudResource, Params, StackContext};

/// Facade for content types, created by
/// [`Stack::content_types`](crate::resources::Stack::content_types).
///
/// # Example
///
/// ```rust,ignore
/// use contentstack_management::CrudResource;
/// use serde_json::json;
///
/// let stack = client.stack(Some("blt_api_key"));
/// stack
///     .content_types(None)
///     .create(json!({"content_type": {"title": "Blog", "uid": "blog"}}))
///     .await?;
/// let refs = stack.content_types(Some("blog")).references(None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ContentType<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> ContentType<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }

    /// Lists the content types that reference this one.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn references(&self, params: Option<Params>) -> ApiResult {
        let path = format!("{}/references", self.member_path()?);
        self.context.get(&path, params).await
    }

    /// Exports this content type's schema.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn export(&self, params: Option<Params>) -> ApiResult {
        let path = format!("{}/export", self.member_path()?);
        self.context.get(&path, params).await
    }
}

impl CrudResource for ContentType<'_> {
    const NAME: &'static str = "Content type";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok("content_types".to_string())
    }
}
