//! Metadata attached to entries and assets.

use serde_json::Value;

use crate::clients::{ApiResult, HttpError};
use crate::resources::{CrudResource, StackContext};

/// Facade for metadata, created by [`Stack::metadata`](crate::resources::Stack::metadata).
#[derive(Clone, Debug)]
pub struct Metadata<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> Metadata<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }

    /// Publishes this metadata to the environments in `body`.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn publish(&self, body: Value) -> ApiResult {
        let path = format!("{}/publish", self.member_path()?);
        self.context.post(&path, None, Some(body)).await
    }

    /// Unpublishes this metadata from the environments in `body`.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn unpublish(&self, body: Value) -> ApiResult {
        let path = format!("{}/unpublish", self.member_path()?);
        self.context.post(&path, None, Some(body)).await
    }
}

impl CrudResource for Metadata<'_> {
    const NAME: &'static str = "Metadata";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok("metadata".to_string())
    }
}
