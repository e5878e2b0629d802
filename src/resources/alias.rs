//! Branch aliases.

use serde_json::Value;

use crate::clients::{ApiResult, HttpError};
use crate::resources::{CrudResource, StackContext};

/// Facade for branch aliases, created by [`Stack::alias`](crate::resources::Stack::alias).
///
/// Aliases are created by assigning them to a branch.
#[derive(Clone, Debug)]
pub struct Alias<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> Alias<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }

    /// Points this alias at a branch, creating it if needed.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn assign(&self, body: Value) -> ApiResult {
        let path = self.member_path()?;
        self.context.put(&path, None, Some(body)).await
    }
}

impl CrudResource for Alias<'_> {
    const NAME: &'static str = "Alias";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok("stacks/branch_aliases".to_string())
    }
}
