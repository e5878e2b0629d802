//! Stack branches.

use crate::clients::{ApiResult, HttpError};
use crate::resources::{params, CrudResource, StackContext};

/// Facade for branches, created by [`Stack::branch`](crate::resources::Stack::branch).
///
/// The API has no branch update endpoint, so [`update`](CrudResource::update)
/// is answered with an error status. [`delete`](CrudResource::delete) always
/// sends `force=true` so branches with content are removed too.
#[derive(Clone, Debug)]
pub struct Branch<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> Branch<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }
}

impl CrudResource for Branch<'_> {
    const NAME: &'static str = "Branch";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok("stacks/branches".to_string())
    }

    async fn delete(&self) -> ApiResult {
        let path = self.member_path()?;
        self.context
            .delete(&path, Some(params([("force", "true")])))
            .await
    }
}
