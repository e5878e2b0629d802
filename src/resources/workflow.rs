//! Workflows and publishing rules.

use crate::clients::{ApiResult, HttpError};
use crate::resources::{CrudResource, Params, StackContext};

const WORKFLOWS_PATH: &str = "workflows";

/// Facade for workflows, created by [`Stack::workflow`](crate::resources::Stack::workflow).
#[derive(Clone, Debug)]
pub struct Workflow<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> Workflow<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }

    /// Enables this workflow.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn enable(&self) -> ApiResult {
        let path = format!("{}/enable", self.member_path()?);
        self.context.get(&path, None).await
    }

    /// Disables this workflow.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn disable(&self) -> ApiResult {
        let path = format!("{}/disable", self.member_path()?);
        self.context.get(&path, None).await
    }

    /// Lists the publishing rules of the stack.
    ///
    /// # Errors
    ///
    /// See [`StackContext::get`].
    pub async fn publish_rules(&self, params: Option<Params>) -> ApiResult {
        self.context
            .get("workflows/publishing_rules", params)
            .await
    }
}

impl CrudResource for Workflow<'_> {
    const NAME: &'static str = "Workflow";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok(WORKFLOWS_PATH.to_string())
    }
}
