//! Reusable global fields.

use crate::clients::{ApiResult, HttpError};
use crate::resources::{CrudResource, StackContext};

/// Facade for global fields, created by
/// [`Stack::global_fields`](crate::resources::Stack::global_fields).
#[derive(Clone, Debug)]
pub struct GlobalField<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> GlobalField<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }

    /// Exports this global field's schema.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn export(&self) -> ApiResult {
        let path = format!("{}/export", self.member_path()?);
        self.context.get(&path, None).await
    }
}

impl CrudResource for GlobalField<'_> {
    const NAME: &'static str = "Global field";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok("global_fields".to_string())
    }
}
