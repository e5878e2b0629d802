//! Labels for organizing entries.

use crate::clients::HttpError;
use crate::resources::{CrudResource, StackContext};

/// Facade for labels, created by [`Stack::label`](crate::resources::Stack::label).
#[derive(Clone, Debug)]
pub struct Label<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> Label<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }
}

impl CrudResource for Label<'_> {
    const NAME: &'static str = "Label";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok("labels".to_string())
    }
}
