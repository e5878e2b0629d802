//! Publishing environments.

use crate::clients::HttpError;
use crate::resources::{CrudResource, StackContext};

/// Facade for environments, created by
/// [`Stack::environments`](crate::resources::Stack::environments).
///
/// Environments are addressed by name rather than uid.
#[derive(Clone, Debug)]
pub struct Environment<'a> {
    context: StackContext<'a>,
    name: Option<String>,
}

impl<'a> Environment<'a> {
    pub(crate) fn new(context: StackContext<'a>, name: Option<&str>) -> Self {
        Self {
            context,
            name: name.map(String::from),
        }
    }
}

impl CrudResource for Environment<'_> {
    const NAME: &'static str = "Environment";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok("environments".to_string())
    }
}
