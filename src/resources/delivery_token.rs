//! Delivery tokens for the Content Delivery API.

use crate::clients::HttpError;
use crate::resources::{CrudResource, StackContext};

/// Facade for delivery tokens. All operations come from [`CrudResource`].
#[derive(Clone, Debug)]
pub struct DeliveryToken<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> DeliveryToken<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }
}

impl CrudResource for DeliveryToken<'_> {
    const NAME: &'static str = "Delivery token";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok("stacks/delivery_tokens".to_string())
    }
}
