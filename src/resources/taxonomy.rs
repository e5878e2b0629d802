//! Taxonomies and their terms.

use serde_json::Value;

use crate::clients::{ApiResult, HttpError};
use crate::resources::{encode_segment, params, require_uid, CrudResource, Params, StackContext};

const TAXONOMIES_PATH: &str = "taxonomies";

/// Facade for taxonomies, created by [`Stack::taxonomy`](crate::resources::Stack::taxonomy).
#[derive(Clone, Debug)]
pub struct Taxonomy<'a> {
    context: StackContext<'a>,
    uid: Option<String>,
}

impl<'a> Taxonomy<'a> {
    pub(crate) fn new(context: StackContext<'a>, uid: Option<&str>) -> Self {
        Self {
            context,
            uid: uid.map(String::from),
        }
    }

    /// Terms of this taxonomy.
    ///
    /// [`Term::search`] works across all taxonomies; other term operations
    /// need this taxonomy's uid.
    #[must_use]
    pub fn terms(&self, uid: Option<&str>) -> Term<'a> {
        Term {
            context: self.context.clone(),
            taxonomy_uid: self.uid.clone(),
            uid: uid.map(String::from),
        }
    }
}

impl CrudResource for Taxonomy<'_> {
    const NAME: &'static str = "Taxonomy";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        Ok(TAXONOMIES_PATH.to_string())
    }
}

/// Facade for the terms of one taxonomy, created by [`Taxonomy::terms`].
#[derive(Clone, Debug)]
pub struct Term<'a> {
    context: StackContext<'a>,
    taxonomy_uid: Option<String>,
    uid: Option<String>,
}

impl Term<'_> {
    /// Searches terms in every taxonomy of the stack.
    ///
    /// # Errors
    ///
    /// See [`StackContext::get`].
    pub async fn search(&self, typeahead: &str) -> ApiResult {
        let query = params([("typeahead", typeahead)]);
        self.context.get("taxonomies/$all/terms", Some(query)).await
    }

    /// Lists the ancestors of this term.
    ///
    /// # Errors
    ///
    /// Fails without a request if the taxonomy or term uid is missing.
    pub async fn ancestors(&self, params: Option<Params>) -> ApiResult {
        let path = format!("{}/ancestors", self.member_path()?);
        self.context.get(&path, params).await
    }

    /// Lists the descendants of this term.
    ///
    /// # Errors
    ///
    /// Fails without a request if the taxonomy or term uid is missing.
    pub async fn descendants(&self, params: Option<Params>) -> ApiResult {
        let path = format!("{}/descendants", self.member_path()?);
        self.context.get(&path, params).await
    }

    /// Moves this term under another parent or to another position.
    ///
    /// # Errors
    ///
    /// Fails without a request if the taxonomy or term uid is missing.
    pub async fn move_term(&self, body: Value, params: Option<Params>) -> ApiResult {
        let path = format!("{}/move", self.member_path()?);
        self.context.put(&path, params, Some(body)).await
    }
}

impl CrudResource for Term<'_> {
    const NAME: &'static str = "Term";

    fn context(&self) -> &StackContext<'_> {
        &self.context
    }

    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection_path(&self) -> Result<String, HttpError> {
        let taxonomy = require_uid("Taxonomy", self.taxonomy_uid.as_deref())?;
        Ok(format!(
            "{TAXONOMIES_PATH}/{}/terms",
            encode_segment(taxonomy)
        ))
    }
}
