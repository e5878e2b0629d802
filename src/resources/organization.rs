//! Organizations the user belongs to.

use serde_json::Value;

use crate::client::ContentstackClient;
use crate::clients::ApiResult;
use crate::resources::{encode_segment, require_uid, Params};

const ORGANIZATIONS_PATH: &str = "organizations";

/// Facade for organizations, created by [`ContentstackClient::organizations`].
///
/// [`find`](Self::find) works without a uid; every other operation targets
/// one organization and fails with `MissingUid` when none was given.
#[derive(Clone, Debug)]
pub struct Organization<'a> {
    client: &'a ContentstackClient,
    uid: Option<String>,
}

impl<'a> Organization<'a> {
    pub(crate) fn new(client: &'a ContentstackClient, uid: Option<&str>) -> Self {
        Self {
            client,
            uid: uid.map(String::from),
        }
    }

    /// Returns the organization uid.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn path(&self, suffix: &str) -> Result<String, crate::clients::HttpError> {
        let uid = require_uid("Organization", self.uid())?;
        let base = format!("{ORGANIZATIONS_PATH}/{}", encode_segment(uid));
        Ok(if suffix.is_empty() {
            base
        } else {
            format!("{base}/{suffix}")
        })
    }

    /// Lists all organizations of the user.
    ///
    /// # Errors
    ///
    /// See [`ContentstackClient::get`].
    pub async fn find(&self, params: Option<Params>) -> ApiResult {
        self.client.get(ORGANIZATIONS_PATH, params, None).await
    }

    /// Fetches this organization.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn fetch(&self, params: Option<Params>) -> ApiResult {
        let path = self.path("")?;
        self.client.get(&path, params, None).await
    }

    /// Lists the roles defined in this organization.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn roles(&self, params: Option<Params>) -> ApiResult {
        let path = self.path("roles")?;
        self.client.get(&path, params, None).await
    }

    /// Invites users to the organization.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn add_users(&self, body: Value) -> ApiResult {
        let path = self.path("share")?;
        self.client.post(&path, None, Some(body), None).await
    }

    /// Transfers ownership of the organization to another user.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn transfer_ownership(&self, body: Value) -> ApiResult {
        let path = self.path("transfer-ownership")?;
        self.client.post(&path, None, Some(body), None).await
    }

    /// Lists the stacks in this organization.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn stacks(&self, params: Option<Params>) -> ApiResult {
        let path = self.path("stacks")?;
        self.client.get(&path, params, None).await
    }

    /// Fetches the organization's audit log.
    ///
    /// # Errors
    ///
    /// Fails without a request if no uid was given.
    pub async fn logs(&self, params: Option<Params>) -> ApiResult {
        let path = self.path("logs")?;
        self.client.get(&path, params, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, InvalidHttpRequestError};
    use crate::config::ClientConfig;

    #[test]
    fn test_paths_use_encoded_uid() {
        let client = ContentstackClient::new(ClientConfig::default()).unwrap();
        let org = client.organizations(Some("blt org"));
        assert_eq!(org.path("").unwrap(), "organizations/blt%20org");
        assert_eq!(org.path("roles").unwrap(), "organizations/blt%20org/roles");
    }

    #[tokio::test]
    async fn test_single_organization_calls_need_uid() {
        let client = ContentstackClient::new(ClientConfig::default()).unwrap();
        let result = client.organizations(None).roles(None).await;
        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(
                InvalidHttpRequestError::MissingUid {
                    resource: "Organization"
                }
            ))
        ));
    }
}
