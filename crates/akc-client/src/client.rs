//! API client facade.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::record::{Page, Record};
use crate::transport::{ApiRequest, HttpTransport, Method, Transport};
use crate::{ClientError, ClientResult};

/// API client for making requests to the authentik server.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a client bound to `base_url`, sending `token` as bearer.
    pub fn new(base_url: &str, token: &str) -> ClientResult<Self> {
        let transport = HttpTransport::new(base_url, token)?;
        debug!(api_root = transport.api_root(), "API client created");
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Creates a client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Returns an endpoint rooted at `base`.
    pub fn endpoint(&self, base: &'static str) -> Endpoint<'_> {
        Endpoint { client: self, base }
    }

    /// Applications, keyed by slug.
    pub fn applications(&self) -> Endpoint<'_> {
        self.endpoint("/core/applications/")
    }

    /// Users, keyed by integer primary key.
    pub fn users(&self) -> Endpoint<'_> {
        self.endpoint("/core/users/")
    }

    /// Groups, keyed by UUID.
    pub fn groups(&self) -> Endpoint<'_> {
        self.endpoint("/core/groups/")
    }

    /// Roles, keyed by UUID.
    pub fn roles(&self) -> Endpoint<'_> {
        self.endpoint("/rbac/roles/")
    }

    /// Tenants, keyed by UUID.
    pub fn tenants(&self) -> Endpoint<'_> {
        self.endpoint("/core/tenants/")
    }

    /// All providers, keyed by integer primary key.
    pub fn providers(&self) -> Endpoint<'_> {
        self.endpoint("/providers/all/")
    }

    /// OAuth2 providers.
    pub fn oauth2_providers(&self) -> Endpoint<'_> {
        self.endpoint("/providers/oauth2/")
    }

    /// Proxy providers.
    pub fn proxy_providers(&self) -> Endpoint<'_> {
        self.endpoint("/providers/proxy/")
    }

    /// Flows, keyed by slug.
    pub fn flows(&self) -> Endpoint<'_> {
        self.endpoint("/flows/instances/")
    }

    /// All policies, keyed by UUID.
    pub fn policies(&self) -> Endpoint<'_> {
        self.endpoint("/policies/all/")
    }

    /// Policy bindings.
    pub fn policy_bindings(&self) -> Endpoint<'_> {
        self.endpoint("/policies/bindings/")
    }

    /// All stages, keyed by UUID.
    pub fn stages(&self) -> Endpoint<'_> {
        self.endpoint("/stages/all/")
    }

    /// All sources, keyed by slug.
    pub fn sources(&self) -> Endpoint<'_> {
        self.endpoint("/sources/all/")
    }

    /// Outposts, keyed by UUID.
    pub fn outposts(&self) -> Endpoint<'_> {
        self.endpoint("/outposts/instances/")
    }

    /// Events, keyed by UUID.
    pub fn events(&self) -> Endpoint<'_> {
        self.endpoint("/events/events/")
    }

    /// All property mappings, keyed by UUID.
    pub fn property_mappings(&self) -> Endpoint<'_> {
        self.endpoint("/propertymappings/all/")
    }

    /// Gets the server version record.
    pub async fn version(&self) -> ClientResult<Record> {
        self.send_json(ApiRequest::new(Method::Get, "/admin/version/"))
            .await
    }

    /// Sends a request and returns the body of a 2xx response.
    async fn send(&self, request: ApiRequest) -> ClientResult<String> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await?;
        debug!(%method, %path, status = response.status, "API response");

        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ClientError::Api {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// Sends a request and decodes the JSON body.
    async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// One resource collection of the API.
#[derive(Clone, Copy)]
pub struct Endpoint<'a> {
    client: &'a ApiClient,
    base: &'static str,
}

impl Endpoint<'_> {
    /// Lists the first page.
    pub async fn list(&self) -> ClientResult<Page> {
        self.list_filtered(&[]).await
    }

    /// Lists the first page matching field filters.
    pub async fn list_filtered(&self, filters: &[(&str, &str)]) -> ClientResult<Page> {
        let request = ApiRequest::new(Method::Get, self.base).with_query(filters);
        self.client.send_json(request).await
    }

    /// Retrieves one record.
    pub async fn retrieve(&self, id: &str) -> ClientResult<Record> {
        self.client
            .send_json(ApiRequest::new(Method::Get, self.item_path(id)))
            .await
    }

    /// Creates a record and returns it.
    pub async fn create<B: Serialize>(&self, body: &B) -> ClientResult<Record> {
        let request =
            ApiRequest::new(Method::Post, self.base).with_body(serde_json::to_value(body)?);
        self.client.send_json(request).await
    }

    /// Applies a partial update and returns the updated record.
    pub async fn partial_update<B: Serialize>(&self, id: &str, body: &B) -> ClientResult<Record> {
        let request = ApiRequest::new(Method::Patch, self.item_path(id))
            .with_body(serde_json::to_value(body)?);
        self.client.send_json(request).await
    }

    /// Deletes a record.
    pub async fn destroy(&self, id: &str) -> ClientResult<()> {
        self.client
            .send(ApiRequest::new(Method::Delete, self.item_path(id)))
            .await
            .map(|_| ())
    }

    /// Lists a paginated nested collection (`{id}/{action}/`).
    pub async fn nested_list(&self, id: &str, action: &str) -> ClientResult<Page> {
        self.client
            .send_json(ApiRequest::new(Method::Get, self.action_path(id, action)))
            .await
    }

    /// Lists a bare-array item action (`{id}/{action}/`).
    pub async fn item_action_list(&self, id: &str, action: &str) -> ClientResult<Vec<Record>> {
        self.client
            .send_json(ApiRequest::new(Method::Get, self.action_path(id, action)))
            .await
    }

    /// Lists a bare-array collection action (`{action}/`).
    pub async fn collection_action_list(&self, action: &str) -> ClientResult<Vec<Record>> {
        self.client
            .send_json(ApiRequest::new(Method::Get, format!("{}{}/", self.base, action)))
            .await
    }

    /// Retrieves a raw text payload from an item action.
    pub async fn retrieve_text(&self, id: &str, action: &str) -> ClientResult<String> {
        self.client
            .send(ApiRequest::new(Method::Get, self.action_path(id, action)))
            .await
    }

    /// Posts to an item action, discarding the response body.
    pub async fn item_action_post<B: Serialize>(
        &self,
        id: &str,
        action: &str,
        body: &B,
    ) -> ClientResult<()> {
        let request = ApiRequest::new(Method::Post, self.action_path(id, action))
            .with_body(serde_json::to_value(body)?);
        self.client.send(request).await.map(|_| ())
    }

    /// Posts to a collection action, discarding the response body.
    pub async fn collection_action_post<B: Serialize>(
        &self,
        action: &str,
        body: &B,
    ) -> ClientResult<()> {
        let request = ApiRequest::new(Method::Post, format!("{}{}/", self.base, action))
            .with_body(serde_json::to_value(body)?);
        self.client.send(request).await.map(|_| ())
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}{}/", self.base, urlencoding::encode(id))
    }

    fn action_path(&self, id: &str, action: &str) -> String {
        format!("{}{}/{}/", self.base, urlencoding::encode(id), action)
    }
}
