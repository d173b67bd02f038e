//! One call, one round trip.
//!
//! `TodoApi` pairs a `TodoClient` with a `Transport` so callers get a typed
//! function per server operation. There is no retry and no caching: whatever
//! the transport or the server reports is returned as is.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{CreateTodo, Health, Todo, UpdateTodo};

#[derive(Clone)]
pub struct TodoApi<T> {
    client: TodoClient,
    transport: T,
}

#[cfg(feature = "ureq")]
impl TodoApi<crate::transport::UreqTransport> {
    /// Client for `base_url` using the blocking ureq transport.
    pub fn connect(base_url: &str) -> Self {
        Self::new(TodoClient::new(base_url), crate::transport::UreqTransport::new())
    }
}

impl<T: Transport> TodoApi<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let req = self.client.build_list_todos();
        self.client.parse_list_todos(self.send(req)?)
    }

    pub fn create(&self, title: &str) -> Result<Todo, ApiError> {
        let req = self.client.build_create_todo(&CreateTodo::new(title))?;
        self.client.parse_create_todo(self.send(req)?)
    }

    pub fn update(&self, id: i64, updates: &UpdateTodo) -> Result<Todo, ApiError> {
        let req = self.client.build_update_todo(id, updates)?;
        self.client.parse_update_todo(self.send(req)?)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        let req = self.client.build_delete_todo(id);
        self.client.parse_delete_todo(self.send(req)?)
    }

    pub fn toggle(&self, id: i64, completed: bool) -> Result<Todo, ApiError> {
        self.update(id, &UpdateTodo::completed(completed))
    }

    pub fn health(&self) -> Result<Health, ApiError> {
        let req = self.client.build_health();
        self.client.parse_health(self.send(req)?)
    }

    fn send(&self, req: crate::http::HttpRequest) -> Result<crate::http::HttpResponse, ApiError> {
        let method = req.method.as_str();
        let path = req.path.clone();
        let response = self.transport.execute(req)?;
        tracing::debug!(method, %path, status = response.status, "todo api round trip");
        Ok(response)
    }
}
