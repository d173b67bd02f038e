//! Typed client for the todo service.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. A `Transport` executes the round trip in
//! between, and `TodoApi` glues the two into one typed call per operation:
//! `list`, `create`, `update`, `delete`, `toggle` and `health`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Every non-2xx response surfaces as `ApiError::Status` carrying the raw
//!   status and body. Nothing is retried.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.
//! - The blocking `UreqTransport` sits behind the default `ureq` feature.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{CreateTodo, Health, Todo, UpdateTodo};
