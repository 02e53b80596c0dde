//! # akc-client
//!
//! Facade over the authentik admin REST API.
//!
//! This crate provides:
//! - A [`Transport`] seam with a reqwest implementation
//! - [`ApiClient`] with one [`Endpoint`] per resource collection
//! - Opaque [`Record`]s and first-page [`Page`]s
//! - Typed create requests and tri-state [`Patch`] update requests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod models;
pub mod patch;
pub mod record;
pub mod transport;

pub use client::{ApiClient, Endpoint};
pub use error::{ClientError, ClientResult};
pub use patch::{PartialUpdate, Patch};
pub use record::{Page, Record, RecordExt};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
