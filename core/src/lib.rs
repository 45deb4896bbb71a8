//! Client core that keeps a rendered item list in step with a REST collection.
//!
//! # Overview
//! `ItemsClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `ItemListSynchronizer` drives it through a
//! `Transport`, redrawing a `RenderSurface` from scratch after every list,
//! create, or delete call.
//!
//! # Design
//! - `ItemsClient` is stateless; it holds only the collection URL.
//! - Surfaces and transport are injected; nothing is global.
//! - Failures are logged with `tracing` and never reach the caller.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod surface;
pub mod sync;
pub mod transport;
pub mod types;

pub use client::ItemsClient;
pub use config::SyncConfig;
pub use error::RequestFailure;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use surface::{InputSurface, ItemRow, ListView, RemoveControl, RenderSurface, TextField};
pub use sync::{ItemListSynchronizer, Outcome};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{Item, ItemId, NewItem};
