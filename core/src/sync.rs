//! Keeps a rendered item list consistent with the remote collection.
//!
//! # Design
//! Every operation is one request followed, on success, by a full rebuild
//! of the rendering surface from a fresh `GET`. Nothing is diffed or patched
//! locally. Failures are logged and swallowed; the surface and the input
//! field keep whatever they held before the call.
//!
//! Overlapping calls are not serialized. Each refresh takes a ticket when it
//! is issued and only renders if no newer refresh has rendered already, so a
//! slow response can never overwrite a fresher list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error};

use crate::client::ItemsClient;
use crate::config::SyncConfig;
use crate::error::RequestFailure;
use crate::surface::{InputSurface, ItemRow, RemoveControl, RenderSurface};
use crate::transport::Transport;
use crate::types::{Item, ItemId, NewItem};

/// What an operation ended up doing to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The surface was rebuilt with `rows` rows.
    Rendered { rows: usize },
    /// Blank input; nothing was sent.
    Ignored,
    /// The list arrived after a newer one had already been rendered.
    Superseded,
    /// A request failed and was logged. The surface is unchanged.
    Failed,
}

struct View<R> {
    surface: R,
    rendered: u64,
}

pub struct ItemListSynchronizer<T, R, I> {
    client: ItemsClient,
    transport: T,
    view: Mutex<View<R>>,
    input: Mutex<I>,
    issued: AtomicU64,
}

impl<T, R, I> ItemListSynchronizer<T, R, I>
where
    T: Transport,
    R: RenderSurface,
    I: InputSurface,
{
    pub fn new(config: &SyncConfig, transport: T, surface: R, input: I) -> Self {
        Self {
            client: ItemsClient::new(&config.collection_url),
            transport,
            view: Mutex::new(View {
                surface,
                rendered: 0,
            }),
            input: Mutex::new(input),
            issued: AtomicU64::new(0),
        }
    }

    pub fn with_surface<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&R) -> O,
    {
        f(&lock(&self.view).surface)
    }

    pub fn with_input<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&mut I) -> O,
    {
        f(&mut lock(&self.input))
    }

    /// Re-read the whole collection and redraw it in server order.
    pub async fn refresh(&self) -> Outcome {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let items = match self.fetch_items().await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "error fetching items");
                return Outcome::Failed;
            }
        };

        let mut view = lock(&self.view);
        if ticket < view.rendered {
            debug!(ticket, rendered = view.rendered, "discarding superseded item list");
            return Outcome::Superseded;
        }
        view.rendered = ticket;
        view.surface.clear();
        let rows = items.len();
        for item in items {
            view.surface.append(ItemRow::from(item));
        }
        Outcome::Rendered { rows }
    }

    /// Create an item named `name` (trimmed), then refresh.
    ///
    /// Blank names are ignored without a request. The input field is only
    /// cleared once the create succeeded. Returns the refresh's outcome.
    pub async fn add(&self, name: &str) -> Outcome {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring blank item name");
            return Outcome::Ignored;
        }
        if let Err(e) = self.create_item(name).await {
            error!(error = %e, name, "error adding item");
            return Outcome::Failed;
        }
        lock(&self.input).clear();
        self.refresh().await
    }

    /// Form submit: add whatever is in the input field.
    pub async fn submit(&self) -> Outcome {
        let value = lock(&self.input).value();
        self.add(&value).await
    }

    /// Delete the item with `id`, then refresh.
    pub async fn remove(&self, id: &ItemId) -> Outcome {
        if let Err(e) = self.delete_item(id).await {
            error!(error = %e, %id, "error deleting item");
            return Outcome::Failed;
        }
        self.refresh().await
    }

    /// A row's remove control was clicked.
    pub async fn activate(&self, control: &RemoveControl) -> Outcome {
        self.remove(control.id()).await
    }

    async fn fetch_items(&self) -> Result<Vec<Item>, RequestFailure> {
        let response = self.transport.execute(self.client.build_list_items()).await?;
        self.client.parse_list_items(response)
    }

    async fn create_item(&self, name: &str) -> Result<(), RequestFailure> {
        let request = self.client.build_create_item(&NewItem::new(name))?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_item(response)
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), RequestFailure> {
        let response = self.transport.execute(self.client.build_delete_item(id)).await?;
        self.client.parse_delete_item(response)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
