use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use scrollwindow::WindowResult;

use crate::FetchFuture;

/// One materialized row, ready for the renderer.
#[derive(Debug)]
pub struct VisibleItem<'a, T> {
    pub index: usize,
    pub key: String,
    pub item: &'a T,
}

/// What a scroll event produced.
#[must_use = "a returned fetch must be driven to completion or cancelled"]
pub struct ScrollOutcome<T> {
    pub window: WindowResult,
    /// `true` when this event crossed into the bottom of the list.
    pub reached_end: bool,
    /// The continuation fetch started by this event, if any.
    ///
    /// Await it on your executor and pass the result to
    /// [`crate::ListController::complete_fetch`], or call
    /// [`crate::ListController::cancel_fetch`] with its ticket if you drop it.
    pub fetch: Option<PendingFetch<T>>,
}

impl<T> fmt::Debug for ScrollOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollOutcome")
            .field("window", &self.window)
            .field("reached_end", &self.reached_end)
            .field("fetch", &self.fetch)
            .finish()
    }
}

/// Identifies the item collection a fetch was started for.
///
/// [`crate::ListController::replace_items`] invalidates every outstanding ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub(crate) generation: u64,
}

/// A continuation fetch handed out by a scroll event.
///
/// Resolves to a [`FetchResult`] carrying the fetched items and this fetch's ticket.
#[must_use = "a fetch must be driven to completion or cancelled"]
pub struct PendingFetch<T> {
    ticket: FetchTicket,
    future: FetchFuture<T>,
}

impl<T> PendingFetch<T> {
    pub(crate) fn new(ticket: FetchTicket, future: FetchFuture<T>) -> Self {
        Self { ticket, future }
    }

    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }
}

impl<T> Future for PendingFetch<T> {
    type Output = FetchResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let ticket = this.ticket;
        this.future
            .as_mut()
            .poll(cx)
            .map(|items| FetchResult { ticket, items })
    }
}

impl<T> fmt::Debug for PendingFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFetch")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

/// The output of a [`PendingFetch`].
#[derive(Debug)]
pub struct FetchResult<T> {
    pub ticket: FetchTicket,
    /// The items to append, or `None` when there was nothing more to load.
    pub items: Option<Vec<T>>,
}
