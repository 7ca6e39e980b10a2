use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use crate::{client::JulesClient, types, Result};

/// A single page's worth of fetch.
pub type PageFuture<R> = Pin<Box<dyn Future<Output = Result<R>> + Send>>;

/// One page of a listing call.
pub trait PaginatedResponse {
    type Item;
    fn items(self) -> Vec<Self::Item>;
    fn next_page_token(&self) -> Option<&str>;
}

impl PaginatedResponse for types::ListSourcesResponse {
    type Item = types::Source;
    fn items(self) -> Vec<Self::Item> {
        self.sources
    }
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl PaginatedResponse for types::ListSessionsResponse {
    type Item = types::Session;
    fn items(self) -> Vec<Self::Item> {
        self.sessions
    }
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl PaginatedResponse for types::ListActivitiesResponse {
    type Item = types::Activity;
    fn items(self) -> Vec<Self::Item> {
        self.activities
    }
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Where the paginator stands in the page sequence.
enum PageState {
    /// First page not yet requested.
    Start,
    /// The server handed back a continuation token.
    Next(String),
    /// A page arrived without a token; that page was the last one.
    Done,
}

/// A [`Stream`] of items that fetches page after page until a response
/// carries no continuation token. The first error ends the stream.
pub struct Paginator<R, F>
where
    R: PaginatedResponse,
    F: Fn(Option<String>) -> PageFuture<R>,
{
    fetch: F,
    buffer: VecDeque<R::Item>,
    state: PageState,
    in_flight: Option<PageFuture<R>>,
}

impl<R, F> Paginator<R, F>
where
    R: PaginatedResponse,
    F: Fn(Option<String>) -> PageFuture<R>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            buffer: VecDeque::new(),
            state: PageState::Start,
            in_flight: None,
        }
    }
}

impl<R, F> Stream for Paginator<R, F>
where
    R: PaginatedResponse,
    F: Fn(Option<String>) -> PageFuture<R> + Unpin,
    R::Item: Unpin,
{
    type Item = Result<R::Item>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(item) = this.buffer.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            let token = match &this.state {
                PageState::Start => None,
                PageState::Next(token) => Some(token.clone()),
                PageState::Done => return Poll::Ready(None),
            };

            // Keep the in-flight request across polls; recreating it per
            // wakeup would restart the fetch and never complete.
            let fetch = &this.fetch;
            let fut = this.in_flight.get_or_insert_with(|| fetch(token));

            match fut.as_mut().poll(cx) {
                Poll::Ready(Ok(response)) => {
                    this.in_flight = None;
                    this.state = match response.next_page_token() {
                        Some(token) => PageState::Next(token.to_string()),
                        None => PageState::Done,
                    };
                    this.buffer = response.items().into();
                }
                Poll::Ready(Err(err)) => {
                    this.in_flight = None;
                    this.state = PageState::Done;
                    return Poll::Ready(Some(Err(err)));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl JulesClient {
    /// Stream every source, fetching pages as needed.
    pub fn list_sources_stream(
        &self,
    ) -> Paginator<types::ListSourcesResponse, impl Fn(Option<String>) -> PageFuture<types::ListSourcesResponse>>
    {
        let client = self.clone();
        Paginator::new(
            move |token| -> PageFuture<types::ListSourcesResponse> {
                let client = client.clone();
                Box::pin(async move { client.list_sources(token.as_deref()).await })
            },
        )
    }

    /// Stream every session, fetching `page_size` at a time.
    pub fn list_sessions_stream(
        &self,
        page_size: Option<u32>,
    ) -> Paginator<types::ListSessionsResponse, impl Fn(Option<String>) -> PageFuture<types::ListSessionsResponse>>
    {
        let client = self.clone();
        Paginator::new(
            move |token| -> PageFuture<types::ListSessionsResponse> {
                let client = client.clone();
                Box::pin(async move { client.list_sessions(page_size, token.as_deref()).await })
            },
        )
    }

    /// Stream every activity of a session, fetching `page_size` at a time.
    pub fn list_activities_stream(
        &self,
        session_id: &str,
        page_size: Option<u32>,
    ) -> Paginator<types::ListActivitiesResponse, impl Fn(Option<String>) -> PageFuture<types::ListActivitiesResponse>>
    {
        let client = self.clone();
        let session_id = session_id.to_string();
        Paginator::new(
            move |token| -> PageFuture<types::ListActivitiesResponse> {
                let client = client.clone();
                let session_id = session_id.clone();
                Box::pin(async move {
                    client
                        .list_activities(&session_id, page_size, token.as_deref())
                        .await
                })
            },
        )
    }
}
