//! Lazy iteration over paginated list endpoints.
//!
//! - [`Paginator`]: typed instances, capped by `max_pages`
//! - [`FetchIter`]: raw entries, follows the server's page numbers until the
//!   last page
//!
//! Both perform one GET per page and only fetch the next page once every
//! entry of the current one has been consumed. Dropping the iterator is the
//! only way to cancel.

use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::rest::endpoint::{QueryParams, DEFAULT_PER_PAGE};
use crate::rest::{Page, Resource, ResourceError};

/// Iterator over the instances of a collection, one page at a time.
///
/// Yields `Result<R, ResourceError>`; after the first error it yields
/// `None`. Iteration stops:
///
/// - before fetching a page beyond a positive `max_pages`, or
/// - right after the page whose number reaches the server's page count.
///
/// `max_pages <= 0` means unbounded.
///
/// Calling the collection method again starts a fresh iteration at page 1.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Paginator<'a, R> {
    client: &'a RestClient,
    api_path: &'static str,
    extra_params: QueryParams,
    per_page: u32,
    max_pages: i32,
    current_page: u32,
    buffer: std::vec::IntoIter<Map<String, Value>>,
    done: bool,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> Paginator<'a, R> {
    pub(crate) fn new(
        client: &'a RestClient,
        api_path: &'static str,
        extra_params: QueryParams,
        per_page: u32,
        max_pages: i32,
    ) -> Self {
        Self {
            client,
            api_path,
            extra_params,
            per_page,
            max_pages,
            current_page: 1,
            buffer: Vec::new().into_iter(),
            done: false,
            _resource: PhantomData,
        }
    }

    /// Returns the number of the next page to fetch.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    fn page_cap_reached(&self) -> bool {
        self.max_pages > 0 && i64::from(self.current_page) > i64::from(self.max_pages)
    }

    /// Fetches the next page into the buffer, or marks the iterator done.
    fn fetch_next_page(&mut self) -> Result<(), ResourceError> {
        if self.page_cap_reached() {
            self.done = true;
            return Ok(());
        }

        let url = self
            .client
            .endpoint(self.api_path)
            .extra_params(self.extra_params.iter().cloned())
            .page(self.current_page)
            .per_page(self.per_page)
            .build();

        tracing::debug!(
            resource = R::NAME,
            page = self.current_page,
            per_page = self.per_page,
            "fetching page"
        );

        let Some(body) = self.client.http().get(url)? else {
            self.done = true;
            return Ok(());
        };

        let page: Page<R> = Page::from_value(body, R::NAME)?;
        if page.is_last() {
            self.done = true;
        }
        self.current_page += 1;
        self.buffer = page.into_entries().into_iter();
        Ok(())
    }
}

impl<R: Resource> Iterator for Paginator<'_, R> {
    type Item = Result<R, ResourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fields) = self.buffer.next() {
                return Some(Ok(R::from_fields(fields)));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.fetch_next_page() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

impl<R: Resource> std::iter::FusedIterator for Paginator<'_, R> {}

/// Iterator over the raw entries of any list endpoint.
///
/// There is no page cap: the page ceiling is unknown until the first
/// response arrives, and afterwards follows the server's `pages`. The next
/// page requested is always the server-reported `page + 1`.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FetchIter<'a> {
    client: &'a RestClient,
    api_path: String,
    extra_params: QueryParams,
    page: u32,
    pages: Option<u32>,
    buffer: std::vec::IntoIter<Map<String, Value>>,
    done: bool,
}

impl<'a> FetchIter<'a> {
    pub(crate) fn new(client: &'a RestClient, api_path: String, extra_params: QueryParams) -> Self {
        Self {
            client,
            api_path,
            extra_params,
            page: 1,
            pages: None,
            buffer: Vec::new().into_iter(),
            done: false,
        }
    }

    fn fetch_next_page(&mut self) -> Result<(), ResourceError> {
        if self.pages.is_some_and(|pages| self.page > pages) {
            self.done = true;
            return Ok(());
        }

        let url = self
            .client
            .endpoint(self.api_path.as_str())
            .extra_params(self.extra_params.iter().cloned())
            .page(self.page)
            .per_page(DEFAULT_PER_PAGE)
            .build();

        tracing::debug!(api_path = %self.api_path, page = self.page, "fetching raw page");

        let Some(body) = self.client.http().get(url)? else {
            self.done = true;
            return Ok(());
        };

        let page: Page<()> = Page::from_value(body, &self.api_path)?;
        self.pages = Some(page.pages());
        self.page = page.number().saturating_add(1);
        self.buffer = page.into_entries().into_iter();
        Ok(())
    }
}

impl Iterator for FetchIter<'_> {
    type Item = Result<Map<String, Value>, ResourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.buffer.next() {
                return Some(Ok(entry));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.fetch_next_page() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

impl std::iter::FusedIterator for FetchIter<'_> {}
