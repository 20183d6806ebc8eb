//! Core synchronization loops shared by the exporter and the importer.
//!
//! The pagination and resolution loops are generic over the remote calls
//! behind the [`FetchPage`] and [`SearchTracks`] seams, so their
//! termination, ordering, and failure-isolation behavior can be exercised
//! without a network.

use std::time::Duration;

use tokio::time::sleep;

use crate::{
    types::TrackRecord,
    utils::{self, Resolution},
    warning,
};

/// Fetches one page of an offset-indexed remote collection.
#[allow(async_fn_in_trait)]
pub trait FetchPage {
    type Item;
    type Error;

    async fn fetch(&mut self, offset: u64, limit: u32) -> Result<Vec<Self::Item>, Self::Error>;
}

/// Resolves a search query to the best-match track URI, if any.
#[allow(async_fn_in_trait)]
pub trait SearchTracks {
    type Error: std::fmt::Display;

    async fn search(&mut self, query: &str) -> Result<Option<String>, Self::Error>;
}

/// Drains an offset-paginated collection into an ordered sequence.
///
/// An empty page is the sole termination condition; any total the service
/// reports up front may drift while paginating, so it is never consulted.
/// The offset advances unconditionally by `limit` after every non-empty
/// page. `on_page` receives the running item count after each page, for
/// progress reporting.
///
/// For `N` items and page size `L` this issues exactly `ceil(N/L) + 1`
/// fetches, the final one returning the empty page.
pub async fn collect_paged<F: FetchPage>(
    fetcher: &mut F,
    limit: u32,
    mut on_page: impl FnMut(usize),
) -> Result<Vec<F::Item>, F::Error> {
    let mut items = Vec::new();
    let mut offset: u64 = 0;

    loop {
        let page = fetcher.fetch(offset, limit).await?;
        if page.is_empty() {
            return Ok(items);
        }

        items.extend(page);
        offset += u64::from(limit);
        on_page(items.len());
    }
}

/// Resolves snapshot rows to track URIs in file order.
///
/// Rows that already carry a URI skip the search entirely and pay no
/// delay. A search failure degrades that single row to the unresolved list
/// and the pass continues; nothing here aborts the run. `delay` is the
/// fixed pause applied after each search call, `on_row` receives the number
/// of rows handled so far.
pub async fn resolve_records<S: SearchTracks>(
    searcher: &mut S,
    records: &[TrackRecord],
    delay: Duration,
    mut on_row: impl FnMut(usize),
) -> (Vec<String>, Vec<TrackRecord>) {
    let mut uris: Vec<String> = Vec::new();
    let mut unresolved: Vec<TrackRecord> = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        match utils::plan_resolution(record) {
            Resolution::Direct(uri) => uris.push(uri),
            Resolution::Search(query) => {
                match searcher.search(&query).await {
                    Ok(Some(uri)) => uris.push(uri),
                    Ok(None) => unresolved.push(record.clone()),
                    Err(e) => {
                        warning!(
                            "Search failed for {}: {}",
                            utils::unresolved_label(record),
                            e
                        );
                        unresolved.push(record.clone());
                    }
                }
                sleep(delay).await;
            }
        }
        on_row(idx + 1);
    }

    (uris, unresolved)
}

/// Partitions resolved URIs into contiguous batches of at most `size`,
/// preserving order: concatenating the batches yields the input sequence.
pub fn partition_batches(uris: &[String], size: usize) -> Vec<&[String]> {
    uris.chunks(size).collect()
}
