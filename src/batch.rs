//! Batch coordination and deterministic assembly
//!
//! Range queries fan out one spawned fetch task per identifier, join on all of
//! them, and assemble the outcomes into a stable ascending-by-id sequence.
//! A failing identifier never aborts its siblings: every identifier in the
//! range is attempted, and failures are retained for reporting.

use futures::StreamExt;

use crate::client::Client;
use crate::error::{FetchError, Result};
use crate::types::{BatchReport, Pokemon, Query};

/// Cap on simultaneous in-flight fetches for range queries
///
/// A full-range query covers up to 1025 identifiers; without a cap that many
/// sockets would open at once. The cap bounds resource use while keeping the
/// full-join guarantee.
pub const MAX_CONCURRENT_FETCHES: usize = 64;

/// Execute one query against the given client
///
/// Name and number lookups degenerate to a single fetch whose failure is fatal
/// to the invocation. Range lookups always produce a [`BatchReport`]; consult
/// its `failures` for identifiers that could not be fetched.
///
/// # Errors
///
/// Single-identifier modes propagate any [`FetchError`]. Range mode never fails
/// as a whole.
pub async fn execute(client: &Client, query: &Query) -> Result<BatchReport> {
    match query {
        Query::Name(name) => Ok(BatchReport::single(client.fetch(name).await?)),
        Query::Number(number) => {
            Ok(BatchReport::single(client.fetch(&number.to_string()).await?))
        }
        Query::Range { low, high } => Ok(fetch_range(client, *low, *high).await),
    }
}

/// Fetch every identifier in `low..=high` concurrently and join on all of them
///
/// Outcomes are collected from the task stream as they complete; completion
/// order is arbitrary and has no bearing on the assembled ordering.
pub async fn fetch_range(client: &Client, low: u16, high: u16) -> BatchReport {
    tracing::debug!(low, high, "dispatching range fetch");

    let outcomes: Vec<_> = futures::stream::iter(low..=high)
        .map(|number| {
            let client = client.clone();
            let identifier = number.to_string();
            async move {
                let task = tokio::spawn({
                    let identifier = identifier.clone();
                    async move { client.fetch(&identifier).await }
                });
                match task.await {
                    Ok(outcome) => outcome,
                    Err(source) => Err(FetchError::Task { identifier, source }),
                }
            }
        })
        .buffer_unordered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await;

    assemble(outcomes)
}

/// Partition outcomes and impose the final deterministic ordering
///
/// Successes are stable-sorted ascending by `id`; failures are sorted by
/// identifier so repeated runs render identically.
fn assemble(outcomes: Vec<std::result::Result<Pokemon, FetchError>>) -> BatchReport {
    let mut pokemon = Vec::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome {
            Ok(record) => pokemon.push(record),
            Err(err) => {
                tracing::warn!(
                    identifier = err.identifier(),
                    error = %err,
                    "fetch failed, continuing batch"
                );
                failures.push(err);
            }
        }
    }

    pokemon.sort_by_key(|p| p.id);
    failures.sort_by_key(|f| f.identifier().parse::<u32>().unwrap_or(u32::MAX));

    tracing::info!(
        fetched = pokemon.len(),
        failed = failures.len(),
        "batch assembled"
    );

    BatchReport { pokemon, failures }
}
