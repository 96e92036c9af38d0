// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Errors that can escape a tagging session. Everything else (no match
/// found, assignment infeasible, low confidence) is represented in-band as
/// an empty candidate list or a [`harmonia_domain::Recommendation::None`],
/// not as an error.
#[derive(Debug, Error)]
pub enum AutotagError {
    /// Reserved for callers that need to distinguish "cannot proceed at
    /// all" from a completed session with no matches: `tag_album`/`tag_item`
    /// never construct this themselves (a session with no catalog ID, no
    /// search terms, and no usable current metadata still completes,
    /// returning an empty candidate list with
    /// [`harmonia_domain::Recommendation::None`]).
    #[error("insufficient metadata to search the catalog")]
    InsufficientMetadata,

    /// The catalog client failed (transport, parsing, rate limiting, ...).
    /// The core does not retry; the catalog client owns its own
    /// retry/backoff policy.
    #[error("catalog request failed: {0}")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, AutotagError>;
