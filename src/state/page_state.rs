//! Page state definitions for tracking crawl progress
//!
//! Every URL the frontier has accepted is in exactly one of these states.

/// Represents the current state of a page in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Page was admitted to the backlog and is waiting to be fetched
    Queued,

    /// Page was taken from the backlog and fetched
    Visited,

    /// Page was taken from the backlog but the fetch failed
    Failed,
}
