//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageState`: What the frontier knows about a single URL (queued, visited, failed)

mod page_state;

// Re-export main types
pub use page_state::PageState;
