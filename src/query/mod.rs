//! Query Engine and Aggregation Service: pure views over notes

mod aggregate;
mod filter;

pub use aggregate::{CategoryCounts, Stats, all_tags, category_counts, stats};
pub use filter::{Query, display_order, query};
