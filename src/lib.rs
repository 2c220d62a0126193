//! # Combinator Kit
//!
//! Functions as values: building them, passing them around, returning them.
//!
//! ## Comparators (`comparator`)
//! - Pick a less-than or greater-than predicate at runtime or compile time
//! - Compare by a derived key
//!
//! ## Sequence pipelines (`pipeline`)
//! - Lazy `map_seq`, `filter_seq`, `flat_map_seq` adapters
//! - `fold` with an explicit seed, applied in source order
//! - `SeqExt` for method-style chaining
//!
//! ## Stateful closures (`counter`)
//! - `make_counter`: private state advanced on every call
//! - `SharedCounter` for the multi-threaded case
//! - `make_multiplier`: capturing an immutable value
//!
//! ## Zip-combine (`zip`) and sorting (`sort`)
//! - Element-wise merge of two sequences, strict or truncating
//! - In-place sort driven by a less-than predicate
//!
//! ## Odds and ends (`closures`, `patterns`)
//! - Higher-order helpers, enums with data, tuple matching
//!
//! Policy defaults live in [`Settings`], loadable from TOML or JSON.
//!
//! Run the walkthrough with: `cargo run --bin playground [settings.toml]`

pub mod closures;
pub mod comparator;
pub mod config;
pub mod counter;
pub mod error;
pub mod patterns;
pub mod pipeline;
pub mod sort;
pub mod zip;

pub use comparator::{build_comparator, by_key, Comparator, Direction};
pub use config::{ConfigError, Settings};
pub use counter::{
    make_counter, make_counter_fn, make_multiplier, Counter, CounterPolicy, SharedCounter,
};
pub use error::{CombinatorError, Result};
pub use pipeline::{filter_seq, flat_map_seq, fold, map_seq, SeqExt};
pub use sort::{sort_by, sorted_by, SortStrategy};
pub use zip::{zip_combine, zip_truncate, ZipPolicy};
