//! Greedy reconstruction of a text from overlapping fragments
//!
//! Given substrings of an unknown original in unknown order, this crate
//! shrinks the collection down to one string using only pairwise comparison:
//! fragments contained in another are dropped, then the longest
//! suffix-of-one/prefix-of-another overlap is spliced, pass after pass,
//! until a single fragment remains.
//!
//! ```
//! let fragments = vec!["all is well".into(), "ell that en".into(), "t ends well".into()];
//! let text = restitch_core::assemble(fragments).unwrap();
//! assert_eq!(text, "all is well that ends well");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod fragment;
pub mod observer;
pub mod overlap;
pub mod reducer;

// Re-export key types
pub use error::{AssemblyError, Result};
pub use fragment::{FragmentId, FragmentSet};
pub use observer::{NoopObserver, ReduceObserver};
pub use overlap::{OverlapFinder, OverlapMatch};
pub use reducer::{ReduceStats, Reducer, Reduction};

/// Assemble fragments into a single text with default settings
pub fn assemble(fragments: Vec<String>) -> Result<String> {
    Reducer::new().reduce(fragments).map(|reduction| reduction.text)
}
