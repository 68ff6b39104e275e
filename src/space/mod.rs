//! Hyperparameter space of a decision-tree classifier.
//!
//! A candidate ([`Moth`]) has three bounded integer dimensions and one
//! categorical dimension:
//!
//! | Dimension | Domain |
//! |---|---|
//! | `max_depth` | `[1, 20]` |
//! | `min_samples_split` | `[2, 20]` |
//! | `min_samples_leaf` | `[1, 20]` |
//! | `max_features` | `sqrt`, `log2`, `none` |
//!
//! [`SearchDomain`] samples candidates uniformly and repairs moved
//! candidates back into the domain.

mod candidate;
mod domain;

pub use candidate::{HyperParams, MaxFeatures, Moth};
pub use domain::{IntBounds, SearchDomain, SplitClamp};
