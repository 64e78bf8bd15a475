//! Investment Strategies
//!
//! Static bond/equity split keyed by risk level.

mod recommendation;

pub use recommendation::Recommendation;
