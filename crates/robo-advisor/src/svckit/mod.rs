//! Service Kit - Intent Handlers
//!
//! Implementations of `lex_core::IntentHandler` for the advisor bot.

mod recommend_portfolio;

pub use recommend_portfolio::RecommendPortfolioHandler;
