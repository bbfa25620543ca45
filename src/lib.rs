// TrendLens: trend intelligence for Saudi hashtags
//
// This is the library root. The two scoring engines (bot likelihood and
// sentiment) live in `scoring` and `sentiment`; everything else generates,
// refreshes, or displays the records they produce.

pub mod config;
pub mod generate;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
