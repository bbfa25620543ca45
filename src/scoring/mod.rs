// Scoring — bot likelihood from account signals, and risk bucketing.

pub mod bot;
pub mod risk;
