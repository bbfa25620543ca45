// Generation — synthesize accounts and trends, scored through the core.
//
// Every function takes the RNG as a parameter so callers control seeding.

pub mod accounts;
pub mod filters;
pub mod trends;
