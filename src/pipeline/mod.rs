// Pipelines — long-running drivers built on top of the generators.

pub mod refresh;
