//! Library side of the `rink` command: logging setup and the batch pipeline.

pub mod logging;
pub mod pipeline;
