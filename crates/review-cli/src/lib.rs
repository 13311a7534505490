//! Library side of the `review-analyzer` binary: logging setup, localized
//! rendering, report export and the command runners.

pub mod commands;
pub mod locale;
pub mod logging;
pub mod report;
pub mod summary;
