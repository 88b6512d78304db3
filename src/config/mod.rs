/// Configuration subsystem - editor settings loaded from .scrawlrc files.

pub mod rc;

pub use rc::{RcConfig, RcLoader};
