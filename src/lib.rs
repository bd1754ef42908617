//! PipeTech Mobile export image filing
//!
//! Finds the jpeg images a PipeTech Mobile export scatters across
//! subfolders, parses the inspection id and sequence ordinal out of
//! each filename and builds the per-inspection rename plan used to
//! file the images under the canonical naming scheme.

pub mod cli;
pub mod config;
pub mod error;
pub mod grouper;
pub mod locator;
pub mod stats;

pub use config::Config;
pub use error::{InspectPhotoError, Result};
pub use grouper::{
    group, sort_by_inspection, unique_inspection_ids, Designator, DesignatorRule, GroupingResult,
    ImageRecord,
};
pub use locator::{copy_all, scan, strip_directory};
pub use stats::{stats, Stats};
