pub mod api;
pub mod cli;
pub mod dataset;
pub mod dictionary;
pub mod error;
pub mod types;
pub mod uid;
pub mod writer;

pub use api::{build_baseline, build_mr, DatasetBuilder, DatasetSummary};
pub use cli::report::TextReport;
pub use dataset::{Dataset, Severity, ValidationIssue};
pub use dictionary::{TagDictionaryEntry, TagRegistry};
pub use error::{Nii2DcmError, Result};
pub use types::*;
pub use uid::{generate_uid, UidGenerator, UuidUidGenerator};
