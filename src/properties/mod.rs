//! Properties layer
//! - parser.rs: `key=value` property file parser
//! - types.rs: Version metadata record (VersionRecord, ReleaseType)

pub mod parser;
pub mod types;

pub use parser::parse_properties;
pub use types::{ReleaseType, VersionRecord};
