pub mod error;
pub mod logger;
pub mod parser;
pub mod version;

pub use error::{Component, OsReleaseError};
pub use parser::{parse, parse_from_path, parse_string, OSRELEASE_PATH};
pub use version::{Version, EMPTY_VERSION};

pub static OSRELEASE_CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
