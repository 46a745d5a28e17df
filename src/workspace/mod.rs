pub mod confine;
pub mod listing;
pub mod materialize;

pub use confine::confine;
pub use listing::{read_directory, DirectoryEntry, DirectoryListing};
pub use materialize::{materialize_file, Materialized, WriteOutcome};
