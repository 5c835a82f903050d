pub mod csv_ingest;
pub mod error;

pub use csv_ingest::{parse_rows, read_roster};
pub use error::{IngestError, Result};
