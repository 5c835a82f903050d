pub mod lookup;
pub mod participant;
pub mod schema;
pub mod store;

pub use lookup::{MatchMode, MatchTable};
pub use participant::{Participant, empty_to_none, strip_whitespace};
pub use schema::{COLUMN_COUNT, Column, HEADER_ROWS};
pub use store::Roster;
