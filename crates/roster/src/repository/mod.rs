//! Repository layer for the roster document.
//!
//! The whole roster is one small document, so repositories load and save it
//! as a unit. Per-character operations are provided on top of that.

mod file;
mod memory;
mod traits;

pub use file::FileRosterRepository;
pub use memory::InMemoryRosterRepository;
pub use traits::{Roster, RosterRepository};
