// Service exports
pub mod directory;

pub use directory::{DirectoryError, InMemoryVolunteers, VolunteerDirectory, VolunteerSource};
