// State management module.
// Holds the fetch-lifecycle state machine and the session's working
// collection of user records.

pub mod directory;
pub mod loader;

pub use directory::Directory;
pub use loader::LoadState;
