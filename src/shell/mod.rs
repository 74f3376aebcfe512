// Composition root for the matches service.
//
// Responsibilities
// - Read config from environment.
// - Restore the persisted snapshot and wire the store into the HTTP router.
// - Spawn and later drain the snapshot writer.

pub mod bootstrap;
pub mod config;
pub mod http;
pub mod state;
pub mod workers {
    pub mod snapshot_writer;
}
