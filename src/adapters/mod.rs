// Adapters layer: concrete implementations of the domain ports (clock, storage, file events).

pub mod clock;
pub mod storage;
pub mod watcher;
