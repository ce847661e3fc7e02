pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Command};

pub use adapters::{
    clock::{FixedClock, SystemClock},
    storage::LocalStorage,
    watcher::CreateWatcher,
};
pub use config::SignatureConfig;
pub use core::{
    engine::SignatureEngine,
    resolver::resolve,
    signer::FileSigner,
    synthesizer::{comment_style_for, extension_of, supported_extensions, synthesize},
};
pub use domain::model::{CommentBlock, CommentStyle, SignOutcome};
pub use utils::error::{Result, SignatureError};
