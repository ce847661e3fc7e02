pub mod engine;
pub mod resolver;
pub mod signer;
pub mod synthesizer;

pub use crate::domain::model::{CommentBlock, CommentStyle, SignOutcome};
pub use crate::domain::ports::{Clock, ConfigProvider, Storage};
pub use crate::utils::error::Result;
