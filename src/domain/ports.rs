use crate::utils::error::Result;
use chrono::NaiveDateTime;
use std::path::Path;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_file(
        &self,
        path: &Path,
        contents: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn signature_enabled(&self) -> bool;
    fn signature_text(&self) -> &str;
    fn settle_delay(&self) -> Duration;
}

/// Source of the local wall-clock instant used to resolve placeholders.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
