use crate::core::signer::FileSigner;
use crate::core::{Clock, ConfigProvider, SignOutcome, Storage};
use crate::utils::error::{Result, SignatureError};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// Signs files as soon as they are created under a directory.
pub struct CreateWatcher {
    root: PathBuf,
}

/// Paths reported by a creation event; every other event kind yields nothing.
pub fn created_paths(event: &Event) -> Vec<PathBuf> {
    match event.kind {
        EventKind::Create(_) => event.paths.clone(),
        _ => Vec::new(),
    }
}

impl CreateWatcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Watch until `shutdown` resolves and return how many files were signed.
    ///
    /// Each new regular file waits out the configured settle delay in its own
    /// task, so the creating process can finish writing it first. Files still
    /// waiting when `shutdown` resolves are left unsigned. Failures on a single
    /// file are logged and do not stop the watcher.
    pub async fn run<S, C, P, F>(&self, signer: Arc<FileSigner<S, C, P>>, shutdown: F) -> Result<usize>
    where
        S: Storage + 'static,
        C: Clock + 'static,
        P: ConfigProvider + 'static,
        F: Future<Output = ()>,
    {
        let (tx, mut rx) = mpsc::channel(100);
        let mut watcher = RecommendedWatcher::new(
            move |result: std::result::Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if let Err(e) = tx.blocking_send(event) {
                        tracing::error!("Failed to send file watch event: {}", e);
                    }
                }
                Err(e) => tracing::error!("File watch error: {}", e),
            },
            notify::Config::default(),
        )
        .map_err(|e| SignatureError::WatchError {
            message: format!("Failed to create file watcher: {}", e),
        })?;

        watcher
            .watch(&self.root, RecursiveMode::Recursive)
            .map_err(|e| SignatureError::WatchError {
                message: format!("Failed to watch directory {}: {}", self.root.display(), e),
            })?;
        tracing::info!("👀 Watching {} for new files", self.root.display());

        tokio::pin!(shutdown);
        let mut pending = JoinSet::new();
        let mut signed = 0;

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::debug!("Received shutdown signal, stopping watcher");
                    break;
                }
                event = rx.recv() => {
                    let Some(event) = event else {
                        tracing::debug!("File watch channel closed, stopping watcher");
                        break;
                    };
                    for path in created_paths(&event) {
                        pending.spawn(sign_when_settled(Arc::clone(&signer), path));
                    }
                }
                Some(joined) = pending.join_next(), if !pending.is_empty() => {
                    if matches!(joined, Ok(true)) {
                        signed += 1;
                    }
                }
            }
        }

        if !pending.is_empty() {
            tracing::info!("Dropping {} file(s) still waiting to be signed", pending.len());
        }
        pending.abort_all();
        while let Some(joined) = pending.join_next().await {
            if matches!(joined, Ok(true)) {
                signed += 1;
            }
        }

        Ok(signed)
    }
}

async fn sign_when_settled<S, C, P>(signer: Arc<FileSigner<S, C, P>>, path: PathBuf) -> bool
where
    S: Storage,
    C: Clock,
    P: ConfigProvider,
{
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            tracing::debug!("Ignoring non-file entry {}", path.display());
            return false;
        }
        Err(e) => {
            tracing::debug!("Created path vanished {}: {}", path.display(), e);
            return false;
        }
    }

    let delay = signer.config().settle_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match signer.sign_file(&path).await {
        Ok(SignOutcome::Signed { .. }) => true,
        Ok(_) => false,
        Err(e) => {
            tracing::error!("❌ Error adding signature to {}: {}", path.display(), e);
            false
        }
    }
}
