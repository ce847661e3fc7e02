use crate::core::engine::SignatureEngine;
use crate::core::synthesizer::extension_of;
use crate::core::{Clock, ConfigProvider, SignOutcome, Storage};
use crate::utils::error::Result;
use std::path::Path;

/// Prepends the configured signature to files on disk.
pub struct FileSigner<S: Storage, C: Clock, P: ConfigProvider> {
    storage: S,
    engine: SignatureEngine<C>,
    config: P,
}

impl<S: Storage, C: Clock, P: ConfigProvider> FileSigner<S, C, P> {
    pub fn new(storage: S, clock: C, config: P) -> Self {
        Self {
            storage,
            engine: SignatureEngine::new(clock),
            config,
        }
    }

    pub fn config(&self) -> &P {
        &self.config
    }

    /// Insert the signature block at the very start of `path`.
    ///
    /// Unsupported file types and a disabled feature are reported through
    /// [`SignOutcome`], not as errors; only I/O failures are errors.
    pub async fn sign_file(&self, path: &Path) -> Result<SignOutcome> {
        if !self.config.signature_enabled() {
            tracing::debug!("Signature disabled, skipping {}", path.display());
            return Ok(SignOutcome::Disabled);
        }

        let block = extension_of(path)
            .and_then(|ext| self.engine.render(self.config.signature_text(), &ext));
        let Some(block) = block else {
            tracing::warn!("⚠️ File type not supported: {}", path.display());
            return Ok(SignOutcome::NotSupported {
                path: path.to_path_buf(),
            });
        };

        if !block.style().comments_out_content() {
            tracing::warn!(
                "⚠️ {} comments only cover the marker lines; the signature in {} will not be commented out",
                block.style().open(),
                path.display()
            );
        }

        let existing = self.storage.read_file(path).await?;
        let mut contents = String::with_capacity(block.as_str().len() + existing.len());
        contents.push_str(block.as_str());
        contents.push_str(&existing);
        self.storage.write_file(path, &contents).await?;

        tracing::info!("✍️ Signed {} ({:?} comment)", path.display(), block.style());
        Ok(SignOutcome::Signed {
            path: path.to_path_buf(),
            bytes: block.as_str().len(),
        })
    }

    /// Sign several files, one outcome per path.
    ///
    /// An I/O error on one file becomes [`SignOutcome::Failed`] and the
    /// remaining files are still processed.
    pub async fn sign_files<I, T>(&self, paths: I) -> Vec<SignOutcome>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<Path>,
    {
        let mut outcomes = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let outcome = match self.sign_file(path).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("❌ Error adding signature to {}: {}", path.display(), e);
                    SignOutcome::Failed {
                        path: path.to_path_buf(),
                        error: e.to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }
}
