use add_signature::config::toml_config::SignatureConfig;
use add_signature::core::ConfigProvider;
use add_signature::utils::error::SignatureError;
use add_signature::utils::{logger, validation::Validate};
use add_signature::{
    supported_extensions, Cli, Command, CreateWatcher, FileSigner, FixedClock, LocalStorage,
    SignOutcome, SignatureEngine, SystemClock,
};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<SignatureConfig, SignatureError> {
    let mut config = SignatureConfig::load_or_default(&cli.config)?;
    config.apply_overrides(cli.enabled_override(), cli.text.clone());
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<(), SignatureError> {
    cli.validate()?;

    match &cli.command {
        Command::Sign { files } => {
            let config = load_config(&cli)?;
            let signer = FileSigner::new(LocalStorage::new(), SystemClock, config);
            let outcomes = signer.sign_files(files).await;
            let failed = report(&outcomes);
            if failed > 0 {
                return Err(SignatureError::PartialFailure {
                    failed,
                    total: outcomes.len(),
                });
            }
            Ok(())
        }
        Command::Preview { extension, at } => {
            let config = load_config(&cli)?;
            let block = match at {
                Some(at) => SignatureEngine::new(FixedClock::new(*at))
                    .render(config.signature_text(), extension),
                None => SignatureEngine::new(SystemClock).render(config.signature_text(), extension),
            };
            match block {
                Some(block) => {
                    print!("{}", block);
                    Ok(())
                }
                None => Err(SignatureError::UnsupportedExtension {
                    path: extension.clone(),
                }),
            }
        }
        Command::Extensions => {
            for (extension, style) in supported_extensions() {
                let note = if style.comments_out_content() {
                    ""
                } else {
                    "  (content not commented out; breaks scripts)"
                };
                println!("{:<8} {} ... {}{}", extension, style.open(), style.close(), note);
            }
            Ok(())
        }
        Command::Watch { dir } => {
            let config = load_config(&cli)?;
            if !config.signature_enabled() {
                tracing::warn!("⚠️ Signature is disabled; new files will not be signed");
            }
            let watcher = CreateWatcher::new(dir.clone());
            let signer = Arc::new(FileSigner::new(LocalStorage::new(), SystemClock, config));
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for Ctrl-C: {}", e);
                }
            };
            let signed = watcher.run(signer, shutdown).await?;
            println!("✅ Signed {} new file(s)", signed);
            Ok(())
        }
        Command::InitConfig { force } => init_config(&cli, *force),
    }
}

fn init_config(cli: &Cli, force: bool) -> Result<(), SignatureError> {
    if cli.config.exists() && !force {
        return Err(SignatureError::InvalidConfigValueError {
            field: "config".to_string(),
            value: cli.config.display().to_string(),
            reason: "File already exists; pass --force to overwrite".to_string(),
        });
    }

    let contents = SignatureConfig::default().to_toml_string()?;
    std::fs::write(&cli.config, contents)?;
    tracing::info!("📝 Wrote default config to {}", cli.config.display());
    println!("📝 Wrote {}", cli.config.display());
    Ok(())
}

/// Print one line per outcome and return how many files failed.
fn report(outcomes: &[SignOutcome]) -> usize {
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            SignOutcome::Signed { path, .. } => println!("✅ Signed {}", path.display()),
            SignOutcome::NotSupported { path } => {
                println!("⚠️ File type not supported: {}", path.display())
            }
            SignOutcome::Failed { path, error } => {
                failed += 1;
                println!("❌ Failed {}: {}", path.display(), error)
            }
            SignOutcome::Disabled => {
                println!("ℹ️ Signature is disabled in the configuration");
                break;
            }
        }
    }
    failed
}
