use std::path::{Path, PathBuf};
use std::process::ExitCode;

use agent_enroll::config::Config;
use agent_enroll::form::{SignupFlow, SubmitOutcome};
use agent_enroll::manifest::ApplicationManifest;
use agent_enroll::submit::{AGENT_APPLICATION_ENDPOINT, backend_for};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let Some(manifest_path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: agent-enroll <application.json>");
        eprintln!("  Text fields use their form names (fullName, agentId, ...);");
        eprintln!("  attachments are file paths relative to the manifest.");
        return ExitCode::from(2);
    };

    let config = Config::from_env();
    eprintln!("agent-enroll v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: {}{}", config.api_base_url, AGENT_APPLICATION_ENDPOINT);
    eprintln!("   Mode: {}", if config.use_mock_api { "mock" } else { "live" });
    eprintln!("   Receipts: {}", config.receipt_dir.display());

    match run(&config, &manifest_path).await {
        Ok(submitted) => {
            if submitted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Load the manifest, run one submit attempt, report the outcome.
async fn run(config: &Config, manifest_path: &Path) -> anyhow::Result<bool> {
    let manifest = ApplicationManifest::load(manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let state = manifest.into_form_state(base_dir)?;

    let mut flow = SignupFlow::with_state(backend_for(config), config.receipt_dir.clone(), state);
    match flow.submit().await {
        SubmitOutcome::Invalid => {
            eprintln!("Application is incomplete:");
            for (field, message) in flow.errors().iter() {
                eprintln!("  {field}: {message}");
            }
            Ok(false)
        }
        SubmitOutcome::Failed => {
            let message = flow
                .errors()
                .general()
                .unwrap_or("Registration failed. Please try again.");
            eprintln!("{message}");
            Ok(false)
        }
        SubmitOutcome::Accepted { receipt } => {
            println!("Registration submitted.");
            match receipt {
                Some(path) => println!("Receipt: {}", path.display()),
                None => eprintln!("Receipt could not be generated; see the log."),
            }
            Ok(true)
        }
        // A fresh flow starts in Editing, so nothing can be in flight.
        SubmitOutcome::Ignored => Ok(false),
    }
}
