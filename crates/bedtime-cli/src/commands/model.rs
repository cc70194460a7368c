//! Model artifact inspection commands.

use bedtime_core::{Config, ModelArtifact, ModelKind};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the active model artifact
    Show {
        /// Artifact path (defaults to the configured or bundled model)
        #[arg(long)]
        path: Option<String>,
    },
    /// Validate a model artifact
    Check {
        /// Artifact path (defaults to the configured or bundled model)
        #[arg(long)]
        path: Option<String>,
    },
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModelAction::Show { path } => {
            let artifact = resolve(path)?;
            println!("name:    {}", artifact.name);
            println!("version: {}", artifact.version);
            println!("kind:    {}", kind_name(artifact.kind));
            let p = &artifact.linear;
            println!(
                "linear:  intercept={} wake_weight={} sleep_weight={} coffee_weight={}",
                p.intercept, p.wake_weight, p.sleep_weight, p.coffee_weight
            );
            if let Some(min) = p.min_sleep_secs {
                println!("         min_sleep_secs={min}");
            }
            if let Some(max) = p.max_sleep_secs {
                println!("         max_sleep_secs={max}");
            }
        }
        ModelAction::Check { path } => {
            let artifact = resolve(path)?;
            println!("model '{}' ok", artifact.name);
        }
    }
    Ok(())
}

/// Explicit path, then the configured override, then the bundled model.
fn resolve(path: Option<String>) -> Result<ModelArtifact, Box<dyn std::error::Error>> {
    let path = path.or_else(|| Config::load_or_default().model.path);
    let artifact = match path {
        Some(p) => ModelArtifact::load(p)?,
        None => ModelArtifact::bundled()?,
    };
    Ok(artifact)
}

fn kind_name(kind: ModelKind) -> &'static str {
    match kind {
        ModelKind::Linear => "linear",
    }
}
