//! CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;
use portion_bundle::trunk::TrunkConfig;
use portion_bundle::{BuildPlan, BuildProfile, BundleSettings, pwa};
use std::path::PathBuf;
use tracing::info;

#[derive(Subcommand)]
pub enum Commands {
    /// Write Trunk.toml for a build profile
    Render {
        #[arg(long, value_enum, default_value_t = BuildProfile::default())]
        profile: BuildProfile,

        /// Directory Trunk.toml is written to
        #[arg(long, default_value = "crates/frontend")]
        out: PathBuf,
    },

    /// Generate the web manifest, precache list and update worker for a built output
    Pwa {
        #[arg(long, value_enum, default_value_t = BuildProfile::default())]
        profile: BuildProfile,

        /// Built output to scan (defaults to Trunk's staging directory, then the profile's output)
        #[arg(long, env = "TRUNK_STAGING_DIR")]
        dist: Option<PathBuf>,
    },

    /// Print the resolved build plan as JSON
    Show {
        #[arg(long, value_enum, default_value_t = BuildProfile::default())]
        profile: BuildProfile,
    },
}

impl Commands {
    pub fn execute(self, settings: &BundleSettings) -> Result<()> {
        match self {
            Commands::Render { profile, out } => render(profile, out, settings),
            Commands::Pwa { profile, dist } => generate_pwa(profile, dist, settings),
            Commands::Show { profile } => show(profile, settings),
        }
    }
}

fn render(profile: BuildProfile, out: PathBuf, settings: &BundleSettings) -> Result<()> {
    let plan = BuildPlan::resolve(profile, settings);
    let rendered = TrunkConfig::from_plan(&plan).render()?;

    std::fs::create_dir_all(&out)
        .with_context(|| format!("Failed to create {}", out.display()))?;
    let path = out.join("Trunk.toml");
    std::fs::write(&path, rendered)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(%profile, path = %path.display(), "rendered Trunk config");
    println!("Wrote {}", path.display());
    Ok(())
}

fn generate_pwa(profile: BuildProfile, dist: Option<PathBuf>, settings: &BundleSettings) -> Result<()> {
    let plan = BuildPlan::resolve(profile, settings);
    let dist = dist.unwrap_or_else(|| plan.dist.clone());

    let output = pwa::generate(&plan, &dist)?;

    info!(
        %profile,
        dist = %dist.display(),
        precached = output.precached,
        "generated PWA assets"
    );
    println!(
        "Wrote {}, {} and {} ({} precached files)",
        output.manifest.display(),
        output.precache_manifest.display(),
        output.service_worker.display(),
        output.precached
    );
    Ok(())
}

fn show(profile: BuildProfile, settings: &BundleSettings) -> Result<()> {
    let plan = BuildPlan::resolve(profile, settings);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
