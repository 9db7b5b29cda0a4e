use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use greenroom_application::{GenerateViewsUseCase, ProvisionUserUseCase, TriggerRouter};
use greenroom_core::schedule::ScheduleEntry;
use greenroom_core::session::Session;
use greenroom_core::speaker::{Speaker, SpeakerRepository};
use greenroom_core::user::IdentityRecord;
use greenroom_infrastructure::paths::GreenroomPaths;
use greenroom_infrastructure::{
    ConfigService, JsonDirGeneratedViewRepository, JsonDirScheduleRepository,
    JsonDirSessionRepository, JsonDirSpeakerRepository, JsonDirUserRepository,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "greenroom")]
#[command(about = "Greenroom - denormalized generated views for a conference app", long_about = None)]
struct Cli {
    /// Data directory holding the collections (defaults to the platform
    /// data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Config file path (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompute and persist all generated views
    Regenerate,
    /// Recompute after a speaker write, merging the changed speaker
    SpeakerChanged {
        /// Key of the speaker that changed
        speaker_id: String,
    },
    /// Provision a user profile from an identity record JSON file
    ProvisionUser {
        /// Path to the identity record JSON
        file: PathBuf,
    },
    /// Write a raw document into a source collection
    Seed {
        #[arg(value_enum)]
        collection: SourceCollection,
        /// Document key
        key: String,
        /// Path to the document JSON
        file: PathBuf,
    },
}

#[derive(Clone, ValueEnum)]
enum SourceCollection {
    Sessions,
    Speakers,
    Schedule,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => GreenroomPaths::data_dir()
            .map_err(|e| anyhow::anyhow!("Failed to resolve data directory: {}", e))?,
    };
    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()
            .map_err(|e| anyhow::anyhow!("Failed to resolve config path: {}", e))?,
    };

    let sessions = Arc::new(JsonDirSessionRepository::new(&data_dir).await?);
    let speakers = Arc::new(JsonDirSpeakerRepository::new(&data_dir).await?);
    let schedule = Arc::new(JsonDirScheduleRepository::new(&data_dir).await?);
    let generated = Arc::new(JsonDirGeneratedViewRepository::new(&data_dir).await?);
    let users = Arc::new(JsonDirUserRepository::new(&data_dir).await?);

    let generate = Arc::new(GenerateViewsUseCase::new(
        sessions.clone(),
        speakers.clone(),
        schedule.clone(),
        generated,
        config_service.get_config(),
    ));
    let provision = Arc::new(ProvisionUserUseCase::new(users));
    let router = TriggerRouter::new(generate, provision);

    match cli.command {
        Commands::Regenerate => {
            let views = router.on_sessions_write().await?;
            println!(
                "Generated views: {} session(s), {} speaker(s), {} schedule day(s)",
                views.sessions().map_or(0, |v| v.len()),
                views.speakers().len(),
                views.schedule().map_or(0, |v| v.len()),
            );
        }
        Commands::SpeakerChanged { speaker_id } => {
            let mut all = speakers.list_all().await?;
            let after = all.remove(&speaker_id);
            let views = router.on_speakers_write(&speaker_id, after).await?;
            println!("Generated {} speaker view(s)", views.speakers().len());
        }
        Commands::ProvisionUser { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read identity record {:?}", file))?;
            let record: IdentityRecord =
                serde_json::from_str(&content).context("Failed to parse identity record")?;
            let profile = router.on_user_created(&record).await?;
            println!("Provisioned '{}' ({})", record.user_id(), profile.email);
        }
        Commands::Seed {
            collection,
            key,
            file,
        } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read document {:?}", file))?;
            match collection {
                SourceCollection::Sessions => {
                    let doc: Session = serde_json::from_str(&content)?;
                    sessions.save(&key, &doc).await?;
                }
                SourceCollection::Speakers => {
                    let doc: Speaker = serde_json::from_str(&content)?;
                    speakers.save(&key, &doc).await?;
                }
                SourceCollection::Schedule => {
                    let doc: ScheduleEntry = serde_json::from_str(&content)?;
                    schedule.save(&key, &doc).await?;
                }
            }
            println!("Seeded '{}'", key);
        }
    }

    Ok(())
}
