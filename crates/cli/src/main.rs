//! SkillStack CLI - learning tracker and mastery predictions.

mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use skillstack_client::{ApiError, ClientConfig, HttpApi, MemorySessionStore, SkillStackApi};
use skillstack_core::{
    Category, Certification, Credentials, DifficultyLevel, ProgressStatus, ProgressUpdate,
    ResourceDetail, ResourceId, Skill, SkillDraft, SkillId,
};
use skillstack_progress::{Clock, MasteryPredictor, SkillProgressSnapshot};
use skillstack_views::{
    generate_weekly_summary, load_dashboard, load_skill_recommendations, refresh, remove,
    save_progress, submit, ListAction, ListView, Loadable, Record, ViewError,
};

#[derive(Parser)]
#[command(name = "skillstack")]
#[command(about = "Track learning resources and predict skill mastery", long_about = None)]
struct Cli {
    /// API root
    #[arg(long, global = true, env = "SKILLSTACK_API_URL")]
    api_url: Option<String>,

    /// Sign in as this user before running the command
    #[arg(long, global = true, env = "SKILLSTACK_USERNAME")]
    username: Option<String>,

    /// Password for --username
    #[arg(long, global = true, env = "SKILLSTACK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a mastery date from progress rates, offline
    Predict {
        /// Completion rate, 0-100
        #[arg(long, allow_hyphen_values = true)]
        completion: f64,
        /// Activity rate, 0-100
        #[arg(long, allow_hyphen_values = true)]
        activity: f64,
        /// Count from this date instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show stats, the skills table with predictions, and recommendations
    Dashboard {
        /// Count predictions from this date instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List or manage skills
    Skills {
        #[command(subcommand)]
        action: Option<SkillCommand>,
    },
    /// List resources with their progress
    Resources,
    /// List categories
    Categories,
    /// List certifications
    Certifications,
    /// Start learning a resource
    Start {
        /// Resource ID
        id: ResourceId,
    },
    /// Mark a resource complete
    Complete {
        /// Resource ID
        id: ResourceId,
    },
    /// Record progress on a resource
    Progress {
        /// Resource ID
        id: ResourceId,
        /// not_started, started, in_progress or completed
        #[arg(long)]
        status: ProgressStatus,
        /// Hours spent so far
        #[arg(long, default_value = "0")]
        hours: f64,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
        /// Difficulty, 1-5
        #[arg(long, default_value = "3")]
        rating: u8,
    },
    /// Generate the weekly learning summary
    Summary,
    /// Recommended resources, overall or for one skill
    Recommend {
        /// Skill ID
        #[arg(long)]
        skill: Option<SkillId>,
    },
}

#[derive(Subcommand)]
enum SkillCommand {
    /// Add a skill
    Add {
        /// Skill name
        name: String,
        /// Target hours
        #[arg(long, default_value = "0")]
        hours: f64,
        /// beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        difficulty: DifficultyLevel,
        /// Category name
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a skill and its resources
    Delete {
        /// Skill ID
        id: SkillId,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_unauthorized(&err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn is_unauthorized(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(cause.downcast_ref::<ViewError>(), Some(ViewError::Unauthorized { .. }))
            || cause.downcast_ref::<ApiError>().is_some_and(ApiError::is_unauthorized)
    })
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Predict { completion, activity, date } = cli.command {
        let clock = date.map(Clock::fixed).unwrap_or_default();
        let snapshot = SkillProgressSnapshot::new(completion, activity, clock.today());
        println!("{}", MasteryPredictor.predict(&snapshot));
        return Ok(());
    }

    let api = connect(&cli).await?;

    match cli.command {
        Commands::Predict { .. } => {}
        Commands::Dashboard { date } => {
            let clock = date.map(Clock::fixed).unwrap_or_default();
            let state = load_dashboard(&api, &clock).await?;
            match &state.data {
                Loadable::Ready(data) => render::dashboard(data),
                Loadable::Failed(message) => anyhow::bail!("{message}"),
                Loadable::Loading => {}
            }
        }
        Commands::Skills { action: None } => {
            render::skills(&fetch::<Skill>(&api).await?);
        }
        Commands::Skills {
            action: Some(SkillCommand::Add { name, hours, difficulty, category }),
        } => {
            let draft = SkillDraft {
                target_hours: hours,
                difficulty_level: difficulty,
                category,
                ..SkillDraft::new(name)
            };
            let view = refresh(&api, ListView::<Skill>::default())
                .await?
                .reduce(ListAction::OpenCreate)
                .reduce(ListAction::Change(draft));
            let view = submit(&api, view).await?;
            if let Some(error) = view.error {
                anyhow::bail!(error);
            }
            info!("skill added");
            render::skills(view.items.ready().map_or(&[][..], Vec::as_slice));
        }
        Commands::Skills {
            action: Some(SkillCommand::Delete { id }),
        } => {
            let view = refresh(&api, ListView::<Skill>::default()).await?;
            let view = remove(&api, view, id).await?;
            if let Some(error) = view.error {
                anyhow::bail!(error);
            }
            println!("Deleted skill {id}");
        }
        Commands::Resources => render::resources(&fetch::<ResourceDetail>(&api).await?),
        Commands::Categories => render::categories(&fetch::<Category>(&api).await?),
        Commands::Certifications => {
            let today = Clock::default().today();
            render::certifications(&fetch::<Certification>(&api).await?, today);
        }
        Commands::Start { id } => {
            let progress = api.start_learning(id).await?;
            println!("Resource {id}: {}", progress.status.label());
        }
        Commands::Complete { id } => {
            let progress = api.mark_complete(id).await?;
            println!("Resource {id}: {}", progress.status.label());
        }
        Commands::Progress { id, status, hours, notes, rating } => {
            let update = ProgressUpdate {
                status,
                hours_spent: hours,
                notes,
                difficulty_rating: rating,
            };
            let detail = save_progress(&api, id, &update)
                .await
                .with_context(|| format!("Failed to update resource {id}"))?;
            render::resource_detail(&detail);
        }
        Commands::Summary => {
            let state = generate_weekly_summary(&api, Default::default()).await?;
            println!("{}", state.summary_text());
        }
        Commands::Recommend { skill: Some(id) } => {
            match load_skill_recommendations(&api, id).await? {
                Loadable::Ready(recs) => {
                    println!("Recommended for {}:", recs.skill.skill.name);
                    render::resources(&recs.resources);
                }
                Loadable::Failed(message) => anyhow::bail!("{message}"),
                Loadable::Loading => {}
            }
        }
        Commands::Recommend { skill: None } => {
            let resources = api.resource_recommendations().await?;
            render::resources(&resources);
        }
    }

    Ok(())
}

async fn connect(cli: &Cli) -> Result<HttpApi> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.as_str())?;
    }
    debug!(base_url = %config.base_url, "connecting");

    let api = HttpApi::with_session(config, Arc::new(MemorySessionStore::default()))?;

    if let (Some(username), Some(password)) = (&cli.username, &cli.password) {
        let user = api
            .login(&Credentials::new(username.as_str(), password.as_str()))
            .await
            .context("login failed")?;
        info!(user = %user.username, "signed in");
    }

    Ok(api)
}

async fn fetch<R: Record>(api: &HttpApi) -> Result<Vec<R>> {
    let view = refresh(api, ListView::<R>::default()).await?;
    match view.items {
        Loadable::Ready(items) => Ok(items),
        Loadable::Failed(message) => anyhow::bail!(message),
        Loadable::Loading => Ok(Vec::new()),
    }
}
