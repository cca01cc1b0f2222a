//! TitanFlow command line adapters.
//!
//! Thin file-in/file-out wrappers around the pipeline: read records from a
//! JSON file, invoke the relevant agent(s), write the resulting records out.
//! No logic beyond the core contracts lives here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tflow_agents::{
    CompletionConfig, HttpCompletionClient, PipelineConfig, PipelineOrchestrator,
};
use tflow_models::pipeline::DEFAULT_TARGET_DURATION_SECS;
use tflow_models::{
    AnalysisRecord, PipelineRequest, Platform, ScriptRecord, VideoRecord,
};

mod io;
mod samples;

use io::{read_json, write_pretty};

#[derive(Parser)]
#[command(name = "tflow")]
#[command(author, version, about = "TitanFlow: viral video analysis to production plan", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a sample video data file
    Sample {
        /// Output path
        #[arg(short, long, default_value = "sample_videos.json")]
        output: PathBuf,
    },

    /// Analyze viral videos from a JSON file
    Analyze {
        /// Path to a JSON array of video records
        #[arg(short, long)]
        file: PathBuf,

        /// Target niche to scope the analysis to
        #[arg(short, long)]
        niche: Option<String>,

        /// Path to save the analysis record (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a script from an analysis record file
    Script {
        /// Path to a JSON analysis record
        #[arg(short, long)]
        analysis: PathBuf,

        /// Target platform
        #[arg(short, long, default_value = "TikTok")]
        platform: String,

        /// Advisory duration in seconds
        #[arg(short, long, default_value_t = DEFAULT_TARGET_DURATION_SECS)]
        duration: u32,

        /// Path to save the script record (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a visual plan from a script record file
    Plan {
        /// Path to a JSON script record
        #[arg(short, long)]
        script: PathBuf,

        /// Target platform (defaults to the script's platform)
        #[arg(short, long)]
        platform: Option<String>,

        /// Path to save the visual plan record (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the full analyze → script → plan pipeline
    Pipeline {
        /// Path to a JSON array of video records
        #[arg(short, long)]
        file: PathBuf,

        /// Target platform
        #[arg(short, long, default_value = "TikTok")]
        platform: String,

        /// Advisory duration in seconds
        #[arg(short, long, default_value_t = DEFAULT_TARGET_DURATION_SECS)]
        duration: u32,

        /// Target niche to scope the analysis to
        #[arg(short, long)]
        niche: Option<String>,

        /// Halt on a stage failure instead of substituting defaults
        #[arg(long)]
        no_continue: bool,

        /// Path to save the pipeline result (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env().add_directive("tflow=warn".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sample { output } => {
            write_pretty(&output, &samples::sample_videos())?;
            println!("Sample video data saved to {}", output.display());
            Ok(())
        }
        Command::Analyze { file, niche, output } => {
            let videos: Vec<VideoRecord> = read_json(&file)?;
            let orchestrator = build_orchestrator(true)?;

            let (analysis, status) = orchestrator
                .analyze(&videos, niche.as_deref())
                .await
                .context("Analysis failed")?;

            eprintln!("Analysis status: {}", status.as_str());
            emit(output.as_deref(), &analysis)
        }
        Command::Script {
            analysis,
            platform,
            duration,
            output,
        } => {
            let analysis: AnalysisRecord = read_json(&analysis)?;
            let orchestrator = build_orchestrator(true)?;

            let (script, status) = orchestrator
                .write_script(&analysis, &Platform::from(platform), duration)
                .await
                .context("Script generation failed")?;

            eprintln!("Script status: {}", status.as_str());
            emit(output.as_deref(), &script)
        }
        Command::Plan {
            script,
            platform,
            output,
        } => {
            let script: ScriptRecord = read_json(&script)?;
            let platform = platform
                .map(Platform::from)
                .unwrap_or_else(|| script.platform.clone());
            let orchestrator = build_orchestrator(true)?;

            let (plan, status) = orchestrator
                .plan_visuals(&script, &platform)
                .await
                .context("Visual plan creation failed")?;

            eprintln!("Visual plan status: {}", status.as_str());
            emit(output.as_deref(), &plan)
        }
        Command::Pipeline {
            file,
            platform,
            duration,
            niche,
            no_continue,
            output,
        } => {
            let videos: Vec<VideoRecord> = read_json(&file)?;
            let orchestrator = build_orchestrator(!no_continue)?;

            let request = PipelineRequest {
                videos,
                platform: Platform::from(platform),
                target_duration: duration,
                target_niche: niche,
            };

            let result = orchestrator
                .run(request)
                .await
                .context("Pipeline run failed")?;

            eprintln!(
                "Stages: analysis={} script={} visual_plan={}",
                result.stages.analysis.as_str(),
                result.stages.script.as_str(),
                result.stages.visual_plan.as_str(),
            );
            emit(output.as_deref(), &result)
        }
    }
}

fn build_orchestrator(continue_on_failure: bool) -> Result<PipelineOrchestrator> {
    let client = HttpCompletionClient::new(CompletionConfig::from_env())
        .context("Completion client configuration failed")?;

    Ok(PipelineOrchestrator::new(
        Arc::new(client),
        PipelineConfig {
            continue_on_failure,
        },
    ))
}

/// Write `record` to `output`, or pretty-print it to stdout.
fn emit<T: serde::Serialize>(output: Option<&std::path::Path>, record: &T) -> Result<()> {
    match output {
        Some(path) => {
            write_pretty(path, record)?;
            println!("Saved to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}
