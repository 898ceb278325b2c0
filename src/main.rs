use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};

use teachernav::charts;
use teachernav::logging::{init_logging, LogConfig, LogFormat};
use teachernav::models::{Page, Role};
use teachernav::script;
use teachernav::seed;
use teachernav::{Action, DashboardConfig, Session};

#[derive(Parser)]
#[command(name = "teachernav")]
#[command(about = "Teacher and student academic dashboard renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dashboard config file (JSON); falls back to TEACHERNAV_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevelArg::Warn, global = true)]
    log_level: LogLevelArg,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page of the dashboard
    Render {
        #[arg(long, value_enum, default_value_t = Role::Teacher)]
        role: Role,
        #[arg(long, default_value = "dashboard")]
        page: String,
        /// Subject shown on the syllabus tracker
        #[arg(long)]
        subject: Option<u32>,
        /// Write the document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay a CSV action script, writing the document after every step
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long, default_value = "frames")]
        out_dir: PathBuf,
    },
    /// Print the dashboard chart configurations as JSON
    Charts,
    /// Print the mock dataset as JSON
    Seed,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig {
        level: cli.log_level.into(),
        format: cli.log_format,
        with_ansi: std::io::stderr().is_terminal(),
    })?;

    let config = DashboardConfig::resolve(cli.config.as_deref())?;
    let data = seed::dataset()?;

    match cli.command {
        Commands::Render {
            role,
            page,
            subject,
            out,
        } => {
            let mut session = Session::new(data, config);
            session.dispatch(Action::SwitchRole(role))?;
            if let Some(id) = subject {
                session.dispatch(Action::SelectSubject(id))?;
            }
            let frame = session.dispatch(Action::NavigateTo(Page::from(page.as_str())))?;
            info!(role = role.as_str(), page = %page, "rendered page");

            match out {
                Some(path) => {
                    std::fs::write(&path, frame.document)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Page written to {}.", path.display());
                }
                None => print!("{}", frame.document),
            }
        }
        Commands::Replay { script, out_dir } => {
            let actions = script::load_actions(&script)?;
            info!(steps = actions.len(), script = %script.display(), "replaying script");
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;

            let mut session = Session::new(data, config);
            let initial = out_dir.join("step-000.html");
            std::fs::write(&initial, session.render())
                .with_context(|| format!("failed to write {}", initial.display()))?;

            for (index, action) in actions.into_iter().enumerate() {
                let step = index + 1;
                let name = action.name();
                let frame = session
                    .dispatch(action)
                    .with_context(|| format!("step {step} ({name}) failed"))?;
                if let Some(notice) = &frame.notice {
                    println!("step {step} ({name}): {}", notice.text());
                }
                let path = out_dir.join(format!("step-{step:03}.html"));
                std::fs::write(&path, frame.document)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }

            let state = session.state();
            println!(
                "Replay finished on {} / {}; frames written to {}.",
                state.role.as_str(),
                state.page,
                out_dir.display()
            );
        }
        Commands::Charts => {
            let specs = charts::dashboard_charts(&data.class_stats);
            println!("{}", serde_json::to_string_pretty(&specs)?);
        }
        Commands::Seed => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }

    Ok(())
}
