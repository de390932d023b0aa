use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use profile_app_core::{ProfileFields, SaveOutcome, SkipReason, SubmissionResult};
use profile_cli::{commands, open_store, FieldEdits};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, env = "PROFILE_STORE", help = "Customer record JSON file")]
    store: Option<Utf8PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored customer record
    Show,
    /// Write a fresh customer record
    Init {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    /// Edit fields and save them through the profile form
    Edit {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = open_store(cli.store)?;

    match cli.command {
        Commands::Show => commands::cmd_show(&store)?,
        Commands::Init {
            email,
            first_name,
            last_name,
        } => commands::cmd_init(&store, ProfileFields::new(email, first_name, last_name))?,
        Commands::Edit {
            email,
            first_name,
            last_name,
        } => {
            let edits = FieldEdits {
                email,
                first_name,
                last_name,
            };
            match commands::cmd_edit(&store, edits).await? {
                SaveOutcome::Skipped(SkipReason::Invalid) => {
                    anyhow::bail!("profile not saved: invalid fields")
                }
                SaveOutcome::Submitted(SubmissionResult::Failed(err)) => return Err(err.into()),
                _ => {}
            }
        }
    }

    Ok(())
}
