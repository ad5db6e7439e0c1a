use anyhow::Result;
use clap::{Parser, Subcommand};
use scandiff::areas::session::Session;
use scandiff::artifacts::align::section_change::ChangeFilter;
use scandiff::commands::porcelain::compare::CompareOptions;

#[derive(Parser)]
#[command(
    name = "scandiff",
    version = "0.1.0",
    about = "Section-aware comparison of hardening scan logs",
    long_about = "scandiff splits configuration-hardening scan logs into titled sections \
    and compares two logs section by section, classifying every title as added, \
    removed, modified, or unchanged and showing modified bodies as a minimal \
    line-level edit script.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "outline",
        about = "Print the section outline of a single scan log",
        long_about = "This command tokenizes one scan log and prints its ordered section \
        outline: ordinal, title, body size, and a marker for sections carrying an audit command."
    )]
    Outline {
        #[arg(index = 1, help = "The scan log (plain text or generated HTML report)")]
        file: String,
        #[arg(
            short,
            long,
            help = "Force a grammar instead of detecting one (bracketed/diagnostic or labelled/static)"
        )]
        grammar: Option<String>,
    },
    #[command(
        name = "compare",
        about = "Compare two scan logs section by section",
        long_about = "This command tokenizes two scan logs, aligns their sections by title, \
        and renders each title's classification with a line-level edit script for modified bodies."
    )]
    Compare {
        #[arg(index = 1, help = "The baseline scan log")]
        file_a: String,
        #[arg(index = 2, help = "The target scan log")]
        file_b: String,
        #[arg(
            short,
            long,
            default_value = "ARMU",
            help = "Classes to include: any of A(dded), R(emoved), M(odified), U(nchanged)"
        )]
        filter: String,
        #[arg(long, help = "Emit the aligned result as pretty JSON instead of a text report")]
        json: bool,
        #[arg(short, long, help = "Force a grammar instead of detecting one per file")]
        grammar: Option<String>,
    },
    #[command(
        name = "detect",
        about = "Print the header grammar a scan log resolves to"
    )]
    Detect {
        #[arg(index = 1, help = "The scan log to inspect")]
        file: String,
    },
    #[command(
        name = "tokenize",
        about = "Dump the tokenized section list as JSON",
        long_about = "This command tokenizes one scan log and dumps the resulting section \
        list as pretty JSON, the dataset the report rendering layer consumes."
    )]
    Tokenize {
        #[arg(index = 1, help = "The scan log to tokenize")]
        file: String,
        #[arg(short, long, help = "Force a grammar instead of detecting one")]
        grammar: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let session = Session::open();

    match &cli.command {
        Commands::Outline { file, grammar } => {
            session.outline(file, grammar.as_deref()).await?;
        }
        Commands::Compare {
            file_a,
            file_b,
            filter,
            json,
            grammar,
        } => {
            let filter = ChangeFilter::try_parse(filter).ok_or_else(|| {
                anyhow::anyhow!("invalid filter '{filter}': expected characters from ARMU")
            })?;
            let opts = CompareOptions {
                filter,
                json: *json,
                grammar: grammar.clone(),
            };

            session.compare(file_a, file_b, &opts).await?;
        }
        Commands::Detect { file } => {
            session.detect(file).await?;
        }
        Commands::Tokenize { file, grammar } => {
            session.tokenize(file, grammar.as_deref()).await?;
        }
    }

    session.close()
}
