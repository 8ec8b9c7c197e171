//! Mailblast CLI - recipient lists and campaign drafts
//!
//! # Main Commands
//!
//! ```bash
//! mailblast serve                     # Start HTTP server (port 3000)
//! mailblast stats recipients.csv      # Show recipient statistics
//! mailblast list recipients.csv       # Print unique valid addresses
//! mailblast validate-draft draft.json # Check a campaign draft
//! ```
//!
//! `stats` also accepts `--text "a@b.com;c@d.com"` or reads stdin when no
//! file is given.

use clap::{Parser, Subcommand};
use mailblast::{
    load_from_file, load_from_reader, parse, parse_list, validate_campaign_draft, RecipientBatch,
    ServerConfig,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mailblast")]
#[command(about = "Recipient list and campaign draft tooling for Mailblast", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show recipient statistics for a file, inline text, or stdin
    Stats {
        /// Input TXT/CSV file (stdin if omitted)
        input: Option<PathBuf>,

        /// Parse this text instead of a file
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print unique valid addresses, one per line
    List {
        /// Input TXT/CSV file
        input: PathBuf,

        /// Keep `tag:` prefixes
        #[arg(long)]
        with_tags: bool,

        /// Print invalid lines instead
        #[arg(long)]
        invalid: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a campaign draft JSON file
    ValidateDraft {
        /// Draft JSON file
        input: PathBuf,
    },

    /// Start HTTP server
    Serve {
        /// Port to listen on (default: MAILBLAST_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Stats { input, text, json } => cmd_stats(input.as_deref(), text, json).await,

        Commands::List {
            input,
            with_tags,
            invalid,
            output,
        } => cmd_list(&input, with_tags, invalid, output.as_deref()).await,

        Commands::ValidateDraft { input } => cmd_validate_draft(&input),

        Commands::Serve { port } => cmd_serve(port).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_stats(
    input: Option<&Path>,
    text: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match (input, text) {
        (_, Some(text)) => text,
        (Some(path), None) => {
            eprintln!("📄 Reading recipients: {}", path.display());
            load_from_file(path).await
        }
        (None, None) => load_from_reader(std::io::stdin().lock()),
    };

    let batch = parse(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        print_batch(&batch);
    }

    Ok(())
}

fn print_batch(batch: &RecipientBatch) {
    println!("📊 Recipients");
    println!("   Total lines:  {}", batch.total_lines);
    println!("   ✅ Valid:     {}", batch.valid_count);
    println!("   ❌ Invalid:   {}", batch.invalid_count);
    println!("   ♻️  Duplicates: {}", batch.duplicate_count);

    if !batch.has_valid() {
        println!("\n⚠️  Please add at least one valid recipient");
    }
}

async fn cmd_list(
    input: &Path,
    with_tags: bool,
    invalid: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading recipients: {}", input.display());

    let text = load_from_file(input).await;
    let list = parse_list(&text);

    let lines: Vec<String> = if invalid {
        list.invalid_lines().map(|l| l.to_line()).collect()
    } else if with_tags {
        list.lines.iter().filter(|l| l.is_valid()).map(|l| l.to_line()).collect()
    } else {
        list.valid_emails().map(str::to_string).collect()
    };

    let batch = list.batch();
    eprintln!(
        "✅ {} valid, {} invalid, {} duplicates",
        batch.valid_count, batch.invalid_count, batch.duplicate_count
    );

    write_output(&lines.join("\n"), output)?;

    Ok(())
}

fn cmd_validate_draft(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Validating draft: {}", input.display());

    let content = fs::read_to_string(input)?;
    let payload: Value = serde_json::from_str(&content)?;

    let report = validate_campaign_draft(&payload);

    eprintln!(
        "   Recipients: {} valid, {} invalid, {} duplicates",
        report.stats.valid_count, report.stats.invalid_count, report.stats.duplicate_count
    );

    if report.is_valid() {
        eprintln!("✅ Draft is valid");
        return Ok(());
    }

    for err in report.schema_errors.iter().take(10) {
        eprintln!("   - {}", err);
    }
    for problem in &report.problems {
        eprintln!("   - {}: {}", problem.field, problem.message);
    }

    Err(format!(
        "draft has {} schema errors and {} problems",
        report.schema_errors.len(),
        report.problems.len()
    )
    .into())
}

async fn cmd_serve(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?.with_port(port);
    mailblast::server::start_server(config).await?;
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
