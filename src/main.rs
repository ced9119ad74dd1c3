use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tl13c::{translate, CompilationReport, Node};

#[derive(Parser)]
#[command(name = "tl13c")]
#[command(author, version, about = "The TL13 to C translator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a syntax tree (JSON) into C
    Compile {
        /// The syntax tree produced by the parser
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Check a syntax tree for semantic errors without writing C
    Check {
        /// The syntax tree produced by the parser
        input: PathBuf,
    },

    /// Print the syntax tree for debugging
    Dump {
        /// The syntax tree produced by the parser
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Compile { input, output } => compile(&input, output.as_deref()),
        Commands::Check { input } => check(&input),
        Commands::Dump { input } => dump(&input),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn load_tree(input: &Path) -> Result<Node> {
    log::info!("Loading {:?}", input);
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read syntax tree: {:?}", input))?;
    let tree = Node::from_json(&json).with_context(|| format!("Invalid syntax tree: {:?}", input))?;
    Ok(tree)
}

/// 診断と要約を標準エラーに出す。成功なら `true`
fn print_report(report: &CompilationReport) -> bool {
    for diagnostic in report.diagnostics() {
        eprintln!("{}", diagnostic);
    }
    if let Some(summary) = report.summary() {
        eprintln!("\n{}", summary);
    }
    report.is_success()
}

fn compile(input: &Path, output: Option<&Path>) -> Result<bool> {
    let tree = load_tree(input)?;

    // 意味エラーがあっても生成済みのCは書き出す
    let result = match output {
        Some(path) => {
            log::debug!("Writing C to {:?}", path);
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            translate(&tree, io::BufWriter::new(file))?
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            let result = translate(&tree, &mut lock)?;
            lock.flush()?;
            result
        }
    };

    Ok(print_report(&result))
}

fn check(input: &Path) -> Result<bool> {
    let tree = load_tree(input)?;
    let result = translate(&tree, io::sink())?;
    Ok(print_report(&result))
}

fn dump(input: &Path) -> Result<bool> {
    let tree = load_tree(input)?;
    print!("{}", tree.render_tree());
    Ok(true)
}
