mod echo;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use skillgap_core::{
    Analyzer, CatalogLoader, DEFAULT_LINE_WIDTH, Document, FetchConfig, JobSource, ReportFormat, ReportOptions,
    SkillgapError, extract_text, fetch_file, render_report,
};
use url::Url;

use echo::{
    format_size, print_analysis_details, print_banner, print_error, print_info, print_step, print_success,
    print_timing_summary, print_warning,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const TOTAL_STEPS: usize = 5;

/// Compare a resume against a job description and suggest what to learn
#[derive(Parser, Debug)]
#[command(name = "skillgap")]
#[command(author = "Skillgap Contributors")]
#[command(version = VERSION)]
#[command(about = "Compare a resume against a job description", long_about = None)]
struct Args {
    /// Resume file (.pdf, .docx, or plain text)
    #[arg(value_name = "RESUME", required_unless_present = "completions")]
    resume: Option<PathBuf>,

    /// Job description text
    #[arg(long, value_name = "TEXT", conflicts_with = "jd_file")]
    jd_text: Option<String>,

    /// Read the job description text from a local file
    #[arg(long, value_name = "PATH")]
    jd_file: Option<PathBuf>,

    /// Fetch the job description from a web page
    #[arg(long, value_name = "URL")]
    jd_url: Option<Url>,

    /// Skill resource file (default: ~/.config/skillgap/skills_resources.json)
    #[arg(long, value_name = "PATH")]
    resources: Option<PathBuf>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: ReportFormat,

    /// Wrap text report lines at this width (0 disables wrapping)
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH, value_name = "COLS")]
    width: usize,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "15", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Include the raw resume and job description skill sets
    #[arg(long)]
    debug: bool,

    /// Show progress and timings on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

/// Shows the user-facing message and keeps the full error for the exit report.
fn report(err: SkillgapError) -> anyhow::Error {
    print_error(&err.user_message());
    anyhow::Error::new(err)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "skillgap", &mut io::stdout());
        return Ok(());
    }

    let resume_path = args.resume.clone().context("A resume file is required")?;
    let started = Instant::now();
    let mut timings: Vec<(String, Duration)> = Vec::new();

    if args.verbose {
        print_banner();
    }

    if args.verbose {
        print_step(1, TOTAL_STEPS, "Loading skill catalog");
    }

    let step = Instant::now();
    let loader = match &args.resources {
        Some(path) => CatalogLoader::builder().resource_path(path).build(),
        None => CatalogLoader::default(),
    };
    let catalog = loader.load().map_err(report).context("Failed to load skill resources")?;
    timings.push(("Catalog".to_string(), step.elapsed()));

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Skills:".dimmed(),
            catalog.vocabulary.len().to_string().bright_white()
        );
        if catalog.resources.is_empty() {
            print_warning("No curated resources found, using fallback recommendations");
        } else {
            eprintln!(
                "  {} {}",
                "Resources:".dimmed(),
                catalog.resources.len().to_string().bright_white()
            );
        }
        eprintln!();
    }

    let mut fetch = FetchConfig { timeout: args.timeout, ..Default::default() };
    if let Some(user_agent) = &args.user_agent {
        fetch.user_agent = user_agent.clone();
    }

    let analyzer = Analyzer::builder(catalog)
        .fetch_config(fetch)
        .include_debug(args.debug)
        .build();

    if args.verbose {
        print_step(
            2,
            TOTAL_STEPS,
            &format!("Reading resume {}", resume_path.display().bright_white()),
        );
    }

    let step = Instant::now();
    let document = Document::from_path(&resume_path).map_err(report)?;
    let resume_text = extract_text(&document).map_err(report)?;
    timings.push(("Resume".to_string(), step.elapsed()));

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(document.bytes.len()).bright_white());
        eprintln!("  {} {:?}", "Kind:".dimmed(), document.kind());
        eprintln!();
    }

    let jd_text = match &args.jd_file {
        Some(path) => Some(fetch_file(path).map_err(report)?),
        None => args.jd_text.clone(),
    };
    let source = JobSource::from_fields(jd_text.as_deref(), args.jd_url.as_ref().map(Url::as_str)).map_err(report)?;

    if args.verbose {
        let message = match &source {
            JobSource::Text(_) => "Using inline job description".to_string(),
            JobSource::Url(url) => format!("Fetching job description from {}", url.bright_white().underline()),
        };
        print_step(3, TOTAL_STEPS, &message);
    }

    let step = Instant::now();
    let jd_text = analyzer.job_text(&source).await.map_err(report)?;
    timings.push(("Job description".to_string(), step.elapsed()));

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(jd_text.len()).bright_white());
        eprintln!();
        print_step(4, TOTAL_STEPS, "Comparing skills");
    }

    let step = Instant::now();
    let result = analyzer.compare_texts(&resume_text, &jd_text);
    timings.push(("Analysis".to_string(), step.elapsed()));

    if args.verbose {
        print_analysis_details(&result);
        print_step(5, TOTAL_STEPS, "Writing output");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        if args.debug {
            print_info("Debug skill sets included");
        }
        eprintln!();
    }

    let options = ReportOptions { include_debug: args.debug, line_width: args.width };
    let output = render_report(&result, args.format, &options).map_err(report)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
    }

    if args.verbose {
        print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}
