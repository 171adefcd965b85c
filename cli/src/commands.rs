use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::info;

use plandoc::block::anchor::heading_anchor;
use plandoc::{Block, DocumentModel, ParseAnomaly};
use planner::{HttpPlanService, PlanSession, RefineOutcome, TaskBrowser, TicketDesk, find_task};

use crate::config::Config;

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Markdown plan to export
    file: PathBuf,

    /// Output directory (overrides output_dir from the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Parse only and report dropped elements
    #[arg(long)]
    check: bool,

    /// Dump the parsed blocks
    #[arg(long)]
    ast: bool,

    /// Print the heading outline with anchors
    #[arg(long)]
    outline: bool,
}

#[derive(clap::Args)]
#[command(group(clap::ArgGroup::new("input").required(true).args(["brief", "text"])))]
pub struct GenerateArgs {
    /// Structured brief (.toml), or a PDF or text document sent as free text
    #[arg(long)]
    brief: Option<PathBuf>,

    /// PDF or text document sent as free text
    #[arg(long)]
    text: Option<PathBuf>,

    /// Write the plan here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct RefineArgs {
    /// Plan file; rewritten in place when refinement succeeds
    file: PathBuf,

    /// What to change in the plan
    #[arg(short, long)]
    feedback: String,

    /// Export the refined plan to project-plan.pdf
    #[arg(long)]
    export: bool,
}

#[derive(clap::Args)]
pub struct TicketsArgs {
    #[command(subcommand)]
    action: TicketsAction,
}

#[derive(clap::Subcommand)]
enum TicketsAction {
    /// Suggest tickets for a finalized plan and write them out for review
    Suggest {
        /// Finalized plan file
        file: PathBuf,

        /// Write the ticket file here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Submit a reviewed ticket file
    Push {
        /// Ticket file written by `tickets suggest`
        file: PathBuf,
    },
}

#[derive(clap::Args)]
pub struct TasksArgs {
    /// Finalized plan file
    file: PathBuf,

    /// List tasks for this category
    #[arg(short, long)]
    category: Option<String>,

    /// Generate a code snippet for this task (by summary)
    #[arg(long, requires = "category")]
    snippet: Option<String>,
}

fn read_plan(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read '{}'", path.display()))
}

fn emit_anomalies(
    files: &SimpleFiles<String, String>,
    anomalies: &[ParseAnomaly],
    no_color: bool,
) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    for anomaly in anomalies {
        let diagnostic = anomaly.to_diagnostic();
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, files, &diagnostic);
    }
}

pub fn export(args: ExportArgs, config: &Config, no_color: bool) -> Result<()> {
    let source = read_plan(&args.file)?;

    let mut files = SimpleFiles::new();
    let file_id = files.add(args.file.display().to_string(), source.clone());
    let parsed = plandoc::Parser::new(&source, file_id).parse();
    emit_anomalies(&files, &parsed.anomalies, no_color);

    if args.check {
        let model = plandoc::document::build(parsed.blocks.iter().cloned());
        eprintln!(
            "ok: {}; {} dropped",
            check_summary(&parsed.blocks, &model),
            parsed.anomalies.len()
        );
        return Ok(());
    }

    if args.ast {
        println!("{:#?}", parsed.blocks);
        return Ok(());
    }

    if args.outline {
        for block in &parsed.blocks {
            if let Block::Heading { level, text } = block {
                let pad = "  ".repeat(usize::from(level.as_u8()) - 1);
                println!("{}{} (#{})", pad, text, heading_anchor(text));
            }
        }
        return Ok(());
    }

    let dir = args.output.as_deref().unwrap_or(&config.output_dir);
    let model = plandoc::document::build(parsed.blocks);
    let path = renderer::save(&model, dir)?;
    println!("{}", path.display());
    Ok(())
}

pub async fn generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let request = match (&args.brief, &args.text) {
        (Some(path), _) => planner::load_request(path)?,
        (None, Some(path)) => planner::load_text(path)?,
        (None, None) => bail!("either --brief or --text is required"),
    };

    let service = HttpPlanService::new(&config.api_url);
    let mut session = PlanSession::new();
    session
        .fetch_initial(&service, &request)
        .await
        .context("could not generate a plan")?;

    match &args.output {
        Some(path) => {
            fs::write(path, session.plan())
                .with_context(|| format!("cannot write '{}'", path.display()))?;
            info!(path = %path.display(), "wrote generated plan");
        }
        None => println!("{}", session.plan()),
    }
    Ok(())
}

pub async fn refine(args: RefineArgs, config: &Config) -> Result<()> {
    let plan = read_plan(&args.file)?;
    let service = HttpPlanService::new(&config.api_url);

    let mut session = PlanSession::with_plan(plan);
    session.set_feedback(args.feedback);

    match session.refine(&service).await {
        RefineOutcome::Refined => {}
        RefineOutcome::Rejected(rejection) => bail!("{}", rejection),
        RefineOutcome::Failed(e) => {
            return Err(e).with_context(|| {
                format!("refinement failed; '{}' left unchanged", args.file.display())
            });
        }
    }

    fs::write(&args.file, session.plan())
        .with_context(|| format!("cannot write '{}'", args.file.display()))?;
    eprintln!("refined {}", args.file.display());

    if args.export {
        let path = renderer::export_markdown(session.plan(), &config.output_dir)?;
        println!("{}", path.display());
    }
    Ok(())
}

pub async fn tickets(args: TicketsArgs, config: &Config) -> Result<()> {
    let service = HttpPlanService::new(&config.api_url);
    let desk = TicketDesk::new();

    match args.action {
        TicketsAction::Suggest { file, out } => {
            let plan = read_plan(&file)?;
            let Some(suggested) = desk.suggest(&service, &plan).await else {
                bail!("ticket suggestion already in progress");
            };
            let tickets = suggested.context("could not suggest tickets")?;

            match out {
                Some(path) => {
                    planner::write_ticket_file(&path, &tickets)?;
                    eprintln!(
                        "wrote {} tickets; review them, then run `plandoc tickets push {}`",
                        tickets.len(),
                        path.display()
                    );
                }
                None => print!("{}", planner::tickets::tickets_to_toml(&tickets)?),
            }
        }
        TicketsAction::Push { file } => {
            let tickets = planner::read_ticket_file(&file)?;
            let Some(pushed) = desk.submit(&service, &tickets).await else {
                bail!("ticket submission already in progress");
            };
            for issue in pushed.context("could not push tickets")? {
                println!("{}", issue);
            }
        }
    }
    Ok(())
}

pub async fn tasks(args: TasksArgs, config: &Config) -> Result<()> {
    let plan = read_plan(&args.file)?;
    let service = HttpPlanService::new(&config.api_url);
    let browser = TaskBrowser::new();

    let Some(category) = args.category else {
        let Some(categories) = browser.categories(&service, &plan).await else {
            bail!("category request already in progress");
        };
        for category in categories.context("could not load categories")? {
            if category.tech.is_empty() {
                println!("{}", category.name);
            } else {
                println!("{} ({})", category.name, category.tech.join(", "));
            }
        }
        return Ok(());
    };

    let Some(tasks) = browser.tasks(&service, &category, &plan).await else {
        bail!("task request already in progress");
    };
    let tasks = tasks.with_context(|| format!("could not load tasks for '{}'", category))?;

    let Some(wanted) = args.snippet else {
        for task in &tasks {
            println!("- {}", task.summary);
        }
        return Ok(());
    };

    let Some(task) = find_task(&tasks, &wanted) else {
        bail!("no task named '{}' in '{}'", wanted, category);
    };
    let Some(snippet) = browser.snippet(&service, task, &plan).await else {
        bail!("snippet request already in progress");
    };
    let snippet = snippet.context("could not generate a snippet")?;
    println!("```{}\n{}\n```", snippet.language, snippet.snippet);
    Ok(())
}

/// One-line description of what an export would contain.
fn check_summary(blocks: &[Block], model: &DocumentModel) -> String {
    if blocks.is_empty() {
        return "0 blocks".to_string();
    }

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for block in blocks {
        *kinds.entry(block.kind()).or_default() += 1;
    }
    let kinds: Vec<String> = kinds
        .iter()
        .map(|(kind, count)| format!("{} {}", count, kind))
        .collect();
    let styles: Vec<String> = model.styles.keys().map(|name| name.to_string()).collect();

    format!(
        "{} blocks ({}), styles {}",
        blocks.len(),
        kinds.join(", "),
        styles.join(", ")
    )
}
