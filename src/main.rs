//! doxflow CLI: document catalog with AI-assisted tagging and summarization.
//!
//! There is no storage layer; every invocation starts from the seeded
//! catalog. The CLI is a thin presentation boundary over the workflow entry
//! points.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use doxflow::assist::{AssistGateway, OllamaClient, OllamaConfig};
use doxflow::catalog::{Document, DocumentCatalog, HighlightSpan, highlight};
use doxflow::workflow::{PreviewState, PreviewWorkflow, UploadWorkflow};

#[derive(Parser)]
#[command(name = "doxflow", version, about = "Document catalog with AI assist")]
struct Cli {
    /// Base URL of the model server.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Model name to use for summaries and tag suggestions.
    #[arg(long, global = true)]
    model: Option<String>,

    /// Model request timeout in seconds.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// TOML config file for the model backend.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List documents, optionally filtered by a title/tag query.
    List {
        /// Case-insensitive substring matched against titles and tags.
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Show one document, with query occurrences marked.
    Show {
        /// Document id.
        id: String,

        /// Active search query for highlighting.
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Add a document through the upload workflow.
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,

        /// Tag to attach (repeatable).
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Ask the model for tag suggestions and accept them all.
        #[arg(long)]
        suggest: bool,
    },

    /// Delete a document by id (absent ids are a no-op).
    Delete {
        /// Document id.
        id: String,
    },

    /// Summarize a document through the preview workflow.
    Summarize {
        /// Document id.
        id: String,
    },

    /// Suggest tags for arbitrary text.
    Suggest {
        /// Read the text from a file.
        #[arg(long, conflicts_with = "content")]
        file: Option<PathBuf>,

        /// The text itself.
        #[arg(long)]
        content: Option<String>,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut catalog = DocumentCatalog::with_seed_documents();

    match cli.command {
        Commands::List { query } => {
            let listed = catalog.list(&query);
            if listed.is_empty() {
                println!("No documents match \"{query}\".");
            } else {
                for doc in listed {
                    print_document_line(doc);
                }
            }
        }

        Commands::Show { id, query } => {
            let doc = catalog
                .get(&id)
                .ok_or_else(|| miette::miette!("document not found: \"{id}\""))?;
            println!("{}", render_spans(&highlight(&doc.title, &query)));
            println!(
                "  id: {}  uploaded: {}  tags: {}",
                doc.id,
                doc.upload_date,
                doc.tags.join(", ")
            );
            println!();
            println!("{}", render_spans(&highlight(&doc.content, &query)));
        }

        Commands::Add {
            title,
            content,
            tags,
            suggest,
        } => {
            let mut workflow = UploadWorkflow::new();
            workflow.set_title(title);
            workflow.set_content(content);
            for tag in &tags {
                workflow.add_tag(tag);
            }

            if suggest {
                let gateway =
                    build_gateway(&cli.base_url, &cli.model, cli.timeout_secs, &cli.config)?;
                workflow.suggest(&gateway).into_diagnostic()?;
                let candidates: Vec<String> = workflow.suggestions().to_vec();
                println!("Suggested: {}", candidates.join(", "));
                for candidate in candidates {
                    workflow.accept_suggestion(&candidate);
                }
            }

            let id = workflow.submit(&mut catalog).into_diagnostic()?;
            println!("Added document {id}:");
            for doc in catalog.list("") {
                print_document_line(doc);
            }
        }

        Commands::Delete { id } => {
            catalog.delete(&id);
            println!("{} documents remain.", catalog.len());
        }

        Commands::Summarize { id } => {
            let gateway = build_gateway(&cli.base_url, &cli.model, cli.timeout_secs, &cli.config)?;
            let doc = catalog
                .get(&id)
                .ok_or_else(|| miette::miette!("document not found: \"{id}\""))?;
            let title = doc.title.clone();
            let mut preview = PreviewWorkflow::open(doc);
            match preview.summarize(&gateway) {
                PreviewState::Summarized(text) => {
                    println!("Summary of \"{title}\":");
                    println!("{text}");
                }
                PreviewState::Failed(message) => println!("{message}"),
                PreviewState::Idle | PreviewState::Summarizing => {}
            }
        }

        Commands::Suggest { file, content } => {
            let text = match (file, content) {
                (Some(path), _) => std::fs::read_to_string(&path).into_diagnostic()?,
                (None, Some(text)) => text,
                (None, None) => return Err(miette::miette!("pass --file or --content")),
            };
            let gateway = build_gateway(&cli.base_url, &cli.model, cli.timeout_secs, &cli.config)?;
            let suggestions = gateway.suggest_tags(&text).into_diagnostic()?;
            for tag in &suggestions.suggested_tags {
                println!("{tag}");
            }
        }
    }

    Ok(())
}

/// Resolve the model config (file first, then flag overrides) and build the
/// gateway.
fn build_gateway(
    base_url: &Option<String>,
    model: &Option<String>,
    timeout_secs: Option<u64>,
    config_path: &Option<PathBuf>,
) -> Result<AssistGateway> {
    let mut config = match config_path {
        Some(path) => OllamaConfig::from_toml(path).into_diagnostic()?,
        None => OllamaConfig::default(),
    };
    if let Some(url) = base_url {
        config.base_url = url.clone();
    }
    if let Some(model) = model {
        config.model = model.clone();
    }
    if let Some(secs) = timeout_secs {
        config.timeout_secs = secs;
    }
    Ok(AssistGateway::new(Box::new(OllamaClient::new(config))))
}

fn print_document_line(doc: &Document) {
    println!("[{}] {} ({})", doc.id, doc.title, doc.tags.join(", "));
}

/// Render highlight spans for the terminal, wrapping matches in « ».
fn render_spans(spans: &[HighlightSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        if span.matched {
            out.push('«');
            out.push_str(&span.text);
            out.push('»');
        } else {
            out.push_str(&span.text);
        }
    }
    out
}
