//! scip-lsp - SCIP to LSP translation toolkit
//!
//! This binary exposes the geometry and symbol mappers and the Bazel build
//! target resolver from `scip-lsp-core` as subcommands.

use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use lsp_types::Uri;
use scip_lsp_core::build::{QueryDirection, TargetQuery, target_label};
use scip_lsp_core::mapper::{classify_kind, classify_raw_kind, occurrence_to_location, parse_range};
use scip_lsp_core::scip::{Document, ScipSymbolKind};
use scip_lsp_core::{BuildTargetResolver, Config, SymbolMapper};

mod args;
mod logging;

use args::{Args, Command};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level, args.log_json)?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting scip-lsp");

    let config = if let Some(config_path) = &args.config {
        Config::load_from(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        Config::load().context("failed to load configuration")?
    };

    run(args.command, &config)
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Target { file, root } => {
            let root = workspace_root(root, config)?;
            let file = absolute(&file)?;
            let target = BuildTargetResolver::from_config(&config.build)
                .resolve_build_target(&root, &file)
                .with_context(|| format!("failed to resolve build target for {}", file.display()))?;
            println!("{target}");
        }
        Command::Marker {
            file,
            root,
            include_marker,
        } => {
            let root = workspace_root(root, config)?;
            let file = absolute(&file)?;
            let marker = BuildTargetResolver::from_config(&config.build)
                .find_build_marker(&root, &file, include_marker)
                .with_context(|| format!("failed to find build marker for {}", file.display()))?;
            println!("{}", marker.display());
        }
        Command::Range { values } => {
            let parsed = parse_range(&values);
            if !parsed.is_valid() {
                tracing::warn!(?values, "malformed SCIP range");
            }
            println!("{}", serde_json::to_string(&parsed.into_range())?);
        }
        Command::Kind { kind } => {
            let (scip, lsp) = if let Ok(tag) = kind.parse::<i32>() {
                (
                    ScipSymbolKind::from_i32(tag).map(ScipSymbolKind::as_str),
                    classify_raw_kind(tag),
                )
            } else {
                let parsed: ScipSymbolKind = kind.parse()?;
                (Some(parsed.as_str()), classify_kind(parsed))
            };
            let output = serde_json::json!({ "scipKind": scip, "lspKind": lsp });
            println!("{output}");
        }
        Command::Symbols { document } => {
            let doc = read_document(&document)?;
            let symbols =
                SymbolMapper::new(config.symbols.detail_prefix.clone()).document_symbols(&doc);
            tracing::debug!(
                path = %doc.relative_path,
                count = symbols.len(),
                "document symbols mapped"
            );
            println!("{}", serde_json::to_string_pretty(&symbols)?);
        }
        Command::Locations {
            document,
            uri,
            symbol,
        } => {
            let uri = Uri::from_str(&uri)
                .map_err(|_| anyhow::anyhow!("invalid document URI {uri}"))?;
            let doc = read_document(&document)?;
            let locations: Vec<_> = doc
                .occurrences
                .iter()
                .filter(|occ| symbol.as_ref().is_none_or(|s| &occ.symbol == s))
                .map(|occ| occurrence_to_location(&uri, occ))
                .collect();
            println!("{}", serde_json::to_string_pretty(&locations)?);
        }
        Command::Query {
            files,
            root,
            deps,
            rdeps,
            universe,
            depth,
            kinds,
            any_kind,
            tags,
            filter,
        } => {
            let root = workspace_root(root, config)?;
            let resolver = BuildTargetResolver::from_config(&config.build);

            let mut targets = Vec::with_capacity(files.len());
            for file in &files {
                let file = absolute(file)?;
                let target = resolver.resolve_build_target(&root, &file).with_context(|| {
                    format!("failed to resolve build target for {}", file.display())
                })?;
                let label = target_label(&target);
                if !targets.contains(&label) {
                    targets.push(label);
                }
            }

            let direction = if deps {
                QueryDirection::Deps
            } else if rdeps {
                QueryDirection::Rdeps { universe }
            } else {
                QueryDirection::Targets
            };

            let kinds = if any_kind {
                Vec::new()
            } else if kinds.is_empty() {
                config.build.query_kinds.clone()
            } else {
                kinds
            };

            let mut query = TargetQuery::new(targets)
                .direction(direction)
                .kinds(kinds)
                .tags(tags);
            if let Some(depth) = depth {
                query = query.depth(depth);
            }
            if let Some(filter) = filter {
                query = query.filter(filter);
            }
            println!("{}", query.expression()?);
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse SCIP document {}", path.display()))
}

/// Workspace root from the command line, the configuration, or the current directory.
fn workspace_root(root: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let root = root.unwrap_or_else(|| config.workspace_root_or(&cwd));
    absolute(&root)
}

/// Absolute form of `path` with `.` and `..` resolved lexically.
fn absolute(path: &Path) -> Result<PathBuf> {
    let path =
        std::path::absolute(path).with_context(|| format!("invalid path {}", path.display()))?;

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
