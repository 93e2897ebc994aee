//! Loc8r - Main Entry Point
//!
//! Parses an HTML file, picks elements, and prints their locators.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use loc8r_devtools::Inspector;
use loc8r_dom::{Document, Node, NodeId};
use loc8r_html::HtmlParser;
use loc8r_locator::resolve::{resolve_css, resolve_xpath};
use loc8r_locator::{Locator, LocatorConfig, LocatorEngine, LocatorKind};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "loc8r", version, about = "Generate CSS, XPath and JS locators for HTML elements")]
struct Cli {
    /// HTML file to inspect
    file: PathBuf,

    /// Pick the element with this id
    #[arg(long, conflicts_with_all = ["xpath", "css"])]
    id: Option<String>,

    /// Pick elements matched by an XPath (`/a/b[2]`, `//x[@id="y"]/z`)
    #[arg(long, conflicts_with = "css")]
    xpath: Option<String>,

    /// Pick elements matched by a CSS selector (`#id`, `tag.class:nth-child(k)`)
    #[arg(long)]
    css: Option<String>,

    /// Print only this locator kind
    #[arg(long, value_enum)]
    kind: Option<Kind>,

    /// Emit one JSON object per element
    #[arg(long)]
    json: bool,

    /// Resolve each generated locator and report mismatches
    #[arg(long)]
    verify: bool,

    /// Write an export record for the picked element into this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Tag where relative XPath ascent stops
    #[arg(long, default_value = "body")]
    boundary: String,

    /// Characters kept in the text preview
    #[arg(long, default_value_t = 50)]
    preview_len: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Css,
    Xpath,
    AbsoluteXpath,
    JsPath,
}

impl From<Kind> for LocatorKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Css => LocatorKind::Css,
            Kind::Xpath => LocatorKind::XPath,
            Kind::AbsoluteXpath => LocatorKind::AbsoluteXPath,
            Kind::JsPath => LocatorKind::JsPath,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let html = fs::read_to_string(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;
    let doc = HtmlParser::new()
        .parse_with_url(&html, &cli.file.display().to_string())
        .with_context(|| format!("parsing {}", cli.file.display()))?;

    let config = LocatorConfig {
        boundary_tag: cli.boundary.to_ascii_lowercase(),
        text_preview_len: cli.preview_len,
        ..LocatorConfig::default()
    };

    let targets = pick_targets(&cli, &doc)?;
    if targets.is_empty() {
        bail!("no element matched");
    }
    tracing::info!("Inspecting {} element(s) in {}", targets.len(), doc.url());

    let engine = LocatorEngine::new(config.clone());
    let mut mismatches = 0;

    for &node in &targets {
        let locator = engine
            .locate(doc.tree(), node)
            .with_context(|| format!("generating locators for {node}"))?;

        print_locator(&cli, &locator)?;

        if cli.verify {
            mismatches += verify(&doc, node, &locator)?;
        }
    }

    if let Some(dir) = &cli.export {
        let [node] = targets.as_slice() else {
            bail!("--export needs exactly one picked element, got {}", targets.len());
        };
        export(&doc, *node, config, dir)?;
    }

    if mismatches > 0 {
        bail!("{mismatches} locator(s) did not resolve back to their element");
    }
    Ok(())
}

fn pick_targets(cli: &Cli, doc: &Document) -> Result<Vec<NodeId>> {
    let tree = doc.tree();

    if let Some(id) = &cli.id {
        return Ok(doc.get_element_by_id(id).into_iter().collect());
    }
    if let Some(expr) = &cli.xpath {
        return Ok(resolve_xpath(tree, expr)?);
    }
    if let Some(selector) = &cli.css {
        return Ok(resolve_css(tree, selector)?);
    }

    Ok(tree
        .descendants(tree.root())
        .filter(|&n| tree.get(n).is_some_and(Node::is_element))
        .collect())
}

fn print_locator(cli: &Cli, locator: &Locator) -> Result<()> {
    match (cli.kind, cli.json) {
        (Some(kind), _) => println!("{}", locator.get(kind.into())),
        (None, true) => println!("{}", serde_json::to_string(locator)?),
        (None, false) => {
            println!("<{}>", locator.tag_name);
            for kind in LocatorKind::ALL {
                println!("  {:<18} {}", kind.label(), locator.get(kind));
            }
            let attrs = &locator.attributes;
            println!("  {:<18} {}", "ID", attrs.id);
            println!("  {:<18} {}", "Name", attrs.name);
            println!("  {:<18} {}", "Class", attrs.class);
            println!("  {:<18} {}", "Text", attrs.text);
        }
    }
    Ok(())
}

/// Count generated locators that do not select exactly `node`
fn verify(doc: &Document, node: NodeId, locator: &Locator) -> Result<usize> {
    let tree = doc.tree();
    let checks = [
        (LocatorKind::Css, resolve_css(tree, &locator.css_selector)),
        (LocatorKind::XPath, resolve_xpath(tree, &locator.xpath)),
        (LocatorKind::AbsoluteXPath, resolve_xpath(tree, &locator.absolute_xpath)),
    ];

    let mut mismatches = 0;
    for (kind, resolved) in checks {
        let resolved = resolved?;
        if resolved != [node] {
            tracing::warn!(
                "{} '{}' selects {} element(s), expected only {}",
                kind,
                locator.get(kind),
                resolved.len(),
                node
            );
            mismatches += 1;
        }
    }
    Ok(mismatches)
}

fn export(doc: &Document, node: NodeId, config: LocatorConfig, dir: &Path) -> Result<()> {
    let mut inspector = Inspector::new(config);
    inspector.activate();
    inspector.click(doc, node)?;

    let record = inspector.export()?;
    let path = dir.join(record.file_name());
    fs::write(&path, record.to_json_pretty()?)
        .with_context(|| format!("writing {}", path.display()))?;

    tracing::info!("Selectors exported to {}", path.display());
    Ok(())
}
