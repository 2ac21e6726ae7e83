//! Preen CLI
//!
//! A debugging tool for the attribute validation core: run one attribute
//! occurrence through the dispatch surface and print the outcome.
//!
//! ```text
//! preen img align absmiddle
//! preen a href 'docs\index.html'
//! preen input disabled
//! ```

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use preen_common::report::Severity;
use preen_dom::{AttVal, Node, Versions};
use preen_html::{Configuration, Lexer, check_attribute, checker_for};

/// Validate one HTML attribute occurrence and print the diagnostics.
#[derive(Parser)]
#[command(name = "preen", version)]
struct Args {
    /// Element the attribute occurs on, e.g. `img`.
    element: String,

    /// Attribute name, e.g. `align`.
    attribute: String,

    /// Attribute value; omit for a minimized attribute like `disabled`.
    value: Option<String>,

    /// Leave backslashes in URL-valued attributes as written.
    #[arg(long)]
    no_fix_backslash: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut lexer = Lexer::new(Configuration {
        fix_backslash: !args.no_fix_backslash,
    });
    let node = Node::new(&args.element);
    let mut attval = match &args.value {
        Some(value) => AttVal::new(&args.attribute, value),
        None => AttVal::minimized(&args.attribute),
    };

    if checker_for(&args.attribute).is_none() {
        println!(
            "{} no checker registered for \"{}\"",
            "note:".dimmed(),
            args.attribute
        );
    }

    let before = attval.value.clone();
    check_attribute(&mut lexer, &node, &mut attval);

    if attval.value != before {
        println!(
            "value rewritten: {:?} -> {:?}",
            before.as_deref().unwrap_or(""),
            attval.value.as_deref().unwrap_or("")
        );
    }

    for diagnostic in lexer.report.diagnostics() {
        match diagnostic.code.severity() {
            Severity::Warning => println!("{}", diagnostic.yellow()),
            Severity::Info => println!("{}", diagnostic.cyan()),
        }
    }

    if lexer.versions != Versions::ALL {
        println!(
            "{} document no longer conforms to standard HTML dialects",
            "note:".dimmed()
        );
    }

    if lexer.report.is_empty() {
        println!("{}", "ok".green());
    }

    // Diagnostics are advisory; the cleaning model never fails.
    Ok(())
}
