use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sqlgen::bootstrap::DialectCloner;
use sqlgen::codegen::compiler::JisonCli;
use sqlgen::codegen::post_process::AnchorMode;
use sqlgen::common::paths::ProjectLayout;
use sqlgen::driver::{resolve_targets, BuildDriver};
use sqlgen::recipe::{recipes_for_dialect, RecipeTable};
use sqlgen::registry;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generates SQL parser modules from jison grammar definitions"
)]
struct Cli {
    /// Root folder holding grammar definition files
    #[arg(long, default_value = "parse/jison")]
    grammar_root: PathBuf,

    /// Root folder receiving generated parser modules
    #[arg(long, default_value = "parse")]
    output_root: PathBuf,

    /// Skip post-processing steps whose anchor is missing instead of
    /// failing the target
    #[arg(long)]
    best_effort: bool,

    /// Bootstrap a new dialect from an existing one before generating
    #[arg(long, num_args = 2, value_names = ["SOURCE", "TARGET"])]
    new: Option<Vec<String>>,

    /// Parser names, name prefixes, or 'all'
    targets: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let layout = ProjectLayout::new(cli.grammar_root, cli.output_root);

    let mut table = RecipeTable::with_static_recipes(&layout);
    discover_into(&layout, &mut table)?;

    let mut targets = cli.targets;
    if let Some(clone_spec) = &cli.new {
        let (source, target) = (&clone_spec[0], &clone_spec[1]);
        println!("Generating new parser '{}' based on '{}'...", target, source);
        DialectCloner::new(&layout)
            .clone_dialect(&table, source, target)
            .with_context(|| format!("cloning '{}' into '{}'", source, target))?;
        // Fresh discovery pass so the clone's recipes register.
        discover_into(&layout, &mut table)?;
        targets.push(target.clone());
    }

    let resolved = match resolve_targets(&targets, &table) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("{}", err);
            let options: Vec<&str> = table.names().map(String::as_str).collect();
            eprintln!("\nPossible options are:\n  all\n  {}", options.join("\n  "));
            return Ok(ExitCode::from(2));
        }
    };

    let compiler = JisonCli;
    let anchor_mode = if cli.best_effort {
        AnchorMode::BestEffort
    } else {
        AnchorMode::Strict
    };
    let report = BuildDriver::new(&table, &compiler, anchor_mode).run(&resolved);

    for outcome in &report.outcomes {
        if let Err(err) = &outcome.result {
            eprintln!("'{}' failed: {}", outcome.name, err);
        }
    }
    println!(
        "Generated {} of {} parsers",
        report.succeeded(),
        report.outcomes.len()
    );
    if report.all_succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Run a discovery pass and merge the derived recipes into the table.
fn discover_into(layout: &ProjectLayout, table: &mut RecipeTable) -> Result<()> {
    let mut recipes = Vec::new();
    for (dialect, structure) in registry::discover(layout).context("scanning grammar root")? {
        recipes.extend(recipes_for_dialect(layout, &dialect, &structure));
    }
    table.merge(recipes);
    Ok(())
}
