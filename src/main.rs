use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use ordered_tree::{Layout, Tree};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LETTERS: [&str; 7] = ["M", "A", "F", "X", "U", "E", "N"];
const DEFAULT_NUMBERS: [i64; 11] = [50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45];

#[derive(Parser, Debug)]
#[command(
    name = "ordered-tree-demo",
    about = "Builds an ordered tree from the given values and prints what it knows about it"
)]
struct Cli {
    /// Values to insert, in order. Defaults to a small sample.
    values: Vec<String>,
    /// Parse values as integers instead of comparing them as text.
    #[arg(long)]
    numeric: bool,
    /// Spaces per level when drawing the tree.
    #[arg(long, default_value_t = 4)]
    indent: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let layout = Layout::default().indent(cli.indent);

    if cli.numeric {
        let values = if cli.values.is_empty() {
            DEFAULT_NUMBERS.to_vec()
        } else {
            cli.values
                .iter()
                .map(|v| {
                    v.parse::<i64>()
                        .with_context(|| format!("`{}` is not an integer", v))
                })
                .collect::<Result<Vec<_>>>()?
        };
        report(values, &layout)
    } else {
        let values = if cli.values.is_empty() {
            DEFAULT_LETTERS.iter().map(|s| s.to_string()).collect()
        } else {
            cli.values
        };
        report(values, &layout)
    }
}

fn report<T>(values: Vec<T>, layout: &Layout) -> Result<()>
where
    T: Ord + Clone + Display,
{
    let mut tree = Tree::new();
    let mut duplicates = 0;
    for value in values.iter().cloned() {
        if !tree.insert(value) {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        warn!(duplicates, "dropped values that were already in the tree");
    }
    info!(nodes = tree.len(), "built tree");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Tree structure:")?;
    tree.display_tree_with(layout, &mut out)?;
    writeln!(out)?;
    writeln!(out, "Inorder (sorted): {}", join(tree.inorder()))?;
    writeln!(out, "Preorder:         {}", join(tree.preorder()))?;
    writeln!(out, "Postorder:        {}", join(tree.postorder()))?;
    writeln!(out)?;
    for value in &values {
        let found = if tree.search(value) { "found" } else { "not found" };
        writeln!(out, "Search {}: {}", value, found)?;
    }
    writeln!(out)?;
    writeln!(out, "Height:      {}", tree.height())?;
    writeln!(
        out,
        "Total nodes: {}",
        tree.count_nodes().context("counting nodes")?
    )?;
    writeln!(out, "Minimum:     {}", tree.find_min().context("finding minimum")?)?;
    writeln!(out, "Maximum:     {}", tree.find_max().context("finding maximum")?)?;

    Ok(())
}

fn join<'a, T: Display + 'a>(values: impl Iterator<Item = &'a T>) -> String {
    values
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
