//! Builds a tree from the command line, prints it in pre-order as `primary,secondary,is_root`
//! lines and finishes with the depth of the cursor (`-1` for an empty tree).

use std::io::{self, Write};

use clap::{ArgAction, Parser};
use cursor_bst::Tree;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Inserts values into a cursor BST and prints the result
#[derive(Parser, Debug)]
#[command(name = "demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Primary values, inserted in the given order
    #[arg(allow_negative_numbers = true, default_values_t = [3, 4, 5, 6, 7])]
    values: Vec<i64>,

    /// Secondary values, paired with every insert after the first
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [9, 10, 11, 12]
    )]
    sub_values: Vec<i64>,

    /// Move the cursor back to the root before every insert
    #[arg(short, long)]
    reset_cursor: bool,

    /// Log more (-d, -dd, -ddd). `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // Logs go to stderr so stdout only carries the tree.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Inserts `values` through the tree's cursor. Every insert after the first takes its secondary
/// value from `sub_values` while they last.
fn build(values: &[i64], sub_values: &[i64], reset_cursor: bool) -> Tree<i64> {
    let mut tree = Tree::new();
    let mut cursor = tree.cursor_mut();
    for (i, &value) in values.iter().enumerate() {
        if reset_cursor {
            cursor.move_to_root();
        }
        match i.checked_sub(1).and_then(|j| sub_values.get(j)) {
            Some(&sub_value) => cursor.insert_pair(value, sub_value),
            None => cursor.insert(value),
        };
    }
    tree
}

/// Writes one `primary,secondary,is_root` line per node in pre-order, then the cursor depth.
fn render(tree: &Tree<i64>, mut out: impl Write) -> io::Result<()> {
    for node in tree {
        writeln!(
            out,
            "{},{},{}",
            node.primary(),
            node.secondary(),
            node.is_root()
        )?;
    }
    let depth = tree.cursor().depth().map_or(-1, |d| d as i64);
    writeln!(out, "{depth}")
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);
    tracing::debug!(?cli, "starting");

    let tree = build(&cli.values, &cli.sub_values, cli.reset_cursor);
    render(&tree, io::stdout().lock())
}
