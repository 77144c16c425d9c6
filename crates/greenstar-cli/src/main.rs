#![forbid(unsafe_code)]

//! Greenstar CLI
//!
//! Command-line front-end for the blog shell and the linked list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use greenstar::{App, LinkedList, SiteConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Greenstar Command-Line Interface
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Site config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the linked list walkthrough: append, set(1, 25), remove(0)
    List {
        /// Values to append
        #[arg(default_values_t = [10, 20, 30], allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Resolve paths against the blog's route table
    Route {
        /// Paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the site's posts
    Posts,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let site = match &args.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading site config from {}", path.display()))?,
        None => SiteConfig::default(),
    };
    debug!(title = %site.title, posts = site.posts.len(), "Site loaded");

    match args.command {
        Command::List { values } => run_list(values),
        Command::Route { paths } => run_route(site, &paths),
        Command::Posts => {
            run_posts(&site);
            Ok(())
        }
    }
}

fn run_list(values: Vec<i64>) -> Result<()> {
    for line in list_walkthrough(values)? {
        println!("{}", line);
    }
    Ok(())
}

/// Append `values`, then `set(1, 25)` and `remove(0)` where the list is
/// long enough. Returns the lines `run_list` prints.
fn list_walkthrough(values: Vec<i64>) -> Result<Vec<String>> {
    let mut list: LinkedList<i64> = values.into_iter().collect();
    let mut lines = list_lines(&list)?;

    if list.size() > 1 {
        list.set(1, 25).context("set(1, 25)")?;
    }
    if !list.is_empty() {
        list.remove(0).context("remove(0)")?;
    }
    lines.extend(list_lines(&list)?);
    lines.push(format!("size: {}", list.size()));
    Ok(lines)
}

fn list_lines(list: &LinkedList<i64>) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(list.size());
    for i in 0..list.size() {
        lines.push(list.get(i)?.to_string());
    }
    Ok(lines)
}

fn run_route(site: SiteConfig, paths: &[String]) -> Result<()> {
    let mut app = App::blog(site).context("building app")?;
    app.mount("#app").context("mounting app")?;

    for path in paths {
        match app.navigate(path) {
            Ok(page) => {
                print!("{} -> {} [{}]", path, page.view, page.title);
                if !page.params.is_empty() {
                    print!(" {}", page.params);
                }
                if let Some(from) = &page.redirected_from {
                    print!(" (redirected from {})", from);
                }
                println!();
                for line in &page.body {
                    println!("    {}", line);
                }
            }
            Err(e) => println!("{} -> error: {}", path, e),
        }
    }
    Ok(())
}

fn run_posts(site: &SiteConfig) {
    println!("{}", site.title);
    for post in &site.posts {
        println!("  #{} [{}] {}", post.id, post.category, post.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_list_defaults() {
        let values = match Args::try_parse_from(["greenstar", "list"]).map(|a| a.command) {
            Ok(Command::List { values }) => values,
            _ => Vec::new(),
        };
        assert_eq!(values, vec![10, 20, 30]);
    }

    fn walkthrough(values: Vec<i64>) -> Vec<String> {
        match list_walkthrough(values) {
            Ok(lines) => lines,
            Err(e) => panic!("walkthrough failed: {e:#}"),
        }
    }

    #[test]
    fn test_list_walkthrough_default_values() {
        assert_eq!(
            walkthrough(vec![10, 20, 30]),
            vec!["10", "20", "30", "25", "30", "size: 2"]
        );
    }

    #[test]
    fn test_list_walkthrough_single_value_skips_set() {
        assert_eq!(walkthrough(vec![7]), vec!["7", "size: 0"]);
    }

    #[test]
    fn test_list_walkthrough_two_values() {
        assert_eq!(walkthrough(vec![-1, 5]), vec!["-1", "5", "25", "size: 1"]);
    }

    #[test]
    fn test_list_walkthrough_empty_list() {
        assert_eq!(walkthrough(Vec::new()), vec!["size: 0"]);
    }

    #[test]
    fn test_route_requires_a_path() {
        assert!(Args::try_parse_from(["greenstar", "route"]).is_err());
    }
}
