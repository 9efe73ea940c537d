use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use petrel::content::{
    derive_slug_fields, group_tags, load_documents, merge_equivalent_tags, ContentDocument,
    SlugRecord, TagEntry,
};
use petrel::scaffold::ArticleScaffold;
use petrel::SiteConfig;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "blog", about = "Inspect and scaffold blog content")]
struct Args {
    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the slug and date prefix of content paths.
    Slug {
        paths: Vec<String>,

        #[arg(short, long, default_value = "--")]
        delimiter: String,

        #[arg(long)]
        json: bool,
    },

    /// List the merged tags used by the content in a directory.
    Tags {
        content_dir: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        json: bool,

        /// Order by usage instead of first appearance.
        #[arg(long)]
        popular: bool,
    },

    /// List the documents in a directory, newest first.
    Posts {
        content_dir: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Create a new, empty article.
    New {
        #[arg(short, long)]
        name: String,

        #[arg(long, default_value = "./content/posts/")]
        posts_dir: PathBuf,

        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match args.command {
        Command::Slug {
            paths,
            delimiter,
            json,
        } => slug(&paths, &delimiter, json),
        Command::Tags {
            content_dir,
            config,
            json,
            popular,
        } => tags(&content_dir, &load_config(config.as_deref())?, json, popular),
        Command::Posts {
            content_dir,
            config,
        } => posts(&content_dir, &load_config(config.as_deref())?),
        Command::New {
            name,
            posts_dir,
            date,
        } => new_article(&name, &posts_dir, date),
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => {
            log::info!("loading config from '{}'", path.display());
            SiteConfig::from_path(path)
                .with_context(|| format!("failed to load config from '{}'", path.display()))
        }
        None => Ok(SiteConfig::default()),
    }
}

#[derive(Serialize)]
struct SlugOutput<'a> {
    path: &'a str,
    #[serde(flatten)]
    record: SlugRecord,
}

fn slug(paths: &[String], delimiter: &str, json: bool) -> Result<()> {
    let records = paths
        .iter()
        .map(|path| SlugOutput {
            path,
            record: derive_slug_fields(path, delimiter),
        })
        .collect::<Vec<_>>();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for SlugOutput { path, record } in records {
        println!("{path}\t{}\t{}", record.slug, record.date_prefix);
    }

    Ok(())
}

fn load(content_dir: &Path, config: &SiteConfig) -> Result<Vec<ContentDocument>> {
    load_documents(content_dir, config)
        .with_context(|| format!("failed to load content from '{}'", content_dir.display()))
}

fn tags(content_dir: &Path, config: &SiteConfig, json: bool, popular: bool) -> Result<()> {
    let documents = load(content_dir, config)?;

    let grouped = group_tags(
        documents
            .iter()
            .map(|document| (document.slug.slug.clone(), &document.meta.tags)),
    );
    let merged = merge_equivalent_tags(&grouped);

    let entries: Vec<&TagEntry<String>> = if popular {
        merged.by_popularity()
    } else {
        merged.iter().collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        println!(
            "{}\t{}\t{}",
            entry.name,
            entry.total_count,
            entry.path(config)
        );
    }

    Ok(())
}

fn posts(content_dir: &Path, config: &SiteConfig) -> Result<()> {
    for document in load(content_dir, config)? {
        let redirect = document.slug.edit_redirect(config);

        println!(
            "{}\t{}\t{:?}\t{}\t{}",
            config.prefixed(&document.slug.slug),
            document.slug.date_prefix,
            document.kind,
            document.meta.title,
            redirect.to
        );
    }

    Ok(())
}

fn new_article(name: &str, posts_dir: &Path, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let scaffold = ArticleScaffold::new(date, name)?;

    let path = scaffold.write_to(posts_dir)?;
    println!("Location: {}", path.display());

    Ok(())
}
