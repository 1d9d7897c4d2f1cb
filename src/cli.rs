//! 命令列介面
//!
//! 未指定的參數依序使用 settings.json 的值與內建預設值

use crate::component::{
    CollateOptions, Collator, PartitionOptions, Partitioner, PlannedChunk, create_progress_bar,
    print_outcome,
};
use crate::config::UserSettings;
use crate::tools::{MAX_CHUNK_SIZE, MAX_START_INDEX, MIN_CHUNK_SIZE};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use console::style;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "chunk_organize", version)]
#[command(about = "Split a folder into numbered chunk folders and merge them back", long_about = None)]
pub struct Cli {
    /// 未指定時開啟互動選單
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Group all first-level files into numbered subfolders
    Partition(PartitionArgs),

    /// Collate all files in prefixed first-level subfolders back into one folder
    Collate(CollateArgs),
}

#[derive(Debug, Args)]
pub struct PartitionArgs {
    /// Folder whose first-level files are grouped
    pub input_path: PathBuf,

    /// Number of files per chunked folder
    #[arg(short, long, value_parser = clap::value_parser!(u16).range((MIN_CHUNK_SIZE as i64)..=(MAX_CHUNK_SIZE as i64)))]
    pub count: Option<u16>,

    /// Starting folder number
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(0..=(MAX_START_INDEX as i64)))]
    pub start: Option<u16>,

    /// Prefix of each chunked folder
    #[arg(long)]
    pub prefix: Option<String>,

    /// Suffix of each chunked folder
    #[arg(long)]
    pub suffix: Option<String>,

    /// Output path to create subfolders in
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep file names as they are
    #[arg(long)]
    pub no_sanitize: bool,

    /// Print the planned folders without moving anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CollateArgs {
    /// Folders containing the chunked subfolders
    #[arg(required = true)]
    pub input_paths: Vec<PathBuf>,

    /// Prefix of each chunked folder
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Output path, defaults to the first input path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PartitionArgs {
    #[must_use]
    pub fn to_options(&self, settings: &UserSettings) -> PartitionOptions {
        let defaults = &settings.chunk;
        PartitionOptions {
            chunk_size: self.count.map_or(defaults.chunk_size, usize::from),
            start_index: self.start.map_or(defaults.start_index, usize::from),
            prefix: self.prefix.clone().unwrap_or_else(|| defaults.prefix.clone()),
            suffix: self.suffix.clone().unwrap_or_else(|| defaults.suffix.clone()),
            output: self.output.clone(),
            sanitize: defaults.sanitize && !self.no_sanitize,
        }
    }
}

impl CollateArgs {
    #[must_use]
    pub fn to_options(&self, settings: &UserSettings) -> CollateOptions {
        CollateOptions {
            prefix: self
                .prefix
                .clone()
                .unwrap_or_else(|| settings.merge.prefix.clone()),
            output: self.output.clone(),
        }
    }
}

pub fn run_command(command: &Command, settings: &UserSettings) -> Result<()> {
    match command {
        Command::Partition(args) => run_partition(args, settings),
        Command::Collate(args) => run_collate(args, settings),
    }
}

fn run_partition(args: &PartitionArgs, settings: &UserSettings) -> Result<()> {
    let partitioner = Partitioner::new(&args.input_path, args.to_options(settings));

    if args.dry_run {
        print_plan(&partitioner.plan()?);
        return Ok(());
    }

    let outcome = partitioner.with_progress(create_progress_bar(0)).run()?;
    print_outcome(&outcome);
    Ok(())
}

fn run_collate(args: &CollateArgs, settings: &UserSettings) -> Result<()> {
    let collator = Collator::new(args.input_paths.clone(), args.to_options(settings));
    let outcome = collator.with_progress(create_progress_bar(0)).run()?;
    print_outcome(&outcome);
    Ok(())
}

fn print_plan(plan: &[PlannedChunk]) {
    for chunk in plan {
        println!("{}/", style(&chunk.name).cyan().bold());
        for file in &chunk.files {
            println!("  {}", file.to_string_lossy());
        }
    }
}
