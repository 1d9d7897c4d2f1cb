use super::partitioner::{PartitionOptions, Partitioner, PlannedChunk};
use crate::component::path_prompt::{prompt_directory, prompt_optional_path};
use crate::component::progress::create_progress_bar;
use crate::component::summary::print_outcome;
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::{MAX_CHUNK_SIZE, MAX_START_INDEX, MIN_CHUNK_SIZE, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::warn;
use rust_i18n::t;
use std::path::PathBuf;

/// 互動式檔案分組元件
pub struct FileChunker {
    config: Config,
}

impl FileChunker {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("chunker.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let Some(input_path) =
            prompt_directory(&self.config.settings.recent_paths, &t!("chunker.prompt_path"))?
        else {
            return Ok(());
        };
        let directory = PathBuf::from(&input_path);
        validate_directory_exists(&directory)?;

        {
            let mut settings = self.config.settings.clone();
            add_recent_path(&mut settings, &input_path);
            if let Err(e) = save_settings(&settings) {
                warn!("無法儲存路徑歷史: {e}");
            }
        }

        let options = self.prompt_options()?;

        println!("{}", style(t!("chunker.scanning")).dim());
        let partitioner = Partitioner::new(&directory, options);
        let plan = partitioner.plan()?;

        if plan.is_empty() {
            println!("{}", style(t!("chunker.no_files")).yellow());
            return Ok(());
        }

        self.print_plan(&plan);

        if !self.confirm_move()? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }

        println!("{}", style(t!("chunker.moving")).cyan());
        let total: usize = plan.iter().map(|c| c.files.len()).sum();
        let outcome = partitioner.with_progress(create_progress_bar(total)).run()?;

        print_outcome(&outcome);
        Ok(())
    }

    fn prompt_options(&self) -> Result<PartitionOptions> {
        let defaults = &self.config.settings.chunk;

        let chunk_size: usize = Input::new()
            .with_prompt(t!("chunker.prompt_count"))
            .default(defaults.chunk_size)
            .validate_with(|value: &usize| {
                if (MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(value) {
                    Ok(())
                } else {
                    Err(format!("{MIN_CHUNK_SIZE}..={MAX_CHUNK_SIZE}"))
                }
            })
            .interact_text()?;

        let start_index: usize = Input::new()
            .with_prompt(t!("chunker.prompt_start"))
            .default(defaults.start_index)
            .validate_with(|value: &usize| {
                if *value <= MAX_START_INDEX {
                    Ok(())
                } else {
                    Err(format!("0..={MAX_START_INDEX}"))
                }
            })
            .interact_text()?;

        let prefix: String = Input::new()
            .with_prompt(t!("chunker.prompt_prefix"))
            .default(defaults.prefix.clone())
            .allow_empty(true)
            .interact_text()?;

        let suffix: String = Input::new()
            .with_prompt(t!("chunker.prompt_suffix"))
            .default(defaults.suffix.clone())
            .allow_empty(true)
            .interact_text()?;

        let output = prompt_optional_path(&t!("chunker.prompt_output"))?.map(PathBuf::from);

        let sanitize = Confirm::new()
            .with_prompt(t!("chunker.prompt_sanitize"))
            .default(defaults.sanitize)
            .interact()?;

        Ok(PartitionOptions {
            chunk_size,
            start_index,
            prefix,
            suffix,
            output,
            sanitize,
        })
    }

    fn confirm_move(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(t!("chunker.confirm"))
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn print_plan(&self, plan: &[PlannedChunk]) {
        let total: usize = plan.iter().map(|c| c.files.len()).sum();

        println!();
        println!(
            "{}",
            style(t!("chunker.preview", files = total, chunks = plan.len())).green()
        );

        // 只顯示前後幾組
        let display_count = plan.len().min(10);
        for chunk in plan.iter().take(display_count) {
            println!(
                "  {} {}",
                style("→").dim(),
                t!(
                    "chunker.preview_line",
                    name = style(&chunk.name).cyan(),
                    count = chunk.files.len()
                )
            );
        }
        if plan.len() > display_count {
            println!("  {} ...", style("⋯").dim());
            if let Some(last) = plan.last() {
                println!(
                    "  {} {}",
                    style("→").dim(),
                    t!(
                        "chunker.preview_line",
                        name = style(&last.name).cyan(),
                        count = last.files.len()
                    )
                );
            }
        }
        println!();
    }
}
