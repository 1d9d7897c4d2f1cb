use super::collator::{CollateOptions, Collator};
use crate::component::path_prompt::{prompt_directory, prompt_optional_path};
use crate::component::progress::create_progress_bar;
use crate::component::summary::print_outcome;
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::warn;
use rust_i18n::t;
use std::ffi::OsString;
use std::path::PathBuf;

/// 互動式合併元件
pub struct ChunkMerger {
    config: Config,
}

impl ChunkMerger {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("merger.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let Some(sources) = self.prompt_sources()? else {
            return Ok(());
        };

        let prefix: String = Input::new()
            .with_prompt(t!("merger.prompt_prefix"))
            .default(self.config.settings.merge.prefix.clone())
            .interact_text()?;
        let output = prompt_optional_path(&t!("merger.prompt_output"))?.map(PathBuf::from);

        let collator = Collator::new(sources, CollateOptions { prefix, output });
        let folders = collator.eligible_folders()?;

        if folders.is_empty() {
            println!("{}", style(t!("merger.no_folders")).yellow());
            return Ok(());
        }

        self.print_folders(&folders);

        if !self.confirm_merge()? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }

        println!("{}", style(t!("merger.moving")).cyan());
        let outcome = collator.with_progress(create_progress_bar(0)).run()?;

        print_outcome(&outcome);
        Ok(())
    }

    /// 依序輸入一個或多個來源資料夾
    fn prompt_sources(&self) -> Result<Option<Vec<PathBuf>>> {
        let mut settings = self.config.settings.clone();
        let mut sources = Vec::new();

        loop {
            let Some(input_path) =
                prompt_directory(&settings.recent_paths, &t!("merger.prompt_path"))?
            else {
                break;
            };
            let directory = PathBuf::from(&input_path);
            validate_directory_exists(&directory)?;

            add_recent_path(&mut settings, &input_path);
            if !sources.contains(&directory) {
                sources.push(directory);
            }

            let more = Confirm::new()
                .with_prompt(t!("merger.prompt_more"))
                .default(false)
                .interact()?;
            if !more {
                break;
            }
        }

        if sources.is_empty() {
            return Ok(None);
        }

        if let Err(e) = save_settings(&settings) {
            warn!("無法儲存路徑歷史: {e}");
        }

        Ok(Some(sources))
    }

    fn confirm_merge(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(t!("merger.confirm"))
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn print_folders(&self, folders: &[OsString]) {
        println!();
        println!(
            "{}",
            style(t!("merger.found_folders", count = folders.len())).green()
        );

        let display_count = folders.len().min(10);
        for folder in folders.iter().take(display_count) {
            println!("  {} {}", style("→").dim(), folder.to_string_lossy());
        }
        if folders.len() > display_count {
            println!(
                "  {} ... +{}",
                style("⋯").dim(),
                folders.len() - display_count
            );
        }
        println!();
    }
}
