use crate::config::load::SETTINGS_FILE;
use crate::config::save::save_settings;
use crate::config::types::{ChunkSettings, Config, Language};
use crate::menu::handlers::{run_chunk_merger, run_file_chunker};
use crate::tools::{MAX_CHUNK_SIZE, MAX_START_INDEX, MIN_CHUNK_SIZE};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use rust_i18n::t;
use std::path::Path;

pub fn show_main_menu(term: &Term, config: &mut Config) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_chunk"),
        t!("main_menu.opt_merge"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_file_chunker(term, config)?;
            reload_recent_paths(config);
            Ok(true)
        }
        Some(1) => {
            run_chunk_merger(term, config)?;
            reload_recent_paths(config);
            Ok(true)
        }
        Some(2) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(3) | None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 元件會自行寫入路徑歷史，回到選單時重新讀取
fn reload_recent_paths(config: &mut Config) {
    if let Ok(settings) = Config::load_settings(Path::new(SETTINGS_FILE)) {
        config.settings.recent_paths = settings.recent_paths;
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let options = vec![
            t!("settings.opt_chunk"),
            t!("settings.opt_merge"),
            t!("settings.opt_language"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => show_chunk_settings_menu(term, config)?,
            Some(1) => show_merge_settings_menu(term, config)?,
            Some(2) => show_language_menu(term, config)?,
            Some(3) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// 分組預設值設定
fn show_chunk_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.opt_chunk")).cyan().bold());
    println!(
        "\n{} {}\n",
        style(t!("settings.current")).dim(),
        config.settings.chunk
    );

    let current = &config.settings.chunk;

    let chunk_size: usize = Input::new()
        .with_prompt(t!("chunker.prompt_count"))
        .default(current.chunk_size)
        .validate_with(|value: &usize| {
            if (MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(value) {
                Ok(())
            } else {
                Err(format!("{MIN_CHUNK_SIZE}..={MAX_CHUNK_SIZE}"))
            }
        })
        .interact_text_on(term)?;

    let start_index: usize = Input::new()
        .with_prompt(t!("chunker.prompt_start"))
        .default(current.start_index)
        .validate_with(|value: &usize| {
            if *value <= MAX_START_INDEX {
                Ok(())
            } else {
                Err(format!("0..={MAX_START_INDEX}"))
            }
        })
        .interact_text_on(term)?;

    let prefix: String = Input::new()
        .with_prompt(t!("chunker.prompt_prefix"))
        .default(current.prefix.clone())
        .allow_empty(true)
        .interact_text_on(term)?;

    let suffix: String = Input::new()
        .with_prompt(t!("chunker.prompt_suffix"))
        .default(current.suffix.clone())
        .allow_empty(true)
        .interact_text_on(term)?;

    let sanitize = Confirm::new()
        .with_prompt(t!("chunker.prompt_sanitize"))
        .default(current.sanitize)
        .interact_on(term)?;

    let updated = ChunkSettings {
        chunk_size,
        start_index,
        prefix,
        suffix,
        sanitize,
    };

    if updated != config.settings.chunk {
        config.settings.chunk = updated;
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            config.settings.chunk
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 合併預設前綴設定
fn show_merge_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.opt_merge")).cyan().bold());

    let prefix: String = Input::new()
        .with_prompt(t!("merger.prompt_prefix"))
        .default(config.settings.merge.prefix.clone())
        .interact_text_on(term)?;

    if prefix != config.settings.merge.prefix {
        config.settings.merge.prefix = prefix;
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            config.settings.merge.prefix
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = [Language::EnUs, Language::ZhTw];

    let items: Vec<String> = languages.iter().map(ToString::to_string).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            selected_lang
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

pub fn print_goodbye() {
    println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
}
