use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_i18n::t;
use std::path::Path;

/// 從最近使用的路徑中選擇，或輸入新路徑；按 ESC 回傳 `None`
pub fn prompt_directory(recent_paths: &[String], prompt: &str) -> Result<Option<String>> {
    if recent_paths.is_empty() {
        return prompt_new_path(prompt).map(Some);
    }

    let mut options: Vec<String> = recent_paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let indicator = if Path::new(p).is_dir() {
                t!("common.path_exists")
            } else {
                t!("common.path_missing")
            };
            format!("{} [{}] {}", i + 1, indicator, p)
        })
        .collect();
    options.push(t!("common.new_path").to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("common.select_path"))
        .items(&options)
        .default(0)
        .interact_opt()?;

    match selection {
        None => Ok(None),
        Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
        Some(_) => prompt_new_path(prompt).map(Some),
    }
}

fn prompt_new_path(prompt: &str) -> Result<String> {
    let path: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(path.trim().to_string())
}

/// 可留空的路徑輸入，留空回傳 `None`
pub fn prompt_optional_path(prompt: &str) -> Result<Option<String>> {
    let path: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let path = path.trim();
    Ok((!path.is_empty()).then(|| path.to_string()))
}
