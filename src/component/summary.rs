//! 執行結果輸出
//!
//! 固定先輸出移動數量，報告非空時完整列出每個失敗項目

use crate::tools::RunOutcome;
use console::style;
use log::info;
use rust_i18n::t;

pub fn print_outcome(outcome: &RunOutcome) {
    println!();
    println!(
        "{}",
        style(t!("summary.moved", count = outcome.moved)).green().bold()
    );

    if !outcome.report.is_empty() {
        println!();
        println!(
            "{}",
            style(t!("summary.errors", count = outcome.report.len())).red()
        );

        for (category, items) in outcome.report.categories() {
            println!("  {} ({}):", style(category).yellow(), items.len());
            for item in items {
                println!("    {} {}", style("•").dim(), item);
            }
        }
    }

    info!(
        "執行完成 - 移動: {}, 失敗: {}",
        outcome.moved,
        outcome.report.len()
    );
}
