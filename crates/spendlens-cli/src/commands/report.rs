//! Report and analyze command implementations

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use spendlens_core::report::Tone;
use spendlens_core::{
    analyze_stats, format_money, AnalysisConfig, FilePayload, FileReport, Summary,
};
use tracing::info;

use super::{read_input, truncate};

pub fn cmd_report(file: &Path, config: &AnalysisConfig, json: bool) -> Result<()> {
    let content = read_input(file)?;
    let payloads = FilePayload::list_from_json(&content)
        .with_context(|| format!("Invalid file payload in {}", file.display()))?;

    let reports: Vec<FileReport> = payloads
        .iter()
        .map(|p| FileReport::build(p, config))
        .collect();
    info!(files = reports.len(), "Built reports");

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("У вас пока нет загруженных файлов");
        return Ok(());
    }

    for report in &reports {
        print!("{}", render_report(report));
    }
    Ok(())
}

pub fn cmd_analyze(
    stats: &Path,
    text: Option<&str>,
    config: &AnalysisConfig,
    json: bool,
) -> Result<()> {
    let content = read_input(stats)?;
    let summary = analyze_stats(&content, text, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary(&summary));
    }
    Ok(())
}

/// Text rendering of one statement card
pub fn render_report(report: &FileReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "📄 {}", report.filename);
    let _ = writeln!(out, "   Загружен: {}", report.uploaded_on);
    match &report.balance.caption {
        Some(caption) => {
            let _ = writeln!(out, "   {} {}", caption, report.balance.text);
        }
        None => {
            let _ = writeln!(out, "   {}", report.balance.text);
        }
    }
    let _ = writeln!(out, "   {} транзакций", report.transactions_count);

    if let Some(ref analysis) = report.ai_analysis {
        let _ = writeln!(out);
        let _ = writeln!(out, "   Анализ ИИ:");
        for line in analysis.lines() {
            let _ = writeln!(out, "   │ {}", line);
        }
    }

    if !report.rows.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "   Детализация по категориям:");
        let _ = writeln!(out, "   ──────────────────────────────┬────────────────────");
        for row in &report.rows {
            let marker = match row.tone {
                Tone::Income => "▲",
                Tone::Expense => "▼",
                Tone::Neutral => " ",
            };
            let _ = writeln!(
                out,
                "   {} {:28} │ {:>18}",
                marker,
                truncate(&row.label, 28),
                row.amount_text
            );
        }
    }

    out.push_str(&render_summary(&report.summary));
    out
}

/// Text rendering of the bucket summary and recommendation
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "   📊 Сводка ({})", summary.shape_tag);
    if summary.buckets.is_empty() {
        let _ = writeln!(out, "   Нет данных для сводки.");
    }
    for total in &summary.buckets {
        let sign = if total.amount < 0.0 { "-" } else { "+" };
        let _ = writeln!(
            out,
            "   {:12} {}{}",
            total.bucket.label(),
            sign,
            format_money(total.amount)
        );
    }

    let rides = &summary.ride_estimate;
    if rides.trip_count > 0 {
        let _ = writeln!(
            out,
            "   🚖 Такси: {} поездок на {}",
            rides.trip_count,
            format_money(rides.total_amount)
        );
    }

    if !summary.recommendation.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "   💡 {}", summary.recommendation);
    }

    out
}
