//! Output formatting utilities

use crate::application::{EntrySummary, EntryView, StatsReport};
use crate::domain::entry::date_key;
use crate::domain::MonthCalendar;
use crate::infrastructure::StoreHealth;
use chrono::Local;
use std::fmt::Write;

/// Format the browsing list
pub fn format_entry_list(entries: &[EntrySummary], searching: bool) -> String {
    if entries.is_empty() {
        return if searching {
            "No matching entries found".to_string()
        } else {
            "No entries yet. Start with 'pixeldiary write -m \"...\"'".to_string()
        };
    }

    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "{}  ({} words, saved {})",
            entry.heading,
            entry.words,
            entry.updated_at.with_timezone(&Local).format("%H:%M")
        );
        for line in entry.preview.lines() {
            let _ = writeln!(output, "    {}", line);
        }
        if entry.truncated {
            let _ = writeln!(output, "    → pixeldiary show {}", entry.date);
        }
    }
    output
}

/// Format the single-entry view
pub fn format_entry(view: &EntryView) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", view.label);
    let _ = writeln!(
        output,
        "{} words · {} characters · last saved {}",
        view.words,
        view.chars,
        view.entry
            .updated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(output, "{}", view.tip);
    let steps: Vec<String> = [("previous", view.previous), ("next", view.next)]
        .into_iter()
        .filter_map(|(name, date)| {
            date.map(|d| format!("{}: pixeldiary show {}", name, date_key(d)))
        })
        .collect();
    if !steps.is_empty() {
        let _ = writeln!(output, "{}", steps.join(" · "));
    }
    output.push('\n');
    output.push_str(&view.entry.content);
    if !view.entry.content.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Format a month grid.
/// `*` marks days with an entry, brackets mark today, `>` marks the selected day.
pub fn format_calendar(calendar: &MonthCalendar) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{:^42}", calendar.month.label());
    for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        let _ = write!(output, "{:>5} ", name);
    }
    output.truncate(output.trim_end().len());
    output.push('\n');

    for week in &calendar.weeks {
        let mut line = String::new();
        for cell in week {
            match cell {
                None => line.push_str("      "),
                Some(day) => {
                    let number = day.date.format("%-d").to_string();
                    let body = if day.is_today {
                        format!("[{}]", number)
                    } else {
                        number
                    };
                    let lead = if day.is_selected { '>' } else { ' ' };
                    let mark = if day.has_entry { '*' } else { ' ' };
                    let _ = write!(line, "{}{:>4}{}", lead, body, mark);
                }
            }
        }
        let _ = writeln!(output, "{}", line.trim_end());
    }

    let marked = calendar.marked_days().count();
    let _ = writeln!(output, "\n{} day(s) with entries", marked);
    let _ = writeln!(
        output,
        "previous: pixeldiary calendar {} · next: pixeldiary calendar {}",
        calendar.month.previous(),
        calendar.month.next()
    );
    output
}

/// Format the progress panel
pub fn format_stats(report: &StatsReport) -> String {
    let stats = &report.stats;
    let mut output = String::new();

    match &report.health {
        StoreHealth::Unreadable { reason } => {
            let _ = writeln!(
                output,
                "Warning: diary storage could not be read ({}); showing it as empty",
                reason
            );
        }
        StoreHealth::Healthy { skipped, .. } if *skipped > 0 => {
            let _ = writeln!(
                output,
                "Warning: {} stored record(s) could not be read; they are kept but not shown",
                skipped
            );
        }
        _ => {}
    }

    let _ = writeln!(output, "Total entries: {}", stats.total_entries);
    let _ = writeln!(
        output,
        "{}: {} entries",
        stats.month.label(),
        stats.month_entries
    );
    if let Some(pct) = stats.consistency {
        let _ = writeln!(output, "Consistency: {}%", pct);
    }
    output
}

/// Format a list of config values
pub fn format_config(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}
