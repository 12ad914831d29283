use chrono::{DateTime, Utc};
use colored::{Color, ColoredString, Colorize};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tenon::api::{CmdMessage, MessageLevel, UnitSummary};
use tenon::grid::{Expansion, GridRow, StatusCounts};
use tenon::model::{Component, ComponentStatus};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 40;
const MATERIAL_WIDTH: usize = 16;
const EXPANDED_MARKER: &str = "▾";
const COLLAPSED_MARKER: &str = "▸";

static STATUS_COLORS: Lazy<HashMap<ComponentStatus, Color>> = Lazy::new(|| {
    HashMap::from([
        (ComponentStatus::ToReview, Color::Blue),
        (ComponentStatus::Approved, Color::Green),
        (ComponentStatus::Modified, Color::Magenta),
        (ComponentStatus::Discarded, Color::BrightBlack),
        (ComponentStatus::Unclear, Color::Yellow),
    ])
});

fn status_colored(status: ComponentStatus) -> ColoredString {
    let color = STATUS_COLORS
        .get(&status)
        .copied()
        .unwrap_or(Color::White);
    status.to_string().color(color)
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_grid(rows: &[GridRow], expansion: &Expansion, indent: usize) {
    if rows.is_empty() {
        println!("No components match.");
        return;
    }

    // Pad before coloring; ANSI escapes would throw off width specifiers.
    let header = format!(
        "{:<12} {:<width$} {:>3}  {:<mat$} {:<10} {:>7}  {}",
        "ID",
        "COMPONENT",
        "QTY",
        "MATERIAL",
        "COMPLEXITY",
        "TIME",
        "STATUS",
        width = NAME_WIDTH,
        mat = MATERIAL_WIDTH,
    );
    println!("{}", header.dimmed());

    for row in rows {
        let c = &row.component;
        let has_children = !c.child_ids.is_empty();
        let marker = if !has_children {
            " "
        } else if expansion.is_expanded(&c.id) {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        };

        let tree_prefix = " ".repeat(indent * row.depth);
        let label = format!("{}{} {}", tree_prefix, marker, c.name);
        let label_display = truncate_to_width(&label, NAME_WIDTH);
        let label_padding = " ".repeat(NAME_WIDTH.saturating_sub(label_display.width()));

        let material = truncate_to_width(&c.material.kind, MATERIAL_WIDTH);
        let material_padding = " ".repeat(MATERIAL_WIDTH.saturating_sub(material.width()));

        println!(
            "{} {}{} {:>3}  {}{} {:<10} {:>7}  {}",
            format!("{:<12}", c.id).dimmed(),
            label_display,
            label_padding,
            c.quantity,
            material,
            material_padding,
            c.complexity.to_string(),
            format_minutes(c.estimated_time),
            status_colored(c.status),
        );
    }

    let total = rows.len();
    println!(
        "{}",
        format!("{} component{}", total, if total == 1 { "" } else { "s" }).dimmed()
    );
}

pub(crate) fn print_counts(counts: &StatusCounts) {
    for status in ComponentStatus::ALL {
        let count = counts.get(status);
        let label = format!("{:>4}  {}", count, status.label());
        if count > 0 {
            println!("{}", label.color(STATUS_COLORS[&status]));
        } else {
            println!("{}", label.dimmed());
        }
    }
    println!("{}", format!("{:>4}  total", counts.total()).bold());
}

pub(crate) fn print_units(summaries: &[UnitSummary]) {
    if summaries.is_empty() {
        println!("No joinery units found.");
        return;
    }

    for summary in summaries {
        let unit = &summary.unit;
        let counts = &summary.counts;
        let reviewed = counts.total() - counts.to_review;
        println!(
            "{} {} {} {}",
            format!("{:<8}", unit.id).dimmed(),
            unit.name.bold(),
            format!("({})", unit.joinery_number).dimmed(),
            format!("{}/{} reviewed", reviewed, counts.total()).dimmed(),
        );
        if !unit.location.is_empty() {
            println!("         {}", unit.location.dimmed());
        }
    }
}

pub(crate) fn print_component_details(components: &[Component]) {
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", c.id.yellow(), c.name.bold());
        println!("--------------------------------");
        println!("  Unit:        {}", c.unit_id);
        println!("  Type:        {}", c.kind);
        println!("  Quantity:    {}", c.quantity);
        println!(
            "  Dimensions:  {} x {} x {} mm",
            c.dimensions.width, c.dimensions.height, c.dimensions.depth
        );
        println!("  Material:    {}", c.material.kind);
        println!("  Complexity:  {}", c.complexity);
        println!("  Est. time:   {}", format_minutes(c.estimated_time));
        println!("  Confidence:  {:.0}%", c.confidence * 100.0);
        println!(
            "  Status:      {}{}",
            status_colored(c.status),
            match c.reviewed_at {
                Some(at) => format!(" ({})", format_time_ago(at)).dimmed().to_string(),
                None => String::new(),
            }
        );
        if let Some(parent) = &c.parent_id {
            println!("  Parent:      {}", parent);
        }
        if !c.child_ids.is_empty() {
            println!("  Children:    {}", c.child_ids.join(", "));
        }
        if !c.hardware.is_empty() {
            println!("  Hardware:");
            for hw in &c.hardware {
                println!("    {}x {}", hw.quantity, hw.description);
            }
        }
        if let Some(notes) = &c.notes {
            println!("  Notes:       {}", notes);
        }
    }
}

pub(crate) fn print_config(config: &tenon::config::TenonConfig) {
    println!("{} {}", format!("{:<16}", "sort-by").dimmed(), config.sort_by);
    println!(
        "{} {}",
        format!("{:<16}", "sort-direction").dimmed(),
        config.sort_direction
    );
    println!("{} {}", format!("{:<16}", "indent").dimmed(), config.indent);
}

pub(crate) fn format_minutes(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_format() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h 00m");
        assert_eq!(format_minutes(245), "4h 05m");
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let truncated = truncate_to_width("a very long component name", 10);
        assert!(truncated.width() <= 10);
        assert!(truncated.ends_with('…'));
    }
}
