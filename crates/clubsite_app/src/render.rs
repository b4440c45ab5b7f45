//! Turns loaded view models into printable output.

use std::fmt::Write;

use clubsite_core::{ContactPageView, DisplayItem, PanelPageView};

use crate::cli::OutputFormat;

pub fn items(items: &[DisplayItem], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Text => {
            if items.is_empty() {
                return Ok("(nothing to show)".to_string());
            }
            Ok(items.iter().map(item_line).collect::<Vec<_>>().join("\n"))
        }
    }
}

pub fn panel(view: &PanelPageView, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(view)?);
    }

    let mut out = String::new();
    writeln!(out, "{} ({})", view.heading, view.badge)?;
    writeln!(out, "{}", view.subtitle)?;
    if view.is_empty() {
        out.push_str("No members found.");
        return Ok(out);
    }
    for section in &view.sections {
        if section.show_heading {
            writeln!(out, "\n== {} ==", section.title)?;
        }
        for item in &section.items {
            writeln!(out, "{}", item_line(item))?;
        }
    }
    write!(out, "\n{} members", view.member_count())?;
    Ok(out)
}

pub fn contact(view: &ContactPageView, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(view)?);
    }

    let mut out = String::new();
    for card in &view.cards {
        writeln!(out, "{}: {} <{}>", card.title, card.info, card.link)?;
    }
    let address = &view.address;
    writeln!(out, "\n{}, {}", address.club_name, address.university_name)?;
    writeln!(out, "{}", address.address)?;
    if !view.team.is_empty() {
        out.push('\n');
        for member in &view.team {
            writeln!(out, "{}", item_line(member))?;
        }
    }
    Ok(out.trim_end().to_string())
}

fn item_line(item: &DisplayItem) -> String {
    let mut line = format!("{:>4}  {}", item.sort_key, item.name);
    if let Some(title) = &item.title {
        line.push_str(" | ");
        line.push_str(title);
    }
    if let Some(category) = &item.category {
        let _ = write!(line, " [{category}]");
    }
    line
}
