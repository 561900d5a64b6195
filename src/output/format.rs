use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::NO_AUTHOR;
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberFormat {
    group_sep: char,
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_sep: ',',
            decimal_sep: '.',
        }
    }
}

impl NumberFormat {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(NumberFormat::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NumberFormat::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        let format = match base.as_str() {
            "de" => NumberFormat {
                group_sep: '.',
                decimal_sep: ',',
            },
            "fr" | "ru" => NumberFormat {
                group_sep: ' ',
                decimal_sep: ',',
            },
            "en" | "zh" => NumberFormat::default(),
            _ => {
                return Err(AppError::UnsupportedLocale {
                    input: trimmed.to_string(),
                });
            }
        };

        Ok(format)
    }
}

pub(crate) fn format_number(n: u64, format: NumberFormat) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(format.group_sep);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format number in compact form (K, M, B suffixes)
pub(crate) fn format_compact(n: u64, format: NumberFormat) -> String {
    let (scaled, suffix) = if n >= 1_000_000_000 {
        (n as f64 / 1_000_000_000.0, "B")
    } else if n >= 1_000_000 {
        (n as f64 / 1_000_000.0, "M")
    } else if n >= 1_000 {
        (n as f64 / 1_000.0, "K")
    } else {
        return n.to_string();
    };
    let mut s = format!("{scaled:.1}");
    if format.decimal_sep != '.' {
        s = s.replace('.', &format.decimal_sep.to_string());
    }
    format!("{s}{suffix}")
}

/// Full or compact number depending on the table mode
pub(crate) fn format_count(n: u64, format: NumberFormat, compact: bool) -> String {
    if compact {
        format_compact(n, format)
    } else {
        format_number(n, format)
    }
}

/// Display label for an author; empty authors get a placeholder
pub(crate) fn author_label(author: &str) -> &str {
    if author.is_empty() { NO_AUTHOR } else { author }
}

pub(crate) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(crate) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(crate) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(crate) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}
