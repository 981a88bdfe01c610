//! HTML fragments for syllabus and timetable answers.
//!
//! The markup mirrors what the existing chat front end already consumes:
//! a `dataframe` table with a right-aligned header row, two-space
//! indentation, and no index column. Data text is escaped; the tags this
//! module generates around it (links, images, coloured blocks) are not.

use crate::catalog::{TimetableStyle, DEFAULT_COLOR};
use crate::extract::Section;
use crate::table::{Row, Table};

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render pre-built cell markup as a `dataframe` table.
///
/// Header names are escaped here; `rows` must already be markup.
pub fn html_table(headers: &[String], rows: &[Vec<String>], class: &str) -> String {
    let mut lines = Vec::with_capacity(8 + rows.len() * (headers.len() + 2));
    lines.push(format!(r#"<table border="1" class="dataframe {}">"#, class));
    lines.push("  <thead>".to_string());
    lines.push(r#"    <tr style="text-align: right;">"#.to_string());
    for h in headers {
        lines.push(format!("      <th>{}</th>", escape_html(h)));
    }
    lines.push("    </tr>".to_string());
    lines.push("  </thead>".to_string());
    lines.push("  <tbody>".to_string());
    for row in rows {
        lines.push("    <tr>".to_string());
        for cell in row {
            lines.push(format!("      <td>{}</td>", cell));
        }
        lines.push("    </tr>".to_string());
    }
    lines.push("  </tbody>".to_string());
    lines.push("</table>".to_string());
    lines.join("\n")
}

/// Syllabus rows as a table. Subject codes are shown trimmed and upper-cased.
/// When a row has an image link, its subject code becomes a link to it; the
/// link column itself is never shown.
pub fn syllabus_table(
    table: &Table,
    rows: &[Row<'_>],
    code_column: &str,
    link_column: &str,
) -> String {
    let link_idx = table.column_index(link_column);
    let code_idx = table.column_index(code_column);
    let headers: Vec<String> = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != link_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let link = link_idx
                .map(|i| &row.cells()[i])
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string());
            row.cells()
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != link_idx)
                .map(|(i, cell)| {
                    let raw = cell.to_string();
                    let text = if Some(i) == code_idx {
                        escape_html(&raw.trim().to_uppercase())
                    } else {
                        escape_html(&raw)
                    };
                    match (&link, code_idx) {
                        (Some(href), Some(ci)) if ci == i => format!(
                            r#"<a href="{}" target="_blank">{}</a>"#,
                            escape_html(href),
                            text
                        ),
                        _ => text,
                    }
                })
                .collect()
        })
        .collect();

    html_table(&headers, &body, "syllabus-table")
}

/// Clickable, embeddable syllabus image.
pub fn syllabus_image(link: &str, subject_code: &str) -> String {
    let href = escape_html(link);
    format!(
        r#"<a href="{href}" target="_blank"><img src="{href}" style="max-width:100%;height:auto;" alt="Syllabus Image for {}"></a>"#,
        escape_html(subject_code)
    )
}

fn color_block(color: &str, text: &str) -> String {
    format!(
        r#"<div style="background-color: {}; padding: 4px;">{}</div>"#,
        color,
        escape_html(text)
    )
}

/// Colour every timetable cell.
///
/// Cells are split on `/`. A subject part takes its colour from the style
/// map (white when unknown) and becomes the column's last colour. A venue
/// part reuses the column's last colour, or white if the column has none
/// yet. Rows are walked top to bottom, so the last colour carries down a
/// column across rows.
pub fn timetable_cells(table: &Table, style: &TimetableStyle) -> Vec<Vec<String>> {
    let mut last_colors: Vec<Option<String>> = vec![None; table.headers().len()];
    table
        .rows()
        .map(|row| {
            row.cells()
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    if cell.is_empty() {
                        return String::new();
                    }
                    cell.to_string()
                        .split('/')
                        .map(|raw| {
                            let part = raw.trim();
                            let color = if style.is_venue(part) {
                                last_colors[col]
                                    .clone()
                                    .unwrap_or_else(|| DEFAULT_COLOR.to_string())
                            } else {
                                let c = style.color_for(part).to_string();
                                last_colors[col] = Some(c.clone());
                                c
                            };
                            color_block(&color, part)
                        })
                        .collect::<String>()
                })
                .collect()
        })
        .collect()
}

pub fn timetable(section: Section, table: &Table, style: &TimetableStyle) -> String {
    let cells = timetable_cells(table, style);
    format!(
        "<b>Timetable for Section {}:</b><br><br>{}",
        section,
        html_table(table.headers(), &cells, "timetable-table")
    )
}
