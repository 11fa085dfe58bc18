use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use console::measure_text_width;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::ReportError;
use crate::models::{StatRecord, UnresolvedRow};

pub const SHEET_NAME: &str = "LeetCode Stats";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const STAT_COLUMNS: [&str; 6] = ["name", "username", "total", "easy", "medium", "hard"];
const UNRESOLVED_COLUMNS: [&str; 2] = ["name", "username"];

/// The downloadable spreadsheet for one run.
#[derive(Debug)]
pub struct Artifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

pub fn artifact_file_name(date: NaiveDate) -> String {
    format!("leetcode_results_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Formats `1234567` as `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }
    output
}

/// Pads by terminal display width so wide (e.g. CJK) names stay aligned.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(measure_text_width(cell)));
    if right_align {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

fn render_table(columns: &[&str], rows: &[Vec<String>], numeric_from: usize) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| measure_text_width(c)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, &width))| pad(cell, width, col >= numeric_from))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let _ = writeln!(output, "{}", format_row(&header[..]));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(output, "{}", rule.join("  "));
    for row in rows {
        let _ = writeln!(output, "{}", format_row(row.as_slice()));
    }
    output
}

pub fn render_resolved(records: &[StatRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.username.clone(),
                group_thousands(r.total),
                group_thousands(r.easy),
                group_thousands(r.medium),
                group_thousands(r.hard),
            ]
        })
        .collect();
    render_table(&STAT_COLUMNS, &rows, 2)
}

pub fn render_unresolved(rows: &[UnresolvedRow]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.name.clone(), r.username.clone()])
        .collect();
    render_table(&UNRESOLVED_COLUMNS, &rows, UNRESOLVED_COLUMNS.len())
}

pub fn build_workbook(records: &[StatRecord]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let header_fmt = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in STAT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_fmt)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &record.name)?;
        sheet.write_string(row, 1, &record.username)?;
        sheet.write_number(row, 2, record.total as f64)?;
        sheet.write_number(row, 3, record.easy as f64)?;
        sheet.write_number(row, 4, record.medium as f64)?;
        sheet.write_number(row, 5, record.hard as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Builds the spreadsheet artifact, or nothing when no row resolved.
pub fn build_artifact(
    records: &[StatRecord],
    date: NaiveDate,
) -> Result<Option<Artifact>, ReportError> {
    if records.is_empty() {
        return Ok(None);
    }

    Ok(Some(Artifact {
        file_name: artifact_file_name(date),
        mime: XLSX_MIME,
        bytes: build_workbook(records)?,
    }))
}
