// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{Cell, OutputTable};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::formatting::hours_num_format;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and fitted column widths.
pub(crate) fn export_xlsx(table: &OutputTable, label: &str, path: &Path) -> AppResult<()> {
    info(format!("Writing {label} to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, cells) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(cell.to_string().as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success(label, path);
    Ok(())
}

/// Writes a single cell; numeric cells are stored as numbers.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Empty => worksheet.write_blank(row, col, &fmt),
        Cell::Text(s) => worksheet.write_with_format(row, col, s.as_str(), &fmt),
        Cell::Int(n) => {
            let fmt = fmt.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n as f64, &fmt)
        }
        Cell::Float(x) => {
            let fmt = fmt.set_align(FormatAlign::Right).set_num_format(hours_num_format());
            worksheet.write_with_format(row, col, *x, &fmt)
        }
    }
    .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
