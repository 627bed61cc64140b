//! Rabbit-compatible XLSX writer.
//!
//! Assembles the workbook package by hand over a ZIP container: content
//! types, relationship parts and one worksheet per sheet. Labels are written
//! as inline strings and every numeric column as a plain number cell, so the
//! file needs no shared-strings table or style sheet.

use std::io::{Cursor, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::errors::ExportError;
use crate::model::Record;

pub const SECTIONS_SHEET: &str = "Sections";
pub const FULL_DATA_SHEET: &str = "FullData";

/// The four columns the Rabbit import requires, in import order.
pub const SECTIONS_HEADERS: [&str; 4] = ["ZR NAME*", "FROM*", "TO*", "SPEED 1*"];

/// FullData adds the unrounded raw inputs after the Rabbit columns.
pub const FULL_DATA_HEADERS: [&str; 6] = [
    "ZR NAME*",
    "FROM*",
    "TO*",
    "SPEED 1*",
    "Distance_km",
    "Time_min",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct WorkbookOptions {
    /// Also emit the FullData sheet with the raw distance/time columns.
    pub include_full: bool,
}

/// Builds the complete workbook in memory and returns the XLSX bytes.
pub fn build_workbook(
    records: &[Record],
    options: &WorkbookOptions,
) -> Result<Vec<u8>, ExportError> {
    let cursor = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(cursor);
    let zip_options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", zip_options)?;
    zip.write_all(content_types_xml(options.include_full).as_bytes())?;

    zip.start_file("_rels/.rels", zip_options)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file("xl/workbook.xml", zip_options)?;
    zip.write_all(workbook_xml(options.include_full).as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", zip_options)?;
    zip.write_all(workbook_rels_xml(options.include_full).as_bytes())?;

    zip.start_file("xl/worksheets/sheet1.xml", zip_options)?;
    zip.write_all(sheet_xml(records, false).as_bytes())?;

    if options.include_full {
        zip.start_file("xl/worksheets/sheet2.xml", zip_options)?;
        zip.write_all(sheet_xml(records, true).as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Builds the workbook and writes it to `path`. The bytes go to a temp file
/// in the destination directory first and are renamed over the final path,
/// so no partial workbook is ever visible at the destination.
pub fn write_workbook(
    records: &[Record],
    path: &Path,
    options: &WorkbookOptions,
) -> Result<(), ExportError> {
    let bytes = build_workbook(records, options)?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| ExportError::Persist(err.error))?;

    Ok(())
}

const ROOT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#
);

fn content_types_xml(include_full: bool) -> String {
    let mut overrides = String::from(
        r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    );
    if include_full {
        overrides.push_str(
            r#"<Override PartName="/xl/worksheets/sheet2.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
        );
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            "{overrides}",
            r#"</Types>"#
        ),
        overrides = overrides
    )
}

fn workbook_xml(include_full: bool) -> String {
    let mut sheets = format!(
        r#"<sheet name="{SECTIONS_SHEET}" sheetId="1" r:id="rId1"/>"#
    );
    if include_full {
        sheets.push_str(&format!(
            r#"<sheet name="{FULL_DATA_SHEET}" sheetId="2" r:id="rId2"/>"#
        ));
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            "<sheets>{sheets}</sheets></workbook>"
        ),
        sheets = sheets
    )
}

fn workbook_rels_xml(include_full: bool) -> String {
    let mut relationships = String::from(
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    );
    if include_full {
        relationships.push_str(
            r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/>"#,
        );
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            "{relationships}</Relationships>"
        ),
        relationships = relationships
    )
}

fn sheet_xml(records: &[Record], include_raw: bool) -> String {
    let headers: &[&str] = if include_raw {
        &FULL_DATA_HEADERS
    } else {
        &SECTIONS_HEADERS
    };

    let mut rows = String::new();
    rows.push_str(r#"<row r="1">"#);
    for (column, header) in headers.iter().enumerate() {
        rows.push_str(&text_cell(&cell_reference(column, 1), header));
    }
    rows.push_str("</row>");

    for (index, record) in records.iter().enumerate() {
        let row_number = index + 2;
        let mut cells = Vec::with_capacity(headers.len());
        cells.push(text_cell(&cell_reference(0, row_number), &record.label));
        cells.push(number_cell(&cell_reference(1, row_number), "0.000"));
        cells.push(number_cell(
            &cell_reference(2, row_number),
            &format!("{:.3}", record.to_km),
        ));
        cells.push(number_cell(
            &cell_reference(3, row_number),
            &format!("{:.1}", record.speed_kmh),
        ));
        if include_raw {
            cells.push(number_cell(
                &cell_reference(4, row_number),
                &record.distance_km.to_string(),
            ));
            cells.push(number_cell(
                &cell_reference(5, row_number),
                &record.time_min.to_string(),
            ));
        }

        rows.push_str(&format!(r#"<row r="{row_number}">"#));
        for cell in cells {
            rows.push_str(&cell);
        }
        rows.push_str("</row>");
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
            "<sheetData>{rows}</sheetData></worksheet>"
        ),
        rows = rows
    )
}

fn text_cell(reference: &str, value: &str) -> String {
    format!(
        r#"<c r="{reference}" t="inlineStr"><is><t>{}</t></is></c>"#,
        escape_xml(value)
    )
}

fn number_cell(reference: &str, rendered: &str) -> String {
    format!(r#"<c r="{reference}"><v>{rendered}</v></c>"#)
}

/// A1-style reference for the narrow sheets written here (column < 26).
fn cell_reference(column: usize, row: usize) -> String {
    debug_assert!(column < 26);
    format!("{}{row}", (b'A' + column as u8) as char)
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
