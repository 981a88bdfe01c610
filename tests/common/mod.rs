//! Shared sheet data for the integration tests.
//!
//! The same sheets back an in-memory [`TableSource`] (for catalog and HTTP
//! tests) and a small `.xlsx` file written with `zip` (for the CLI tests),
//! so both paths answer the same questions the same way.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};
use campus_assist::loader::TableSource;
use campus_assist_core::models::Cell;
use campus_assist_core::table::{ColumnNaming, Table};

pub const ASHA: &str = "123456789012";
pub const BALA: &str = "210987654321";

#[derive(Clone, Copy)]
pub enum V {
    S(&'static str),
    N(f64),
    E,
}

impl V {
    fn cell(self) -> Cell {
        match self {
            V::S(s) => Cell::text(s),
            V::N(n) if n.fract() == 0.0 => Cell::Int(n as i64),
            V::N(n) => Cell::Float(n),
            V::E => Cell::Empty,
        }
    }
}

pub struct Sheet {
    pub name: &'static str,
    pub rows: Vec<Vec<V>>,
}

fn sheet(name: &'static str, rows: Vec<Vec<V>>) -> Sheet {
    Sheet { name, rows }
}

use V::{E, N, S};

const ASHA_N: V = N(123456789012.0);
const BALA_N: V = N(210987654321.0);

fn result_sheet(name: &'static str, asha: bool, bala: bool) -> Sheet {
    let mut rows = vec![vec![S("RRN"), S("Name of Student"), S("CSD1101"), S("CSD1102")]];
    if asha {
        rows.push(vec![ASHA_N, S("Asha Rao"), S("A"), S("B+")]);
    }
    if bala {
        rows.push(vec![BALA_N, S("Bala K"), S("O"), S("A+")]);
    }
    sheet(name, rows)
}

/// Every sheet the default configuration names, plus `RESULTS_INFO` for the
/// long layout. Asha has no attendance row.
pub fn sheets() -> Vec<Sheet> {
    vec![
        sheet(
            "STUDENTS_INFO",
            vec![
                vec![S("RRN"), S("Name of Student"), S("Department")],
                vec![ASHA_N, S("Asha Rao"), S("AI&DS")],
                vec![BALA_N, S("Bala K"), S("AI&DS")],
            ],
        ),
        sheet(
            "PARENT_INFO",
            vec![
                vec![S("RRN"), S("Name of Student"), S("Father Name")],
                vec![ASHA_N, S("Asha Rao"), S("Ravi Rao")],
                vec![BALA_N, S("Bala K"), S("Kumar")],
            ],
        ),
        sheet(
            "ATTENDANCE_INFO",
            vec![
                vec![
                    S("RRN"),
                    S("Name of Student"),
                    S("CSD3251 Attendance"),
                    S("CSD3252 Attendance"),
                ],
                vec![BALA_N, S("Bala K"), N(75.0), N(88.0)],
            ],
        ),
        result_sheet("RESULTS_SEM1_INFO", true, true),
        result_sheet("RESULTS_SEM2_INFO", true, true),
        result_sheet("RESULTS_SEM3_INFO", true, false),
        result_sheet("RESULTS_SEM4_INFO", false, false),
        result_sheet("RESULTS_SEM5_INFO", false, false),
        sheet(
            "RESULTS_INFO",
            vec![
                vec![S("RRN"), S("Name of Student"), S("Semester"), S("Grade 1")],
                vec![ASHA_N, S("Asha Rao"), N(2.0), S("O")],
                vec![ASHA_N, S("Asha Rao"), N(1.0), S("A")],
                vec![BALA_N, S("Bala K"), N(1.0), S("B")],
            ],
        ),
        sheet(
            "SYLLABUS_INFO",
            vec![
                vec![
                    S("Semester"),
                    S("Subject Code"),
                    S("Subject Name"),
                    S("Syllabus Image Link"),
                ],
                vec![N(5.0), S("CSD3251"), S("Deep Learning"), S("http://img/csd3251.png")],
                vec![N(5.0), S("CSD3252"), S("NLP"), E],
            ],
        ),
        sheet(
            "TIMETABLE_AI_DS_A",
            vec![
                vec![S("Day"), S("9-10"), S("10-11")],
                vec![S("MON"), S("CSD3251"), S("LS002")],
            ],
        ),
        sheet(
            "TIMETABLE_AI_DS_B",
            vec![vec![S("Day"), S("9-10")], vec![S("MON"), S("CSD3252")]],
        ),
        sheet(
            "CGPA_AND_ARREAR_INFO",
            vec![
                vec![
                    S("RRN"),
                    S("Name of Student"),
                    S("CGPA"),
                    S("Number of Arrears"),
                    S("Status"),
                    S("Semester 1 SGPA"),
                    S("Semester 2 SGPA"),
                ],
                vec![ASHA_N, S("Asha Rao"), N(8.42), N(1.0), S("Active"), N(8.1), N(8.6)],
                vec![BALA_N, S("Bala K"), N(9.1), N(0.0), S("Active"), N(9.0), N(9.2)],
            ],
        ),
    ]
}

/// [`TableSource`] over [`sheets`], recording which sheets were asked for.
pub struct MemorySource {
    sheets: Vec<Sheet>,
    pub requested: Vec<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::with_sheets(sheets())
    }

    pub fn with_sheets(sheets: Vec<Sheet>) -> Self {
        Self {
            sheets,
            requested: Vec::new(),
        }
    }

    pub fn without(name: &str) -> Self {
        Self::with_sheets(sheets().into_iter().filter(|s| s.name != name).collect())
    }
}

impl TableSource for MemorySource {
    fn load(&mut self, sheet: &str, naming: ColumnNaming) -> Result<Table> {
        self.requested.push(sheet.to_string());
        let found = self
            .sheets
            .iter()
            .find(|s| s.name == sheet)
            .ok_or_else(|| anyhow!("no sheet named '{}'", sheet))?;
        let headers: Vec<String> = found.rows[0].iter().map(|v| v.cell().to_string()).collect();
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
        let rows = found.rows[1..]
            .iter()
            .map(|r| r.iter().map(|v| v.cell()).collect())
            .collect();
        Table::new(sheet, &header_refs, rows, naming)
    }
}

fn column_letter(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn sheet_xml(sheet: &Sheet) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\"><sheetData>",
    );
    for (i, row) in sheet.rows.iter().enumerate() {
        xml.push_str(&format!("<row r=\"{}\">", i + 1));
        for (j, v) in row.iter().enumerate() {
            let r = format!("{}{}", column_letter(j), i + 1);
            match v {
                V::S(s) => xml.push_str(&format!(
                    "<c r=\"{}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                    r,
                    escape_xml(s)
                )),
                V::N(n) => xml.push_str(&format!("<c r=\"{}\"><v>{}</v></c>", r, n)),
                V::E => {}
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Write [`sheets`] as a minimal `.xlsx` workbook.
pub fn write_workbook(path: &Path) {
    let sheets = sheets();
    let file = std::fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let opts = zip::write::SimpleFileOptions::default();

    let mut content_types = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
         <Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>",
    );
    let mut workbook = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\"><sheets>",
    );
    let mut rels = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    );

    for (i, sheet) in sheets.iter().enumerate() {
        let n = i + 1;
        content_types.push_str(&format!(
            "<Override PartName=\"/xl/worksheets/sheet{}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>",
            n
        ));
        workbook.push_str(&format!(
            "<sheet name=\"{}\" sheetId=\"{}\" r:id=\"rId{}\"/>",
            sheet.name, n, n
        ));
        rels.push_str(&format!(
            "<Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet{}.xml\"/>",
            n, n
        ));
        zip.start_file(format!("xl/worksheets/sheet{}.xml", n), opts)
            .unwrap();
        zip.write_all(sheet_xml(sheet).as_bytes()).unwrap();
    }
    content_types.push_str("</Types>");
    workbook.push_str("</sheets></workbook>");
    rels.push_str("</Relationships>");

    zip.start_file("[Content_Types].xml", opts).unwrap();
    zip.write_all(content_types.as_bytes()).unwrap();
    zip.start_file("_rels/.rels", opts).unwrap();
    zip.write_all(
        b"<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
          <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
          <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\
          </Relationships>",
    )
    .unwrap();
    zip.start_file("xl/workbook.xml", opts).unwrap();
    zip.write_all(workbook.as_bytes()).unwrap();
    zip.start_file("xl/_rels/workbook.xml.rels", opts).unwrap();
    zip.write_all(rels.as_bytes()).unwrap();
    zip.finish().unwrap();
}
