//! Styled XLSX rendering of the nominal follow-up report.
//!
//! The workbook mirrors the collapsible table: one row per red, indented
//! microred rows below it, then the facilities, with a grand total at the
//! bottom. Subtotal rows carry the same values the JSON payload does.

use std::io::Cursor;

use umya_spreadsheet::{Border, HorizontalAlignmentValues, Worksheet};

use crate::domain::indicadores::Seguimiento;

const TITULO: &str = "SEGUIMIENTO NOMINAL DE CAPTACION DE GESTANTES - DIRESA JUNIN";

const COLOR_TITULO: &str = "FF1F4E78";
const COLOR_CABECERA: &str = "FF2E75B6";
const COLOR_RED: &str = "FFD6E4F0";
const COLOR_MICRORED: &str = "FFEAF1F8";
const BLANCO: &str = "FFFFFFFF";

const CABECERAS: [&str; 6] = [
    "RED",
    "MICRORED",
    "ESTABLECIMIENTO",
    "GESTANTES CAPTADAS",
    "GESTANTES ESPERADAS",
    "AVANCE %",
];

const ANCHOS: [(&str, f64); 6] = [
    ("A", 32.0),
    ("B", 28.0),
    ("C", 38.0),
    ("D", 20.0),
    ("E", 20.0),
    ("F", 12.0),
];

/// Errors that can occur while rendering the workbook.
#[derive(Debug, thiserror::Error)]
pub enum ExcelError {
    #[error("No se pudo generar el XLSX: {0}")]
    Render(String),
}

/// Renders the grouped follow-up into XLSX bytes, ready to stream as a
/// download. `periodo` is the header label, e.g. `"ENERO - JUNIO 2025"`.
pub fn generar_reporte_seguimiento(
    seguimiento: &Seguimiento,
    periodo: &str,
) -> Result<Vec<u8>, ExcelError> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_by_name_mut("Sheet1")
        .ok_or_else(|| ExcelError::Render("hoja inicial ausente".to_string()))?;
    sheet.set_name("SEGUIMIENTO");

    for (columna, ancho) in ANCHOS {
        sheet.get_column_dimension_mut(columna).set_width(ancho);
    }

    escribir_titulo(sheet, periodo);
    escribir_cabecera(sheet);

    let mut fila = 5u32;
    for red in &seguimiento.redes {
        escribir_fila(
            sheet,
            fila,
            [&red.nombre, "", ""],
            red.numerador,
            red.denominador,
            red.avance,
        );
        pintar_fila(sheet, fila, COLOR_RED, true);
        fila += 1;

        for microred in &red.microredes {
            escribir_fila(
                sheet,
                fila,
                ["", &microred.nombre, ""],
                microred.numerador,
                microred.denominador,
                microred.avance,
            );
            pintar_fila(sheet, fila, COLOR_MICRORED, false);
            fila += 1;

            for establecimiento in &microred.establecimientos {
                escribir_fila(
                    sheet,
                    fila,
                    ["", "", &establecimiento.nombre],
                    establecimiento.numerador,
                    establecimiento.denominador,
                    establecimiento.avance,
                );
                fila += 1;
            }
        }
    }

    escribir_fila(
        sheet,
        fila,
        ["TOTAL DIRESA JUNIN", "", ""],
        seguimiento.total_numerador,
        seguimiento.total_denominador,
        seguimiento.total_avance,
    );
    pintar_fila(sheet, fila, COLOR_CABECERA, true);
    for columna in ["A", "B", "C", "D", "E", "F"] {
        sheet
            .get_style_mut(format!("{columna}{fila}").as_str())
            .get_font_mut()
            .get_color_mut()
            .set_argb(BLANCO);
    }

    let mut cursor = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut cursor)
        .map_err(|e| ExcelError::Render(format!("{e:?}")))?;
    Ok(cursor.into_inner())
}

fn escribir_titulo(sheet: &mut Worksheet, periodo: &str) {
    sheet.add_merge_cells("A1:F1");
    sheet.get_cell_mut("A1").set_value(TITULO);
    let estilo = sheet.get_style_mut("A1");
    estilo.set_background_color(COLOR_TITULO);
    estilo.get_font_mut().set_bold(true);
    estilo.get_font_mut().get_color_mut().set_argb(BLANCO);
    estilo
        .get_alignment_mut()
        .set_horizontal(HorizontalAlignmentValues::Center);

    sheet.add_merge_cells("A2:F2");
    sheet.get_cell_mut("A2").set_value(format!("PERIODO: {periodo}"));
    let estilo = sheet.get_style_mut("A2");
    estilo.get_font_mut().set_bold(true);
    estilo
        .get_alignment_mut()
        .set_horizontal(HorizontalAlignmentValues::Center);
}

fn escribir_cabecera(sheet: &mut Worksheet) {
    for (i, cabecera) in CABECERAS.iter().enumerate() {
        let coordenada = celda(i, 4);
        sheet.get_cell_mut(coordenada.as_str()).set_value(*cabecera);
        let estilo = sheet.get_style_mut(coordenada.as_str());
        estilo.set_background_color(COLOR_CABECERA);
        estilo.get_font_mut().set_bold(true);
        estilo.get_font_mut().get_color_mut().set_argb(BLANCO);
        estilo
            .get_alignment_mut()
            .set_horizontal(HorizontalAlignmentValues::Center);
        estilo
            .get_borders_mut()
            .get_bottom_mut()
            .set_border_style(Border::BORDER_THIN);
    }
}

fn escribir_fila(
    sheet: &mut Worksheet,
    fila: u32,
    etiquetas: [&str; 3],
    numerador: i64,
    denominador: i64,
    avance: f64,
) {
    for (i, etiqueta) in etiquetas.iter().enumerate() {
        if !etiqueta.is_empty() {
            sheet.get_cell_mut(celda(i, fila).as_str()).set_value(*etiqueta);
        }
    }
    sheet
        .get_cell_mut(celda(3, fila).as_str())
        .set_value_number(numerador as f64);
    sheet
        .get_cell_mut(celda(4, fila).as_str())
        .set_value_number(denominador as f64);
    let coordenada = celda(5, fila);
    sheet
        .get_cell_mut(coordenada.as_str())
        .set_value_number(avance);
    sheet
        .get_style_mut(coordenada.as_str())
        .get_number_format_mut()
        .set_format_code("0.00");
}

fn pintar_fila(sheet: &mut Worksheet, fila: u32, color: &str, negrita: bool) {
    for columna in ["A", "B", "C", "D", "E", "F"] {
        let estilo = sheet.get_style_mut(format!("{columna}{fila}").as_str());
        estilo.set_background_color(color);
        if negrita {
            estilo.get_font_mut().set_bold(true);
        }
    }
}

fn celda(columna: usize, fila: u32) -> String {
    const COLUMNAS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
    format!("{}{}", COLUMNAS[columna], fila)
}
