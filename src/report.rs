//! PDF report export for a single prediction record.
//!
//! The layout follows the clinical report shown in the app: header with
//! the report id, patient information, the colour-coded prediction
//! result, a brain-region table when the analysis carries one, notes,
//! recommendations, and the research-use disclaimer. One A4 page.

use printpdf::*;
use std::io::BufWriter;
use thiserror::Error;

use crate::models::{BadgeColor, PredictionRecord};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF font error: {0}")]
    Font(String),

    #[error("PDF write error: {0}")]
    Write(String),
}

fn badge_fill(color: BadgeColor) -> Color {
    let (r, g, b) = match color {
        BadgeColor::Green => (0.18, 0.80, 0.44),
        BadgeColor::Yellow => (0.95, 0.61, 0.07),
        BadgeColor::Orange => (0.90, 0.49, 0.13),
        BadgeColor::Red => (0.91, 0.30, 0.24),
        BadgeColor::Gray => (0.45, 0.49, 0.55),
    };
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Renders the report and returns the PDF bytes.
pub fn generate_prediction_report(record: &PredictionRecord) -> Result<Vec<u8>, ReportError> {
    let title = format!("Alzheimer's Detection Report {}", record.id);
    let (doc, page1, layer1) = PdfDocument::new(&title, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Font(e.to_string()))?;
    let courier = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ReportError::Font(e.to_string()))?;

    let mut y = Mm(280.0);

    // Header
    layer.use_text("ALZHEIMER'S DETECTION REPORT", 16.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    layer.use_text("BrainScan AI Medical Diagnostics", 10.0, Mm(20.0), y, &font);
    y -= Mm(5.0);
    layer.use_text(format!("Report ID: {}", record.id), 8.0, Mm(20.0), y, &font);
    y -= Mm(10.0);

    // Patient information
    layer.use_text("PATIENT INFORMATION", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    layer.use_text(
        format!("Patient ID: {}", record.user_id),
        9.0,
        Mm(25.0),
        y,
        &font,
    );
    y -= Mm(4.5);
    layer.use_text(
        format!("Examination date: {}", record.created_at_display()),
        9.0,
        Mm(25.0),
        y,
        &font,
    );
    y -= Mm(10.0);

    // Prediction result, colour-coded by category
    layer.use_text("AI PREDICTION RESULTS", 11.0, Mm(20.0), y, &bold);
    y -= Mm(8.0);
    layer.set_fill_color(badge_fill(record.category.badge_color()));
    layer.use_text(record.category.as_str(), 18.0, Mm(25.0), y, &bold);
    layer.set_fill_color(black());
    y -= Mm(7.0);
    layer.use_text(
        format!("Confidence score: {}", record.confidence_display()),
        9.0,
        Mm(25.0),
        y,
        &font,
    );
    y -= Mm(10.0);

    // Region table
    if let Some(details) = record.details.as_ref().filter(|d| !d.regions.is_empty()) {
        layer.use_text("DETAILED BRAIN REGION ANALYSIS", 11.0, Mm(20.0), y, &bold);
        y -= Mm(6.0);
        layer.use_text(
            format!("{:<28} {:<22} {:>7}", "Region", "Status", "Score"),
            8.0,
            Mm(25.0),
            y,
            &courier,
        );
        y -= Mm(4.0);
        for region in &details.regions {
            let row = format!(
                "{:<28} {:<22} {:>7.1}",
                region.name, region.status, region.score
            );
            layer.use_text(row, 8.0, Mm(25.0), y, &courier);
            y -= Mm(4.0);
        }
        y -= Mm(6.0);
    }

    // Clinical notes
    layer.use_text("CLINICAL NOTES", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    let notes = record
        .details
        .as_ref()
        .and_then(|d| d.notes.as_deref())
        .unwrap_or("No notes provided.");
    for line in wrap_text(notes, 90) {
        layer.use_text(line, 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }
    y -= Mm(6.0);

    // Recommendations
    layer.use_text("RECOMMENDATIONS", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    let recommendations = record
        .details
        .as_ref()
        .and_then(|d| d.recommendations.as_deref())
        .unwrap_or("No recommendations provided.");
    for line in wrap_text(recommendations, 90) {
        layer.use_text(line, 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }

    // Footer disclaimer, fixed to the bottom of the page
    layer.use_text(
        "This report is generated by an AI system and is for research purposes only.",
        7.0,
        Mm(20.0),
        Mm(18.0),
        &font,
    );
    layer.use_text(
        "It is not a substitute for professional medical advice, diagnosis, or treatment.",
        7.0,
        Mm(20.0),
        Mm(14.5),
        &font,
    );
    layer.use_text("Page 1 of 1", 7.0, Mm(178.0), Mm(10.0), &font);

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Write(e.to_string()))?;
    buf.into_inner()
        .map_err(|e| ReportError::Write(e.to_string()))
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
