//! Receipt generation — the locally saved PDF summary of a submitted
//! application.
//!
//! Produced only after the backend accepts the application. The
//! document lists every form field as a labeled line (never the
//! attachment bytes themselves, only whether each was provided).

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::error::ReceiptError;
use crate::form::state::FormState;

/// Organization header printed at the top of the receipt.
pub const ORGANIZATION_NAME: &str = "Bright Life Bangladesh Ltd.";
/// Document title, also the PDF metadata title.
pub const RECEIPT_TITLE: &str = "Agent Application Form";

// A4 portrait, millimetres.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
/// Vertical cursor start, measured from the top edge.
const TOP_START_MM: f32 = 20.0;
/// Past this the cursor wraps to a fresh page.
const PAGE_BREAK_MM: f32 = 280.0;
/// Field values are printed in a column 50 mm right of the labels.
const VALUE_COLUMN_MM: f32 = MARGIN_MM + 50.0;
const LINE_STEP_MM: f32 = 7.0;

const PT_TO_MM: f32 = 0.352_778;

/// One labeled line of the receipt body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub label: &'static str,
    pub value: String,
}

impl ReceiptLine {
    fn new(label: &'static str, value: &str) -> Self {
        // Empty values render as a placeholder, not a blank.
        let value = if value.is_empty() { "N/A" } else { value };
        Self {
            label,
            value: value.to_string(),
        }
    }

    fn provided(label: &'static str, present: bool) -> Self {
        Self {
            label,
            value: if present { "Yes" } else { "No" }.to_string(),
        }
    }
}

/// The receipt body in its fixed order: role chain, personal fields,
/// addresses and dates, NID, bank details, then one presence line per
/// attachment.
pub fn lines(state: &FormState) -> Vec<ReceiptLine> {
    vec![
        ReceiptLine::new("Applicant Role:", &state.applicant_role),
        ReceiptLine::new("Agent ID:", &state.agent_id),
        ReceiptLine::new("F.M Name:", &state.fm_name),
        ReceiptLine::new("Role Code:", &state.role_code),
        ReceiptLine::new("D.G.M Name:", &state.dgm_name),
        ReceiptLine::new("D.G.M Code:", &state.dgm_code),
        ReceiptLine::new("G.M Name:", &state.gm_name),
        ReceiptLine::new("G.M Code:", &state.gm_code),
        ReceiptLine::new("Full Name:", &state.full_name),
        ReceiptLine::new("Email:", &state.email),
        ReceiptLine::new("Phone:", &state.phone),
        ReceiptLine::new("Guardian/Father/Spouse:", &state.guardian_name),
        ReceiptLine::new("Mother Name:", &state.mother_name),
        ReceiptLine::new("Present Address:", &state.present_address),
        ReceiptLine::new("Permanent Address:", &state.permanent_address),
        ReceiptLine::new("Date of Birth:", &state.dob),
        ReceiptLine::new("Birth Place:", &state.birth_place),
        ReceiptLine::new("NID Number:", &state.nid_number),
        ReceiptLine::new("Bank Account No:", &state.bank_account_number),
        ReceiptLine::new("Bank Name:", &state.bank_name),
        ReceiptLine::new("Branch Name:", &state.bank_branch_name),
        ReceiptLine::provided("Applicant Photo Provided:", state.applicant_photo.is_some()),
        ReceiptLine::provided("NID Upload Provided:", state.nid_document.is_some()),
        ReceiptLine::provided(
            "Educational Certificate:",
            state.education_certificate.is_some(),
        ),
    ]
}

/// File name of the receipt: derived from the agent ID when present,
/// else the full name, else a literal fallback token.
pub fn file_name(state: &FormState) -> String {
    let stem = if !state.agent_id.is_empty() {
        state.agent_id.as_str()
    } else if !state.full_name.is_empty() {
        state.full_name.as_str()
    } else {
        "form"
    };
    format!("agent-application-{stem}.pdf")
}

/// Generate the receipt and save it under `dir`. Returns the written path.
pub fn generate(state: &FormState, dir: &Path) -> Result<PathBuf, ReceiptError> {
    let mut writer = ReceiptWriter::new()?;
    writer.heading();
    for line in lines(state) {
        writer.labeled_line(&line);
    }
    let generated_on = chrono::Local::now().format("%Y-%m-%d");
    writer.footer(&format!("Generated on {generated_on}"));

    let path = dir.join(file_name(state));
    writer.save(&path)?;
    Ok(path)
}

/// Vertical cursor, measured from the top edge like the layout it
/// mirrors; wraps back to the top when a line would pass the bottom
/// threshold.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self { y: TOP_START_MM }
    }

    /// Advance by `step`. True means the caller must start a new page.
    fn advance(&mut self, step: f32) -> bool {
        self.y += step;
        if self.y > PAGE_BREAK_MM {
            self.y = TOP_START_MM;
            true
        } else {
            false
        }
    }

    /// The printable baseline: printpdf measures from the bottom-left
    /// corner, the cursor from the top.
    fn baseline(&self) -> Mm {
        Mm(PAGE_HEIGHT_MM - self.y)
    }
}

struct ReceiptWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    cursor: Cursor,
    pages: usize,
}

impl ReceiptWriter {
    fn new() -> Result<Self, ReceiptError> {
        let (doc, page, layer) = PdfDocument::new(
            RECEIPT_TITLE,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Page 1",
        );
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor: Cursor::new(),
            pages: 1,
        })
    }

    /// Centered organization name, centered title, red divider rule.
    fn heading(&mut self) {
        self.centered(ORGANIZATION_NAME, 18.0);
        self.cursor.advance(8.0);
        self.centered(RECEIPT_TITLE, 14.0);
        self.cursor.advance(12.0);

        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(200.0 / 255.0, 0.0, 0.0, None)));
        self.layer.set_outline_thickness(0.5);
        let y = self.cursor.baseline();
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), y), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), y), false),
            ],
            is_closed: false,
        });
        self.cursor.advance(6.0);
    }

    /// Bold label at the margin, regular value in the value column,
    /// then advance (starting a new page when the threshold is passed).
    fn labeled_line(&mut self, line: &ReceiptLine) {
        let y = self.cursor.baseline();
        self.layer
            .use_text(line.label, 11.0, Mm(MARGIN_MM), y, &self.bold);
        self.layer
            .use_text(line.value.as_str(), 11.0, Mm(VALUE_COLUMN_MM), y, &self.regular);
        if self.cursor.advance(LINE_STEP_MM) {
            self.new_page();
        }
    }

    fn footer(&mut self, text: &str) {
        let y = self.cursor.baseline();
        self.layer
            .use_text(text, 9.0, Mm(MARGIN_MM), y, &self.regular);
    }

    fn centered(&mut self, text: &str, font_size_pt: f32) {
        // Approximate advance of half an em per glyph; builtin fonts
        // carry no embedded metrics to measure with.
        let width_mm = text.chars().count() as f32 * font_size_pt * 0.5 * PT_TO_MM;
        let x = ((PAGE_WIDTH_MM - width_mm) / 2.0).max(MARGIN_MM);
        let y = self.cursor.baseline();
        self.layer.use_text(text, font_size_pt, Mm(x), y, &self.bold);
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let label = format!("Page {}", self.pages);
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), label);
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    fn save(self, path: &Path) -> Result<(), ReceiptError> {
        let file = File::create(path)?;
        self.doc.save(&mut BufWriter::new(file))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::test_fixtures::filled_form;

    #[test]
    fn file_name_prefers_agent_id() {
        let state = filled_form();
        assert_eq!(file_name(&state), "agent-application-AG-1042.pdf");
    }

    #[test]
    fn file_name_falls_back_to_full_name_then_token() {
        let mut state = filled_form();
        state.agent_id.clear();
        assert_eq!(file_name(&state), "agent-application-Nazmul Hasan.pdf");
        state.full_name.clear();
        assert_eq!(file_name(&state), "agent-application-form.pdf");
    }

    #[test]
    fn lines_follow_the_fixed_order() {
        let all = lines(&filled_form());
        assert_eq!(all.len(), 24);
        assert_eq!(all[0].label, "Applicant Role:");
        assert_eq!(all[8].label, "Full Name:");
        assert_eq!(all[8].value, "Nazmul Hasan");
        assert_eq!(all[23].label, "Educational Certificate:");
    }

    #[test]
    fn empty_values_render_as_placeholder() {
        let mut state = filled_form();
        state.bank_name.clear();
        let all = lines(&state);
        let bank = all.iter().find(|l| l.label == "Bank Name:").unwrap();
        assert_eq!(bank.value, "N/A");
    }

    #[test]
    fn attachment_lines_report_presence() {
        let mut state = filled_form();
        state.nid_document = None;
        let all = lines(&state);
        let photo = all.iter().find(|l| l.label == "Applicant Photo Provided:").unwrap();
        let nid = all.iter().find(|l| l.label == "NID Upload Provided:").unwrap();
        assert_eq!(photo.value, "Yes");
        assert_eq!(nid.value, "No");
    }

    #[test]
    fn cursor_wraps_past_the_threshold() {
        let mut cursor = Cursor::new();
        let mut wraps = 0;
        for _ in 0..80 {
            if cursor.advance(LINE_STEP_MM) {
                wraps += 1;
                assert_eq!(cursor.y, TOP_START_MM, "cursor resets to the top margin");
            }
            assert!(cursor.y <= PAGE_BREAK_MM);
        }
        // 20 + 38 * 7 = 286 > 280: a wrap every 38 lines.
        assert_eq!(wraps, 2);
    }

    #[test]
    fn generate_writes_a_pdf_under_the_expected_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = generate(&filled_form(), dir.path()).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("agent-application-AG-1042.pdf")
        );
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
