//! Field-by-field report of a decoded Product Info Area.
//!
//! Fields that fail to decode stay in their row, marked skipped; the rest of
//! the report is unaffected.

use std::fmt::Write as _;

use log::warn;

use crate::format::FieldName;
use crate::product::ProductInfoArea;

/// One field of the report, in cursor order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportRow {
    pub field: FieldName,
    /// Absolute address of the field data; where the cursor stopped for an unreached field.
    pub address: u32,
    pub length: u8,
    /// Decoded text; `None` when the field was skipped.
    pub value: Option<String>,
    /// Why the field was skipped.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub skipped: Option<String>,
    /// Field bytes as hex for a skipped field whose bytes lie inside the record.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub raw_hex: Option<String>,
}

impl ReportRow {
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.value.is_none()
    }
}

/// Decoded fields of one area, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub base_offset: u32,
    pub declared_length: u32,
    pub checksum_valid: bool,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Decode every field of `area`.
    #[must_use]
    pub fn from_area(area: &ProductInfoArea<'_>) -> Self {
        Self::build(area, &FieldName::ALL)
    }

    /// Decode only `names`, in the order given.
    #[must_use]
    pub fn for_fields(area: &ProductInfoArea<'_>, names: &[FieldName]) -> Self {
        Self::build(area, names)
    }

    fn build(area: &ProductInfoArea<'_>, names: &[FieldName]) -> Self {
        let rows = names.iter().map(|&name| row(area, name)).collect();
        Report {
            base_offset: area.base_offset(),
            declared_length: area.declared_length(),
            checksum_valid: area.is_valid(),
            rows,
        }
    }

    /// Rows that decoded.
    pub fn decoded(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| !r.is_skipped())
    }

    /// Rows that were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| r.is_skipped())
    }

    /// Plain-text table: field, address, length, value.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:<14}{:<9}{:<8}value", "field", "address", "length");
        for r in &self.rows {
            let address = format!("{:#04x}", r.address);
            let _ = write!(out, "{:<14}{:<9}{:<8}", r.field, address, r.length);
            match (&r.value, &r.raw_hex) {
                (Some(text), _) => out.push_str(text),
                (None, Some(raw)) => {
                    let _ = write!(out, "<skipped> [{raw}]");
                }
                (None, None) => out.push_str("<skipped>"),
            }
            out.push('\n');
        }
        out
    }

    /// Pretty JSON rendering.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn row(area: &ProductInfoArea<'_>, name: FieldName) -> ReportRow {
    match area.get_field(name) {
        Ok(value) => ReportRow {
            field: name,
            address: value.address,
            length: value.length,
            value: Some(value.text),
            skipped: None,
            raw_hex: None,
        },
        Err(e) => {
            warn!("skipping {name}: {e}");
            let (address, length) = match area.slot(name) {
                Some(slot) => (slot.address, slot.length),
                None => (area.cursor_overrun().unwrap_or_default(), 0),
            };
            ReportRow {
                field: name,
                address,
                length,
                value: None,
                skipped: Some(e.to_string()),
                raw_hex: area.field_bytes(name).ok().map(hex),
            }
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
