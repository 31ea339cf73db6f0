#![deny(warnings)]
#![deny(rust_2018_idioms)]

use chrono::NaiveDate;
use strum::{AsRefStr, Display, EnumString};
use travessia_core::{VesselRecord, hh_mm};

pub mod error;
pub mod excel;
mod font_metrics;
pub mod pdf;

pub use error::{Error, Result};

pub const DEFAULT_FILENAME: &str = "relatorio_embarcacoes";

pub const REPORT_TITLE: &str = "Relatório de Registros de Embarcações";

pub const HEADERS: [&str; 5] = [
    "Nome da Embarcação",
    "Tipo de Operação",
    "Data",
    "Horário",
    "Quantidade de Passageiros",
];

const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    Excel,
    Pdf,
}

/// A vessel record formatted for display in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub vessel_name: String,
    pub operation: &'static str,
    pub date: String,
    pub time: String,
    pub passengers: u32,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Excel => "xlsx",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportFormat::Pdf => "application/pdf",
        }
    }

    /// Download filename with the format's extension.
    ///
    /// Characters outside `[A-Za-z0-9_-]` are dropped, an empty result falls back to
    /// [`DEFAULT_FILENAME`].
    pub fn filename(&self, requested: Option<&str>) -> String {
        let extension = self.extension();

        let stem: String = requested
            .map(str::trim)
            .map(|r| {
                let suffix = format!(".{extension}");
                match r.len().checked_sub(suffix.len()) {
                    Some(i) if r.is_char_boundary(i) && r[i..].eq_ignore_ascii_case(&suffix) => {
                        &r[..i]
                    }
                    _ => r,
                }
            })
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();

        if stem.is_empty() {
            format!("{DEFAULT_FILENAME}.{extension}")
        } else {
            format!("{stem}.{extension}")
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl From<&VesselRecord> for ReportRow {
    fn from(v: &VesselRecord) -> Self {
        Self {
            vessel_name: v.vessel_name.clone(),
            operation: v.operation_type.label(),
            date: format_date(v.date),
            time: v.time.format(hh_mm::FORMAT).to_string(),
            passengers: v.passengers,
        }
    }
}

impl ReportRow {
    pub fn cells(&self) -> [String; 5] {
        [
            self.vessel_name.clone(),
            self.operation.to_string(),
            self.date.clone(),
            self.time.clone(),
            self.passengers.to_string(),
        ]
    }
}
