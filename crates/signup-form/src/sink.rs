// File: src/sink.rs
// Purpose: Destinations for successfully submitted records

use crate::record::FormRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};
use tracing::warn;

pub const DEFAULT_ALERT_TITLE: &str = "Tada!";
pub const DEFAULT_ALERT_INDENT: usize = 4;

/// Receives the record after a successful submit
///
/// Implemented for any `FnMut(&FormRecord)` so hosts can pass a closure.
pub trait SuccessSink {
    fn report(&mut self, record: &FormRecord);
}

impl<F> SuccessSink for F
where
    F: FnMut(&FormRecord),
{
    fn report(&mut self, record: &FormRecord) {
        self(record)
    }
}

/// Alert text: a title line, then the record as indented JSON in field order
///
/// ```
/// use signup_form::{format_alert, FormRecord};
///
/// let record = FormRecord::new("Alice", "a@b.com", "Abcdef12", "Abcdef12");
/// let text = format_alert("Tada!", &record, 4).unwrap();
/// assert!(text.starts_with("Tada!\n{\n    \"name\": \"Alice\","));
/// ```
pub fn format_alert(title: &str, record: &FormRecord, indent: usize) -> serde_json::Result<String> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    record.serialize(&mut serializer)?;

    Ok(format!("{}\n{}", title, String::from_utf8_lossy(&buf)))
}

/// Writes the alert text for each submitted record
#[derive(Debug)]
pub struct AlertSink<W: Write> {
    writer: W,
    title: String,
    indent: usize,
}

impl AlertSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AlertSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            title: DEFAULT_ALERT_TITLE.to_string(),
            indent: DEFAULT_ALERT_INDENT,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_alert(&mut self, record: &FormRecord) -> io::Result<()> {
        let text = format_alert(&self.title, record, self.indent)?;
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}

impl<W: Write> SuccessSink for AlertSink<W> {
    fn report(&mut self, record: &FormRecord) {
        if let Err(e) = self.write_alert(record) {
            warn!("Failed to write submission alert: {}", e);
        }
    }
}

/// Keeps every reported record in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Vec<FormRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[FormRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&FormRecord> {
        self.records.last()
    }

    pub fn take(&mut self) -> Vec<FormRecord> {
        std::mem::take(&mut self.records)
    }
}

impl SuccessSink for RecordingSink {
    fn report(&mut self, record: &FormRecord) {
        self.records.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> FormRecord {
        FormRecord::new("Alice", "a@b.com", "Abcdef12", "Abcdef12")
    }

    #[test]
    fn test_format_alert() {
        let text = format_alert(DEFAULT_ALERT_TITLE, &record(), DEFAULT_ALERT_INDENT).unwrap();
        let expected = "Tada!\n{\n    \"name\": \"Alice\",\n    \"email\": \"a@b.com\",\n    \"password\": \"Abcdef12\",\n    \"confirmPassword\": \"Abcdef12\"\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_alert_escapes_values() {
        let mut r = record();
        r.name = "Al \"the\" ice".to_string();
        let text = format_alert("Done", &r, 2).unwrap();
        assert!(text.starts_with("Done\n{\n  \"name\": \"Al \\\"the\\\" ice\","));
    }

    #[test]
    fn test_alert_sink_writes_text() {
        let mut sink = AlertSink::new(Vec::new()).with_title("Welcome").with_indent(2);
        sink.report(&record());

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.starts_with("Welcome\n{\n  \"name\": \"Alice\""));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |r: &FormRecord| seen.push(r.name.clone());
            sink.report(&record());
        }
        assert_eq!(seen, vec!["Alice".to_string()]);
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        assert!(sink.last().is_none());
        sink.report(&record());
        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.last(), Some(&record()));
        assert_eq!(sink.take().len(), 1);
        assert!(sink.records().is_empty());
    }
}
