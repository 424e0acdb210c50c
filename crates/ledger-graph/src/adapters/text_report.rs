//! Plain-text and JSON audit report

use crate::algorithms::FraudDetector;
use crate::application::service::AnalysisReport;
use crate::domain::errors::PresentError;
use std::io::Write;

/// Writes fraud notices and the centrality ranking
pub struct TextReport<W: Write> {
    writer: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// One notice line per fraud edge, then one line per ranked participant.
    pub fn write(&mut self, report: &AnalysisReport) -> Result<(), PresentError> {
        let detector = FraudDetector::new(report.threshold);
        for notice in detector.notices(&report.fraud_edges) {
            writeln!(self.writer, "{notice}")?;
        }
        for entry in &report.ranking {
            writeln!(
                self.writer,
                "User: {}, Degree Centrality: {:?}",
                entry.participant, entry.score
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Pretty-printed JSON of the report
    pub fn write_json(&mut self, report: &AnalysisReport) -> Result<(), PresentError> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
