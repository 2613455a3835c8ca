use crate::domain::view::{CandidateView, Viewer};
use crate::error::Result;
use std::io::Write;

const REDACTED_COLUMNS: [&str; 3] = ["common_name", "scientific_name", "description"];
const FULL_COLUMNS: [&str; 4] = ["common_name", "scientific_name", "description", "votes"];

/// Writes candidate listings as CSV.
///
/// The header depends on the viewer: `common_name,scientific_name,description`
/// for anonymous viewers, with a trailing `votes` column for administrators.
/// It is written even when the listing is empty.
pub struct CandidateWriter<W: Write> {
    writer: csv::Writer<W>,
    viewer: Viewer,
}

impl<W: Write> CandidateWriter<W> {
    pub fn new(destination: W, viewer: Viewer) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(destination);
        Self { writer, viewer }
    }

    pub fn write_candidates(&mut self, candidates: Vec<CandidateView>) -> Result<()> {
        if self.viewer.sees_tallies() {
            self.writer.write_record(FULL_COLUMNS)?;
        } else {
            self.writer.write_record(REDACTED_COLUMNS)?;
        }
        for candidate in candidates {
            self.writer.serialize(candidate)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
