//! Placements CSV backend.
//!
//! One header row, then one `musician,instrument,x,y,volume` row per
//! musician.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use sp_core::{MusicianId, Solution};
use sp_problem::Problem;

use crate::OutputResult;
use crate::writer::{SolutionWriter, check_count};

const HEADER: [&str; 5] = ["musician", "instrument", "x", "y", "volume"];

/// Writes placements to CSV.
pub struct CsvWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::new(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap an existing CSV writer and write the header row.
    pub fn new(mut rows: Writer<W>) -> OutputResult<Self> {
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }
}

impl<W: Write> SolutionWriter for CsvWriter<W> {
    fn write_solution(&mut self, problem: &Problem, solution: &Solution) -> OutputResult<()> {
        check_count(problem, solution)?;
        let roster = problem.roster();
        for (i, (p, volume)) in solution.placements.iter().zip(&solution.volumes).enumerate() {
            let instrument = roster.instrument(MusicianId(i as u32));
            self.rows.write_record(&[
                i.to_string(),
                instrument.0.to_string(),
                p.x.to_string(),
                p.y.to_string(),
                volume.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
