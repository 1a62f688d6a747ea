//! Solution JSON writer.
//!
//! The output is accepted by `sp_problem::load_solution_json`, which is how
//! upgrade mode reads a previous run back in.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use sp_core::Solution;
use sp_problem::Problem;

use crate::OutputResult;
use crate::writer::SolutionWriter;

#[derive(Serialize)]
struct PlacementRecord {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct SolutionRecord<'a> {
    placements: Vec<PlacementRecord>,
    volumes:    &'a [f64],
}

/// Writes each solution as one JSON document followed by a newline.
pub struct JsonWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl JsonWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner writer (e.g. to inspect an in-memory buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SolutionWriter for JsonWriter<W> {
    fn write_solution(&mut self, _problem: &Problem, solution: &Solution) -> OutputResult<()> {
        let record = SolutionRecord {
            placements: solution
                .placements
                .iter()
                .map(|p| PlacementRecord { x: p.x, y: p.y })
                .collect(),
            volumes: &solution.volumes,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
