//! `sp-output`: solution writers.
//!
//! | Writer        | Format | Contents                                              |
//! |---------------|--------|-------------------------------------------------------|
//! | [`JsonWriter`]| JSON   | `{"placements":[{"x","y"}],"volumes":[..]}`           |
//! | [`SvgWriter`] | SVG    | room, stage, pillars, listeners, musicians, labels    |
//! | [`CsvWriter`] | CSV    | one `musician,instrument,x,y,volume` row per musician |
//!
//! All writers implement [`SolutionWriter`], so a caller can fan one solution
//! out to any mix of them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{JsonWriter, SolutionWriter, SvgWriter};
//!
//! let mut writers: Vec<Box<dyn SolutionWriter>> = vec![
//!     Box::new(JsonWriter::create(Path::new("out.json"))?),
//!     Box::new(SvgWriter::create(Path::new("out.svg"))?),
//! ];
//! for w in &mut writers {
//!     w.write_solution(&problem, &solution)?;
//!     w.finish()?;
//! }
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod svg;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use svg::{SvgWriter, hash_color};
pub use writer::SolutionWriter;
