//! SVG diagram of a solution.
//!
//! Layers, bottom to top: optional dislike lines, room and stage outlines
//! with pillars, listeners, musicians, score labels.  Listeners are filled
//! with the color of the instrument they dislike most; musicians with the
//! color of their instrument.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sp_core::{InstrumentId, MusicianId, Solution};
use sp_problem::Problem;
use sp_score::ScoreEvaluator;

use crate::OutputResult;
use crate::writer::{SolutionWriter, check_count};

const LABEL_STYLE: &str = "font-family:sans-serif;font-size:20;fill:#ff0000;fill-opacity:1;\
                           stroke:#ffffff;stroke-opacity:1;stroke-width:3;paint-order:stroke fill";

/// Stable pseudo-random color for an integer key, as `0xRRGGBB`.
///
/// Jenkins one-at-a-time over the low three bytes, with the high bit of
/// every channel forced on so colors stay light.
pub fn hash_color(key: u32) -> u32 {
    let mut input = key;
    let mut hash = 0u32;
    for _ in 0..3 {
        hash = hash.wrapping_add(input & 0xff);
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
        input >>= 8;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);
    (hash | 0x0080_8080) & 0x00ff_ffff
}

/// Writes one SVG document per solution.
pub struct SvgWriter<W: Write> {
    out:      W,
    dislikes: bool,
    finished: bool,
}

impl SvgWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> SvgWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, dislikes: false, finished: false }
    }

    /// Also draw a line from every listener to each unblocked musician
    /// playing an instrument it dislikes.  Large problems produce very large
    /// files with this enabled.
    pub fn with_dislikes(mut self, enabled: bool) -> Self {
        self.dislikes = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_dislikes(&mut self, problem: &Problem, solution: &Solution) -> OutputResult<()> {
        let eval = ScoreEvaluator::new(problem);
        let roster = problem.roster();
        writeln!(self.out, r#"<g inkscape:label="Dislikes" inkscape:groupmode="layer" id="dislikes">"#)?;
        for listener in problem.listeners() {
            for (j, &p) in solution.placements.iter().enumerate() {
                let musician = MusicianId(j as u32);
                let instrument = roster.instrument(musician);
                if listener.taste(instrument) >= 0.0
                    || eval.line_of_sight_blocked(&solution.placements, listener.position, musician)
                {
                    continue;
                }
                writeln!(
                    self.out,
                    r#"<path style="fill:none;stroke:#{:06x};stroke-width:1" d="M {},{} {},{}" />"#,
                    hash_color(instrument.0),
                    listener.position.x,
                    listener.position.y,
                    p.x,
                    p.y,
                )?;
            }
        }
        writeln!(self.out, "</g>")?;
        Ok(())
    }
}

impl<W: Write> SolutionWriter for SvgWriter<W> {
    fn write_solution(&mut self, problem: &Problem, solution: &Solution) -> OutputResult<()> {
        check_count(problem, solution)?;
        let room = problem.room().room_size;
        let stage = problem.stage();

        writeln!(self.out, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
        writeln!(
            self.out,
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape">"#,
            room.x, room.y,
        )?;

        if self.dislikes {
            self.write_dislikes(problem, solution)?;
        }

        // ── Room, stage and pillars ───────────────────────────────────────
        writeln!(self.out, r#"<g inkscape:label="Room" inkscape:groupmode="layer" id="room">"#)?;
        writeln!(
            self.out,
            r#"<rect style="fill:none;stroke:#000000" x="0" y="0" width="{}" height="{}" />"#,
            room.x, room.y,
        )?;
        writeln!(
            self.out,
            r#"<rect style="fill:none;stroke:#ff0000" x="{}" y="{}" width="{}" height="{}" />"#,
            stage.bottom_left.x, stage.bottom_left.y, stage.size.x, stage.size.y,
        )?;
        for pillar in problem.pillars() {
            writeln!(
                self.out,
                r#"<circle style="fill:none;stroke:#ff0000" cx="{}" cy="{}" r="{}" />"#,
                pillar.center.x, pillar.center.y, pillar.radius,
            )?;
        }
        writeln!(self.out, "</g>")?;

        // ── Listeners ─────────────────────────────────────────────────────
        writeln!(self.out, r#"<g inkscape:label="Listeners" inkscape:groupmode="layer" id="listeners">"#)?;
        for listener in problem.listeners() {
            let (x, y) = (listener.position.x, listener.position.y);
            match most_disliked(&listener.tastes) {
                Some(instrument) => writeln!(
                    self.out,
                    r#"<circle style="fill:#{:06x};stroke:#000000" cx="{x}" cy="{y}" r="5" />"#,
                    hash_color(instrument.0),
                )?,
                None => writeln!(
                    self.out,
                    r#"<circle style="fill:none;stroke:#000000" cx="{x}" cy="{y}" r="5" />"#,
                )?,
            }
        }
        writeln!(self.out, "</g>")?;

        // ── Musicians ─────────────────────────────────────────────────────
        writeln!(self.out, r#"<g inkscape:label="Musicians" inkscape:groupmode="layer" id="musicians">"#)?;
        for (i, p) in solution.placements.iter().enumerate() {
            let instrument = problem.roster().instrument(MusicianId(i as u32));
            writeln!(
                self.out,
                r#"<circle style="fill:#{:06x};stroke:#0000ff" cx="{}" cy="{}" r="10" id="m{}_{}" />"#,
                hash_color(instrument.0),
                p.x,
                p.y,
                i,
                instrument.0,
            )?;
        }
        writeln!(self.out, "</g>")?;

        // ── Labels ────────────────────────────────────────────────────────
        let top = stage.top_right();
        let lines = [
            ("start", stage.bottom_left.x, stage.bottom_left.y - 2.0),
            ("start", stage.bottom_left.x, stage.bottom_left.y - 22.0),
            ("end", top.x, top.y + 20.0),
            ("end", top.x, top.y + 40.0),
        ];
        writeln!(self.out, r#"<g inkscape:label="Labels" inkscape:groupmode="layer" id="labels">"#)?;
        for (k, (anchor, x, y)) in lines.into_iter().enumerate() {
            let text = if k % 2 == 0 {
                format!("Score = {:.0}", solution.score)
            } else {
                format!("Counters = [{}]", solution.counters)
            };
            writeln!(
                self.out,
                r#"<text text-anchor="{anchor}" x="{x}" y="{y}" style="{LABEL_STYLE}">{text}</text>"#,
            )?;
        }
        writeln!(self.out, "</g>")?;
        writeln!(self.out, "</svg>")?;
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

/// Instrument with the most negative taste, if any taste is negative.
/// Ties go to the lower instrument id.
fn most_disliked(tastes: &[f64]) -> Option<InstrumentId> {
    let mut worst = None;
    let mut min = 0.0;
    for (i, &t) in tastes.iter().enumerate() {
        if t < min {
            min = t;
            worst = Some(InstrumentId(i as u32));
        }
    }
    worst
}
