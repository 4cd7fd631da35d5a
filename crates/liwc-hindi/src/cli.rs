use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::analyzer::Analyzer;

/// Analyze `input` line by line, writing one JSON object per non-blank line.
///
/// Lines are trimmed first; blank ones produce no output. Invalid UTF-8 is
/// replaced with U+FFFD rather than rejected, since it cannot match the
/// lexicon anyway. Returns the number of lines analyzed once `input` hits EOF.
pub fn run<R, W>(mut input: R, mut out: W, analyzer: &Analyzer) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    let mut lines = 0usize;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).context("read input")? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        lines += 1;

        let counts = analyzer.analyze(line);
        serde_json::to_writer(&mut out, counts.as_map()).context("write result")?;
        writeln!(out).context("write result")?;
    }
    out.flush().context("flush output")?;
    Ok(lines)
}
