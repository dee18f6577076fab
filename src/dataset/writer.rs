//! Scored-result writer: `UserId,is_fake_probability`, header always
//! present, no index column.

use super::ScoredUser;
use crate::error::{ClassifyError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_scores(path: &Path, scores: &[ScoredUser]) -> Result<()> {
    let file = File::create(path).map_err(|source| ClassifyError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = BufWriter::new(file);

    let io_err = |source| ClassifyError::Write {
        path: path.to_path_buf(),
        source,
    };

    writeln!(w, "UserId,is_fake_probability").map_err(io_err)?;
    for s in scores {
        writeln!(w, "{},{}", s.user_id, s.is_fake_probability).map_err(io_err)?;
    }
    w.flush().map_err(io_err)?;
    Ok(())
}
