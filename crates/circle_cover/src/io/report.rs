//! Plain-text coverage dump for quick inspection.
//!
//! One line per grid row, each cell rendered as the truncated percentage
//! `<coverage*100>%`, tab separated, optionally followed by the x and y
//! components of the cell's normal. A debugging artifact, not a stable
//! format.
use std::io::Write;

use crate::error::Result;
use crate::field::{ScalarField, VectorField};

/// Writes the coverage report to `out`.
///
/// When `normals` is given, each cell prints as `NN%\tnx\tny\t`; boundary-less
/// cells carry their zero-vector components verbatim.
pub fn write_coverage_report<W: Write>(
    mut out: W,
    coverage: &ScalarField,
    normals: Option<&VectorField>,
) -> Result<()> {
    let grid = &coverage.grid;
    for j in 0..grid.ny {
        for i in 0..grid.nx {
            let cov = coverage.data[grid.cell_id(i, j)];
            write!(out, "{}%\t", (cov * 100.0) as i64)?;
            if let Some(field) = normals {
                let n = field.data[grid.cell_id(i, j)];
                write!(out, "{}\t{}\t", n.x, n.y)?;
            }
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
