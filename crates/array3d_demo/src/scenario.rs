//! The console scenario: fill, dump, probe one cell, dump again, print a
//! plane.

use std::io::Write;

use anyhow::Context;
use array3d::{Array3D, Matrix};
use tracing::info;

use crate::config::Config;

fn dump<W: Write>(out: &mut W, array: &Array3D, pretty: bool) -> std::io::Result<()> {
    if pretty {
        write!(out, "{}", array.pretty())
    } else {
        write!(out, "{array}")
    }
}

fn write_plane<W: Write>(out: &mut W, plane: &Matrix) -> std::io::Result<()> {
    for row in plane.rows() {
        let row: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Run the scenario described by `config`, writing every dump to `out`.
///
/// # Errors
///
/// Will return `Err` if the probed cell or the printed plane lies outside the
/// configured dimensions, or if writing to `out` fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<Array3D> {
    let mut array = Array3D::with_dims(config.dims, 0.0);
    info!(dims = %config.dims, fill = config.fill, "filling array");
    array.fill(config.fill);
    dump(out, &array, config.pretty)?;

    let [i, j, k] = config.probe.index;
    info!(i, j, k, value = config.probe.value, "setting probe cell");
    array
        .set(i, j, k, config.probe.value)
        .with_context(|| format!("cannot set probe cell ({i}, {j}, {k})"))?;
    writeln!(out, "after setting element ({i}, {j}, {k}):")?;
    dump(out, &array, config.pretty)?;

    let index = config.slice;
    info!(index, "extracting axis 0 plane");
    let plane = array
        .get_axis0(index)
        .with_context(|| format!("cannot extract axis 0 plane {index}"))?;
    writeln!(out, "axis 0 plane at i = {index}:")?;
    write_plane(out, &plane)?;

    Ok(array)
}
