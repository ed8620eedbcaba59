use std::fs::File;
use std::io::{BufReader, Write};

use anyhow::Context;
use log::{debug, info};
use stlarea_mesh::ReducerConfig;
use stlarea_stl::{Model, StlFormat};

use crate::args::Args;

/// The two values printed for every successfully read file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub facet_count: usize,
    pub surface_area: f64,
}

fn analyze(path: &str, f: &mut BufReader<File>, config: &ReducerConfig) -> anyhow::Result<Report> {
    const READ_ERROR: &str = "Error reading the STL file";

    let format = StlFormat::detect(path).context(READ_ERROR)?;
    let stl = format.facet_counter(f).context(READ_ERROR)?;
    let surface_area = format.surface_area_with(stl.facets(), config);
    Ok(Report {
        facet_count: stl.facet_count(),
        surface_area,
    })
}

/// Runs the analysis described by `args`, writing everything meant for the
/// user to `out`.
///
/// Problems with the input file are reported to `out` and are not errors;
/// only failing to write to `out` is.
pub fn report_command<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let Some(path) = args.stl_path.as_deref() else {
        writeln!(out, "Please provide the filename to be analyzed")?;
        return Ok(());
    };

    let mut f = match File::open(path) {
        Ok(f) => BufReader::new(f),
        Err(e) => {
            debug!("failed to open {path}: {e}");
            writeln!(out, "No such file or directory")?;
            writeln!(out, "Please provide a valid filepath")?;
            return Ok(());
        }
    };

    let config = args
        .workers
        .map(|workers| ReducerConfig { workers })
        .unwrap_or_default();
    match analyze(path, &mut f, &config) {
        Ok(report) => {
            info!("{path}: {report:?}");
            writeln!(out, "Number of facets: {}", report.facet_count)?;
            writeln!(out, "Surface area: {}", report.surface_area)?;
        }
        Err(e) => writeln!(out, "{e:#}")?,
    }
    Ok(())
}
