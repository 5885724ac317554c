use serde::{Deserialize, Serialize};

use crate::core::file_io::{serialize_to_json_or_panic, FilePrefix};
use crate::core::render::{render_scatter, ScatterImageParams};
use crate::core::sample_grid::{find_members, find_members_parallel, SampleRegion};
use crate::core::stopwatch::Stopwatch;

/**
 * Everything needed for one scatter-plot run: where to sample, how hard
 * to try per point, whether to go parallel, and how to rasterize the
 * result. Loaded from a JSON parameter file.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScatterParams {
    /// Width and height of the square viewing window.
    pub side: f64,
    pub center: nalgebra::Vector2<f64>,
    /// Samples per axis; the grid holds `dens * dens` points.
    pub dens: u32,
    /// Iteration budget per sample point.
    pub checks: u32,
    /// Fixed worker-pool size; omit for single-threaded sampling.
    /// Both modes produce identical output.
    pub workers: Option<usize>,
    pub image: ScatterImageParams,
}

/// Sample the grid, rasterize the members, and drop a params sidecar plus
/// a diagnostics file next to the image.
pub fn render_scatter_plot(
    params: &ScatterParams,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stopwatch = Stopwatch::new("Scatter Render");

    serialize_to_json_or_panic(file_prefix.with_suffix(".json"), params);
    stopwatch.record_split("write params");

    let members = match params.workers {
        Some(workers) => find_members_parallel(
            params.side,
            &params.center,
            params.dens,
            params.checks,
            workers,
        )?,
        None => find_members(params.side, &params.center, params.dens, params.checks)?,
    };
    stopwatch.record_split("sample grid");

    let total_samples = (params.dens as usize) * (params.dens as usize);
    println!(
        "INFO:  Classified {} members among {} samples.",
        members.len(),
        total_samples
    );

    let region = SampleRegion::new(params.side, params.center)?;
    render_scatter(
        &params.image,
        &region,
        &members,
        file_prefix.with_suffix(".png"),
    );
    stopwatch.record_split("render scatter");

    let mut diagnostics_file = file_prefix.create_file_with_suffix("_diagnostics.txt");
    use std::io::Write;
    writeln!(diagnostics_file, "total samples: {}", total_samples)?;
    writeln!(diagnostics_file, "members found: {}", members.len())?;
    stopwatch.display(&mut diagnostics_file)?;

    Ok(())
}
