//! Job runner: ties together the layer stack, rasteriser, and exporter.

use std::path::Path;

use anyhow::{Context, Result};

use guidemode_core::{
    build_request, rasterise_bounded, validate_parameters, ModeSet, ModeSolver, SimulationRequest,
};
use guidemode_geometry::{LayerStack, Primitive, Shape};
use guidemode_materials::Material;

use crate::config::{JobConfig, LayerConfig, ShapeConfig};
use crate::exchange::FileExchangeSolver;

/// Build the layer stack from the job's `[[layer]]` entries, bottom to top.
pub fn build_stack(job: &JobConfig) -> Result<LayerStack> {
    let mut stack = LayerStack::new();
    for layer in &job.layer {
        let primitive = build_primitive(layer)
            .with_context(|| format!("Layer '{}'", layer.name))?;
        let id = stack.add(primitive);
        log::debug!("layer '{}' added as id {:?}", layer.name, id);
    }
    Ok(stack)
}

fn build_primitive(layer: &LayerConfig) -> Result<Primitive> {
    let shape = match &layer.shape {
        ShapeConfig::Polygon { vertices } => Shape::polygon(vertices.clone())?,
        ShapeConfig::Ellipse { centre, radii } => Shape::ellipse(*centre, *radii)?,
    };
    let material = Material::from_name(&layer.material)?;
    Ok(Primitive::new(shape, material, layer.index)?)
}

/// Vet a job without rasterising: domain, request parameters, and every
/// layer go through the same validation `run` applies.
pub fn validate_job(job: &JobConfig) -> Result<LayerStack> {
    job.domain.validate()?;
    validate_parameters(job.simulation.wavelength_nm, job.domain.dx, job.domain.dy)?;
    build_stack(job)
}

/// Run a full job: rasterise, export the request, and — when a solver
/// response is configured — collect and write the returned modes.
pub fn run_job(job: &JobConfig, out_dir: &Path) -> Result<()> {
    let stack = build_stack(job)?;
    println!(
        "  {} layers, domain {}x{} µm at dx={} dy={} µm",
        stack.len(),
        job.domain.width,
        job.domain.height,
        job.domain.dx,
        job.domain.dy
    );

    let grid = rasterise_bounded(&stack, &job.domain, Some(job.simulation.max_cells))
        .context("Rasterisation failed")?;
    println!("  Grid: {}x{} cells", grid.nx(), grid.ny());

    let request = build_request(&grid, job.simulation.wavelength_nm, job.domain.dx, job.domain.dy)
        .context("Could not build the solver request")?;

    if job.output.save_request {
        let path = out_dir.join("request.json");
        write_request_json(&request, &path)?;
    }

    let Some(response_file) = &job.solver.response_file else {
        println!("No solver response configured; stopping after the request.");
        return Ok(());
    };

    let solver = FileExchangeSolver::new(response_file);
    log::info!("submitting request via {}", solver.endpoint());
    let modes = solver
        .solve(&request)
        .with_context(|| format!("Solver call failed ({})", solver.endpoint()))?;
    println!(
        "  Solver returned {} mode rows",
        modes.modes.len()
    );

    if job.output.save_modes_csv {
        write_modes_csv(&modes, &out_dir.join("modes.csv"))?;
    }
    if job.output.save_modes_json {
        write_modes_json(&modes, &out_dir.join("modes.json"))?;
    }

    Ok(())
}

/// Write the solver request to a JSON file.
pub fn write_request_json(request: &SimulationRequest, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(request)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Request written to: {}", path.display());
    Ok(())
}

/// Write returned modes to a CSV file with a metadata header.
pub fn write_modes_csv(modes: &ModeSet, path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# GuideMode — Solver Mode Field")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# Rows: {}", modes.modes.len())?;
    writeln!(file, "#")?;

    for row in &modes.modes {
        let line: Vec<String> = row.iter().map(|v| format!("{:.6e}", v)).collect();
        writeln!(file, "{}", line.join(","))?;
    }

    println!("Modes written to: {}", path.display());
    Ok(())
}

/// Pass the raw modes document through as JSON.
pub fn write_modes_json(modes: &ModeSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(modes)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Modes (JSON) written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JobConfig;

    fn job(toml_src: &str) -> JobConfig {
        toml::from_str(toml_src).unwrap()
    }

    const RIDGE: &str = r#"
        [domain]
        width = 4.0
        height = 3.0
        dx = 0.1
        dy = 0.1

        [simulation]
        wavelength_nm = 1550.0

        [[layer]]
        name = "substrate"
        material = "Silica"
        type = "polygon"
        vertices = [[0.0, 0.0], [4.0, 0.0], [4.0, 1.0], [0.0, 1.0]]

        [[layer]]
        name = "ridge"
        material = "Silicon"
        type = "polygon"
        vertices = [[1.5, 1.0], [2.5, 1.0], [2.5, 1.4], [1.5, 1.4]]
    "#;

    #[test]
    fn builds_a_stack_from_config() {
        let job = job(RIDGE);
        let stack = build_stack(&job).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get(1).unwrap().primitive().refractive_index(), 3.48);
    }

    #[test]
    fn custom_material_requires_an_index() {
        let bad = RIDGE.replace("material = \"Silicon\"", "material = \"Custom\"");
        let job = job(&bad);
        assert!(build_stack(&job).is_err());
    }

    #[test]
    fn unknown_material_is_rejected_with_the_layer_name() {
        let bad = RIDGE.replace("material = \"Silicon\"", "material = \"Unobtainium\"");
        let job = job(&bad);
        let err = format!("{:#}", build_stack(&job).unwrap_err());
        assert!(err.contains("ridge"), "error should name the layer: {err}");
    }

    #[test]
    fn validate_agrees_with_run_on_the_wavelength() {
        let good = job(RIDGE);
        assert!(validate_job(&good).is_ok());

        let bad = job(&RIDGE.replace("wavelength_nm = 1550.0", "wavelength_nm = -5.0"));
        assert!(validate_job(&bad).is_err());
        // The same config fails the run path too, for the same reason.
        let out_dir = std::env::temp_dir().join("guidemode_validate_test");
        assert!(run_job(&bad, &out_dir).is_err());
    }

    #[test]
    fn run_writes_the_request() {
        let job = job(RIDGE);
        let out_dir = std::env::temp_dir().join("guidemode_run_test");
        let _ = std::fs::remove_dir_all(&out_dir);

        run_job(&job, &out_dir).unwrap();

        let raw = std::fs::read_to_string(out_dir.join("request.json")).unwrap();
        let request: SimulationRequest = serde_json::from_str(&raw).unwrap();
        assert_eq!(request.grid.len(), 40);
        assert_eq!(request.grid[0].len(), 30);
        assert_eq!(request.wavelength, 1550.0);
        // The ridge sits on top of the substrate: a cell inside it is silicon.
        assert_eq!(request.grid[20][12], 3.48);
        // Above everything: background.
        assert_eq!(request.grid[20][28], 1.0);
    }
}
