use crate::entities::{Grid, Project};
use crate::util::PlanConfig;
use anyhow::{Context, Result, ensure};
use log::debug;

/// Parses a project from its JSON representation.
pub fn parse_project(json: &str) -> Result<Project> {
    serde_json::from_str(json).context("incorrect project format")
}

/// Builds the [`Grid`] of a project, checking dimensions and that its bins form a valid layout.
pub fn import_grid(project: &Project, config: &PlanConfig) -> Result<Grid> {
    ensure!(
        config.grid_unit > 0.0 && config.height_unit > 0.0,
        "grid unit ({}) and height unit ({}) must be positive",
        config.grid_unit,
        config.height_unit
    );
    ensure!(
        project.drawer_width > 0.0 && project.drawer_depth > 0.0,
        "invalid drawer dimensions: {}×{}",
        project.drawer_width,
        project.drawer_depth
    );
    ensure!(
        project.bed_width > 0.0 && project.bed_depth > 0.0,
        "invalid bed dimensions: {}×{}",
        project.bed_width,
        project.bed_depth
    );

    let mut grid = Grid::from_drawer(project.drawer_width, project.drawer_depth, config.grid_unit);
    for bin in &project.bins {
        ensure!(
            bin.width > 0 && bin.depth > 0 && bin.height > 0,
            "bin {} has a zero dimension: {}×{}×{}",
            bin.id,
            bin.width,
            bin.depth,
            bin.height
        );
        grid.place_bin(bin.clone())
            .with_context(|| format!("bin {} cannot be placed at ({}, {})", bin.id, bin.x, bin.y))?;
    }
    debug!(
        "[IMPORT] project {} imported: {}×{} grid with {} bins",
        project.id,
        grid.cols,
        grid.rows,
        grid.bins().len()
    );
    Ok(grid)
}
