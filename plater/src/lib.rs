use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use gridplan::entities::Project;
use gridplan::io::import_grid;
use gridplan::queue::PrintQueue;
use log::info;

use crate::config::PlaterConfig;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Validates `project` and produces its print queue.
/// A `previous` queue is returned as is when the bins did not change since it was generated,
/// otherwise the queue is regenerated and (if enabled) reconciled with it.
pub fn plan(
    project: &Project,
    previous: Option<PrintQueue>,
    config: &PlaterConfig,
) -> Result<PrintQueue> {
    let grid = import_grid(project, &config.plan)?;
    info!(
        "[PLATER] project {} ({}): {}×{} grid, {} bins, {} free cells",
        project.id,
        project.name,
        grid.cols,
        grid.rows,
        grid.bins().len(),
        grid.free_cells()
    );

    let queue = match previous {
        Some(prev) if prev.project_id == project.id && !prev.is_stale(&project.bins) => {
            info!("[PLATER] previous queue is up to date, reusing it");
            prev
        }
        Some(prev) => {
            info!("[PLATER] previous queue is stale, regenerating");
            let previous = config.reconcile.then_some(&prev);
            PrintQueue::generate(project, previous, &config.plan)
        }
        None => PrintQueue::generate(project, None, &config.plan),
    };

    let progress = queue.progress();
    info!(
        "[PLATER] {}/{} plates complete ({} failed, {}%)",
        progress.completed, progress.total, progress.failed, progress.percentage
    );
    Ok(queue)
}
