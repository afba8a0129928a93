//! Layout planning for grid-based storage bins.
//!
//! Bins are arranged on a [`Grid`](entities::Grid) of square cells and edited one at a time
//! ([`placement`]). An accepted layout is turned into fabrication plates: bins are packed onto bed-sized
//! plates ([`packing`]), the drawer baseplate is split into bed-sized sections ([`partition`]).
//! When the layout changes, plates are regenerated and their production status carried over ([`reconcile`]).

/// Entities to model grids, bins, plates and projects
pub mod entities;

/// Geometric primitives and predicates, shared by grids and plates
pub mod geometry;

/// Importing external project data into validated internal structures
pub mod io;

/// Moving, rotating and adding bins on a grid
pub mod placement;

pub mod packing;

pub mod partition;

pub mod queue;

pub mod reconcile;

/// Helper functions which do not belong to any specific module
pub mod util;
