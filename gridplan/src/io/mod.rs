/// Conversion of external project data into validated internal structures
pub mod import;

#[doc(inline)]
pub use import::import_grid;
#[doc(inline)]
pub use import::parse_project;
