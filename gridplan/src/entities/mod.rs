mod bin;
mod grid;
mod plate;
mod project;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use bin::BinStyle;

#[doc(inline)]
pub use grid::Grid;

#[doc(inline)]
pub use plate::BaseplateSpec;
#[doc(inline)]
pub use plate::Plate;
#[doc(inline)]
pub use plate::PlateItem;
#[doc(inline)]
pub use plate::PlateKind;
#[doc(inline)]
pub use plate::PlateStatus;
#[doc(inline)]
pub use plate::PlateWarning;

#[doc(inline)]
pub use project::Project;
