mod coord;
pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;

#[doc(inline)]
pub use coord::Coord;
