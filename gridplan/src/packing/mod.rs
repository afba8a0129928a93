//! First-fit-decreasing packing of rectangles onto bed-sized plates.

mod candidates;
mod pack_item;
mod packer;

#[doc(inline)]
pub use candidates::bottom_left_position;
#[doc(inline)]
pub use pack_item::PackItem;
#[doc(inline)]
pub use packer::PlateKey;
#[doc(inline)]
pub use packer::pack;
#[doc(inline)]
pub use packer::pack_bins;
#[doc(inline)]
pub use packer::placement_order;
