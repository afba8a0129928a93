mod footprint;
mod rect;

#[doc(inline)]
pub use footprint::Footprint;
#[doc(inline)]
pub use rect::Rect;
