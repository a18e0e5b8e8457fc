//! Auto-advancing carousels.
//!
//! [`CarouselState`] is the pure position arithmetic; [`Carousel`] adds the
//! rotation timer and change notifications used by the presentation layer.

mod driver;
mod state;

pub use driver::Carousel;
pub use state::CarouselState;
