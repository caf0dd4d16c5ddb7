pub mod hover;
pub mod pointer;
pub mod resize;

pub use hover::wire_hover_style;
pub use pointer::wire_pointer_move;
pub use resize::DebouncedResize;
