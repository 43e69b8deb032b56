pub mod item;
pub mod view;

pub use item::*;
pub use view::*;
