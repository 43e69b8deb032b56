pub mod extract;
pub mod normalize;
pub mod parse;

pub use extract::*;
pub use normalize::*;
pub use parse::*;
