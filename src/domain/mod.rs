pub mod product;
pub mod view_state;

pub use product::*;
pub use view_state::*;
