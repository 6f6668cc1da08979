pub mod group;
pub mod purchase;
pub mod vegetable;

pub use group::*;
pub use purchase::*;
pub use vegetable::*;
