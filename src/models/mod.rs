pub mod enums;
pub mod minutes;

pub use enums::*;
pub use minutes::*;
