pub mod exam;
pub mod theme;

pub use exam::*;
pub use theme::*;
