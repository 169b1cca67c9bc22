pub mod number;

pub use number::{double, int};
