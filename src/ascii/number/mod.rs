pub mod double;
pub mod int;

pub use double::double;
pub use int::int;
