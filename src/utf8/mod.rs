pub mod char;
pub mod literal;

pub use char::char;
pub use literal::literal;
