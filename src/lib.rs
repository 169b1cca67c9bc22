//! # geocomb - Coordinate Parser Combinators
//!
//! A small parser combinator library and, built from it, a parser for
//! geographic coordinates written like `40.6782° N, 73.9442° W`.
//!
//! Parsers work on a [`Cursor`] over the input text and either succeed,
//! returning a value and moving the cursor past what they consumed, or fail
//! with `None`. The library emphasizes:
//!
//! - **No partial consumption**: a parser that fails leaves the cursor where it found it
//! - **Composability**: `map`, `flat_map`, `zip`, `or`, `always` and `never` build
//!   larger parsers out of the primitives
//! - **Reusability**: parsers are plain values without mutable state
//!
//! ```
//! use geocomb::{Coordinate, parse_coordinate};
//!
//! let coordinate = parse_coordinate("40.6782° S, 73.9442° W").unwrap();
//! assert_eq!(coordinate, Coordinate::new(-40.6782, -73.9442));
//! assert_eq!(parse_coordinate("abc.6782° S, 73.9442° W"), None);
//! ```

pub mod always;
pub mod ascii;
pub mod config;
pub mod coordinate;
pub mod cursor;
pub mod error;
pub mod flat_map;
pub mod map;
pub mod never;
pub mod or;
pub mod parser;
pub mod utf8;
pub mod zip;

pub use always::always;
pub use config::{HemispherePolicy, ParseConfig};
pub use coordinate::{
    Coordinate, coordinate, coordinate_with, east_west, north_south, parse_coordinate,
    parse_coordinate_with,
};
pub use cursor::{Checkpoint, Cursor};
pub use error::{ConfigError, CoordinateError};
pub use flat_map::{FlatMapExt, flat_map};
pub use map::{MapExt, map};
pub use never::never;
pub use or::{OrExt, or};
pub use parser::{BoxedExt, BoxedParser, Parser, from_fn};
pub use zip::{ZipExt, zip};
