//! Geographic coordinates such as `40.6782° N, 73.9442° W`
//!
//! The grammar is assembled from the primitive parsers with `zip` and `map`;
//! the hemisphere letters are resolved with `flat_map` into either an
//! `always` or a `never` parser.

use crate::always::always;
use crate::ascii::double;
use crate::config::{HemispherePolicy, ParseConfig};
use crate::error::CoordinateError;
use crate::flat_map::FlatMapExt;
use crate::map::MapExt;
use crate::never::never;
use crate::parser::{BoxedExt, BoxedParser, Parser};
use crate::utf8::char::char;
use crate::utf8::literal;
use crate::zip::zip;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const DEGREES: &str = "° ";
const SEPARATOR: &str = ", ";

/// A signed latitude/longitude pair in degrees
///
/// North and east are positive, south and west negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let north_south = if self.latitude.is_sign_negative() { 'S' } else { 'N' };
        let east_west = if self.longitude.is_sign_negative() { 'W' } else { 'E' };
        write!(
            f,
            "{}{DEGREES}{north_south}{SEPARATOR}{}{DEGREES}{east_west}",
            self.latitude.abs(),
            self.longitude.abs(),
        )
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse a coordinate that must span the whole string, using the strict
    /// hemisphere policy
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (result, cursor) = coordinate().run(s);
        let coordinate = result.ok_or_else(|| CoordinateError::Invalid {
            input: s.to_string(),
        })?;

        if !cursor.is_empty() {
            return Err(CoordinateError::TrailingInput {
                trailing: cursor.remaining().to_string(),
            });
        }

        Ok(coordinate)
    }
}

/// The two letters naming one axis' hemispheres
#[derive(Debug, Clone, Copy)]
struct Hemispheres {
    positive: char,
    negative: char,
}

const NORTH_SOUTH: Hemispheres = Hemispheres {
    positive: 'N',
    negative: 'S',
};

const EAST_WEST: Hemispheres = Hemispheres {
    positive: 'E',
    negative: 'W',
};

impl Hemispheres {
    fn sign(self, letter: char, policy: HemispherePolicy) -> Option<f64> {
        if letter == self.positive {
            return Some(1.0);
        }
        if letter == self.negative {
            return Some(-1.0);
        }
        match policy {
            HemispherePolicy::Strict => None,
            HemispherePolicy::Lenient => Some(-1.0),
        }
    }

    fn parser<'code>(self, policy: HemispherePolicy) -> impl Parser<'code, Output = f64> {
        char().flat_map(move |letter| -> BoxedParser<'code, 'code, f64> {
            match self.sign(letter, policy) {
                Some(sign) => always(sign).boxed(),
                None => never().boxed(),
            }
        })
    }
}

/// Parser for a north/south letter, yielding +1.0 for `N` and -1.0 for `S`
pub fn north_south<'code>(policy: HemispherePolicy) -> impl Parser<'code, Output = f64> {
    NORTH_SOUTH.parser(policy)
}

/// Parser for an east/west letter, yielding +1.0 for `E` and -1.0 for `W`
pub fn east_west<'code>(policy: HemispherePolicy) -> impl Parser<'code, Output = f64> {
    EAST_WEST.parser(policy)
}

/// Coordinate parser with the default configuration
pub fn coordinate<'code>() -> impl Parser<'code, Output = Coordinate> {
    coordinate_with(ParseConfig::default())
}

pub fn coordinate_with<'code>(config: ParseConfig) -> impl Parser<'code, Output = Coordinate> {
    let policy = config.hemisphere;
    zip((
        double(),
        literal(DEGREES),
        north_south(policy),
        literal(SEPARATOR),
        double(),
        literal(DEGREES),
        east_west(policy),
    ))
    .map(|(latitude, (), lat_sign, (), longitude, (), long_sign)| {
        Coordinate::new(latitude * lat_sign, longitude * long_sign)
    })
}

/// Parse a coordinate from the start of `text`
///
/// Input after the final hemisphere letter is ignored. Returns `None` when
/// the text does not start with a coordinate.
pub fn parse_coordinate(text: &str) -> Option<Coordinate> {
    parse_coordinate_with(text, &ParseConfig::default())
}

pub fn parse_coordinate_with(text: &str, config: &ParseConfig) -> Option<Coordinate> {
    let (result, cursor) = coordinate_with(*config).run(text);
    match &result {
        Some(coordinate) => debug!(
            input = text,
            %coordinate,
            unparsed = cursor.remaining(),
            "parsed coordinate"
        ),
        None => debug!(input = text, policy = %config.hemisphere, "not a coordinate"),
    }
    result
}
