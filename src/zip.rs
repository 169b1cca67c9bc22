use crate::cursor::Cursor;
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that runs a tuple of parsers in order and collects
/// their outputs into a flat tuple
///
/// Every parser starts where the previous one stopped. When any of them
/// fails the cursor is rewound to where the first one started.
///
/// Rust has no variadic generics, so `Zip` is implemented for tuples of
/// two up to twelve parsers:
///
/// ```
/// use geocomb::ascii::{double, int};
/// use geocomb::utf8::literal;
/// use geocomb::zip::zip;
/// use geocomb::Parser;
///
/// let (result, cursor) = zip((int(), literal(":"), double())).run("12:0.5 rest");
/// assert_eq!(result, Some((12, (), 0.5)));
/// assert_eq!(cursor.remaining(), " rest");
/// ```
pub struct Zip<T> {
    parsers: T,
}

impl<T> Zip<T> {
    pub fn new(parsers: T) -> Self {
        Zip { parsers }
    }
}

/// Convenience function to create a Zip parser from a tuple of parsers
pub fn zip<T>(parsers: T) -> Zip<T> {
    Zip::new(parsers)
}

macro_rules! impl_zip {
    ($($P:ident $parser:ident $value:ident),+) => {
        impl<'code, $($P),+> Parser<'code> for Zip<($($P,)+)>
        where
            $($P: Parser<'code>,)+
        {
            type Output = ($($P::Output,)+);

            fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
                let ($($parser,)+) = &self.parsers;
                let start = cursor.checkpoint();
                $(
                    let Some($value) = $parser.parse(cursor) else {
                        trace!(
                            position = cursor.position(),
                            rewind_to = start.position(),
                            step = stringify!($parser),
                            "zip step failed, rewinding"
                        );
                        cursor.rewind(start);
                        return None;
                    };
                )+
                Some(($($value,)+))
            }
        }
    };
}

impl_zip!(P1 p1 v1, P2 p2 v2);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8);
impl_zip!(
    P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8, P9 p9 v9
);
impl_zip!(
    P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8, P9 p9 v9,
    P10 p10 v10
);
impl_zip!(
    P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8, P9 p9 v9,
    P10 p10 v10, P11 p11 v11
);
impl_zip!(
    P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8, P9 p9 v9,
    P10 p10 v10, P11 p11 v11, P12 p12 v12
);

/// Extension trait to add .zip() method support for parsers
pub trait ZipExt<'code>: Parser<'code> + Sized {
    fn zip<P>(self, other: P) -> Zip<(Self, P)>
    where
        P: Parser<'code>,
    {
        Zip::new((self, other))
    }
}

/// Implement ZipExt for all parsers
impl<'code, P> ZipExt<'code> for P where P: Parser<'code> {}
