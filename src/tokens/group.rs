use crate::error::Result;
use crate::tokens::Tokens;
use std::io::BufRead;

/// A single token or a fixed group of tokens that knows how to read itself.
///
/// Scalars read one token each. Tuples read their elements left to right, and may nest: the
/// record `"alice 3 4"` reads as `(String, (u32, u32))`.
pub trait Group: Sized {
    fn read_from<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Self>;
}

macro_rules! group_via_fromstr {
    ( $( $type:ty )+ ) => {$(
        impl Group for $type {
            fn read_from<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Self> {
                tokens.next_token()
            }
        }
    )+}
}

group_via_fromstr! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64
    bool char String
}

macro_rules! tuple_group {
    () => ();
    ($head:ident $(, $tail:ident)*) => {
        tuple_group!{$($tail),*}

        impl<$head: Group, $($tail: Group,)*> Group for ($head, $($tail,)*) {
            #[allow(non_snake_case)]
            fn read_from<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Self> {
                let $head = $head::read_from(tokens)?;
                $( let $tail = $tail::read_from(tokens)?; )*
                Ok(($head, $($tail,)*))
            }
        }
    };
}

tuple_group! {A, B, C, D, E, F, G, H}
