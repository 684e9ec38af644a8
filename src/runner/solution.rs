use std::collections::VecDeque;
use std::fmt;

/// Something that can appear after `Case #i:` in the output.
///
/// Scalars use their ordinary `Display` form. Sequences and tuples are rendered as their elements
/// joined by single spaces, so `vec![1, 2, 3]` becomes `1 2 3`; nested sequences are flattened the
/// same way. Wrap any other `Display` type in `Shown` to use it as a solution.
pub trait Solution {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! solution_via_display {
    ( $( $type:ty )+ ) => {$(
        impl Solution for $type {
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    )+}
}

solution_via_display! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64
    bool char str String
}

impl<T: Solution + ?Sized> Solution for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Solution + ?Sized> Solution for Box<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

fn render_spaced<'a, T, I>(items: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Solution + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        item.render(f)?;
    }
    Ok(())
}

impl<T: Solution> Solution for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_spaced(self, f)
    }
}

impl<T: Solution, const N: usize> Solution for [T; N] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_spaced(self.iter(), f)
    }
}

impl<T: Solution> Solution for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_spaced(self, f)
    }
}

impl<T: Solution> Solution for VecDeque<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_spaced(self, f)
    }
}

macro_rules! tuple_solution {
    () => ();
    ($head:ident $(, $tail:ident)*) => {
        tuple_solution!{$($tail),*}

        impl<$head: Solution, $($tail: Solution,)*> Solution for ($head, $($tail,)*) {
            #[allow(non_snake_case)]
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let ($head, $($tail,)*) = self;
                $head.render(f)?;
                $(
                    f.write_str(" ")?;
                    $tail.render(f)?;
                )*
                Ok(())
            }
        }
    };
}

tuple_solution! {A, B, C, D, E, F, G, H}

/// Use any `Display` type as a solution, as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> Solution for Shown<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `Display` adapter for a solution.
pub struct Rendered<'a, S: ?Sized>(pub &'a S);

impl<S: Solution + ?Sized> fmt::Display for Rendered<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}
