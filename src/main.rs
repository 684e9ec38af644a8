use codejam::cli::autosolve;
use codejam::{debug_line, Solver};
use std::error::Error;

type Res<T> = Result<T, Box<dyn Error>>;

// Placeholder solver, and an example of the library in use.
// Each case is a count followed by that many integers; the solution is the integers, sorted.
fn main() -> Res<()> {
    autosolve(|config| {
        let config = *config;
        Solver::per_case(move |tokens| {
            let mut values: Vec<i64> = tokens.collect_counted()?;
            debug_line!(config, "sorting {} values", values.len());
            values.sort_unstable();
            Ok(values)
        })
    })
}
