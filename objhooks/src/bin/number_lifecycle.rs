//! Two-phase construction and explicit teardown of a wrapped number.

use anyhow::Result;
use objhooks::prelude::*;

fn main() -> Result<()> {
    objhooks::init_tracing()?;

    let n = Number::new(5);
    println!("{}", n.value());
    n.dispose();

    Ok(())
}
