//! Vector addition and right-hand scaling.

use anyhow::{Result, ensure};
use objhooks::prelude::*;

fn main() -> Result<()> {
    objhooks::init_tracing()?;

    let v1 = Vector2D::new(10_i64, 20);
    let v2 = Vector2D::new(50, 60);

    let v3 = v1 + v2;
    let v4 = v3 * 3;
    ensure!(
        v4.to_string() == Vector2D::new(180, 240).to_string(),
        "v3 * 3 gave {v4}"
    );
    println!("{v4}");

    Ok(())
}
