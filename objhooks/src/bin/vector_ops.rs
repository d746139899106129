//! Vector addition, scaling from either side, and negation.

use anyhow::{Result, ensure};
use objhooks::prelude::*;

fn main() -> Result<()> {
    objhooks::init_tracing()?;

    let v1 = Vector2D::new(10_i64, 20);
    let v2 = Vector2D::new(50, 60);

    let v3 = v1 + v2;
    println!("{v3}");

    let v4 = v3 * 3;
    ensure!(
        v4.to_string() == Vector2D::new(180, 240).to_string(),
        "v3 * 3 gave {v4}"
    );

    let v41 = 3 * v3;
    ensure!(
        v41.to_string() == Vector2D::new(180, 240).to_string(),
        "3 * v3 gave {v41}"
    );

    let v5 = -v4;
    ensure!(
        v5.to_string() == Vector2D::new(-180, -240).to_string(),
        "-v4 gave {v5}"
    );
    println!("{v5}");

    // A non-numeric factor is refused by both operands.
    let v3 = Operand::from(Vector2D::new(60_i64, 80));
    match dynamic::mul(&v3, &Operand::from("three")) {
        Err(CoreError::UnsupportedOperand { .. }) => println!("Works as intended"),
        other => anyhow::bail!("expected an unsupported operand error, got {other:?}"),
    }

    Ok(())
}
