//! Intercepted attribute reads, writes and deletions on a book.

use anyhow::Result;
use objhooks::prelude::*;

fn main() -> Result<()> {
    objhooks::init_tracing()?;

    let mut book = Book::new("The Book", "The Author", "The Year");
    println!("{}", book.get_attr("title")?);
    println!("{}", book.get_attr("contents")?);

    book.set_attr("contents", "The Book contents".to_owned());
    println!("{}", book.get_attr("contents")?);

    match book.del_attr("contents") {
        Err(CoreError::DeletionNotPermitted { .. }) => println!("Works as intended"),
        other => anyhow::bail!("deletion should have been refused, got {other:?}"),
    }

    Ok(())
}
