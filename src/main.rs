//! Best Charge CLI
//!
//! Prices the cart given as arguments (or on stdin, one line per item) and prints the receipt.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use best_charge::{
    cart::parse_cart,
    config::Config,
    fixtures::Fixture,
    observability::init_subscriber,
    pricing::{evaluate, major_units},
    receipt::Receipt,
};
use tracing::info;

fn main() -> Result<()> {
    let config = Config::load()?;

    init_subscriber(&config.logging)?;

    let fixture = match config.catalog.fixture.as_deref() {
        Some(name) => Fixture::from_set_in(name, &config.catalog.fixtures_dir)?,
        None => Fixture::builtin()?,
    };

    let lines = if config.items.is_empty() {
        read_lines(io::stdin().lock())?
    } else {
        config.items
    };

    let cart = parse_cart(&lines)?;
    let result = evaluate(&cart, fixture.menu()?, fixture.promotions())?;

    info!(
        entries = cart.len(),
        promotion = result
            .applied_promotion
            .as_ref()
            .map_or("none", |applied| applied.label.as_str()),
        savings = %major_units(&result.savings()?),
        "priced order"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Receipt::new(&result).write_to(&mut handle)?;
    writeln!(handle)?;

    Ok(())
}

/// Collect the non-blank lines of the input.
fn read_lines(input: impl BufRead) -> io::Result<Vec<String>> {
    input
        .lines()
        .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
        .collect()
}
