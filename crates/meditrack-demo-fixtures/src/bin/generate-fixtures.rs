//! Write the default fixture bundle to disk.
//!
//! Usage: `generate-fixtures [OUTPUT_DIR]` (defaults to `./fixtures`).

use std::env;
use std::path::PathBuf;

use anyhow::Context;

use meditrack_demo_fixtures::FixtureBundle;

fn main() -> anyhow::Result<()> {
    let out_dir: PathBuf = env::args()
        .nth(1)
        .unwrap_or_else(|| "fixtures".to_string())
        .into();

    let bundle = FixtureBundle::assemble();
    let written = bundle
        .write_to(&out_dir)
        .with_context(|| format!("writing fixture bundle to {}", out_dir.display()))?;

    println!(
        "Wrote {} files ({} patients, {} events) to {}",
        written.len(),
        bundle.records.len(),
        bundle.event_count(),
        out_dir.display()
    );
    for name in written {
        println!("  {}", name);
    }
    Ok(())
}
