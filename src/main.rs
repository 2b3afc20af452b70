//! modrepo binary entry point.

use anyhow::Result;

fn main() -> Result<()> {
    modrepo::cli::run()
}
