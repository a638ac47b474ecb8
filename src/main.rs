mod definitions;

use anyhow::Result;

fn main() -> Result<()> {
    gadk::run(&definitions::registry())
}
