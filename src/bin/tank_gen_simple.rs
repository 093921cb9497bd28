use anyhow::Result;
use clap::Parser;
use tank_gen::{render, simple};

#[derive(Debug, Parser)]
#[clap(
    name = "tank-gen-simple",
    version,
    about = "Generate the simplified experience tank textures into the current directory"
)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    for tier in &simple::TIERS {
        render::render(tier)?;
    }
    println!("✓ All tank textures generated");

    Ok(())
}
