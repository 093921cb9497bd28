use anyhow::Result;
use clap::Parser;
use tank_gen::{detailed, render};

#[derive(Debug, Parser)]
#[clap(
    name = "tank-gen",
    version,
    about = "Generate the detailed experience tank textures into the current directory"
)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    for tier in &detailed::TIERS {
        render::render(tier)?;
    }
    println!("✓ All tank textures generated");

    Ok(())
}
