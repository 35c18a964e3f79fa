use anyhow::Result;
use app_icon_gen::icon_gen::{self, Args};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icon(&args)
}
