use crate::prelude::{println, *};
use zap_core::about::{info_text, version_line};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn info() -> Result<()> {
    println!();
    println!("{}", info_text(VERSION));
    println!();

    Ok(())
}

pub fn version() -> Result<()> {
    println!("{}", version_line(VERSION));

    Ok(())
}
