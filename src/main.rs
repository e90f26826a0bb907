#[macro_use]
extern crate log;

use clap::Parser;

use segproj::{run_projection, ProjectParams};

fn main() {
    env_logger::init();
    let params = ProjectParams::parse();
    match run_projection(&params) {
        Ok(point) => println!("{}", point),
        Err(e) => {
            error!("Projection has failed: {}", e);
            std::process::exit(1);
        }
    }
}
