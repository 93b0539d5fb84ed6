// Thin entry point; all work happens in the library's cli module.

use clap::Parser;

use treecast::cli::{self, CastArgs};

fn main() {
    let args = CastArgs::parse();

    if let Err(error) = cli::run(&args) {
        cli::print_error(error);
        std::process::exit(1);
    }
}
