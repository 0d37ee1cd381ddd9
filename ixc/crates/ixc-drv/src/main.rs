use clap::Parser as _;

use ixc_drv::Args;

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = ixc_drv::run(&args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
