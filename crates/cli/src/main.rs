//! `specgen` binary entry point.

fn main() {
    let code = specgen_cli::run_cli(std::env::args().collect());
    std::process::exit(code);
}
