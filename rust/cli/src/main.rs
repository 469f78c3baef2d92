use std::io;

fn main() {
    arcana_cli::logging::init_logging();
    let code = arcana_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
