use routegraph::cli;
use routegraph::observability::init_logging;

fn main() {
    init_logging();

    if let Err(err) = cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
