use exact_algebra::Examples::algebra_examples::{EXAMPLES_COUNT, run_example};
use exact_algebra::Utils::logger::init_logger;
use log::error;

/// usage: exact_algebra [example number] [log level]
/// without an example number every example is run
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let example: Option<usize> = args.first().and_then(|s| s.parse().ok());
    init_logger(args.get(1).cloned());

    let examples: Vec<usize> = match example {
        Some(n) => vec![n],
        None => (0..EXAMPLES_COUNT).collect(),
    };
    for n in examples {
        if let Err(e) = run_example(n) {
            error!("example {} failed: {}", n, e);
        }
    }
}
