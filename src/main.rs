fn main() {
    if let Err(err) = snipscan::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
