fn main() {
    if let Err(err) = bgate_cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
