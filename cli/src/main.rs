fn main() {
    if let Err(err) = asana_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
