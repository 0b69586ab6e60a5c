fn main() {
    if let Err(err) = meme::run() {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}
