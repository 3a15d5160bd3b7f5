fn main() {
    if let Err(err) = crossword_packer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
