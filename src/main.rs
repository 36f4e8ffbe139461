fn main() {
    if let Err(e) = compte_lib::run() {
        eprintln!("compte-server: {:#}", e);
        std::process::exit(1);
    }
}
