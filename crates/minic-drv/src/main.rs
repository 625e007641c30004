fn main() {
    if let Err(e) = minic_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
