use hotseat_chess::driver::{run_stdio, DriverOptions};

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    if let Err(e) = run_stdio(DriverOptions::new()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
