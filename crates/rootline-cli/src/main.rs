mod app;
mod display;

fn main() {
    if let Err(e) = app::run() {
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
