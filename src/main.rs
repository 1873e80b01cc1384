//! Primary desktop entrypoint.

fn main() {
    if let Err(err) = panelkit::run_gui() {
        eprintln!("panelkit failed: {}", err);
        std::process::exit(1);
    }
}
