//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "fatal CLI errors are reported on stderr")]
fn main() {
    if let Err(err) = tabgeo_cli::run() {
        eprintln!("tabgeo: {err}");
        std::process::exit(1);
    }
}
