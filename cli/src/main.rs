//! Binary entrypoint for calcfont-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = calcfont_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
