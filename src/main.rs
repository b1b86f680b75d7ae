//! attendlog main entrypoint.

use attendlog::run;

fn main() {
    if let Err(e) = run() {
        attendlog::ui::messages::error(format!("{}", e));
        std::process::exit(1);
    }
}
