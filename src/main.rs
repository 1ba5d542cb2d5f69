//! ptpdash main entrypoint.

use ptpdash::run;
use ptpdash::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
