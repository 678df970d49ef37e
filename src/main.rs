//! rincidents main entrypoint.

use rincidents::run;
use rincidents::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
