//! rMinutes main entrypoint.

use rminutes::run;
use rminutes::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
