//! Prints both quadratic formulations side by side for `3x² + 10⁹x + 5 = 0`.

use quadratic_precision::demo::Demonstration;

fn main() {
    print!("{}", Demonstration::default().run());
}
