mod platform;

use std::io;

fn main() -> io::Result<()> {
    let Some(builder_addr) = std::env::args().nth(1) else {
        eprintln!("Usage: buildview <builder-addr>");
        std::process::exit(2);
    };

    platform::run_app(builder_addr)
}
