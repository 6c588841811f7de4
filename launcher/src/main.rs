use std::io;
use std::process;

use aoc_launcher::config::LauncherConfig;

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = LauncherConfig::default();
    let code = match aoc_launcher::run(&config, &mut io::stdin().lock(), &mut io::stdout()) {
        Ok(code) => code,
        Err(report) => aoc_launcher::report_failure(&report),
    };
    process::exit(code);
}
