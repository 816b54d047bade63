use std::process::ExitCode;

use clap::Parser;

mod cli;
mod terminal;

use cli::CliFlags;

fn main() -> ExitCode {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let flags = CliFlags::parse();
    rulepass::logging::init(flags.verbose, flags.quiet);

    cli::run(flags)
}
