//! Command-line front end.

mod context;
mod flags;
mod prompts;
mod quiet;

use std::process::ExitCode;

pub use context::{CliError, Context, Outcome};
pub use flags::CliFlags;

/// Exit code when best-effort passwords were printed.
const EXIT_UNSATISFIED: u8 = 2;
const EXIT_FAILURE: u8 = 1;

pub fn run(flags: CliFlags) -> ExitCode {
    quiet::set(flags.quiet);

    let result = Context::new(flags).and_then(|mut ctx| ctx.run());

    if let Err(ref e) = result
        && !matches!(e, CliError::Aborted)
    {
        prompts::error(&format!("Error: {e}"));
    }

    ExitCode::from(exit_status(&result))
}

fn exit_status(result: &Result<Outcome, CliError>) -> u8 {
    match result {
        Ok(Outcome::Complete) | Err(CliError::Aborted) => 0,
        Ok(Outcome::Unsatisfied) => EXIT_UNSATISFIED,
        Err(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use rulepass::GenerateError;

    use super::*;

    #[test]
    fn exit_status_by_outcome() {
        assert_eq!(exit_status(&Ok(Outcome::Complete)), 0);
        assert_eq!(exit_status(&Ok(Outcome::Unsatisfied)), 2);
        assert_eq!(exit_status(&Err(CliError::Aborted)), 0);
        assert_eq!(
            exit_status(&Err(CliError::Generate(GenerateError::EmptyAlphabet))),
            1
        );
    }
}
