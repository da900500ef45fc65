//! Binary entrypoint for the `secretgen` CLI.

use std::process::ExitCode;

use secretgen::error::SecretError;

fn main() -> ExitCode {
    secretgen::logging::init();

    let result = secretgen::run(std::env::args_os(), &mut std::io::stdout().lock());
    match &result {
        Ok(()) => {}
        Err(SecretError::Usage(err)) => {
            let _ = err.print();
        }
        Err(err) => eprintln!("{err}"),
    }
    secretgen::exit_code(&result)
}
