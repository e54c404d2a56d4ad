use std::process::ExitCode;

use busybox_sim::{logging, Invocation};

fn main() -> ExitCode {
    logging::init_subscriber();

    let invocation = Invocation::from_args(std::env::args_os());
    let stdout = std::io::stdout();
    if let Err(e) = invocation.write_to(&mut stdout.lock()) {
        // The exit status does not depend on whether stdout accepted the text.
        tracing::warn!("{}", e);
    }

    ExitCode::SUCCESS
}
