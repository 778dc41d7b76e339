use std::process::ExitCode;

use scale_icon::{
    args::{self, Invocation},
    batch,
    error::ScaleError,
    init,
};

fn main() -> ExitCode {
    let arguments: Vec<_> = std::env::args_os().collect();

    match real_main(arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn real_main(args: Vec<std::ffi::OsString>) -> Result<(), ScaleError> {
    let folder = match args::parse_args(args) {
        Invocation::Usage => {
            println!("{}", args::USAGE);
            return Ok(());
        }
        Invocation::Run(folder) => folder,
    };

    init::init();
    // failed entries were already reported, they do not change the exit status
    batch::run(&folder)?;
    Ok(())
}
