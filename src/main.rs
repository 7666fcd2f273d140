use clap::Parser;

mod commands;
mod output;

use commands::fix;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "reffix")]
#[command(version = VERSION)]
#[command(about = "Rewrite Plugin.Configuration references to _plugin.Configuration")]
struct Cli {
    #[command(flatten)]
    fix: fix::FixArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let json = cli.fix.json;

    let exit_code = match fix::run(&cli.fix) {
        Ok(report) => {
            let printed = if json {
                output::print_success(report)
            } else {
                output::print_line(fix::CONFIRMATION)
            };
            match printed {
                Ok(()) => 0,
                Err(err) => report_error(&err),
            }
        }
        Err(err) => report_error(&err),
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn report_error(err: &reffix::Error) -> i32 {
    if output::print_error(err).is_err() {
        eprintln!("{}: {}", err.code.as_str(), err);
    }
    output::exit_code_for_error(err.code)
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
