use std::env;
use std::process::ExitCode;

use lysk_cp::cli;
use lysk_cp::config::AppConfig;
use lysk_cp::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing(AppConfig::from_env().log_json);
    let args: Vec<String> = env::args().collect();
    let code = cli::run_with_args(&args);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
