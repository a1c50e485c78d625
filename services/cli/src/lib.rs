mod cli;
mod pipeline;

use bgate::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
