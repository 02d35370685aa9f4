mod animation;
mod cli;
mod color;
mod geometry;
mod pattern;
mod viewer;

use std::process::ExitCode;

use viewer::App;

fn main() -> ExitCode {
    let options = cli::parse();

    let mut app = match App::create(&options) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    app.run();
    ExitCode::SUCCESS
}
