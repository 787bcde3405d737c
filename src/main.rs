use clap::Parser;
use mandelbrot_viewer::cli::RenderArgs;
use mandelbrot_viewer::{HeadlessController, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = RenderArgs::parse();
    let mut controller = HeadlessController::new(PpmFilePresenter::new());

    controller.generate(args.viewport(), args.view(), &args.config())?;
    controller.write(&args.output)?;

    Ok(())
}
