use clap::Parser;
use mandelbrot_viewer::cli::GuiArgs;
use mandelbrot_viewer::input::gui::commands::run_gui::GuiOptions;
use mandelbrot_viewer::{PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = GuiArgs::parse();
    let options = GuiOptions {
        width: args.width,
        height: args.height,
        config: args.config(),
        hud_visible: !args.no_hud,
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), options);
    command.execute()?;

    Ok(())
}
