use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = mandelbrot_term::Cli::parse();
    let config = mandelbrot_term::ExplorerConfig::try_from(cli)?;

    if let Some(path) = &config.log_file {
        mandelbrot_term::init_file_logging(path)?;
    }

    let command = mandelbrot_term::RunTerminalCommand::new(config);
    command.execute()?;

    Ok(())
}
