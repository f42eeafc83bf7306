use anyhow::Result;
use clap::Parser;
use codesniff::cli::{setup, Cli, Commands};
use codesniff::commands::{self, DetectConfig, ValidateConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup::init_logging(cli.verbosity);
    setup::configure_colors(cli.plain);

    if let Commands::Init { force } = cli.command {
        return commands::init_config(force);
    }

    let settings = setup::load_configuration(cli.config.as_deref())?;

    match cli.command {
        Commands::Detect {
            paths,
            ext,
            all,
            format,
        } => commands::detect(
            DetectConfig {
                paths,
                ext,
                all,
                format,
            },
            &settings,
        ),
        Commands::Validate {
            lang,
            path,
            ext,
            format,
            strict,
        } => commands::validate_content(
            ValidateConfig {
                lang,
                path,
                ext,
                format,
                strict,
            },
            &settings,
        ),
        Commands::Languages { format } => commands::list_languages(format, &settings),
        Commands::Init { force } => commands::init_config(force),
    }
}
