use clap::Parser;
use selector_forge::cli::commands::{cmd_check, cmd_generate, cmd_inspect};
use selector_forge::cli::config::{
    Cli, Commands, build_fetch_options, build_selector_options, load_config,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let fetch = build_fetch_options(&config.fetch);

    match cli.command {
        Commands::Generate {
            input,
            url,
            target,
            all,
            strategy,
            depth,
            ids,
            classes,
            attributes,
            format,
            output,
        } => {
            let options = build_selector_options(
                &config.selector,
                strategy.as_deref(),
                depth,
                ids,
                classes,
                attributes,
            );
            let all_generated = cmd_generate(
                input.as_deref(),
                url.as_deref(),
                &target,
                all,
                &options,
                &fetch,
                &format,
                output.as_deref(),
                cli.verbose,
            )?;
            if !all_generated {
                std::process::exit(1);
            }
        }
        Commands::Inspect {
            input,
            url,
            target,
            depth,
            ids,
            classes,
            attributes,
            format,
            output,
        } => {
            let options = build_selector_options(
                &config.selector,
                None,
                depth,
                ids,
                classes,
                attributes,
            );
            cmd_inspect(
                input.as_deref(),
                url.as_deref(),
                &target,
                &options,
                &fetch,
                &format,
                output.as_deref(),
                cli.verbose,
            )?;
        }
        Commands::Check {
            input,
            url,
            selector,
        } => {
            let unique = cmd_check(
                input.as_deref(),
                url.as_deref(),
                &selector,
                &fetch,
                cli.verbose,
            )?;
            if !unique {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
