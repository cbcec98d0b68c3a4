use clap::Parser;
use std::path::PathBuf;

/// An interactive marketplace for home services
#[derive(Parser, Debug)]
#[command(
    name = "fixly",
    version,
    about = "An interactive marketplace for home services",
    long_about = None
)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_flag_is_parsed() {
        let cli = Cli::parse_from(["fixly", "--config", "/tmp/market.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/market.toml")));
    }
}
