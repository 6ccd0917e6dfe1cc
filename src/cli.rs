use crate::config::HelperConfig;
use crate::error::EncodingResult;
use crate::template::{TemplateBase, TemplateHelpers};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Escape HTML markup characters
    HtmlEncode { input: String },
    /// Decode HTML character references
    HtmlDecode { input: String },
    /// Percent-encode the query part of a URL
    UrlEncode { input: String },
    /// Percent-encode the whole input
    FullUrlEncode { input: String },
    /// Percent-decode the input
    UrlDecode { input: String },
    /// Percent-decode the input
    FullUrlDecode { input: String },
    /// MD5 hex digest of the UTF-8 input
    Md5 { input: String },
    /// Encode the UTF-8 input as standard base64
    Base64Encode { input: String },
    /// Decode standard base64 into text
    Base64Decode { input: String },
}

/// blade helper command
#[derive(Parser, Debug)]
#[command(about = None)]
pub struct Cli {
    /// Helper config (JSON)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Run one helper command and return the text to print
pub fn run_command(cmd: &Commands, config: HelperConfig) -> EncodingResult<String> {
    debug!("Running {:?}", cmd);
    let helpers = TemplateBase::with_config(config);
    let output = match cmd {
        Commands::HtmlEncode { input } => helpers.html_encode(input.as_str()),
        Commands::HtmlDecode { input } => helpers.html_decode(input.as_str()),
        Commands::UrlEncode { input } => helpers.url_encode(input.as_str()),
        Commands::FullUrlEncode { input } => helpers.full_url_encode(input.as_str()),
        Commands::UrlDecode { input } => helpers.url_decode(input.as_str()),
        Commands::FullUrlDecode { input } => helpers.full_url_decode(input.as_str()),
        Commands::Md5 { input } => helpers.md5(input.as_str()),
        Commands::Base64Encode { input } => helpers.base64_encode(input.as_str()),
        Commands::Base64Decode { input } => helpers.base64_decode(input.as_str())?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HexCase;

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from(["blade", "url-encode", "/p?a=b c"]).unwrap();
        assert!(cli.config.is_none());
        assert!(matches!(cli.cmd, Commands::UrlEncode { ref input } if input == "/p?a=b c"));
    }

    #[test]
    fn test_parse_global_config() {
        let cli = Cli::try_parse_from(["blade", "md5", "x", "--config", "blade.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("blade.json")));
    }

    #[test]
    fn test_run_command() {
        let cmd = Commands::Md5 {
            input: String::new(),
        };
        let config = HelperConfig::default().with_hex_case(HexCase::Lower);
        assert_eq!(
            run_command(&cmd, config).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );

        let cmd = Commands::Base64Decode {
            input: "not-valid-base64!!".to_string(),
        };
        assert!(run_command(&cmd, HelperConfig::default()).is_err());
    }
}
