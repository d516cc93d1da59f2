use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Catalog file to serve
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List the videos in the catalog
    Videos,

    /// Print the quiz for a video, generating it if needed
    Quiz {
        /// Video identifier
        video_id: String,

        /// Discard any stored quiz and generate a new one
        #[arg(long)]
        regenerate: bool,
    },

    /// Translate a word or phrase
    Translate {
        /// Text to translate
        text: String,

        /// Source language
        #[arg(long = "from")]
        from_lang: String,

        /// Target language
        #[arg(long = "to")]
        to_lang: String,
    },

    /// Write the default configuration file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "learnflow.toml")]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate() {
        let args = Args::try_parse_from(["learnflow", "translate", "palabra", "--from", "es", "--to", "en"]).unwrap();
        match args.command {
            Commands::Translate { text, from_lang, to_lang } => {
                assert_eq!(text, "palabra");
                assert_eq!(from_lang, "es");
                assert_eq!(to_lang, "en");
            }
            _ => panic!("expected translate command"),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let args = Args::try_parse_from(["learnflow", "-v", "serve", "--port", "9000"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.command, Commands::Serve { port: Some(9000), host: None, .. }));
    }
}
