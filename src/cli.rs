//! Drives the command-line program.

pub use crate::reddit::client::Error;
use crate::count::TargetWordSet;
use crate::reddit::Subreddit;
use crate::reddit::service::Service;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use std::process;

/// How many titles the `hot` command prints.
const HOT_LIMIT: u32 = 10;

pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Tallies keyword occurrences across a subreddit's hot posts", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn subreddit(&self) -> String {
        String::from(self.command.subreddit())
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a subreddit's subscriber count
    #[clap(alias = "s")]
    Subscribers {
        /// Subreddit name, without the r/ prefix
        subreddit: String,
    },

    /// List the titles of the first ten posts in a subreddit's hot listing
    #[clap(alias = "h")]
    Hot {
        /// Subreddit name, without the r/ prefix
        subreddit: String,
    },

    /// Count keyword mentions across all of a subreddit's hot post titles
    #[clap(alias = "t")]
    Tally {
        /// Subreddit name, without the r/ prefix
        subreddit: String,

        /// Keywords to count; quoted lists are split on whitespace
        words: Vec<String>,
    },
}

impl Command {
    pub fn subreddit(&self) -> &str {
        match &self {
            Command::Subscribers { subreddit } => subreddit,
            Command::Hot { subreddit } => subreddit,
            Command::Tally { subreddit, .. } => subreddit,
        }
    }
}

/// Invalid command-line input, caught before any network call is made.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    /// No subreddit name was given.
    #[error("please pass a subreddit to query")]
    MissingSubreddit,

    /// The tally command was given no words to count.
    #[error("please pass one or more keywords to tally")]
    MissingWords,
}

/// Runs the command-line program using the given configuration options.
///
/// Any failure aborts the program with a message on stderr and a nonzero
/// exit code; partial results are never printed.
pub async fn run(config: Config) {
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    let runner = match Runner::new(config) {
        Ok(runner) => runner,
        Err(err) => die(2, &format!("usage error: {err}")),
    };

    if let Err(err) = runner.run().await {
        die(1, &err.to_string());
    }
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    ///
    /// Returns an error if the input is invalid. Input is validated here,
    /// before any network call.
    pub fn new(config: Config) -> Result<Runner, InputError> {
        if config.subreddit().is_empty() {
            return Err(InputError::MissingSubreddit);
        }
        if let Command::Tally { words, .. } = &config.command
            && TargetWordSet::new(words).is_empty()
        {
            return Err(InputError::MissingWords);
        }
        Ok(Self { config })
    }

    /// Run the command-line program using its stored configuration options.
    pub async fn run(&self) -> Result<(), Error> {
        let subreddit = Subreddit::new(self.config.subreddit()).await?;
        match &self.config.command {
            Command::Subscribers { .. } => self.run_subscribers(&subreddit).await,
            Command::Hot { .. } => self.run_hot(&subreddit).await,
            Command::Tally { words, .. } => self.run_tally(&subreddit, words).await,
        }
    }

    async fn run_subscribers<S: Service>(&self, subreddit: &Subreddit<S>) -> Result<(), Error> {
        let count = subreddit.subscribers().await?;
        println!("Subscribers: {count}");
        Ok(())
    }

    async fn run_hot<S: Service>(&self, subreddit: &Subreddit<S>) -> Result<(), Error> {
        let titles = subreddit.hot_titles(HOT_LIMIT).await?;
        for title in titles {
            println!("{title}");
        }
        Ok(())
    }

    async fn run_tally<S: Service>(
        &self,
        subreddit: &Subreddit<S>,
        words: &[String],
    ) -> Result<(), Error> {
        let words = TargetWordSet::new(words);
        let tally = subreddit.tally(&words).await?;
        if !tally.is_empty() {
            println!("{tally}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        Config::parse_from([&["subtally"], args].concat())
    }

    #[test]
    fn it_parses_the_subreddit_for_each_command() {
        assert_eq!(config(&["subscribers", "rust"]).subreddit(), "rust");
        assert_eq!(config(&["hot", "rust"]).subreddit(), "rust");
        assert_eq!(config(&["tally", "rust", "python"]).subreddit(), "rust");
    }

    #[test]
    fn it_accepts_command_aliases() {
        assert_eq!(config(&["s", "rust"]).subreddit(), "rust");
        assert_eq!(config(&["h", "rust"]).subreddit(), "rust");
        assert_eq!(config(&["t", "rust", "python"]).subreddit(), "rust");
    }

    #[test]
    fn it_builds_a_runner_for_valid_input() {
        let runner = Runner::new(config(&["tally", "rust", "python java"]));
        assert!(runner.is_ok());
    }

    #[test]
    fn it_rejects_an_empty_subreddit_name() {
        let runner = Runner::new(config(&["hot", ""]));
        assert_eq!(runner.unwrap_err(), InputError::MissingSubreddit);
    }

    #[test]
    fn it_rejects_a_tally_with_no_words() {
        let runner = Runner::new(config(&["tally", "rust"]));
        assert_eq!(runner.unwrap_err(), InputError::MissingWords);
    }

    #[test]
    fn it_rejects_a_tally_with_only_blank_words() {
        let runner = Runner::new(config(&["tally", "rust", "   "]));
        assert_eq!(runner.unwrap_err(), InputError::MissingWords);
    }
}
