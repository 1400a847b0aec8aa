use crate::converter::DEFAULT_INPUT_DIRECTORY;
use crate::Arguments;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgMatches,
    Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        Self::register_input_directory_argument(command)
    }

    fn register_input_directory_argument(command: Command) -> Command {
        command.arg(Self::create_input_directory_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_directory_argument() -> Arg {
        Arg::new("input_directory")
            .help("Path to directory containing WebP input files")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_INPUT_DIRECTORY)
            .required(false)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_directory: Self::extract_input_directory_argument(matches),
        }
    }

    fn extract_input_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_directory")
            .expect("Input directory must be provided, but was unset.")
            .clone()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
