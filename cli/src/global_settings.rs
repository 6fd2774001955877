use clap::{Arg, ArgAction, ArgMatches, arg};
use console::Term;

pub struct GlobalSettings {
    pub table: crate::tables::Settings,

    // Maximal width of the output, in characters
    pub width: usize,

    // Number of times --verbose was given
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--width [COLUMNS] "Maximal width of the output")
                .value_parser(clap::value_parser!(usize))
                .global(true),
            arg!(-v --verbose ... "Show more logs (repeat for more)")
                .action(ArgAction::Count)
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.  The width
    /// defaults to the size of the terminal.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            width: args
                .get_one::<usize>("width")
                .copied()
                .unwrap_or_else(|| Term::stdout().size().1 as usize),
            verbosity: args.get_count("verbose"),
            table: crate::tables::Settings::default(),
        }
    }

    /// The default log filter, unless RUST_LOG is set
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn init_logger(&self) {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level()),
        )
        .init();
    }
}
