use crate::global_settings::GlobalSettings;
use clap::{Arg, Command};

pub(crate) fn build_cli() -> Command {
    Command::new("interval-demo")
        .version("0.1")
        .about("Walk through the interval set and interval map operations")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("range-set")
                .about("Add and remove intervals in a set, then query it"),
        )
        .subcommand(
            Command::new("range-map")
                .about("Map intervals to values, then query the map"),
        )
        .subcommand(Command::new("all").about("Run all walkthroughs"))
        .subcommand(
            // Use    eval "$(interval-demo completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
