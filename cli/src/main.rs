mod args;
mod global_settings;
mod range_map_view;
mod range_set_view;
pub mod tables;
mod walkthrough;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use crate::range_map_view::range_map_view;
use crate::range_set_view::range_set_view;
use anyhow::Result;

fn main() -> Result<()> {
    let args = build_cli().get_matches();
    let globals = GlobalSettings::new(&args);
    globals.init_logger();

    match args.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell").cloned()
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
        }
        Some(("range-set", _)) => {
            println!("{}", range_set_view(&globals)?);
        }
        Some(("range-map", _)) => {
            println!("{}", range_map_view(&globals)?);
        }
        Some(("all", _)) => {
            println!("{}", range_set_view(&globals)?);
            println!("{}", range_map_view(&globals)?);
        }
        Some((other, _)) => {
            anyhow::bail!("unknown command {other}, run with --help");
        }
        None => {}
    }
    Ok(())
}
