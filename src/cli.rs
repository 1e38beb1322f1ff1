use clap::{Parser, Subcommand};

use crate::{
    battery::{Battery, BatteryGetCommands, Selection},
    block::{render, OutputFormat},
    command::{AcpiRunner, DEFAULT_COMMAND},
    error::BlockError,
};

#[derive(Parser, Debug)]
#[command(name = "battery_block", about = "Prints a battery block for i3blocks using the output of acpi", long_about = None)]
pub struct Cli {
    /// Read only this battery number instead of the first one above 0%
    #[arg(short, long)]
    pub index: Option<u32>,

    /// Command which prints "Battery N: <state>, P%" lines
    #[arg(short, long, default_value = DEFAULT_COMMAND)]
    pub command: String,

    /// Extra argument for the battery command, may be repeated
    #[arg(long = "arg", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Output format of the whole block, `get` always prints the bare value
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub commands: Option<CliCommands>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommands {
    /// Print a single value instead of the whole block
    Get {
        #[command(subcommand)]
        commands: BatteryGetCommands,
    },
}

impl Cli {
    #[must_use]
    pub const fn selection(&self) -> Selection {
        match self.index {
            Some(index) => Selection::Index(index),
            None => Selection::FirstNonZero,
        }
    }

    #[must_use]
    pub fn runner(&self) -> AcpiRunner {
        AcpiRunner {
            name: self.command.clone(),
            args: self.args.clone(),
        }
    }
}

/// # Errors
/// Returns an error if the battery can't be read or rendered
pub fn match_cli(cli: &Cli) -> Result<String, BlockError> {
    let battery = Battery::get(&cli.runner(), cli.selection())?;

    match cli.commands {
        Some(CliCommands::Get { commands }) => Ok(battery.get_value(commands)),
        None => render(&battery, cli.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["battery_block"]).unwrap();

        assert_eq!(cli.selection(), Selection::FirstNonZero);
        assert_eq!(cli.command, "acpi");
        assert!(cli.args.is_empty());
        assert_eq!(cli.format, OutputFormat::I3blocks);
        assert!(cli.commands.is_none());
    }

    #[test]
    fn index_switches_selection() {
        let cli = Cli::try_parse_from(["battery_block", "--index", "1"]).unwrap();
        assert_eq!(cli.selection(), Selection::Index(1));
    }

    #[test]
    fn get_aliases() {
        let cli = Cli::try_parse_from(["battery_block", "get", "notify"]).unwrap();
        assert!(matches!(
            cli.commands,
            Some(CliCommands::Get {
                commands: BatteryGetCommands::Urgency
            })
        ));
    }

    #[test]
    fn runner_from_arguments() {
        let cli = Cli::try_parse_from(["battery_block", "-c", "echo", "--arg", "-b", "-f", "json"]).unwrap();
        let runner = cli.runner();

        assert_eq!(runner.name, "echo");
        assert_eq!(runner.args, ["-b"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn end_to_end_with_echo() {
        let cli = Cli::try_parse_from([
            "battery_block",
            "-c",
            "echo",
            "--arg",
            "Battery 0: Discharging, 15%, 00:20:00 remaining",
        ])
        .unwrap();

        assert_eq!(match_cli(&cli).unwrap(), "\u{f243} 15%\n\u{f243} 15%\n#EF3340");
    }

    #[test]
    fn get_prints_bare_value_whatever_the_format() {
        let cli = Cli::try_parse_from([
            "battery_block",
            "-c",
            "echo",
            "--arg",
            "Battery 0: Discharging, 15%, 00:20:00 remaining",
            "-f",
            "json",
            "get",
            "color",
        ])
        .unwrap();

        assert_eq!(match_cli(&cli).unwrap(), "#EF3340");
    }

    #[test]
    fn failing_command_is_fatal() {
        let cli = Cli::try_parse_from(["battery_block", "-c", "false"]).unwrap();
        assert!(matches!(match_cli(&cli), Err(BlockError::CommandError { .. })));
    }
}
