use clap::ValueEnum;

use crate::{battery::Battery, error::BlockError, json::tuples_to_json};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Full text, short text and colour on three lines
    #[default]
    I3blocks,
    Json,
}

/// i3blocks output, see <http://vivien.github.io/i3blocks/#_format>
#[must_use]
pub fn i3block(battery: &Battery) -> String {
    let text = format!("{} {}%", battery.label(), battery.whole_percent());

    format!("{text}\n{text}\n{}", battery.color())
}

/// # Errors
/// Returns an error if the battery can't be serialized
pub fn render(battery: &Battery, format: OutputFormat) -> Result<String, BlockError> {
    match format {
        OutputFormat::I3blocks => Ok(i3block(battery)),
        OutputFormat::Json => tuples_to_json(battery.get_tuples()),
    }
}
