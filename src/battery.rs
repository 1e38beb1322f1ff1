use clap::Subcommand;
use regex::Regex;

use crate::{command::Runner, error::BlockError, urgency::Thresholds, urgency::Urgency};

// ASCII digits and word characters only
const BATTERY_PATTERN: &str = r"Battery ([0-9]+): [0-9A-Za-z_ ]+, ([0-9]+)%";

const ICON_CHARGING: &str = "\u{f1e6}";
const ICON_EMPTY: &str = "\u{f244}";
const ICON_QUARTER: &str = "\u{f243}";
const ICON_HALF: &str = "\u{f242}";
const ICON_THREE_QUARTERS: &str = "\u{f241}";
const ICON_FULL: &str = "\u{f240}";

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum BatteryGetCommands {
    #[command(alias = "per", alias = "p")]
    Percent,
    #[command(alias = "l")]
    Label,
    #[command(alias = "notify", alias = "n")]
    Urgency,
    #[command(alias = "c")]
    Color,
    #[command(alias = "ch")]
    Charging,
}

/// Which `acpi` line the battery is read from
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Selection {
    /// First battery reporting more than 0%, charging taken from the whole output
    FirstNonZero,
    /// Only the battery with this number, charging left unknown
    Index(u32),
}

impl Selection {
    #[must_use]
    pub const fn thresholds(self) -> Thresholds {
        match self {
            Self::FirstNonZero => Thresholds::Relaxed,
            Self::Index(_) => Thresholds::Tight,
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Battery {
    /// Remaining charge in `0.0..=1.0`
    pub percent: f64,
    pub charging: Option<bool>,
    pub thresholds: Thresholds,
}

impl Battery {
    /// # Errors
    /// Returns an error if the runner fails or no battery matches `selection`
    pub fn get(runner: &impl Runner, selection: Selection) -> Result<Self, BlockError> {
        let output = runner.run()?;

        let battery = Self::parse(&output, selection)?;
        log::debug!("Parsed {battery:?} using {selection:?}");

        Ok(battery)
    }

    /// # Errors
    /// Returns an error if no battery in `output` matches `selection`
    pub fn parse(output: &str, selection: Selection) -> Result<Self, BlockError> {
        let pattern = Regex::new(BATTERY_PATTERN)?;

        match selection {
            Selection::FirstNonZero => Self::parse_first_non_zero(&pattern, output),
            Selection::Index(index) => Self::parse_index(&pattern, output, index),
        }
    }

    fn parse_first_non_zero(pattern: &Regex, output: &str) -> Result<Self, BlockError> {
        for captures in pattern.captures_iter(output) {
            let Ok(whole) = captures[2].parse::<u32>() else {
                log::debug!("Skipping unparseable percentage '{}'", &captures[2]);
                continue;
            };

            if whole == 0 || whole > 100 {
                continue;
            }

            return Ok(Self {
                percent: f64::from(whole) / 100.,
                charging: Some(output.contains("Charging")),
                thresholds: Selection::FirstNonZero.thresholds(),
            });
        }

        Err(BlockError::NotFound {
            output: output.to_string(),
        })
    }

    fn parse_index(pattern: &Regex, output: &str, index: u32) -> Result<Self, BlockError> {
        let captures = pattern
            .captures_iter(output)
            .find(|captures| captures[1].parse::<u32>().is_ok_and(|i| i == index))
            .ok_or_else(|| BlockError::IndexNotFound {
                index,
                output: output.to_string(),
            })?;

        let whole = captures[2]
            .parse::<u32>()
            .map_err(|e| BlockError::StringParse {
                debug_string: captures[2].to_string(),
                e,
            })?;

        match whole {
            0 => Err(BlockError::EmptyBattery { index }),
            1..=100 => Ok(Self {
                percent: f64::from(whole) / 100.,
                charging: None,
                thresholds: Selection::Index(index).thresholds(),
            }),
            percent => Err(BlockError::PercentOutOfRange { index, percent }),
        }
    }

    /// Font Awesome 5 glyph for the charge level
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.charging == Some(true) {
            return ICON_CHARGING;
        }

        match self.percent {
            p if p <= 0.1 => ICON_EMPTY,
            p if p <= 0.3 => ICON_QUARTER,
            p if p <= 0.5 => ICON_HALF,
            p if p <= 0.8 => ICON_THREE_QUARTERS,
            _ => ICON_FULL,
        }
    }

    #[must_use]
    pub fn urgency(&self) -> Urgency {
        self.thresholds.urgency(self.percent)
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        self.urgency().color()
    }

    /// Percentage rounded half away from zero, so 0.995 shows as 100
    #[must_use]
    pub fn whole_percent(&self) -> i64 {
        (self.percent * 100.).round() as i64
    }

    #[must_use]
    pub fn charging_string(&self) -> String {
        self.charging.map_or_else(|| "unknown".to_string(), |charging| charging.to_string())
    }

    #[must_use]
    pub fn get_tuples(&self) -> Vec<(String, String)> {
        let mut tuples = vec![
            ("percent".to_string(), self.whole_percent().to_string()),
            ("label".to_string(), self.label().to_string()),
            ("urgency".to_string(), self.urgency().to_string()),
            ("color".to_string(), self.color().to_string()),
        ];

        if let Some(charging) = self.charging {
            tuples.push(("charging".to_string(), charging.to_string()));
        }

        tuples
    }

    #[must_use]
    pub fn get_value(&self, command: BatteryGetCommands) -> String {
        match command {
            BatteryGetCommands::Percent => self.whole_percent().to_string(),
            BatteryGetCommands::Label => self.label().to_string(),
            BatteryGetCommands::Urgency => self.urgency().to_string(),
            BatteryGetCommands::Color => self.color().to_string(),
            BatteryGetCommands::Charging => self.charging_string(),
        }
    }
}
