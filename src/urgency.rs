use std::fmt;

/// `notify-send` urgency derived from the remaining charge
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Urgency {
    Critical,
    Normal,
    Low,
    None,
}

impl Urgency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Normal => "normal",
            Self::Low => "low",
            Self::None => "",
        }
    }

    /// Block colour for i3blocks, empty when the bar's default should be used
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "#EF3340",
            Self::Normal => "#FF8000",
            Self::Low => "#EFEFEF",
            Self::None => "",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bounds (inclusive) for each urgency level.
///
/// Scanning `acpi` output for the first charged battery warns early, picking a battery by index warns late.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Thresholds {
    Relaxed,
    Tight,
}

impl Thresholds {
    const fn bounds(self) -> [f64; 3] {
        match self {
            Self::Relaxed => [0.2, 0.3, 0.4],
            Self::Tight => [0.1, 0.2, 0.3],
        }
    }

    #[must_use]
    pub fn urgency(self, percent: f64) -> Urgency {
        let [critical, normal, low] = self.bounds();

        if percent <= critical {
            Urgency::Critical
        } else if percent <= normal {
            Urgency::Normal
        } else if percent <= low {
            Urgency::Low
        } else {
            Urgency::None
        }
    }
}
