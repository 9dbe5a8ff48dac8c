use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Line counting algorithm used for every file of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Line-by-line reads through `BufRead::read_until`.
    #[default]
    Getline,
    /// Byte-by-byte scan of a buffered stream.
    DelimiterScan,
    /// Fixed-size chunk reads scanned with `bytecount`.
    BufferedDelimiterScan,
}

impl Strategy {
    /// Benchmark order.
    pub const ALL: [Self; 3] = [Self::Getline, Self::DelimiterScan, Self::BufferedDelimiterScan];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Getline => "getline",
            Self::DelimiterScan => "delimiter-scan",
            Self::BufferedDelimiterScan => "buffered-delimiter-scan",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "getline" | "g" => Ok(Self::Getline),
            "delimiter-scan" | "ncount" | "n" => Ok(Self::DelimiterScan),
            "buffered-delimiter-scan" | "buffered-ncount" | "m" => Ok(Self::BufferedDelimiterScan),
            other => Err(format!("Unknown strategy: {other}")),
        }
    }
}
