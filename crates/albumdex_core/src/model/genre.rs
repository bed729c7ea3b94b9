use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed genre categories.
///
/// Sorting uses the textual name, not declaration order:
/// `Classical < Country < Jazz < Pop < Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Pop,
    Country,
    Classical,
    Jazz,
    Unknown,
}

impl Genre {
    /// Resolves a command token case-insensitively. Unrecognized tokens map
    /// to [`Genre::Unknown`].
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "pop" => Self::Pop,
            "country" => Self::Country,
            "classical" => Self::Classical,
            "jazz" => Self::Jazz,
            _ => Self::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pop => "Pop",
            Self::Country => "Country",
            Self::Classical => "Classical",
            Self::Jazz => "Jazz",
            Self::Unknown => "Unknown",
        }
    }
}

impl FromStr for Genre {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Genre;

    #[test]
    fn from_token_is_case_insensitive() {
        assert_eq!(Genre::from_token("POP"), Genre::Pop);
        assert_eq!(Genre::from_token("country"), Genre::Country);
        assert_eq!(Genre::from_token("Classical"), Genre::Classical);
        assert_eq!(Genre::from_token("jAzZ"), Genre::Jazz);
    }

    #[test]
    fn unrecognized_token_maps_to_unknown() {
        assert_eq!(Genre::from_token("rock"), Genre::Unknown);
        assert_eq!("".parse::<Genre>().unwrap(), Genre::Unknown);
    }
}
