//! Core types for poke-dl

use serde::{Deserialize, Serialize};

use crate::error::{FetchError, QueryError};

/// Highest Pokemon index the remote API currently serves
pub const MAX_POKEMON_ID: u16 = 1025;

/// Lowest valid Pokemon index
pub const MIN_POKEMON_ID: u16 = 1;

/// One decoded Pokemon record
///
/// Only `id` is load-bearing for the library: it is the unique ordering key for
/// assembled batches. The remaining fields are descriptive and pass through to
/// the rendered output unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Unique numeric identity, ascending ordering key
    pub id: u32,
    /// Lowercase species name
    pub name: String,
    /// Height in decimeters
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base experience yield; absent for some species
    #[serde(default)]
    pub base_experience: Option<u32>,
}

impl Pokemon {
    /// Render this record as a single human-readable line
    pub fn human_readable(&self) -> String {
        let xp = self
            .base_experience
            .map(|xp| xp.to_string())
            .unwrap_or_else(|| "?".to_string());
        format!(
            "#{:04} {} (height: {}, weight: {}, base xp: {})",
            self.id, self.name, self.height, self.weight, xp
        )
    }
}

/// One invocation's query, the three modes mutually exclusive by construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Look up a single Pokemon by name
    Name(String),
    /// Look up a single Pokemon by index
    Number(u16),
    /// Fetch an inclusive range of indexes
    Range {
        /// Inclusive lower bound
        low: u16,
        /// Inclusive upper bound
        high: u16,
    },
}

impl Query {
    /// Build a name query
    ///
    /// The API only knows lowercase names, so the input is lowercased here.
    pub fn name(name: &str) -> Result<Self, QueryError> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(QueryError::EmptyName);
        }
        Ok(Self::Name(name))
    }

    /// Build a single-index query
    ///
    /// The index must lie within `[1, 1025]`; out-of-bounds numbers are
    /// rejected here, before any network activity.
    pub fn number(number: u16) -> Result<Self, QueryError> {
        if !(MIN_POKEMON_ID..=MAX_POKEMON_ID).contains(&number) {
            return Err(QueryError::NumberOutOfBounds {
                number,
                max: MAX_POKEMON_ID,
            });
        }
        Ok(Self::Number(number))
    }

    /// Parse a `<low>-<high>` range string and validate the bounds
    ///
    /// Both bounds must be integers within `[1, 1025]` and the lower bound must
    /// not exceed the upper bound. Rejections happen here, before any network
    /// activity.
    pub fn parse_range(input: &str) -> Result<Self, QueryError> {
        let Some((low, high)) = input.split_once('-') else {
            return Err(QueryError::Malformed {
                input: input.to_string(),
            });
        };

        let parse_bound = |bound: &str| {
            bound
                .trim()
                .parse::<u16>()
                .map_err(|_| QueryError::NonNumericBound {
                    bound: bound.to_string(),
                })
        };
        let low = parse_bound(low)?;
        let high = parse_bound(high)?;

        if low > high {
            return Err(QueryError::Inverted { low, high });
        }
        if low < MIN_POKEMON_ID || high > MAX_POKEMON_ID {
            return Err(QueryError::OutOfBounds {
                low,
                high,
                max: MAX_POKEMON_ID,
            });
        }
        Ok(Self::Range { low, high })
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name={}", name),
            Self::Number(number) => write!(f, "number={}", number),
            Self::Range { low, high } => write!(f, "range={}-{}", low, high),
        }
    }
}

/// Finalized result set for one invocation
///
/// Built once per query and immutable afterwards. Successes are ordered
/// ascending by `id`; failures are retained for reporting, never dropped.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successfully fetched records, sorted ascending by `id`
    pub pokemon: Vec<Pokemon>,
    /// Per-identifier failures, sorted by identifier
    pub failures: Vec<FetchError>,
}

impl BatchReport {
    /// A report containing exactly one record and no failures
    pub fn single(pokemon: Pokemon) -> Self {
        Self {
            pokemon: vec![pokemon],
            failures: Vec::new(),
        }
    }

    /// True when every identifier in the batch was fetched successfully
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
