//! Destination-suggestion parameters and prompt construction.
//!
//! The prompt is the only place the candidate schema is asserted; the
//! upstream model is free to ignore it, so nothing downstream trusts the
//! shape described here (see [`crate::materialize`]).

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of suggestions the upstream model is asked to return.
pub const SUGGESTION_COUNT: usize = 3;

/// Budget used when neither the request nor the trip supplies one.
pub const DEFAULT_BUDGET: f64 = 1000.0;
/// Season used when neither the request nor the trip supplies one.
pub const DEFAULT_SEASON: &str = "any";
/// Interests used when neither the request nor the trip supplies them.
pub const DEFAULT_INTERESTS: &str = "sightseeing";

/// Keys (and their declared JSON types) each suggestion object must carry.
pub const CANDIDATE_FIELDS: &[(&str, &str)] = &[
    ("name", "string"),
    ("country", "string"),
    ("city", "string"),
    ("estimated_cost", "number"),
    ("best_season", "string"),
    ("matching_interests", "array of strings"),
    ("description", "string"),
];

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Planning inputs interpolated into the generation prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Budget in USD.
    pub budget: f64,
    /// Free-text travel season (e.g. `"summer"`).
    pub season: String,
    /// Comma-separated interest tags (e.g. `"beach,food"`).
    pub interests: String,
}

impl GenerationParams {
    /// Build parameters from the first available value of each field.
    ///
    /// Each argument is tried in order (request value, then stored trip
    /// value); blank strings count as missing. Fields with no value at all
    /// fall back to [`DEFAULT_BUDGET`], [`DEFAULT_SEASON`] and
    /// [`DEFAULT_INTERESTS`].
    pub fn resolve(
        budget: [Option<f64>; 2],
        season: [Option<&str>; 2],
        interests: [Option<&str>; 2],
    ) -> Self {
        let first_text = |values: [Option<&str>; 2], default: &str| {
            values
                .into_iter()
                .flatten()
                .find(|s| !s.trim().is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            budget: budget.into_iter().flatten().next().unwrap_or(DEFAULT_BUDGET),
            season: first_text(season, DEFAULT_SEASON),
            interests: first_text(interests, DEFAULT_INTERESTS),
        }
    }
}

// ---------------------------------------------------------------------------
// Prompt
// ---------------------------------------------------------------------------

/// Build the single natural-language instruction sent upstream.
///
/// The instruction fixes the task, the cardinality ([`SUGGESTION_COUNT`]),
/// the per-suggestion object shape ([`CANDIDATE_FIELDS`]) and demands a
/// bare JSON reply. The three parameters are interpolated verbatim.
pub fn build_prompt(params: &GenerationParams) -> String {
    let keys = CANDIDATE_FIELDS
        .iter()
        .map(|(key, kind)| format!("`{key}` ({kind})"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a travel planner. \
         Given a budget (in USD), a travel season, and comma-separated interests, \
         return exactly {count} destination suggestions as a JSON array. \
         Each destination must be an object with these keys: {keys}.\n\n\
         Budget: {budget}\n\
         Season: {season}\n\
         Interests: {interests}\n\n\
         Respond with JSON only, no extra text.",
        count = SUGGESTION_COUNT,
        budget = params.budget,
        season = params.season,
        interests = params.interests,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
