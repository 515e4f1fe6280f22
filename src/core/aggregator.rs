use crate::models::UtilityVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while aggregating utilities
#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("Cannot aggregate an empty participant list")]
    NoParticipants,

    #[error("Unknown welfare scheme: {0} (expected egalitarian, utilitarian or nash)")]
    UnknownScheme(String),

    #[error("Nash product underflowed for venue at index {index} over {participants} participants")]
    NashUnderflow { index: usize, participants: usize },
}

/// Social-welfare rule used to combine utility vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WelfareScheme {
    /// Worst-off participant determines the score
    #[serde(alias = "min")]
    Egalitarian,
    /// Sum of utilities
    #[serde(alias = "total")]
    Utilitarian,
    /// Product of utilities
    #[serde(alias = "product")]
    Nash,
}

impl WelfareScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            WelfareScheme::Egalitarian => "egalitarian",
            WelfareScheme::Utilitarian => "utilitarian",
            WelfareScheme::Nash => "nash",
        }
    }

    #[inline]
    fn combine(self, acc: f64, utility: f64) -> f64 {
        match self {
            WelfareScheme::Egalitarian => acc.min(utility),
            WelfareScheme::Utilitarian => acc + utility,
            WelfareScheme::Nash => acc * utility,
        }
    }
}

impl fmt::Display for WelfareScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WelfareScheme {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "egalitarian" | "min" => Ok(WelfareScheme::Egalitarian),
            "utilitarian" | "total" => Ok(WelfareScheme::Utilitarian),
            "nash" | "product" => Ok(WelfareScheme::Nash),
            other => Err(AggregateError::UnknownScheme(other.to_string())),
        }
    }
}

/// Aggregate score of the venue at `index` in the run's catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateScore {
    pub index: usize,
    pub score: f64,
}

/// Reduce per-person utility vectors into one ranking
///
/// Returns one entry per venue, sorted by descending score. Equal scores keep
/// catalog order.
///
/// # Errors
/// `NoParticipants` for an empty input. `NashUnderflow` when a Nash product of
/// strictly positive utilities is no longer a normal float, which would turn
/// the ranking into a tie at zero.
///
/// # Panics
/// Panics if the vectors do not all have the same length; every vector of a
/// run must be resolved against the same catalog.
pub fn aggregate(
    vectors: &[UtilityVector],
    scheme: WelfareScheme,
) -> Result<Vec<AggregateScore>, AggregateError> {
    let (first, rest) = vectors
        .split_first()
        .ok_or(AggregateError::NoParticipants)?;

    let mut scores = first.clone();
    for vector in rest {
        assert_eq!(
            vector.len(),
            scores.len(),
            "utility vectors must be aligned with the same catalog"
        );
        for (acc, utility) in scores.iter_mut().zip(vector) {
            *acc = scheme.combine(*acc, *utility);
        }
    }

    if scheme == WelfareScheme::Nash {
        if let Some(index) = scores.iter().enumerate().position(|(index, score)| {
            !score.is_normal() && vectors.iter().all(|v| v[index] > 0.0)
        }) {
            return Err(AggregateError::NashUnderflow {
                index,
                participants: vectors.len(),
            });
        }
    }

    let mut ranked: Vec<AggregateScore> = scores
        .into_iter()
        .enumerate()
        .map(|(index, score)| AggregateScore { index, score })
        .collect();

    // Stable sort keeps catalog order among ties
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(ranked: &[AggregateScore]) -> Vec<usize> {
        ranked.iter().map(|s| s.index).collect()
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            aggregate(&[], WelfareScheme::Nash).unwrap_err(),
            AggregateError::NoParticipants
        );
    }

    #[test]
    fn test_single_participant_every_scheme() {
        let vector = vec![0.3, 0.9, 0.5];
        for scheme in [
            WelfareScheme::Egalitarian,
            WelfareScheme::Utilitarian,
            WelfareScheme::Nash,
        ] {
            let ranked = aggregate(&[vector.clone()], scheme).unwrap();
            assert_eq!(indices(&ranked), vec![1, 2, 0]);
            let scores: Vec<f64> = ranked.iter().map(|s| s.score).collect();
            assert_eq!(scores, vec![0.9, 0.5, 0.3]);
        }
    }

    #[test]
    fn test_schemes_disagree() {
        // Venue 0 is a compromise, venue 1 has one enthusiast and one detractor
        let a = vec![0.5, 1.0];
        let b = vec![0.5, 0.1];
        let vectors = vec![a, b];

        let egalitarian = aggregate(&vectors, WelfareScheme::Egalitarian).unwrap();
        assert_eq!(indices(&egalitarian), vec![0, 1]);
        assert_eq!(egalitarian[0].score, 0.5);

        let utilitarian = aggregate(&vectors, WelfareScheme::Utilitarian).unwrap();
        assert_eq!(indices(&utilitarian), vec![1, 0]);
        assert!((utilitarian[0].score - 1.1).abs() < 1e-12);

        let nash = aggregate(&vectors, WelfareScheme::Nash).unwrap();
        assert_eq!(indices(&nash), vec![0, 1]);
        assert!((nash[0].score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let vectors = vec![vec![0.5, 0.7, 0.5, 0.7], vec![0.5, 0.7, 0.5, 0.7]];
        let ranked = aggregate(&vectors, WelfareScheme::Utilitarian).unwrap();
        assert_eq!(indices(&ranked), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_nash_underflow_reported() {
        let vectors = vec![vec![0.002, 0.0009]; 120];
        assert_eq!(
            aggregate(&vectors, WelfareScheme::Nash).unwrap_err(),
            AggregateError::NashUnderflow {
                index: 0,
                participants: 120
            }
        );

        // Sums of the same vectors stay meaningful
        let ranked = aggregate(&vectors, WelfareScheme::Utilitarian).unwrap();
        assert_eq!(indices(&ranked), vec![0, 1]);
    }

    #[test]
    fn test_nash_zero_utility_is_not_underflow() {
        let vectors = vec![vec![0.0, 0.5], vec![0.4, 0.5]];
        let ranked = aggregate(&vectors, WelfareScheme::Nash).unwrap();
        assert_eq!(indices(&ranked), vec![1, 0]);
        assert_eq!(ranked[1].score, 0.0);
    }

    #[test]
    #[should_panic(expected = "aligned")]
    fn test_length_mismatch_panics() {
        let _ = aggregate(&[vec![1.0, 2.0], vec![1.0]], WelfareScheme::Utilitarian);
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("min".parse::<WelfareScheme>().unwrap(), WelfareScheme::Egalitarian);
        assert_eq!("Total".parse::<WelfareScheme>().unwrap(), WelfareScheme::Utilitarian);
        assert_eq!("nash".parse::<WelfareScheme>().unwrap(), WelfareScheme::Nash);
        assert_eq!(
            "borda".parse::<WelfareScheme>().unwrap_err(),
            AggregateError::UnknownScheme("borda".to_string())
        );
    }

    #[test]
    fn test_scheme_deserialization() {
        let scheme: WelfareScheme = serde_json::from_str("\"product\"").unwrap();
        assert_eq!(scheme, WelfareScheme::Nash);
        assert!(serde_json::from_str::<WelfareScheme>("\"median\"").is_err());
    }
}
