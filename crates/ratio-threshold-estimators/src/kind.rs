//! Runtime selection of an estimator.

use crate::{
    counting_sort, nth_element, normal_estimate, standard_sort, uniform_sample, weighted_estimate,
    Ratio, ThresholdError, DEFAULT_SAMPLE_STRIDE,
};
use ratio_threshold_core::Pixel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameters shared by every estimator call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorParams {
    pub ratio: Ratio,
    /// Only read by [`EstimatorKind::UniformSample`].
    pub sample_stride: usize,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            ratio: Ratio::default(),
            sample_stride: DEFAULT_SAMPLE_STRIDE,
        }
    }
}

/// The six threshold estimators, in benchmark order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    CountingSort,
    StandardSort,
    NthElement,
    NormalEstimate,
    WeightedEstimate,
    UniformSample,
}

impl EstimatorKind {
    /// Every estimator in the fixed order the benchmark runs them.
    pub const ALL: [EstimatorKind; 6] = [
        EstimatorKind::CountingSort,
        EstimatorKind::StandardSort,
        EstimatorKind::NthElement,
        EstimatorKind::NormalEstimate,
        EstimatorKind::WeightedEstimate,
        EstimatorKind::UniformSample,
    ];

    /// Human-readable name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            EstimatorKind::CountingSort => "Counting Sort",
            EstimatorKind::StandardSort => "Standard Sort",
            EstimatorKind::NthElement => "Nth Element",
            EstimatorKind::NormalEstimate => "Normal Estimate",
            EstimatorKind::WeightedEstimate => "Weighted Estimate",
            EstimatorKind::UniformSample => "Uniform Sample",
        }
    }

    /// Identifier accepted by [`FromStr`] and used in JSON.
    pub fn id(self) -> &'static str {
        match self {
            EstimatorKind::CountingSort => "counting_sort",
            EstimatorKind::StandardSort => "standard_sort",
            EstimatorKind::NthElement => "nth_element",
            EstimatorKind::NormalEstimate => "normal_estimate",
            EstimatorKind::WeightedEstimate => "weighted_estimate",
            EstimatorKind::UniformSample => "uniform_sample",
        }
    }

    /// Whether the estimator reorders its input buffer.
    pub fn is_destructive(self) -> bool {
        matches!(self, EstimatorKind::StandardSort | EstimatorKind::NthElement)
    }

    /// Whether the estimator always returns the exact ratio quantile.
    pub fn is_exact(self) -> bool {
        matches!(
            self,
            EstimatorKind::CountingSort | EstimatorKind::StandardSort | EstimatorKind::NthElement
        )
    }

    /// Run the estimator on a buffer it may reorder.
    ///
    /// Destructive estimators leave `pixels` reordered; the others only read it.
    pub fn estimate_in_place<P: Pixel>(
        self,
        pixels: &mut [P],
        params: &EstimatorParams,
    ) -> Result<P, ThresholdError> {
        match self {
            EstimatorKind::StandardSort => standard_sort(pixels, params.ratio),
            EstimatorKind::NthElement => nth_element(pixels, params.ratio),
            _ => self.estimate(pixels, params),
        }
    }

    /// Run the estimator without touching `pixels`.
    ///
    /// Destructive estimators work on a private copy.
    pub fn estimate<P: Pixel>(
        self,
        pixels: &[P],
        params: &EstimatorParams,
    ) -> Result<P, ThresholdError> {
        match self {
            EstimatorKind::CountingSort => counting_sort(pixels, params.ratio),
            EstimatorKind::StandardSort | EstimatorKind::NthElement => {
                let mut work = pixels.to_vec();
                self.estimate_in_place(&mut work, params)
            }
            EstimatorKind::NormalEstimate => normal_estimate(pixels, params.ratio),
            EstimatorKind::WeightedEstimate => weighted_estimate(pixels, params.ratio),
            EstimatorKind::UniformSample => {
                uniform_sample(pixels, params.sample_stride, params.ratio)
            }
        }
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown estimator `{0}`")]
pub struct UnknownEstimator(pub String);

impl FromStr for EstimatorKind {
    type Err = UnknownEstimator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        EstimatorKind::ALL
            .into_iter()
            .find(|k| k.id() == key)
            .ok_or_else(|| UnknownEstimator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_and_display_names() {
        assert_eq!(
            "uniform_sample".parse::<EstimatorKind>(),
            Ok(EstimatorKind::UniformSample)
        );
        assert_eq!(
            "Nth Element".parse::<EstimatorKind>(),
            Ok(EstimatorKind::NthElement)
        );
        assert_eq!(
            "counting-sort".parse::<EstimatorKind>(),
            Ok(EstimatorKind::CountingSort)
        );
        assert!("otsu".parse::<EstimatorKind>().is_err());
    }

    #[test]
    fn estimate_never_mutates_input() {
        let px = vec![5u8, 4, 3, 2, 1];
        let params = EstimatorParams {
            ratio: Ratio::HALF,
            sample_stride: 1,
        };
        for kind in EstimatorKind::ALL {
            kind.estimate(&px, &params).expect("estimate");
            assert_eq!(px, [5, 4, 3, 2, 1], "{kind} modified its input");
        }
    }

    #[test]
    fn estimate_in_place_reorders_only_destructive_kinds() {
        let params = EstimatorParams::default();
        for kind in EstimatorKind::ALL {
            let mut px = vec![5u8, 4, 3, 2, 1];
            kind.estimate_in_place(&mut px, &params).expect("estimate");
            assert_eq!(px != [5, 4, 3, 2, 1], kind.is_destructive(), "{kind}");
        }
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&EstimatorKind::WeightedEstimate).expect("json");
        assert_eq!(json, "\"weighted_estimate\"");
    }
}
