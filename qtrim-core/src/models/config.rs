use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_QUEUE_CAPACITY;
use crate::errors::ConfigError;
use crate::models::classifier::Classifier;
use crate::models::criterion::Criterion;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Four lines per record, the quality string is the fourth.
    #[default]
    Fastq,
    /// One quality string per line.
    Lines,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fastq" | "fq" => Ok(InputFormat::Fastq),
            "lines" | "txt" | "grid" => Ok(InputFormat::Lines),
            _ => Err(format!("Invalid input format: {}", s)),
        }
    }
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

///
/// Run configuration as it is written by a user, either in a TOML file or assembled from
/// command line arguments. Use [`TrimConfig::validate`] to turn it into [`TrimSettings`].
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TrimConfig {
    pub rows: usize,
    pub length: usize,
    pub threshold: Option<i32>,
    pub shift: Option<i32>,
    pub zeros: Option<usize>,
    pub percent: Option<f64>,
    pub mean: Option<f64>,
    #[serde(default)]
    pub threads: usize,
    #[serde(default)]
    pub format: InputFormat,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

///
/// Validated settings consumed by the matrix engine.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimSettings {
    pub rows: usize,
    pub length: usize,
    pub classifier: Classifier,
    pub criterion: Criterion,
    /// Number of worker threads, `0` runs sequentially on the calling thread.
    pub threads: usize,
    pub queue_capacity: usize,
}

impl TrimConfig {
    pub fn new(rows: usize, length: usize) -> Self {
        Self {
            rows,
            length,
            threshold: None,
            shift: None,
            zeros: None,
            percent: None,
            mean: None,
            threads: 0,
            format: InputFormat::default(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    ///
    /// Check every parameter and pick the criterion.
    ///
    pub fn validate(&self) -> Result<TrimSettings, ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::InvalidLength);
        }
        if self.rows == 0 {
            return Err(ConfigError::InvalidRows);
        }
        // window counts are u32
        if u32::try_from(self.rows).is_err() {
            return Err(ConfigError::TooManyRows {
                rows: self.rows,
                max: u32::MAX,
            });
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::InvalidQueueCapacity);
        }

        let given = [
            self.zeros.is_some(),
            self.percent.is_some(),
            self.mean.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();
        if given > 1 {
            return Err(ConfigError::ConflictingCriteria);
        }

        let criterion = if let Some(zeros) = self.zeros {
            if zeros > self.length {
                return Err(ConfigError::ZerosOutOfRange {
                    zeros,
                    length: self.length,
                });
            }
            Criterion::KBadAllowed(zeros)
        } else if let Some(percent) = self.percent {
            if !(0.0..=1.0).contains(&percent) {
                return Err(ConfigError::PercentOutOfRange(percent));
            }
            Criterion::PercentBadAllowed(percent)
        } else if let Some(mean) = self.mean {
            if !mean.is_finite() || mean < 0.0 {
                return Err(ConfigError::MeanOutOfRange(mean));
            }
            Criterion::MeanAtLeast(mean)
        } else {
            Criterion::ExactGood
        };

        let classifier = match (criterion, self.threshold, self.shift) {
            (Criterion::MeanAtLeast(_), _, None) => return Err(ConfigError::MeanWithoutShift),
            (Criterion::MeanAtLeast(_), threshold, Some(shift)) => {
                if threshold.is_some() {
                    warn!("The mean criterion ignores the threshold");
                }
                Classifier::new(self.length, None, shift)
            }
            (_, Some(_), None) => return Err(ConfigError::ThresholdWithoutShift),
            (_, Some(threshold), Some(shift)) => {
                Classifier::new(self.length, Some(threshold), shift)
            }
            (_, None, shift) => {
                if shift.is_some() {
                    warn!("No threshold given, reading input as a 0/1 grid and ignoring the shift");
                }
                Classifier::grid(self.length)
            }
        };

        Ok(TrimSettings {
            rows: self.rows,
            length: self.length,
            classifier,
            criterion,
            threads: self.threads,
            queue_capacity: self.queue_capacity,
        })
    }
}

impl TryFrom<&Path> for TrimConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

impl TrimSettings {
    ///
    /// Settings for an in-memory run without going through [`TrimConfig`].
    ///
    pub fn new(rows: usize, classifier: Classifier, criterion: Criterion) -> Self {
        Self {
            rows,
            length: classifier.length(),
            classifier,
            criterion,
            threads: 0,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::io::Write;

    #[fixture]
    fn config() -> TrimConfig {
        let mut config = TrimConfig::new(100, 50);
        config.threshold = Some(20);
        config.shift = Some(33);
        config
    }

    #[rstest]
    fn test_defaults_to_exact_good(config: TrimConfig) {
        let settings = config.validate().unwrap();
        assert_eq!(settings.criterion, Criterion::ExactGood);
        assert_eq!(settings.classifier, Classifier::new(50, Some(20), 33));
        assert_eq!(settings.threads, 0);
    }

    #[rstest]
    fn test_picks_single_criterion(mut config: TrimConfig) {
        config.percent = Some(0.25);
        let settings = config.validate().unwrap();
        assert_eq!(settings.criterion, Criterion::PercentBadAllowed(0.25));
    }

    #[rstest]
    fn test_conflicting_criteria(mut config: TrimConfig) {
        config.zeros = Some(2);
        config.mean = Some(20.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ConflictingCriteria)
        ));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn test_percent_out_of_range(mut config: TrimConfig, #[case] percent: f64) {
        config.percent = Some(percent);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PercentOutOfRange(_))
        ));
    }

    #[rstest]
    fn test_zeros_longer_than_read(mut config: TrimConfig) {
        config.zeros = Some(51);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZerosOutOfRange {
                zeros: 51,
                length: 50
            })
        ));
    }

    #[rstest]
    fn test_threshold_without_shift(mut config: TrimConfig) {
        config.shift = None;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdWithoutShift)
        ));
    }

    #[rstest]
    fn test_mean_without_shift(mut config: TrimConfig) {
        config.shift = None;
        config.threshold = None;
        config.mean = Some(30.0);
        assert!(matches!(config.validate(), Err(ConfigError::MeanWithoutShift)));
    }

    #[rstest]
    fn test_mean_drops_threshold(mut config: TrimConfig) {
        config.mean = Some(30.0);
        let settings = config.validate().unwrap();
        assert_eq!(settings.classifier.threshold(), None);
        assert_eq!(settings.classifier.shift(), 33);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(10, 0)]
    fn test_empty_dimensions(#[case] rows: usize, #[case] length: usize) {
        let config = TrimConfig::new(rows, length);
        assert!(config.validate().is_err());
    }

    #[rstest]
    fn test_rows_beyond_count_range() {
        let rows = u32::MAX as usize + 1;
        assert!(matches!(
            TrimConfig::new(rows, 10).validate(),
            Err(ConfigError::TooManyRows { max: u32::MAX, .. })
        ));
        assert!(TrimConfig::new(u32::MAX as usize, 10).validate().is_ok());
    }

    #[rstest]
    fn test_without_threshold_reads_grid() {
        let settings = TrimConfig::new(2, 4).validate().unwrap();
        assert_eq!(settings.classifier, Classifier::grid(4));
    }

    #[rstest]
    fn test_try_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "rows = 1000\nlength = 100\nthreshold = 20\nshift = 33\nzeros = 3\nthreads = 4\nformat = \"lines\""
        )
        .unwrap();

        let config = TrimConfig::try_from(file.path()).unwrap();
        assert_eq!(config.rows, 1000);
        assert_eq!(config.zeros, Some(3));
        assert_eq!(config.format, InputFormat::Lines);
        assert_eq!(config.queue_capacity, DEFAULT_QUEUE_CAPACITY);

        let settings = config.validate().unwrap();
        assert_eq!(settings.criterion, Criterion::KBadAllowed(3));
        assert_eq!(settings.threads, 4);
    }

    #[rstest]
    fn test_try_from_missing_file() {
        let result = TrimConfig::try_from(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
