// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as probability ranges, positive page sizes, and
//! seed count consistency.

use crate::diagnostic::ConfigError;
use crate::model::TalentflowConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TalentflowConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate snapshot_path is not empty
    if config.storage.snapshot_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.snapshot_path must not be empty".to_string(),
        });
    }

    // Validate page sizes are positive
    if config.api.job_page_size == 0 {
        errors.push(ConfigError::Validation {
            message: "api.job_page_size must be at least 1, got 0".to_string(),
        });
    }

    if config.api.candidate_page_size == 0 {
        errors.push(ConfigError::Validation {
            message: "api.candidate_page_size must be at least 1, got 0".to_string(),
        });
    }

    // Validate the failure rate is a probability
    let rate = config.api.reorder_failure_rate;
    if !(0.0..=1.0).contains(&rate) || rate.is_nan() {
        errors.push(ConfigError::Validation {
            message: format!(
                "api.reorder_failure_rate must be between 0.0 and 1.0, got {rate}"
            ),
        });
    }

    // Validate seed counts are mutually consistent
    if config.seed.assessed_jobs > config.seed.jobs {
        errors.push(ConfigError::Validation {
            message: format!(
                "seed.assessed_jobs must not exceed seed.jobs, got {} > {}",
                config.seed.assessed_jobs, config.seed.jobs
            ),
        });
    }

    if config.seed.candidates > 0 && config.seed.jobs == 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "seed.candidates requires at least one job to attach to, got {} candidates with seed.jobs = 0",
                config.seed.candidates
            ),
        });
    }

    if config.seed.assessed_jobs > 0 && config.seed.questions_per_assessment == 0 {
        errors.push(ConfigError::Validation {
            message: "seed.questions_per_assessment must be at least 1 when seed.assessed_jobs > 0"
                .to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = TalentflowConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_snapshot_path_fails_validation() {
        let mut config = TalentflowConfig::default();
        config.storage.snapshot_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("snapshot_path"))));
    }

    #[test]
    fn out_of_range_failure_rate_fails_validation() {
        let mut config = TalentflowConfig::default();
        config.api.reorder_failure_rate = 1.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("reorder_failure_rate"))));

        config.api.reorder_failure_rate = -0.1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let mut config = TalentflowConfig::default();
        config.api.job_page_size = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("job_page_size"))));
    }

    #[test]
    fn assessed_jobs_beyond_seeded_jobs_fails_validation() {
        let mut config = TalentflowConfig::default();
        config.seed.jobs = 3;
        config.seed.assessed_jobs = 4;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("assessed_jobs"))));
    }

    #[test]
    fn candidates_without_jobs_fails_validation() {
        let mut config = TalentflowConfig::default();
        config.seed.jobs = 0;
        config.seed.assessed_jobs = 0;
        config.seed.candidates = 100;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("seed.candidates"))));
    }

    #[test]
    fn boundary_failure_rates_pass_validation() {
        let mut config = TalentflowConfig::default();
        config.api.reorder_failure_rate = 0.0;
        assert!(validate_config(&config).is_ok());
        config.api.reorder_failure_rate = 1.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn seed_section_deserializes_with_partial_keys() {
        let toml_str = r#"
[seed]
jobs = 5
rng_seed = 42
"#;
        let config: TalentflowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed.jobs, 5);
        assert_eq!(config.seed.candidates, 1000);
        assert_eq!(config.seed.rng_seed, Some(42));
        // 5 seeded jobs still cover the default 4 assessed jobs
        assert!(validate_config(&config).is_ok());
    }
}
