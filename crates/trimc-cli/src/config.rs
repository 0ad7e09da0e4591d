use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;
use trimc::core::observables::Observable;
use trimc::engine::config::{SimulationConfig, SimulationConfigBuilder};

/// Run parameters as found in a parameter file. Every field may still be supplied or overridden
/// on the command line.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialRunParams {
    pub rootdir: Option<PathBuf>,
    #[serde(rename = "N")]
    pub num_particles: Option<usize>,
    #[serde(rename = "T")]
    pub temperature: Option<f64>,
    pub tau: Option<u64>,
    pub tw: Option<u64>,
    pub cycles: Option<usize>,
    #[serde(rename = "logPoints")]
    pub log_points: Option<usize>,
    #[serde(rename = "linPoints")]
    pub lin_points: Option<usize>,
    pub p_flip: Option<f64>,
    #[serde(rename = "maxDisplacement")]
    pub max_displacement: Option<f64>,
    pub density: Option<f64>,
    pub observables: Option<Vec<String>>,
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}

impl PartialRunParams {
    /// Reads a parameter file; `.toml` files are parsed as TOML, anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading run parameters from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let parsed: anyhow::Result<Self> = if is_toml {
            toml::from_str(&content).map_err(anyhow::Error::from)
        } else {
            serde_json::from_str(&content).map_err(anyhow::Error::from)
        };
        parsed.map_err(|source| CliError::FileParsing {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `-S KEY=VALUE` overrides. Keys are the parameter file keys.
    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let (key, value) = (key.trim(), value.trim());
            match key {
                "rootdir" => self.rootdir = Some(PathBuf::from(value)),
                "N" => self.num_particles = Some(parse_value(key, value)?),
                "T" => self.temperature = Some(parse_value(key, value)?),
                "tau" => self.tau = Some(parse_value(key, value)?),
                "tw" => self.tw = Some(parse_value(key, value)?),
                "cycles" => self.cycles = Some(parse_value(key, value)?),
                "logPoints" => self.log_points = Some(parse_value(key, value)?),
                "linPoints" => self.lin_points = Some(parse_value(key, value)?),
                "p_flip" => self.p_flip = Some(parse_value(key, value)?),
                "maxDisplacement" => self.max_displacement = Some(parse_value(key, value)?),
                "density" => self.density = Some(parse_value(key, value)?),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    /// Combines file values, `-S` overrides and the `--observables` flag into a validated
    /// [`SimulationConfig`]. Command-line observables replace those of the file.
    pub fn merge_with_cli(
        mut self,
        observables: &[String],
        set_values: &[String],
    ) -> Result<SimulationConfig> {
        self.apply_set_values(set_values)?;

        let names = if observables.is_empty() {
            self.observables.take().unwrap_or_default()
        } else {
            observables.to_vec()
        };
        let parsed = names
            .iter()
            .map(|name| name.trim().parse::<Observable>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CliError::Argument(e.to_string()))?;

        let mut builder = SimulationConfigBuilder::new();
        if let Some(v) = self.rootdir {
            builder = builder.root_dir(v);
        }
        if let Some(v) = self.num_particles {
            builder = builder.num_particles(v);
        }
        if let Some(v) = self.temperature {
            builder = builder.temperature(v);
        }
        if let Some(v) = self.tau {
            builder = builder.tau(v);
        }
        if let Some(v) = self.tw {
            builder = builder.waiting_time(v);
        }
        if let Some(v) = self.cycles {
            builder = builder.cycles(v);
        }
        if let Some(v) = self.log_points {
            builder = builder.log_points(v);
        }
        if let Some(v) = self.lin_points {
            builder = builder.lin_points(v);
        }
        if let Some(v) = self.p_flip {
            builder = builder.flip_probability(v);
        }
        if let Some(v) = self.max_displacement {
            builder = builder.max_displacement(v);
        }
        if let Some(v) = self.density {
            builder = builder.density(v);
        }
        if !parsed.is_empty() {
            builder = builder.observables(parsed);
        }

        builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};
    use trimc::engine::config::{DEFAULT_DENSITY, DEFAULT_MAX_DISPLACEMENT, DEFAULT_OBSERVABLES};

    const FULL_JSON: &str = r#"{
        "rootdir": "out",
        "N": 300,
        "T": 0.45,
        "tau": 1000,
        "tw": 100,
        "cycles": 4,
        "logPoints": 20,
        "linPoints": 5,
        "p_flip": 0.2
    }"#;

    fn write_params(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn json_file_is_merged_with_defaults() {
        let (_dir, path) = write_params("params.json", FULL_JSON);
        let config = PartialRunParams::from_file(&path)
            .unwrap()
            .merge_with_cli(&[], &[])
            .unwrap();
        assert_eq!(config.system.num_particles, 300);
        assert_eq!(config.system.density, DEFAULT_DENSITY);
        assert_eq!(config.metropolis.temperature, 0.45);
        assert_eq!(config.metropolis.max_displacement, DEFAULT_MAX_DISPLACEMENT);
        assert_eq!(config.schedule.waiting_time, 100);
        assert_eq!(config.output.root_dir, PathBuf::from("out"));
        assert_eq!(config.output.observables, DEFAULT_OBSERVABLES.to_vec());
    }

    #[test]
    fn toml_file_is_detected_by_extension() {
        let (_dir, path) = write_params(
            "params.toml",
            r#"
            rootdir = "out"
            N = 30
            T = 1.0
            tau = 100
            tw = 10
            cycles = 2
            logPoints = 5
            linPoints = 0
            p_flip = 0.0
            density = 1.0
            observables = ["MSD", "Cs"]
            "#,
        );
        let config = PartialRunParams::from_file(&path)
            .unwrap()
            .merge_with_cli(&[], &[])
            .unwrap();
        assert_eq!(config.system.density, 1.0);
        assert_eq!(
            config.output.observables,
            vec![Observable::MeanSquareDisplacement, Observable::DiameterCorrelation]
        );
    }

    #[test]
    fn cli_observables_and_set_values_override_the_file() {
        let (_dir, path) = write_params("params.json", FULL_JSON);
        let config = PartialRunParams::from_file(&path)
            .unwrap()
            .merge_with_cli(
                &["Fs".to_string(), "U".to_string()],
                &["T=0.6".to_string(), "maxDisplacement=0.1".to_string()],
            )
            .unwrap();
        assert_eq!(config.metropolis.temperature, 0.6);
        assert_eq!(config.metropolis.max_displacement, 0.1);
        assert_eq!(
            config.output.observables,
            vec![Observable::SelfScattering, Observable::Energy]
        );
    }

    #[test]
    fn missing_required_field_returns_error() {
        let (_dir, path) = write_params("params.json", r#"{"rootdir": "out", "N": 3}"#);
        let result = PartialRunParams::from_file(&path)
            .unwrap()
            .merge_with_cli(&[], &[]);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("Missing")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let (_dir, path) = write_params("params.json", r#"{"temperature": 1.0}"#);
        assert!(matches!(
            PartialRunParams::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        let mut params = PartialRunParams::default();
        assert!(params.apply_set_values(&["T".to_string()]).is_err());
        assert!(params.apply_set_values(&["seed=1".to_string()]).is_err());
        assert!(params.apply_set_values(&["N=many".to_string()]).is_err());
        params.apply_set_values(&["N=9".to_string()]).unwrap();
        assert_eq!(params.num_particles, Some(9));
    }

    #[test]
    fn unknown_observable_is_an_argument_error() {
        let (_dir, path) = write_params("params.json", FULL_JSON);
        let result = PartialRunParams::from_file(&path)
            .unwrap()
            .merge_with_cli(&["chi4".to_string()], &[]);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn invalid_parameter_values_fail_validation() {
        let (_dir, path) = write_params("params.json", FULL_JSON);
        let result = PartialRunParams::from_file(&path)
            .unwrap()
            .merge_with_cli(&[], &["N=301".to_string()]);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
