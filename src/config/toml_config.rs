use crate::config::OutputFormat;
use crate::domain::model::{Ratios, DEFAULT_WATER_LITERS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{KombuchaError, Result};
use crate::utils::validation::{validate_non_negative_value, validate_positive_ratio, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub ratios: Option<RatiosConfig>,
    pub defaults: Option<DefaultsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatiosConfig {
    pub tea_grams_per_liter: Option<f64>,
    pub sugar_grams_per_liter: Option<f64>,
    pub starter_liters_per_liter: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    pub water_liters: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${TEA_RATIO})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KombuchaError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn pretty_json(&self) -> bool {
        self.output.as_ref().and_then(|o| o.pretty).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn ratios(&self) -> Ratios {
        let defaults = Ratios::default();
        match &self.ratios {
            Some(r) => Ratios {
                tea_grams_per_liter: r.tea_grams_per_liter.unwrap_or(defaults.tea_grams_per_liter),
                sugar_grams_per_liter: r
                    .sugar_grams_per_liter
                    .unwrap_or(defaults.sugar_grams_per_liter),
                starter_liters_per_liter: r
                    .starter_liters_per_liter
                    .unwrap_or(defaults.starter_liters_per_liter),
            },
            None => defaults,
        }
    }

    fn default_water(&self) -> f64 {
        self.defaults
            .as_ref()
            .and_then(|d| d.water_liters)
            .unwrap_or(DEFAULT_WATER_LITERS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let ratios = self.ratios();
        validate_positive_ratio("ratios.tea_grams_per_liter", ratios.tea_grams_per_liter)?;
        validate_positive_ratio("ratios.sugar_grams_per_liter", ratios.sugar_grams_per_liter)?;
        validate_positive_ratio(
            "ratios.starter_liters_per_liter",
            ratios.starter_liters_per_liter,
        )?;
        validate_non_negative_value("defaults.water_liters", self.default_water())?;
        Ok(())
    }
}
