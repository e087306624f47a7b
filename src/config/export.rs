//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Where and how finished reports are exported
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Export formats (comma-separated: pdf, csv, markdown, json)
    #[serde(default = "default_formats")]
    pub formats: String,

    /// Write reports after each completed assessment
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl ExportConfig {
    /// Parse the format list, keeping first-seen order
    pub fn format_list(&self) -> Result<Vec<ExportFormat>, ValidationError> {
        let mut formats = Vec::new();
        for raw in self.formats.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let format: ExportFormat = raw
                .parse()
                .map_err(|_| ValidationError::UnknownExportFormat(raw.to_string()))?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        if self.format_list()?.is_empty() {
            return Err(ValidationError::MissingRequired("export.formats"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            formats: default_formats(),
            enabled: default_enabled(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./reports")
}

fn default_formats() -> String {
    "pdf,csv".to_string()
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./reports"));
        assert_eq!(
            config.format_list().unwrap(),
            vec![ExportFormat::Pdf, ExportFormat::Csv]
        );
        assert!(config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_list_trims_and_dedupes() {
        let config = ExportConfig {
            formats: " csv, md ,csv,,json".to_string(),
            ..ExportConfig::default()
        };
        assert_eq!(
            config.format_list().unwrap(),
            vec![ExportFormat::Csv, ExportFormat::Markdown, ExportFormat::Json]
        );
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = ExportConfig {
            formats: "pdf,docx".to_string(),
            ..ExportConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownExportFormat("docx".to_string()))
        );
    }

    #[test]
    fn test_empty_values_rejected() {
        let no_formats = ExportConfig {
            formats: " , ".to_string(),
            ..ExportConfig::default()
        };
        assert_eq!(
            no_formats.validate(),
            Err(ValidationError::MissingRequired("export.formats"))
        );

        let no_dir = ExportConfig {
            output_dir: PathBuf::new(),
            ..ExportConfig::default()
        };
        assert_eq!(
            no_dir.validate(),
            Err(ValidationError::MissingRequired("export.output_dir"))
        );
    }
}
