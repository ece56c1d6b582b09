//! Diagnosis payload returned by the classification endpoint
//!
//! The title encodes a crop and a disease as "<crop>:<disease>", split on the
//! first delimiter for display. Confidence arrives as a truncated string
//! ("97.45") but a plain number is accepted as well.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Separator between crop and disease in the title
pub const TITLE_DELIMITER: char = ':';

/// Classification confidence in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// "97.45%", "100%", "99.5%"
    pub fn label(&self) -> String {
        let fixed = format!("{:.2}", self.0);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        format!("{}%", trimmed)
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Confidence(value)),
            Raw::Text(text) => text
                .trim()
                .trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .map(Confidence)
                .map_err(|e| serde::de::Error::custom(format!("confidence {:?}: {}", text, e))),
        }
    }
}

/// Result of classifying one leaf image
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnosis {
    pub title: String,
    pub confidence: Confidence,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub prevent: String,

    /// Reference image of the disease
    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub supplement_name: String,

    #[serde(default)]
    pub supplement_image_url: String,

    #[serde(default)]
    pub supplement_url: String,

    #[serde(default)]
    pub supplement_buy_link: String,
}

/// Title split into its display parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisTitle {
    /// Crop the disease is usually seen in; empty when the title has no delimiter
    pub crop: String,
    pub disease: String,
}

impl DiagnosisTitle {
    pub fn parse(title: &str) -> Self {
        match title.split_once(TITLE_DELIMITER) {
            Some((crop, disease)) => Self {
                crop: crop.trim().to_string(),
                disease: disease.trim().to_string(),
            },
            None => Self {
                crop: String::new(),
                disease: title.trim().to_string(),
            },
        }
    }
}

impl Diagnosis {
    /// Parse and validate an endpoint response body
    pub fn from_json(json: &str) -> Result<Self> {
        let diagnosis: Diagnosis = serde_json::from_str(json)?;
        diagnosis.validate()?;
        Ok(diagnosis)
    }

    /// A diagnosis must render a title and a confidence
    pub fn validate(&self) -> Result<()> {
        if self.title_parts().disease.is_empty() {
            return Err(Error::InvalidPayload("title is empty".into()));
        }
        let percent = self.confidence.percent();
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(Error::InvalidPayload(format!(
                "confidence out of range: {}",
                percent
            )));
        }
        Ok(())
    }

    pub fn title_parts(&self) -> DiagnosisTitle {
        DiagnosisTitle::parse(&self.title)
    }

    pub fn confidence_label(&self) -> String {
        self.confidence.label()
    }

    /// Where the suggested remedy can be bought
    pub fn remedy_link(&self) -> Option<&str> {
        [&self.supplement_buy_link, &self.supplement_url]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }

    /// Healthy classes carry fertiliser instead of a remedy
    pub fn is_healthy(&self) -> bool {
        self.title_parts().disease.eq_ignore_ascii_case("healthy")
    }
}
