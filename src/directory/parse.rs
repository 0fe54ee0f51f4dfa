use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::model::{Company, Project, ProjectStatus};

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawProject {
    pub(super) title: String,
    #[serde(default)]
    pub(super) institution: String,
    #[serde(default)]
    pub(super) domain: String,
    pub(super) status: ProjectStatus,
    #[serde(deserialize_with = "integer_or_string")]
    pub(super) year: i32,
    #[serde(default)]
    pub(super) budget: String,
    #[serde(default, rename = "budgetValue", deserialize_with = "number_or_string")]
    pub(super) budget_value: f64,
    #[serde(default, rename = "type")]
    pub(super) kind: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) website: String,
    #[serde(default)]
    pub(super) contact: String,
}

impl RawProject {
    fn into_project(self) -> Project {
        Project {
            title: self.title,
            region: String::new(),
            institution: self.institution,
            domain: self.domain,
            status: self.status,
            year: self.year,
            budget: self.budget,
            budget_value: self.budget_value,
            kind: self.kind,
            description: self.description,
            website: self.website,
            contact: self.contact,
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {text:?}"))),
    }
}

fn integer_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntegerOrString {
        Integer(i64),
        Text(String),
    }

    match IntegerOrString::deserialize(deserializer)? {
        IntegerOrString::Integer(value) => i32::try_from(value)
            .map_err(|_| serde::de::Error::custom(format!("year {value} is out of range"))),
        IntegerOrString::Text(text) => text
            .trim()
            .parse::<i32>()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer year, got {text:?}"))),
    }
}

/// Parses the projects source: an object mapping each region to its projects.
pub(super) fn parse_grouped_projects(raw: &str) -> Result<Vec<(String, Vec<Project>)>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON in projects source")?;
    let object = parsed
        .as_object()
        .ok_or_else(|| anyhow!("projects source must be an object keyed by region"))?;

    let mut grouped = Vec::with_capacity(object.len());
    for (region, value) in object {
        let entries = value
            .as_array()
            .ok_or_else(|| anyhow!("project list for region {region} must be an array"))?;

        let mut projects = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match RawProject::deserialize(entry) {
                Ok(raw) => projects.push(raw.into_project()),
                Err(error) => {
                    tracing::warn!(%region, index, "skipping invalid project record: {error}");
                }
            }
        }
        grouped.push((region.clone(), projects));
    }

    Ok(grouped)
}

pub(super) fn parse_companies(raw: &str) -> Result<Vec<Company>> {
    serde_json::from_str(raw).context("invalid JSON in companies source")
}
