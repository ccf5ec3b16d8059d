//! Project directory schema.

use serde::{Deserialize, Serialize};

use crate::{
    facet::{FacetOrder, FacetSpec},
    list_config::ListViewConfig,
    record::{FieldValue, Record},
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectListing {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Purpose,
    Themes,
    University,
    Country,
    Year,
}

impl Record for ProjectListing {
    type Field = ProjectField;

    fn field_value(&self, field: &ProjectField) -> FieldValue {
        match field {
            ProjectField::Purpose => FieldValue::optional(self.purpose.as_ref()),
            ProjectField::Themes => FieldValue::many(&self.themes),
            ProjectField::University => FieldValue::optional(self.university.as_ref()),
            ProjectField::Country => FieldValue::optional(self.country.as_ref()),
            ProjectField::Year => FieldValue::optional(self.year),
        }
    }
}

/// Themes are single-select on this view; everything else is multi-select.
pub fn default_config() -> ListViewConfig<ProjectField> {
    ListViewConfig::new(vec![
        FacetSpec::new(ProjectField::Purpose, "Purpose"),
        FacetSpec::new(ProjectField::Themes, "Theme").multi_valued().single_select(),
        FacetSpec::new(ProjectField::University, "University").ordered_by(FacetOrder::CountDesc),
        FacetSpec::new(ProjectField::Country, "Country")
            .ordered_by(FacetOrder::Label)
            .with_label("US", "United States")
            .with_label("UK", "United Kingdom"),
        FacetSpec::new(ProjectField::Year, "Year").ordered_by(FacetOrder::Label),
    ])
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list_view::ListView, record::FacetOriginalValue};

    fn project(id: u64, purpose: &str, themes: &[&str], country: &str) -> ProjectListing {
        ProjectListing {
            id,
            title: format!("Project {id}"),
            summary: String::new(),
            purpose: Some(purpose.to_string()),
            themes: themes.iter().map(|t| t.to_string()).collect(),
            university: None,
            country: Some(country.to_string()),
            year: Some(2020 + id as i64 % 3),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 9);
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        let project: ProjectListing = serde_json::from_str(r#"{"id": 3, "title": "Solar"}"#).unwrap();
        assert_eq!(project.field_value(&ProjectField::Themes), FieldValue::Many(Vec::new()));
        assert_eq!(project.field_value(&ProjectField::Country), FieldValue::Missing);
    }

    #[test]
    fn test_country_labels_are_applied() {
        let view = ListView::new(default_config(), vec![project(1, "Grant", &["AI"], "US"), project(2, "Grant", &[], "FR")]);
        let labels = view.facet_options(&ProjectField::Country).into_iter().map(|o| o.label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["FR", "United States"]);
        let years = view.facet_options(&ProjectField::Year).into_iter().map(|o| o.value).collect::<Vec<_>>();
        assert_eq!(years, vec![FacetOriginalValue::Int(2021), FacetOriginalValue::Int(2022)]);
    }
}
