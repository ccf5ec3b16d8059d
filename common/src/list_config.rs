//! Per-view list configuration: page size and exposed facets.

use std::fmt::Debug;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{facet::FacetSpec, list_const::DEFAULT_PAGE_SIZE};


fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "F: Deserialize<'de>"))]
pub struct ListViewConfig<F> {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub facets: Vec<FacetSpec<F>>,
}

impl<F> Default for ListViewConfig<F> {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, facets: Vec::new() }
    }
}

impl<F: PartialEq + Debug> ListViewConfig<F> {
    pub fn new(facets: Vec<FacetSpec<F>>) -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, facets }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn facet(&self, field: &F) -> Option<&FacetSpec<F>> {
        self.facets.iter().find(|spec| &spec.field == field)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        for (i, spec) in self.facets.iter().enumerate() {
            if self.facets[..i].iter().any(|other| other.field == spec.field) {
                anyhow::bail!("facet {:?} is declared more than once", spec.field);
            }
        }
        Ok(())
    }
}

impl<F: PartialEq + Debug + DeserializeOwned> ListViewConfig<F> {
    /// Parses and validates a view configuration. Omitted fields take their
    /// defaults (page size 9, multi-select, first-seen order).
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            tracing::warn!("rejecting list view config: {e}");
            return Err(e);
        }
        Ok(config)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::{FacetOrder, SelectMode};

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ListViewConfig::<String>::from_json(
            r#"{"facets": [{"field": "country", "display_name": "Country"}]}"#,
        )
        .unwrap();
        assert_eq!(config.page_size, 9);
        let spec = config.facet(&"country".to_string()).unwrap();
        assert!(!spec.multi_valued);
        assert_eq!(spec.select_mode, SelectMode::Multi);
        assert_eq!(spec.order, FacetOrder::FirstSeen);
        assert!(spec.labels.is_empty());
    }

    #[test]
    fn test_from_json_reads_every_option() {
        let config = ListViewConfig::<String>::from_json(
            r#"{
                "page_size": 12,
                "facets": [{
                    "field": "themes",
                    "display_name": "Themes",
                    "multi_valued": true,
                    "select_mode": "single",
                    "order": "count_desc",
                    "labels": {"ai": "Artificial intelligence"}
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(config.page_size, 12);
        let spec = &config.facets[0];
        assert!(spec.multi_valued);
        assert_eq!(spec.select_mode, SelectMode::Single);
        assert_eq!(spec.order, FacetOrder::CountDesc);
        assert_eq!(spec.labels["ai"], "Artificial intelligence");
    }

    #[test]
    fn test_from_json_with_field_enum() {
        use crate::entities::ProjectField;

        let config = ListViewConfig::<ProjectField>::from_json(
            r#"{"facets": [
                {"field": "country", "display_name": "Country", "order": "label"},
                {"field": "themes", "display_name": "Theme", "multi_valued": true}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.facet(&ProjectField::Country).unwrap().order, FacetOrder::Label);
        assert!(config.facet(&ProjectField::Themes).unwrap().multi_valued);
        assert!(config.facet(&ProjectField::Year).is_none());
    }

    #[test]
    fn test_from_json_rejects_unknown_field_name() {
        use crate::entities::ProjectField;

        let json = r#"{"facets": [{"field": "budget", "display_name": "Budget"}]}"#;
        assert!(ListViewConfig::<ProjectField>::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(ListViewConfig::<String>::from_json(r#"{"page_size": 0}"#).is_err());
    }

    #[test]
    fn test_rejects_duplicate_facets() {
        let config = ListViewConfig::new(vec![
            FacetSpec::new("country".to_string(), "Country"),
            FacetSpec::new("country".to_string(), "Country again"),
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ListViewConfig::<String>::from_json("{").is_err());
        assert!(ListViewConfig::<String>::from_json(r#"{"facets": [{"field": "x"}]}"#).is_err());
    }
}
