//! University directory schema.

use serde::{Deserialize, Serialize};

use crate::{
    facet::{FacetOrder, FacetSpec},
    list_config::ListViewConfig,
    record::{FieldValue, Record},
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityListing {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// "public" or "private".
    #[serde(default)]
    pub funding: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniversityField {
    Country,
    City,
    Funding,
    Languages,
}

impl Record for UniversityListing {
    type Field = UniversityField;

    fn field_value(&self, field: &UniversityField) -> FieldValue {
        match field {
            UniversityField::Country => FieldValue::optional(self.country.as_ref()),
            UniversityField::City => FieldValue::optional(self.city.as_ref()),
            UniversityField::Funding => FieldValue::optional(self.funding.as_ref()),
            UniversityField::Languages => FieldValue::many(&self.languages),
        }
    }
}

pub fn default_config() -> ListViewConfig<UniversityField> {
    ListViewConfig::new(vec![
        FacetSpec::new(UniversityField::Country, "Country").ordered_by(FacetOrder::Label),
        FacetSpec::new(UniversityField::City, "City").ordered_by(FacetOrder::CountDesc),
        FacetSpec::new(UniversityField::Funding, "Funding")
            .single_select()
            .with_label("public", "Public")
            .with_label("private", "Private"),
        FacetSpec::new(UniversityField::Languages, "Teaching language").multi_valued(),
    ])
}
