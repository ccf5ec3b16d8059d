//! Faculty directory schema.

use serde::{Deserialize, Serialize};

use crate::{
    facet::{FacetOrder, FacetSpec},
    list_config::ListViewConfig,
    record::{FieldValue, Record},
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyListing {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub disciplines: Vec<String>,
    #[serde(default)]
    pub degree_levels: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacultyField {
    University,
    Disciplines,
    DegreeLevels,
}

impl Record for FacultyListing {
    type Field = FacultyField;

    fn field_value(&self, field: &FacultyField) -> FieldValue {
        match field {
            FacultyField::University => FieldValue::optional(self.university.as_ref()),
            FacultyField::Disciplines => FieldValue::many(&self.disciplines),
            FacultyField::DegreeLevels => FieldValue::many(&self.degree_levels),
        }
    }
}

pub fn default_config() -> ListViewConfig<FacultyField> {
    ListViewConfig::new(vec![
        FacetSpec::new(FacultyField::University, "University").ordered_by(FacetOrder::CountDesc),
        FacetSpec::new(FacultyField::Disciplines, "Discipline").multi_valued(),
        FacetSpec::new(FacultyField::DegreeLevels, "Degree level")
            .multi_valued()
            .with_label("bsc", "Bachelor")
            .with_label("msc", "Master")
            .with_label("phd", "Doctorate"),
    ])
}
