//! Post directory schema.

use serde::{Deserialize, Serialize};

use crate::{
    facet::{FacetOrder, FacetSpec},
    list_config::ListViewConfig,
    record::{FieldValue, Record},
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostListing {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostField {
    Category,
    Tags,
    Author,
}

impl Record for PostListing {
    type Field = PostField;

    fn field_value(&self, field: &PostField) -> FieldValue {
        match field {
            PostField::Category => FieldValue::optional(self.category.as_ref()),
            PostField::Tags => FieldValue::many(&self.tags),
            PostField::Author => FieldValue::optional(self.author.as_ref()),
        }
    }
}

pub fn default_config() -> ListViewConfig<PostField> {
    ListViewConfig::new(vec![
        FacetSpec::new(PostField::Category, "Category"),
        FacetSpec::new(PostField::Tags, "Tags").multi_valued().ordered_by(FacetOrder::CountDesc),
        FacetSpec::new(PostField::Author, "Author").ordered_by(FacetOrder::Label),
    ])
}
