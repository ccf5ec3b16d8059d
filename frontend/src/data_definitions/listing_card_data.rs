//! What a directory card shows for each kind of record.

use common::entities::{FacultyListing, PostListing, ProjectListing, UniversityListing};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub badges: Vec<String>,
}

pub trait ListingCardData {
    fn card_data(&self) -> CardData;
}

fn join_present(parts: &[Option<&String>]) -> String {
    parts.iter().flatten().map(|s| s.as_str()).collect::<Vec<_>>().join(" · ")
}

impl ListingCardData for ProjectListing {
    fn card_data(&self) -> CardData {
        let year = self.year.map(|y| y.to_string());
        CardData {
            title: self.title.clone(),
            subtitle: join_present(&[self.university.as_ref(), self.country.as_ref(), year.as_ref()]),
            description: self.summary.clone(),
            badges: self.purpose.iter().chain(self.themes.iter()).cloned().collect(),
        }
    }
}

impl ListingCardData for PostListing {
    fn card_data(&self) -> CardData {
        CardData {
            title: self.title.clone(),
            subtitle: join_present(&[self.author.as_ref(), self.category.as_ref()]),
            description: self.excerpt.clone(),
            badges: self.tags.clone(),
        }
    }
}

impl ListingCardData for UniversityListing {
    fn card_data(&self) -> CardData {
        CardData {
            title: self.name.clone(),
            subtitle: join_present(&[self.city.as_ref(), self.country.as_ref()]),
            description: String::new(),
            badges: self.funding.iter().chain(self.languages.iter()).cloned().collect(),
        }
    }
}

impl ListingCardData for FacultyListing {
    fn card_data(&self) -> CardData {
        CardData {
            title: self.name.clone(),
            subtitle: self.university.clone().unwrap_or_default(),
            description: String::new(),
            badges: self.disciplines.iter().chain(self.degree_levels.iter()).cloned().collect(),
        }
    }
}
