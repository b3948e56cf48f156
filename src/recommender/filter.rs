use serde::{Deserialize, Serialize};

/// A strategy for picking movies related to a given title.
pub trait Filter: Send + Sync {
    fn name(&self) -> &'static str;
    fn get_recommendations(&self, movie: Option<&str>) -> Vec<String>;
}

/// Placeholder content-based filter. Ignores the title entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentBasedFilter;

impl Filter for ContentBasedFilter {
    fn name(&self) -> &'static str {
        "content-based"
    }

    fn get_recommendations(&self, _movie: Option<&str>) -> Vec<String> {
        ["Happy Feet", "Ice Age", "Shark Tale"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    #[default]
    ContentBased,
}

impl FilterKind {
    pub fn build(self) -> Box<dyn Filter> {
        match self {
            FilterKind::ContentBased => Box::new(ContentBasedFilter),
        }
    }
}
