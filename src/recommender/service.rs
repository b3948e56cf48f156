use tracing::info;

use super::filter::Filter;

pub struct Recommender {
    filter: Box<dyn Filter>,
}

impl Recommender {
    pub fn new(filter: Box<dyn Filter>) -> Self {
        Self { filter }
    }

    pub fn filter_name(&self) -> &'static str {
        self.filter.name()
    }

    pub fn recommend_movies(&self, movie: Option<&str>) -> Vec<String> {
        info!(filter = self.filter.name(), "Name of filter in use");
        self.filter.get_recommendations(movie)
    }
}
