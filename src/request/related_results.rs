use super::{QueryErr, Request, RequestProcessor};
use crate::response::RelatedResults;

/// Tweets related to one tweet, such as the rest of its conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelatedResultsQuery {
    status_id: u64,
}

impl RelatedResultsQuery {
    pub fn show(status_id: u64) -> Self {
        Self { status_id }
    }
}

impl RequestProcessor for RelatedResultsQuery {
    type Entity = RelatedResults;

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr> {
        if self.status_id == 0 {
            return Err(QueryErr::MissingParam("status_id"));
        }
        Ok(Request::new(format!(
            "{}related_results/show/{}.json",
            base_url, self.status_id
        )))
    }

    fn process_results(&self, body: &str) -> Result<Vec<RelatedResults>, QueryErr> {
        let mut groups: Vec<RelatedResults> = super::parse_list(body)?;
        for group in &mut groups {
            group.status_id = self.status_id;
        }
        Ok(groups)
    }
}
