use crate::domain::TrendRecord;
use crate::errors::TrendingResult;

/// Pretty-printed JSON array of every record, in aggregation order
pub fn to_json(records: &[TrendRecord]) -> TrendingResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn from_json(json: &str) -> TrendingResult<Vec<TrendRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AggregatorStory, CommunityPost, FeedArticle, SearchTrend};

    fn mixed_records() -> Vec<TrendRecord> {
        vec![
            SearchTrend {
                country: "United States".to_string(),
                rank: 1,
                title: "eclipse".to_string(),
                link: String::new(),
            }
            .into(),
            CommunityPost {
                rank: 1,
                title: "Post, with \"quotes\"".to_string(),
                link: "https://reddit.com/r/news/comments/x/".to_string(),
                score: 301,
            }
            .into(),
            AggregatorStory {
                rank: 1,
                title: "Show HN: a thing".to_string(),
                link: "https://news.ycombinator.com/item?id=1".to_string(),
                score: 5,
            }
            .into(),
            FeedArticle {
                rank: 1,
                source: "BBC".to_string(),
                title: "Headline".to_string(),
                link: "https://bbc.co.uk/news/1".to_string(),
            }
            .into(),
        ]
    }

    #[test]
    fn test_json_round_trip_preserves_order_and_fields() {
        let records = mixed_records();
        let json = to_json(&records).unwrap();

        assert_eq!(from_json(&json).unwrap(), records);
    }

    #[test]
    fn test_json_is_indented_array() {
        let json = to_json(&mixed_records()).unwrap();

        assert!(json.starts_with("[\n"));
        assert!(json.contains("\n    \"type\": \"search_trend\""));
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
