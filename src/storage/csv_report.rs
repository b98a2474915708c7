use csv::Writer;

use crate::domain::TrendRecord;
use crate::errors::{TrendingError, TrendingResult};

pub const CSV_HEADER: [&str; 5] = ["Type", "Source", "Title", "Link", "Extra"];

/// Fixed `Type`/`Source` columns for each record variant
fn type_and_source(record: &TrendRecord) -> (&'static str, &str) {
    match record {
        TrendRecord::SearchTrend(_) => ("Search", "Google"),
        TrendRecord::CommunityPost(_) => ("Post", "Reddit"),
        TrendRecord::AggregatorStory(_) => ("Post", "HackerNews"),
        TrendRecord::FeedArticle(a) => ("Article", a.source.as_str()),
    }
}

/// Flatten records into `Type,Source,Title,Link,Extra` rows.
///
/// Fields containing commas, quotes or line breaks are quoted.
pub fn to_csv(records: &[TrendRecord]) -> TrendingResult<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for record in records {
        let (kind, source) = type_and_source(record);
        let extra = record.score().map(|s| s.to_string()).unwrap_or_default();
        writer.write_record([kind, source, record.title(), record.link(), extra.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TrendingError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| TrendingError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AggregatorStory, CommunityPost, FeedArticle, SearchTrend};

    #[test]
    fn test_header_only_for_empty_collection() {
        assert_eq!(to_csv(&[]).unwrap(), "Type,Source,Title,Link,Extra\n");
    }

    #[test]
    fn test_rows_per_variant() {
        let records: Vec<TrendRecord> = vec![
            SearchTrend {
                country: "India".to_string(),
                rank: 1,
                title: "monsoon".to_string(),
                link: "https://trends.google.com/x".to_string(),
            }
            .into(),
            CommunityPost {
                rank: 1,
                title: "Post".to_string(),
                link: "https://reddit.com/r/india/1".to_string(),
                score: 77,
            }
            .into(),
            AggregatorStory {
                rank: 1,
                title: "Story".to_string(),
                link: "http://x".to_string(),
                score: 9,
            }
            .into(),
            FeedArticle {
                rank: 1,
                source: "Google News US".to_string(),
                title: "Article".to_string(),
                link: String::new(),
            }
            .into(),
        ];

        let csv = to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Type,Source,Title,Link,Extra",
                "Search,Google,monsoon,https://trends.google.com/x,",
                "Post,Reddit,Post,https://reddit.com/r/india/1,77",
                "Post,HackerNews,Story,http://x,9",
                "Article,Google News US,Article,,",
            ]
        );
    }

    #[test]
    fn test_titles_with_commas_and_quotes_stay_in_one_column() {
        let records: Vec<TrendRecord> = vec![FeedArticle {
            rank: 1,
            source: "BBC".to_string(),
            title: "Rates rise, \"again\"\nsays bank".to_string(),
            link: "https://bbc.co.uk/news/2".to_string(),
        }
        .into()];

        let csv = to_csv(&records).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 5);
        assert_eq!(&rows[0][2], "Rates rise, \"again\"\nsays bank");
        assert_eq!(&rows[0][4], "");
    }
}
