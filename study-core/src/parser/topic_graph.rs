use super::{extract_json, MalformedModelOutput};
use crate::models::TopicGraph;

pub fn parse_topic_graph(text: &str) -> Result<TopicGraph, MalformedModelOutput> {
    extract_json(text)
}
