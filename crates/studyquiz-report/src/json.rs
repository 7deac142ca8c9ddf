//! JSON output.
//!
//! Mirrors the markdown document: sections that were not requested come out
//! as empty arrays, and a summary block carries the item counts.

use anyhow::{Context, Result};
use serde_json::json;

use studyquiz_core::report::StudyDocument;

/// Build the JSON value for a study document.
pub fn document_value(doc: &StudyDocument) -> Result<serde_json::Value> {
    let include = doc.include;
    let topics: &[String] = if include.discussion { &doc.topics } else { &[] };
    let tf = if include.true_false {
        serde_json::to_value(&doc.quiz.tf).context("failed to serialize true/false items")?
    } else {
        json!([])
    };
    let blank = if include.fill_blank {
        serde_json::to_value(&doc.quiz.blank).context("failed to serialize fill-blank items")?
    } else {
        json!([])
    };

    let false_count = if include.true_false {
        doc.quiz.tf.iter().filter(|q| !q.answer).count()
    } else {
        0
    };

    Ok(json!({
        "locale": doc.locale.to_string(),
        "summary": {
            "discussion": topics.len(),
            "true_false": tf.as_array().map_or(0, Vec::len),
            "false_statements": false_count,
            "fill_blank": blank.as_array().map_or(0, Vec::len),
        },
        "discussion": topics,
        "true_false": tf,
        "fill_blank": blank,
    }))
}

/// Pretty-printed JSON for a study document.
pub fn generate_json(doc: &StudyDocument) -> Result<String> {
    let value = document_value(doc)?;
    serde_json::to_string_pretty(&value).context("failed to serialize document")
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyquiz_core::engine::{request_rng, GenerateRequest, QuizEngine};
    use studyquiz_core::model::CategorySet;

    fn make_doc(categories: CategorySet) -> StudyDocument {
        let request = GenerateRequest {
            categories,
            ..Default::default()
        };
        QuizEngine::default().build_document(
            "The cat sat on the mat. It was 5 years old.",
            &request,
            &mut request_rng(Some(11)),
        )
    }

    #[test]
    fn json_lists_every_requested_section() {
        let value = document_value(&make_doc(CategorySet::all())).unwrap();
        assert_eq!(value["locale"], "ko");
        assert_eq!(value["summary"]["discussion"], 2);
        assert_eq!(value["summary"]["true_false"], 2);
        assert_eq!(value["summary"]["fill_blank"], 2);
        assert_eq!(value["fill_blank"][0]["question"], "____ cat sat on the mat.");
        assert_eq!(value["fill_blank"][0]["answer"], "The");
        assert_eq!(value["true_false"][0]["answer"], true);
    }

    #[test]
    fn unrequested_sections_are_empty() {
        let value = document_value(&make_doc(CategorySet::parse_list("tf").unwrap())).unwrap();
        assert_eq!(value["discussion"], json!([]));
        assert_eq!(value["fill_blank"], json!([]));
        assert_eq!(value["summary"]["true_false"], 2);
    }

    #[test]
    fn pretty_output_parses_back() {
        let text = generate_json(&make_doc(CategorySet::all())).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(parsed["true_false"].is_array());
    }
}
