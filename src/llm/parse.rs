use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{QuizQuestion, Translation};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("empty model output")]
    Empty,

    #[error("model output is not the expected JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model output contained no well-formed questions")]
    NoValidQuestions,
}

/// Remove the markdown code fence a model may wrap its JSON in
pub fn strip_code_fences(text: &str) -> &str {
    let mut content = text.trim();

    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    } else if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }

    content.trim()
}

/// Decode a JSON array of quiz questions.
///
/// Questions without exactly four options or with an out-of-range answer are
/// dropped; if none survive the whole output is rejected.
pub fn parse_questions(raw: &str) -> Result<Vec<QuizQuestion>, ParseError> {
    let content = strip_code_fences(raw);
    if content.is_empty() {
        return Err(ParseError::Empty);
    }

    // Elements are decoded one by one so a single bad entry cannot sink the rest
    let decoded: Vec<serde_json::Value> = serde_json::from_str(content)?;
    let total = decoded.len();

    let questions: Vec<QuizQuestion> = decoded
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<QuizQuestion>(item) {
            Ok(question) if question.is_well_formed() => Some(question),
            Ok(question) => {
                warn!(
                    "Dropping malformed question ({} options, answer {}): {}",
                    question.options.len(),
                    question.correct_answer,
                    question.question
                );
                None
            }
            Err(e) => {
                warn!("Dropping undecodable question: {}", e);
                None
            }
        })
        .collect();

    debug!("Parsed {}/{} well-formed questions", questions.len(), total);

    if questions.is_empty() {
        return Err(ParseError::NoValidQuestions);
    }
    Ok(questions)
}

/// Decode a JSON translation object; absent fields become empty strings
pub fn parse_translation(raw: &str) -> Result<Translation, ParseError> {
    let content = strip_code_fences(raw);
    if content.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTIONS: &str = r#"[
      {
        "question": "What does 'mercado' mean?",
        "options": ["Market", "Street", "House", "Car"],
        "correct_answer": 0,
        "explanation": "'Mercado' means 'market'."
      }
    ]"#;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n[1, 2]\n```"), "[1, 2]");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("  [1, 2]  "), "[1, 2]");
        assert_eq!(strip_code_fences("```json"), "");
    }

    #[test]
    fn test_fenced_and_bare_output_parse_identically() {
        let fenced = format!("```json\n{}\n```", QUESTIONS);
        assert_eq!(parse_questions(&fenced).unwrap(), parse_questions(QUESTIONS).unwrap());
    }

    #[test]
    fn test_malformed_questions_dropped() {
        let raw = r#"[
          {"question": "ok", "options": ["a", "b", "c", "d"], "correct_answer": 3, "explanation": ""},
          {"question": "bad index", "options": ["a", "b", "c", "d"], "correct_answer": 4, "explanation": ""},
          {"question": "three options", "options": ["a", "b", "c"], "correct_answer": 0, "explanation": ""}
        ]"#;

        let questions = parse_questions(raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "ok");
    }

    #[test]
    fn test_negative_answer_dropped_others_kept() {
        let raw = r#"[
          {"question": "ok", "options": ["a", "b", "c", "d"], "correct_answer": 1, "explanation": ""},
          {"question": "negative", "options": ["a", "b", "c", "d"], "correct_answer": -1, "explanation": ""},
          {"question": "no options"}
        ]"#;

        let questions = parse_questions(raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "ok");
        assert_eq!(questions[0].correct_answer, 1);
    }

    #[test]
    fn test_translation_null_fields_become_empty() {
        let raw = r#"{"translation": "market", "pronunciation": "merˈkaðo", "definition": null, "example": null}"#;
        let translation = parse_translation(raw).unwrap();
        assert_eq!(translation.translation, "market");
        assert_eq!(translation.pronunciation, "merˈkaðo");
        assert_eq!(translation.definition, "");
        assert_eq!(translation.example, "");
    }

    #[test]
    fn test_all_malformed_is_error() {
        let raw = r#"[{"question": "q", "options": ["a"], "correct_answer": 0, "explanation": ""}]"#;
        assert!(matches!(parse_questions(raw), Err(ParseError::NoValidQuestions)));
        assert!(matches!(parse_questions("[]"), Err(ParseError::NoValidQuestions)));
    }

    #[test]
    fn test_prose_is_json_error() {
        assert!(matches!(
            parse_questions("Sure! Here are your questions."),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(parse_translation("   "), Err(ParseError::Empty)));
    }

    #[test]
    fn test_parse_translation() {
        let raw = "```json\n{\"translation\": \"market\", \"pronunciation\": \"merˈkaðo\"}\n```";
        let translation = parse_translation(raw).unwrap();
        assert_eq!(translation.translation, "market");
        assert_eq!(translation.pronunciation, "merˈkaðo");
        assert_eq!(translation.example, "");
    }
}
