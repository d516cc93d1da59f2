pub const QUIZ_SYSTEM_PROMPT: &str = "You are a helpful language learning assistant that generates quiz questions. Always respond with valid JSON only.";

pub const TRANSLATE_SYSTEM_PROMPT: &str = "You are a language translation assistant. Always respond with valid JSON only.";

/// Build the instruction asking for `count` multiple choice questions about `transcript`
pub fn build_quiz_prompt(transcript: &str, language: &str, count: usize) -> String {
    let language_name = language_display_name(language);

    format!(
        r#"You are a language learning assistant. Based on the following {language_name} transcript,
generate {count} multiple choice questions to test comprehension and vocabulary.

Transcript:
{transcript}

Requirements:
- Questions should test vocabulary, grammar, and comprehension
- Each question should have 4 options
- Include one correct answer (index 0-3)
- Provide a brief explanation for the correct answer
- Make questions appropriate for language learners
- Mix question types: vocabulary, comprehension, and grammar

Return ONLY a valid JSON array with this exact structure:
[
  {{
    "question": "What does 'palabra' mean?",
    "options": ["Word", "Phrase", "Sentence", "Letter"],
    "correct_answer": 0,
    "explanation": "'Palabra' means 'word' in English."
  }}
]
"#
    )
}

/// Build the instruction asking for a translation with pronunciation, definition and example
pub fn build_translate_prompt(text: &str, from_lang: &str, to_lang: &str) -> String {
    let from_name = language_display_name(from_lang);
    let to_name = language_display_name(to_lang);

    format!(
        r#"Translate this {from_name} text to {to_name}: "{text}"

Provide:
1. Translation
2. Pronunciation (IPA or phonetic)
3. A brief definition
4. An example sentence in {from_name}

Return as JSON:
{{
  "translation": "...",
  "pronunciation": "...",
  "definition": "...",
  "example": "..."
}}
"#
    )
}

/// Expand a language code into a name the model reads unambiguously.
/// Unknown values (including names already spelled out) pass through.
fn language_display_name(code: &str) -> String {
    let name = match code.trim().to_lowercase().as_str() {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "nl" => "Dutch",
        "ru" => "Russian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese",
        "ar" => "Arabic",
        "hi" => "Hindi",
        "tr" => "Turkish",
        "pl" => "Polish",
        "sv" => "Swedish",
        _ => return code.trim().to_string(),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_prompt_mentions_count_and_transcript() {
        let prompt = build_quiz_prompt("Hola mundo", "es", 3);
        assert!(prompt.contains("Spanish transcript"));
        assert!(prompt.contains("generate 3 multiple choice questions"));
        assert!(prompt.contains("Hola mundo"));
        assert!(prompt.contains("\"correct_answer\": 0"));
    }

    #[test]
    fn test_translate_prompt_uses_source_language_for_example() {
        let prompt = build_translate_prompt("palabra", "es", "en");
        assert!(prompt.starts_with("Translate this Spanish text to English: \"palabra\""));
        assert!(prompt.contains("An example sentence in Spanish"));
    }

    #[test]
    fn test_language_name_passthrough() {
        assert_eq!(language_display_name("ES"), "Spanish");
        assert_eq!(language_display_name("Klingon"), "Klingon");
    }
}
