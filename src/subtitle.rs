use serde::{Deserialize, Serialize};

/// A single vocabulary entry attached to a subtitle line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub translation: String,
    pub pronunciation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A timed subtitle line in both the target and the learner's native language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    pub start: f64,
    pub end: f64,
    pub text_target: String,
    pub text_native: String,
    #[serde(default)]
    pub words: Vec<Word>,
}

/// Join the target-language text of every subtitle, in order, with single spaces
pub fn build_transcript(subtitles: &[Subtitle]) -> String {
    subtitles
        .iter()
        .map(|subtitle| subtitle.text_target.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a duration in whole seconds as MM:SS, or H:MM:SS past the hour
pub fn format_timestamp(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
