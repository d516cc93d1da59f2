use serde::{Deserialize, Deserializer, Serialize};

use crate::subtitle::{build_transcript, Subtitle};

/// A learning video with its subtitles and, once generated, its quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub language: String,
    pub difficulty: String,
    /// Length in seconds
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
}

impl Video {
    pub fn transcript(&self) -> String {
        build_transcript(&self.subtitles)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub const OPTION_COUNT: usize = 4;

    /// Four options and an answer index that points into them
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == Self::OPTION_COUNT && self.correct_answer < self.options.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub video_id: String,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn new(video_id: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            video_id: video_id.into(),
            questions,
        }
    }
}

/// Translation of a word or phrase as returned by the text-generation service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    #[serde(deserialize_with = "null_as_empty")]
    pub translation: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub pronunciation: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub definition: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub example: String,
}

/// Models answer `null` for fields they have nothing for
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Translation {
    /// The value handed back when the service cannot be used: the input text, nothing else
    pub fn untranslated(text: &str) -> Self {
        Self {
            translation: text.to_string(),
            ..Self::default()
        }
    }
}

/// On-disk layout of the catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub videos: Vec<Video>,
}
