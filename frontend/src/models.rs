use serde::{Deserialize, Serialize};

/// One row of the book table. Column names on the wire are Portuguese.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Book {
    pub id: i64,
    #[serde(rename = "livro")]
    pub title: String,
    #[serde(rename = "resumo", default)]
    pub summary: String,
    #[serde(rename = "capa", default)]
    pub cover_image_url: String,
    #[serde(rename = "audio", default)]
    pub audio_url: Option<String>,
}

impl Book {
    /// Audio preview URL, if the row carries a usable one.
    pub fn audio(&self) -> Option<&str> {
        self.audio_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// "#01", "#02", ... badge shown on cards.
    pub fn badge(position: usize) -> String {
        format!("#{:02}", position + 1)
    }
}

pub const BENEFIT_SETS: [[&str; 3]; 3] = [
    [
        "Domine técnicas de persuasão avançada",
        "Controle total da ansiedade e nervosismo",
        "Desenvolva carisma e presença magnética",
    ],
    [
        "Estruturação perfeita de discursos",
        "Conexão emocional profunda com audiência",
        "Storytelling que emociona e convence",
    ],
    [
        "Presença de palco impactante",
        "Comunicação assertiva e autoritária",
        "Técnicas avançadas de liderança",
    ],
];

/// Benefit bullets rotate through three sets by card position.
pub fn benefits_for(position: usize) -> &'static [&'static str; 3] {
    &BENEFIT_SETS[position % BENEFIT_SETS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(audio: Option<&str>) -> Book {
        Book {
            id: 1,
            title: "A Arte de Falar".to_string(),
            summary: String::new(),
            cover_image_url: String::new(),
            audio_url: audio.map(str::to_string),
        }
    }

    #[test]
    fn blank_audio_counts_as_missing() {
        assert_eq!(book(None).audio(), None);
        assert_eq!(book(Some("")).audio(), None);
        assert_eq!(book(Some("   ")).audio(), None);
        assert_eq!(book(Some("https://cdn/a.mp3")).audio(), Some("https://cdn/a.mp3"));
    }

    #[test]
    fn badge_is_one_based_and_padded() {
        assert_eq!(Book::badge(0), "#01");
        assert_eq!(Book::badge(9), "#10");
    }

    #[test]
    fn benefits_rotate_every_three_cards() {
        assert_eq!(benefits_for(0), benefits_for(3));
        assert_ne!(benefits_for(0), benefits_for(1));
        assert_eq!(benefits_for(2)[0], "Presença de palco impactante");
    }
}
