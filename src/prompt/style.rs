use std::fmt;

const REALISTIC_KEYWORDS: &[&str] = &[
    "photo",
    "photograph",
    "realistic",
    "real",
    "lifelike",
    "photorealistic",
    "person",
    "people",
    "portrait",
    "face",
    "human",
    "animal",
    "wildlife",
    "nature",
    "landscape",
    "cityscape",
    "building",
    "architecture",
];

const ARTISTIC_KEYWORDS: &[&str] = &[
    "art",
    "artistic",
    "painting",
    "drawing",
    "sketch",
    "illustration",
    "cartoon",
    "anime",
    "comic",
    "fantasy",
    "surreal",
    "abstract",
    "watercolor",
    "oil painting",
    "digital art",
    "concept art",
    "vector",
];

const CONCEPTUAL_KEYWORDS: &[&str] = &[
    "concept",
    "abstract",
    "symbolic",
    "metaphorical",
    "idea",
    "thought",
    "philosophical",
    "metaphor",
    "symbol",
    "representation",
    "diagram",
    "infographic",
    "chart",
    "graph",
    "schematic",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageStyle {
    Realistic,
    Artistic,
    Conceptual,
    Default,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 4] = [
        ImageStyle::Realistic,
        ImageStyle::Artistic,
        ImageStyle::Conceptual,
        ImageStyle::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageStyle::Realistic => "realistic",
            ImageStyle::Artistic => "artistic",
            ImageStyle::Conceptual => "conceptual",
            ImageStyle::Default => "default",
        }
    }

    /// Unrecognized names resolve to [`ImageStyle::Default`].
    pub fn parse_or_default(name: &str) -> Self {
        let normalized = name.trim().to_lowercase();
        ImageStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .unwrap_or(ImageStyle::Default)
    }

    pub fn quality_suffix(self) -> &'static str {
        match self {
            ImageStyle::Realistic => "high quality, photorealistic, detailed, professional photography, 8K resolution, sharp focus",
            ImageStyle::Artistic => "beautiful, artistic, creative, visually stunning, masterpiece, trending on art station, vibrant colors",
            ImageStyle::Conceptual => "clear, conceptual, symbolic, meaningful, well-composed, professional design, visually engaging",
            ImageStyle::Default => "high quality, detailed, visually appealing, professional, well-composed",
        }
    }
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleScores {
    pub realistic: usize,
    pub artistic: usize,
    pub conceptual: usize,
}

fn count_matches(haystack: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .count()
}

pub fn score_prompt(prompt: &str) -> StyleScores {
    let lowered = prompt.to_lowercase();
    StyleScores {
        realistic: count_matches(&lowered, REALISTIC_KEYWORDS),
        artistic: count_matches(&lowered, ARTISTIC_KEYWORDS),
        conceptual: count_matches(&lowered, CONCEPTUAL_KEYWORDS),
    }
}

/// A style wins only with a strictly higher score than both others; any tie is `Default`.
pub fn classify_image_style(prompt: &str) -> ImageStyle {
    let StyleScores {
        realistic,
        artistic,
        conceptual,
    } = score_prompt(prompt);

    if realistic > artistic && realistic > conceptual {
        ImageStyle::Realistic
    } else if artistic > realistic && artistic > conceptual {
        ImageStyle::Artistic
    } else if conceptual > realistic && conceptual > artistic {
        ImageStyle::Conceptual
    } else {
        ImageStyle::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_winner_is_chosen() {
        assert_eq!(
            classify_image_style("A lifelike portrait photo"),
            ImageStyle::Realistic
        );
        assert_eq!(
            classify_image_style("anime sketch of a dragon"),
            ImageStyle::Artistic
        );
        assert_eq!(
            classify_image_style("an infographic about climate"),
            ImageStyle::Conceptual
        );
    }

    #[test]
    fn two_way_tie_resolves_to_default() {
        let scores = score_prompt("photo of a painting");
        assert_eq!(scores.realistic, 1);
        assert_eq!(scores.artistic, 1);
        assert_eq!(scores.conceptual, 0);
        assert_eq!(classify_image_style("photo of a painting"), ImageStyle::Default);
    }

    #[test]
    fn zero_scores_resolve_to_default() {
        assert_eq!(classify_image_style("hello there"), ImageStyle::Default);
        assert_eq!(classify_image_style(""), ImageStyle::Default);
    }

    #[test]
    fn overlapping_terms_count_in_every_list() {
        let scores = score_prompt("a symbolic diagram of art and abstract realistic photo");
        assert_eq!(
            scores,
            StyleScores {
                realistic: 3,
                artistic: 2,
                conceptual: 4,
            }
        );
        assert_eq!(
            classify_image_style("a symbolic diagram of art and abstract realistic photo"),
            ImageStyle::Conceptual
        );
    }

    #[test]
    fn unknown_style_names_parse_to_default() {
        assert_eq!(ImageStyle::parse_or_default("Artistic"), ImageStyle::Artistic);
        assert_eq!(ImageStyle::parse_or_default("cubist"), ImageStyle::Default);
        for style in ImageStyle::ALL {
            assert_eq!(ImageStyle::parse_or_default(style.as_str()), style);
        }
    }
}
