//! Keyword detection over image prompts and the refinement pass built on it.
//!
//! Matching is plain substring containment on the lower-cased prompt, so a keyword
//! inside a longer word still counts ("carpet" detects `car`). Output order always
//! follows the table order below, never the order of appearance in the prompt.

const OBJECT_KEYWORDS: &[&str] = &["ball", "car", "animal", "person", "food"];

const ACTION_KEYWORDS: &[&str] = &["playing", "eating", "driving", "running"];

const OBJECT_CLARIFICATIONS: &[(&str, &str)] = &[
    ("ball", "soccer ball"),
    ("car", "modern car"),
    ("dog", "cute dog"),
    ("cat", "cute cat"),
    ("monkey", "cute monkey"),
    ("phone", "smartphone"),
    ("book", "open book"),
    ("food", "delicious food"),
];

const ACTION_CONTEXTS: &[(&str, &str)] = &[
    ("playing", "in appropriate environment"),
    ("eating", "with visible food details"),
    ("driving", "on appropriate road"),
    ("running", "with proper running form"),
    ("flying", "in appropriate sky environment"),
];

const QUALITY_KEYWORDS: &[&str] = &[
    "clear",
    "detailed",
    "well-defined",
    "recognizable",
    "accurate",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedSignals {
    pub objects: Vec<&'static str>,
    pub actions: Vec<&'static str>,
}

pub fn analyze_prompt(prompt: &str) -> DetectedSignals {
    let lowered = prompt.to_lowercase();
    let matching = |table: &[&'static str]| {
        table
            .iter()
            .copied()
            .filter(|keyword| lowered.contains(keyword))
            .collect::<Vec<_>>()
    };

    DetectedSignals {
        objects: matching(OBJECT_KEYWORDS),
        actions: matching(ACTION_KEYWORDS),
    }
}

/// Appends clarifications, action context and quality keywords to `prompt`.
///
/// Clarifications are skipped when already present (case-insensitive) in the growing
/// prompt; action contexts are always appended; quality keywords are skipped when the
/// exact text is already present.
pub fn refine_prompt(prompt: &str, signals: &DetectedSignals) -> String {
    let mut refined = prompt.to_string();

    for (object, clarification) in OBJECT_CLARIFICATIONS {
        if !signals.objects.contains(object) {
            continue;
        }
        if !refined.to_lowercase().contains(clarification) {
            refined.push_str(", ");
            refined.push_str(clarification);
        }
    }

    for (action, context) in ACTION_CONTEXTS {
        if signals.actions.contains(action) {
            refined.push_str(", ");
            refined.push_str(context);
        }
    }

    for keyword in QUALITY_KEYWORDS {
        if !refined.contains(keyword) {
            refined.push_str(", ");
            refined.push_str(keyword);
        }
    }

    refined
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUALITY_TAIL: &str = ", clear, detailed, well-defined, recognizable, accurate";

    #[test]
    fn detects_in_table_order_not_text_order() {
        let signals = analyze_prompt("Food on a car, a PERSON running and eating");
        assert_eq!(signals.objects, vec!["car", "person", "food"]);
        assert_eq!(signals.actions, vec!["eating", "running"]);
    }

    #[test]
    fn substring_matches_inside_longer_words() {
        let signals = analyze_prompt("a carpet in a sportsballroom");
        assert_eq!(signals.objects, vec!["ball", "car"]);
        assert!(signals.actions.is_empty());
    }

    #[test]
    fn no_signals_is_valid() {
        assert_eq!(analyze_prompt("a quiet sunset"), DetectedSignals::default());
    }

    #[test]
    fn existing_clarification_is_not_repeated() {
        let prompt = "a soccer ball in a park";
        let signals = analyze_prompt(prompt);
        assert_eq!(signals.objects, vec!["ball"]);
        assert!(signals.actions.is_empty());

        let refined = refine_prompt(prompt, &signals);
        assert_eq!(refined, format!("a soccer ball in a park{QUALITY_TAIL}"));
    }

    #[test]
    fn clarification_check_ignores_case() {
        let prompt = "A SOCCER BALL";
        let refined = refine_prompt(prompt, &analyze_prompt(prompt));
        assert_eq!(refined, format!("A SOCCER BALL{QUALITY_TAIL}"));
    }

    #[test]
    fn appends_clarification_then_action_context() {
        let prompt = "kids playing with a ball in a park";
        let refined = refine_prompt(prompt, &analyze_prompt(prompt));
        assert_eq!(
            refined,
            format!(
                "kids playing with a ball in a park, soccer ball, in appropriate environment{QUALITY_TAIL}"
            )
        );
    }

    #[test]
    fn segments_follow_table_order() {
        let signals = DetectedSignals {
            objects: vec!["food", "car"],
            actions: vec!["running", "driving"],
        };
        let refined = refine_prompt("scene", &signals);
        assert_eq!(
            refined,
            format!(
                "scene, modern car, delicious food, on appropriate road, with proper running form{QUALITY_TAIL}"
            )
        );
    }

    #[test]
    fn objects_without_clarification_add_nothing() {
        let prompt = "an animal and a person";
        let refined = refine_prompt(prompt, &analyze_prompt(prompt));
        assert_eq!(refined, format!("an animal and a person{QUALITY_TAIL}"));
    }

    #[test]
    fn quality_keywords_use_exact_case_check() {
        let refined = refine_prompt("Clear and detailed sky", &DetectedSignals::default());
        assert_eq!(
            refined,
            "Clear and detailed sky, clear, well-defined, recognizable, accurate"
        );
    }

    #[test]
    fn refining_twice_keeps_single_clarification() {
        let prompt = "a red car and a ball";
        let once = refine_prompt(prompt, &analyze_prompt(prompt));
        let twice = refine_prompt(&once, &analyze_prompt(&once));

        assert_eq!(twice.matches("modern car").count(), 1);
        assert_eq!(twice.matches("soccer ball").count(), 1);
        assert_eq!(twice.matches("accurate").count(), 1);
    }
}
