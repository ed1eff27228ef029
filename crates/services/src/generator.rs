use rand::seq::SliceRandom;
use rand::{Rng, rng};
use tracing::{debug, warn};

use vocab_core::cloze::mask_word;
use vocab_core::model::{Lesson, QuestionKind, QuizItem, QuizSettings, VocabEntry};

use crate::error::GenerateError;

/// Output of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuiz {
    /// Shuffled questions, never empty.
    pub items: Vec<QuizItem>,
    /// One `GenerateError::MalformedEntry` per lesson entry that was skipped,
    /// and one `GenerateError::ClozeUnavailable` per cloze question dropped.
    pub skipped: Vec<GenerateError>,
}

/// Turns a lesson's vocabulary entries into a shuffled list of questions.
///
/// Every entry with a meaning yields a definition question. Every entry with
/// an example yields a cloze question, unless the lesson has cloze disabled.
/// Cloze masking matches the word as a case-insensitive substring, so `"cat"`
/// is also blanked inside `"category"`.
#[derive(Debug, Clone, Default)]
pub struct QuestionGenerator {
    settings: QuizSettings,
}

impl QuestionGenerator {
    #[must_use]
    pub fn new(settings: QuizSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Generate questions for `lesson`, shuffled with the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::NoItemsForLesson` if the lesson yields no questions.
    pub fn generate(
        &self,
        entries: &[VocabEntry],
        lesson: &Lesson,
    ) -> Result<GeneratedQuiz, GenerateError> {
        self.generate_with_rng(entries, lesson, &mut rng())
    }

    /// Generate questions for `lesson`, shuffled with the provided RNG.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::NoItemsForLesson` if the lesson yields no questions.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        entries: &[VocabEntry],
        lesson: &Lesson,
        rng: &mut R,
    ) -> Result<GeneratedQuiz, GenerateError> {
        let mut items = Vec::new();
        let mut skipped = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let entry = entry.trimmed();
            if &entry.lesson != lesson.key() {
                continue;
            }
            if !entry.is_well_formed() {
                warn!(index, lesson = %lesson.key(), "skipping entry with empty word");
                skipped.push(GenerateError::MalformedEntry { index });
                continue;
            }

            if !entry.meaning.is_empty() {
                items.push(self.definition_item(&entry));
            }

            if lesson.cloze_enabled() && !entry.example.is_empty() {
                match mask_word(&entry.example, &entry.word, self.settings.placeholder()) {
                    Ok(prompt) if reveals_word(&prompt, &entry.word) => {
                        warn!(index, "masked sentence still shows the word; skipping cloze question");
                        skipped.push(GenerateError::ClozeUnavailable { index });
                    }
                    Ok(prompt) => items.push(self.cloze_item(&entry, prompt)),
                    Err(err) => {
                        warn!(index, error = %err, "skipping cloze question");
                        skipped.push(GenerateError::ClozeUnavailable { index });
                    }
                }
            }
        }

        if items.is_empty() {
            return Err(GenerateError::NoItemsForLesson {
                lesson: lesson.key().clone(),
            });
        }

        items.shuffle(rng);
        debug!(
            lesson = %lesson.key(),
            items = items.len(),
            skipped = skipped.len(),
            "generated quiz"
        );

        Ok(GeneratedQuiz { items, skipped })
    }

    fn definition_item(&self, entry: &VocabEntry) -> QuizItem {
        QuizItem::new(
            QuestionKind::Definition,
            entry.meaning.as_str(),
            entry.word.as_str(),
            entry.part_of_speech.as_str(),
            self.settings.definition_label(),
        )
    }

    fn cloze_item(&self, entry: &VocabEntry, prompt: String) -> QuizItem {
        QuizItem::new(
            QuestionKind::ClozeSentence,
            prompt,
            entry.word.as_str(),
            entry.part_of_speech.as_str(),
            self.settings.cloze_label(),
        )
    }
}

fn reveals_word(prompt: &str, word: &str) -> bool {
    prompt.to_lowercase().contains(&word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn apple() -> VocabEntry {
        VocabEntry::new("L1", "apple")
            .with_part_of_speech("n.")
            .with_meaning("a fruit")
            .with_example("I ate an Apple today.")
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn sorted_by_kind(mut items: Vec<QuizItem>) -> Vec<QuizItem> {
        items.sort_by_key(|item| item.kind() == QuestionKind::ClozeSentence);
        items
    }

    #[test]
    fn apple_yields_definition_and_cloze() {
        let generator = QuestionGenerator::default();
        let quiz = generator
            .generate_with_rng(&[apple()], &Lesson::new("L1", true), &mut seeded())
            .unwrap();

        let items = sorted_by_kind(quiz.items);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].kind(), QuestionKind::Definition);
        assert_eq!(items[0].prompt(), "a fruit");
        assert_eq!(items[0].expected_answer(), "apple");
        assert_eq!(items[0].hint(), "n.");

        assert_eq!(items[1].kind(), QuestionKind::ClozeSentence);
        assert_eq!(items[1].prompt(), "I ate an ______ today.");
        assert_eq!(items[1].expected_answer(), "apple");
        assert!(quiz.skipped.is_empty());
    }

    #[test]
    fn prompt_labels_follow_settings() {
        let settings =
            QuizSettings::new("[?]", None, "Meaning → word", "Complete the sentence").unwrap();
        let generator = QuestionGenerator::new(settings);
        let quiz = generator
            .generate_with_rng(&[apple()], &Lesson::new("L1", true), &mut seeded())
            .unwrap();

        let items = sorted_by_kind(quiz.items);
        assert_eq!(items[0].prompt_label(), "Meaning → word");
        assert_eq!(items[1].prompt_label(), "Complete the sentence");
        assert_eq!(items[1].prompt(), "I ate an [?] today.");
    }

    #[test]
    fn definition_only_lesson_skips_cloze() {
        let generator = QuestionGenerator::default();
        let quiz = generator
            .generate_with_rng(&[apple()], &Lesson::definition_only("L1"), &mut seeded())
            .unwrap();

        assert_eq!(quiz.items.len(), 1);
        assert_eq!(quiz.items[0].kind(), QuestionKind::Definition);
    }

    #[test]
    fn filters_to_selected_lesson() {
        let entries = vec![
            apple(),
            VocabEntry::new("L2", "pear").with_meaning("another fruit"),
            VocabEntry::new(" L1 ", "plum").with_meaning("a purple fruit"),
        ];
        let quiz = QuestionGenerator::default()
            .generate_with_rng(&entries, &Lesson::new("L1", true), &mut seeded())
            .unwrap();

        assert_eq!(quiz.items.len(), 3);
        assert!(quiz.items.iter().all(|i| i.expected_answer() != "pear"));
    }

    #[test]
    fn item_count_matches_meanings_plus_examples() {
        let entries = vec![
            VocabEntry::new("L1", "one").with_meaning("1"),
            VocabEntry::new("L1", "two").with_example("Two is a number."),
            VocabEntry::new("L1", "three")
                .with_meaning("3")
                .with_example("Three of them."),
            VocabEntry::new("L1", "four"),
        ];
        let generator = QuestionGenerator::default();

        let with_cloze = generator
            .generate_with_rng(&entries, &Lesson::new("L1", true), &mut seeded())
            .unwrap();
        assert_eq!(with_cloze.items.len(), 2 + 2);

        let without_cloze = generator
            .generate_with_rng(&entries, &Lesson::definition_only("L1"), &mut seeded())
            .unwrap();
        assert_eq!(without_cloze.items.len(), 2);
    }

    #[test]
    fn cloze_prompts_never_contain_the_answer() {
        let entries = vec![
            VocabEntry::new("L1", "cat").with_example("The Cat sat in a category of CATS."),
            VocabEntry::new("L1", "run").with_example("run RUN Run rUn"),
            VocabEntry::new("L1", "a+b").with_example("Compute A+B and a+b."),
        ];
        let quiz = QuestionGenerator::default()
            .generate_with_rng(&entries, &Lesson::new("L1", true), &mut seeded())
            .unwrap();

        assert_eq!(quiz.items.len(), 3);
        for item in &quiz.items {
            assert_eq!(item.kind(), QuestionKind::ClozeSentence);
            let prompt = item.prompt().to_lowercase();
            let answer = item.expected_answer().to_lowercase();
            assert!(!prompt.contains(&answer), "{prompt} still contains {answer}");
        }
    }

    #[test]
    fn substring_inside_longer_word_is_masked() {
        let entries = vec![VocabEntry::new("L1", "cat").with_example("A category.")];
        let quiz = QuestionGenerator::default()
            .generate_with_rng(&entries, &Lesson::new("L1", true), &mut seeded())
            .unwrap();
        assert_eq!(quiz.items[0].prompt(), "A ______egory.");
    }

    #[test]
    fn malformed_entries_are_skipped_and_reported() {
        let entries = vec![
            VocabEntry::new("L1", "  ").with_meaning("orphan"),
            apple(),
            VocabEntry::new("L2", "").with_meaning("other lesson"),
        ];
        let quiz = QuestionGenerator::default()
            .generate_with_rng(&entries, &Lesson::new("L1", true), &mut seeded())
            .unwrap();

        assert_eq!(quiz.items.len(), 2);
        assert_eq!(quiz.skipped, vec![GenerateError::MalformedEntry { index: 0 }]);
    }

    #[test]
    fn cloze_dropped_when_placeholder_shows_the_word() {
        let settings = QuizSettings::new("(blank)", None, "def", "cloze").unwrap();
        let entries = vec![
            VocabEntry::new("L1", "blank")
                .with_meaning("empty")
                .with_example("Leave it blank."),
            apple(),
        ];
        let quiz = QuestionGenerator::new(settings)
            .generate_with_rng(&entries, &Lesson::new("L1", true), &mut seeded())
            .unwrap();

        assert_eq!(quiz.items.len(), 3);
        assert_eq!(quiz.skipped, vec![GenerateError::ClozeUnavailable { index: 0 }]);
        for item in &quiz.items {
            if item.kind() == QuestionKind::ClozeSentence {
                assert_eq!(item.expected_answer(), "apple");
                assert_eq!(item.prompt(), "I ate an (blank) today.");
            }
        }
    }

    #[test]
    fn dollar_placeholder_survives_generation() {
        let settings = QuizSettings::new("$word", None, "def", "cloze").unwrap();
        let quiz = QuestionGenerator::new(settings)
            .generate_with_rng(&[apple()], &Lesson::new("L1", true), &mut seeded())
            .unwrap();
        let items = sorted_by_kind(quiz.items);
        assert_eq!(items[1].prompt(), "I ate an $word today.");
    }

    #[test]
    fn fields_are_trimmed_before_use() {
        let mut entry = apple();
        entry.word = "  apple ".into();
        entry.meaning = " a fruit  ".into();
        entry.part_of_speech = " n. ".into();
        let quiz = QuestionGenerator::default()
            .generate_with_rng(&[entry], &Lesson::definition_only("L1"), &mut seeded())
            .unwrap();

        assert_eq!(quiz.items[0].prompt(), "a fruit");
        assert_eq!(quiz.items[0].expected_answer(), "apple");
        assert_eq!(quiz.items[0].hint(), "n.");
    }

    #[test]
    fn empty_lesson_is_an_error() {
        let entries = vec![VocabEntry::new("L1", "apple"), VocabEntry::new("L1", "pear")];
        let err = QuestionGenerator::default()
            .generate_with_rng(&entries, &Lesson::new("L1", true), &mut seeded())
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::NoItemsForLesson {
                lesson: "L1".into()
            }
        );

        let err = QuestionGenerator::default()
            .generate_with_rng(&entries, &Lesson::new("missing", true), &mut seeded())
            .unwrap_err();
        assert!(matches!(err, GenerateError::NoItemsForLesson { .. }));
    }

    #[test]
    fn same_seed_same_order() {
        let entries: Vec<_> = (0..10)
            .map(|i| VocabEntry::new("L1", format!("w{i}")).with_meaning(format!("m{i}")))
            .collect();
        let lesson = Lesson::new("L1", true);
        let generator = QuestionGenerator::default();

        let a = generator
            .generate_with_rng(&entries, &lesson, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = generator
            .generate_with_rng(&entries, &lesson, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a.items, b.items);

        let mut answers: Vec<_> = a.items.iter().map(|i| i.expected_answer().to_owned()).collect();
        answers.sort();
        let mut expected: Vec<_> = (0..10).map(|i| format!("w{i}")).collect();
        expected.sort();
        assert_eq!(answers, expected);
    }
}
