//! Built-in Question Catalogue
//!
//! The question set written by `POST /api/admin/seed-questions`. Step 1
//! covers A1-A2, step 2 covers B1-B2, step 3 covers C1-C2.

use crate::domain::entities::Question;
use crate::domain::value_objects::{Level, QuestionId, Step};

struct Entry {
    id: &'static str,
    step: Step,
    level: Level,
    text: &'static str,
    options: [&'static str; 4],
    correct: &'static str,
}

const ENTRIES: &[Entry] = &[
    // Step 1
    Entry {
        id: "s1-a1-001",
        step: Step::ONE,
        level: Level::A1,
        text: "She ___ a teacher.",
        options: ["is", "are", "am", "be"],
        correct: "is",
    },
    Entry {
        id: "s1-a1-002",
        step: Step::ONE,
        level: Level::A1,
        text: "I have two ___.",
        options: ["cat", "cats", "cates", "caties"],
        correct: "cats",
    },
    Entry {
        id: "s1-a1-003",
        step: Step::ONE,
        level: Level::A1,
        text: "___ you like coffee?",
        options: ["Do", "Does", "Are", "Is"],
        correct: "Do",
    },
    Entry {
        id: "s1-a2-001",
        step: Step::ONE,
        level: Level::A2,
        text: "Yesterday we ___ to the cinema.",
        options: ["go", "goes", "went", "gone"],
        correct: "went",
    },
    Entry {
        id: "s1-a2-002",
        step: Step::ONE,
        level: Level::A2,
        text: "This box is ___ than that one.",
        options: ["heavy", "heavier", "heaviest", "more heavy"],
        correct: "heavier",
    },
    Entry {
        id: "s1-a2-003",
        step: Step::ONE,
        level: Level::A2,
        text: "There isn't ___ milk left.",
        options: ["some", "any", "many", "a"],
        correct: "any",
    },
    // Step 2
    Entry {
        id: "s2-b1-001",
        step: Step::TWO,
        level: Level::B1,
        text: "I have lived here ___ 2015.",
        options: ["for", "since", "from", "during"],
        correct: "since",
    },
    Entry {
        id: "s2-b1-002",
        step: Step::TWO,
        level: Level::B1,
        text: "If it rains, we ___ at home.",
        options: ["stay", "will stay", "would stay", "stayed"],
        correct: "will stay",
    },
    Entry {
        id: "s2-b1-003",
        step: Step::TWO,
        level: Level::B1,
        text: "The report ___ by the manager last week.",
        options: ["wrote", "was written", "has written", "is writing"],
        correct: "was written",
    },
    Entry {
        id: "s2-b2-001",
        step: Step::TWO,
        level: Level::B2,
        text: "I wish I ___ more time to study.",
        options: ["have", "had", "will have", "am having"],
        correct: "had",
    },
    Entry {
        id: "s2-b2-002",
        step: Step::TWO,
        level: Level::B2,
        text: "She denied ___ the window.",
        options: ["to break", "breaking", "break", "broke"],
        correct: "breaking",
    },
    Entry {
        id: "s2-b2-003",
        step: Step::TWO,
        level: Level::B2,
        text: "By the time we arrived, the film ___.",
        options: ["started", "has started", "had started", "starts"],
        correct: "had started",
    },
    // Step 3
    Entry {
        id: "s3-c1-001",
        step: Step::THREE,
        level: Level::C1,
        text: "Not only ___ late, but he also forgot the tickets.",
        options: ["he was", "was he", "he is", "is he"],
        correct: "was he",
    },
    Entry {
        id: "s3-c1-002",
        step: Step::THREE,
        level: Level::C1,
        text: "The proposal was met with ___ scepticism.",
        options: ["considerable", "considerate", "considering", "considered"],
        correct: "considerable",
    },
    Entry {
        id: "s3-c1-003",
        step: Step::THREE,
        level: Level::C1,
        text: "Had I known, I ___ differently.",
        options: ["will act", "would act", "would have acted", "acted"],
        correct: "would have acted",
    },
    Entry {
        id: "s3-c2-001",
        step: Step::THREE,
        level: Level::C2,
        text: "His argument doesn't hold ___ under scrutiny.",
        options: ["water", "air", "ground", "fire"],
        correct: "water",
    },
    Entry {
        id: "s3-c2-002",
        step: Step::THREE,
        level: Level::C2,
        text: "The minister's remarks were deliberately ___.",
        options: ["equivocal", "equivalent", "equitable", "equable"],
        correct: "equivocal",
    },
    Entry {
        id: "s3-c2-003",
        step: Step::THREE,
        level: Level::C2,
        text: "Little ___ they realise what lay ahead.",
        options: ["do", "did", "had", "were"],
        correct: "did",
    },
];

/// Every catalogue question, in exam order within each step
pub fn questions() -> Vec<Question> {
    ENTRIES
        .iter()
        .map(|e| Question {
            question_id: QuestionId::new(e.id),
            text: e.text.to_owned(),
            options: e.options.iter().map(|o| (*o).to_owned()).collect(),
            correct_answer: e.correct.to_owned(),
            level: e.level,
            step: e.step,
        })
        .collect()
}
