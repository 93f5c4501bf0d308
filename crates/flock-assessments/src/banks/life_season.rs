use crate::bank::{Category, Question, ResponseScale};
use crate::Assessment;

/// Season-of-life check-in: twenty frequency statements across four
/// seasons of spiritual growth. Short enough that it carries no email
/// gate.
pub struct LifeSeason;

impl Assessment for LifeSeason {
    fn id(&self) -> &str {
        "life_season"
    }

    fn name(&self) -> &str {
        "Season of Life Check-in"
    }

    fn description(&self) -> &str {
        "Where are you in your walk right now? Twenty statements, about five minutes."
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            [
                ("exploring", "Exploring"),
                ("rooted", "Rooted"),
                ("serving", "Serving"),
                ("multiplying", "Multiplying"),
            ]
            .iter()
            .map(|(id, name)| category(id, name))
            .collect()
        });
        &CATEGORIES
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            // (prompt, season) in presentation order: five rounds through
            // the four seasons.
            let statements = [
                (
                    "I find myself asking basic questions about what Christians actually believe.",
                    "exploring",
                ),
                (
                    "I spend unhurried time in Scripture and prayer.",
                    "rooted",
                ),
                (
                    "I serve in a role where others depend on me.",
                    "serving",
                ),
                (
                    "I am deliberately investing in someone younger in faith.",
                    "multiplying",
                ),
                (
                    "Church still feels new to me.",
                    "exploring",
                ),
                (
                    "I have people who know how I am really doing spiritually.",
                    "rooted",
                ),
                (
                    "I use my gifts in ways that stretch me.",
                    "serving",
                ),
                (
                    "People ask me to mentor or disciple them.",
                    "multiplying",
                ),
                (
                    "I weigh whether faith deserves a bigger place in my life.",
                    "exploring",
                ),
                (
                    "My weekly rhythm includes worship with my church family.",
                    "rooted",
                ),
                (
                    "I rearrange my schedule to serve when my team needs me.",
                    "serving",
                ),
                (
                    "I hand off responsibilities so others can grow into them.",
                    "multiplying",
                ),
                (
                    "I read or listen to things that explain faith from the ground up.",
                    "exploring",
                ),
                (
                    "I notice specific ways God has grown me recently.",
                    "rooted",
                ),
                (
                    "I look for needs in the church before being asked.",
                    "serving",
                ),
                (
                    "I pray about who to develop next.",
                    "multiplying",
                ),
                (
                    "I feel more comfortable observing than participating.",
                    "exploring",
                ),
                (
                    "I bring real decisions to God before I make them.",
                    "rooted",
                ),
                (
                    "Serving leaves me tired but glad.",
                    "serving",
                ),
                (
                    "I celebrate when someone I invested in no longer needs me.",
                    "multiplying",
                ),
            ];
            statements
                .iter()
                .enumerate()
                .map(|(idx, (prompt, season))| question(idx as u16 + 1, prompt, season))
                .collect()
        });
        &QUESTIONS
    }

    fn email_gate_index(&self) -> Option<usize> {
        None
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn question(id: u16, prompt: &str, season: &str) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        scale: ResponseScale::Frequency5,
        category: Some(season.to_string()),
    }
}
