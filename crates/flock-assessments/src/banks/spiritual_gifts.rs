use crate::bank::{Category, Question, ResponseScale};
use crate::Assessment;

/// Spiritual gifts inventory: forty agreement statements across eight gift
/// categories, five statements per gift, asked in rotation so no gift is
/// answered in a block.
pub struct SpiritualGifts;

impl Assessment for SpiritualGifts {
    fn id(&self) -> &str {
        "spiritual_gifts"
    }

    fn name(&self) -> &str {
        "Spiritual Gifts Assessment"
    }

    fn description(&self) -> &str {
        "Discover where you are wired to serve. Forty statements, about ten minutes."
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            [
                ("teaching", "Teaching"),
                ("serving", "Serving"),
                ("encouragement", "Encouragement"),
                ("giving", "Giving"),
                ("leadership", "Leadership"),
                ("mercy", "Mercy"),
                ("evangelism", "Evangelism"),
                ("hospitality", "Hospitality"),
            ]
            .iter()
            .map(|(id, name)| category(id, name))
            .collect()
        });
        &CATEGORIES
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            // (prompt, gift) in presentation order: five rounds through the
            // eight gifts.
            let statements = [
                (
                    "I enjoy explaining what a Bible passage means so others can apply it.",
                    "teaching",
                ),
                (
                    "I am quickest to volunteer when a task needs doing behind the scenes.",
                    "serving",
                ),
                (
                    "People seek me out when they are discouraged.",
                    "encouragement",
                ),
                (
                    "I look for opportunities to give beyond my regular commitment.",
                    "giving",
                ),
                (
                    "Others naturally look to me to set direction when plans are unclear.",
                    "leadership",
                ),
                (
                    "I sense when someone in the room is hurting before they say so.",
                    "mercy",
                ),
                (
                    "I look for natural openings to talk about my faith.",
                    "evangelism",
                ),
                (
                    "My home is open to guests even on short notice.",
                    "hospitality",
                ),
                (
                    "People tell me complicated ideas make sense when I walk them through.",
                    "teaching",
                ),
                (
                    "Meeting a practical need feels as worshipful to me as singing.",
                    "serving",
                ),
                (
                    "I follow up with people after hard conversations to see how they are doing.",
                    "encouragement",
                ),
                (
                    "Quietly meeting a financial need brings me real joy.",
                    "giving",
                ),
                (
                    "I can break a vision into steps people can actually take.",
                    "leadership",
                ),
                (
                    "Sitting with someone in grief does not frighten me.",
                    "mercy",
                ),
                (
                    "I build friendships with people far from church on purpose.",
                    "evangelism",
                ),
                (
                    "I notice newcomers and make the first move to welcome them.",
                    "hospitality",
                ),
                (
                    "I check claims against Scripture before passing them on.",
                    "teaching",
                ),
                (
                    "I would rather set up chairs than be on the platform.",
                    "serving",
                ),
                (
                    "I can usually find the hopeful angle in a hard situation and say it well.",
                    "encouragement",
                ),
                (
                    "I manage my resources so I am able to give when a need appears.",
                    "giving",
                ),
                (
                    "I am comfortable making a decision when the group is stuck.",
                    "leadership",
                ),
                (
                    "I am patient with people others have given up on.",
                    "mercy",
                ),
                (
                    "Explaining the gospel simply comes naturally to me.",
                    "evangelism",
                ),
                (
                    "Hosting a meal for people I barely know sounds fun, not stressful.",
                    "hospitality",
                ),
                (
                    "Preparing a lesson or study guide energizes me rather than drains me.",
                    "teaching",
                ),
                (
                    "I spot what needs doing at an event without being asked.",
                    "serving",
                ),
                (
                    "Writing a note or text to lift someone's day comes naturally to me.",
                    "encouragement",
                ),
                (
                    "I am drawn to fund projects that advance the church's mission.",
                    "giving",
                ),
                (
                    "I think about who should own a task, not just how to do it myself.",
                    "leadership",
                ),
                (
                    "I am drawn to visit the sick, the lonely, and the imprisoned.",
                    "mercy",
                ),
                (
                    "I pray by name for people who do not yet follow Jesus.",
                    "evangelism",
                ),
                (
                    "I arrange spaces so people feel expected and at ease.",
                    "hospitality",
                ),
                (
                    "I notice when a lesson skips a step the listeners needed.",
                    "teaching",
                ),
                (
                    "Helping someone move, cook, or repair something fills me up.",
                    "serving",
                ),
                (
                    "I enjoy helping someone take their next small step of faith.",
                    "encouragement",
                ),
                (
                    "I would rather give toward a need than be publicly thanked for it.",
                    "giving",
                ),
                (
                    "Setting goals for a team and tracking them energizes me.",
                    "leadership",
                ),
                (
                    "Compassion moves me to act, not only to feel.",
                    "mercy",
                ),
                (
                    "Inviting someone to church or to a meal feels easy to me.",
                    "evangelism",
                ),
                (
                    "I remember names and details that make people feel known.",
                    "hospitality",
                ),
            ];
            statements
                .iter()
                .enumerate()
                .map(|(idx, (prompt, gift))| question(idx as u16 + 1, prompt, gift))
                .collect()
        });
        &QUESTIONS
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn question(id: u16, prompt: &str, gift: &str) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        scale: ResponseScale::Agreement5,
        category: Some(gift.to_string()),
    }
}
