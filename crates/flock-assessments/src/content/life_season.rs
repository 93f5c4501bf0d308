use super::narrative;
use crate::narrative::NarrativeTable;

pub(super) fn install(table: &mut NarrativeTable) {
    table.insert(
        "life_season",
        "exploring",
        narrative(
            "You are in an exploring season: asking honest questions, watching from the edge, \
             deciding what faith deserves from you. That is not a deficiency; it is a doorway.",
            &[
                "You ask the questions others are afraid to voice.",
                "You take faith seriously enough to examine it.",
            ],
            &[
                "Exploring alone stalls; questions need companions.",
                "Observation becomes avoidance if it never risks participation.",
            ],
            &[
                "Join a group built for questions rather than a membership class.",
                "Read one Gospel slowly with someone a few steps ahead of you.",
            ],
            &["John 1:38-39", "Acts 17:11"],
            &[
                "Tell one trusted person the real questions you are carrying.",
                "Pick one gathering to attend consistently for the next two months.",
            ],
        ),
    );

    table.insert(
        "life_season",
        "rooted",
        narrative(
            "You are in a rooted season: rhythms of Scripture, prayer, and community are taking \
             hold, and growth is measurable when you look back a year.",
            &[
                "Your spiritual habits survive busy weeks.",
                "You are known by people who can tell you the truth.",
            ],
            &[
                "Depth can become a private project; rootedness is for bearing fruit.",
                "Comfortable rhythms eventually need a stretch.",
            ],
            &[
                "Take on one responsibility that serves people outside your circle.",
                "Revisit your rhythms and retire one that has gone stale.",
            ],
            &["Psalm 1:2-3", "Colossians 2:6-7"],
            &[
                "Ask your group leader where your stability could hold weight for others.",
                "Choose one discipline to deepen this season, not five.",
            ],
        ),
    );

    table.insert(
        "life_season",
        "serving",
        narrative(
            "You are in a serving season: your gifts are engaged, people depend on you, and \
             tiredness and gladness often arrive together.",
            &[
                "You carry real responsibility in the body.",
                "You serve from gifting, not guilt.",
            ],
            &[
                "Output without input hollows out; guard the practices that feed you.",
                "Doing can crowd out developing; someone should be learning beside you.",
            ],
            &[
                "Audit your commitments and cut the one you hold only from habit.",
                "Invite someone to shadow you in the role you know best.",
            ],
            &["1 Peter 4:10-11", "Mark 6:31"],
            &[
                "Schedule a rest rhythm as concretely as your serving schedule.",
                "Name your likely successor and start handing them pieces.",
            ],
        ),
    );

    table.insert(
        "life_season",
        "multiplying",
        narrative(
            "You are in a multiplying season: your attention has shifted from doing the work to \
             building the people who will do it after you.",
            &[
                "You measure success by who you have raised up.",
                "You release responsibility instead of hoarding it.",
            ],
            &[
                "Multipliers can drift from first-hand ministry; keep one hands-on post.",
                "Not everyone you invest in will take the baton; persevere anyway.",
            ],
            &[
                "Formalize one mentoring relationship with a regular cadence.",
                "Work with leadership to identify the next people worth developing.",
            ],
            &["2 Timothy 2:2", "Titus 2:3-7"],
            &[
                "Write down the two or three people you are building into, by name.",
                "Plan your own succession in one role this year.",
            ],
        ),
    );
}
