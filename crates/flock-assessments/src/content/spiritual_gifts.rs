use super::narrative;
use crate::narrative::NarrativeTable;

pub(super) fn install(table: &mut NarrativeTable) {
    table.insert(
        "spiritual_gifts",
        "teaching",
        narrative(
            "You make truth clear. When Scripture is explained well, people change how they \
             live, and your responses show a drive to study, simplify, and hand understanding \
             to others.",
            &[
                "You study before you speak.",
                "You notice the step a learner is missing.",
                "You make complex passages feel approachable.",
            ],
            &[
                "Clarity can turn into correction; keep warmth in the room.",
                "Preparation can crowd out presence with people.",
            ],
            &[
                "Co-teach a small group series with an experienced leader.",
                "Offer to prepare discussion guides for group leaders.",
                "Ask for feedback from one learner after each session.",
            ],
            &["Romans 12:7", "2 Timothy 2:15", "Nehemiah 8:8"],
            &[
                "Tell your group leader you want a teaching rep this quarter.",
                "Pick one book of the Bible to study deeply this season.",
            ],
        ),
    );

    table.insert(
        "spiritual_gifts",
        "serving",
        narrative(
            "You love through action. Your responses point to someone who sees practical needs \
             early and meets them without needing the platform, the credit, or the microphone.",
            &[
                "You see the task nobody claimed.",
                "You show up early and stay late.",
                "Your help is concrete, not theoretical.",
            ],
            &[
                "Saying yes to everything leads to burnout; practice a considered no.",
                "Quiet service can hide quiet resentment; name your limits out loud.",
            ],
            &[
                "Join a setup, hospitality, or facilities team where reliability matters.",
                "Adopt one recurring need (meals, rides, repairs) rather than many one-offs.",
            ],
            &["Romans 12:7", "Galatians 5:13", "John 13:14-15"],
            &[
                "Ask a staff member which team is currently shortest on hands.",
                "Block the serving slot on your calendar like any other commitment.",
            ],
        ),
    );

    table.insert(
        "spiritual_gifts",
        "encouragement",
        narrative(
            "You put courage into people. Your responses show an instinct for the right word at \
             the right time, and for staying with someone until hope takes hold.",
            &[
                "You notice discouragement before it is spoken.",
                "You follow up after the conversation everyone else forgot.",
                "Your words move people to take the next step.",
            ],
            &[
                "Encouragement without honesty flattens into flattery.",
                "Carrying everyone's burdens needs its own support structure.",
            ],
            &[
                "Join a care or follow-up team that contacts newcomers and the hurting.",
                "Write one intentional note of encouragement each week.",
            ],
            &["Romans 12:8", "1 Thessalonians 5:11", "Acts 4:36"],
            &[
                "Ask who in your group is one hard week from walking away, and go to them.",
                "Tell your leader you want the follow-up list, not the stage.",
            ],
        ),
    );

    table.insert(
        "spiritual_gifts",
        "giving",
        narrative(
            "You fund the mission gladly. Your responses show generosity that is planned, quiet, \
             and joyful rather than impulsive or reluctant.",
            &[
                "You arrange your finances so you are ready to give.",
                "You give without needing recognition.",
                "You spot under-resourced work others overlook.",
            ],
            &[
                "Money can become a substitute for presence; give time too.",
                "Quiet giving still benefits from wise counsel and accountability.",
            ],
            &[
                "Ask the finance team which ministries are quietly under-funded.",
                "Set a giving goal that requires faith, not just margin.",
            ],
            &["Romans 12:8", "2 Corinthians 9:7", "Proverbs 11:24-25"],
            &[
                "Review your giving plan this month and pray over one stretch step.",
                "Pair one gift with showing up in person to the work you funded.",
            ],
        ),
    );

    table.insert(
        "spiritual_gifts",
        "leadership",
        narrative(
            "You set direction and bring people along. Your responses show comfort with \
             ambiguity, decisions, and the slow work of turning a vision into assignments \
             people can own.",
            &[
                "You make the call when the group stalls.",
                "You translate vision into concrete next steps.",
                "You think in terms of who owns what.",
            ],
            &[
                "Drive can outrun care; check the people, not just the plan.",
                "Delegation is development, not dumping; invest in the person you hand work to.",
            ],
            &[
                "Apprentice under a ministry lead with a view to taking a team.",
                "Lead a short-term project (an event, a launch) end to end.",
            ],
            &["Romans 12:8", "Exodus 18:21", "Hebrews 13:7"],
            &[
                "Name one team you could realistically lead within a year, and say so.",
                "Ask your leader for honest feedback on how you carry authority.",
            ],
        ),
    );

    table.insert(
        "spiritual_gifts",
        "mercy",
        narrative(
            "You move toward pain. Your responses show patience with the hurting and the \
             overlooked, and a compassion that acts instead of merely aching.",
            &[
                "You sense hurt before it is announced.",
                "You stay present in grief without rushing it.",
                "You keep showing up for people others quietly drop.",
            ],
            &[
                "Absorbing pain without rhythm leads to compassion fatigue.",
                "Mercy sometimes needs to partner with truth-telling.",
            ],
            &[
                "Join a visitation, grief-care, or recovery ministry.",
                "Learn the basics of listening care from a trained pastoral carer.",
            ],
            &["Romans 12:8", "Matthew 25:36", "Luke 10:33-34"],
            &[
                "Pick one person in a hard season and commit to them for three months.",
                "Schedule your own replenishment as deliberately as your care for others.",
            ],
        ),
    );

    table.insert(
        "spiritual_gifts",
        "evangelism",
        narrative(
            "You carry the story outward. Your responses show ease with people far from faith \
             and a recurring instinct to make introductions — to the church, and to Jesus.",
            &[
                "You keep real friendships outside the church bubble.",
                "You explain the gospel in plain words.",
                "Invitations feel natural to you, not forced.",
            ],
            &[
                "Enthusiasm can outpace listening; let questions lead.",
                "New believers need a handoff into community, not just a decision.",
            ],
            &[
                "Host or help lead a course designed for guests and skeptics.",
                "Train others in sharing their story; your ease is teachable.",
            ],
            &["Ephesians 4:11", "2 Timothy 4:5", "Luke 19:10"],
            &[
                "Write down three names to pray for daily, and look for the open door.",
                "Plan one invitation this month that costs you something.",
            ],
        ),
    );

    table.insert(
        "spiritual_gifts",
        "hospitality",
        narrative(
            "You make room for people. Your responses show a readiness to open your home, your \
             table, and your attention so that strangers become known.",
            &[
                "Your door is genuinely open, not theoretically open.",
                "You notice the person standing alone.",
                "You remember the details that make people feel seen.",
            ],
            &[
                "Hosting can slide into performance; simple food, full attention.",
                "Welcoming the same circle is comfort, not hospitality; keep widening it.",
            ],
            &[
                "Join the welcome team where first impressions are formed.",
                "Host a monthly table with at least one seat for someone new.",
            ],
            &["1 Peter 4:9", "Romans 12:13", "Hebrews 13:2"],
            &[
                "Pick a date this month and fill your table with people who do not know each other.",
                "Learn five newcomers' names and use them next Sunday.",
            ],
        ),
    );
}
