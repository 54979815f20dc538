//! Hand-authored compatibility and symbol tables.
//!
//! Source data only; [`crate::database`] turns it into owned models once per process.

use numen_core::constants::{FALLBACK_BASE_SCORE, FALLBACK_MAX_SCORE, FALLBACK_MIN_SCORE};
use numen_core::models::Element;

/// One row of the compatibility table. `low <= high`.
pub(crate) struct PairEntry {
    pub low: i32,
    pub high: i32,
    pub base: u8,
    pub min: u8,
    pub max: u8,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub description: &'static str,
    pub dynamic: &'static str,
    pub advice: &'static str,
}

/// Fallback for pairs with no entry.
pub(crate) const GENERIC_ENTRY: PairEntry = PairEntry {
    low: 0,
    high: 0,
    base: FALLBACK_BASE_SCORE,
    min: FALLBACK_MIN_SCORE,
    max: FALLBACK_MAX_SCORE,
    strengths: &["Mutual respect", "Shared growth", "Complementary energies"],
    challenges: &["Different perspectives", "Communication styles", "Balancing needs"],
    description: "Every combination has potential when both partners bring openness and care.",
    dynamic: "A unique partnership shaped by how you choose to meet each other.",
    advice: "Communicate openly, honor your differences, and grow together.",
};

pub(crate) const PAIR_TABLE: [PairEntry; 45] = [
    PairEntry {
        low: 1,
        high: 1,
        base: 65,
        min: 55,
        max: 75,
        strengths: &["Shared ambition", "Mutual drive", "Bold decision-making"],
        challenges: &["Power struggles", "Stubbornness", "Competing egos"],
        description: "Two natural leaders who understand each other's need for independence, but must learn to share the spotlight.",
        dynamic: "A dynamic partnership that thrives when both take turns leading.",
        advice: "Celebrate each other's wins and decide together who leads which part of life.",
    },
    PairEntry {
        low: 1,
        high: 2,
        base: 72,
        min: 62,
        max: 82,
        strengths: &["Leader meets supporter", "Emotional balance", "Clear roles"],
        challenges: &["Overlooked feelings", "Dominance", "Sensitivity gaps"],
        description: "The pioneer and the peacemaker: one sets direction, the other brings warmth and tact.",
        dynamic: "Complementary energies that work when the 1 listens as much as it leads.",
        advice: "Make space for quiet conversations where the 2 sets the agenda.",
    },
    PairEntry {
        low: 1,
        high: 3,
        base: 88,
        min: 80,
        max: 95,
        strengths: &["Creative spark", "Playful energy", "Optimism"],
        challenges: &["Scattered focus", "Impatience", "Attention seeking"],
        description: "Initiative and imagination combine into a lively, inspiring bond.",
        dynamic: "An energetic partnership full of ideas, laughter, and new beginnings.",
        advice: "Pick one shared project at a time and see it through together.",
    },
    PairEntry {
        low: 1,
        high: 4,
        base: 60,
        min: 50,
        max: 70,
        strengths: &["Reliability", "Goal orientation", "Practical plans"],
        challenges: &["Rigidity", "Different tempos", "Control issues"],
        description: "Fast-moving ambition meets careful, steady structure.",
        dynamic: "A partnership of builder and trailblazer that needs patience on both sides.",
        advice: "Agree on timelines up front so speed and caution stop colliding.",
    },
    PairEntry {
        low: 1,
        high: 5,
        base: 85,
        min: 77,
        max: 93,
        strengths: &["Adventure", "Independence", "Excitement"],
        challenges: &["Restlessness", "Commitment fears", "Impulsiveness"],
        description: "Two free spirits who love novelty and rarely bore each other.",
        dynamic: "A thrilling, fast-paced bond fueled by shared adventures.",
        advice: "Build a few rituals that anchor you between adventures.",
    },
    PairEntry {
        low: 1,
        high: 6,
        base: 70,
        min: 60,
        max: 80,
        strengths: &["Protection", "Loyalty", "Devotion"],
        challenges: &["Possessiveness", "Different priorities", "Unspoken expectations"],
        description: "The independent 1 and the nurturing 6 can create a warm, secure home.",
        dynamic: "Care flows freely when the 1 values the 6's devotion.",
        advice: "Say thank you often; the 6 gives more than it asks for.",
    },
    PairEntry {
        low: 1,
        high: 7,
        base: 78,
        min: 68,
        max: 86,
        strengths: &["Intellectual respect", "Independence", "Depth"],
        challenges: &["Emotional distance", "Secrecy", "Different social needs"],
        description: "Action and reflection: the 1 charges ahead while the 7 seeks meaning.",
        dynamic: "A respectful bond of two independent minds.",
        advice: "Give the 7 solitude and the 1 momentum, then meet in the middle.",
    },
    PairEntry {
        low: 1,
        high: 8,
        base: 68,
        min: 58,
        max: 78,
        strengths: &["Ambition", "Success drive", "Strength"],
        challenges: &["Power struggles", "Workaholism", "Competition"],
        description: "Two strong wills with big goals who can build an empire or clash over control.",
        dynamic: "A power couple when goals align, a contest when they don't.",
        advice: "Define shared goals and keep score only against the world, not each other.",
    },
    PairEntry {
        low: 1,
        high: 9,
        base: 80,
        min: 72,
        max: 88,
        strengths: &["Vision", "Inspiration", "Generosity"],
        challenges: &["Self-focus versus service", "Idealism gaps", "Moodiness"],
        description: "Personal ambition meets humanitarian vision.",
        dynamic: "An inspiring partnership that can change its corner of the world.",
        advice: "Channel the 1's drive into the 9's causes.",
    },
    PairEntry {
        low: 2,
        high: 2,
        base: 82,
        min: 74,
        max: 90,
        strengths: &["Deep empathy", "Harmony", "Intuition"],
        challenges: &["Over-sensitivity", "Indecision", "Avoiding conflict"],
        description: "Two gentle souls who read each other intuitively.",
        dynamic: "A tender, peaceful bond built on emotional attunement.",
        advice: "Practice naming needs out loud instead of waiting to be sensed.",
    },
    PairEntry {
        low: 2,
        high: 3,
        base: 75,
        min: 65,
        max: 84,
        strengths: &["Warmth", "Creativity", "Emotional expression"],
        challenges: &["Superficiality", "Hurt feelings", "Inconsistent attention"],
        description: "The 2's sensitivity softens the 3's exuberance.",
        dynamic: "A sweet, expressive pairing that needs steady reassurance.",
        advice: "Let the 3 entertain and the 2 deepen; both roles matter.",
    },
    PairEntry {
        low: 2,
        high: 4,
        base: 88,
        min: 80,
        max: 95,
        strengths: &["Stability", "Loyalty", "Trust"],
        challenges: &["Routine", "Emotional reserve", "Resistance to change"],
        description: "Devotion meets dependability for a secure, lasting bond.",
        dynamic: "A steady partnership where both feel safe.",
        advice: "Schedule some spontaneity so comfort doesn't become a rut.",
    },
    PairEntry {
        low: 2,
        high: 5,
        base: 55,
        min: 45,
        max: 65,
        strengths: &["Excitement", "Growth", "Curiosity"],
        challenges: &["Instability", "Insecurity", "Different needs for freedom"],
        description: "The 2 seeks closeness while the 5 craves variety.",
        dynamic: "A stretching relationship that can teach both a lot.",
        advice: "Agree on how much freedom and closeness each of you needs.",
    },
    PairEntry {
        low: 2,
        high: 6,
        base: 92,
        min: 85,
        max: 98,
        strengths: &["Nurturing", "Devotion", "Domestic harmony"],
        challenges: &["Over-giving", "Martyrdom", "Smothering"],
        description: "Two caretakers who build a loving, harmonious home.",
        dynamic: "One of the most naturally affectionate combinations.",
        advice: "Take turns receiving care, not just giving it.",
    },
    PairEntry {
        low: 2,
        high: 7,
        base: 64,
        min: 54,
        max: 74,
        strengths: &["Intuition", "Spiritual depth", "Quiet understanding"],
        challenges: &["Emotional distance", "Loneliness", "Unspoken needs"],
        description: "Sensitive 2 and introspective 7 share a rich inner world.",
        dynamic: "A quiet bond that deepens slowly over time.",
        advice: "Let the 7 retreat without the 2 feeling abandoned.",
    },
    PairEntry {
        low: 2,
        high: 8,
        base: 86,
        min: 78,
        max: 93,
        strengths: &["Support", "Success", "Complementary strengths"],
        challenges: &["Imbalance of power", "Neglect", "Work-life friction"],
        description: "The 8's drive and the 2's diplomacy make an effective team.",
        dynamic: "A partnership where ambition is balanced by care.",
        advice: "Honor the 2's contributions as equal to the 8's achievements.",
    },
    PairEntry {
        low: 2,
        high: 9,
        base: 74,
        min: 64,
        max: 83,
        strengths: &["Compassion", "Idealism", "Kindness"],
        challenges: &["Self-sacrifice", "Emotional overwhelm", "Unrealistic expectations"],
        description: "Two compassionate hearts drawn to helping others.",
        dynamic: "A gentle, giving pairing with a shared sense of purpose.",
        advice: "Protect time for each other, not just for everyone else.",
    },
    PairEntry {
        low: 3,
        high: 3,
        base: 78,
        min: 68,
        max: 87,
        strengths: &["Fun", "Creativity", "Social flair"],
        challenges: &["Lack of focus", "Drama", "Avoiding depth"],
        description: "Two joyful communicators who never run out of things to say.",
        dynamic: "A lively, playful bond that lights up any room.",
        advice: "Make room for serious conversations as well as laughter.",
    },
    PairEntry {
        low: 3,
        high: 4,
        base: 52,
        min: 42,
        max: 62,
        strengths: &["Structure meets creativity", "Practical dreams", "Balance"],
        challenges: &["Clashing lifestyles", "Criticism", "Frustration"],
        description: "The free-flowing 3 and the methodical 4 see life very differently.",
        dynamic: "A challenging but grounding relationship.",
        advice: "Appreciate that the 4 gives the 3's ideas a foundation.",
    },
    PairEntry {
        low: 3,
        high: 5,
        base: 90,
        min: 82,
        max: 97,
        strengths: &["Adventure", "Humor", "Spontaneity"],
        challenges: &["Irresponsibility", "Restlessness", "Scattered energy"],
        description: "Two fun-loving spirits with endless curiosity.",
        dynamic: "An exciting, sociable bond full of travel and stories.",
        advice: "Share responsibilities so the fun stays sustainable.",
    },
    PairEntry {
        low: 3,
        high: 6,
        base: 87,
        min: 79,
        max: 94,
        strengths: &["Creativity", "Love of beauty", "Family warmth"],
        challenges: &["Worry", "Criticism", "Differing priorities"],
        description: "The expressive 3 brings joy to the devoted 6's home.",
        dynamic: "A warm, artistic pairing with a strong heart.",
        advice: "Let the 6 feel appreciated and the 3 feel free.",
    },
    PairEntry {
        low: 3,
        high: 7,
        base: 58,
        min: 48,
        max: 68,
        strengths: &["Intellectual curiosity", "Depth meets lightness", "Learning"],
        challenges: &["Emotional mismatch", "Distance", "Misunderstanding"],
        description: "Outgoing 3 and private 7 can fascinate or frustrate each other.",
        dynamic: "A thought-provoking bond that needs patience.",
        advice: "Respect the 7's need for quiet and the 3's need to share.",
    },
    PairEntry {
        low: 3,
        high: 8,
        base: 66,
        min: 56,
        max: 76,
        strengths: &["Ambition", "Charisma", "Success"],
        challenges: &["Materialism", "Control", "Different values"],
        description: "The charismatic 3 and the ambitious 8 can go far together.",
        dynamic: "A driven partnership balancing play and power.",
        advice: "Make sure success is measured in more than money.",
    },
    PairEntry {
        low: 3,
        high: 9,
        base: 89,
        min: 81,
        max: 96,
        strengths: &["Creativity", "Idealism", "Generosity"],
        challenges: &["Impracticality", "Scattered energy", "Over-commitment"],
        description: "Two expressive, big-hearted souls with artistic flair.",
        dynamic: "An inspiring pairing that brings beauty to the world.",
        advice: "Ground your dreams with a few practical plans.",
    },
    PairEntry {
        low: 4,
        high: 4,
        base: 76,
        min: 66,
        max: 85,
        strengths: &["Dependability", "Shared values", "Security"],
        challenges: &["Rigidity", "Boredom", "Resistance to change"],
        description: "Two builders creating something solid and lasting.",
        dynamic: "A stable, loyal bond built brick by brick.",
        advice: "Try something new together every season.",
    },
    PairEntry {
        low: 4,
        high: 5,
        base: 50,
        min: 40,
        max: 60,
        strengths: &["Growth through difference", "Balance", "Learning"],
        challenges: &["Freedom versus security", "Friction", "Impatience"],
        description: "The security-seeking 4 and freedom-loving 5 pull in opposite directions.",
        dynamic: "A challenging match that requires real compromise.",
        advice: "Define clear boundaries that protect both routine and freedom.",
    },
    PairEntry {
        low: 4,
        high: 6,
        base: 84,
        min: 76,
        max: 91,
        strengths: &["Family focus", "Responsibility", "Loyalty"],
        challenges: &["Over-seriousness", "Stubbornness", "Worry"],
        description: "Two dependable partners devoted to home and family.",
        dynamic: "A secure, caring partnership with strong foundations.",
        advice: "Leave room for play amid all the responsibility.",
    },
    PairEntry {
        low: 4,
        high: 7,
        base: 82,
        min: 74,
        max: 90,
        strengths: &["Intellectual respect", "Privacy", "Reliability"],
        challenges: &["Emotional reserve", "Isolation", "Criticism"],
        description: "The practical 4 and analytical 7 respect each other's minds.",
        dynamic: "A calm, thoughtful partnership of mutual respect.",
        advice: "Express affection openly; neither of you does it by default.",
    },
    PairEntry {
        low: 4,
        high: 8,
        base: 90,
        min: 83,
        max: 97,
        strengths: &["Ambition", "Discipline", "Material success"],
        challenges: &["Workaholism", "Control", "Neglecting romance"],
        description: "Two hard workers who can build lasting prosperity together.",
        dynamic: "A powerful, goal-oriented alliance.",
        advice: "Plan time for romance as carefully as you plan your goals.",
    },
    PairEntry {
        low: 4,
        high: 9,
        base: 57,
        min: 47,
        max: 67,
        strengths: &["Practical idealism", "Service", "Balance"],
        challenges: &["Different worldviews", "Judgment", "Frustration"],
        description: "The grounded 4 and the visionary 9 see the world through different lenses.",
        dynamic: "A relationship of contrasts that can complement each other.",
        advice: "Let the 4 ground the 9's vision and the 9 widen the 4's view.",
    },
    PairEntry {
        low: 5,
        high: 5,
        base: 70,
        min: 60,
        max: 80,
        strengths: &["Adventure", "Freedom", "Excitement"],
        challenges: &["Instability", "Lack of commitment", "Impulsiveness"],
        description: "Two adventurers who understand each other's need for change.",
        dynamic: "A thrilling, unpredictable partnership.",
        advice: "Commit to a few shared anchors amid all the change.",
    },
    PairEntry {
        low: 5,
        high: 6,
        base: 56,
        min: 46,
        max: 66,
        strengths: &["Growth", "Balance", "Learning"],
        challenges: &["Freedom versus duty", "Jealousy", "Different priorities"],
        description: "The free-spirited 5 and responsible 6 want different things from life.",
        dynamic: "A relationship that stretches both partners.",
        advice: "Find ways for freedom and family to coexist.",
    },
    PairEntry {
        low: 5,
        high: 7,
        base: 80,
        min: 72,
        max: 88,
        strengths: &["Curiosity", "Independence", "Intellectual spark"],
        challenges: &["Emotional distance", "Restlessness", "Detachment"],
        description: "Two independent explorers of ideas and experiences.",
        dynamic: "A stimulating bond with plenty of personal space.",
        advice: "Share discoveries so independence doesn't become distance.",
    },
    PairEntry {
        low: 5,
        high: 8,
        base: 67,
        min: 57,
        max: 77,
        strengths: &["Ambition", "Energy", "Resourcefulness"],
        challenges: &["Control versus freedom", "Risk-taking", "Conflict"],
        description: "The adventurous 5 and the driven 8 make a bold combination.",
        dynamic: "An energetic partnership with big ambitions.",
        advice: "Balance risk and control by deciding big moves together.",
    },
    PairEntry {
        low: 5,
        high: 9,
        base: 73,
        min: 63,
        max: 82,
        strengths: &["Worldliness", "Open-mindedness", "Adventure"],
        challenges: &["Restlessness", "Detachment", "Lack of grounding"],
        description: "Two open-minded souls who love to explore the world.",
        dynamic: "A broad-minded, adventurous bond.",
        advice: "Create a home base to return to after each adventure.",
    },
    PairEntry {
        low: 6,
        high: 6,
        base: 85,
        min: 77,
        max: 93,
        strengths: &["Devotion", "Family values", "Harmony"],
        challenges: &["Over-responsibility", "Perfectionism", "Smothering"],
        description: "Two nurturers who create a loving, beautiful home.",
        dynamic: "A deeply caring and committed partnership.",
        advice: "Remember to care for yourselves as well as each other.",
    },
    PairEntry {
        low: 6,
        high: 7,
        base: 53,
        min: 43,
        max: 63,
        strengths: &["Depth", "Care meets wisdom", "Loyalty"],
        challenges: &["Emotional mismatch", "Distance", "Unmet needs"],
        description: "The affectionate 6 and introspective 7 express love differently.",
        dynamic: "A relationship that requires understanding different love languages.",
        advice: "Learn each other's way of showing care.",
    },
    PairEntry {
        low: 6,
        high: 8,
        base: 77,
        min: 67,
        max: 86,
        strengths: &["Stability", "Provision", "Family focus"],
        challenges: &["Control", "Materialism", "Work-family tension"],
        description: "The nurturing 6 and providing 8 can build a secure family life.",
        dynamic: "A strong, protective partnership.",
        advice: "Balance ambition with time at home.",
    },
    PairEntry {
        low: 6,
        high: 9,
        base: 93,
        min: 86,
        max: 99,
        strengths: &["Compassion", "Idealism", "Service"],
        challenges: &["Self-sacrifice", "Over-giving", "Neglecting self"],
        description: "Two loving, service-minded souls united by compassion.",
        dynamic: "A beautiful, giving partnership with a shared mission.",
        advice: "Fill your own cups so you can keep giving.",
    },
    PairEntry {
        low: 7,
        high: 7,
        base: 74,
        min: 64,
        max: 83,
        strengths: &["Intellectual depth", "Spiritual connection", "Understanding"],
        challenges: &["Isolation", "Emotional distance", "Overthinking"],
        description: "Two deep thinkers who understand each other's need for solitude.",
        dynamic: "A profound, quiet bond of kindred minds.",
        advice: "Make a point of sharing feelings, not just thoughts.",
    },
    PairEntry {
        low: 7,
        high: 8,
        base: 55,
        min: 45,
        max: 65,
        strengths: &["Wisdom meets ambition", "Respect", "Focus"],
        challenges: &["Different values", "Distance", "Materialism versus spirituality"],
        description: "The spiritual 7 and material 8 value very different things.",
        dynamic: "A challenging pairing that can balance inner and outer success.",
        advice: "Respect that success means different things to each of you.",
    },
    PairEntry {
        low: 7,
        high: 9,
        base: 79,
        min: 70,
        max: 87,
        strengths: &["Spiritual depth", "Wisdom", "Idealism"],
        challenges: &["Detachment", "Unrealistic expectations", "Isolation"],
        description: "Two spiritual seekers drawn to life's deeper questions.",
        dynamic: "A meaningful, soulful connection.",
        advice: "Ground your shared ideals in everyday affection.",
    },
    PairEntry {
        low: 8,
        high: 8,
        base: 71,
        min: 61,
        max: 80,
        strengths: &["Ambition", "Power", "Success"],
        challenges: &["Power struggles", "Workaholism", "Competition"],
        description: "Two powerhouses capable of great achievement together.",
        dynamic: "A formidable partnership if egos are kept in check.",
        advice: "Be partners first and competitors never.",
    },
    PairEntry {
        low: 8,
        high: 9,
        base: 62,
        min: 52,
        max: 72,
        strengths: &["Success meets service", "Generosity", "Influence"],
        challenges: &["Materialism versus idealism", "Control", "Conflict"],
        description: "The ambitious 8 and the humanitarian 9 can do great good together.",
        dynamic: "A powerful pairing when ambition serves a larger purpose.",
        advice: "Align your resources with your shared values.",
    },
    PairEntry {
        low: 9,
        high: 9,
        base: 83,
        min: 75,
        max: 91,
        strengths: &["Compassion", "Idealism", "Understanding"],
        challenges: &["Emotional intensity", "Self-sacrifice", "Impracticality"],
        description: "Two compassionate idealists with big hearts and bigger dreams.",
        dynamic: "A deeply empathetic and inspiring bond.",
        advice: "Tend to practical matters so your ideals have room to grow.",
    },
];

/// One row of the symbol table, indexed by `number - 1`.
pub(crate) struct SymbolEntry {
    pub symbol: &'static str,
    pub element: Element,
    pub color: &'static str,
    pub planet: &'static str,
    pub meaning: &'static str,
}

pub(crate) const UNIVERSAL_SYMBOL: SymbolEntry = SymbolEntry {
    symbol: "✨",
    element: Element::Universal,
    color: "White",
    planet: "Cosmic",
    meaning: "Universal energy and infinite potential",
};

pub(crate) const SYMBOL_TABLE: [SymbolEntry; 9] = [
    // 1
    SymbolEntry {
        symbol: "☉",
        element: Element::Fire,
        color: "Red",
        planet: "Sun",
        meaning: "Leadership, independence, and new beginnings",
    },
    // 2
    SymbolEntry {
        symbol: "☽",
        element: Element::Water,
        color: "Orange",
        planet: "Moon",
        meaning: "Harmony, intuition, and partnership",
    },
    // 3
    SymbolEntry {
        symbol: "♃",
        element: Element::Fire,
        color: "Yellow",
        planet: "Jupiter",
        meaning: "Creativity, joy, and self-expression",
    },
    // 4
    SymbolEntry {
        symbol: "♅",
        element: Element::Earth,
        color: "Green",
        planet: "Uranus",
        meaning: "Stability, order, and hard work",
    },
    // 5
    SymbolEntry {
        symbol: "☿",
        element: Element::Air,
        color: "Blue",
        planet: "Mercury",
        meaning: "Freedom, curiosity, and change",
    },
    // 6
    SymbolEntry {
        symbol: "♀",
        element: Element::Earth,
        color: "Pink",
        planet: "Venus",
        meaning: "Love, responsibility, and nurturing",
    },
    // 7
    SymbolEntry {
        symbol: "♆",
        element: Element::Water,
        color: "Violet",
        planet: "Neptune",
        meaning: "Wisdom, introspection, and spirituality",
    },
    // 8
    SymbolEntry {
        symbol: "♄",
        element: Element::Earth,
        color: "Gold",
        planet: "Saturn",
        meaning: "Power, abundance, and achievement",
    },
    // 9
    SymbolEntry {
        symbol: "♂",
        element: Element::Fire,
        color: "Crimson",
        planet: "Mars",
        meaning: "Compassion, completion, and service",
    },
];
