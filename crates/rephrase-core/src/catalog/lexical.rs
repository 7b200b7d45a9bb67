/// Word-keyed substitutions. Alternatives are ranked: index 0 is the most
/// conservative choice and is what formal register picks first.
pub(super) static SYNONYMS: &[(&str, &[&str])] = &[
    ("quick", &["fast", "rapid", "swift", "speedy"]),
    ("brown", &["tan", "chestnut", "auburn", "russet"]),
    ("jumps", &["leaps", "bounds", "springs", "hops"]),
    ("lazy", &["idle", "sluggish", "inactive", "lethargic"]),
    ("dog", &["canine", "hound", "pup"]),
    ("nice", &["pleasant", "lovely", "delightful", "wonderful"]),
    ("good", &["excellent", "great", "fine", "wonderful"]),
    ("bad", &["poor", "unpleasant", "awful", "dreadful"]),
    ("big", &["large", "huge", "enormous", "massive"]),
    ("small", &["little", "tiny", "compact", "petite"]),
    ("happy", &["glad", "cheerful", "joyful", "delighted"]),
    ("sad", &["unhappy", "sorrowful", "melancholy", "dejected"]),
    ("amazing", &["remarkable", "incredible", "fantastic", "wonderful"]),
    ("beautiful", &["lovely", "attractive", "gorgeous", "stunning"]),
    ("important", &["significant", "crucial", "vital", "essential"]),
    ("create", &["develop", "build", "make", "construct"]),
    ("help", &["assist", "support", "aid", "guide"]),
    ("think", &["believe", "consider", "suppose", "imagine"]),
    ("need", &["require", "want", "demand"]),
    ("schedule", &["arrange", "plan", "organize", "set up"]),
    ("discuss", &["review", "examine", "talk about", "consider"]),
    ("project", &["task", "assignment", "undertaking", "endeavor"]),
    ("meeting", &["session", "conference", "gathering", "discussion"]),
    ("weather", &["conditions", "climate", "atmosphere"]),
    ("today", &["this day", "at present", "right now"]),
    ("movie", &["film", "picture", "flick"]),
    ("absolutely", &["completely", "totally", "entirely", "fully"]),
    ("people", &["individuals", "persons", "folks"]),
    ("scared", &["afraid", "frightened", "terrified", "alarmed"]),
    ("like", &["enjoy", "appreciate", "love", "fancy"]),
    ("coffee", &["espresso", "java", "brew"]),
    ("drink", &["have", "sip", "consume"]),
    ("daily", &["every day", "each day", "day after day"]),
    ("cancel", &["call off", "scrap", "drop"]),
    ("picnic", &["outdoor meal", "outing", "cookout"]),
    ("start", &["begin", "commence", "kick off"]),
    ("end", &["conclude", "finish", "wrap up"]),
    ("buy", &["purchase", "acquire", "pick up"]),
    ("show", &["demonstrate", "display", "reveal"]),
    ("use", &["employ", "utilize", "apply"]),
    ("get", &["obtain", "receive", "grab"]),
    ("fast", &["rapid", "quick", "speedy"]),
    ("hard", &["difficult", "challenging", "tough"]),
    ("easy", &["simple", "straightforward", "effortless"]),
    ("problem", &["issue", "difficulty", "challenge"]),
    ("answer", &["response", "reply", "solution"]),
    ("try", &["attempt", "endeavor", "strive"]),
    ("friend", &["companion", "acquaintance", "pal"]),
    ("house", &["home", "residence", "dwelling"]),
    ("car", &["vehicle", "automobile", "ride"]),
    ("job", &["position", "role", "occupation", "gig"]),
    ("money", &["funds", "finances", "cash"]),
    ("smart", &["intelligent", "clever", "bright"]),
    ("tired", &["fatigued", "weary", "exhausted", "worn out"]),
    ("angry", &["annoyed", "irritated", "furious"]),
    ("maybe", &["perhaps", "possibly", "conceivably"]),
    ("very", &["extremely", "highly", "really", "truly"]),
    ("really", &["truly", "genuinely", "very"]),
    ("often", &["frequently", "regularly", "repeatedly"]),
    ("tomorrow", &["the following day", "the next day"]),
    ("rains", &["pours", "showers", "drizzles"]),
    ("hello", &["greetings", "hi", "hey"]),
];

/// Adjectives recognized by the intensity-modulation strategy.
pub(super) static ADJECTIVES: &[&str] = &[
    "happy", "sad", "good", "bad", "nice", "big", "small", "important", "beautiful", "amazing",
    "quick", "lazy", "hard", "easy", "difficult", "simple", "tired", "angry", "scared", "smart",
    "useful", "interesting", "expensive", "cheap", "late", "early", "cold", "hot", "warm",
    "busy", "ready", "clear", "strong", "weak", "new", "old", "long", "short", "large",
    "helpful", "careful", "successful", "popular", "complex", "challenging", "effective",
];
