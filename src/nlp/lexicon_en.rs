//! Built-in English lexicon data
//!
//! A compact list of base forms and irregular inflections. Large
//! vocabularies should be loaded from a lexicon file instead.

pub(crate) const VERBS: &[&str] = &[
    "accept", "achieve", "add", "agree", "allow", "analyze", "answer", "appear", "apply", "argue",
    "arrive", "ask", "be", "become", "begin", "believe", "break", "bring", "build", "buy", "call",
    "carry", "cause", "change", "check", "choose", "claim", "close", "come", "compare", "compute",
    "consider", "contain", "continue", "cost", "create", "cut", "deal", "decide", "define",
    "deliver", "describe", "design", "detect", "develop", "die", "do", "draw", "drive", "eat",
    "enable", "enjoy", "expect", "explain", "extract", "fail", "fall", "feel", "fight", "find",
    "finish", "fix", "fly", "follow", "forget", "get", "give", "go", "grow", "happen", "have",
    "hear", "help", "hold", "hope", "improve", "include", "increase", "indicate", "involve",
    "join", "jump", "keep", "kill", "know", "lead", "learn", "leave", "let", "lie", "like",
    "listen", "live", "look", "lose", "love", "make", "manage", "mean", "measure", "meet", "move",
    "need", "note", "offer", "open", "order", "own", "pay", "perform", "pick", "plan", "play",
    "prefer", "prepare", "present", "produce", "provide", "publish", "pull", "push", "put",
    "rank", "reach", "read", "receive", "reduce", "relate", "release", "remain", "remember",
    "remove", "report", "represent", "require", "return", "run", "save", "say", "score", "see",
    "seem", "sell", "send", "serve", "set", "shop", "show", "sing", "sit", "sleep", "speak",
    "spend", "stand", "start", "stay", "stop", "study", "suggest", "support", "take", "talk",
    "teach", "tell", "tend", "test", "think", "train", "travel", "try", "turn", "understand",
    "use", "visit", "wait", "walk", "want", "watch", "win", "work", "write",
];

pub(crate) const NOUNS: &[&str] = &[
    "algorithm", "analysis", "animal", "answer", "area", "article", "bird", "body", "book",
    "box", "boy", "building", "bus", "business", "car", "case", "cat", "center", "chance",
    "change", "child", "church", "city", "class", "company", "computer", "corpus", "country",
    "customer", "data", "dataset", "day", "design", "document", "dog", "door", "edge", "effect",
    "end", "engine", "example", "eye", "face", "fact", "family", "father", "feature", "field",
    "file", "fish", "foot", "friend", "game", "girl", "glass", "goose", "government", "graph",
    "group", "hand", "head", "health", "history", "home", "hour", "house", "idea", "index",
    "information", "issue", "job", "keyword", "kid", "knife", "knowledge", "language", "law",
    "leaf", "learning", "lemma", "level", "life", "line", "list", "man", "market", "matrix",
    "meeting", "member", "memory", "method", "minute", "model", "moment", "money", "month",
    "morning", "mother", "mouse", "music", "name", "nation", "network", "news", "night", "node",
    "number", "office", "order", "paper", "parent", "part", "party", "people", "percentile",
    "person", "phrase", "place", "plan", "point", "policy", "power", "price", "problem",
    "process", "product", "program", "programming", "project", "question", "rank", "ranking",
    "reason", "report", "research", "result", "review", "right", "room", "rule", "safety",
    "school", "score", "sentence", "service", "side", "software", "state", "story", "student",
    "study", "system", "table", "teacher", "team", "term", "test", "text", "thing", "time",
    "tool", "tooth", "topic", "town", "tree", "type", "user", "value", "vertex", "view", "war",
    "water", "way", "week", "wife", "woman", "word", "work", "world", "year",
];

pub(crate) const ADJECTIVES: &[&str] = &[
    "able", "bad", "big", "black", "blue", "bright", "busy", "cheap", "clean", "clear", "close",
    "cold", "common", "dark", "deep", "different", "early", "easy", "far", "fast", "few", "fine",
    "free", "fresh", "full", "good", "great", "green", "happy", "hard", "heavy", "high", "hot",
    "huge", "important", "large", "late", "light", "little", "long", "loud", "low", "many",
    "much", "narrow", "near", "new", "nice", "old", "poor", "quick", "quiet", "rare", "real",
    "red", "rich", "right", "safe", "sharp", "short", "simple", "slow", "small", "smart", "soft",
    "strong", "sweet", "tall", "thin", "warm", "weak", "white", "wide", "wise", "young",
];

pub(crate) const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "away", "back", "early", "easily", "ever",
    "far", "fast", "hard", "here", "late", "long", "never", "often", "quickly", "rather",
    "really", "slowly", "soon", "still", "then", "there", "together", "well",
];

/// Irregular verb forms: (inflected, base)
pub(crate) const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("are", "be"), ("is", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("became", "become"), ("began", "begin"), ("begun", "begin"),
    ("broke", "break"), ("broken", "break"), ("brought", "bring"), ("built", "build"),
    ("bought", "buy"), ("chose", "choose"), ("chosen", "choose"), ("came", "come"),
    ("dealt", "deal"), ("did", "do"), ("does", "do"), ("done", "do"), ("drew", "draw"),
    ("drawn", "draw"), ("drove", "drive"), ("driven", "drive"), ("ate", "eat"), ("eaten", "eat"),
    ("fell", "fall"), ("fallen", "fall"), ("felt", "feel"), ("fought", "fight"),
    ("found", "find"), ("flew", "fly"), ("flown", "fly"), ("forgot", "forget"),
    ("forgotten", "forget"), ("got", "get"), ("gotten", "get"), ("gave", "give"),
    ("given", "give"), ("went", "go"), ("gone", "go"), ("goes", "go"), ("grew", "grow"),
    ("grown", "grow"), ("had", "have"), ("has", "have"), ("heard", "hear"), ("held", "hold"),
    ("kept", "keep"), ("knew", "know"), ("known", "know"), ("led", "lead"), ("left", "leave"),
    ("lay", "lie"), ("lain", "lie"), ("lying", "lie"), ("lost", "lose"), ("made", "make"),
    ("meant", "mean"), ("met", "meet"), ("paid", "pay"), ("ran", "run"), ("said", "say"),
    ("saw", "see"), ("seen", "see"), ("sold", "sell"), ("sent", "send"), ("sang", "sing"),
    ("sung", "sing"), ("sat", "sit"), ("slept", "sleep"), ("spoke", "speak"),
    ("spoken", "speak"), ("spent", "spend"), ("stood", "stand"), ("took", "take"),
    ("taken", "take"), ("taught", "teach"), ("told", "tell"), ("thought", "think"),
    ("understood", "understand"), ("won", "win"), ("wrote", "write"), ("written", "write"),
    ("dying", "die"),
];

/// Irregular plural nouns: (inflected, base)
pub(crate) const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("analyses", "analysis"), ("children", "child"), ("corpora", "corpus"), ("feet", "foot"),
    ("geese", "goose"), ("indices", "index"), ("knives", "knife"), ("leaves", "leaf"),
    ("lives", "life"), ("matrices", "matrix"), ("men", "man"), ("mice", "mouse"),
    ("teeth", "tooth"), ("vertices", "vertex"), ("wives", "wife"), ("women", "woman"),
];

/// Irregular comparatives and superlatives: (inflected, base)
pub(crate) const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("farther", "far"), ("farthest", "far"), ("further", "far"), ("furthest", "far"),
    ("less", "little"), ("least", "little"), ("more", "much"), ("most", "much"),
];

/// Irregular adverb forms: (inflected, base)
pub(crate) const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "well"), ("best", "well"), ("harder", "hard"), ("hardest", "hard"),
    ("faster", "fast"), ("fastest", "fast"), ("sooner", "soon"), ("soonest", "soon"),
];
