//! The compiled-in lexicon source.
//!
//! This is the raw word list the speech dictionary is compiled from. It is content, not logic: entries are grouped by
//! theme, may repeat across groups, and are in no particular order. The compiler deduplicates and sorts them.
//!
//! ## Notes
//! - Every entry must be a lowercase ASCII word (`[a-z]+`). Contractions have no vocabulary record and are spelled
//!   without the apostrophe (`dont`, `cant`, `its`) or left out (`I'm`, `I'll`).
//! - The external word enumeration must list the *distinct* words of this table in ascending order. Adding a word here
//!   without adding it there is rejected by the downstream build.

/// Raw lexicon source, in authoring order.
pub const SPEECH_WORDS: &[&str] = &[
    // Most common words in US #1 songs.
    "i", "you", "love", "the", "me", "to", "we", "be",
    "on", "do", "go", "in", "and", "no", "so", "it",
    "is", "my", "your", "can", "for", "of", "are", "when",
    "girl", "one", "what", "man", "boy", "two", "like", "woman",
    "that", "will", "dont", "all", "up", "heart", "this", "baby",
    "with", "if", "cant", "too", "how", "have", "time", "want",
    "there", "night", "get", "down", "good", "out", "from", "your",
    "say", "just", "life", "its", "now", "know", "live", "got",
    "way", "take", "song", "give", "come", "bad", "make", "more",
    "over", "world", "kiss", "back", "black", "eyes", "without", "stop",
    "together", "away", "little", "rock", "about", "hold", "girls", "again",
    "tonight", "lady", "hey", "loves", "lets", "fire", "gonna", "everything",
    "keep", "angel", "shake", "theme",
    // Vocabulary.
    "abstract", "accident", "acid", "acquired", "action", "activated", "advanced", "aerial",
    "again", "against", "alive", "allowed", "alone", "alpha", "altered", "amazing",
    "analyze", "angry", "animal", "answer", "anxiety", "any", "anymore", "arcade",
    "are", "arrest", "artificial", "attack", "based", "basic", "bass", "battery",
    "beat", "beautiful", "beta", "better", "bike", "billion", "binary", "bird",
    "bite", "blame", "block", "blue", "bodies", "body", "bored", "boss",
    "box", "brain", "brain", "brakes", "break", "broadcast", "broke", "broken",
    "brother", "brutal", "bubble", "buddy", "bugs", "bullet", "burn", "bye",
    "cable", "cake", "called", "calls", "cancelled", "candy", "carbon", "cash",
    "catch", "celebrate", "celebration", "centuries", "champion", "chaos", "cheap", "check",
    "checked", "citizen", "clear", "click", "clone", "club", "combat", "computer",
    "connect", "console", "continue", "control", "cool", "crash", "crew", "damage",
    "danger", "darkness", "data", "day", "defects", "delete", "denied", "device",
    "dirt", "done", "dont", "doubt", "download", "dragon", "free", "gadgets",
    "green", "human", "hands", "it", "maker", "music", "noise", "point",
    "robot", "roll", "shake", "sister", "television", "tell", "tension", "terminal",
    "terror", "test", "the", "theory", "throw", "thumbs", "ticket", "tiger",
    "times", "tissue", "today", "together", "tomorrow", "tonight", "touch", "toxic",
    "track", "trash", "turbo", "turn", "twist", "undefined", "unique", "united",
    "update", "upload", "ur", "urban", "vice", "victory", "vintage", "virtual",
    "voice", "volume", "wait", "waiting", "wake", "wanna", "want", "wanted",
    "warning", "watch", "wave", "we", "week", "weekend", "weird", "welcome",
    "when", "wicked", "will", "wind", "winner", "wish", "without", "yeah",
    "year", "yes", "your", "zone",
    // Colors.
    "black", "white", "green", "blue", "red", "yellow",
    // Ordinals and numbers.
    "first", "last", "zero", "one", "two", "three", "four", "five",
    "six", "seven", "eight", "nine", "ten",
];
