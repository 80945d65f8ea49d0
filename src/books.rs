//! Canonical book list and reference formatting

/// Every searchable book, in display order: Torah, Prophets, Writings.
pub const ALL_BOOKS: [&str; 39] = [
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy",

    "Amos", "Ezekiel", "Habakkuk", "Haggai", "Hosea", "I Kings", "I Samuel",
    "II Kings", "II Samuel", "Isaiah", "Jeremiah", "Joel", "Jonah", "Joshua",
    "Judges", "Malachi", "Micah", "Nahum", "Obadiah", "Zechariah", "Zephaniah",

    "Daniel", "Ecclesiastes", "Esther", "Ezra", "I Chronicles", "II Chronicles",
    "Job", "Lamentations", "Nehemiah", "Proverbs", "Psalms", "Ruth",
    "Song of Songs",
];

pub const PERMALINK_HOST: &str = "www.sefaria.org";

pub fn is_canonical(book: &str) -> bool {
    ALL_BOOKS.contains(&book)
}

/// "Genesis 1:1" style reference. Chapter and verse are 1-based.
pub fn title(book: &str, chapter: usize, verse: usize) -> String {
    format!("{} {}:{}", book, chapter, verse)
}

/// Bilingual Sefaria link for a verse. The book name is used verbatim, spaces included.
pub fn permalink(book: &str, chapter: usize, verse: usize) -> String {
    format!("https://{}/{}.{}.{}?lang=bi", PERMALINK_HOST, book, chapter, verse)
}
