#![allow(dead_code)]

use rusqlite::Connection;
use std::path::Path;
use tanakh_search::ALL_BOOKS;
use tempfile::TempDir;

/// בְּרֵאשִׁ֖ית בָּרָ֣א אֱלֹהִ֑ים אֵ֥ת הַשָּׁמַ֖יִם וְאֵ֥ת הָאָֽרֶץ׃
pub const GENESIS_1_1: &str = "\u{05D1}\u{05BC}\u{05B0}\u{05E8}\u{05B5}\u{05D0}\
\u{05E9}\u{05C1}\u{05B4}\u{0596}\u{05D9}\u{05EA} \
\u{05D1}\u{05BC}\u{05B8}\u{05E8}\u{05B8}\u{05A3}\u{05D0} \
\u{05D0}\u{05B1}\u{05DC}\u{05B9}\u{05D4}\u{05B4}\u{0591}\u{05D9}\u{05DD} \
\u{05D0}\u{05B5}\u{05A5}\u{05EA} \
\u{05D4}\u{05B7}\u{05E9}\u{05BC}\u{05C1}\u{05B8}\
\u{05DE}\u{05B7}\u{0596}\u{05D9}\u{05B4}\u{05DD} \
\u{05D5}\u{05B0}\u{05D0}\u{05B5}\u{05A5}\u{05EA} \
\u{05D4}\u{05B8}\u{05D0}\u{05B8}\u{05BD}\u{05E8}\u{05B6}\u{05E5}\u{05C3}";

pub const GENESIS_1_1_EN: &str = "When God began to create heaven and earth";

pub const EXODUS_1_1: &str = "ואלה שמות בני ישראל";
pub const EXODUS_1_1_EN: &str = "These are the names of the sons of Israel";

pub const RUTH_1_1: &str = "ויהי בימי שפט השפטים";
pub const RUTH_1_1_EN: &str = "In the days when the chieftains ruled";

/// (book, chapter, verse, hebrew, english), 1-based.
pub fn fixture_verses() -> Vec<(&'static str, usize, usize, &'static str, &'static str)> {
    vec![
        ("Genesis", 1, 1, GENESIS_1_1, GENESIS_1_1_EN),
        ("Genesis", 2, 1, "ויכלו", "The heaven and the earth were finished"),
        ("Exodus", 1, 1, EXODUS_1_1, EXODUS_1_1_EN),
        ("Ruth", 1, 1, RUTH_1_1, RUTH_1_1_EN),
    ]
}

fn chapters_for(book: &str, english: bool) -> Vec<Vec<String>> {
    let mut chapters: Vec<Vec<String>> = Vec::new();
    for (b, chapter, verse, hebrew, en) in fixture_verses() {
        if b != book {
            continue;
        }
        if chapters.len() < chapter {
            chapters.resize_with(chapter, Vec::new);
        }
        let verses = &mut chapters[chapter - 1];
        if verses.len() < verse {
            verses.resize(verse, String::new());
        }
        verses[verse - 1] = if english { en } else { hebrew }.to_string();
    }
    chapters
}

/// JSON corpus with every canonical book present; books without fixtures are empty.
pub fn json_corpus_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for language in ["hebrew", "english"] {
        std::fs::create_dir_all(dir.path().join(language)).unwrap();
    }
    for book in ALL_BOOKS {
        let hebrew = serde_json::json!({ "title": book, "text": chapters_for(book, false) });
        let english = serde_json::json!({ "title": book, "text": chapters_for(book, true) });
        write_json(&dir.path().join("hebrew").join(format!("{}.json", book)), &hebrew);
        write_json(&dir.path().join("english").join(format!("{}.json", book)), &english);
    }
    dir
}

/// JSON corpus where every canonical book opens with "ואבי".
pub fn every_book_corpus_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for language in ["hebrew", "english"] {
        std::fs::create_dir_all(dir.path().join(language)).unwrap();
    }
    for book in ALL_BOOKS {
        let hebrew = serde_json::json!({ "title": book, "text": [["ואבי"]] });
        let english = serde_json::json!({ "title": book, "text": [[format!("{} opens", book)]] });
        write_json(&dir.path().join("hebrew").join(format!("{}.json", book)), &hebrew);
        write_json(&dir.path().join("english").join(format!("{}.json", book)), &english);
    }
    dir
}

fn write_json(path: &Path, value: &serde_json::Value) {
    std::fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
}

/// corpus.db holding the fixture verses.
pub fn sqlite_corpus_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let conn = Connection::open(dir.path().join("corpus.db")).unwrap();
    conn.execute_batch(tanakh_search::db::SCHEMA).unwrap();
    for (book, chapter, verse, hebrew, english) in fixture_verses() {
        conn.execute(
            "INSERT INTO verses (book, chapter, verse, hebrew, english)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![book, chapter as i64, verse as i64, hebrew, english],
        )
        .unwrap();
    }
    dir
}

pub fn words(verse: &str) -> Vec<&str> {
    verse.split(' ').collect()
}

pub fn bold(text: &str) -> String {
    format!(
        "{}{}{}",
        tanakh_search::highlight::MATCH_OPEN,
        text,
        tanakh_search::highlight::MATCH_CLOSE
    )
}

/// Percent-encode a query string value.
pub fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}
