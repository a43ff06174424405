// File: src/presets.rs
use crate::core::types::Locale;

/// A ready-made query offered to new users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleQuery {
    pub pattern: &'static str,
    pub description_en: &'static str,
    pub description_he: &'static str,
}

impl ExampleQuery {
    pub fn description(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.description_en,
            Locale::He => self.description_he,
        }
    }
}

pub const EXAMPLE_QUERIES: [ExampleQuery; 5] = [
    ExampleQuery {
        pattern: "astic$",
        description_en: "Words ending with 'astic'",
        description_he: "מילים שמסתיימות ב-'astic'",
    },
    ExampleQuery {
        pattern: "^(.)(.).?\\2\\1$",
        description_en: "Four and five letter palindromes",
        description_he: "פלינדרומים בני ארבע וחמש אותיות",
    },
    ExampleQuery {
        pattern: "^[^aeiou]+$",
        description_en: "Words without vowels",
        description_he: "מילים ללא תנועות",
    },
    ExampleQuery {
        pattern: "(.)\\1\\1",
        description_en: "The same letter three times in a row",
        description_he: "אותה אות שלוש פעמים ברצף",
    },
    ExampleQuery {
        pattern: "^.{20,}$",
        description_en: "Words with at least 20 letters",
        description_he: "מילים בנות 20 אותיות לפחות",
    },
];
