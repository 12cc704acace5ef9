//! Стемер для українських і російських слів без словника.
//!
//! Слово нормалізується, ділиться після першої голосної на префікс і область RV,
//! а потім з RV у чотири кроки знімаються суфікси за впорядкованими таблицями.
//!
//! ```
//! use ukrstem::{stem_word, Language, Stemmer};
//!
//! assert_eq!(stem_word("книга"), "книг");
//! assert_eq!(Stemmer::new(Language::Russian).stem("программистом"), "программист");
//! ```

pub mod suffix;
pub mod tables;
pub mod normalizer;
pub mod region;
pub mod language;
pub mod stemmer;
pub mod word_list;

pub use language::{Language, LanguageError};
pub use normalizer::normalize;
pub use region::split;
pub use stemmer::{reduce, stem_word, Stemmer};
pub use tables::{LanguageTable, RUSSIAN, UKRAINIAN};
pub use word_list::{CheckReport, Mismatch, WordListError, WordPair};
