use tracing::warn;
use ukrstem::Language;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    pub language: Language,
    pub max_batch: usize,
}

fn default_addr() -> String {
    "0.0.0.0:8080".into()
}

fn default_max_batch() -> usize {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            language: Language::default(),
            max_batch: default_max_batch(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Читає налаштування через довільне джерело змінних (для тестів)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let addr = lookup("UKRSTEM_ADDR").unwrap_or_else(default_addr);
        let max_batch = lookup("UKRSTEM_MAX_BATCH")
            .and_then(|raw| match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    warn!(
                        "Некоректне UKRSTEM_MAX_BATCH={:?}, використовується {}",
                        raw,
                        default_max_batch()
                    );
                    None
                }
            })
            .unwrap_or_else(default_max_batch);

        let language = match lookup("UKRSTEM_LANG") {
            Some(tag) => tag.parse().unwrap_or_else(|e| {
                warn!("{}, використовується українська", e);
                Language::default()
            }),
            None => Language::default(),
        };

        Self { addr, language, max_batch }
    }
}
