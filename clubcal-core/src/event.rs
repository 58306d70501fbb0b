//! Event records read from the events file.

/// One scheduled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Day key as written in the file (`YYYY-MM-DD`)
    pub date: String,
    /// Start time; None for all-day events
    pub time: Option<String>,
    pub title: String,
    /// Category tag exactly as written in the file
    pub tag: String,
    pub category: Category,
}

/// Events whose date equals `key`, in list order.
pub fn events_on<'a>(events: &'a [Event], key: &str) -> impl Iterator<Item = &'a Event> {
    events.iter().filter(move |event| event.date == key)
}

impl Event {
    /// Display label: "18:00 - Game Night", or just the title when untimed.
    pub fn label(&self) -> String {
        match &self.time {
            Some(time) => format!("{} - {}", time, self.title),
            None => self.title.clone(),
        }
    }
}

/// Event category, read from the fourth field of a line.
///
/// Both the French tags used by the club's file and their English names are
/// accepted. Anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Games,
    CardGame,
    TabletopRpg,
    Special,
    Other(String),
}

impl Category {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "jeux" | "games" => Category::Games,
            "magic" | "cardgame" => Category::CardGame,
            "jdr" | "tabletop-rpg" => Category::TabletopRpg,
            "special" => Category::Special,
            other => Category::Other(other.to_string()),
        }
    }

    /// Canonical tag, used for icon file names.
    pub fn tag(&self) -> &str {
        match self {
            Category::Games => "jeux",
            Category::CardGame => "magic",
            Category::TabletopRpg => "jdr",
            Category::Special => "special",
            Category::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    /// Terminal stand-in for the category icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Games => "🎲",
            Category::CardGame => "🃏",
            Category::TabletopRpg => "🐉",
            Category::Special => "⭐",
            Category::Other(_) => "•",
        }
    }
}
