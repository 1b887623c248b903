use serde::Deserialize;

/// One slot in a day's lesson list.
///
/// The backend marks a free slot with an `empty` field instead of omitting
/// the entry, so the two shapes are told apart by which fields are present.
/// The marker's value carries no meaning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Lesson {
    Empty {
        #[allow(dead_code)]
        empty: serde_json::Value,
    },
    Real {
        name: String,
        lesson_type: Option<String>,
        auditorium: Option<String>,
    },
}

/// The lessons of one calendar day, Monday through Saturday. An empty list
/// means the day has no slots at all, which is different from a day filled
/// with [`Lesson::Empty`] placeholders.
pub type DaySlot = Vec<Lesson>;

#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// Why the caller asked for a given week, resolved once from the query
/// parameters at the top of request handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekIntent {
    Explicit(i64),
    Current,
    Next,
    None,
}

impl WeekIntent {
    /// The submit buttons are presence-only flags; their values are never
    /// read. A request carrying both `current` and `next` is undefined
    /// upstream, `current` wins here.
    pub fn from_query(week: Option<i64>, current: bool, next: bool) -> Self {
        if current {
            WeekIntent::Current
        } else if next {
            WeekIntent::Next
        } else if let Some(week) = week {
            WeekIntent::Explicit(week)
        } else {
            WeekIntent::None
        }
    }
}

/// Coarse client classification. Affects only the layout, never the data
/// fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.contains("iPhone") || ua.contains("Android") => DeviceClass::Mobile,
            _ => DeviceClass::Desktop,
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}
