use chrono::{Datelike, NaiveDate, TimeZone};

use crate::models::{DaySlot, DeviceClass, Lesson};
use crate::week;

pub const DAY_NAMES: [&str; 6] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
];

/// Genitive case, as the dates read in the caption.
pub const MONTH_NAMES: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

pub const SELECT_GROUP_PROMPT: &str = "Выберите группу в списке";

const ASSEMBLY_HALL: &str = "Актовый зал";
const DAYS_PER_WEEK: usize = 6;

/// One rendered cell of the schedule table: a day header plus its lessons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEntry<'a> {
    pub day_name: &'static str,
    pub lessons: &'a [Lesson],
}

/// Groups day-slots into table rows: one day per row on mobile, two per
/// row on desktop. Only the first six slots are consumed; an odd count
/// leaves a trailing single-day row.
pub fn rows(days: &[DaySlot], device: DeviceClass) -> Vec<Vec<DayEntry<'_>>> {
    let per_row = match device {
        DeviceClass::Mobile => 1,
        DeviceClass::Desktop => 2,
    };
    let entries: Vec<DayEntry<'_>> = days
        .iter()
        .take(DAYS_PER_WEEK)
        .enumerate()
        .map(|(index, lessons)| DayEntry {
            day_name: DAY_NAMES[index],
            lessons,
        })
        .collect();
    entries.chunks(per_row).map(|chunk| chunk.to_vec()).collect()
}

/// One line of a day cell: `"3. Физика лекция, аудитория 101"`. The
/// assembly hall keeps its own label instead of the room prefix.
pub fn format_lesson(index: usize, lesson: &Lesson) -> String {
    match lesson {
        Lesson::Empty { .. } => format!("{}. Пусто", index + 1),
        Lesson::Real {
            name,
            lesson_type,
            auditorium,
        } => {
            let mut line = format!("{}. {}", index + 1, name);
            if let Some(kind) = lesson_type {
                line.push(' ');
                line.push_str(&kind.to_lowercase());
            }
            if let Some(room) = auditorium {
                if room == ASSEMBLY_HALL {
                    line.push_str(", ");
                } else {
                    line.push_str(", аудитория ");
                }
                line.push_str(&room.to_lowercase());
            }
            line
        }
    }
}

pub fn date_caption(week: i64, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "Неделя {}, с {} {} по {} {}",
        week,
        start.day(),
        MONTH_NAMES[start.month0() as usize],
        end.day(),
        MONTH_NAMES[end.month0() as usize],
    )
}

/// Renders the schedule fragment for a fetched week: either the "no data"
/// message when all six day-slots are empty, or the date-range caption
/// followed by the laid-out table.
pub fn render_schedule<Tz: TimeZone>(
    tz: &Tz,
    days: &[DaySlot],
    week: i64,
    epoch_ms: i64,
    device: DeviceClass,
) -> String {
    let total: usize = days.iter().take(DAYS_PER_WEEK).map(Vec::len).sum();
    if total == 0 {
        return format!("Нет данных на неделю {week}");
    }

    let Some((start, end)) = week::week_dates(tz, epoch_ms, week) else {
        // A week this far out of range cannot have real data behind it.
        return format!("Нет данных на неделю {week}");
    };

    let mut html = date_caption(week, start, end);
    html.push_str("<table>");
    for row in rows(days, device) {
        html.push_str("<tr>");
        for entry in &row {
            html.push_str(&render_day(entry));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

fn render_day(entry: &DayEntry<'_>) -> String {
    let mut cell = String::from("<td valign=\"top\" width=\"400\">");
    cell.push_str(entry.day_name);
    cell.push_str("<br />");
    if entry.lessons.is_empty() {
        cell.push_str("Пусто");
    } else {
        for (index, lesson) in entry.lessons.iter().enumerate() {
            cell.push_str(&format_lesson(index, lesson));
            cell.push_str("<br />");
        }
    }
    cell.push_str("</td>");
    cell
}
