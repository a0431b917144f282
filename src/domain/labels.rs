//! Human-readable date labels

use chrono::NaiveDate;

/// `June 3, 2025`
pub fn date_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Tuesday, June 3, 2025`
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `Today`, `Yesterday`, or the plain [`date_label`]
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(date) {
        "Yesterday".to_string()
    } else {
        date_label(date)
    }
}
