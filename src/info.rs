use crate::carpet::Carpet;
use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

/// The document information dictionary written alongside a carpet
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub title: String,
    pub subject: String,
}

impl Info {
    /// Describe a carpet by its type and bold cell width
    pub fn for_carpet(carpet: &Carpet) -> Info {
        Info {
            title: format!("Carpet type {}", carpet.type_value),
            subject: format!(
                "{}mm grid with a bold line every 10 cells",
                carpet.spec.bold_width
            ),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let mut info = writer.document_info(refs.gen(RefType::Info));
        info.title(TextStr(&self.title));
        info.subject(TextStr(&self.subject));
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(pdf_date(&Local::now()));
    }
}

/// Converts a timestamp into a PDF date, keeping its UTC offset
fn pdf_date<Tz: TimeZone>(at: &DateTime<Tz>) -> Date {
    let offset_seconds = at.offset().fix().local_minus_utc();
    let offset_hours = offset_seconds / 3600;
    let offset_minutes = (offset_seconds % 3600 / 60).abs();

    Date::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}
