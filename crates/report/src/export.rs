use std::io::{self, Write};

use projection::MonthRecord;

use crate::format::{format_count, format_usd, format_whole, format_year_month};

pub const EXPORT_CSV_HEADER: &str = "Month,Active Buyers,Monthly Meetings,New Deals,\
Active Recurring Deals,Meeting Revenue,Commission Revenue,Total Revenue\n";

pub struct ProjectionCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> ProjectionCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(EXPORT_CSV_HEADER.as_bytes())
    }

    pub fn write_months(&mut self, months: &[MonthRecord]) -> io::Result<()> {
        for month in months {
            let fields = [
                format_year_month(month.date),
                format_whole(month.active_buyers),
                format_count(month.monthly_meetings),
                format_count(month.new_deals),
                format_count(month.active_recurring_deals),
                format_usd(month.meeting_revenue),
                format_usd(month.commission_revenue),
                format_usd(month.total_revenue),
            ];
            let row: Vec<String> = fields
                .iter()
                .map(|field| escape_csv_field(field))
                .collect();
            writeln!(self.writer, "{}", row.join(","))?;
        }

        Ok(())
    }
}

pub fn export_csv(months: &[MonthRecord]) -> String {
    let mut output = Vec::new();
    let mut writer = ProjectionCsvWriter::new(&mut output);
    writer
        .write_header()
        .expect("writing to an in-memory buffer cannot fail");
    writer
        .write_months(months)
        .expect("writing to an in-memory buffer cannot fail");

    String::from_utf8(output).expect("csv output is always utf8")
}

fn escape_csv_field(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|ch| matches!(ch, ',' | '"' | '\n' | '\r'));
    if !needs_quotes {
        return value.to_string();
    }

    let escaped = value.replace('"', "\"\"");
    format!("\"{escaped}\"")
}
