use super::dashboard::Dashboard;
use super::record::Record;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn records(records: &[Record]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DATE", "DURATION", "TAG", "STATUS"]);
        for record in records {
            table.add_row(row![record.id, record.title, record.date, record.duration, record.tag, record.status]);
        }
        table.printstd();
    }

    pub fn dashboard(stats: &Dashboard) {
        let mut table = Table::new();

        table.add_row(row!["TOTAL RECORDS", stats.total_records]);
        table.add_row(row!["TOTAL DURATION", stats.total_duration]);
        table.add_row(row!["TOP TAG", stats.top_tag]);
        table.add_row(row!["COMPLETION RATE", format!("{}%", stats.completion_rate)]);
        table.printstd();
    }
}
