use comfy_table::{ContentArrangement, Table};

use hoi_engine::{Locale, Phrase};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "ja", "en"]);

    for phrase in Phrase::catalog() {
        table.add_row(vec![
            phrase.key().to_string(),
            phrase.text(Locale::Japanese),
            phrase.text(Locale::English),
        ]);
    }

    println!("{table}");
    Ok(())
}
