use caliber_widget::render::star_glyphs;
use comfy_table::{Cell, Color, Table};

use super::GlobalArgs;

pub fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let widget = super::open_widget(global)?;
    let reviews = widget.repository().list()?;

    if reviews.is_empty() {
        println!("No reviews yet. Use `caliber submit` to add one.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "NAME", "POSITION", "RATING", "DATE", "REVIEW"]);
    for review in &reviews {
        table.add_row(vec![
            Cell::new(review.id.to_string()),
            Cell::new(&review.name),
            Cell::new(if review.has_position() { review.position.as_str() } else { "-" }),
            Cell::new(star_glyphs(review)).fg(Color::Yellow),
            Cell::new(&review.date),
            Cell::new(&review.text),
        ]);
    }

    println!("{table}");
    println!("{} reviews total", reviews.len());
    Ok(())
}
