use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use relic_rating::model::ScoreDb;
use relic_rating::scorer::max_score::rank;
use relic_rating::stats::RelicType;
use std::collections::BTreeMap;

/// One row per character: ideal main stat of each variable slot, the top
/// sub stats and the max score.
pub fn print_model_summary(db: &ScoreDb) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("ID").add_attribute(Attribute::Bold)];
    for slot in RelicType::VARIABLE {
        header.push(Cell::new(slot.to_string()));
    }
    header.push(Cell::new("Top Subs").fg(Color::Green));
    header.push(Cell::new("Max").fg(Color::Cyan));
    table.add_row(header);

    if let Some(col) = table.column_mut(6) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (id, model) in &db.models {
        let mut row = vec![Cell::new(id).add_attribute(Attribute::Bold)];
        for slot in RelicType::VARIABLE {
            let ideal = model
                .slot(slot)
                .and_then(|w| w.ideal())
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            row.push(Cell::new(ideal));
        }

        let top: Vec<String> = rank(&model.weight)
            .into_iter()
            .take(4)
            .filter(|(_, w)| *w > 0.0)
            .map(|(p, w)| format!("{} {:.2}", p, w))
            .collect();
        row.push(Cell::new(top.join("\n")).fg(Color::Green));
        row.push(Cell::new(format!("{:.3}", model.max)).fg(Color::Cyan));
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_tally(counts: &BTreeMap<String, u32>) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Stat").add_attribute(Attribute::Bold),
        Cell::new("Rolls").add_attribute(Attribute::Bold),
    ]);
    for (name, count) in counts {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}
