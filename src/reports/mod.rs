use crate::cmd::label::TextMatch;
use blazejump::error::BjResult;
use blazejump::geometry::KeyboardLayout;
use blazejump::trie::FrozenNode;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use std::collections::HashMap;

fn depth_color(depth: i32) -> Color {
    match depth {
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Red,
        _ => Color::DarkGrey,
    }
}

/// Draws the layout with each key's visiting order underneath it.
/// Keys the walk never reached show a dot.
pub fn print_spiral_grid(layout: &KeyboardLayout, visits: &HashMap<(i32, i32), (usize, i32)>) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for (y, row) in layout.rows().enumerate() {
        let cells: Vec<Cell> = (0..layout.width())
            .map(|x| {
                let key = row.get(x as usize).copied().flatten();
                let Some(c) = key else {
                    return Cell::new(" ");
                };
                match visits.get(&(x, y as i32)) {
                    Some(&(order, depth)) => Cell::new(format!("{}\n{}", c, order))
                        .fg(depth_color(depth))
                        .set_alignment(CellAlignment::Center),
                    None => Cell::new(format!("{}\n·", c)).set_alignment(CellAlignment::Center),
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

#[derive(Serialize)]
struct LabelRow<'a> {
    label: &'a str,
    full_id: &'a str,
    line: usize,
    column: usize,
}

pub fn print_labels(nodes: &[FrozenNode<TextMatch>], json: bool) -> BjResult<()> {
    if json {
        let rows: Vec<LabelRow> = nodes
            .iter()
            .map(|n| LabelRow {
                label: n.label(),
                full_id: &n.full_id,
                line: n.payload.line,
                column: n.payload.column,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Full Id"),
        Cell::new("Line"),
        Cell::new("Col"),
    ]);
    for i in 2..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for n in nodes {
        table.add_row(vec![
            Cell::new(n.label()).fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new(&n.full_id),
            Cell::new(n.payload.line),
            Cell::new(n.payload.column),
        ]);
    }
    println!("{}", table);
    Ok(())
}
