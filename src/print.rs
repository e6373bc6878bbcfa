use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, ContentArrangement, Table};

use crate::stats::{mean, stddev};

pub trait PrintExt {
    fn table(&self, dice: i32) -> String;

    fn print_table(&self, dice: i32) {
        print!("{}", self.table(dice));
    }
}

impl PrintExt for [f64] {
    fn table(&self, dice: i32) -> String {
        let mean = mean(self);
        let stddev = stddev(self);

        let mut table = Table::new();
        table
            .load_preset(UTF8_NO_BORDERS)
            .set_content_arrangement(ContentArrangement::DynamicFullWidth)
            .set_header(vec![Cell::new("Successes"), Cell::new("Chance")]);
        for (successes, p) in self.iter().enumerate() {
            table.add_row(vec![
                Cell::new(successes.to_string()),
                Cell::new(format!("{:6.2}%", p * 100.0)),
            ]);
        }

        format!("{dice} dice | mean: {mean:.3}±{stddev:.3}\n\n{table}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_success_count() {
        let text = [0.25, 0.5, 0.24, 0.0, 0.01].table(2);
        assert!(text.starts_with("2 dice | mean: 1.020±"));
        assert!(text.contains("50.00%"));
        assert!(text.contains("0.00%"));
    }
}
