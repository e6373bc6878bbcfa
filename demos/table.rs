use critpool::prelude::*;

fn main() {
    let table = distribution_table(10, Cleanup::default()).unwrap();
    for (dice, dist) in table.iter().enumerate() {
        dist.print_table(dice as i32);
    }

    export_csv(&table, "pools.csv").unwrap();
    println!("wrote pools.csv");
}
