use critpool::prelude::*;
use plotters::prelude::{IntoDrawingArea, SVGBackend};

fn main() {
    let dice = 7;
    let dist = distribution(dice, Cleanup::default()).unwrap();
    dist.print_table(dice);

    let area = SVGBackend::new("pool.svg", (640, 480)).into_drawing_area();
    PoolChart::new(dice, &dist).render(area).unwrap();
    println!("wrote pool.svg");
}
