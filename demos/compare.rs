use critpool::prelude::*;
use plotters::prelude::{IntoDrawingArea, SVGBackend};

fn main() {
    let (small, large) = (5, 8);
    let d1 = distribution(small, Cleanup::default()).unwrap();
    let d2 = distribution(large, Cleanup::default()).unwrap();

    let area = SVGBackend::new("compare.svg", (640, 480)).into_drawing_area();
    PoolChart::new(small, &d1)
        .overlay((large, d2.as_slice()))
        .render(area)
        .unwrap();
    println!("wrote compare.svg");
}
