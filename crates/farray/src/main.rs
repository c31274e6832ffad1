//! Evaluates a masked update and prints the arrays involved.
//!
//! Run with `RUST_LOG=farray=trace` to see view creation and scatter writes.

use farray::prelude::*;
use farray_linalg::vec3;

fn main() -> anyhow::Result<()> {
    farray::init_logger!();

    let f = FloatArray::from([1.25, 2.5, 1.0, 1.75, 5.25, 7.0, 4.25, 1.0, 0.5, 3.5]);
    let g = FloatArray::from_fn(f.len(), |i| i as f32);
    let mask = f.greater_scalar(2.0);
    log::info!("f = {f:?}");
    log::info!("mask (f > 2) = {mask:?}");

    let result = f.to_array();
    let selected = g.mask(&mask)?.mul(&f.mask(&mask)?)?;
    result.set_masked(&mask, &selected)?;
    println!("f where f <= 2, g * f elsewhere: {result:?}");

    let view = result.mask(&mask)?;
    view.div_scalar_assign(2.0)?;
    println!("after halving the masked elements: {result:?}");

    let positions = V3fArray::from([vec3(1.0, 0.0, 0.0), vec3(0.0, 3.0, 4.0)]);
    println!(
        "lengths {:?}, normalized {:?}",
        positions.length(),
        positions.normalized()
    );

    Ok(())
}
