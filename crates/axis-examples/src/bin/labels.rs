// File: crates/axis-examples/src/bin/labels.rs
// Summary: Minimal example that normalises a sample set and prints the axis.

use anyhow::Result;
use axis_core::{normalise, NormaliserOptions, ValueScale};

fn main() -> Result<()> {
    let samples = vec![4.0, 12.5, 9.1, 22.0, 17.3, 6.6];

    let norm = normalise(&samples, &NormaliserOptions::default())?;
    println!(
        "axis: start {} step {} range {} (zero line at {} steps)",
        norm.start_value, norm.step, norm.range, norm.zero_value
    );

    for label in norm.value_labels().iter().rev() {
        println!("  {label:>8}");
    }
    println!("  {:>8}", norm.start_value);

    // Pixel mapping for a 300px-tall plot
    let scale = ValueScale::new(norm, 300.0);
    for &v in &samples {
        println!("value {v:>6} -> {:.1}px", scale.to_px(v));
    }
    Ok(())
}
