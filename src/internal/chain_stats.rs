#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(clippy::unwrap_used)]

use plotters::prelude::*;
use rand::Rng;
use std::hash::{DefaultHasher, Hash, Hasher};

// Fixed bucket count for the simulation; keys are inserted until the target
// load factor is reached, without resizing, so chain growth is visible.
const TABLE_SIZE: usize = 100_000;
// Load factors from 0.1 to 2.0 (chaining keeps working past 1.0)
const NUM_LOAD_FACTORS: usize = 12;

// Hashing strategies to compare
const METHODS: [&str; 2] = ["Polynomial-31 (interim mod)", "SipHash (mod at end)"];

// The polynomial rolling hash used by the library: multiplier 31 over UTF-16
// code units, reduced modulo the capacity at every step
fn polynomial_bucket(key: &str, capacity: usize) -> usize {
    let modulus = capacity.max(1) as u64;
    let mut code: u64 = 0;
    for unit in key.encode_utf16() {
        code = (code.wrapping_mul(31).wrapping_add(u64::from(unit))) % modulus;
    }
    code as usize
}

// Baseline: the standard library's hasher, reduced once at the end
fn siphash_bucket(key: &str, capacity: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % capacity.max(1) as u64) as usize
}

// Random lowercase ASCII key, 3 to 12 characters
fn random_key(rng: &mut impl Rng) -> String {
    let len = rng.random_range(3..=12);
    (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
}

// Chain length statistics for one strategy at one load factor
fn chain_stats(keys: &[String], bucket_of: fn(&str, usize) -> usize) -> (f64, usize) {
    let mut chain_lengths = vec![0usize; TABLE_SIZE];
    for key in keys {
        chain_lengths[bucket_of(key, TABLE_SIZE)] += 1;
    }

    let occupied: Vec<usize> = chain_lengths.iter().copied().filter(|&len| len > 0).collect();
    let average = if occupied.is_empty() {
        0.0
    } else {
        occupied.iter().sum::<usize>() as f64 / occupied.len() as f64
    };
    let worst = occupied.iter().copied().max().unwrap_or(0);

    (average, worst)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate load factors from 0.1 to 2.0
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (2.0 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    // Generate random keys once so both strategies see the same input
    let mut rng = rand::rng();
    let max_keys_needed = *num_keys.iter().max().unwrap();
    let keys: Vec<String> = (0..max_keys_needed).map(|_| random_key(&mut rng)).collect();

    let mut average_chain: Vec<Vec<f64>> = vec![Vec::new(); METHODS.len()];
    let mut worst_chain: Vec<Vec<usize>> = vec![Vec::new(); METHODS.len()];

    for &n_keys in &num_keys {
        println!("Testing with {} keys", n_keys);

        for (method_idx, &method) in METHODS.iter().enumerate() {
            let bucket_of: fn(&str, usize) -> usize =
                if method_idx == 0 { polynomial_bucket } else { siphash_bucket };
            let (average, worst) = chain_stats(&keys[..n_keys], bucket_of);

            average_chain[method_idx].push(average);
            worst_chain[method_idx].push(worst);

            println!("  {}: Avg chain = {:.2}, Worst chain = {}", method, average, worst);
        }
    }

    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Plot 1: Average chain length among occupied buckets
    let root = BitMapBackend::new("average_chain_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_avg = average_chain
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Chain Length vs Load Factor", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..2.1_f64, 0.0..max_avg)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor (keys / buckets)")
        .y_desc("Average Chain Length (occupied buckets)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                load_factors.iter().zip(&average_chain[method_idx]).map(|(&x, &y)| (x, y)),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            load_factors
                .iter()
                .zip(&average_chain[method_idx])
                .map(|(&x, &y)| Circle::new((x, y), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: Worst-case chain length
    let root = BitMapBackend::new("worst_chain_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_worst = worst_chain
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Worst-Case Chain Length vs Load Factor", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..2.1_f64, 0.0..max_worst)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor (keys / buckets)")
        .y_desc("Worst-Case Chain Length")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                load_factors.iter().zip(&worst_chain[method_idx]).map(|(&x, &y)| (x, y as f64)),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            load_factors
                .iter()
                .zip(&worst_chain[method_idx])
                .map(|(&x, &y)| Circle::new((x, y as f64), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Wrote average_chain_length.png and worst_chain_length.png");

    Ok(())
}
