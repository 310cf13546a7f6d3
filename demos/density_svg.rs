use gridbin::{build_grid, GridOptions, PointSet};
use plotters::prelude::*;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_example("density_fitted.svg", GridOptions::new().voxel_length(2.5).density(true))?;
    run_example(
        "density_fixed.svg",
        GridOptions::new().voxel_length([2.0, 4.0]).fixed(60.0).center(vec![50.0, 50.0]).density(true),
    )?;
    Ok(())
}

/// Two blobs of points, each a sum of uniform draws so they peak in the middle.
fn generate_points(count: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut coords = Vec::with_capacity(count * 2);
    for i in 0..count {
        let (cx, cy) = if i % 3 == 0 { (30.0, 35.0) } else { (62.0, 60.0) };
        let dx: f64 = (0..4).map(|_| rng.gen_range(-10.0..10.0)).sum();
        let dy: f64 = (0..4).map(|_| rng.gen_range(-10.0..10.0)).sum();
        coords.push(cx + dx);
        coords.push(cy + dy);
    }
    coords
}

fn heat(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    RGBColor(
        (255.0 * t.sqrt()) as u8,
        (255.0 * t.powi(3)) as u8,
        (255.0 * (1.0 - t) * 0.6) as u8,
    )
}

fn run_example(filename: &str, options: GridOptions) -> Result<(), Box<dyn std::error::Error>> {
    let coords = generate_points(20_000);
    let points = PointSet::new(&coords, 2)?;
    let (grid, axes) = build_grid(&points, None, &options)?;

    let x_edges = axes[0].edges();
    let y_edges = axes[1].edges();
    let max = grid.as_slice().iter().cloned().fold(0.0, f64::max);

    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(x_edges[0]..x_edges[x_edges.len() - 1], y_edges[0]..y_edges[y_edges.len() - 1])?;
    chart.configure_mesh().disable_mesh().draw()?;

    // Draw voxels
    chart.draw_series(grid.cells().map(|(index, values)| {
        let (i, j) = (index[0], index[1]);
        Rectangle::new(
            [(x_edges[i], y_edges[j]), (x_edges[i + 1], y_edges[j + 1])],
            heat(values[0] / max).filled(),
        )
    }))?;

    root.present()?;
    println!("Output saved to {} ({:?} voxels, peak density {:.3})", filename, grid.spatial_shape(), max);
    Ok(())
}
