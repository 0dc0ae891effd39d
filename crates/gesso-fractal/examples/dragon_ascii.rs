//! Dragon curve demo.
//!
//! Generates the curve at a fixed depth and prints an ASCII preview.
//!
//! Run with: `cargo run -p gesso-fractal --example dragon_ascii`

use gesso_fractal::{DragonCurve, FractalGenerator, FractalSegment, clamp_iteration};
use gesso_turtle::Bounds;
use glam::Vec2;

fn main() {
    let dragon = DragonCurve;
    let iteration = clamp_iteration(&dragon, 11);

    println!("=== Dragon Curve ===\n");

    for i in 1..=iteration {
        let sequence = dragon.sequence(i);
        println!("Iteration {}: {} characters", i, sequence.len());
    }

    let segment = FractalSegment::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.0);
    let path = dragon.generate_path(&segment, iteration);
    println!("\nGenerated {} path points", path.len());

    let bounds = Bounds::from_path(&path).expect("path is never empty");
    println!(
        "Bounding box: ({:.2}, {:.2}) to ({:.2}, {:.2})",
        bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
    );

    // Simple ASCII rasterization of the path.
    println!("\n=== ASCII Preview (72x36) ===\n");

    let width = 72;
    let height = 36;
    let mut canvas = vec![vec![' '; width]; height];

    let scale_x = (width - 1) as f32 / bounds.width().max(0.001);
    let scale_y = (height - 1) as f32 / bounds.height().max(0.001);

    for window in path.windows(2) {
        let a = window[0];
        let b = window[1];

        let x1 = ((a.x - bounds.min.x) * scale_x) as i32;
        let y1 = ((a.y - bounds.min.y) * scale_y) as i32;
        let x2 = ((b.x - bounds.min.x) * scale_x) as i32;
        let y2 = ((b.y - bounds.min.y) * scale_y) as i32;

        let steps = (x2 - x1).abs().max((y2 - y1).abs()).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = (x1 as f32 + (x2 - x1) as f32 * t) as usize;
            let y = (y1 as f32 + (y2 - y1) as f32 * t) as usize;
            if x < width && y < height {
                canvas[y][x] = '*';
            }
        }
    }

    for row in &canvas {
        println!("{}", row.iter().collect::<String>());
    }
}
