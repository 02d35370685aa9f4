//! Circle fitting and dot placement.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl Circle {
    /// Largest circle that fits the viewport, centered along the longer axis.
    pub fn inscribe(width: u32, height: u32) -> Circle {
        let radius = (width.min(height) / 2) as i32;
        let mut cx = radius;
        let mut cy = radius;

        if width > height {
            cx += (width as i32 - 2 * radius) / 2;
        } else if height > width {
            cy += (height as i32 - 2 * radius) / 2;
        }

        Circle { cx, cy, radius }
    }
}

/// Place `n` dots on the circle at angle steps of 2π/n, dot 0 due east of
/// the center. Angles grow clockwise on screen since y points down.
pub fn spaced_dots(n: u32, circle: &Circle) -> Vec<Dot> {
    debug_assert!(n > 0, "dot count must be positive");
    let step = 2.0 * PI / n as f64;

    (0..n)
        .map(|i| {
            let angle = step * i as f64;
            Dot {
                x: (circle.cx as f64 + circle.radius as f64 * angle.cos()) as i32,
                y: (circle.cy as f64 + circle.radius as f64 * angle.sin()) as i32,
            }
        })
        .collect()
}
