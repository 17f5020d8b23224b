//! Plots the trajectory of a projectile onto a PPM image.
//!
//! The canvas here is deliberately example-local: the math crate only produces [`Rgb8`] pixels,
//! and everything about storing and serializing them belongs to the consumer.

use std::fmt::Write as _;

use lumen_linalg::{color, point, vector, Color, Point, Rgb8, Vector};

struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Serializes the canvas as a plain-text PPM (P3) image.
    fn to_ppm(&self) -> String {
        let mut ppm = format!("P3\n{} {}\n255", self.width, self.height);
        for pixel in &self.pixels {
            let Rgb8 { r, g, b } = pixel.to_rgb8();
            write!(ppm, "\n{r} {g} {b}").unwrap();
        }
        ppm.push('\n');
        ppm
    }
}

fn tick(position: Point, velocity: Vector, gravity: Vector, wind: Vector) -> (Point, Vector) {
    (position + velocity, velocity + gravity + wind)
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut canvas = Canvas::new(100, 100);

    let mut position = point(0.0, 1.0, 0.0);
    let mut velocity = vector(1.0, 1.0, 0.0);
    let gravity = vector(0.0, -0.02, 0.0);
    let wind = vector(-0.001, 0.0, 0.0);

    let green = color(0.0, 1.0, 0.0);
    let mut ticks = 0;
    while position.y >= 0.0 {
        let x = position.x as isize;
        let y = canvas.height as isize - position.y as isize;
        if x >= 0 && y >= 0 {
            canvas.write_pixel(x as usize, y as usize, green);
        }

        (position, velocity) = tick(position, velocity, gravity, wind);
        ticks += 1;
    }
    log::info!("projectile landed at x = {:.2} after {ticks} ticks", position.x);

    let path = "trajectory.ppm";
    std::fs::write(path, canvas.to_ppm())?;
    log::info!("wrote {path}");
    Ok(())
}
