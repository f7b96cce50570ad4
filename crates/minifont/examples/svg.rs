use svg::Document;
use svg::node::element::{Path, Rectangle};
use svg::node::element::path::Data;

use minifont::{Fallback, MinifontRenderer, Point, Renderer, ROWS};

fn points_to_svg_path(points: &[Point], scale: f32, margin: f32, y_offset: f32) -> (Data, f32) {
    let mut data = Data::new();
    let mut max_x: f32 = 0.0;

    for p in points {
        let x = p.x as f32 * scale + margin;
        let y = p.y as f32 * scale + margin + y_offset;
        max_x = max_x.max(x + scale);

        data = data
            .move_to((x, y))
            .horizontal_line_by(scale)
            .vertical_line_by(scale)
            .horizontal_line_by(-scale)
            .close();
    }

    (data, max_x + margin)
}

fn draw_line(
    text: &str,
    y_offset: f32,
    scale: f32,
    margin: f32,
    line_height: f32,
) -> (Path, f32, f32) {
    let points = MinifontRenderer::render_text(text, Fallback::Replace);

    let (data, width) = points_to_svg_path(&points, scale, margin, y_offset);

    let path = Path::new()
        .set("fill", "black")
        .set("stroke", "none")
        .set("d", data);

    (path, width, y_offset + line_height)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scale = 8.0;
    let margin = 10.0;
    let line_height = (ROWS as f32 + 2.0) * scale;

    let lines = [
        "ABCDEFGHIJKLM",
        "NOPQRSTUVWXYZ",
        "0123456789",
        "HELLO WORLD!",
        "NOT COVERED: ~",
    ];

    let mut y_offset = 0.0;
    let mut width: f32 = 0.0;
    let mut elements: Vec<Path> = Vec::new();

    for text in lines {
        let (p, w, y) = draw_line(text, y_offset, scale, margin, line_height);
        elements.push(p);
        width = width.max(w);
        y_offset = y;
    }

    let height = y_offset + margin;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    let mut document = Document::new().add(background);

    for el in elements {
        document = document.add(el);
    }

    let document = document
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"));

    svg::save("minifont.svg", &document)?;
    println!("Wrote minifont.svg");

    Ok(())
}
