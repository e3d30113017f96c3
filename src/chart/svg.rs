use std::fs;
use std::path::Path;

use rand::Rng;

use crate::chart::packing::pack_circles;
use crate::error::Result;
use crate::models::ComboSolution;

const CHART_TITLE: &str = "McHealthy Combo";
const VIEWPORT: f64 = 800.0;
const MARGIN: f64 = 40.0;

/// Bubbles are drawn at 70% of their packed radius so labels and edges
/// stay readable.
const RADIUS_SHRINK: f64 = 0.7;

/// Write the combo as an SVG bubble chart: one circle per ordered item,
/// area proportional to quantity, labeled with the item name and quantity.
///
/// An empty solution renders nothing: the function returns without
/// touching the filesystem.
pub fn render_bubble_chart<P: AsRef<Path>>(solution: &ComboSolution, path: P) -> Result<()> {
    if solution.is_empty() {
        return Ok(());
    }

    let weights: Vec<f64> = solution.items.iter().map(|i| i.quantity as f64).collect();
    let circles = pack_circles(&weights);

    // Map enclosure coordinates ([-1, 1], y up) onto the viewport (y down).
    let scale = VIEWPORT / 2.0 - MARGIN;
    let center = VIEWPORT / 2.0;

    let mut rng = rand::thread_rng();
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\" \
         viewBox=\"0 0 {0} {0}\">\n",
        VIEWPORT
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"24\" \
         font-family=\"sans-serif\">{}</text>\n",
        center,
        MARGIN / 2.0 + 8.0,
        CHART_TITLE
    ));

    for (item, circle) in solution.items.iter().zip(&circles) {
        let cx = center + circle.x * scale;
        let cy = center - circle.y * scale;
        let r = circle.r * scale * RADIUS_SHRINK;
        let color: u32 = rng.gen_range(0..=0xFF_FFFF);

        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"#{:06x}\" \
             fill-opacity=\"0.9\" stroke=\"black\" stroke-width=\"2\"/>\n",
            cx, cy, r, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\" \
             font-family=\"sans-serif\">{}</text>\n",
            cx,
            cy - 4.0,
            escape_xml(&item.name)
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" \
             font-family=\"sans-serif\">{}</text>\n",
            cx,
            cy + 14.0,
            item.quantity
        ));
    }

    svg.push_str("</svg>\n");
    fs::write(path, svg)?;
    Ok(())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComboItem;
    use crate::models::NutrientTotals;

    fn sample_solution() -> ComboSolution {
        ComboSolution {
            total_calories: 450.0,
            items: vec![
                ComboItem {
                    name: "Salad".to_string(),
                    quantity: 2,
                },
                ComboItem {
                    name: "Burger".to_string(),
                    quantity: 1,
                },
            ],
            totals: NutrientTotals::default(),
        }
    }

    #[test]
    fn test_writes_labeled_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combo.svg");

        render_bubble_chart(&sample_solution(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
        assert!(content.contains(CHART_TITLE));
        assert!(content.contains("Salad"));
        assert!(content.contains("Burger"));
        assert_eq!(content.matches("<circle").count(), 2);
    }

    #[test]
    fn test_empty_solution_renders_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combo.svg");

        render_bubble_chart(&ComboSolution::empty(), &path).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_escapes_item_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combo.svg");

        let mut solution = sample_solution();
        solution.items[0].name = "Fish & Chips".to_string();

        render_bubble_chart(&solution, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Fish &amp; Chips"));
    }
}
