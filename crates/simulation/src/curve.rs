//! Chart geometry for the balance curve.
//!
//! Maps a balance series onto a `width` x `height` canvas with the lowest
//! balance on the bottom edge and the highest on the top edge, and renders
//! it as SVG path data.

use std::fmt;
use tradesim_domain::SimulationPoint;
use tradesim_domain::math::round_half_up;

/// Default canvas width used by the chart.
pub const DEFAULT_WIDTH: f64 = 700.0;
/// Default canvas height used by the chart.
pub const DEFAULT_HEIGHT: f64 = 240.0;

/// A point of the curve in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub month: u32,
    pub x: f64,
    pub y: f64,
}

/// Balance curve scaled to a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceCurve {
    pub width: f64,
    pub height: f64,
    pub coordinates: Vec<CurvePoint>,
}

impl PerformanceCurve {
    /// Scales `points` to the canvas.
    ///
    /// A flat series is treated as having a range of one, which puts every
    /// point on the bottom edge.
    #[must_use]
    pub fn from_points(points: &[SimulationPoint], width: f64, height: f64) -> Self {
        let balances = || points.iter().map(|p| p.balance);
        let max_balance = balances().fold(f64::NEG_INFINITY, f64::max);
        let min_balance = balances().fold(f64::INFINITY, f64::min);
        let range = match max_balance - min_balance {
            r if r == 0.0 || !r.is_finite() => 1.0,
            r => r,
        };
        let last_index = points.len().saturating_sub(1).max(1) as f64;

        let coordinates = points
            .iter()
            .enumerate()
            .map(|(index, point)| CurvePoint {
                month: point.month,
                x: (index as f64 / last_index) * width,
                y: height - ((point.balance - min_balance) / range) * height,
            })
            .collect();

        Self {
            width,
            height,
            coordinates,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// SVG path data tracing the curve: `M x,y L x,y ...`.
    #[must_use]
    pub fn line_path(&self) -> String {
        self.coordinates
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!(
                    "{command}{:.2},{:.2}",
                    round_half_up(point.x, 2),
                    round_half_up(point.y, 2)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Closed SVG path filling the area under the curve.
    #[must_use]
    pub fn area_path(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!(
            "{} L{},{} L0,{} Z",
            self.line_path(),
            self.width,
            self.height,
            self.height
        )
    }

    /// Standalone SVG document with the filled area, the stroke and one
    /// marker per month.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PerformanceCurve {
    /// Writes the curve as an SVG document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"viewBox="0 0 {} {}" preserveAspectRatio="none">"#
            ),
            self.width, self.height
        )?;
        f.write_str(
            r#"  <defs>
    <linearGradient id="balanceGradient" x1="0" x2="0" y1="0" y2="1">
      <stop offset="0%" stop-color="rgba(59,130,246,0.6)" />
      <stop offset="100%" stop-color="rgba(59,130,246,0)" />
    </linearGradient>
  </defs>
"#,
        )?;
        if !self.is_empty() {
            writeln!(
                f,
                r#"  <path d="{}" fill="url(#balanceGradient)" />"#,
                self.area_path()
            )?;
            writeln!(
                f,
                r#"  <path d="{}" stroke="rgba(96,165,250,0.9)" stroke-width="3" fill="none" />"#,
                self.line_path()
            )?;
            for point in &self.coordinates {
                writeln!(
                    f,
                    r##"  <circle cx="{}" cy="{}" r="4" fill="#38bdf8" opacity="0.85" />"##,
                    point.x, point.y
                )?;
            }
        }
        f.write_str("</svg>\n")
    }
}
