// SPDX-License-Identifier: MIT

//!
//! The SVG frontend (a standalone SVG document of the year wheel)
//!

use crate::engine::round_f64_to_nearest_0_01;
use crate::{
    Dot, Engine, LineSegment, LineStyle, TextOut, WheelColours, WheelItem, WheelLayout,
    WheelLayoutParams,
};
use chrono::NaiveDate;
use log::debug;
use yearwheel_core::CalendarEvent;

/// The SVG renderer for the year wheel
pub struct YearWheelRendererSvg {
    /// The underlying [`Engine`].
    engine: Engine,
}

impl Default for YearWheelRendererSvg {
    fn default() -> Self {
        Self::new()
    }
}

impl YearWheelRendererSvg {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        self.engine.set_events(events);
    }

    pub fn set_year(&mut self, year: i32) {
        self.engine.set_year(year);
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.engine.set_today(today);
    }

    pub fn set_wheel_layout_params(&mut self, params: WheelLayoutParams) {
        self.engine.set_wheel_layout_params(params);
    }

    pub fn set_colours(&mut self, colours: WheelColours) {
        self.engine.set_colours(colours);
    }

    pub fn colours(&self) -> WheelColours {
        self.engine.colours()
    }

    /// Draw the wheel as an SVG document
    pub fn draw(&self) -> String {
        let layout = self.engine.wheel();
        debug!(
            "Drawing the {} wheel ({} rings, {} skipped)",
            layout.year,
            layout.rings.len(),
            layout.skipped.len()
        );
        draw_wheel(&layout, &self.engine.colours())
    }
}

/// Format a coordinate for output
fn num(value: f64) -> f64 {
    round_f64_to_nearest_0_01(value)
}

/// Escape text for use in XML content and attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn stroke_attributes(style: &LineStyle) -> String {
    let mut attributes = format!(
        r#"stroke="{}" stroke-width="{}""#,
        style.colour.to_hex(),
        num(style.thickness)
    );
    if let Some((dash, gap)) = style.dash {
        attributes.push_str(&format!(r#" stroke-dasharray="{} {}""#, num(dash), num(gap)));
    }
    attributes
}

fn line(segment: &LineSegment) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
        num(segment.start.x),
        num(segment.start.y),
        num(segment.end.x),
        num(segment.end.y),
        stroke_attributes(&segment.style)
    )
}

fn dot(dot: &Dot, title: Option<&str>) -> String {
    let open = format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
        num(dot.centre.x),
        num(dot.centre.y),
        num(dot.radius),
        dot.colour.to_hex()
    );
    match title {
        Some(title) => format!("{open}><title>{}</title></circle>", escape(title)),
        None => format!("{open}/>"),
    }
}

fn text(text: &TextOut, bold: bool) -> String {
    format!(
        r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}"{} fill="{}">{}</text>"#,
        num(text.position.x),
        num(text.position.y),
        num(text.font_size),
        if bold { r#" font-weight="bold""# } else { "" },
        text.colour.to_hex(),
        escape(&text.text)
    )
}

/// Draw a wheel layout as a standalone SVG document
pub fn draw_wheel(layout: &WheelLayout, colours: &WheelColours) -> String {
    let size = num(layout.size);
    let centre = layout.centre;
    let mut svg = Vec::new();

    svg.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}" font-family="sans-serif">"#
    ));
    svg.push(format!(
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        colours.background.to_hex()
    ));

    // Background circles
    for radius in [layout.outer_radius, layout.inner_radius] {
        svg.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" {}/>"#,
            num(centre.x),
            num(centre.y),
            num(radius),
            stroke_attributes(&colours.boundary_circle)
        ));
    }

    // Months
    for month in &layout.months {
        svg.push(line(&month.separator));
    }
    for month in &layout.months {
        svg.push(text(&month.label, true));
    }

    // Rings
    for ring in &layout.rings {
        svg.push(format!(r#"<g data-area="{}">"#, escape(ring.area.as_str())));
        svg.push(format!(
            r#"<path d="{}" fill="none" fill-rule="evenodd" {}/>"#,
            ring.background,
            stroke_attributes(&colours.ring_outline)
        ));
        for item in &ring.items {
            match item {
                WheelItem::Sector {
                    event_id,
                    title,
                    path,
                    colour,
                    ..
                } => svg.push(format!(
                    r#"<path data-event="{}" d="{path}" fill="{}" fill-opacity="{}" fill-rule="evenodd"><title>{}</title></path>"#,
                    escape(event_id.as_str()),
                    colour.to_hex(),
                    colours.sector_opacity,
                    escape(title)
                )),
                WheelItem::Marker { title, dot: marker, .. } => {
                    svg.push(dot(marker, Some(title)));
                }
            }
        }
        svg.push("</g>".to_string());
    }

    // Today
    if let Some(today) = &layout.today {
        svg.push(line(&today.line));
        svg.push(dot(&today.dot, None));
    }

    // Centre
    for (i, centre_text) in layout.centre_text.iter().enumerate() {
        svg.push(text(centre_text, i > 0));
    }

    svg.push("</svg>".to_string());
    svg.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use yearwheel_core::{Area, EventId, EventType};
    use yearwheel_macros::ymd;

    fn renderer() -> YearWheelRendererSvg {
        let mut renderer = YearWheelRendererSvg::new();
        renderer.set_today(ymd!(2025, 3, 1));
        renderer.set_events(vec![
            CalendarEvent::new(
                EventId::from("a").unwrap(),
                "Eksamen <vår>",
                "2025-05-05",
                "2025-06-06",
                EventType::Period,
                Area::Eksamen,
            ),
            CalendarEvent::new(
                EventId::from("b").unwrap(),
                "Søknadsfrist",
                "2025-04-15",
                "2025-04-15",
                EventType::Deadline,
                Area::Opptak,
            ),
        ]);
        renderer
    }

    #[test]
    fn document() {
        let svg = renderer().draw();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 800 800\""));
        assert!(svg.ends_with("</svg>"));

        // 2 background circles, 1 marker, and the today dot
        assert_eq!(svg.matches("<circle").count(), 4);
        assert_eq!(svg.matches("stroke-dasharray=\"4 4\"").count(), 12);
        assert!(svg.contains(">JAN.</text>"));
        assert!(svg.contains(">2025</text>"));
        assert!(svg.contains(r#"<g data-area="Opptak">"#));
        assert!(svg.contains(r##"fill="#dc2626" fill-opacity="0.7""##));
        assert!(svg.contains("<title>Eksamen &lt;vår&gt;</title>"));
        assert!(svg.contains("<title>Søknadsfrist</title>"));

        // Opptak is the inner ring
        let opptak = svg.find("data-area=\"Opptak\"").unwrap();
        let eksamen = svg.find("data-area=\"Eksamen\"").unwrap();
        assert!(opptak < eksamen);
    }

    #[test]
    fn no_today_outside_the_year() {
        let mut renderer = renderer();
        renderer.set_today(ymd!(2030, 1, 1));
        let svg = renderer.draw();
        assert_eq!(svg.matches("<circle").count(), 3);
    }

    #[test]
    fn escaping() {
        assert_eq!(escape(r#"a & "b" <c> 'd'"#), "a &amp; &quot;b&quot; &lt;c&gt; &apos;d&apos;");
    }
}
