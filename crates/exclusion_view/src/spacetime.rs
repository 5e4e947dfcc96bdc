use exclusion_core::observables::occupancy_matrix;
use exclusion_data::Trajectory;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

pub const PARTICLE: &str = "█";
pub const HOLE: &str = "·";

/// Space-time diagram: one row per frame, time running downward.
///
/// When the trajectory has more frames than the widget has rows, frames are
/// taken at an even stride so the diagram still spans the whole run.
pub struct SpacetimeWidget<'a> {
    pub trajectory: &'a Trajectory,
    pub title: &'a str,
}

impl<'a> Widget for SpacetimeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            " {} ({} frames, x → site, t ↓) ",
            self.title,
            self.trajectory.len()
        ));
        let rows = occupancy_matrix(self.trajectory);
        let visible = block.inner(area).height as usize;
        let stride = if visible == 0 {
            1
        } else {
            rows.len().div_ceil(visible).max(1)
        };

        let lines: Vec<Line> = rows
            .iter()
            .step_by(stride)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|&bit| {
                            if bit == 1 {
                                Span::styled(PARTICLE, Style::default().fg(Color::Yellow))
                            } else {
                                Span::styled(HOLE, Style::default().fg(Color::DarkGray))
                            }
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Plain-text PGM (`P2`) image: one pixel row per frame, black particles on
/// a white background.
pub fn to_pgm(trajectory: &Trajectory) -> String {
    let rows = occupancy_matrix(trajectory);
    let mut out = format!("P2\n{} {}\n1\n", trajectory.length, rows.len());
    for row in rows {
        let pixels: Vec<&str> = row
            .iter()
            .map(|&bit| if bit == 1 { "0" } else { "1" })
            .collect();
        out.push_str(&pixels.join(" "));
        out.push('\n');
    }
    out
}
