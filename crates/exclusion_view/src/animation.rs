use exclusion_data::Trajectory;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Rows needed to draw one frame: the track plus its border.
pub const FRAME_HEIGHT: u16 = 3;

const PARTICLE: char = '■';
const HOLE: char = '─';

/// One animation frame: the ring unrolled into a single track.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    /// Index of the frame in the trajectory.
    pub index: usize,
    pub time: f64,
    /// Track line with particles drawn as `■`.
    pub track: String,
    pub label: String,
}

/// Builds one frame per recorded lattice snapshot.
pub fn frames(trajectory: &Trajectory) -> Vec<AnimationFrame> {
    trajectory
        .frames
        .iter()
        .enumerate()
        .map(|(index, frame)| AnimationFrame {
            index,
            time: frame.time,
            track: frame
                .lattice
                .iter()
                .map(|occupied| if occupied { PARTICLE } else { HOLE })
                .collect(),
            label: format!("Time Step: {index}  (step {}, t = {:.3})", frame.step, frame.time),
        })
        .collect()
}

impl Widget for &AnimationFrame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .track
            .chars()
            .map(|c| {
                let color = if c == PARTICLE {
                    Color::Yellow
                } else {
                    Color::DarkGray
                };
                Span::styled(c.to_string(), Style::default().fg(color))
            })
            .collect();
        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.label)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exclusion_data::Lattice;

    fn two_frames() -> Trajectory {
        let mut t = Trajectory::new(5);
        t.record(0.0, 0, Lattice::with_particles_at(5, &[1, 4]));
        t.record(0.5, 10, Lattice::with_particles_at(5, &[2, 4]));
        t
    }

    #[test]
    fn test_frames_mark_particles() {
        let frames = frames(&two_frames());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].track, "─■──■");
        assert_eq!(frames[1].track, "──■─■");
        assert!(frames[1].label.starts_with("Time Step: 1"));
    }

    #[test]
    fn test_empty_trajectory_has_no_frames() {
        assert!(frames(&Trajectory::new(4)).is_empty());
    }

    #[test]
    fn test_frame_widget_draws_track_and_label() {
        let frames = frames(&two_frames());
        let area = Rect::new(0, 0, 50, FRAME_HEIGHT);
        let mut buf = Buffer::empty(area);
        frames[1].render(area, &mut buf);

        let track: String = (1..6).map(|x| buf[(x, 1)].symbol()).collect();
        assert_eq!(track, "──■─■");
        assert!(format!("{:?}", buf).contains("Time Step: 1"));
    }
}
