use crate::density::DensityProfileWidget;
use crate::spacetime::SpacetimeWidget;
use exclusion_core::observables::density_profile;
use exclusion_data::Trajectory;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Widget;

const DENSITY_HEIGHT: u16 = 8;

/// Space-time diagram stacked over the density profile of one run.
#[derive(Clone, Copy)]
pub struct RunView<'a> {
    pub trajectory: &'a Trajectory,
    pub title: &'a str,
    /// Upper bound on space-time rows; longer runs are downsampled.
    pub max_rows: u16,
}

impl<'a> RunView<'a> {
    fn spacetime_height(&self) -> u16 {
        let frames = u16::try_from(self.trajectory.len()).unwrap_or(u16::MAX);
        frames.min(self.max_rows).saturating_add(2)
    }

    /// Rows the view needs when drawn inline.
    pub fn height(&self) -> u16 {
        self.spacetime_height().saturating_add(DENSITY_HEIGHT)
    }
}

impl<'a> Widget for RunView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.spacetime_height()),
                Constraint::Length(DENSITY_HEIGHT),
            ])
            .split(area);

        SpacetimeWidget {
            trajectory: self.trajectory,
            title: self.title,
        }
        .render(chunks[0], buf);

        let profile = density_profile(self.trajectory);
        DensityProfileWidget { profile: &profile }.render(chunks[1], buf);
    }
}
