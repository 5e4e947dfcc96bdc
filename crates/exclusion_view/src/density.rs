use exclusion_core::observables::mean_density;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Sparkline, Widget};

/// Density in percent, averaged into at most `columns` bins of adjacent sites.
pub fn binned_percent(profile: &[f64], columns: usize) -> Vec<u64> {
    let bins = profile.len().min(columns);
    (0..bins)
        .map(|c| {
            let start = c * profile.len() / bins;
            let end = (c + 1) * profile.len() / bins;
            let sites = &profile[start..end];
            let mean = sites.iter().sum::<f64>() / sites.len() as f64;
            (mean.clamp(0.0, 1.0) * 100.0).round() as u64
        })
        .collect()
}

/// Time-averaged occupancy per site, scaled so a full bar is density 1.
pub struct DensityProfileWidget<'a> {
    pub profile: &'a [f64],
}

impl<'a> Widget for DensityProfileWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            " Average Density Profile (mean {:.3}) ",
            mean_density(self.profile)
        ));
        let data = binned_percent(self.profile, block.inner(area).width as usize);

        Sparkline::default()
            .block(block)
            .data(&data)
            .max(100)
            .style(Style::default().fg(Color::Cyan))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binning() {
        let profile = [1.0, 0.5, 0.5, 0.0];
        assert_eq!(binned_percent(&profile, 10), vec![100, 50, 50, 0]);
        assert_eq!(binned_percent(&profile, 2), vec![75, 25]);
        assert!(binned_percent(&profile, 0).is_empty());
        assert!(binned_percent(&[], 5).is_empty());
    }

    #[test]
    fn test_profile_bars() {
        let profile = [1.0, 0.5, 0.5, 0.0];
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        DensityProfileWidget { profile: &profile }.render(area, &mut buf);

        assert!(format!("{:?}", buf).contains("mean 0.500"));
        // Two inner rows: a full site fills both, a half-filled one only the bottom.
        assert_eq!(buf[(1, 1)].symbol(), "█");
        assert_eq!(buf[(1, 2)].symbol(), "█");
        assert_eq!(buf[(2, 1)].symbol(), " ");
        assert_eq!(buf[(2, 2)].symbol(), "█");
        assert_eq!(buf[(4, 2)].symbol(), " ");
    }
}
