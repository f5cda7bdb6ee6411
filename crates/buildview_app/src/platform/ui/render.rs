//! Terminal rendering of the viewer content.
//!
//! Field rows and the window title are assembled by pure helpers so they can
//! be tested without a terminal; `draw` only places them into widgets.

use buildview_core::{DisplayContent, FormattedView};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

pub(crate) const WAITING_TEXT: &str = "Waiting for data...";

const FIELD_CAPTIONS: [&str; 8] = [
    "Elapsed time",
    "Begin time",
    "End time",
    "Duration",
    "Current time",
    "Processed events",
    "Percent done",
    "State changes",
];

/// Caption/value pairs in display order. Waiting fills every value with the
/// placeholder.
pub(crate) fn field_rows(content: &DisplayContent) -> Vec<(&'static str, String)> {
    let values: [String; 8] = match content {
        DisplayContent::Waiting => std::array::from_fn(|_| WAITING_TEXT.to_string()),
        DisplayContent::Snapshot(view) => field_values(view),
    };
    FIELD_CAPTIONS.iter().copied().zip(values).collect()
}

fn field_values(view: &FormattedView) -> [String; 8] {
    [
        view.elapsed_text.clone(),
        view.begin_text.clone(),
        view.end_text.clone(),
        view.duration_text.clone(),
        view.cur_text.clone(),
        view.processed_events_text.clone(),
        view.percent_text.clone(),
        view.state_changes_text.clone(),
    ]
}

/// Percentage first, fixed suffix after, mirroring the original title rule.
pub(crate) fn window_title(title_suffix: &str, content: &DisplayContent) -> String {
    match content {
        DisplayContent::Waiting => title_suffix.to_string(),
        DisplayContent::Snapshot(view) => format!("{} - {}", view.percent_text, title_suffix),
    }
}

/// Gauge ratio for the current content, clamped so out-of-range snapshots
/// can never crash the widget.
pub(crate) fn completion_ratio(content: &DisplayContent) -> f64 {
    match content {
        DisplayContent::Waiting => 0.0,
        DisplayContent::Snapshot(view) => view.completion_fraction.clamp(0.0, 1.0),
    }
}

pub(crate) fn draw(frame: &mut Frame, builder_addr: &str, content: &DisplayContent) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Min(3),
        ])
        .split(frame.area());

    let addr_line = Line::from(vec![
        Span::styled("Builder:          ", caption_style()),
        Span::raw(builder_addr.to_string()),
    ]);
    frame.render_widget(Paragraph::new(addr_line), chunks[0]);

    let field_lines: Vec<Line> = field_rows(content)
        .into_iter()
        .map(|(caption, value)| {
            Line::from(vec![
                Span::styled(format!("{caption:<18}"), caption_style()),
                Span::raw(value),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(field_lines), chunks[1]);

    let gauge_label = match content {
        DisplayContent::Waiting => WAITING_TEXT.to_string(),
        DisplayContent::Snapshot(view) => view.percent_text.clone(),
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .label(gauge_label)
        .ratio(completion_ratio(content));
    frame.render_widget(gauge, chunks[2]);

    frame.render_widget(
        listing_paragraph("Traces", content, |view| &view.traces_text),
        chunks[3],
    );
    frame.render_widget(
        listing_paragraph("State providers", content, |view| {
            &view.state_providers_text
        }),
        chunks[4],
    );
}

fn listing_paragraph<'a>(
    title: &'a str,
    content: &DisplayContent,
    pick: impl Fn(&FormattedView) -> &str,
) -> Paragraph<'a> {
    let text = match content {
        DisplayContent::Waiting => WAITING_TEXT.to_string(),
        DisplayContent::Snapshot(view) => pick(view).to_string(),
    };
    Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title))
}

fn caption_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> FormattedView {
        FormattedView {
            begin_text: "b".to_string(),
            end_text: "e".to_string(),
            cur_text: "c".to_string(),
            duration_text: "d".to_string(),
            elapsed_text: "1.50 s".to_string(),
            processed_events_text: "1,234".to_string(),
            state_changes_text: "56".to_string(),
            percent_text: "25.00 %".to_string(),
            completion_fraction: 0.25,
            traces_text: "/t1\n/t2".to_string(),
            state_providers_text: String::new(),
        }
    }

    #[test]
    fn waiting_fills_every_field_with_placeholder() {
        let rows = field_rows(&DisplayContent::Waiting);
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|(_, value)| value == WAITING_TEXT));
    }

    #[test]
    fn snapshot_rows_keep_caption_order() {
        let rows = field_rows(&DisplayContent::Snapshot(sample_view()));
        let captions: Vec<_> = rows.iter().map(|(caption, _)| *caption).collect();
        assert_eq!(captions, FIELD_CAPTIONS);
        assert_eq!(rows[0].1, "1.50 s");
        assert_eq!(rows[6].1, "25.00 %");
    }

    #[test]
    fn title_prepends_percent_to_suffix() {
        let suffix = "tcp://builder:5482 - Build progress";
        assert_eq!(window_title(suffix, &DisplayContent::Waiting), suffix);
        assert_eq!(
            window_title(suffix, &DisplayContent::Snapshot(sample_view())),
            "25.00 % - tcp://builder:5482 - Build progress"
        );
    }

    #[test]
    fn gauge_ratio_is_clamped() {
        let mut view = sample_view();
        view.completion_fraction = 1.7;
        assert_eq!(completion_ratio(&DisplayContent::Snapshot(view)), 1.0);
        assert_eq!(completion_ratio(&DisplayContent::Waiting), 0.0);
    }
}
