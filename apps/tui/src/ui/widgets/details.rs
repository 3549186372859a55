use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use ufo_radar::SightingDetails;

fn detail_lines(details: &SightingDetails) -> Vec<TextLine<'static>> {
    details
        .summary_lines()
        .into_iter()
        .map(|line| match line.split_once(": ") {
            Some((label, value)) => TextLine::from(vec![
                Span::styled(
                    format!("{label}: "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(value.to_string()),
            ]),
            None => TextLine::from(line),
        })
        .collect()
}

/// Hover panel: the first sighting under the cursor, and how many others.
pub fn render_details_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hovered = app.hovered();

    let block = Block::default()
        .title(" Sighting ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if hovered.is_empty() {
            Color::DarkGray
        } else {
            Color::Yellow
        }));

    let lines = match hovered.split_first() {
        Some((first, rest)) => {
            let mut lines = detail_lines(first);
            if !rest.is_empty() {
                lines.push(TextLine::from(""));
                lines.push(TextLine::from(Span::styled(
                    format!("+{} more here", rest.len()),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines
        }
        None => vec![TextLine::from(Span::styled(
            "Move the cursor over a sighting (Tab jumps to the next one)",
            Style::default().fg(Color::Gray),
        ))],
    };

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::detail_lines;
    use ufo_radar::SightingDetails;

    #[test]
    fn labels_are_split_from_values() {
        let details = SightingDetails {
            city: "marfa".to_string(),
            comments: "lights: three of them".to_string(),
            ..SightingDetails::default()
        };
        let lines = detail_lines(&details);

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].spans[0].content, "City: ");
        assert_eq!(lines[0].spans[1].content, "marfa");
        assert_eq!(lines[5].spans[1].content, "lights: three of them");
    }
}
