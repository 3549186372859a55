use crate::app::{App, InputState};
use crate::ui::widgets::details::render_details_panel;
use crate::ui::widgets::popup::{centered_box, centered_rect};
use crate::ui::widgets::radar::render_radar_scope;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(10),   // Radar + side panel
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);

    if app.input_state == InputState::EditingBudget {
        render_budget_popup(app, f, main_layout[1]);
    }

    if app.show_help {
        render_help_popup(f, f.area());
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let playing = app.session.sweep().is_playing();
    let state_style = if playing {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let title = TextLine::from(vec![
        Span::styled(
            "UFO Sightings ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Radar",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            if playing { " SWEEPING " } else { " PAUSED " },
            state_style,
        ),
        Span::raw("   "),
        Span::styled(app.dataset_name.clone(), Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(title)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_radar_scope(app, f, horizontal_split[0]);
    render_side_panel(app, f, horizontal_split[1]);
}

fn render_side_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let side_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(6)])
        .split(area);

    render_sweep_panel(app, f, side_split[0]);
    render_details_panel(app, f, side_split[1]);
}

fn info_line(label: &'static str, value: String) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn sweep_panel_lines(app: &App) -> Vec<TextLine<'static>> {
    let sweep = app.session.sweep();
    let store = app.session.store();
    let report = app.session.load_report();

    vec![
        info_line("Sweep:     ", format!("{:>6.1}°", sweep.angle().to_degrees())),
        info_line("Rotation:  ", format!("{}", sweep.rotations() + 1)),
        info_line("Ticks:     ", format!("{:.0} per second", app.tick_rate())),
        info_line(
            "Revealed:  ",
            format!(
                "{} / {} this sweep",
                sweep.revealed_this_rotation(),
                app.session.reveal_budget()
            ),
        ),
        info_line(
            "Visible:   ",
            format!("{} of {}", store.visible_count(), store.len()),
        ),
        info_line(
            "Dropped:   ",
            format!(
                "{} malformed, {} off radar",
                report.malformed, report.outside_radar
            ),
        ),
        info_line(
            "Beam:      ",
            format!(
                "±{:.2} rad ({})",
                app.session.engine().sweep_width(),
                app.session.engine().distance().as_str()
            ),
        ),
    ]
}

fn render_sweep_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Sweep ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(sweep_panel_lines(app))).block(block);
    f.render_widget(paragraph, area);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let message = if app.status_message.is_empty() {
        format!("Press Space to {}", app.play_label().to_lowercase())
    } else {
        app.status_message.clone()
    };

    let paragraph = Paragraph::new(message)
        .block(status_block)
        .style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(shortcuts_line()).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn shortcuts_line() -> TextLine<'static> {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    TextLine::from(vec![
        Span::styled("Space", key),
        Span::raw(": Play/Pause  "),
        Span::styled("r", key),
        Span::raw(": Reset  "),
        Span::styled("b", key),
        Span::raw(": Budget  "),
        Span::styled("←↑↓→", key),
        Span::raw(": Cursor  "),
        Span::styled("Tab", key),
        Span::raw(": Next sighting  "),
        Span::styled("F1/?", key),
        Span::raw(": Help  "),
        Span::styled("q", key),
        Span::raw(": Quit"),
    ])
}

fn render_budget_popup(app: &App, f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_box(44, 5, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Max sightings per sweep ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        TextLine::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}█", app.budget_input),
                Style::default().fg(Color::White),
            ),
        ]),
        TextLine::from(Span::styled(
            "Enter: apply and reset   Esc: cancel",
            Style::default().fg(Color::Gray),
        )),
    ];

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), popup_area);
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let heading = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    vec![
        TextLine::from(Span::styled("The sweep", heading)),
        TextLine::from(
            "Sightings appear when the beam passes over them and fade afterwards.",
        ),
        TextLine::from(
            "Each rotation may reveal at most the configured number of sightings.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled("Keys", heading)),
        TextLine::from("Space / p   play or pause the sweep"),
        TextLine::from("r           reset sweep and hide all sightings"),
        TextLine::from("b           set sightings revealed per sweep"),
        TextLine::from("arrows/hjkl move the cursor"),
        TextLine::from("Tab         jump to the next visible sighting"),
        TextLine::from("F1 / ?      toggle this help"),
        TextLine::from("q           quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc, Enter or F1 to close",
            Style::default().fg(Color::Gray),
        )),
    ]
}
