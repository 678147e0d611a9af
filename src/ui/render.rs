use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::{App, LoadState, Screen};
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), Style::default().fg(theme::TEXT_DIM)),
                    Span::styled(
                        format!("{s}"),
                        Style::default()
                            .fg(theme::ACCENT_FG)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("{num}:{s}"),
                    Style::default().fg(theme::TEXT_DIM),
                ))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match &app.state {
        LoadState::Loading => {
            let msg = Paragraph::new(Line::from(Span::styled("Loading…", theme::dim_style())))
                .centered()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme::border_style()),
                );
            f.render_widget(msg, area);
        }
        LoadState::Failed(err) => render_failure(f, area, err),
        LoadState::Ready(view) => match app.screen {
            Screen::Dashboard => super::screens::dashboard::render(f, area, view),
            Screen::Data => super::screens::data::render(f, area, app, view),
        },
    }
}

fn render_failure(f: &mut Frame, area: Rect, err: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::RED))
        .title(Span::styled(
            " Data could not be loaded ",
            Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
        ));
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(err.to_string(), theme::normal_style())),
        Line::from(""),
        Line::from(Span::styled("Press r to retry", theme::dim_style())),
    ];
    let msg = Paragraph::new(text)
        .centered()
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(msg, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = match app.state {
        LoadState::Failed(_) => " ERROR ",
        _ => " VIEW ",
    };
    let mode_style = match app.state {
        LoadState::Failed(_) => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(theme::ACCENT_FG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    };

    let info = if app.status_message.is_empty() {
        format!(" {} | {} ", app.screen, app.source_label)
    } else {
        format!(" {} | {} ", app.screen, app.status_message)
    };

    let right = match app.screen {
        Screen::Dashboard => " h/l month | r refresh | ? help ",
        Screen::Data => " j/k scroll | g/G top/bottom | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.chars().count() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

const HELP_KEYS: &[(&str, &str)] = &[
    ("h/l or Left/Right", "Previous/next month with data"),
    ("r", "Reload the ledger from its source"),
    ("Tab/Shift-Tab, 1-2", "Switch screens"),
    ("j/k or Up/Down", "Scroll the data preview"),
    ("g/G", "Top/bottom of the data preview"),
    ("q, Ctrl-c", "Quit"),
];

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let heading = Style::default()
        .fg(theme::YELLOW)
        .add_modifier(Modifier::BOLD);
    let mut help_text = vec![
        Line::from(Span::styled(
            " budgetdash Help ",
            Style::default()
                .fg(theme::ACCENT_FG)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Keys", heading)),
    ];
    for (keys, desc) in HELP_KEYS {
        help_text.push(Line::from(Span::styled(
            format!("  {keys:<20} {desc}"),
            theme::normal_style(),
        )));
    }
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 60.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
