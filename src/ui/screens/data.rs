use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::present::DashboardView;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

/// Raw ledger rows as loaded, for checking what the numbers came from.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, view: &DashboardView) {
    let title = Span::styled(
        format!(" Data Preview ({}) ", view.preview.len()),
        theme::title_style().add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(title);

    if view.preview.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("The ledger has no rows", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let header = Row::new(
        ["Date", "Amount", "Description", "Paid To", "Category", "Method"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let rows: Vec<Row> = view
        .preview
        .iter()
        .enumerate()
        .skip(app.preview_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, row)| {
            let style = if i == app.preview_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(row.date.as_str()),
                Cell::from(Span::styled(
                    row.amount.as_str(),
                    theme::amount_style(row.is_income),
                )),
                Cell::from(truncate(&row.description, 32)),
                Cell::from(truncate(&row.paid_to, 20)),
                Cell::from(truncate(&row.category, 16)),
                Cell::from(row.method.as_str()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(13),
        Constraint::Min(20),
        Constraint::Length(20),
        Constraint::Length(16),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
