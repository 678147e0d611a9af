use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::present::{BalanceCard, ChartPoint, DashboardView, MonthButton, SpendingRow, SpendingView};
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, view: &DashboardView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Balance cards
            Constraint::Length(6), // Month grid
            Constraint::Min(8),    // Spending breakdown
        ])
        .split(area);

    render_balance_cards(f, chunks[0], &view.balances);
    render_month_grid(f, chunks[1], &view.months);
    render_spending(f, chunks[2], &view.spending);
}

fn render_balance_cards(f: &mut Frame, area: Rect, cards: &[BalanceCard]) {
    let outer = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::border_style())
        .title(Span::styled(" Liquid Balances ", theme::title_style()));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if cards.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        render_card(f, *slot, card);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &BalanceCard) {
    let color = if card.amount < Decimal::ZERO {
        theme::RED
    } else {
        theme::GREEN
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(Style::default().bg(theme::CARD_BG))
        .title(Span::styled(
            format!(" {} ", card.label),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(Line::from(Span::styled(
        card.value.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_month_grid(f: &mut Frame, area: Rect, months: &[MonthButton]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    for (row_area, chunk) in rows.iter().zip(months.chunks(6)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 6); 6])
            .split(*row_area);
        for (button, col) in chunk.iter().zip(cols.iter()) {
            render_month_button(f, *col, button);
        }
    }
}

fn render_month_button(f: &mut Frame, area: Rect, button: &MonthButton) {
    let style = if button.selected {
        theme::selected_style()
    } else if button.available {
        theme::normal_style()
    } else {
        theme::dim_style()
    };
    let border = if button.selected {
        Style::default().fg(theme::ACCENT)
    } else {
        theme::border_style()
    };

    let label = Paragraph::new(Line::from(Span::styled(button.month.name(), style)))
        .centered()
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(label, area);
}

fn render_spending(f: &mut Frame, area: Rect, spending: &SpendingView) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {} ", spending.title()), theme::title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match spending {
        SpendingView::Breakdown { rows, chart, .. } => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(inner);
            render_chart(f, halves[0], chart);
            render_table(f, halves[1], rows);
        }
        _ => {
            let msg = spending.message().unwrap_or_default();
            let text = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(msg, theme::dim_style())),
            ])
            .centered();
            f.render_widget(text, inner);
        }
    }
}

fn render_chart(f: &mut Frame, area: Rect, chart: &[ChartPoint]) {
    let bars: Vec<Bar> = chart
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let color = theme::category_color(i);
            Bar::default()
                .value(point.value.round().max(0.0) as u64)
                .text_value(format!("{:.0}%", point.share))
                .label(Line::from(truncate(&point.label, 10)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_table(f: &mut Frame, area: Rect, rows: &[SpendingRow]) {
    let header = Row::new(
        ["Category", "Total Spent"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(truncate(&row.category, 24)),
                Cell::from(Line::from(row.total_spent.as_str()).right_aligned()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(body, [Constraint::Min(12), Constraint::Length(14)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style()),
        );
    f.render_widget(table, area);
}
