//! Mood card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::engine::{Attribute, PetState, MOOD_MAXIMUM};
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, GREEN_GOOD, RED_CRITICAL, ROUNDED_BORDERS,
    TEXT_MUTED,
};

/// Pick a status color for an attribute value. Hunger counts down:
/// a full belly (0) is the good end.
pub fn mood_color(attr: Attribute, value: i32) -> Color {
    let goodness = if attr.higher_is_better() {
        value
    } else {
        MOOD_MAXIMUM - value
    };
    if goodness <= 3 {
        RED_CRITICAL
    } else if goodness <= 7 {
        AMBER_WARNING
    } else {
        GREEN_GOOD
    }
}

/// Render one card per mood attribute across the given area: the
/// value, a fill gauge, and the attribute name.
pub fn render_mood_cards(area: Rect, state: &PetState, frame: &mut Frame) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (i, attr) in Attribute::ALL.iter().enumerate() {
        let value = state.get(*attr);
        let color = mood_color(*attr, value);

        let card_block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let inner_area = card_block.inner(card_layout[i]);
        frame.render_widget(card_block, card_layout[i]);

        let inner_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Value
                Constraint::Length(1), // Gauge
                Constraint::Length(1), // Label
            ])
            .split(inner_area);

        let value_line = Line::from(Span::styled(
            format!("{}/{}", value, MOOD_MAXIMUM),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            Paragraph::new(vec![value_line]).alignment(Alignment::Center),
            inner_layout[0],
        );

        let percent = (value * 100 / MOOD_MAXIMUM) as u16;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(BG_SECONDARY))
            .percent(percent)
            .label("");
        frame.render_widget(gauge, inner_layout[1]);

        let label_line = Line::from(Span::styled(
            attr.label().to_uppercase(),
            Style::default().fg(TEXT_MUTED),
        ));
        frame.render_widget(
            Paragraph::new(vec![label_line]).alignment(Alignment::Center),
            inner_layout[2],
        );
    }
}
