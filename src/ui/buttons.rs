//! Activity button card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::engine::Activity;
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, ORANGE_DIM, ORANGE_PRIMARY,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Render a single activity button card.
///
/// Cards have three looks: enabled, enabled-and-selected (highlight
/// border), and disabled while an activity is in flight. The card
/// whose activity is currently playing keeps a pulsing indicator.
pub fn render_action_card(
    area: Rect,
    activity: Activity,
    selected: bool,
    enabled: bool,
    playing: bool,
    tick: u64,
    frame: &mut Frame,
) {
    let (indicator, indicator_color, text_color, bg_color) = if playing {
        let pulse = get_pulse_color(tick, ORANGE_PRIMARY, ORANGE_DIM);
        ("●", pulse, TEXT_PRIMARY, BG_TERTIARY)
    } else if !enabled {
        ("○", TEXT_MUTED, TEXT_MUTED, BG_SECONDARY)
    } else if selected {
        ("●", ORANGE_PRIMARY, TEXT_PRIMARY, BG_TERTIARY)
    } else {
        ("○", TEXT_SECONDARY, TEXT_SECONDARY, BG_SECONDARY)
    };

    let border_color = if selected && enabled {
        ORANGE_PRIMARY
    } else {
        BORDER_SUBTLE
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let title_line = Line::from(vec![
        Span::styled(
            format!("{} ", indicator),
            Style::default().fg(indicator_color),
        ),
        Span::styled(
            activity.label(),
            Style::default().fg(text_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", activity.hotkey()),
            Style::default().fg(TEXT_MUTED),
        ),
    ]);

    let paragraph = Paragraph::new(vec![title_line]).block(card_block);
    frame.render_widget(paragraph, area);
}
