//! Full-frame layout and rendering.
//!
//! Mirrors the classic pet-window arrangement: mood cards across the
//! top, activity buttons flanking the pet panel, the feedback bar
//! below, and a bottom hint bar carrying the raw stats line.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::engine::Activity;
use crate::theme::{
    get_pulse_color, BG_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, ORANGE_DIM, ORANGE_PRIMARY,
    ROUNDED_BORDERS, TEXT_PRIMARY,
};
use crate::ui::{art, buttons, stats};

/// Activities on the left of the pet panel, top to bottom.
const LEFT_ACTIONS: [Activity; 3] = [Activity::Bathe, Activity::Feed, Activity::Love];

/// Activities on the right of the pet panel, top to bottom.
const RIGHT_ACTIONS: [Activity; 2] = [Activity::Play, Activity::Sleep];

/// Render the whole UI for one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Backdrop so uncovered cells share the burrow background.
    frame.render_widget(
        Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Mood cards
            Constraint::Min(10),   // Buttons + pet panel
            Constraint::Length(3), // Feedback bar
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    stats::render_mood_cards(main_layout[0], app.engine.state(), frame);
    render_center(main_layout[1], app, frame);
    render_feedback(main_layout[2], app, frame);
    render_bottom_bar(main_layout[3], app, frame);
}

fn render_center(area: Rect, app: &App, frame: &mut Frame) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Left button column
            Constraint::Min(40),    // Pet panel
            Constraint::Length(18), // Right button column
        ])
        .split(area);

    render_button_column(panels[0], &LEFT_ACTIONS, 0, app, frame);
    render_pet_panel(panels[1], app, frame);
    render_button_column(panels[2], &RIGHT_ACTIONS, LEFT_ACTIONS.len(), app, frame);
}

fn render_button_column(
    area: Rect,
    actions: &[Activity],
    index_offset: usize,
    app: &App,
    frame: &mut Frame,
) {
    let mut constraints: Vec<Constraint> = vec![Constraint::Length(3); actions.len()];
    constraints.push(Constraint::Min(0));
    let column = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let busy = app.engine.is_busy();
    for (i, activity) in actions.iter().enumerate() {
        buttons::render_action_card(
            column[i],
            *activity,
            index_offset + i == app.selected,
            !busy,
            busy && app.active_activity == Some(*activity),
            app.animation_tick,
            frame,
        );
    }
}

fn render_pet_panel(area: Rect, app: &App, frame: &mut Frame) {
    let border_color = if app.engine.is_busy() {
        get_pulse_color(app.animation_tick, ORANGE_PRIMARY, ORANGE_DIM)
    } else {
        BORDER_SUBTLE
    };

    let block = Block::default()
        .title(format!(" {} ", app.profile.name))
        .title_style(Style::default().fg(ORANGE_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_PRIMARY));

    let sprite = Paragraph::new(art::sprite(app.current_asset))
        .block(block)
        .style(Style::default().fg(TEXT_PRIMARY))
        .alignment(Alignment::Center);

    frame.render_widget(sprite, area);
}

fn render_feedback(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let phrase = Paragraph::new(app.engine.current_feedback_string())
        .block(block)
        .style(
            Style::default()
                .fg(ORANGE_PRIMARY)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);

    frame.render_widget(phrase, area);
}

fn render_bottom_bar(area: Rect, app: &App, frame: &mut Frame) {
    let bar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(42)])
        .split(area);

    let stats_line = Paragraph::new(format!(" {}", app.engine.current_stats_string()))
        .style(Style::default().fg(BG_PRIMARY).bg(ORANGE_PRIMARY));
    frame.render_widget(stats_line, bar[0]);

    let hints = Paragraph::new("b/f/l/p/s: activities | Enter: go | q: quit ")
        .style(Style::default().fg(BG_PRIMARY).bg(ORANGE_PRIMARY))
        .alignment(Alignment::Right);
    frame.render_widget(hints, bar[1]);
}
