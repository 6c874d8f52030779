use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ____                 _ _      _   ____       _
|  _ \ __ _ _ __ __ _| | | ___| | |  _ \ ___ | | _____ _ __
| |_) / _` | '__/ _` | | |/ _ \ | | |_) / _ \| |/ / _ \ '__|
|  __/ (_| | | | (_| | | |  __/ | |  __/ (_) |   <  __/ |
|_|   \__,_|_|  \__,_|_|_|\___|_| |_|   \___/|_|\_\___|_|
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 80, size);
    let block = Block::default().title("parallel-poker").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Magenta))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let config = app.run.config();
    let mut cfg_lines: Vec<Line> = vec![Line::from(Span::styled(
        "New Run:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it, style)));
    }
    cfg_lines.push(Line::from(""));
    let dim = Style::default().add_modifier(Modifier::DIM);
    cfg_lines.push(Line::from(Span::styled(
        format!(
            "Current run: {} • round {} • {} credits • pays pairs of {} or better",
            config.mode,
            app.run.round(),
            app.run.credits(),
            config.rules.min_pair_rank
        ),
        dim,
    )));
    cfg_lines.push(Line::from(Span::styled(
        "[Enter] Start  [Q] Quit  [Esc] Back  [↑/↓] Move  [+/-] Adjust",
        dim,
    )));
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
