use crate::cards::{Card, Rank, Suit};
use crate::game::{Phase, RoundOutcome, Run};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 2 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(5),             // dealt hand
            Constraint::Min(3),                // phase panel
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    draw_header(f, chunks[0], &app.run);
    draw_hand(f, chunks[1], &app.run);

    let panel = chunks[2];
    match app.run.phase() {
        Phase::Shop => draw_shop(f, panel, &app.run),
        Phase::GameOver => draw_game_over(f, panel, &app.run),
        Phase::Results => draw_results(f, panel, app.run.last_round()),
        _ => {
            let hint = if app.run.phase() == Phase::Betting {
                "Adjust the bet with +/- and press Space to deal."
            } else {
                "Toggle holds with 1-5, then press Space to draw every hand."
            };
            let block = Block::default().title(app.run.phase().label()).borders(Borders::ALL);
            f.render_widget(Paragraph::new(hint).block(block).wrap(Wrap { trim: true }), panel);
        }
    }

    draw_status(f, chunks[3], app);
}

/// Popups on top of the table, most recent interaction first.
pub(super) fn draw_overlay(f: &mut Frame, app: &AppState) {
    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.devils_deal_open() {
        draw_devils_deal(f, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, run: &Run) {
    let endless = if run.is_endless() { " [ENDLESS]" } else { "" };
    let streak = run.streak();
    let mods = run.modifications();
    let lines = vec![
        Line::from(format!(
            "Round {}{}   Credits: {}   Bet: {} (min {})   Hands: {}   Stake: {}",
            run.round(),
            endless,
            run.credits(),
            run.bet(),
            run.minimum_bet(),
            run.parallel_hands(),
            run.stake()
        )),
        Line::from(format!(
            "Streak: {} (x{:.2}, next at {})   Devil's Deal: {}   Deck: {} wild, {} dead, {} removed",
            streak.count,
            streak.multiplier(),
            streak.next_threshold(),
            run.devils_deal_charges(),
            mods.wild_cards.len(),
            mods.dead_cards.len(),
            mods.removed_cards.len()
        )),
    ];
    let title = format!("parallel-poker • {}", run.config().mode);
    let header = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_hand(f: &mut Frame, area: Rect, run: &Run) {
    let block = Block::default().title("Hand").borders(Borders::ALL);
    let slots = columns(inner(area), 5);
    f.render_widget(block, area);
    for (i, slot) in slots.iter().enumerate() {
        let held = run.held()[i];
        let title = if held { format!("{} HELD", i + 1) } else { (i + 1).to_string() };
        render_card_widget(
            f,
            *slot,
            run.dealt().get(i).copied(),
            &title,
            if held { Some(Color::Yellow) } else { None },
        );
    }
}

fn draw_results(f: &mut Frame, area: Rect, round: Option<&RoundOutcome>) {
    let block = Block::default().title("Results").borders(Borders::ALL);
    let Some(round) = round else {
        f.render_widget(Paragraph::new("No hands drawn yet.").block(block), area);
        return;
    };
    let mut lines = vec![
        Line::from(format!(
            "{} of {} hands paid • won {} • staked {} • net {:+}",
            round.winning_hands(),
            round.hands.len(),
            round.total_payout,
            round.wagered,
            round.net()
        )),
        Line::from(""),
    ];
    for (rank, count) in round.rank_counts().iter().rev() {
        lines.push(Line::from(format!("{:<16} x{}", rank.label(), count)));
    }
    if let Some(best) = round.best() {
        let cards: Vec<String> = best.hand.cards().iter().map(|c| short_card(*c)).collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Best: {} {} paid {}", best.result.rank.label(), cards.join(" "), best.payout),
            Style::default().fg(Color::Green),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Press Space to close the round.",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_shop(f: &mut Frame, area: Rect, run: &Run) {
    let block = Block::default().title("Shop").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    if run.shop_offers().is_empty() {
        lines.push(Line::from("Sold out."));
    }
    for (i, option) in run.shop_offers().iter().enumerate() {
        let price = run.config().run.price(*option);
        let style = if price <= run.credits() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(Span::styled(format!("{}. {:<14} {} credits", i + 1, option.label(), price), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Number to buy • Space for the next round",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_game_over(f: &mut Frame, area: Rect, run: &Run) {
    let block =
        Block::default().title("Game Over").borders(Borders::ALL).border_style(Style::default().fg(Color::Red));
    let reason = run.game_over().map(|r| r.describe()).unwrap_or("run ended");
    let lines = vec![
        Line::from(Span::styled(format!("Run over: {reason}"), Style::default().fg(Color::Red))),
        Line::from(format!(
            "Reached round {} with {} credits, net {:+}",
            run.round(),
            run.credits(),
            run.total_earnings()
        )),
        Line::from(Span::styled("Press M for a new run.", Style::default().add_modifier(Modifier::DIM))),
    ];
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left_info = vec![Line::from(format!("Phase: {}", app.run.phase().label()))];
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(format!("Error: {err}"), Style::default().fg(Color::Red))));
    }
    let right_keys = vec![
        Line::from("Space next • 1-5 hold/buy • +/- bet"),
        Line::from("D devil's deal • ? help • H history • M menu"),
    ];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let rounds = app.run.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if rounds.is_empty() {
        lines.push(Line::from("No rounds played yet."));
    }
    for round in rounds {
        let best = round.best().map(|b| b.result.rank.label()).unwrap_or("-");
        lines.push(Line::from(format!(
            "Round {:>3}: bet {} • {}/{} paid • net {:+} • best {}",
            round.round,
            round.bet,
            round.winning_hands(),
            round.hands.len(),
            round.net(),
            best
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_devils_deal(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 40, f.area());
    let block = Block::default()
        .title("Devil's Deal")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let mut lines: Vec<Line> = Vec::new();
    if app.devils_deal_offers().is_empty() {
        lines.push(Line::from("Nothing on offer."));
    }
    for (i, offer) in app.devils_deal_offers().iter().enumerate() {
        lines.push(Line::from(format!(
            "{}. {} into slot {} → {} ({} credits)",
            i + 1,
            short_card(offer.card),
            offer.position + 1,
            offer.result.rank.label(),
            offer.payout
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Number to take • Esc cancel",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from("Every round: set a bet, deal five cards, hold the ones you like,"),
        Line::from("then draw. Each parallel hand replaces the unheld cards on its own"),
        Line::from("and pays bet × table multiplier × streak multiplier."),
        Line::from(""),
        Line::from("Space/Enter  deal, draw, close the round, leave the shop"),
        Line::from("1-5          hold a card (buy an offer in the shop)"),
        Line::from("+/-          raise or lower the bet"),
        Line::from("D            Devil's Deal (needs a charge, while holding)"),
        Line::from("H            round history"),
        Line::from("M            menu / new run"),
        Line::from("Q            quit"),
        Line::from(""),
        Line::from("Wild cards (*) play as anything. Dead cards (!) never score."),
        Line::from("From the endless round on, the run ends when a failure check trips."),
        Line::from(""),
        Line::from(Span::styled("Close: ? or Esc", Style::default().add_modifier(Modifier::DIM))),
    ];
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_label(r: Rank) -> String {
    match r {
        Rank::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

fn short_card(c: Card) -> String {
    let (sg, _) = suit_glyph_and_style(c.suit());
    let mark = if c.is_wild() {
        "*"
    } else if c.is_dead() {
        "!"
    } else {
        ""
    };
    format!("{}{}{}", rank_label(c.rank()), sg, mark)
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, title: &str, border: Option<Color>) {
    let mut block =
        Block::default().borders(Borders::ALL).title(title.to_string()).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let (_, mut style) = suit_glyph_and_style(c.suit());
            if c.is_wild() {
                style = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
            } else if c.is_dead() {
                style = Style::default().fg(Color::DarkGray);
            }
            Line::from(Span::styled(short_card(c), style))
        }
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
