//! Text content of each screen.

use crate::config::Config;
use crate::core::Screen;
use crate::rules::{GameRound, Move, Outcome};

/// Width of every piece of move art, in columns.
pub const ART_WIDTH: usize = 12;

/// Height of every piece of move art, in rows.
pub const ART_HEIGHT: usize = 4;

/// Pixels per terminal column when mapping configured widths.
pub const PIXELS_PER_COLUMN: u32 = 8;

/// Pixels per terminal row when mapping configured heights.
pub const PIXELS_PER_ROW: u32 = 16;

/// Cell a move frame is drawn into, in terminal columns and rows.
///
/// Never smaller than the art itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub columns: usize,
    pub rows: usize,
}

impl FrameSize {
    pub fn from_config(config: &Config) -> Self {
        Self {
            columns: ((config.frame_width / PIXELS_PER_COLUMN) as usize).max(ART_WIDTH),
            rows: ((config.frame_height / PIXELS_PER_ROW) as usize).max(ART_HEIGHT),
        }
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Terminal stand-in for a move's image.
pub fn move_art(m: Move) -> [&'static str; ART_HEIGHT] {
    match m {
        Move::Rock => ["    ____    ", "  _/    \\_  ", " (  ROCK  ) ", "  \\______/  "],
        Move::Paper => [" .--------. ", " | PAPER  | ", " |        | ", " '--------' "],
        Move::Scissors => ["  _     _   ", " (_)\\ /(_)  ", "    >X<     ", " SCISSORS   "],
    }
}

/// A move's art centred in a frame of `size`.
pub fn framed_art(m: Move, size: FrameSize) -> Vec<String> {
    let blank = " ".repeat(size.columns);
    let top = size.rows.saturating_sub(ART_HEIGHT) / 2;

    let mut lines = vec![blank.clone(); top];
    lines.extend(
        move_art(m)
            .iter()
            .map(|line| format!("{line:^w$}", w = size.columns)),
    );
    lines.resize(size.rows, blank);
    lines
}

/// What the result screen shows for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub headline: &'static str,
    pub user_move: Move,
    pub computer_move: Move,
}

impl ResultSummary {
    pub fn new(round: &GameRound) -> Self {
        Self {
            headline: headline(round.outcome),
            user_move: round.user_move,
            computer_move: round.computer_move,
        }
    }

    /// Both moves side by side with "VS" between them.
    pub fn art_lines(&self, size: FrameSize) -> Vec<String> {
        let left = framed_art(self.user_move, size);
        let right = framed_art(self.computer_move, size);
        left.iter()
            .zip(right.iter())
            .enumerate()
            .map(|(i, (l, r))| {
                let middle = if i == left.len() / 2 { "  VS  " } else { "      " };
                format!("{l}{middle}{r}")
            })
            .collect()
    }
}

pub fn headline(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You Win!",
        Outcome::Lose => "You Lose!",
        Outcome::Tie => "It's a Tie!",
    }
}

/// The commands available on a screen.
pub fn hint(screen: &Screen) -> &'static str {
    match screen {
        Screen::Welcome => "Type 'next' to continue.",
        Screen::Choice => "Type rock, paper or scissors (r/p/s).",
        Screen::Result(_) => "Type 'again' to play again or 'exit' to quit.",
        Screen::Closed => "",
    }
}

/// Lines making up a screen, top to bottom.
pub fn screen_lines(screen: &Screen, frame: FrameSize) -> Vec<String> {
    match screen {
        Screen::Welcome => vec!["Welcome to...".to_string(), String::new(), "[ Next ]".to_string()],
        Screen::Choice => {
            let mut lines = vec![
                "Rock, Paper, Scissors!".to_string(),
                "Choose your weapon:".to_string(),
                String::new(),
            ];
            let arts = Move::ALL.map(|m| framed_art(m, frame));
            for row in 0..frame.rows {
                lines.push(
                    arts.iter()
                        .map(|a| a[row].as_str())
                        .collect::<Vec<_>>()
                        .join("  "),
                );
            }
            lines.push(String::new());
            lines.push(
                Move::ALL
                    .iter()
                    .map(|m| format!("[ {:^w$} ]", m.label(), w = frame.columns.saturating_sub(4)))
                    .collect::<Vec<_>>()
                    .join("  "),
            );
            lines
        }
        Screen::Result(round) => {
            let summary = ResultSummary::new(round);
            let mut lines = vec![summary.headline.to_string(), String::new()];
            lines.extend(summary.art_lines(frame));
            lines.push(String::new());
            lines.push("[ Play Again ]  [ Exit ]".to_string());
            lines
        }
        Screen::Closed => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headlines_match_outcomes() {
        assert_eq!(headline(Outcome::Win), "You Win!");
        assert_eq!(headline(Outcome::Lose), "You Lose!");
        assert_eq!(headline(Outcome::Tie), "It's a Tie!");
    }

    #[test]
    fn art_has_uniform_width() {
        for m in Move::ALL {
            for line in move_art(m) {
                assert_eq!(line.chars().count(), ART_WIDTH, "{m}: {line:?}");
            }
        }
    }

    #[test]
    fn tie_summary_shows_same_move_twice() {
        let summary = ResultSummary::new(&GameRound::new(Move::Paper, Move::Paper));
        assert_eq!(summary.headline, "It's a Tie!");
        assert_eq!(summary.user_move, summary.computer_move);

        let lines = summary.art_lines(FrameSize::default());
        assert!(lines.iter().any(|l| l.contains("VS")));
        assert!(lines.iter().all(|l| l.matches("PAPER").count() <= 2));
    }

    #[test]
    fn choice_screen_offers_every_move() {
        let text = screen_lines(&Screen::Choice, FrameSize::default()).join("\n");
        assert!(text.contains("Choose your weapon:"));
        for m in Move::ALL {
            assert!(text.contains(m.label()));
        }
    }

    #[test]
    fn closed_screen_is_blank() {
        assert!(screen_lines(&Screen::Closed, FrameSize::default()).is_empty());
    }

    #[test]
    fn frame_size_follows_configured_pixels() {
        assert_eq!(FrameSize::default(), FrameSize { columns: 12, rows: 6 });

        let config = Config {
            frame_width: 400,
            frame_height: 400,
            ..Config::default()
        };
        assert_eq!(
            FrameSize::from_config(&config),
            FrameSize { columns: 50, rows: 25 }
        );
    }

    #[test]
    fn frame_size_never_shrinks_below_art() {
        let config = Config {
            frame_width: 8,
            frame_height: 8,
            ..Config::default()
        };
        assert_eq!(
            FrameSize::from_config(&config),
            FrameSize {
                columns: ART_WIDTH,
                rows: ART_HEIGHT
            }
        );
    }

    #[test]
    fn framed_art_fills_its_cell() {
        let size = FrameSize { columns: 20, rows: 8 };
        let lines = framed_art(Move::Rock, size);

        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.chars().count() == 20));
        assert!(lines[..2].iter().all(|l| l.trim().is_empty()));
        assert!(lines[2].contains("____"));
        assert!(lines[4].contains("(  ROCK  )"));
    }

    #[test]
    fn larger_frames_widen_the_choice_screen() {
        let small = screen_lines(&Screen::Choice, FrameSize::default());
        let large = screen_lines(&Screen::Choice, FrameSize { columns: 30, rows: 10 });

        assert_ne!(small, large);
        assert!(large.len() > small.len());
        let widest = |lines: &[String]| lines.iter().map(|l| l.chars().count()).max().unwrap();
        assert!(widest(&large) > widest(&small));
    }
}
