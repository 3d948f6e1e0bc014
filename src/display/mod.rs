use crate::core::{Board, Cell, Move};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{self, stdout, Write};

pub struct DisplayState {
    pub cursor: Move,
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Move::new(1, 1),
            status_msg: None,
            last_move: None,
            show_cursor: false,
        }
    }
}

pub fn render_board(board: &Board, state: &DisplayState) -> io::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Tic-Tac-Toe (minimax) ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    print!("     0   1   2\r\n");
    print!("   +{}+\r\n", "----".repeat(3));

    for (row, line) in board.cells.iter().enumerate() {
        print!("{:2} |", row);
        for (col, &cell) in line.iter().enumerate() {
            let pos = Move::new(row, col);
            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_last_move = state.last_move == Some(pos);

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };
            let cell_text = format!("{}{}{} ", prefix, cell.display_char(), suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else {
                match cell {
                    Cell::X => print!("{}", cell_text.cyan()),
                    Cell::O => print!("{}", cell_text.magenta()),
                    Cell::Empty => print!("{}", cell_text),
                }
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "----".repeat(3));
    out.flush()
}
