use std::{path::PathBuf, process::exit, time::SystemTime};

use chess_movegen::{Board, ChessError, Color, Move, Piece, Square};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, error, info};

#[derive(Parser, Debug)]
#[command(version, about = "Print boards and pseudo-legal piece moves")]
struct Cli {
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Also write log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the board
    Board(Setup),
    /// Print the moves of the piece on a square
    Moves {
        /// ROW,COL of the piece, both 1-8
        #[arg(value_parser = parse_square)]
        square: Square,

        #[command(flatten)]
        setup: Setup,
    },
    /// Print the moves of every piece of one color
    All {
        #[arg(long, value_enum)]
        color: ColorArg,

        #[command(flatten)]
        setup: Setup,
    },
}

#[derive(Args, Debug)]
struct Setup {
    /// Start from an empty board instead of the starting position
    #[arg(long)]
    empty: bool,

    /// Put a piece on the board, as ROW,COL=LETTER with letters KQBNRP for white and kqbnrp for black
    #[arg(long, value_parser = parse_placement)]
    place: Vec<(Square, Piece)>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColorArg {
    White,
    Black,
}

impl From<ColorArg> for Color {
    fn from(value: ColorArg) -> Self {
        match value {
            ColorArg::White => Color::White,
            ColorArg::Black => Color::Black,
        }
    }
}

impl Setup {
    fn build_board(&self) -> Board {
        let mut board = if self.empty { Board::new() } else { Board::starting() };
        for (square, piece) in &self.place {
            board.place(*square, *piece);
        }
        board
    }
}

fn parse_square(s: &str) -> Result<Square, ChessError> {
    let invalid = || ChessError::InvalidSquare(s.to_string());
    let (row, col) = s.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
    let col = col.trim().parse::<i32>().map_err(|_| invalid())?;

    Square::new(row, col)
}

fn parse_placement(s: &str) -> Result<(Square, Piece), ChessError> {
    let (square, letter) = s.split_once('=').ok_or_else(|| ChessError::InvalidSquare(s.to_string()))?;
    let mut letters = letter.chars();
    let piece = match (letters.next(), letters.next()) {
        (Some(c), None) => Piece::from_letter(c)?,
        _ => return Err(ChessError::InvalidPieceLetter(letter.chars().next().unwrap_or(' '))),
    };

    Ok((parse_square(square)?, piece))
}

fn setup_logger(level: LevelFilter, log_file: Option<&PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    log_panics::init();

    Ok(())
}

fn print_moves(board: &Board, mut moves: Vec<Move>) {
    moves.sort();
    for m in &moves {
        println!("{}", m.pretty_print(Some(board)));
    }
    println!("\n{}", moves.len());
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logger(cli.log_level, cli.log_file.as_ref()) {
        eprintln!("Failed to set up logging: {e}");
        exit(1);
    }

    match cli.command {
        Command::Board(setup) => {
            let board = setup.build_board();
            print!("{board}");
        }
        Command::Moves { square, setup } => {
            let board = setup.build_board();
            match board.piece_moves(square) {
                Ok(moves) => print_moves(&board, moves.into_iter().collect()),
                Err(e) => {
                    error!("{e}");
                    exit(1);
                }
            }
        }
        Command::All { color, setup } => {
            let board = setup.build_board();
            let color = Color::from(color);
            info!("Generating moves for {} {:?} pieces", board.pieces().filter(|(_, p)| p.color == color).count(), color);
            print_moves(&board, board.team_moves(color).into_iter().collect());
        }
    }
}
