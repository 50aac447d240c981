use chess_core::Board;
use chess_engine::{play_game, GameRecord, SearchConfig, SearchEngine};
use log::error;

const GAMES_TO_PLAY: usize = 20;

fn print_summary(board: &Board, record: &GameRecord) {
    println!("Game Over");
    println!("{}", board);
    println!();
    println!("Move times: {:?}", record.move_times());
    println!("Average move time: {:?}", record.average_move_time);
    println!("Game notation: {}", record.notation());
    println!("Final score: {}", record.final_score);
}

fn main() {
    env_logger::init();

    let config = SearchConfig::default();
    for game in 1..=GAMES_TO_PLAY {
        let mut engine = SearchEngine::from_config(&config);
        let mut board = Board::new();

        match play_game(&mut engine, &mut board, config.depth) {
            Ok(record) => print_summary(&board, &record),
            Err(err) => error!("game {} aborted: {}", game, err),
        }
    }
}
