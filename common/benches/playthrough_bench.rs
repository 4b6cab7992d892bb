use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_bot_common::games::SessionRng;
use tictactoe_bot_common::games::tictactoe::{
    Board, CELL_COUNT, Mark, RandomMoveStrategy, check_result,
};
use tictactoe_bot_common::{GameService, PlayerName, ServiceSettings, SessionId};

fn create_service(seed: u64) -> GameService {
    let strategy = Box::new(RandomMoveStrategy::new(SessionRng::new(seed)));
    GameService::new(ServiceSettings::default_settings(), strategy)
}

fn bench_automated_games(c: &mut Criterion) {
    let service = create_service(12345);
    let session_id = SessionId::new("bench");

    c.bench_function("automated_game_first_free_cell", |b| {
        b.iter(|| {
            service.start_session(session_id.clone(), PlayerName::new("bench"), true);
            while let Ok(session) = service.registry().get_session(&session_id) {
                let index = session.legal_moves()[0];
                let _ = black_box(service.submit_move(&session_id, index));
            }
        });
    });
}

fn bench_check_result(c: &mut Criterion) {
    let mut rng = SessionRng::new(7);
    let marks = [Mark::Empty, Mark::X, Mark::O];
    let boards: Vec<Board> = (0..256)
        .map(|_| {
            let mut cells = [Mark::Empty; CELL_COUNT];
            for cell in cells.iter_mut() {
                *cell = marks[rng.random_range(0..marks.len())];
            }
            Board::from_cells(cells)
        })
        .collect();

    c.bench_function("check_result_256_random_boards", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(check_result(black_box(board)));
            }
        });
    });
}

criterion_group!(benches, bench_automated_games, bench_check_result);
criterion_main!(benches);
