//! Scenario tests for the time-travel history.

use strictly_timetravel::{
    Board, GAME_START_LABEL, GameHistory, GameStatus, HistoryError, IgnoreReason, Mark,
    PlayOutcome, Position, rules,
};

fn play_all(history: &mut GameHistory, indices: &[usize]) {
    for &idx in indices {
        history.play_index(idx).expect("valid index");
    }
}

#[test]
fn test_top_row_win_then_play_is_ignored() {
    let mut history = GameHistory::new();
    play_all(&mut history, &[0, 4, 1, 5, 2]);

    assert_eq!(history.status(), GameStatus::Winner(Mark::X));
    let win = history.win().expect("winner");
    assert_eq!(*win.winner(), Mark::X);
    assert_eq!(
        win.winning_cells().map(Position::to_index),
        [0, 1, 2]
    );

    let outcome = history.play_index(3).expect("valid index");
    assert_eq!(outcome, PlayOutcome::Ignored(IgnoreReason::Decided));
    assert_eq!(history.entries().len(), 6);
}

#[test]
fn test_first_move_label_uses_one_based_coordinates() {
    let mut history = GameHistory::new();
    history.play(Position::Center);
    assert_eq!(history.move_label(1).as_deref(), Ok("Go to move #1 (2, 2)"));
}

#[test]
fn test_game_start_label_is_stable() {
    let mut history = GameHistory::new();
    assert_eq!(history.move_label(0).as_deref(), Ok(GAME_START_LABEL));
    play_all(&mut history, &[8, 0]);
    history.toggle_sort_order();
    assert_eq!(history.move_label(0).as_deref(), Ok("Go to game start"));
}

#[test]
fn test_jump_then_play_truncates_future() {
    let mut history = GameHistory::new();
    play_all(&mut history, &[0, 4, 8, 2, 6]);
    assert_eq!(history.entries().len(), 6);

    history.jump_to(2).expect("in range");
    assert_eq!(history.entries().len(), 6);

    history.play_index(3).expect("valid index");
    assert_eq!(history.entries().len(), 4);
    assert_eq!(history.cursor(), 3);
    assert_eq!(history.current_board().get(Position::MiddleLeft).mark(), Some(Mark::X));
    assert!(history.current_board().is_empty(Position::TopRight));
}

#[test]
fn test_length_tracks_cursor_after_every_play() {
    let mut history = GameHistory::new();
    for (step, idx) in [4, 0, 8, 2, 6, 3, 5].into_iter().enumerate() {
        history.play_index(idx).expect("valid index");
        assert_eq!(history.entries().len(), history.cursor() + 1);

        if step % 2 == 1 {
            history.jump_to(history.cursor() - 1).expect("in range");
            history.play_index(idx).expect("valid index");
            assert_eq!(history.entries().len(), history.cursor() + 1);
        }
    }
}

#[test]
fn test_jump_never_mutates_entries() {
    let mut history = GameHistory::new();
    play_all(&mut history, &[0, 1, 2, 3]);
    let entries = history.entries().to_vec();

    for target in [0, 4, 2, 1, 3] {
        history.jump_to(target).expect("in range");
        assert_eq!(history.entries(), entries.as_slice());
    }
    assert!(matches!(
        history.jump_to(5),
        Err(HistoryError::OutOfRange { requested: 5, len: 5 })
    ));
    assert_eq!(history.cursor(), 3);
}

#[test]
fn test_double_toggle_restores_presentation() {
    let mut history = GameHistory::new();
    play_all(&mut history, &[4, 0, 8]);
    history.jump_to(1).expect("in range");

    let entries = history.entries().to_vec();
    let order = history.display_order();
    let labels: Vec<_> = (0..4).map(|m| history.move_label(m)).collect();

    history.toggle_sort_order();
    assert_eq!(history.display_order(), vec![3, 2, 1, 0]);
    history.toggle_sort_order();

    assert!(history.display_ascending());
    assert_eq!(history.display_order(), order);
    assert_eq!(history.entries(), entries.as_slice());
    assert_eq!(history.cursor(), 1);
    assert_eq!((0..4).map(|m| history.move_label(m)).collect::<Vec<_>>(), labels);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let mut history = GameHistory::new();
    play_all(&mut history, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(history.status(), GameStatus::Draw);
    assert!(history.win().is_none());
    assert!(rules::is_draw(history.current_board()));
    assert_eq!(
        history.play_index(4).expect("valid index"),
        PlayOutcome::Ignored(IgnoreReason::Occupied)
    );
}

#[test]
fn test_detector_agrees_with_brute_force_on_played_boards() {
    // Every board reached in a long branching session is checked against a
    // direct scan of all eight lines.
    let mut history = GameHistory::new();
    let mut boards: Vec<Board> = Vec::new();
    for seed in 0..40usize {
        let idx = (seed * 7 + seed / 3) % 9;
        history.play_index(idx).expect("valid index");
        boards.push(*history.current_board());
        if seed % 5 == 4 {
            history.jump_to(seed % 3).expect("in range");
        }
    }

    for board in boards {
        let brute = rules::LINES.iter().any(|line| {
            let first = board.get(line[0]);
            first.mark().is_some() && line.iter().all(|pos| board.get(*pos) == first)
        });
        assert_eq!(rules::evaluate(&board).is_some(), brute);
    }
}
