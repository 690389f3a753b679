use snake::board::{Board, Direction::{*, self}};
use snake::snake::{MoveResult, Snake};

fn body_of(snake: &Snake) -> Vec<(i32, i32)> {
    snake.body().iter().copied().collect()
}

/// Steers a fresh snake (heading right) to face `target` without moving it.
fn facing(board: &Board, target: Direction) -> Snake {
    let mut snake = Snake::new(board);
    if target == Left {
        assert!(snake.queue_direction(Up));
        snake.update_direction();
    }
    assert!(snake.queue_direction(target));
    snake.update_direction();
    assert_eq!(snake.get_direction(), target);
    snake
}

#[test]
fn starts_as_one_segment_at_the_center() {
    let board = Board::default();
    let snake = Snake::new(&board);

    assert_eq!(body_of(&snake), vec![(320, 240)]);
    assert_eq!(snake.length(), 1);
    assert_eq!(snake.get_direction(), Right);
    assert_eq!(snake.pending_direction(), None);
}

#[test]
fn turns_except_straight_back() {
    let board = Board::default();

    for current in Direction::ALL.iter() {
        for wanted in Direction::ALL.iter() {
            let mut snake = facing(&board, *current);
            let accepted = snake.queue_direction(*wanted);
            snake.update_direction();

            if *wanted == current.opposite() {
                assert!(!accepted, "{:?} -> {:?} should be rejected", current, wanted);
                assert_eq!(snake.get_direction(), *current);
            } else {
                assert!(accepted);
                assert_eq!(snake.get_direction(), *wanted);
            }
            assert_eq!(snake.pending_direction(), None);
        }
    }
}

#[test]
fn plain_move_slides_the_body() {
    let board = Board::default();
    let mut snake = Snake::new(&board);

    let res = snake.move_step(&board);

    assert_eq!(res, MoveResult::Slid { new_head: (340, 240), old_tail: (320, 240) });
    assert_eq!(body_of(&snake), vec![(340, 240)]);
    assert_eq!(snake.vacated(), &[(320, 240)]);
}

#[test]
fn growth_shows_up_on_the_next_move() {
    let board = Board::default();
    let mut snake = Snake::new(&board);

    snake.grow();
    assert_eq!(snake.body().len(), 1);

    let res = snake.move_step(&board);
    assert_eq!(res, MoveResult::Grew { new_head: (340, 240) });
    assert_eq!(body_of(&snake), vec![(340, 240), (320, 240)]);
    assert!(snake.vacated().is_empty());

    snake.move_step(&board);
    assert_eq!(snake.body().len(), 2);
}

#[test]
fn shrinking_drops_one_segment_but_never_the_last() {
    let board = Board::default();
    let mut snake = Snake::new(&board);

    for _ in 0..2 {
        snake.grow();
        snake.move_step(&board);
    }
    assert_eq!(body_of(&snake), vec![(360, 240), (340, 240), (320, 240)]);

    snake.shrink();
    let res = snake.move_step(&board);
    assert_eq!(res, MoveResult::Shrank { new_head: (380, 240), old_tail: [(320, 240), (340, 240)] });
    assert_eq!(body_of(&snake), vec![(380, 240), (360, 240)]);

    snake.shrink();
    snake.move_step(&board);
    assert_eq!(snake.body().len(), 1);

    snake.shrink();
    assert_eq!(snake.length(), 1);
    snake.move_step(&board);
    assert_eq!(snake.body().len(), 1);
}

#[test]
fn wraps_around_the_right_edge() {
    let board = Board::default();
    let mut snake = Snake::new(&board);

    for _ in 0..board.columns() {
        snake.move_step(&board);
    }

    assert_eq!(snake.head(), (320, 240));
}

#[test]
fn tight_loop_bites_the_fifth_segment() {
    let board = Board::default();
    let mut snake = Snake::new(&board);

    for _ in 0..4 {
        snake.grow();
        snake.move_step(&board);
        assert!(!snake.bit_itself());
    }
    assert_eq!(snake.body().len(), 5);

    for dir in [Down, Left, Up].iter() {
        assert!(snake.queue_direction(*dir));
        snake.update_direction();
        snake.move_step(&board);
    }

    assert_eq!(snake.head(), (380, 240));
    assert_eq!(snake.body()[4], (380, 240));
    assert!(snake.bit_itself());
}

#[test]
fn reset_returns_to_the_start() {
    let board = Board::default();
    let mut snake = Snake::new(&board);

    snake.grow();
    snake.grow();
    snake.queue_direction(Down);
    snake.update_direction();
    snake.move_step(&board);
    snake.move_step(&board);
    snake.queue_direction(Left);

    snake.reset(&board);

    assert_eq!(body_of(&snake), vec![(320, 240)]);
    assert_eq!(snake.length(), 1);
    assert_eq!(snake.get_direction(), Right);
    assert_eq!(snake.pending_direction(), None);
    assert!(snake.vacated().is_empty());
}
