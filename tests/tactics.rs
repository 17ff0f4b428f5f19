use arena_terminal::model::Formation;
use arena_terminal::tactics::{TacticalBoard, default_layout};

#[test]
fn default_layouts_fill_every_slot() {
    for formation in Formation::ALL {
        let layout = default_layout(formation);
        assert_eq!(layout.len(), formation.slots(), "{}", formation.label());
        // Keeper anchors the defensive end.
        assert_eq!(layout[0], (50.0, 88.0));
        for (left, top) in layout {
            assert!((0.0..=100.0).contains(&left));
            assert!((0.0..=100.0).contains(&top));
        }
    }
}

#[test]
fn reduced_roster_shapes_have_six_slots() {
    assert_eq!(Formation::F221.slots(), 6);
    assert_eq!(Formation::F321.slots(), 6);
    assert_eq!(Formation::F442.slots(), 11);
}

#[test]
fn nudge_clamps_at_the_touchlines() {
    let mut board = TacticalBoard::new();
    board.nudge(0, -1000.0, 1000.0);
    let (left, top) = board.positions()[0];
    assert_eq!(left, 0.0);
    assert_eq!(top, 100.0);
}

#[test]
fn nudge_marks_the_formation_as_custom() {
    let mut board = TacticalBoard::new();
    assert!(!board.has_custom());
    board.nudge(3, 2.0, -2.0);
    assert!(board.has_custom());
    board.reset_current();
    assert!(!board.has_custom());
    assert_eq!(board.positions(), default_layout(Formation::F442));
}

#[test]
fn custom_layouts_are_kept_per_formation() {
    let mut board = TacticalBoard::new();
    board.nudge(1, 5.0, 0.0);
    let custom_442 = board.positions();

    board.set_formation(Formation::F433);
    // Fresh formation starts from its own default.
    assert_eq!(board.positions(), default_layout(Formation::F433));
    board.nudge(2, 0.0, -3.0);

    board.set_formation(Formation::F442);
    assert_eq!(board.positions(), custom_442);
}

#[test]
fn cycle_walks_all_formations_and_wraps() {
    let mut board = TacticalBoard::new();
    let mut seen = vec![board.formation];
    for _ in 0..Formation::ALL.len() {
        board.cycle_formation();
        seen.push(board.formation);
    }
    assert_eq!(seen.first(), seen.last());
    for formation in Formation::ALL {
        assert!(seen.contains(&formation));
    }
}

#[test]
fn set_positions_clamps_every_coordinate() {
    let mut board = TacticalBoard::new();
    board.set_positions(vec![(-4.0, 50.0), (110.0, -1.0)]);
    assert_eq!(board.positions(), vec![(0.0, 50.0), (100.0, 0.0)]);
}

#[test]
fn nudge_out_of_range_is_ignored() {
    let mut board = TacticalBoard::new();
    board.nudge(99, 5.0, 5.0);
    assert!(!board.has_custom());
}
