use super::*;
use crate::geom::{Point, Rgb};
use crate::stroke::Stroke;

fn stroke(n_points: usize) -> Stroke {
    Stroke {
        points: (0..n_points)
            .map(|i| Point::plain(i as f64, i as f64))
            .collect(),
        color: Rgb { r: 0, g: 0, b: 0 },
        size: 8.0,
        is_eraser: false,
    }
}

#[test]
fn starts_empty() {
    let h = History::new();
    assert!(h.is_empty());
    assert_eq!(h.len(), 0);
    assert_eq!(h.redoable_len(), 0);
}

#[test]
fn undo_moves_stroke_to_redo_stack() {
    let mut h = History::new();
    h.push(stroke(3));
    h.push(stroke(2));

    assert!(h.undo());
    assert_eq!(h.len(), 1);
    assert_eq!(h.redoable_len(), 1);
}

#[test]
fn undo_on_empty_is_refused() {
    let mut h = History::new();
    assert!(!h.undo());
    assert_eq!(h.redoable_len(), 0);
}

#[test]
fn redo_restores_original_order() {
    let mut h = History::new();
    let first = stroke(1);
    let second = stroke(2);
    let third = stroke(3);
    h.push(first.clone());
    h.push(second.clone());
    h.push(third.clone());

    assert!(h.undo());
    assert!(h.undo());
    assert!(h.redo());
    assert!(h.redo());

    assert_eq!(h.committed(), &[first, second, third]);
    assert_eq!(h.redoable_len(), 0);
}

#[test]
fn redo_on_empty_is_refused() {
    let mut h = History::new();
    h.push(stroke(1));
    assert!(!h.redo());
}

#[test]
fn push_clears_redoable() {
    let mut h = History::new();
    h.push(stroke(1));
    h.push(stroke(2));
    assert!(h.undo());

    h.push(stroke(3));
    assert_eq!(h.redoable_len(), 0);
    assert!(!h.redo());
    assert_eq!(h.len(), 2);
}

#[test]
fn clear_drops_both_stacks() {
    let mut h = History::new();
    h.push(stroke(1));
    h.push(stroke(2));
    assert!(h.undo());

    h.clear();
    assert!(h.is_empty());
    assert_eq!(h.redoable_len(), 0);
}
