use super::*;
use crate::draw::BLACK;
use crate::input::{CanvasState, Mode, Pen};
use crate::io::ImageIoError;
use std::collections::VecDeque;
use std::path::PathBuf;

#[derive(Default)]
struct ScriptedDialogs {
    decisions: VecDeque<SaveDecision>,
    paths: VecDeque<Option<PathBuf>>,
    confirm_calls: usize,
    chooser_calls: usize,
}

impl Dialogs for ScriptedDialogs {
    fn confirm_save(&mut self) -> SaveDecision {
        self.confirm_calls += 1;
        self.decisions.pop_front().unwrap_or(SaveDecision::Cancel)
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        self.chooser_calls += 1;
        self.paths.pop_front().flatten()
    }
}

fn dirty_document() -> Document {
    let mut canvas = CanvasState::with_font(30, 20, None);
    canvas.set_mode(Mode::Draw);
    canvas.set_pen(Pen::Line);
    canvas.on_pointer_down(1.0, 1.0);
    canvas.on_pointer_drag(10.0, 10.0);
    canvas.on_pointer_up(10.0, 10.0);
    Document::new(canvas)
}

#[test]
fn clean_canvas_needs_no_confirmation() {
    let mut doc = Document::new(CanvasState::with_font(30, 20, None));
    let mut dialogs = ScriptedDialogs::default();
    assert!(doc.confirm_discard(&mut dialogs).unwrap());
    assert_eq!(dialogs.confirm_calls, 0);
}

#[test]
fn cancel_aborts_new_image() {
    let mut doc = dirty_document();
    let mut dialogs = ScriptedDialogs {
        decisions: [SaveDecision::Cancel].into(),
        ..Default::default()
    };
    assert!(!doc.new_image(&mut dialogs).unwrap());
    assert_eq!(doc.canvas().frame().len(), 2);
    assert!(doc.canvas().has_changed());
}

#[test]
fn no_discards_changes() {
    let mut doc = dirty_document();
    let mut dialogs = ScriptedDialogs {
        decisions: [SaveDecision::No].into(),
        ..Default::default()
    };
    assert!(doc.new_image(&mut dialogs).unwrap());
    assert!(doc.canvas().frame().is_blank());
    assert!(!doc.canvas().has_changed());
    assert_eq!((doc.canvas().width(), doc.canvas().height()), (30, 20));
}

#[test]
fn yes_on_untitled_asks_for_path_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("drawing.png");
    let mut doc = dirty_document();
    let mut dialogs = ScriptedDialogs {
        decisions: [SaveDecision::Yes].into(),
        paths: [Some(target.clone())].into(),
        ..Default::default()
    };

    assert!(doc.new_image(&mut dialogs).unwrap());
    assert!(target.exists());
    assert_eq!(dialogs.chooser_calls, 1);
    // New image forgets the saved path.
    assert_eq!(doc.path(), None);
}

#[test]
fn yes_then_chooser_cancel_aborts() {
    let mut doc = dirty_document();
    let mut dialogs = ScriptedDialogs {
        decisions: [SaveDecision::Yes].into(),
        paths: [None].into(),
        ..Default::default()
    };
    assert!(!doc.confirm_discard(&mut dialogs).unwrap());
    assert!(doc.canvas().has_changed());
}

#[test]
fn yes_with_failing_save_aborts_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = dirty_document();
    let mut dialogs = ScriptedDialogs {
        decisions: [SaveDecision::Yes].into(),
        paths: [Some(dir.path().join("drawing.xyz"))].into(),
        ..Default::default()
    };
    let err = doc.new_image(&mut dialogs).unwrap_err();
    assert!(matches!(err, ImageIoError::UnsupportedFormat(_)));
    assert_eq!(doc.canvas().frame().len(), 2);
}

#[test]
fn save_reuses_current_path() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("first.bmp");
    let mut doc = dirty_document();
    let mut dialogs = ScriptedDialogs {
        paths: [Some(target.clone())].into(),
        ..Default::default()
    };

    assert!(doc.save(&mut dialogs).unwrap());
    assert_eq!(doc.path(), Some(target.as_path()));
    assert_eq!(doc.title(), "first.bmp");

    doc.canvas_mut().on_pointer_down(2.0, 2.0);
    assert_eq!(doc.title(), "first.bmp*");
    assert!(doc.save(&mut dialogs).unwrap());
    assert_eq!(dialogs.chooser_calls, 1);
    assert!(!doc.canvas().has_changed());
}

#[test]
fn open_sets_path_and_canvas_size() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    image::RgbImage::from_pixel(7, 5, image::Rgb([0, 0, 0]))
        .save(&source)
        .unwrap();

    let mut doc = Document::new(CanvasState::with_font(30, 20, None));
    let mut dialogs = ScriptedDialogs::default();
    assert!(doc.open(&source, &mut dialogs).unwrap());
    assert_eq!(doc.path(), Some(source.as_path()));
    assert_eq!((doc.canvas().width(), doc.canvas().height()), (7, 5));
    assert_eq!(doc.canvas().render().unwrap().pixel(6, 4), Some(BLACK));
    assert_eq!(doc.title(), "source.png");
}

#[test]
fn failed_open_keeps_previous_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = Document::new(CanvasState::with_font(30, 20, None));
    let mut dialogs = ScriptedDialogs::default();
    assert!(doc.open(&dir.path().join("missing.png"), &mut dialogs).is_err());
    assert_eq!(doc.path(), None);
    assert_eq!(doc.title(), "Untitled");
}
