//! End-to-end behavior of the title bar against a live document.

use std::sync::Arc;

use parking_lot::Mutex;

use casement::assets::TITLE_BAR_STYLESHEET_NAME;
use casement::theme::DARK_MARKER_CLASS;
use casement::{Document, TitleBar, TitleBarConfig, TitleBarEvent};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn record(bar: &TitleBar) -> Arc<Mutex<Vec<TitleBarEvent>>> {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let recorded_clone = recorded.clone();
    bar.events.connect(move |&event| {
        recorded_clone.lock().push(event);
    });
    recorded
}

#[test]
fn toggle_parity_over_many_calls() {
    init_tracing();
    let mut doc = Document::new();
    let mut bar = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();
    let events = record(&bar);

    for n in 1..=20 {
        bar.toggle_maximize(&mut doc);
        assert_eq!(bar.is_maximized(), n % 2 == 1, "after {n} toggles");
    }

    let events = events.lock();
    assert_eq!(events.len(), 20);
    for (i, event) in events.iter().enumerate() {
        let expected = if i % 2 == 0 {
            TitleBarEvent::Maximize
        } else {
            TitleBarEvent::Restore
        };
        assert_eq!(*event, expected, "event {i}");
    }
}

#[test]
fn minimize_is_pure_notification() {
    let mut doc = Document::new();
    let bar = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();
    let events = record(&bar);

    bar.minimize();
    bar.minimize();

    assert!(!bar.is_maximized());
    assert_eq!(
        *events.lock(),
        vec![TitleBarEvent::Minimize, TitleBarEvent::Minimize]
    );
}

#[test]
fn close_emits_exactly_once_per_call() {
    let mut doc = Document::new();
    let bar = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();
    let events = record(&bar);

    bar.close();
    assert_eq!(events.lock().len(), 1);
    bar.close();
    assert_eq!(events.lock().len(), 2);
    assert!(events.lock().iter().all(|&e| e == TitleBarEvent::Close));
}

#[test]
fn title_round_trip() {
    let mut doc = Document::new();
    let mut bar = TitleBar::new(
        &mut doc,
        TitleBarConfig::new().with_title("My App"),
    )
    .unwrap();

    assert_eq!(doc.text(bar.view().title), "My App");
    bar.set_title(&mut doc, "X");
    assert_eq!(doc.text(bar.view().title), "X");
}

#[test]
fn icon_reference_is_replaced() {
    let mut doc = Document::new();
    let mut bar = TitleBar::new(
        &mut doc,
        TitleBarConfig::new().with_icon("icon.png"),
    )
    .unwrap();

    let image = doc.style(bar.view().icon, "background-image").unwrap();
    assert!(image.contains("icon.png"));

    bar.set_icon(&mut doc, "other.png");
    let image = doc.style(bar.view().icon, "background-image").unwrap();
    assert!(image.contains("other.png"));
    assert!(!image.contains("icon.png"));
}

#[test]
fn stylesheet_is_injected_exactly_once() {
    init_tracing();
    let mut doc = Document::new();

    let mut first = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();
    let mut second = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();

    first.append_to(&mut doc, None).unwrap();
    second.append_to(&mut doc, None).unwrap();

    assert!(doc.has_stylesheet(TITLE_BAR_STYLESHEET_NAME));
    assert_eq!(doc.stylesheet_count(), 1);
}

#[test]
fn theme_marker_follows_dark_mode_config() {
    // Default: marker applied
    let mut doc = Document::new();
    let mut bar = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();
    bar.append_to(&mut doc, None).unwrap();
    assert!(doc.has_class(doc.root(), DARK_MARKER_CLASS));

    // Explicit true: marker applied
    let mut doc = Document::new();
    let mut bar =
        TitleBar::new(&mut doc, TitleBarConfig::new().with_dark_mode(true)).unwrap();
    bar.append_to(&mut doc, None).unwrap();
    assert!(doc.has_class(doc.root(), DARK_MARKER_CLASS));

    // Explicit false: no marker
    let mut doc = Document::new();
    let mut bar =
        TitleBar::new(&mut doc, TitleBarConfig::new().with_dark_mode(false)).unwrap();
    bar.append_to(&mut doc, None).unwrap();
    assert!(!doc.has_class(doc.root(), DARK_MARKER_CLASS));
}

#[test]
fn last_mounted_widget_wins_the_theme() {
    let mut doc = Document::new();

    let mut dark = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();
    let mut light =
        TitleBar::new(&mut doc, TitleBarConfig::new().with_dark_mode(false)).unwrap();

    dark.append_to(&mut doc, None).unwrap();
    assert!(doc.has_class(doc.root(), DARK_MARKER_CLASS));

    // Mounting the light-themed widget clears the shared marker
    light.append_to(&mut doc, None).unwrap();
    assert!(!doc.has_class(doc.root(), DARK_MARKER_CLASS));
}

#[test]
fn destroy_removes_root_from_container() {
    let mut doc = Document::new();
    let container = doc.create_element("main");
    let mut bar = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();

    bar.append_to(&mut doc, Some(container)).unwrap();
    assert!(doc.children(container).contains(&bar.view().root));

    bar.destroy(&mut doc).unwrap();
    assert!(!doc.children(container).contains(&bar.view().root));
    assert!(doc.parent(bar.view().root).is_none());
}

#[test]
fn host_reacts_to_intents() {
    // A host wiring: the widget only signals, the host owns window state.
    let mut doc = Document::new();
    let mut bar = TitleBar::new(&mut doc, TitleBarConfig::new()).unwrap();

    let window_fullscreen = Arc::new(Mutex::new(false));
    let window_closed = Arc::new(Mutex::new(false));

    let fullscreen = window_fullscreen.clone();
    let closed = window_closed.clone();
    bar.events.connect(move |&event| match event {
        TitleBarEvent::Maximize => *fullscreen.lock() = true,
        TitleBarEvent::Restore => *fullscreen.lock() = false,
        TitleBarEvent::Close => *closed.lock() = true,
        TitleBarEvent::Minimize => {}
    });

    let view = *bar.view();
    bar.handle_double_click(&mut doc, view.title);
    assert!(*window_fullscreen.lock());

    bar.handle_click(&mut doc, view.resize);
    assert!(!*window_fullscreen.lock());

    bar.handle_click(&mut doc, view.close);
    assert!(*window_closed.lock());
}
