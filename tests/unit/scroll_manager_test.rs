use readtimer::dom::memory::{MemoryDocument, MemoryElement, OutputElement};
use readtimer::dom::ContentElement;
use readtimer::managers::scroll_manager::{
    attach, attach_all, AttachedReadTimer, ScrollListener, ScrollManager, ScrollManagerTrait,
};
use readtimer::services::read_timer::{ReadTimerTrait, REMAINING_TIME_ATTR};
use readtimer::types::errors::ReadTimerError;
use readtimer::types::scroll::{ScrollEvent, TimerPhase};
use readtimer::types::settings::ReadTimerSettings;

type Timers = ScrollManager<MemoryDocument, AttachedReadTimer<MemoryElement>>;

fn article(paragraph_words: usize) -> MemoryElement {
    let text = vec!["word"; paragraph_words].join(" ");
    MemoryElement::new(1000.0)
        .with_node("p", &text)
        .with_node("p", &text)
        .with_node("p", &text)
}

fn document() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.add_output(OutputElement::new("span").with_id("read_timer"));
    doc.add_output(OutputElement::new("span").with_id("sidebar_timer"));
    doc
}

/// Listener that writes its name into a log "document".
struct Recorder(&'static str);

impl ScrollListener<Vec<String>> for Recorder {
    fn handle_scroll(&mut self, document: &mut Vec<String>, event: &ScrollEvent) {
        document.push(format!("{}@{}", self.0, event.document_scroll_top));
    }
}

#[test]
fn test_attach_subscribes_and_publishes_total() {
    let mut doc = document();
    let mut timers = Timers::new();
    let id = attach(article(70), ReadTimerSettings::default(), &mut doc, &mut timers).unwrap();

    assert_eq!(timers.listener_count(), 1);
    assert_eq!(timers.subscription_ids(), vec![id.as_str()]);
    let attached = timers.listener(&id).unwrap();
    assert_eq!(attached.timer().phase(), TimerPhase::Loaded);
    assert_eq!(doc.inner_html("#read_timer"), vec!["Estimated reading time 01:00"]);
}

#[test]
fn test_attach_empty_content_subscribes_nothing() {
    let mut doc = document();
    let mut timers = Timers::new();
    let result = attach(MemoryElement::new(100.0), ReadTimerSettings::default(), &mut doc, &mut timers);

    assert_eq!(result, Err(ReadTimerError::EmptyContent));
    assert_eq!(timers.listener_count(), 0);
    assert_eq!(doc.inner_html("#read_timer"), vec![""]);
}

#[test]
fn test_dispatch_updates_every_timer() {
    let mut doc = document();
    let mut timers = Timers::new();
    let main = attach(article(70), ReadTimerSettings::default(), &mut doc, &mut timers).unwrap();
    let sidebar_settings = ReadTimerSettings {
        output_selector: "#sidebar_timer".to_string(),
        ..ReadTimerSettings::default()
    };
    let sidebar = attach(article(140), sidebar_settings, &mut doc, &mut timers).unwrap();

    let called = timers.dispatch(&mut doc, &ScrollEvent::at(200.0));
    assert_eq!(called, 2);
    assert_eq!(timers.dispatched_events(), 1);

    let main_timer = timers.listener(&main).unwrap();
    assert_eq!(main_timer.timer().phase(), TimerPhase::Updating);
    assert_eq!(main_timer.content().attribute(REMAINING_TIME_ATTR), Some("45"));
    assert_eq!(doc.inner_html("#read_timer"), vec!["Estimated reading time 00:45"]);

    // 140-word paragraphs: 40s each, 120s total, 90s left at a quarter.
    let sidebar_timer = timers.listener(&sidebar).unwrap();
    assert_eq!(sidebar_timer.content().attribute(REMAINING_TIME_ATTR), Some("90"));
    assert_eq!(doc.inner_html("#sidebar_timer"), vec!["Estimated reading time 01:30"]);
}

#[test]
fn test_attach_all_stops_at_first_empty_content() {
    let mut doc = document();
    let mut timers = Timers::new();
    let contents = vec![article(70), MemoryElement::new(10.0), article(70)];
    let result = attach_all(contents, &ReadTimerSettings::default(), &mut doc, &mut timers);

    assert_eq!(result, Err(ReadTimerError::EmptyContent));
    assert_eq!(timers.listener_count(), 1);
}

#[test]
fn test_attach_all_returns_ids_in_order() {
    let mut doc = document();
    let mut timers = Timers::new();
    let ids = attach_all(
        vec![article(70), article(35)],
        &ReadTimerSettings::default(),
        &mut doc,
        &mut timers,
    )
    .unwrap();
    assert_eq!(timers.subscription_ids(), ids.iter().map(String::as_str).collect::<Vec<_>>());
    // Both write to the same output; the last attached wins.
    assert_eq!(doc.inner_html("#read_timer"), vec!["Estimated reading time 00:30"]);
}

#[test]
fn test_boxed_listeners_run_in_registration_order() {
    let mut log: Vec<String> = Vec::new();
    let mut manager: ScrollManager<Vec<String>> = ScrollManager::new();
    let first: Box<dyn ScrollListener<Vec<String>>> = Box::new(Recorder("first"));
    let second: Box<dyn ScrollListener<Vec<String>>> = Box::new(Recorder("second"));
    manager.subscribe(first);
    manager.subscribe(second);

    manager.dispatch(&mut log, &ScrollEvent::at(10.0));
    manager.dispatch(&mut log, &ScrollEvent::at(20.0));

    assert_eq!(log, vec!["first@10", "second@10", "first@20", "second@20"]);
    assert_eq!(manager.dispatched_events(), 2);
}

#[test]
fn test_dispatch_without_listeners() {
    let mut doc = document();
    let mut timers = Timers::default();
    assert_eq!(timers.dispatch(&mut doc, &ScrollEvent::at(0.0)), 0);
    assert!(timers.listener("missing").is_none());
}

#[test]
fn test_loaded_timer_can_be_built_directly() {
    let mut doc = document();
    let attached =
        AttachedReadTimer::load(article(70), ReadTimerSettings::default(), &mut doc).unwrap();
    assert_eq!(attached.timer().total_time().raw_seconds, 60);
    assert_eq!(attached.content().attribute("data-total-time-raw"), Some("60"));
}
