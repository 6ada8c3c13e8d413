use listing_framework::mock::MockObserver;
use listing_framework::{
    CategorySelector, FrameworkError, Listable, ListingActor, ListingClient, ListingConfig,
    Phase, Region, SortOrder, VisibilityEvent,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

// --- Test Records ---

const SUBJECTS: [&str; 7] = [
    "Computer Science",
    "Mathematics",
    "Physics",
    "History",
    "Literature",
    "Psychology",
    "Business",
];

#[derive(Clone, Debug, PartialEq)]
struct Sheet {
    id: String,
    title: String,
    author: String,
    category: String,
}

impl Listable for Sheet {
    const KIND: &'static str = "sheet";
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn author(&self) -> &str {
        &self.author
    }
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Memo {
    id: String,
    title: String,
}

impl Listable for Memo {
    const KIND: &'static str = "memo";
    const SORTABLE: bool = false;
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn author(&self) -> &str {
        "staff"
    }
    fn category(&self) -> &str {
        "General"
    }
}

/// Fixed fixture: distinct zero-padded titles, subjects cycling by index.
fn sheets(count: usize) -> Vec<Sheet> {
    (0..count)
        .map(|i| Sheet {
            id: format!("sheet-{i}"),
            title: format!("Title {i:03}"),
            author: format!("Writer {i}"),
            category: SUBJECTS[i % SUBJECTS.len()].to_string(),
        })
        .collect()
}

fn mount(items: Vec<Sheet>) -> (ListingClient<Sheet>, Arc<MockObserver>, JoinHandle<()>) {
    let observer = Arc::new(MockObserver::new());
    let (actor, client) = ListingActor::new(items, ListingConfig::default());
    let handle = tokio::spawn(actor.run(observer.clone()));
    (client, observer, handle)
}

async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

fn sentinel() -> Region {
    Region::new("sheets-sentinel")
}

// --- Mount & Reset ---

#[tokio::test(start_paused = true)]
async fn test_mount_shows_first_page_after_debounce() {
    let (client, _observer, _handle) = mount(sheets(100));

    let view = client.view().await.unwrap();
    assert!(view.items.is_empty());
    assert!(view.loading);
    assert_eq!(view.phase, Phase::Resetting);
    assert!(!view.show_empty_state());
    assert_eq!(view.total, 100);

    settle(600).await;
    let view = client.view().await.unwrap();
    assert_eq!(view.items.len(), 10);
    assert!(view.has_more);
    assert!(!view.loading);
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.items[0].title, "Title 000");
    assert_eq!(view.categories, SUBJECTS.to_vec());
}

#[tokio::test(start_paused = true)]
async fn test_category_scenario_mathematics() {
    let (client, _observer, _handle) = mount(sheets(100));
    settle(600).await;

    client
        .set_category(CategorySelector::from("Mathematics"))
        .await
        .unwrap();
    settle(600).await;

    let view = client.view().await.unwrap();
    let expected = (0..100).filter(|i| i % 7 == 1).count();
    assert_eq!(expected, 15);
    assert_eq!(view.total, expected);
    assert_eq!(view.items.len(), 10);
    assert!(view.has_more);
    assert!(view.items.iter().all(|s| s.category == "Mathematics"));
}

#[tokio::test(start_paused = true)]
async fn test_zero_matches_shows_empty_state_and_clear_filters_recovers() {
    let (client, _observer, _handle) = mount(sheets(30));
    settle(600).await;

    client.set_query("no such title".into()).await.unwrap();
    client
        .set_category(CategorySelector::from("History"))
        .await
        .unwrap();
    settle(600).await;

    let view = client.view().await.unwrap();
    assert!(view.items.is_empty());
    assert!(!view.has_more);
    assert!(view.show_empty_state());

    client.clear_filters().await.unwrap();
    settle(600).await;

    let view = client.view().await.unwrap();
    assert_eq!(view.criteria.query, "");
    assert_eq!(view.criteria.category, CategorySelector::All);
    assert_eq!(view.items.len(), 10);
    assert!(!view.show_empty_state());
}

#[tokio::test(start_paused = true)]
async fn test_unchanged_criteria_do_not_reset() {
    let (client, _observer, _handle) = mount(sheets(30));
    settle(600).await;

    client.set_query(String::new()).await.unwrap();
    let view = client.view().await.unwrap();
    assert_eq!(view.phase, Phase::Idle);
    assert!(!view.loading);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_edits_collapse_into_one_reset() {
    let (client, _observer, _handle) = mount(sheets(100));
    settle(600).await;

    client.set_query("Title 0".into()).await.unwrap();
    settle(300).await;
    client.set_query("Title 01".into()).await.unwrap();
    settle(300).await;

    // 600 ms after the first edit: its reset would have landed had it not been superseded.
    let view = client.view().await.unwrap();
    assert_eq!(view.phase, Phase::Resetting);
    assert!(view.loading);
    assert_eq!(view.items.len(), 10);
    assert_eq!(view.items[0].title, "Title 000");

    settle(300).await;
    let view = client.view().await.unwrap();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.total, 10);
    assert!(view.items.iter().all(|s| s.title.starts_with("Title 01")));
}

// --- Load More ---

#[tokio::test(start_paused = true)]
async fn test_load_more_grows_window_as_prefix_until_exhausted() {
    let items = sheets(35);
    let (client, _observer, _handle) = mount(items.clone());
    settle(600).await;

    let mut previous = client.view().await.unwrap().items.len();
    while client.load_more().await.unwrap() {
        let during = client.view().await.unwrap();
        assert_eq!(during.phase, Phase::LoadingMore);
        assert_eq!(during.items.len(), previous);

        settle(900).await;
        let view = client.view().await.unwrap();
        assert!(view.items.len() >= previous);
        assert_eq!(view.items, items[..view.items.len()].to_vec());
        assert_eq!(view.has_more, view.items.len() < items.len());
        previous = view.items.len();
    }

    let view = client.view().await.unwrap();
    assert_eq!(view.items.len(), 35);
    assert!(!view.has_more);
    assert!(!client.load_more().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_load_more_while_loading_is_rejected() {
    let (client, _observer, _handle) = mount(sheets(50));
    settle(600).await;

    assert!(client.load_more().await.unwrap());
    let before = client.view().await.unwrap();
    assert!(!client.load_more().await.unwrap());
    let after = client.view().await.unwrap();
    assert_eq!(before.items, after.items);
    assert_eq!(after.phase, Phase::LoadingMore);

    settle(900).await;
    assert_eq!(client.view().await.unwrap().items.len(), 20);
}

#[tokio::test(start_paused = true)]
async fn test_load_more_during_reset_is_rejected() {
    let (client, _observer, _handle) = mount(sheets(50));
    assert!(!client.load_more().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_reset_wins_over_in_flight_load() {
    let (client, _observer, _handle) = mount(sheets(100));
    settle(600).await;

    assert!(client.load_more().await.unwrap());
    settle(100).await;
    client
        .set_category(CategorySelector::from("Physics"))
        .await
        .unwrap();

    // Past both the original load deadline and the new debounce.
    settle(1000).await;
    let view = client.view().await.unwrap();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.items.len(), 10);
    assert!(view.items.iter().all(|s| s.category == "Physics"));
}

#[tokio::test(start_paused = true)]
async fn test_zero_page_size_still_makes_progress() {
    let config = ListingConfig {
        page_size: 0,
        ..ListingConfig::default()
    };
    let (actor, client) = ListingActor::new(sheets(3), config);
    tokio::spawn(actor.run(Arc::new(MockObserver::new())));
    settle(600).await;
    assert_eq!(client.view().await.unwrap().items.len(), 1);

    let mut accepted = 0;
    while client.load_more().await.unwrap() {
        accepted += 1;
        settle(900).await;
        assert!(accepted <= 2, "load accepted with nothing left to add");
    }

    let view = client.view().await.unwrap();
    assert_eq!(accepted, 2);
    assert_eq!(view.items.len(), 3);
    assert!(!view.has_more);
}

// --- Sorting ---

#[tokio::test(start_paused = true)]
async fn test_descending_sort_reverses_titles() {
    let (client, _observer, _handle) = mount(sheets(12));
    settle(600).await;

    client.set_sort_order(SortOrder::Desc).await.unwrap();
    settle(600).await;
    let view = client.view().await.unwrap();
    assert_eq!(view.items[0].title, "Title 011");
    assert_eq!(view.items[9].title, "Title 002");
}

#[tokio::test(start_paused = true)]
async fn test_unsortable_listing_rejects_sort() {
    let memos = vec![Memo {
        id: "memo-0".into(),
        title: "Agenda".into(),
    }];
    let (actor, client) = ListingActor::new(memos, ListingConfig::default());
    tokio::spawn(actor.run(Arc::new(MockObserver::new())));

    let result = client.set_sort_order(SortOrder::Desc).await;
    assert_eq!(result, Err(FrameworkError::SortUnsupported("memo")));
}

// --- Detail Lookup ---

#[tokio::test(start_paused = true)]
async fn test_get_by_id() {
    let (client, _observer, _handle) = mount(sheets(5));
    let found = client.get("sheet-3".into()).await.unwrap();
    assert_eq!(found.unwrap().title, "Title 003");
    assert!(client.get("sheet-99".into()).await.unwrap().is_none());
}

// --- Scroll Trigger ---

#[tokio::test(start_paused = true)]
async fn test_sentinel_visibility_loads_next_page() {
    let (client, observer, _handle) = mount(sheets(25));
    settle(600).await;
    assert_eq!(observer.active(), 1);
    assert_eq!(observer.threshold(&sentinel()), Some(0.1));

    assert!(observer.scroll_into_view(&sentinel()));
    // Round trip so the listing has handled the event and re-armed the trigger.
    let view = client.view().await.unwrap();
    assert_eq!(view.phase, Phase::LoadingMore);

    // Still visible while the page loads: the busy trigger ignores it.
    observer.scroll_into_view(&sentinel());
    settle(900).await;
    assert_eq!(client.view().await.unwrap().items.len(), 20);

    // Barely visible does not cross the threshold.
    observer.fire(&sentinel(), VisibilityEvent::visible(0.05));
    settle(900).await;
    assert_eq!(client.view().await.unwrap().items.len(), 20);

    observer.scroll_into_view(&sentinel());
    settle(900).await;
    let view = client.view().await.unwrap();
    assert_eq!(view.items.len(), 25);
    assert!(!view.has_more);
    // Nothing left: no sentinel rendered.
    assert_eq!(observer.active(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_unmount_detaches_sentinel_and_stops_timers() {
    let (client, observer, handle) = mount(sheets(40));
    settle(600).await;
    assert!(client.load_more().await.unwrap());
    assert!(observer.is_observing(&sentinel()));

    drop(client);
    handle.await.unwrap();

    assert_eq!(observer.active(), 0);
    assert_eq!(observer.observe_calls(), observer.unobserve_calls());
}
