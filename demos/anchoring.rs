// Example: an item above the viewport turns out taller than estimated; the scroll offset follows.
use estimating_virtualizer::{ListOptions, VirtualList};

fn main() {
    let mut list = VirtualList::from_heights([200.0, 200.0, 200.0, 1000.0], ListOptions::new(500.0));
    list.scroll_to(200.0, true);
    println!(
        "before: scroll_top={} heights={:?} visible={:?}",
        list.scroll_top(),
        list.heights(),
        list.visible_range()
    );

    // Item 0 re-rendered at 500px. It sits above the top of the window, so the window moves down
    // by the same 300px and items 1..=3 stay where the user sees them.
    list.report_height(0, 500.0).expect("report");
    println!(
        "after:  scroll_top={} heights={:?} visible={:?}",
        list.scroll_top(),
        list.heights(),
        list.visible_range()
    );
}
