// Example: a long list where only the first screenful is measured up front.
use estimating_virtualizer::{ListOptions, VirtualList};

fn main() {
    let heights = (0..100_000).map(|i| 18.0 + (i % 5) as f64 * 6.0);
    let mut list = VirtualList::from_heights(heights, ListOptions::new(600.0));

    println!(
        "after init: observed={} estimate={:.2} total={:.0}",
        list.collection().observed_count(),
        list.estimate(),
        list.total_height()
    );

    list.scroll_to_percentage(0.5, true);
    let range = list.visible_range().expect("visible range");
    println!(
        "at 50%: scroll_top={:.0} visible={}..={} observed={}",
        list.scroll_top(),
        range.first,
        range.last,
        list.collection().observed_count()
    );
}
