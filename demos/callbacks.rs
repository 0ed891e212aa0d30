// Example: wiring notifier hooks to closures.
use estimating_virtualizer::{Callbacks, ListOptions, VirtualList};

fn main() {
    let callbacks = Callbacks::new()
        .with_on_visible_range_changed(|| println!("visible range may have changed"))
        .with_on_scroll(|position| println!("silent scroll to {position}"))
        .with_on_total_height_changed(|total| println!("total height = {total}"))
        .with_on_height_map_changed(|index, height| println!("slot {index} -> {height}"));

    let options = ListOptions::new(300.0).with_notifier(callbacks);
    let mut list = VirtualList::from_heights([120.0, 80.0, 100.0, 60.0, 140.0, 90.0], options);

    list.scroll_to(150.0, true);
    list.report_height(0, 180.0).expect("report");
    list.set_height(200.0);
}
