use scrollpager::{PageBatch, ScrollMetrics};
use scrollpager_adapter::{Controller, PageRequest, QueryParams, ScrollConfig, ScrollSettings};

struct Users;

impl ScrollSettings for Users {
    const NAME: &'static str = "users";
}

fn main() {
    let config = ScrollConfig::default();
    let mut controller = Controller::<String>::for_collection::<Users>(&config);
    controller.on_query(&QueryParams::new().with("sort", "name"));

    let mut fetch = |request: &PageRequest| {
        let base = (request.ticket.page - 1) * request.per_page;
        Ok(PageBatch::new(
            (base..base + request.per_page)
                .map(|i| format!("user-{i}"))
                .collect(),
        ))
    };

    // Two scroll events near the bottom; the second lands while the first
    // page is already applied, so it starts the next load.
    for _ in 0..2 {
        if let Some(result) = controller.pump(ScrollMetrics::new(420, 400, 1000), &mut fetch) {
            println!("pump -> {:?}", result);
        }
    }

    // A filter change resets the accumulated list.
    controller.on_query(&QueryParams::new().with("sort", "name").with("filter", "active"));
    println!(
        "after filter change: {} records, page {}",
        controller.pager().len(),
        controller.pager().page()
    );
}
