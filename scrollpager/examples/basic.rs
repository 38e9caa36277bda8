use scrollpager::{Pager, PagerOptions, ScrollMetrics};

fn main() {
    let mut pager = Pager::<u32>::new(PagerOptions::new().with_per_page(25));

    // Simulate a user scrolling toward the end of a 1000px list in a 400px
    // viewport. Each row is 10px, so every completed page grows the content.
    let mut content = 1000u64;
    let mut offset = 0u64;

    while pager.has_more() && pager.page() < 5 {
        offset += 120;
        let metrics = ScrollMetrics::new(offset.min(content - 400), 400, content);

        if let Some(ticket) = pager.on_scroll(metrics) {
            println!("load page {} (epoch {})", ticket.page, ticket.epoch);
            // A real host would fetch here; the last page comes back short.
            let n = if ticket.page < 4 { 25 } else { 7 };
            let base = (ticket.page - 1) * 25;
            pager.complete_load(ticket, scrollpager::PageBatch::new((base..base + n).collect()));
            content += n as u64 * 10;
        }
    }

    println!(
        "loaded {} records across {} pages, exhausted={}",
        pager.len(),
        pager.page(),
        !pager.has_more()
    );
}
