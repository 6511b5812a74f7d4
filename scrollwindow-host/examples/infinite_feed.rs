// Example: a feed that loads another page each time the bottom is reached.
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use scrollwindow_host::{ListController, ListOptions};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), scrollwindow::WindowError> {
    let next_page = Arc::new(AtomicU32::new(1));
    let pages = Arc::clone(&next_page);

    let options = ListOptions::new(24.0)
        .with_viewport_extent(Some(240.0))
        .with_get_key(|i| format!("post-{i}"))
        .with_on_reach_end(|| println!("reached end"))
        .with_fetch_items(move || {
            let page = pages.fetch_add(1, Ordering::SeqCst);
            async move {
                if page > 3 {
                    return None;
                }
                Some((0..20).map(|i| format!("page {page} post {i}")).collect())
            }
        });

    let first_page = (0..20).map(|i| format!("page 0 post {i}")).collect();
    let mut list = ListController::new(options, first_page)?;

    let mut offset = 0.0;
    for _ in 0..40 {
        offset += 60.0;
        let outcome = list.on_scroll(offset)?;
        if let Some(fetch) = outcome.fetch {
            let fetched = fetch.await;
            let added = list.complete_fetch(fetched)?;
            println!("appended {added} items, now {}", list.len());
        }
    }

    list.for_each_visible(|row| println!("{} {}", row.key, row.item))?;
    Ok(())
}
