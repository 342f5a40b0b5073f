use news::{parse_headlines, render, NewsQuery, NewsView};
use session::NewsGeneration;
use tracing::{info, warn};

use crate::AppState;

/// Latest accepted news render plus the generation it belongs to.
///
/// `view` is `None` while the fetch for `generation` is still in
/// flight. A result for an older generation never overwrites a newer
/// one; the latest selection wins the news region.
#[derive(Debug, Default)]
pub struct NewsSlot {
    generation: NewsGeneration,
    view: Option<NewsView>,
}

impl NewsSlot {
    /// Marks a fresh fetch as pending, clearing any stale content.
    pub fn begin(&mut self, generation: NewsGeneration) {
        if generation >= self.generation {
            self.generation = generation;
            self.view = None;
        }
    }

    /// Stores a completed render. Returns false when the result was for
    /// a superseded generation and has been dropped.
    pub fn complete(&mut self, generation: NewsGeneration, view: NewsView) -> bool {
        if generation != self.generation {
            return false;
        }
        self.view = Some(view);
        true
    }

    pub fn view(&self) -> Option<&NewsView> {
        self.view.as_ref()
    }
}

/// Fire-and-forget headline refresh for a new selection.
///
/// The caller has already answered with the visual outcome; this task
/// only ever touches the news slot, and only if its generation is still
/// current when the response lands.
pub fn spawn_refresh(state: AppState, town_name: String, generation: NewsGeneration) {
    state.news.lock().begin(generation);

    tokio::spawn(async move {
        let view = match fetch_news(&state, &town_name).await {
            Ok(view) => view,
            Err(err) => {
                warn!("news refresh failed for {town_name:?}: {err}");
                NewsView::unavailable()
            }
        };

        if !state.session.lock().accept_news(generation) {
            info!("dropping stale news result for {town_name:?} (generation {generation})");
            return;
        }
        if !state.news.lock().complete(generation, view) {
            info!("dropping stale news result for {town_name:?} (generation {generation})");
        }
    });
}

async fn fetch_news(state: &AppState, town_name: &str) -> Result<NewsView, String> {
    let url = NewsQuery::for_town(town_name).request_url(&state.news_url);

    let resp = state
        .http
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| format!("fetch failed: {e}"))?;
    if !resp.status().is_success() {
        return Err(format!("upstream HTTP {}", resp.status().as_u16()));
    }

    let text = resp.text().await.map_err(|e| format!("read failed: {e}"))?;
    let headlines = parse_headlines(&text).map_err(|e| e.to_string())?;
    Ok(render(&headlines))
}
