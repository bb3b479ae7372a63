// Gist menu service.
// Orchestrates cache, client, and parser into the two operations the menu
// layer consumes: building the menu model and fetching a file's content.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::cache::{Clock, MenuCache, STALENESS_WINDOW, SystemClock};
use crate::github::{GistApi, MenuFailure, MenuModel, RateLimit, parse_gist_list};

pub struct GistMenuService<A, C = SystemClock> {
    api: A,
    cache: MenuCache<C>,
}

impl<A: GistApi> GistMenuService<A, SystemClock> {
    pub fn new(api: A) -> Self {
        Self::with_cache(api, MenuCache::new())
    }
}

impl<A: GistApi, C: Clock> GistMenuService<A, C> {
    pub fn with_cache(api: A, cache: MenuCache<C>) -> Self {
        Self { api, cache }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Menu for `username`, served from cache while it is fresh.
    ///
    /// Every outcome, including failures, is cached for the staleness
    /// window. Expected failures come back as a failure model, never as an
    /// error.
    pub fn fetch_gist_menu(&mut self, username: &str) -> Arc<MenuModel> {
        if let Some(model) = self.cache.get_if_fresh(STALENESS_WINDOW) {
            debug!("serving gist menu from cache");
            return model;
        }

        let model = self.build_menu(username.trim());
        if model.success {
            info!(gists = model.gists().len(), "gist menu refreshed");
        } else {
            warn!(message = %model.message, "gist menu unavailable");
        }
        self.cache.store(model)
    }

    /// Drop the cached menu and rebuild it.
    pub fn refresh_gist_menu(&mut self, username: &str) -> Arc<MenuModel> {
        self.cache.invalidate();
        self.fetch_gist_menu(username)
    }

    /// Raw content of a gist file. `None` when it could not be retrieved.
    pub fn fetch_file_content(&self, url: &str) -> Option<Vec<u8>> {
        self.api.fetch_raw(url)
    }

    /// When the cached menu was fetched.
    pub fn menu_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.cache.fetched_at()
    }

    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.api.rate_limit()
    }

    fn build_menu(&self, username: &str) -> MenuModel {
        if username.is_empty() {
            return MenuModel::failure(MenuFailure::NoUsername);
        }

        let response = self.api.list_gists(username);
        if !response.status_ok || response.body.is_empty() {
            return MenuModel::failure(MenuFailure::Transport);
        }

        match parse_gist_list(&response.body) {
            Ok(gists) if gists.is_empty() => MenuModel::failure(MenuFailure::Empty),
            Ok(gists) => MenuModel::success(gists),
            Err(e) => {
                warn!(error = %e, "failed to parse gist list");
                MenuModel::failure(MenuFailure::Parse)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use chrono::TimeZone;

    use super::*;
    use crate::cache::clock::ManualClock;
    use crate::github::{GistFileRecord, GistListResponse, GistRecord};
    use crate::testing::FakeApi;

    const ONE_GIST: &str = r#"[{"description":"d1","files":{"a.txt":{"raw_url":"http://x/a"}}}]"#;

    fn service_with(api: FakeApi) -> (GistMenuService<FakeApi, Rc<ManualClock>>, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        ));
        let service =
            GistMenuService::with_cache(api, MenuCache::with_clock(Rc::clone(&clock)));
        (service, clock)
    }

    #[test]
    fn test_success() {
        let (mut service, _clock) = service_with(FakeApi::new().with_list_body(ONE_GIST));

        let model = service.fetch_gist_menu("octocat");
        assert!(model.success);
        assert_eq!(model.message, "Success");
        assert_eq!(
            model.gists(),
            [GistRecord {
                description: "d1".to_string(),
                files: vec![GistFileRecord::new("a.txt", "http://x/a")],
            }]
        );
        assert_eq!(
            service.api().last_username.borrow().as_deref(),
            Some("octocat")
        );
    }

    #[test]
    fn test_empty_username_skips_network() {
        let (mut service, _clock) = service_with(FakeApi::new().with_list_body(ONE_GIST));

        let model = service.fetch_gist_menu("");
        assert!(!model.success);
        assert_eq!(model.message, "No username supplied...");
        assert_eq!(model.failure, Some(MenuFailure::NoUsername));
        assert_eq!(service.api().list_calls.get(), 0);
    }

    #[test]
    fn test_whitespace_username_is_empty() {
        let (mut service, _clock) = service_with(FakeApi::new().with_list_body(ONE_GIST));

        let model = service.fetch_gist_menu("   ");
        assert_eq!(model.failure, Some(MenuFailure::NoUsername));
        assert_eq!(service.api().list_calls.get(), 0);
    }

    #[test]
    fn test_empty_list() {
        let (mut service, _clock) = service_with(FakeApi::new().with_list_body("[]"));

        let model = service.fetch_gist_menu("octocat");
        assert!(!model.success);
        assert_eq!(model.message, "No gists available...");
        assert!(model.gists.is_none());
    }

    #[test]
    fn test_no_valid_files_collapses_to_empty() {
        let body = r#"[{"description":"d1","files":{"a.txt":{"raw_url":""}}}]"#;
        let (mut service, _clock) = service_with(FakeApi::new().with_list_body(body));

        let model = service.fetch_gist_menu("octocat");
        assert_eq!(model.message, "No gists available...");
    }

    #[test]
    fn test_server_error() {
        // A valid body behind a 500 must not be parsed into a menu
        let (mut service, _clock) = service_with(FakeApi::new().with_list_error(ONE_GIST));

        let model = service.fetch_gist_menu("octocat");
        assert!(!model.success);
        assert_eq!(model.message, "Internal error...");
        assert_eq!(model.failure, Some(MenuFailure::Transport));
    }

    #[test]
    fn test_empty_body() {
        let (mut service, _clock) = service_with(FakeApi::new().with_list_body(""));

        let model = service.fetch_gist_menu("octocat");
        assert_eq!(model.failure, Some(MenuFailure::Transport));
    }

    #[test]
    fn test_malformed_json() {
        let (mut service, _clock) =
            service_with(FakeApi::new().with_list_body(r#"{"message":"Not Found"}"#));

        let model = service.fetch_gist_menu("octocat");
        assert_eq!(model.message, "Internal error...");
        assert_eq!(model.failure, Some(MenuFailure::Parse));
    }

    #[test]
    fn test_second_call_within_window_uses_cache() {
        let (mut service, clock) = service_with(FakeApi::new().with_list_body(ONE_GIST));

        let first = service.fetch_gist_menu("octocat");
        clock.advance(Duration::from_secs(60));
        let second = service.fetch_gist_menu("octocat");

        assert_eq!(service.api().list_calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_refetch_after_window() {
        let (mut service, clock) = service_with(FakeApi::new().with_list_body(ONE_GIST));

        let first = service.fetch_gist_menu("octocat");
        clock.advance(STALENESS_WINDOW);
        service.api().set_list(GistListResponse {
            body: "[]".to_string(),
            status_ok: true,
        });
        let second = service.fetch_gist_menu("octocat");

        assert_eq!(service.api().list_calls.get(), 2);
        assert!(first.success);
        assert!(!second.success);
    }

    #[test]
    fn test_failures_are_cached() {
        let (mut service, clock) = service_with(FakeApi::new().with_list_error(""));

        service.fetch_gist_menu("octocat");
        clock.advance(Duration::from_secs(5 * 60));
        let model = service.fetch_gist_menu("octocat");

        assert_eq!(service.api().list_calls.get(), 1);
        assert_eq!(model.failure, Some(MenuFailure::Transport));
    }

    #[test]
    fn test_refresh_bypasses_cache() {
        let (mut service, _clock) = service_with(FakeApi::new().with_list_body(ONE_GIST));

        let first = service.fetch_gist_menu("octocat");
        let second = service.refresh_gist_menu("octocat");

        assert_eq!(service.api().list_calls.get(), 2);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fetched_at_tracks_store() {
        let (mut service, clock) = service_with(FakeApi::new().with_list_body(ONE_GIST));
        assert!(service.menu_fetched_at().is_none());

        service.fetch_gist_menu("octocat");
        assert_eq!(service.menu_fetched_at(), Some(clock.now()));
    }

    #[test]
    fn test_fetch_file_content_passthrough() {
        let api = FakeApi::new().with_raw("http://x/a", b"hello");
        let (service, _clock) = service_with(api);

        assert_eq!(
            service.fetch_file_content("http://x/a").as_deref(),
            Some(&b"hello"[..])
        );
        assert!(service.fetch_file_content("http://x/missing").is_none());
        assert_eq!(service.api().raw_calls.get(), 2);
    }
}
