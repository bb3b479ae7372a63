// Test doubles shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::github::{GistApi, GistListResponse};

/// In-memory stand-in for the GitHub API that counts calls.
#[derive(Debug, Default)]
pub struct FakeApi {
    list: RefCell<Option<GistListResponse>>,
    raw: RefCell<HashMap<String, Vec<u8>>>,
    pub list_calls: Cell<usize>,
    pub raw_calls: Cell<usize>,
    pub last_username: RefCell<Option<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer list requests with HTTP 200 and this body.
    pub fn with_list_body(self, body: &str) -> Self {
        self.set_list(GistListResponse {
            body: body.to_string(),
            status_ok: true,
        });
        self
    }

    /// Answer list requests with a non-200 status.
    pub fn with_list_error(self, body: &str) -> Self {
        self.set_list(GistListResponse {
            body: body.to_string(),
            status_ok: false,
        });
        self
    }

    pub fn with_raw(self, url: &str, content: &[u8]) -> Self {
        self.raw.borrow_mut().insert(url.to_string(), content.to_vec());
        self
    }

    pub fn set_list(&self, response: GistListResponse) {
        *self.list.borrow_mut() = Some(response);
    }
}

impl GistApi for FakeApi {
    fn list_gists(&self, username: &str) -> GistListResponse {
        self.list_calls.set(self.list_calls.get() + 1);
        *self.last_username.borrow_mut() = Some(username.to_string());
        self.list.borrow().clone().unwrap_or(GistListResponse {
            body: String::new(),
            status_ok: false,
        })
    }

    fn fetch_raw(&self, url: &str) -> Option<Vec<u8>> {
        self.raw_calls.set(self.raw_calls.get() + 1);
        self.raw.borrow().get(url).cloned()
    }
}
