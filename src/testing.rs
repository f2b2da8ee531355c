//! Test doubles for the browser seams

use std::cell::RefCell;
use std::collections::VecDeque;
use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;
use crate::error::{AppError, AppResult, HttpError};
use crate::models::Profile;
use crate::services::http::{HttpClient, HttpRequest, HttpResponse};
use crate::services::navigation::Navigator;
use crate::services::storage::KeyValueStore;
use crate::state::ProfileSink;

type Reply = Result<HttpResponse, HttpError>;

enum Scripted {
    Now(Reply),
    Later(oneshot::Receiver<Reply>),
}

/// Replies are handed out in the order they were scripted
#[derive(Default)]
pub struct MockHttp {
    replies: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Now(Ok(HttpResponse::new(status, body))));
    }

    pub fn fail(&self, error: HttpError) {
        self.replies.borrow_mut().push_back(Scripted::Now(Err(error)));
    }

    /// Reply that stays pending until the returned sender fires
    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Later(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpClient for MockHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.borrow_mut().push(request);
        let next = self.replies.borrow_mut().pop_front();
        match next {
            Some(Scripted::Now(reply)) => reply,
            Some(Scripted::Later(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(HttpError::NoResponse("gate dropped".into()))),
            None => Err(HttpError::NoResponse("no scripted reply".into())),
        }
    }
}

#[derive(Default)]
pub struct MockNavigator {
    replaced: RefCell<Vec<String>>,
}

impl MockNavigator {
    pub fn replaced(&self) -> Vec<String> {
        self.replaced.borrow().clone()
    }
}

impl Navigator for MockNavigator {
    fn replace(&self, path: &str) -> AppResult<()> {
        self.replaced.borrow_mut().push(path.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    profiles: RefCell<Vec<Profile>>,
}

impl RecordingSink {
    pub fn profiles(&self) -> Vec<Profile> {
        self.profiles.borrow().clone()
    }
}

impl ProfileSink for RecordingSink {
    fn set_profile(&self, profile: Profile) {
        self.profiles.borrow_mut().push(profile);
    }
}

/// Storage that refuses every write, like a full or locked-down localStorage
#[derive(Default)]
pub struct RefusingStore;

impl KeyValueStore for RefusingStore {
    fn get_item(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Storage(format!("Could not write '{}' to localStorage", key)))
    }

    fn remove_item(&self, _key: &str) -> AppResult<()> {
        Ok(())
    }
}
